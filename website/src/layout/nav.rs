use maud::{Markup, html};

use crate::router::Section;

pub struct ContactItem {
    pub label: &'static str,
    pub content: &'static str,
    pub link: &'static str,
}

pub const CONTACTS: [ContactItem; 5] = [
    ContactItem {
        label: "Email",
        content: "vn95@cornell.edu",
        link: "mailto:vn95@cornell.edu",
    },
    ContactItem {
        label: "LinkedIn",
        content: "Profile",
        link: "https://www.linkedin.com/in/vighnesh-natarajan-68923a241/",
    },
    ContactItem {
        label: "GitHub",
        content: "vighneshn",
        link: "https://github.com/vighneshn",
    },
    ContactItem {
        label: "Google Scholar",
        content: "Profile",
        link: "https://scholar.google.com/citations?hl=en&user=Uy8K9XEAAAAJ",
    },
    ContactItem {
        label: "Location",
        content: "Ithaca, NY",
        link: "https://www.google.com/maps/place/Cornell+University/@42.4534492,-76.4760776,17z",
    },
];

/// Electrode strip at the top of every page. The current section is marked and isn't a link.
pub fn page_nav(current: Section) -> Markup {
    html! {
        nav.page-nav aria-label="Sections" {
            @for section in Section::ALL {
                @if section == current {
                    span.nav-electrode.active aria-current="page" { (section.label()) }
                } @else {
                    a.nav-electrode href=(section.href()) { (section.label()) }
                }
            }
        }
    }
}

/// Electrode strip at the bottom of every page, linking to the contact channels.
pub fn contact_nav() -> Markup {
    html! {
        nav.contact-nav aria-label="Contact" {
            @for item in &CONTACTS {
                @if item.link.starts_with("mailto:") {
                    a.contact-electrode href=(item.link) {
                        span.contact-label { (item.label) }
                        span.contact-content { (item.content) }
                    }
                } @else {
                    a.contact-electrode href=(item.link) target="_blank" rel="noopener noreferrer" {
                        span.contact-label { (item.label) }
                        span.contact-content { (item.content) }
                    }
                }
            }
        }
    }
}
