use std::error::Error;

use maud::Markup;
use maudit::route::PageContext;

use crate::config::{SITE, SiteConfig};
use crate::layout::include_stylesheet;
use crate::router::{SitePage, resolve};

mod index;
pub use index::{Index, home_page, trap_position_css, trap_positions};
mod about;
pub use about::{About, about_page};
mod projects;
pub use projects::{ProjectNotFound, ProjectPage, ProjectsIndex, project_page, projects_page};
mod misc;
pub use misc::{MiscIndex, TopicPage, misc_page, topic_page};
mod resume;
pub use resume::{Resume, resume_page};

#[path = "404.rs"]
mod not_found;
pub use not_found::NotFound;

/// Renders the full document for `page`.
pub fn render_page(page: &SitePage, site: &SiteConfig) -> Markup {
    match page {
        SitePage::Home => home_page(site),
        SitePage::About => about_page(site),
        SitePage::Projects => projects_page(site),
        SitePage::Project(id) => project_page(id, site),
        SitePage::Misc => misc_page(site),
        SitePage::Topic(id) => topic_page(id, site),
        SitePage::Resume => resume_page(site),
    }
}

/// Renders `page` during the build, with the site stylesheet attached.
fn render_route(page: &SitePage, ctx: &mut PageContext) -> Result<Markup, Box<dyn Error>> {
    include_stylesheet(ctx)?;
    Ok(render_page(page, &SITE))
}

/// Renders whatever page a request for `path` ends up showing.
pub fn render_path(path: &str, site: &SiteConfig) -> Markup {
    render_page(&resolve(path).page, site)
}

#[cfg(test)]
mod tests {
    use lol_html::{RewriteStrSettings, element, rewrite_str, text};

    use super::*;
    use crate::config::ResumeConfig;

    /// Number of elements matching `selector`, and their text.
    fn select(html: &str, selector: &str) -> (usize, String) {
        let mut count = 0;
        let mut content = String::new();

        rewrite_str(
            html,
            RewriteStrSettings {
                element_content_handlers: vec![
                    element!(selector, |_| {
                        count += 1;
                        Ok(())
                    }),
                    text!(selector, |chunk| {
                        content.push_str(chunk.as_str());
                        Ok(())
                    }),
                ],
                ..RewriteStrSettings::new()
            },
        )
        .unwrap();

        (count, content)
    }

    fn attribute(html: &str, selector: &str, name: &str) -> Vec<String> {
        let mut values = Vec::new();

        rewrite_str(
            html,
            RewriteStrSettings {
                element_content_handlers: vec![element!(selector, |el| {
                    values.extend(el.get_attribute(name));
                    Ok(())
                })],
                ..RewriteStrSettings::new()
            },
        )
        .unwrap();

        values
    }

    fn heading(html: &str) -> String {
        select(html, "h1").1
    }

    #[test]
    fn test_project_detail_shows_title_and_gallery() {
        let html = render_path("/projects/artiq-control", &SITE).into_string();

        assert_eq!(
            heading(&html),
            "Precise Control of Trapped Ion Experiments using ARTIQ"
        );
        assert_eq!(select(&html, ".gallery img").0, 3);
        assert_eq!(
            attribute(&html, ".gallery a", "target"),
            vec!["_blank"; 3]
        );
        assert!(select(&html, "h2").1.contains("Key Achievements"));
    }

    #[test]
    fn test_unknown_project_shows_not_found_view() {
        let html = render_path("/projects/does-not-exist", &SITE).into_string();

        assert_eq!(heading(&html), "Project Not Found");
        assert_eq!(select(&html, ".gallery").0, 0);
        assert_eq!(attribute(&html, "a.back-button", "href"), vec!["/projects/"]);
        assert_eq!(
            attribute(&html, "meta[name=robots]", "content"),
            vec!["noindex"]
        );
    }

    #[test]
    fn test_topic_detail_shows_captioned_figures() {
        let html = render_path("/misc/origami", &SITE).into_string();

        assert_eq!(heading(&html), "Origami: The Art of Paper Folding");
        assert_eq!(select(&html, "figure").0, 3);
        assert_eq!(select(&html, "figure figcaption").0, 3);
        assert_eq!(attribute(&html, "a.back-button", "href"), vec!["/misc/"]);
    }

    #[test]
    fn test_unknown_topic_falls_back_to_first_topic() {
        let fallback = render_path("/misc/unknown-id", &SITE).into_string();
        let first = render_path("/misc/ion-trap-humor", &SITE).into_string();

        assert_eq!(heading(&fallback), "Lighter Side of Quantum Physics");
        assert_eq!(fallback, first);
    }

    #[test]
    fn test_topic_pages_tint_the_background() {
        let topic = render_path("/misc/origami", &SITE).into_string();
        let list = render_path("/misc", &SITE).into_string();

        assert!(topic.contains("rgba(100, 0, 255, 0.03)"));
        assert!(!list.contains("rgba(100, 0, 255, 0.03)"));
    }

    #[test]
    fn test_unknown_path_renders_home() {
        let html = render_path("/nonexistent/path", &SITE).into_string();

        assert_eq!(html, render_path("/", &SITE).into_string());
        assert_eq!(heading(&html), SITE.owner);
        assert_eq!(select(&html, ".ions a.ion").0, 4);
    }

    #[test]
    fn test_home_has_no_nav_but_sections_do() {
        let home = render_path("/", &SITE).into_string();
        let about = render_path("/about", &SITE).into_string();

        assert_eq!(select(&home, "nav").0, 0);
        assert_eq!(select(&about, "nav").0, 2);
        assert_eq!(select(&about, "[aria-current=page]").1, "About");
    }

    #[test]
    fn test_list_pages_link_every_entry() {
        let projects = render_path("/projects", &SITE).into_string();
        assert_eq!(
            attribute(&projects, "a.card", "href"),
            vec![
                "/projects/integrated-atomic-fluorescence/",
                "/projects/artiq-control/",
                "/projects/ion-trap-photonics/",
                "/projects/circular-polarization/",
            ]
        );
        assert_eq!(select(&projects, ".view-more").0, 4);

        let misc = render_path("/misc", &SITE).into_string();
        assert_eq!(
            attribute(&misc, "a.card", "href"),
            vec!["/misc/ion-trap-humor/", "/misc/origami/"]
        );
        assert!(select(&misc, "p.intro").1.starts_with("Welcome to the lighter side"));
    }

    #[test]
    fn test_resume_shows_notice_without_document() {
        let site = SiteConfig {
            resume: ResumeConfig {
                embed: false,
                ..SITE.resume
            },
            ..SITE
        };
        let html = render_path("/resume", &site).into_string();

        assert_eq!(heading(&html), "Resume Not Found");
        assert_eq!(select(&html, "iframe").0, 0);
        assert!(select(&html, "p.message").1.contains("could not be loaded"));
        assert_eq!(attribute(&html, "a.button", "href"), vec!["/"]);
    }

    #[test]
    fn test_resume_embeds_document() {
        let site = SiteConfig {
            resume: ResumeConfig {
                embed: true,
                ..SITE.resume
            },
            ..SITE
        };
        let html = render_path("/resume", &site).into_string();

        assert_eq!(heading(&html), "Resume");
        assert_eq!(
            attribute(&html, "iframe", "src"),
            vec!["/placeholder_resume.pdf"]
        );
        assert_eq!(attribute(&html, "a.button", "href"), vec!["/"]);
    }

    #[test]
    fn test_canonical_links_follow_base_url() {
        let site = SiteConfig {
            base_url: Some("https://example.com"),
            ..SITE
        };

        let about = render_path("/about", &site).into_string();
        assert_eq!(
            attribute(&about, "link[rel=canonical]", "href"),
            vec!["https://example.com/about/"]
        );

        let missing = render_path("/projects/nope", &site).into_string();
        assert!(attribute(&missing, "link[rel=canonical]", "href").is_empty());
    }
}
