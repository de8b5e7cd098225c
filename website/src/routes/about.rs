use maud::{Markup, html};
use maudit::route::prelude::*;

use crate::config::SiteConfig;
use crate::layout::{SeoMeta, TrapBackground, layout};
use crate::router::SitePage;

use super::render_route;

#[route("/about")]
pub struct About;

impl Route for About {
    fn render(&self, ctx: &mut PageContext) -> impl Into<RenderResult> {
        render_route(&SitePage::About, ctx)
    }
}

pub fn about_page(site: &SiteConfig) -> Markup {
    layout(
        html! {
            article.content-card {
                h1.page-title { "About Me" }
                div.about-content {
                    img.profile-image src="/images/ion-trap-chip.jpg" alt="A surface ion trap chip";
                    p {
                        "Hello! I'm " (site.owner) ", a 3rd year PhD candidate in the group of Prof. Karan Mehta ("
                        a href="https://sites.coecis.cornell.edu/mehta/" target="_blank" rel="noopener noreferrer" { "PQE group" }
                        "), Cornell University. I specialize in quantum technologies, with a focus on trapped ion quantum computing and quantum sensing applications."
                    }
                    p {
                        "With a background in applied physics and electrical engineering, I develop systems that control and manipulate individual atoms for quantum information processing. "
                        "The ion trap chip you see in the background is the type of device my lab uses to trap calcium ions for quantum computing experiments."
                    }
                    h2 { "Research Interests" }
                    p {
                        "My research interests span control of quantum systems, integrated photonics and particularly designing photonic elements and devices for scalable quantum information processing. "
                        "I'm particularly fascinated by the intersection of quantum physics, electrical engineering, and computer science. "
                        "I have worked with multiple foundries including Lincoln Labs, ASTAR, and AIM photonics for tape outs of ion trap and photonic chips. "
                        "I characterize and test the chips in close talks with the foundry to aid in the process development with active feedback. "
                        "I enjoy solving problems and getting into the weeds of any task needed to reach my group's goals - demonstrating new operations for scalable trapped ion quantum computing. "
                        "Our current active goal is to demonstrate fast ground state cooling of calcium atoms in a phase stable standing wave."
                    }
                }
            }
        },
        &SitePage::About,
        TrapBackground::default(),
        site,
        Some(SeoMeta::titled("About Me")),
    )
}
