use maud::{Markup, html};
use maudit::route::prelude::*;

use crate::config::SiteConfig;
use crate::layout::{SeoMeta, TrapBackground, layout};
use crate::router::{Section, SitePage};

use super::render_route;

#[route("/resume")]
pub struct Resume;

impl Route for Resume {
    fn render(&self, ctx: &mut PageContext) -> impl Into<RenderResult> {
        render_route(&SitePage::Resume, ctx)
    }
}

/// The embedded resume, or a notice that it isn't available, depending on
/// [`ResumeConfig::embed`](crate::config::ResumeConfig::embed).
pub fn resume_page(site: &SiteConfig) -> Markup {
    let resume = &site.resume;

    let (main, seo) = if resume.embed {
        (
            html! {
                article.content-card.centered {
                    h1.page-title { "Resume" }
                    div.document-frame {
                        iframe src=(resume.document) title=(resume.title) {}
                    }
                    div.button-row {
                        a.button href=(Section::Home.href()) { "Return to Home" }
                    }
                }
            },
            SeoMeta::titled("Resume"),
        )
    } else {
        (
            html! {
                article.content-card.centered {
                    div.not-found-icon aria-hidden="true" { "📄" }
                    h1.page-title { "Resume Not Found" }
                    p.message {
                        "The resume PDF could not be loaded. The file may be missing or empty. "
                        "Please check back later or contact me directly for my current resume."
                    }
                    a.button href=(Section::Home.href()) { "Return to Home" }
                }
            },
            SeoMeta {
                title: "Resume Not Found".to_string(),
                noindex: true,
                ..Default::default()
            },
        )
    };

    layout(
        main,
        &SitePage::Resume,
        TrapBackground::default(),
        site,
        Some(seo),
    )
}
