use maud::{DOCTYPE, PreEscaped, html};
use maudit::route::prelude::*;

use crate::config::SITE;
use crate::layout::SeoMeta;
use crate::router::{SitePage, redirect_script};

/// Served by static hosts for every path they don't have a file for. Sends the visitor to the
/// page the path resolves to, which is the home page for anything unrecognized.
#[route("404.html")]
pub struct NotFound;

impl Route for NotFound {
    fn render(&self, _: &mut PageContext) -> RenderResult {
        let home = SitePage::Home.href();
        let seo = SeoMeta {
            title: SITE.owner.to_string(),
            noindex: true,
            ..Default::default()
        };

        html! {
            (DOCTYPE)
            html lang="en" {
                head {
                    meta charset="utf-8";
                    (seo.render(SITE.owner))
                    noscript {
                        meta http-equiv="refresh" content=(format!("0;url={home}"));
                    }
                    script { (PreEscaped(redirect_script())) }
                }
                body {
                    a href=(home) { "Continue to the home page" }
                }
            }
        }
        .into()
    }
}
