mod nav;
mod trap;

use maud::{DOCTYPE, Markup, html};
use maudit::errors::AssetError;
use maudit::maud::generator;
use maudit::route::PageContext;
use nav::{contact_nav, page_nav};
pub use trap::TrapBackground;

use crate::config::SiteConfig;
use crate::router::{Section, SitePage};

/// Site stylesheet, relative to the crate root.
pub const STYLESHEET: &str = "assets/style.css";

/// Hands the stylesheet to maudit, which hashes it into the output and links it from the page
/// head.
pub fn include_stylesheet(ctx: &mut PageContext) -> Result<(), AssetError> {
    ctx.assets.include_style(STYLESHEET)?;
    Ok(())
}

pub struct SeoMeta {
    pub title: String,
    pub description: Option<String>,
    pub canonical_url: Option<String>,
    /// Keep the page out of search results, for the not-found views.
    pub noindex: bool,
}

impl Default for SeoMeta {
    fn default() -> Self {
        Self {
            title: "Vighnesh Natarajan".to_string(),
            description: Some(
                "PhD candidate at Cornell University working on trapped ion quantum computing and integrated photonics."
                    .to_string(),
            ),
            canonical_url: None,
            noindex: false,
        }
    }
}

impl SeoMeta {
    pub fn titled(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            ..Default::default()
        }
    }

    pub fn render(&self, owner: &str) -> Markup {
        let formatted_title = if self.title == owner {
            self.title.clone()
        } else {
            format!("{} - {}", self.title, owner)
        };

        let description = self
            .description
            .clone()
            .or_else(|| SeoMeta::default().description)
            .unwrap_or_default();

        html! {
            title { (formatted_title) }
            meta name="description" content=(description);
            @if self.noindex {
                meta name="robots" content="noindex";
            }

            meta property="og:title" content=(formatted_title);
            meta property="og:description" content=(description);
            meta property="og:type" content="website";
            @if let Some(canonical_url) = &self.canonical_url {
                meta property="og:url" content=(canonical_url);
                link rel="canonical" href=(canonical_url);
            }
        }
    }
}

/// Wraps a page's content in the document shell: background, and on every page but home, the
/// section nav at the top and the contact bar at the bottom.
pub fn layout(
    main: Markup,
    page: &SitePage,
    background: TrapBackground,
    site: &SiteConfig,
    seo: Option<SeoMeta>,
) -> Markup {
    let mut seo_data = seo.unwrap_or_default();
    if seo_data.canonical_url.is_none() && !seo_data.noindex {
        seo_data.canonical_url = site.canonical_url(&page.href());
    }

    let section = page.section();

    html! {
        (DOCTYPE)
        html lang="en" {
            head {
                meta charset="utf-8";
                meta name="viewport" content="width=device-width, initial-scale=1";
                (generator())
                (seo_data.render(site.owner))
            }
            body {
                div.page {
                    (background)
                    @if section != Section::Home {
                        (page_nav(section))
                    }
                    main.page-main {
                        (main)
                    }
                    @if section != Section::Home {
                        (contact_nav())
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use std::path::Path;

    use super::*;
    use crate::config::SITE;

    #[test]
    fn test_stylesheet_is_an_asset() {
        let path = Path::new(env!("CARGO_MANIFEST_DIR")).join(STYLESHEET);
        assert!(path.is_file(), "{} is missing", path.display());
    }

    #[test]
    fn test_layout_leaves_stylesheet_link_to_maudit() {
        let html = layout(
            html! { p { "body" } },
            &SitePage::About,
            TrapBackground::default(),
            &SITE,
            None,
        )
        .into_string();

        assert!(!html.contains("rel=\"stylesheet\""));
        assert!(!html.contains("style.css"));
    }
}
