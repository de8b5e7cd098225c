use std::fmt::Write;

use maud::{Markup, PreEscaped, html};
use maudit::route::prelude::*;

use crate::config::SiteConfig;
use crate::layout::{SeoMeta, TrapBackground, layout};
use crate::router::{Section, SitePage, redirect_script};

use super::render_route;

#[route("/")]
pub struct Index;

impl Route for Index {
    fn render(&self, ctx: &mut PageContext) -> impl Into<RenderResult> {
        render_route(&SitePage::Home, ctx)
    }
}

/// Sections reachable from the trap buttons, left to right.
const TRAPPED: [Section; 4] = [
    Section::About,
    Section::Projects,
    Section::Misc,
    Section::Resume,
];

/// Viewport widths above which the next, wider trap spacing applies.
const BREAKPOINTS: [u32; 3] = [480, 768, 1200];

/// Horizontal offsets of the trap buttons from the center of the page, in pixels.
pub fn trap_positions(viewport_width: u32) -> [f32; 4] {
    match viewport_width {
        w if w > 1200 => [-240.0, -80.0, 80.0, 240.0],
        w if w > 768 => [-180.0, -60.0, 60.0, 180.0],
        w if w > 480 => [-135.0, -45.0, 45.0, 135.0],
        _ => [-127.5, -42.5, 42.5, 127.5],
    }
}

/// Media queries placing the trap buttons, one block per breakpoint, so the browser moves them on
/// resize.
pub fn trap_position_css() -> String {
    let mut css = String::new();
    push_trap_rules(&mut css, trap_positions(0));

    for breakpoint in BREAKPOINTS {
        let _ = writeln!(css, "@media (min-width: {}px) {{", breakpoint + 1);
        push_trap_rules(&mut css, trap_positions(breakpoint + 1));
        css.push_str("}\n");
    }

    css
}

fn push_trap_rules(css: &mut String, positions: [f32; 4]) {
    for (i, x) in positions.iter().enumerate() {
        let _ = writeln!(
            css,
            ".ions .ion:nth-child({}) {{ transform: translateX({x}px); }}",
            i + 1
        );
    }
}

pub fn home_page(site: &SiteConfig) -> Markup {
    layout(
        html! {
            div.home {
                h1.name-title { (site.owner) }
                div.ions {
                    @for section in TRAPPED {
                        a.ion href=(section.href()) {
                            span.ion-label { (section.label()) }
                        }
                    }
                }
            }

            details.info {
                summary aria-label="What is this picture?" { "i" }
                div.info-tooltip {
                    strong { "Want to understand this image?" }
                    br;
                    "This website is designed based on how a linear ion trap would look. The rectangles are metal electrodes and the buttons are the trapped ions."
                }
            }

            style { (PreEscaped(trap_position_css())) }
            script { (PreEscaped(redirect_script())) }
        },
        &SitePage::Home,
        TrapBackground::default(),
        site,
        Some(SeoMeta::titled(site.owner)),
    )
}
