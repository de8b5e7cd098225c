use log::{debug, info};
use maud::{Markup, html};
use maudit::route::prelude::*;

use crate::config::SiteConfig;
use crate::content::{Lookup, TOPICS, TopicEntry, paragraphs};
use crate::layout::{SeoMeta, TrapBackground, layout};
use crate::router::{Section, SitePage};

use super::render_route;

/// Faint violet laid over the trap on topic pages.
const TOPIC_TINT: &str = "rgba(100, 0, 255, 0.03)";

#[route("/misc")]
pub struct MiscIndex;

impl Route for MiscIndex {
    fn render(&self, ctx: &mut PageContext) -> impl Into<RenderResult> {
        render_route(&SitePage::Misc, ctx)
    }
}

#[route("/misc/[id]")]
pub struct TopicPage;

#[derive(Params, Clone)]
pub struct TopicParams {
    pub id: String,
}

impl Route<TopicParams> for TopicPage {
    fn pages(&self, _: &mut DynamicRouteContext) -> Pages<TopicParams> {
        info!(
            target: "content",
            "{} pages from the `{}` registry, unknown ids: {:?}",
            TOPICS.entries().len(),
            TOPICS.name(),
            TOPICS.policy()
        );

        TOPICS
            .ids()
            .map(|id| Page::from_params(TopicParams { id: id.to_string() }))
            .collect()
    }

    fn render(&self, ctx: &mut PageContext) -> impl Into<RenderResult> {
        let TopicParams { id } = ctx.params::<TopicParams>();
        render_route(&SitePage::Topic(id), ctx)
    }
}

pub fn misc_page(site: &SiteConfig) -> Markup {
    layout(
        html! {
            article.content-card {
                h1.page-title { "Miscellaneous Topics" }
                div.card-list {
                    p.intro {
                        "Welcome to the lighter side of our website! Here you'll find a mix of humor from the world of quantum physics and the fascinating art of origami. "
                        "These topics showcase the fun and creative aspects that complement the technical content."
                    }
                    @for topic in TOPICS.entries() {
                        a.card href=(SitePage::Topic(topic.id.to_string()).href()) {
                            h2 { (topic.title) }
                            p { (topic.card.summary) }
                            div.card-image {
                                img src=(topic.card.preview.src) alt=(topic.card.preview.caption) loading="lazy";
                            }
                            p { (topic.card.bullets_label) }
                            ul {
                                @for bullet in topic.card.bullets {
                                    li { (bullet) }
                                }
                            }
                            span.view-more { "View Details" }
                        }
                    }
                }
            }
        },
        &SitePage::Misc,
        TrapBackground::default(),
        site,
        Some(SeoMeta::titled("Miscellaneous Topics")),
    )
}

/// Renders the topic `id`, or the first topic when there is no such topic.
pub fn topic_page(id: &str, site: &SiteConfig) -> Markup {
    let lookup = TOPICS.lookup(id);
    if lookup.is_fallback() {
        debug!(target: "routes", "no topic with id `{id}`, falling back to the first topic");
    }

    match lookup {
        Lookup::Found(topic) | Lookup::Fallback(topic) => layout(
            topic_detail(topic),
            &SitePage::Topic(topic.id.to_string()),
            TrapBackground::tinted(TOPIC_TINT),
            site,
            Some(SeoMeta {
                title: topic.title.to_string(),
                description: Some(topic.card.summary.to_string()),
                ..Default::default()
            }),
        ),
        // Only reachable with an empty registry, which validation rejects.
        Lookup::Missing => misc_page(site),
    }
}

fn topic_detail(topic: &TopicEntry) -> Markup {
    html! {
        a.back-button href=(Section::Misc.href()) { "← Back to Misc" }
        article.content-card.detail {
            h1.page-title { (topic.title) }
            div.detail-content {
                @for paragraph in paragraphs(topic.description) {
                    p { (paragraph) }
                }
                p { (topic.closing_text) }
            }
            section.topic-images {
                @for image in topic.images {
                    figure {
                        img src=(image.src) alt=(image.caption) loading="lazy";
                        figcaption { (image.caption) }
                    }
                }
            }
        }
    }
}
