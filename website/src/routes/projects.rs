use log::{debug, info};
use maud::{Markup, html};
use maudit::route::prelude::*;

use crate::config::SiteConfig;
use crate::content::{Lookup, MISSING_PROJECT_SLUG, PROJECTS, ProjectEntry, paragraphs};
use crate::layout::{SeoMeta, TrapBackground, layout};
use crate::router::{Section, SitePage};

use super::render_route;

#[route("/projects")]
pub struct ProjectsIndex;

impl Route for ProjectsIndex {
    fn render(&self, ctx: &mut PageContext) -> impl Into<RenderResult> {
        render_route(&SitePage::Projects, ctx)
    }
}

#[route("/projects/[id]")]
pub struct ProjectPage;

#[derive(Params, Clone)]
pub struct ProjectParams {
    pub id: String,
}

impl Route<ProjectParams> for ProjectPage {
    fn pages(&self, _: &mut DynamicRouteContext) -> Pages<ProjectParams> {
        info!(
            target: "content",
            "{} pages from the `{}` registry, unknown ids: {:?}",
            PROJECTS.entries().len(),
            PROJECTS.name(),
            PROJECTS.policy()
        );

        PROJECTS
            .ids()
            .map(|id| Page::from_params(ProjectParams { id: id.to_string() }))
            .collect()
    }

    fn render(&self, ctx: &mut PageContext) -> impl Into<RenderResult> {
        let ProjectParams { id } = ctx.params::<ProjectParams>();
        render_route(&SitePage::Project(id), ctx)
    }
}

/// Where the fallback script sends requests for project ids that don't exist.
#[route("/projects/not-found")]
pub struct ProjectNotFound;

impl Route for ProjectNotFound {
    fn render(&self, ctx: &mut PageContext) -> impl Into<RenderResult> {
        render_route(&SitePage::Project(MISSING_PROJECT_SLUG.to_string()), ctx)
    }
}

pub fn projects_page(site: &SiteConfig) -> Markup {
    layout(
        html! {
            article.content-card {
                h1.page-title { "Research Projects" }
                div.card-list {
                    @for project in PROJECTS.entries() {
                        a.card href=(SitePage::Project(project.id.to_string()).href()) {
                            h2 { (project.title) }
                            p { (project.card.summary) }
                            p { (project.card.highlights_label) }
                            ul {
                                @for highlight in project.card.highlights {
                                    li { (highlight) }
                                }
                            }
                            span.view-more { "View Details" }
                        }
                    }
                }
            }
        },
        &SitePage::Projects,
        TrapBackground::default(),
        site,
        Some(SeoMeta::titled("Research Projects")),
    )
}

pub fn project_page(id: &str, site: &SiteConfig) -> Markup {
    match PROJECTS.lookup(id) {
        Lookup::Found(project) | Lookup::Fallback(project) => layout(
            project_detail(project),
            &SitePage::Project(project.id.to_string()),
            TrapBackground::default(),
            site,
            Some(SeoMeta {
                title: project.title.to_string(),
                description: Some(project.card.summary.to_string()),
                ..Default::default()
            }),
        ),
        Lookup::Missing => {
            debug!(target: "routes", "no project with id `{id}`, rendering the not-found view");

            layout(
                project_not_found(),
                &SitePage::Project(MISSING_PROJECT_SLUG.to_string()),
                TrapBackground::default(),
                site,
                Some(SeoMeta {
                    title: "Project Not Found".to_string(),
                    noindex: true,
                    ..Default::default()
                }),
            )
        }
    }
}

fn back_to_projects() -> Markup {
    html! {
        a.back-button href=(Section::Projects.href()) { "← Back to Projects" }
    }
}

fn project_detail(project: &ProjectEntry) -> Markup {
    html! {
        (back_to_projects())
        article.content-card.detail {
            h1.page-title { (project.title) }
            div.detail-content {
                @for paragraph in paragraphs(project.description) {
                    p { (paragraph) }
                }
                @if let Some(reference) = &project.reference {
                    p {
                        (reference.lead) " "
                        a href=(reference.href) target="_blank" rel="noopener noreferrer" { (reference.title) }
                    }
                }

                h2 { "Key Achievements" }
                ul {
                    @for achievement in project.achievements {
                        li { (achievement) }
                    }
                }

                h2 { "Gallery" }
                div.gallery {
                    @for (i, image) in project.images.iter().enumerate() {
                        a.gallery-item href=(image) target="_blank" rel="noopener noreferrer" {
                            img src=(image) alt=(format!("{}, image {}", project.title, i + 1)) loading="lazy";
                        }
                    }
                }
            }
        }
    }
}

fn project_not_found() -> Markup {
    html! {
        (back_to_projects())
        article.content-card.detail {
            h1.page-title { "Project Not Found" }
            div.detail-content {
                p { "Sorry, the project you're looking for doesn't exist." }
            }
        }
    }
}
