use ion_trap_portfolio::config::SITE;
use ion_trap_portfolio::content;
use ion_trap_portfolio::routes::*;
use maudit::{BuildOutput, content_sources, coronate, routes};

fn main() -> Result<BuildOutput, Box<dyn std::error::Error>> {
    content::validate()?;

    coronate(
        routes![
            Index,
            About,
            ProjectsIndex,
            ProjectPage,
            ProjectNotFound,
            MiscIndex,
            TopicPage,
            Resume,
            NotFound
        ],
        content_sources![],
        SITE.build_options(),
    )
}
