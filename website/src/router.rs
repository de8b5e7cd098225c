//! Maps requested paths to the pages of the site.
//!
//! Matching follows the usual client-side router rules: leading and trailing slashes are optional,
//! static segments are case-insensitive, ids are taken verbatim, and the query string and fragment
//! are ignored. A path that matches nothing resolves to the home page as a redirect.
use std::fmt::Write;

use crate::content::{Entry, Lookup, MISSING_PROJECT_SLUG, MissingPolicy, PROJECTS, Registry, TOPICS};

/// The top-level sections, in navigation order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Section {
    Home,
    About,
    Projects,
    Misc,
    Resume,
}

impl Section {
    pub const ALL: [Section; 5] = [
        Section::Home,
        Section::About,
        Section::Projects,
        Section::Misc,
        Section::Resume,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Section::Home => "Home",
            Section::About => "About",
            Section::Projects => "Projects",
            Section::Misc => "Misc",
            Section::Resume => "Resume",
        }
    }

    pub fn href(self) -> &'static str {
        match self {
            Section::Home => "/",
            Section::About => "/about/",
            Section::Projects => "/projects/",
            Section::Misc => "/misc/",
            Section::Resume => "/resume/",
        }
    }

    /// Path segment of the section, `None` for the home page.
    fn segment(self) -> Option<&'static str> {
        match self {
            Section::Home => None,
            Section::About => Some("about"),
            Section::Projects => Some("projects"),
            Section::Misc => Some("misc"),
            Section::Resume => Some("resume"),
        }
    }

    fn from_segment(segment: &str) -> Option<Section> {
        Section::ALL.into_iter().find(|section| {
            section
                .segment()
                .is_some_and(|name| name.eq_ignore_ascii_case(segment))
        })
    }

    fn page(self) -> SitePage {
        match self {
            Section::Home => SitePage::Home,
            Section::About => SitePage::About,
            Section::Projects => SitePage::Projects,
            Section::Misc => SitePage::Misc,
            Section::Resume => SitePage::Resume,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SitePage {
    Home,
    About,
    Projects,
    Project(String),
    Misc,
    Topic(String),
    Resume,
}

impl SitePage {
    pub fn section(&self) -> Section {
        match self {
            SitePage::Home => Section::Home,
            SitePage::About => Section::About,
            SitePage::Projects | SitePage::Project(_) => Section::Projects,
            SitePage::Misc | SitePage::Topic(_) => Section::Misc,
            SitePage::Resume => Section::Resume,
        }
    }

    /// URL of the page in the generated site.
    pub fn href(&self) -> String {
        match self {
            SitePage::Project(id) => format!("{}{}/", Section::Projects.href(), id),
            SitePage::Topic(id) => format!("{}{}/", Section::Misc.href(), id),
            page => page.section().href().to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Resolution {
    pub page: SitePage,
    /// The path matched nothing and was sent to the home page.
    pub redirected: bool,
}

/// Resolves a requested path to exactly one page.
///
/// Accepts legacy hash-router paths such as `#/about` and `/#/projects/artiq-control`.
pub fn resolve(path: &str) -> Resolution {
    let path = path.trim_start_matches('/');
    let path = path.strip_prefix("#/").unwrap_or(path);
    let path = path.split(['?', '#']).next().unwrap_or_default();

    let segments: Vec<&str> = path.split('/').filter(|s| !s.is_empty()).collect();

    let page = match segments.as_slice() {
        [] => Some(SitePage::Home),
        [section] => Section::from_segment(section).map(Section::page),
        [collection, id] => match Section::from_segment(collection) {
            Some(Section::Projects) => Some(SitePage::Project(id.to_string())),
            Some(Section::Misc) => Some(SitePage::Topic(id.to_string())),
            _ => None,
        },
        _ => None,
    };

    match page {
        Some(page) => Resolution {
            page,
            redirected: false,
        },
        None => Resolution {
            page: SitePage::Home,
            redirected: true,
        },
    }
}

/// Where a request for `path` lands in the generated site, once unknown paths and unknown ids
/// have been sent to their fallbacks.
pub fn static_target(path: &str) -> String {
    let Resolution { page, redirected } = resolve(path);
    if redirected {
        return SitePage::Home.href();
    }

    match page {
        SitePage::Project(id) => entry_target(&PROJECTS, &id, SitePage::Project),
        SitePage::Topic(id) => entry_target(&TOPICS, &id, SitePage::Topic),
        page => page.href(),
    }
}

/// URL of the page rendered for project ids that don't exist.
pub fn missing_project_href() -> String {
    SitePage::Project(MISSING_PROJECT_SLUG.to_string()).href()
}

fn entry_target<T: Entry>(
    registry: &Registry<T>,
    id: &str,
    to_page: fn(String) -> SitePage,
) -> String {
    match registry.lookup(id) {
        Lookup::Found(entry) => to_page(entry.id().to_string()).href(),
        Lookup::Fallback(_) | Lookup::Missing => miss_target(registry, to_page),
    }
}

/// Target of an id the registry doesn't know, as decided by its [`MissingPolicy`].
fn miss_target<T: Entry>(registry: &Registry<T>, to_page: fn(String) -> SitePage) -> String {
    match (registry.policy(), registry.first()) {
        (MissingPolicy::NotFound { slug }, _) => to_page(slug.to_string()).href(),
        (MissingPolicy::FirstEntry, Some(first)) => to_page(first.id().to_string()).href(),
        (MissingPolicy::FirstEntry, None) => SitePage::Home.href(),
    }
}

/// Lookup tables of the redirect script, built from the sections and registries.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RedirectTable {
    /// Section segment and the href it lands on.
    pub sections: Vec<(&'static str, &'static str)>,
    pub collections: Vec<CollectionTable>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CollectionTable {
    pub segment: &'static str,
    /// Href prefix of the entry pages, the id and a trailing slash follow.
    pub prefix: &'static str,
    pub known: Vec<&'static str>,
    /// Where unknown ids go.
    pub missing: String,
}

impl CollectionTable {
    fn new<T: Entry>(
        section: Section,
        registry: &Registry<T>,
        to_page: fn(String) -> SitePage,
    ) -> Self {
        Self {
            segment: section.segment().unwrap_or_default(),
            prefix: section.href(),
            known: registry.ids().collect(),
            missing: miss_target(registry, to_page),
        }
    }

    fn to_js(&self) -> String {
        let known = self
            .known
            .iter()
            .map(|id| format!("{id:?}"))
            .collect::<Vec<_>>()
            .join(",");

        format!(
            "[{:?},{{prefix:{:?},known:new Set([{known}]),missing:{:?}}}]",
            self.segment, self.prefix, self.missing
        )
    }
}

impl RedirectTable {
    pub fn site() -> Self {
        let sections = Section::ALL
            .into_iter()
            .filter_map(|section| Some((section.segment()?, section.href())))
            .collect();

        Self {
            sections,
            collections: vec![
                CollectionTable::new(Section::Projects, &PROJECTS, SitePage::Project),
                CollectionTable::new(Section::Misc, &TOPICS, SitePage::Topic),
            ],
        }
    }

    /// Where the script sends a visitor who requested `url`, following the script step by step.
    ///
    /// The tables are `Map`s and `Set`s in the script, so only their own entries ever match.
    pub fn target(&self, url: &str) -> String {
        let pathname = url.split(['?', '#']).next().unwrap_or_default();
        let hash = url.find('#').map(|i| &url[i..]).unwrap_or_default();
        let path = match hash.strip_prefix('#') {
            Some(hash_path) if hash_path.starts_with('/') => hash_path,
            _ => pathname,
        };
        let path = path.split(['?', '#']).next().unwrap_or_default();

        let segments: Vec<&str> = path.split('/').filter(|s| !s.is_empty()).collect();
        let home = SitePage::Home.href();

        match segments.as_slice() {
            [segment] => {
                let segment = segment.to_lowercase();
                self.sections
                    .iter()
                    .find(|(name, _)| *name == segment)
                    .map_or(home, |(_, href)| href.to_string())
            }
            [segment, id] => {
                let segment = segment.to_lowercase();
                match self.collections.iter().find(|c| c.segment == segment) {
                    Some(collection) if collection.known.contains(id) => {
                        format!("{}{id}/", collection.prefix)
                    }
                    Some(collection) => collection.missing.clone(),
                    None => home,
                }
            }
            _ => home,
        }
    }

    /// Script applying [`RedirectTable::target`] in the browser, for the URLs a static host
    /// can't know about: unknown paths and ids (served `404.html`) and legacy `#/…` links (served
    /// the home page).
    pub fn script(&self) -> String {
        let mut sections = String::new();
        for (segment, href) in &self.sections {
            let _ = write!(sections, "[{segment:?},{href:?}],");
        }

        let collections = self
            .collections
            .iter()
            .map(CollectionTable::to_js)
            .collect::<Vec<_>>()
            .join(",");

        format!(
            r#"(() => {{
const sections = new Map([{sections}]);
const collections = new Map([{collections}]);
let path = location.pathname;
if (location.hash.startsWith("#/")) path = location.hash.slice(1);
const segments = path.split(/[?#]/)[0].split("/").filter(Boolean);
let target = "/";
if (segments.length === 1) {{
  target = sections.get(segments[0].toLowerCase()) ?? "/";
}} else if (segments.length === 2) {{
  const collection = collections.get(segments[0].toLowerCase());
  if (collection) target = collection.known.has(segments[1]) ? `${{collection.prefix}}${{segments[1]}}/` : collection.missing;
}}
if (target !== location.pathname) location.replace(target);
}})();"#
        )
    }
}

/// The redirect script of the site, see [`RedirectTable::script`].
pub fn redirect_script() -> String {
    RedirectTable::site().script()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn page(path: &str) -> SitePage {
        let resolution = resolve(path);
        assert!(!resolution.redirected, "`{path}` should not redirect");
        resolution.page
    }

    #[test]
    fn test_resolve_static_paths() {
        assert_eq!(page("/"), SitePage::Home);
        assert_eq!(page(""), SitePage::Home);
        assert_eq!(page("/about"), SitePage::About);
        assert_eq!(page("/about/"), SitePage::About);
        assert_eq!(page("projects"), SitePage::Projects);
        assert_eq!(page("/misc"), SitePage::Misc);
        assert_eq!(page("/resume/"), SitePage::Resume);
    }

    #[test]
    fn test_resolve_parametric_paths() {
        assert_eq!(
            page("/projects/artiq-control"),
            SitePage::Project("artiq-control".into())
        );
        assert_eq!(
            page("/projects/does-not-exist/"),
            SitePage::Project("does-not-exist".into())
        );
        assert_eq!(page("/misc/origami"), SitePage::Topic("origami".into()));
    }

    #[test]
    fn test_static_segments_ignore_case_but_ids_do_not() {
        assert_eq!(page("/ABOUT"), SitePage::About);
        assert_eq!(
            page("/Projects/Artiq-Control"),
            SitePage::Project("Artiq-Control".into())
        );
    }

    #[test]
    fn test_query_and_fragment_are_ignored() {
        assert_eq!(page("/about?tab=bio"), SitePage::About);
        assert_eq!(page("/misc/origami#gallery"), SitePage::Topic("origami".into()));
    }

    #[test]
    fn test_legacy_hash_paths() {
        assert_eq!(page("#/about"), SitePage::About);
        assert_eq!(page("/#gallery"), SitePage::Home);
        assert_eq!(
            page("/#/projects/artiq-control"),
            SitePage::Project("artiq-control".into())
        );
    }

    #[test]
    fn test_unrecognized_paths_redirect_home() {
        for path in [
            "/contact",
            "/home",
            "/projects/a/b",
            "/misc/origami/extra",
            "/about/me",
            "/resume/2024",
            "/favicon.ico",
        ] {
            assert_eq!(
                resolve(path),
                Resolution {
                    page: SitePage::Home,
                    redirected: true
                },
                "`{path}` should redirect home"
            );
            assert_eq!(static_target(path), "/");
        }
    }

    #[test]
    fn test_hrefs_round_trip_through_resolve() {
        let pages = [
            SitePage::Home,
            SitePage::About,
            SitePage::Projects,
            SitePage::Project("artiq-control".into()),
            SitePage::Misc,
            SitePage::Topic("origami".into()),
            SitePage::Resume,
        ];

        for expected in pages {
            assert_eq!(page(&expected.href()), expected);
        }
    }

    #[test]
    fn test_static_target_applies_lookup_fallbacks() {
        assert_eq!(static_target("/Projects/"), "/projects/");
        assert_eq!(
            static_target("/projects/artiq-control"),
            "/projects/artiq-control/"
        );
        assert_eq!(static_target("/projects/does-not-exist"), missing_project_href());
        assert_eq!(static_target("/misc/origami"), "/misc/origami/");
        assert_eq!(static_target("/misc/unknown-id"), "/misc/ion-trap-humor/");
    }

    #[test]
    fn test_section_of_detail_pages() {
        assert_eq!(SitePage::Project("x".into()).section(), Section::Projects);
        assert_eq!(SitePage::Topic("x".into()).section(), Section::Misc);
    }

    #[test]
    fn test_redirect_table_agrees_with_static_target() {
        let table = RedirectTable::site();

        for path in [
            "",
            "/",
            "/about",
            "/ABOUT/",
            "/Projects",
            "/resume/",
            "/projects/artiq-control",
            "/PROJECTS/artiq-control/",
            "/projects/Artiq-Control",
            "/projects/does-not-exist",
            "/projects/not-found",
            "/misc/origami",
            "/Misc/unknown-id",
            "/contact",
            "/projects/a/b",
            "/about?tab=bio",
            "/misc/origami#gallery",
            "/#gallery",
            "#/about",
            "/#/projects/artiq-control",
            "/#/misc/nope",
            "/constructor",
            "/__proto__",
            "/toString/",
            "/hasOwnProperty",
            "/constructor/x",
            "/__proto__/x",
            "/projects/constructor",
            "/misc/__proto__",
            "/#/__proto__",
            "/#/constructor/x",
        ] {
            assert_eq!(table.target(path), static_target(path), "`{path}`");
        }
    }

    #[test]
    fn test_inherited_names_go_home() {
        let table = RedirectTable::site();

        for path in ["/constructor", "/constructor/x", "/#/__proto__", "/valueOf/1"] {
            assert_eq!(table.target(path), "/", "`{path}`");
        }
        assert_eq!(table.target("/projects/constructor"), missing_project_href());
        assert_eq!(table.target("/misc/__proto__"), "/misc/ion-trap-humor/");
    }

    #[test]
    fn test_redirect_script_looks_up_own_entries_only() {
        let script = redirect_script();

        assert!(script.contains("const sections = new Map(["));
        assert!(script.contains("const collections = new Map(["));
        assert!(script.contains("sections.get(segments[0].toLowerCase())"));
        assert!(script.contains("collections.get(segments[0].toLowerCase())"));
        assert!(script.contains("collection.known.has(segments[1])"));
        assert!(!script.contains("sections["));
        assert!(!script.contains("collections["));
        assert!(!script.contains(".includes("));
    }

    #[test]
    fn test_redirect_script_embeds_the_table() {
        let table = RedirectTable::site();
        let script = table.script();

        assert_eq!(
            table.sections,
            vec![
                ("about", "/about/"),
                ("projects", "/projects/"),
                ("misc", "/misc/"),
                ("resume", "/resume/"),
            ]
        );
        for (segment, href) in &table.sections {
            assert!(script.contains(&format!("[{segment:?},{href:?}]")));
        }

        assert_eq!(table.collections.len(), 2);
        for collection in &table.collections {
            assert!(script.contains(&collection.to_js()));
        }

        let projects = &table.collections[0];
        assert_eq!(projects.segment, "projects");
        assert_eq!(projects.known, PROJECTS.ids().collect::<Vec<_>>());
        assert_eq!(projects.missing, missing_project_href());

        let misc = &table.collections[1];
        assert_eq!(misc.prefix, "/misc/");
        assert_eq!(misc.known, vec!["ion-trap-humor", "origami"]);
        assert_eq!(misc.missing, "/misc/ion-trap-humor/");
    }

    #[test]
    fn test_missing_target_follows_registry_policy() {
        struct Stub(&'static str);

        impl Entry for Stub {
            fn id(&self) -> &'static str {
                self.0
            }

            fn title(&self) -> &'static str {
                "Stub"
            }
        }

        static STUBS: [Stub; 1] = [Stub("only")];
        let gone = Registry::new("gone", MissingPolicy::NotFound { slug: "gone" }, &STUBS);
        assert_eq!(miss_target(&gone, SitePage::Topic), "/misc/gone/");
        assert_eq!(entry_target(&gone, "only", SitePage::Topic), "/misc/only/");

        let first = Registry::new("first", MissingPolicy::FirstEntry, &STUBS);
        assert_eq!(entry_target(&first, "other", SitePage::Topic), "/misc/only/");
    }
}
