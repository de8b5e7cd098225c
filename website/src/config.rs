use maudit::BuildOptions;

/// Site-wide settings, fixed at build time.
pub struct SiteConfig {
    /// Public URL of the site, used for canonical links. Without it, pages have none.
    pub base_url: Option<&'static str>,
    pub owner: &'static str,
    pub resume: ResumeConfig,
}

pub struct ResumeConfig {
    /// Path of the resume document inside the static directory.
    pub document: &'static str,
    pub title: &'static str,
    /// Embed the document, instead of showing that it isn't available.
    pub embed: bool,
}

pub const SITE: SiteConfig = SiteConfig {
    base_url: None,
    owner: "Vighnesh Natarajan",
    resume: ResumeConfig {
        document: "/placeholder_resume.pdf",
        title: "Vighnesh Natarajan Resume",
        embed: cfg!(feature = "embed-resume"),
    },
};

impl SiteConfig {
    pub fn build_options(&self) -> BuildOptions {
        BuildOptions {
            base_url: self.base_url.map(str::to_string),
            output_dir: "dist".into(),
            static_dir: "static".into(),
            ..Default::default()
        }
    }

    /// Canonical URL of `href`, if the site has a base URL.
    pub fn canonical_url(&self, href: &str) -> Option<String> {
        self.base_url
            .map(|base| format!("{}{}", base.trim_end_matches('/'), href))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_canonical_url_joins_base_and_href() {
        let site = SiteConfig {
            base_url: Some("https://example.com/"),
            ..SITE
        };
        assert_eq!(
            site.canonical_url("/about/").as_deref(),
            Some("https://example.com/about/")
        );
        assert_eq!(SiteConfig { base_url: None, ..SITE }.canonical_url("/"), None);
    }

    #[test]
    fn test_build_options_point_at_site_directories() {
        let options = SITE.build_options();
        assert_eq!(options.output_dir, std::path::PathBuf::from("dist"));
        assert_eq!(options.static_dir, std::path::PathBuf::from("static"));
        assert_eq!(options.base_url, None);
    }
}
