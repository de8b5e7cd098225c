//! Static content of the site: the projects and misc topics registries.
//!
//! Registries are ordered, `'static` and never mutated. A lookup for an id that is not in a
//! registry never fails: what it returns instead is decided by the registry's [`MissingPolicy`].
use std::collections::HashSet;

use thiserror::Error;

mod projects;
mod topics;

pub use projects::{PROJECTS, ProjectCard, ProjectEntry, Reference};
pub use topics::{TOPICS, TopicCard, TopicEntry, TopicImage};

/// Slug of the pre-rendered page shown for project ids that don't exist.
pub const MISSING_PROJECT_SLUG: &str = "not-found";

/// A record that can be stored in a [`Registry`].
pub trait Entry: Sync + 'static {
    fn id(&self) -> &'static str;
    fn title(&self) -> &'static str;
}

/// What a [`Registry`] answers when asked for an id it doesn't contain.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MissingPolicy {
    /// The lookup reports the miss, and the page renders an explicit "not found" view, generated
    /// at `slug` in the registry's collection.
    NotFound { slug: &'static str },
    /// The lookup silently returns the first entry of the registry.
    FirstEntry,
}

/// Result of [`Registry::lookup`].
#[derive(Debug, PartialEq, Eq)]
pub enum Lookup<T: 'static> {
    Found(&'static T),
    /// The id was missing, this is the registry's default entry.
    Fallback(&'static T),
    Missing,
}

impl<T: 'static> Lookup<T> {
    pub fn entry(&self) -> Option<&'static T> {
        match self {
            Lookup::Found(entry) | Lookup::Fallback(entry) => Some(entry),
            Lookup::Missing => None,
        }
    }

    pub fn is_fallback(&self) -> bool {
        matches!(self, Lookup::Fallback(_))
    }
}

// Manual impls, deriving would require `T: Clone`.
impl<T: 'static> Clone for Lookup<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T: 'static> Copy for Lookup<T> {}

pub struct Registry<T: 'static> {
    name: &'static str,
    policy: MissingPolicy,
    entries: &'static [T],
}

impl<T: Entry> Registry<T> {
    pub const fn new(name: &'static str, policy: MissingPolicy, entries: &'static [T]) -> Self {
        Self {
            name,
            policy,
            entries,
        }
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn policy(&self) -> MissingPolicy {
        self.policy
    }

    /// Entries, in definition order.
    pub fn entries(&self) -> &'static [T] {
        self.entries
    }

    pub fn ids(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.entries.iter().map(Entry::id)
    }

    pub fn get(&self, id: &str) -> Option<&'static T> {
        self.entries.iter().find(|entry| entry.id() == id)
    }

    pub fn first(&self) -> Option<&'static T> {
        self.entries.first()
    }

    /// Looks up `id`, applying the registry's [`MissingPolicy`] when it isn't there.
    ///
    /// An empty id is treated as absent.
    pub fn lookup(&self, id: &str) -> Lookup<T> {
        if !id.is_empty()
            && let Some(entry) = self.get(id)
        {
            return Lookup::Found(entry);
        }

        match (self.policy, self.first()) {
            (MissingPolicy::FirstEntry, Some(first)) => Lookup::Fallback(first),
            _ => Lookup::Missing,
        }
    }

    /// Checks the invariants the router and pages rely on.
    ///
    /// Ids must be unique, non-empty, URL-safe and distinct from the slug of the not-found page,
    /// and every entry needs a title. A registry falling back to its first entry must have one.
    pub fn validate(&self) -> Result<(), ContentError> {
        let registry = self.name;

        if self.policy == MissingPolicy::FirstEntry && self.entries.is_empty() {
            return Err(ContentError::EmptyRegistry { registry });
        }

        let mut seen = HashSet::with_capacity(self.entries.len());
        for entry in self.entries {
            let id = entry.id();
            if id.is_empty() {
                return Err(ContentError::EmptyId { registry });
            }
            if !is_slug(id) {
                return Err(ContentError::InvalidId { registry, id });
            }
            if matches!(self.policy, MissingPolicy::NotFound { slug } if slug == id) {
                return Err(ContentError::ReservedId { registry, id });
            }
            if !seen.insert(id) {
                return Err(ContentError::DuplicateId { registry, id });
            }
            if entry.title().trim().is_empty() {
                return Err(ContentError::MissingTitle { registry, id });
            }
        }

        Ok(())
    }
}

#[derive(Error, Debug, PartialEq, Eq)]
pub enum ContentError {
    #[error("The `{registry}` registry contains an entry with an empty id")]
    EmptyId { registry: &'static str },
    #[error(
        "`{id}` in the `{registry}` registry is not a valid id, ids may only contain lowercase ASCII letters, digits and `-`"
    )]
    InvalidId {
        registry: &'static str,
        id: &'static str,
    },
    #[error("`{id}` is defined more than once in the `{registry}` registry")]
    DuplicateId {
        registry: &'static str,
        id: &'static str,
    },
    #[error("`{id}` in the `{registry}` registry collides with a page generated by the site")]
    ReservedId {
        registry: &'static str,
        id: &'static str,
    },
    #[error("`{id}` in the `{registry}` registry has no title")]
    MissingTitle {
        registry: &'static str,
        id: &'static str,
    },
    #[error("The `{registry}` registry falls back to its first entry, but has no entries")]
    EmptyRegistry { registry: &'static str },
}

/// Validates every registry of the site.
pub fn validate() -> Result<(), ContentError> {
    PROJECTS.validate()?;
    TOPICS.validate()?;

    Ok(())
}

fn is_slug(id: &str) -> bool {
    id.bytes()
        .all(|b| b.is_ascii_lowercase() || b.is_ascii_digit() || b == b'-')
}

/// Splits a text block into its paragraphs, separated by blank lines.
pub fn paragraphs(text: &'static str) -> impl Iterator<Item = &'static str> {
    text.split("\n\n")
        .map(str::trim)
        .filter(|paragraph| !paragraph.is_empty())
}
