//! Read-only portfolio content.
//!
//! The store is built once at start-up, either from the table compiled into
//! the binary or from a TOML file, and is never mutated afterwards. Consumers
//! receive it explicitly (usually as `Arc<ContentStore>`).

mod collection;
mod devicon;

pub use collection::{Collection, Record, Showcase};
pub use devicon::devicon_url;

use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use thiserror::Error;

use folio_types::{Experience, Profile, Project, ProjectStatus, Stat, TechStack};

const BUILTIN_CONTENT: &str = include_str!("../data/content.toml");

#[derive(Debug, Error)]
pub enum ContentError {
    #[error("failed to read content at {}: {source}", path.display())]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("failed to parse content: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("duplicate {kind} identifier {id:?}")]
    DuplicateId { kind: &'static str, id: String },
}

#[derive(Deserialize)]
struct RawContent {
    profile: Profile,
    #[serde(default)]
    stats: Vec<Stat>,
    #[serde(default)]
    tech_stacks: Vec<TechStack>,
    #[serde(default)]
    projects: Vec<Project>,
    #[serde(default)]
    experiences: Vec<Experience>,
}

#[derive(Debug, Clone)]
pub struct ContentStore {
    profile: Profile,
    stats: Vec<Stat>,
    tech_stacks: Vec<TechStack>,
    projects: Collection<Project>,
    experiences: Collection<Experience>,
}

impl ContentStore {
    /// Content compiled into the binary.
    pub fn builtin() -> Result<Self, ContentError> {
        Self::from_toml_str(BUILTIN_CONTENT)
    }

    pub fn load(path: &Path) -> Result<Self, ContentError> {
        let raw = fs::read_to_string(path).map_err(|source| ContentError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let store = Self::from_toml_str(&raw)?;
        tracing::debug!(
            path = %path.display(),
            projects = store.projects.len(),
            experiences = store.experiences.len(),
            "Loaded content"
        );
        Ok(store)
    }

    pub fn from_toml_str(raw: &str) -> Result<Self, ContentError> {
        let raw: RawContent = toml::from_str(raw)?;
        let projects = Collection::new(raw.projects)
            .map_err(|id| ContentError::DuplicateId { kind: "project", id })?;
        let experiences = Collection::new(raw.experiences)
            .map_err(|id| ContentError::DuplicateId {
                kind: "experience",
                id,
            })?;

        Ok(Self {
            profile: raw.profile,
            stats: raw.stats,
            tech_stacks: raw.tech_stacks,
            projects,
            experiences,
        })
    }

    #[must_use]
    pub fn profile(&self) -> &Profile {
        &self.profile
    }

    #[must_use]
    pub fn stats(&self) -> &[Stat] {
        &self.stats
    }

    #[must_use]
    pub fn tech_stacks(&self) -> &[TechStack] {
        &self.tech_stacks
    }

    #[must_use]
    pub fn projects(&self) -> &Collection<Project> {
        &self.projects
    }

    #[must_use]
    pub fn experiences(&self) -> &Collection<Experience> {
        &self.experiences
    }

    #[must_use]
    pub fn project(&self, slug: &str) -> Option<&Project> {
        self.projects.get(slug)
    }

    #[must_use]
    pub fn featured_projects(&self, limit: usize) -> Vec<&Project> {
        self.projects.featured(limit)
    }

    #[must_use]
    pub fn projects_by_status(&self, status: ProjectStatus) -> Vec<&Project> {
        self.projects.by_status(status)
    }

    /// Slugs of every project, for generating detail paths.
    #[must_use]
    pub fn project_slugs(&self) -> Vec<&str> {
        self.projects.ids()
    }
}
