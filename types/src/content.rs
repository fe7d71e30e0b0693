//! Portfolio content records.
//!
//! Records are immutable once loaded. Identifier uniqueness is a property of
//! the collection that holds them and is checked by `folio-content`.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::NonEmptyString;
use crate::ids::{ExperienceId, ProjectSlug};

/// Delivery state of a showcased project.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ProjectStatus {
    Live,
    InProgress,
    ComingSoon,
}

impl ProjectStatus {
    pub const ALL: [ProjectStatus; 3] = [Self::Live, Self::InProgress, Self::ComingSoon];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Live => "live",
            Self::InProgress => "in-progress",
            Self::ComingSoon => "coming-soon",
        }
    }

    /// Human-readable badge label.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Live => "Live",
            Self::InProgress => "In Progress",
            Self::ComingSoon => "Coming Soon",
        }
    }
}

impl fmt::Display for ProjectStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown project status {0:?} (expected live, in-progress or coming-soon)")]
pub struct UnknownStatusError(pub String);

impl FromStr for ProjectStatus {
    type Err = UnknownStatusError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_ascii_lowercase().replace('_', "-");
        Self::ALL
            .into_iter()
            .find(|status| status.as_str() == normalized)
            .ok_or_else(|| UnknownStatusError(s.to_string()))
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectVideo {
    pub src: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub poster: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Project {
    pub slug: ProjectSlug,
    pub title: NonEmptyString,
    pub short_description: String,
    pub long_description: String,
    pub role: String,
    #[serde(default)]
    pub featured: bool,
    #[serde(default)]
    pub tech: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub repo_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub live_url: Option<String>,
    pub status: ProjectStatus,
    #[serde(default)]
    pub highlights: Vec<String>,
    #[serde(default)]
    pub gallery: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub video: Option<ProjectVideo>,
}

impl Project {
    /// Paragraphs of the long description (blank-line separated).
    pub fn paragraphs(&self) -> impl Iterator<Item = &str> {
        self.long_description
            .split("\n\n")
            .map(str::trim)
            .filter(|p| !p.is_empty())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Experience {
    pub id: ExperienceId,
    pub company: String,
    pub role: String,
    pub period: String,
    pub location: String,
    pub description: String,
    #[serde(default)]
    pub responsibilities: Vec<String>,
}

/// Site owner details shown in the hero, about and contact areas.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Profile {
    pub name: NonEmptyString,
    pub role: String,
    pub location: String,
    pub email: String,
    pub github_url: String,
    pub linkedin_url: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cv_url: Option<String>,
    pub description: String,
    #[serde(default)]
    pub about: Vec<String>,
}

impl Profile {
    #[must_use]
    pub fn mailto(&self) -> String {
        format!("mailto:{}", self.email)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Stat {
    pub label: String,
    pub value: String,
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TechStack {
    pub category: String,
    pub technologies: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::{Project, ProjectStatus};

    #[test]
    fn status_parses_loosely() {
        assert_eq!("live".parse::<ProjectStatus>().unwrap(), ProjectStatus::Live);
        assert_eq!(
            "In_Progress".parse::<ProjectStatus>().unwrap(),
            ProjectStatus::InProgress
        );
        assert!("archived".parse::<ProjectStatus>().is_err());
    }

    #[test]
    fn status_serializes_kebab_case() {
        let json = serde_json::to_string(&ProjectStatus::ComingSoon).unwrap();
        assert_eq!(json, "\"coming-soon\"");
    }

    #[test]
    fn project_defaults_optional_fields() {
        let project: Project = serde_json::from_value(serde_json::json!({
            "slug": "helpdesk",
            "title": "Helpdesk MVP",
            "short_description": "Ticketing",
            "long_description": "First.\n\nSecond.\n\n",
            "role": "Backend",
            "status": "in-progress"
        }))
        .unwrap();

        assert!(!project.featured);
        assert!(project.tech.is_empty());
        assert!(project.repo_url.is_none());
        assert_eq!(project.paragraphs().collect::<Vec<_>>(), ["First.", "Second."]);
    }
}
