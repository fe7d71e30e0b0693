//! Content store tests

use folio_content::{ContentError, ContentStore};
use folio_types::ProjectStatus;
use tempfile::tempdir;

use crate::common::{SIX_PROJECTS, write_file};

#[test]
fn featured_keeps_declaration_order() {
    let store = ContentStore::from_toml_str(SIX_PROJECTS).unwrap();
    let featured: Vec<_> = store
        .featured_projects(4)
        .into_iter()
        .map(|project| project.slug.as_str())
        .collect();
    assert_eq!(featured, ["p1", "p3", "p5"]);
}

#[test]
fn featured_respects_limit() {
    let store = ContentStore::from_toml_str(SIX_PROJECTS).unwrap();
    assert_eq!(store.featured_projects(2).len(), 2);
    assert!(store.featured_projects(0).is_empty());
}

#[test]
fn lookup_by_slug() {
    let store = ContentStore::from_toml_str(SIX_PROJECTS).unwrap();
    assert_eq!(store.project("p4").map(|p| p.title.as_str()), Some("Four"));
    assert!(store.project("nonexistent").is_none());
    assert!(store.experiences().get("e1").is_some());
}

#[test]
fn filter_by_status() {
    let store = ContentStore::from_toml_str(SIX_PROJECTS).unwrap();
    let live: Vec<_> = store
        .projects_by_status(ProjectStatus::Live)
        .into_iter()
        .map(|project| project.slug.as_str())
        .collect();
    assert_eq!(live, ["p1", "p6"]);
}

#[test]
fn slugs_in_order() {
    let store = ContentStore::from_toml_str(SIX_PROJECTS).unwrap();
    assert_eq!(store.project_slugs(), ["p1", "p2", "p3", "p4", "p5", "p6"]);
}

#[test]
fn loads_from_file() {
    let dir = tempdir().unwrap();
    let path = write_file(dir.path(), "content.toml", SIX_PROJECTS);
    let store = ContentStore::load(&path).unwrap();
    assert_eq!(store.profile().name.as_str(), "Ada Lovelace");
    assert_eq!(store.projects().len(), 6);
}

#[test]
fn missing_file_reports_path() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("absent.toml");
    let err = ContentStore::load(&path).unwrap_err();
    assert!(matches!(err, ContentError::Read { .. }));
    assert!(err.to_string().contains("absent.toml"));
}

#[test]
fn duplicate_slug_rejected() {
    let doubled = SIX_PROJECTS.replace("slug = \"p2\"", "slug = \"p1\"");
    let err = ContentStore::from_toml_str(&doubled).unwrap_err();
    assert!(matches!(
        err,
        ContentError::DuplicateId { kind: "project", ref id } if id == "p1"
    ));
}

#[test]
fn unknown_status_is_a_parse_error() {
    let broken = SIX_PROJECTS.replace("status = \"live\"", "status = \"archived\"");
    assert!(matches!(
        ContentStore::from_toml_str(&broken),
        Err(ContentError::Parse(_))
    ));
}

#[test]
fn builtin_content_is_valid() {
    let store = ContentStore::builtin().unwrap();
    assert!(!store.projects().is_empty());
    assert!(!store.profile().email.is_empty());
}
