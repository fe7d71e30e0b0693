//! Config file tests

use std::time::Duration;

use folio_config::{ConfigError, FolioConfig};
use folio_engine::App;
use tempfile::tempdir;

use crate::common::{SIX_PROJECTS, tick_until, write_file};

const CONFIG: &str = r#"
[motion]
ms_per_char = 10
stage_pause_ms = 20

[nav]
scroll_threshold = 2
sections = ["home", "about", "missing"]

[hero]
headline = ["Hi", "there"]
tagline = ""

[content]
path = "content.toml"
"#;

#[test]
fn content_path_resolves_next_to_config() {
    let dir = tempdir().unwrap();
    write_file(dir.path(), "content.toml", SIX_PROJECTS);
    let config_path = write_file(dir.path(), "config.toml", CONFIG);

    let config = FolioConfig::load_from(&config_path).unwrap();
    assert_eq!(config.content.path, Some(dir.path().join("content.toml")));

    let app = App::from_config(&config, 80, 22).unwrap();
    assert_eq!(app.content().profile().name.as_str(), "Ada Lovelace");
}

#[test]
fn configured_hero_types_with_configured_timing() {
    let dir = tempdir().unwrap();
    write_file(dir.path(), "content.toml", SIX_PROJECTS);
    let config_path = write_file(dir.path(), "config.toml", CONFIG);
    let config = FolioConfig::load_from(&config_path).unwrap();
    let mut app = App::from_config(&config, 80, 22).unwrap();

    assert_eq!(app.headline_lines(), 2);
    tick_until(&mut app, Duration::from_millis(5), Duration::from_secs(1), |app| {
        app.hero().is_done()
    });
    assert!(app.hero().is_done());
    assert_eq!(app.hero().texts, ["Hi", "there"]);
    assert_eq!(app.hero().caret, Some(1));
}

#[test]
fn unknown_nav_ids_are_dropped() {
    let dir = tempdir().unwrap();
    write_file(dir.path(), "content.toml", SIX_PROJECTS);
    let config_path = write_file(dir.path(), "config.toml", CONFIG);
    let config = FolioConfig::load_from(&config_path).unwrap();
    let app = App::from_config(&config, 80, 22).unwrap();

    let nav: Vec<_> = app.nav_sections().collect();
    assert_eq!(nav, ["home", "about"]);
}

#[test]
fn missing_content_file_names_the_path() {
    let dir = tempdir().unwrap();
    let config_path = write_file(dir.path(), "config.toml", CONFIG);
    let config = FolioConfig::load_from(&config_path).unwrap();

    let err = App::from_config(&config, 80, 22).err().unwrap();
    assert!(format!("{err:#}").contains("loading content from"));
}

#[test]
fn inverted_band_is_rejected() {
    let dir = tempdir().unwrap();
    let path = write_file(
        dir.path(),
        "config.toml",
        "[nav]\nband_top = 0.7\nband_bottom = 0.5\n",
    );
    let err = FolioConfig::load_from(&path).unwrap_err();
    assert!(matches!(err, ConfigError::Invalid { .. }));
    assert_eq!(err.path(), &path);
}

#[test]
fn malformed_toml_is_a_parse_error() {
    let dir = tempdir().unwrap();
    let path = write_file(dir.path(), "config.toml", "[motion\nms_per_char = 1");
    assert!(matches!(
        FolioConfig::load_from(&path),
        Err(ConfigError::Parse { .. })
    ));
}
