//! Shared test utilities and fixtures
//!
//! Common infrastructure for integration tests.

#![allow(dead_code)]

use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::Duration;

use folio_config::FolioConfig;
use folio_content::ContentStore;
use folio_engine::App;
use ratatui::{Terminal, backend::TestBackend};

/// Content table with six projects, three of them featured.
pub const SIX_PROJECTS: &str = r#"
[profile]
name = "Ada Lovelace"
role = "Engineer"
location = "London"
email = "ada@example.dev"
github_url = "https://github.com/ada"
linkedin_url = "https://linkedin.com/in/ada"
description = "Analytical engines"
about = ["Notes on the engine."]

[[projects]]
slug = "p1"
title = "One"
short_description = "First"
long_description = "First project."
role = "Lead"
featured = true
status = "live"

[[projects]]
slug = "p2"
title = "Two"
short_description = "Second"
long_description = "Second project."
role = "Lead"
status = "in-progress"

[[projects]]
slug = "p3"
title = "Three"
short_description = "Third"
long_description = "Third project."
role = "Lead"
featured = true
status = "in-progress"

[[projects]]
slug = "p4"
title = "Four"
short_description = "Fourth"
long_description = "Fourth project."
role = "Lead"
status = "coming-soon"

[[projects]]
slug = "p5"
title = "Five"
short_description = "Fifth"
long_description = "Fifth project."
role = "Lead"
featured = true
status = "coming-soon"

[[projects]]
slug = "p6"
title = "Six"
short_description = "Sixth"
long_description = "Sixth project."
role = "Lead"
status = "live"

[[experiences]]
id = "e1"
company = "Engines Ltd"
role = "Analyst"
period = "1842"
location = "London"
description = "Wrote the first program."
responsibilities = ["Annotated the translation."]
"#;

pub fn write_file(dir: &Path, name: &str, body: &str) -> PathBuf {
    let path = dir.join(name);
    fs::write(&path, body).unwrap();
    path
}

pub fn builtin_app(width: u16, height: u16) -> App {
    let content = Arc::new(ContentStore::builtin().unwrap());
    App::new(&FolioConfig::default(), content, width, height)
}

/// Tick in fixed frame steps until `done` holds or `limit` elapses.
pub fn tick_until(app: &mut App, step: Duration, limit: Duration, done: impl Fn(&App) -> bool) {
    let mut elapsed = Duration::ZERO;
    while !done(app) && elapsed < limit {
        app.tick(step);
        elapsed += step;
    }
}

pub fn render(app: &App, width: u16, height: u16) -> Vec<String> {
    let mut terminal = Terminal::new(TestBackend::new(width, height)).unwrap();
    terminal.draw(|frame| folio_tui::draw(frame, app)).unwrap();
    let buffer = terminal.backend().buffer();
    (0..height)
        .map(|y| {
            (0..width)
                .map(|x| buffer[(x, y)].symbol().to_string())
                .collect::<String>()
        })
        .collect()
}
