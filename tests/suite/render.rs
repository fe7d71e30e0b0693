//! Terminal rendering tests against ratatui's test backend

use std::sync::Arc;
use std::time::Duration;

use folio_config::FolioConfig;
use folio_content::ContentStore;
use folio_core::MemoryClipboard;
use folio_engine::App;

use crate::common::{builtin_app, render, tick_until};

const WIDTH: u16 = 80;
const HEIGHT: u16 = 24;

fn page_app() -> App {
    builtin_app(WIDTH, HEIGHT - folio_tui::CHROME_ROWS)
}

fn screen_contains(screen: &[String], needle: &str) -> bool {
    screen.iter().any(|line| line.contains(needle))
}

#[test]
fn hero_starts_blank_and_finishes_with_caret() {
    let mut app = page_app();
    let screen = render(&app, WIDTH, HEIGHT);
    assert!(!screen_contains(&screen, "Full-stack"));
    assert!(screen_contains(&screen, "Hi, I'm Alberto Gálvez"));

    tick_until(&mut app, Duration::from_millis(16), Duration::from_secs(30), |app| {
        app.hero().is_done()
    });
    let screen = render(&app, WIDTH, HEIGHT);
    assert!(screen_contains(&screen, "Full-stack"));
    assert!(screen_contains(&screen, "Developer▌"));
    assert!(screen_contains(&screen, "Building modern web apps"));
}

#[test]
fn caret_follows_the_typing_stage() {
    let mut app = page_app();
    app.tick(Duration::from_millis(210));
    let screen = render(&app, WIDTH, HEIGHT);
    assert!(screen_contains(&screen, "Ful▌"));
}

#[test]
fn nav_highlights_sections_and_compacts() {
    let mut app = page_app();
    let screen = render(&app, WIDTH, HEIGHT);
    assert!(screen[0].contains("Alberto Gálvez"));
    assert!(screen[0].contains("Home"));
    assert!(screen[0].contains("Projects"));
    assert!(screen[0].contains("About"));

    app.jump_to_section("projects");
    app.tick(Duration::from_millis(600));
    let screen = render(&app, WIDTH, HEIGHT);
    assert!(screen[0].starts_with(" AG "));
    assert!(screen[1].contains("PROJECTS"));
}

#[test]
fn sections_stay_blank_until_first_view() {
    let mut app = page_app();
    app.scroll_to_bottom();
    let screen = render(&app, WIDTH, HEIGHT);
    assert!(!screen_contains(&screen, "linkedin.com/in/albertogalvez-dev"));

    app.tick(Duration::ZERO);
    app.tick(Duration::from_millis(600));
    let screen = render(&app, WIDTH, HEIGHT);
    assert!(screen_contains(&screen, "linkedin.com/in/albertogalvez-dev"));

    app.scroll_to_top();
    app.tick(Duration::ZERO);
    app.scroll_to_bottom();
    let screen = render(&app, WIDTH, HEIGHT);
    assert!(screen_contains(&screen, "linkedin.com/in/albertogalvez-dev"));
}

#[test]
fn ascii_mode_uses_plain_caret() {
    let mut config = FolioConfig::default();
    config.app.ascii_only = true;
    config.app.reduced_motion = true;
    let content = Arc::new(ContentStore::builtin().unwrap());
    let app = App::new(&config, content, WIDTH, HEIGHT - folio_tui::CHROME_ROWS);

    let screen = render(&app, WIDTH, HEIGHT);
    assert!(screen_contains(&screen, "Developer|"));
}

#[test]
fn copy_badge_appears_and_expires() {
    let mut app = page_app();
    let mut primary = MemoryClipboard::failing();
    let mut fallback = MemoryClipboard::new();
    assert!(app.copy_email(&mut primary, &mut fallback));
    assert_eq!(fallback.contents(), Some("hello@example.dev"));

    let screen = render(&app, WIDTH, HEIGHT);
    assert!(screen[usize::from(HEIGHT) - 1].contains("Copied!"));

    app.tick(Duration::from_secs(3));
    let screen = render(&app, WIDTH, HEIGHT);
    assert!(!screen[usize::from(HEIGHT) - 1].contains("Copied!"));
}

#[test]
fn resize_rewraps_the_page() {
    let mut app = page_app();
    app.resize(40, 18);
    app.tick(Duration::ZERO);
    let screen = render(&app, 40, 20);
    assert_eq!(screen.len(), 20);
    assert!(app.layout().width() == 40);
}
