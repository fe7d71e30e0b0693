//! Section tracking and nav compaction tests

use std::time::Duration;

use folio_core::{
    BandObserver, ObservationBand, RegionBounds, ScrollThreshold, SectionTracker,
};

use crate::common::builtin_app;

const IDS: [&str; 3] = ["home", "projects", "about"];

fn regions() -> Vec<(&'static str, RegionBounds)> {
    vec![
        ("home", RegionBounds::new(0, 10)),
        ("projects", RegionBounds::new(10, 30)),
        ("experience", RegionBounds::new(40, 10)),
        ("about", RegionBounds::new(50, 20)),
    ]
}

fn page_ids() -> Vec<&'static str> {
    regions().into_iter().map(|(id, _)| id).collect()
}

#[test]
fn tracker_follows_band_while_scrolling() {
    let page = page_ids();
    let mut tracker = SectionTracker::mount(&IDS, page.as_slice());
    let mut observer = BandObserver::new(ObservationBand::default());
    let viewport = 20;

    let mut seen = Vec::new();
    for scroll in 0..=50 {
        let changes = observer.observe(regions(), scroll, viewport);
        if let Some(active) = tracker.apply(&changes) {
            seen.push(active.to_string());
        }
    }
    assert_eq!(seen, ["projects", "about"]);
    assert_eq!(tracker.active(), Some("about"));
}

#[test]
fn untracked_region_keeps_previous_active() {
    let page = page_ids();
    let mut tracker = SectionTracker::mount(&IDS, page.as_slice());
    let mut observer = BandObserver::new(ObservationBand::default());

    tracker.apply(&observer.observe(regions(), 30, 10));
    assert_eq!(tracker.active(), Some("projects"));

    // Only "experience" sits in the band at this offset.
    tracker.apply(&observer.observe(regions(), 38, 10));
    assert!(!observer.is_visible("projects"));
    assert!(observer.is_visible("experience"));
    assert_eq!(tracker.active(), Some("projects"));
}

#[test]
fn scroll_burst_evaluates_once_per_frame() {
    let mut threshold = ScrollThreshold::mount(60, 0);
    let mut requested = 0;
    for offset in (0..=200).step_by(10) {
        if threshold.on_scroll(offset) {
            requested += 1;
        }
    }
    assert_eq!(requested, 1);
    assert_eq!(threshold.on_frame(), Some(true));
    assert_eq!(threshold.on_frame(), None);
    assert!(threshold.is_past());
}

#[test]
fn app_compacts_nav_after_threshold() {
    let mut app = builtin_app(80, 22);
    assert!(!app.nav_compact());

    app.scroll_by(3);
    app.scroll_by(5);
    let update = app.tick(Duration::ZERO);
    assert_eq!(update.nav_compact, Some(true));
    assert!(app.nav_compact());

    app.scroll_to_top();
    assert_eq!(app.tick(Duration::ZERO).nav_compact, Some(false));
}

#[test]
fn app_jumps_between_tracked_sections() {
    let mut app = builtin_app(80, 22);
    assert_eq!(app.active_section(), Some("home"));

    assert!(app.jump_to_section("projects"));
    let update = app.tick(Duration::ZERO);
    assert_eq!(update.active_section.as_deref(), Some("projects"));

    assert!(!app.jump_to_section("blog"));
}
