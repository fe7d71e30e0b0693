//! Hero typewriter tests

use std::time::Duration;

use folio_core::{Phase, RevealSnapshot, RevealTiming, Stage, Typewriter};
use folio_engine::hero_stages;

fn headline() -> Vec<Stage> {
    hero_stages(&["Full-stack".to_string(), "Developer".to_string()], "")
}

fn timing() -> RevealTiming {
    RevealTiming {
        char_interval: Duration::from_millis(70),
        stage_pause: Duration::from_millis(160),
    }
}

/// Total revealed graphemes gained between two snapshots.
fn gained(before: &RevealSnapshot, after: &RevealSnapshot) -> usize {
    before
        .revealed
        .iter()
        .zip(&after.revealed)
        .map(|(a, b)| {
            assert!(b >= a, "reveal went backwards: {before:?} -> {after:?}");
            b - a
        })
        .sum()
}

#[test]
fn headline_types_one_grapheme_at_a_time() {
    let mut hero = Typewriter::mount(headline(), timing(), false);
    let mut snapshots = vec![hero.snapshot()];
    assert_eq!(snapshots[0].text(0), "");
    assert_eq!(snapshots[0].phase, Phase::Stage(0));

    for _ in 0..200 {
        snapshots.extend(hero.advance(Duration::from_millis(10)));
    }

    let last = snapshots.last().unwrap();
    assert!(last.is_done());
    assert_eq!(last.texts, ["Full-stack", "Developer"]);

    for pair in snapshots.windows(2) {
        let step = gained(&pair[0], &pair[1]);
        assert!(
            step == 1 || (step == 0 && pair[0].phase != pair[1].phase),
            "unexpected step {pair:?}"
        );
    }
}

#[test]
fn later_stage_waits_for_earlier() {
    let mut hero = Typewriter::mount(headline(), timing(), false);
    for snapshot in hero.advance(Duration::from_secs(5)) {
        if snapshot.revealed[1] > 0 {
            assert_eq!(snapshot.revealed[0], "Full-stack".len());
        }
    }
}

#[test]
fn frame_size_does_not_change_the_result() {
    let mut coarse = Typewriter::mount(headline(), timing(), false);
    let mut fine = Typewriter::mount(headline(), timing(), false);

    coarse.advance(Duration::from_millis(900));
    for _ in 0..900 {
        fine.advance(Duration::from_millis(1));
    }
    assert_eq!(coarse.snapshot(), fine.snapshot());
}

#[test]
fn reduced_motion_reveals_everything_at_mount() {
    let hero = Typewriter::mount(headline(), timing(), true);
    let snapshot = hero.snapshot();
    assert!(snapshot.is_done());
    assert_eq!(snapshot.texts, ["Full-stack", "Developer"]);
    assert_eq!(hero.pending_timers(), 0);
}

#[test]
fn restart_after_done_types_again() {
    let mut hero = Typewriter::mount(headline(), timing(), false);
    hero.advance(Duration::from_secs(10));
    assert!(hero.is_done());

    let snapshot = hero.restart();
    assert_eq!(snapshot.phase, Phase::Stage(0));
    assert!(snapshot.revealed.iter().all(|&n| n == 0));
    assert!(!hero.advance(Duration::from_millis(70)).is_empty());
    assert_eq!(hero.visible_text(0), "F");
}

#[test]
fn teardown_silences_pending_reveals() {
    let mut hero = Typewriter::mount(headline(), timing(), false);
    hero.advance(Duration::from_millis(140));
    hero.teardown();
    assert!(hero.advance(Duration::from_secs(10)).is_empty());
    assert_eq!(hero.visible_text(0), "Fu");
}
