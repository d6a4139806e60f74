//! End-to-end properties of the typing animator through the public API.

use std::time::{Duration, Instant};

use folio::animator::{
    AnimatorDriver, Direction, FixedJitter, Phase, RecordingSurface, TypingAnimator, DELETE_DELAY,
    END_PAUSE, STARTUP_DELAY, TYPE_DELAY,
};

fn animator(phrases: &[&str]) -> TypingAnimator {
    TypingAnimator::new(phrases.iter().map(|s| s.to_string()).collect())
        .expect("non-empty phrase list")
}

#[test]
fn typed_prefixes_grow_then_shrink_by_one() {
    let mut a = animator(&["Rust"]);
    let mut surface = RecordingSurface::new();
    let mut jitter = FixedJitter::zero();

    // Type out the full phrase: renders "", "R", "Ru", "Rus", "Rust"
    for _ in 0..5 {
        a.step(&mut surface, &mut jitter);
    }
    let typed: Vec<usize> = surface.renders().iter().map(|r| r.chars().count()).collect();
    assert_eq!(typed, vec![0, 1, 2, 3, 4]);
    assert_eq!(a.phase(), Phase::PausedAtEnd);

    // Pause, then deletion shrinks by exactly one per step
    surface.clear();
    a.step(&mut surface, &mut jitter); // pause, no render
    assert!(surface.renders().is_empty());
    for _ in 0..4 {
        a.step(&mut surface, &mut jitter);
    }
    let deleted: Vec<usize> = surface.renders().iter().map(|r| r.chars().count()).collect();
    assert_eq!(deleted, vec![3, 2, 1, 0]);
}

#[test]
fn full_hi_yo_cycle_matches_documented_trace() {
    let mut a = animator(&["Hi", "Yo"]);
    let mut surface = RecordingSurface::new();
    let mut jitter = FixedJitter::zero();

    for _ in 0..14 {
        a.step(&mut surface, &mut jitter);
    }

    assert_eq!(
        surface.renders(),
        &["", "H", "Hi", "H", "", "", "Y", "Yo", "Y", ""]
    );
    assert_eq!(a.phrase_idx(), 0, "wrapped back to the first phrase");
}

#[test]
fn direction_flips_only_at_boundaries() {
    let mut a = animator(&["ab"]);
    let mut surface = RecordingSurface::new();
    let mut jitter = FixedJitter::zero();

    let mut directions = Vec::new();
    for _ in 0..8 {
        directions.push(a.direction());
        a.step(&mut surface, &mut jitter);
    }

    // Forward through typing and the end pause, backward from deletion
    // until the advance completes.
    assert_eq!(
        directions,
        vec![
            Direction::Forward,
            Direction::Forward,
            Direction::Forward,
            Direction::Forward,
            Direction::Backward,
            Direction::Backward,
            Direction::Backward,
            Direction::Forward,
        ]
    );
}

#[test]
fn delays_follow_the_documented_schedule() {
    let mut a = animator(&["ab"]);
    let mut surface = RecordingSurface::new();
    let mut jitter = FixedJitter::zero();

    assert_eq!(a.step(&mut surface, &mut jitter), TYPE_DELAY); // ""
    assert_eq!(a.step(&mut surface, &mut jitter), TYPE_DELAY); // "a"
    assert_eq!(a.step(&mut surface, &mut jitter), TYPE_DELAY); // "ab"
    assert_eq!(a.step(&mut surface, &mut jitter), END_PAUSE); // pause
    assert_eq!(a.step(&mut surface, &mut jitter), DELETE_DELAY); // "a"
}

#[test]
fn empty_phrase_list_never_renders() {
    assert!(TypingAnimator::new(Vec::new()).is_none());
}

#[test]
fn driver_respects_startup_delay_and_catches_up() {
    let now = Instant::now();
    let a = animator(&["Hi"]);
    let mut driver = AnimatorDriver::start(a, Box::new(FixedJitter::zero()), now);
    let mut surface = RecordingSurface::new();

    assert!(!driver.poll(now + Duration::from_millis(599), &mut surface));
    assert!(surface.renders().is_empty());

    // Well past startup plus both typing delays: three renders due at once
    assert!(driver.poll(now + STARTUP_DELAY + TYPE_DELAY * 2, &mut surface));
    assert_eq!(surface.renders(), &["", "H", "Hi"]);
}

#[test]
fn long_run_never_breaks_char_bounds() {
    let mut a = animator(&["alpha", "", "βγ"]);
    let mut surface = RecordingSurface::new();
    let mut jitter = FixedJitter::new(Duration::from_millis(3));

    for _ in 0..2000 {
        a.step(&mut surface, &mut jitter);
        assert!(a.char_idx() <= a.phrase().chars().count());
    }
    // Every render is a prefix of some phrase
    for render in surface.renders() {
        assert!(
            ["alpha", "", "βγ"].iter().any(|p| p.starts_with(render.as_str())),
            "render {:?} is not a phrase prefix",
            render
        );
    }
}
