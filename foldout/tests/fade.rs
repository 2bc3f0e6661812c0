use std::time::{Duration, Instant};

use foldout::{
    Display, Document, Easing, Element, FadeState, CLASS_CLOSING, CLASS_OPENING,
};

const DURATION: Duration = Duration::from_millis(300);

fn sample_doc() -> Document {
    Document::new(
        Element::box_()
            .id("root")
            .child(
                Element::box_()
                    .id("panel")
                    .display(Display::Flex)
                    .hidden(),
            )
            .child(Element::text("body").id("body")),
    )
}

fn assert_close(actual: f32, expected: f32) {
    assert!(
        (actual - expected).abs() < 1e-5,
        "expected {expected}, got {actual}"
    );
}

// ============================================================================
// Easing Functions
// ============================================================================

#[test]
fn test_easing_linear() {
    assert_eq!(Easing::Linear.apply(0.0), 0.0);
    assert_eq!(Easing::Linear.apply(0.5), 0.5);
    assert_eq!(Easing::Linear.apply(1.0), 1.0);
}

#[test]
fn test_easing_ease_in() {
    // Quadratic: slow start
    assert_eq!(Easing::EaseIn.apply(0.0), 0.0);
    assert_eq!(Easing::EaseIn.apply(0.5), 0.25);
    assert_eq!(Easing::EaseIn.apply(1.0), 1.0);
}

#[test]
fn test_easing_ease_out() {
    // Quadratic: fast start
    assert_eq!(Easing::EaseOut.apply(0.0), 0.0);
    assert_eq!(Easing::EaseOut.apply(0.5), 0.75);
    assert_eq!(Easing::EaseOut.apply(1.0), 1.0);
}

#[test]
fn test_easing_boundaries() {
    for easing in [
        Easing::Linear,
        Easing::EaseIn,
        Easing::EaseOut,
        Easing::EaseInOut,
    ] {
        assert_eq!(easing.apply(0.0), 0.0, "{:?} at 0", easing);
        assert_eq!(easing.apply(1.0), 1.0, "{:?} at 1", easing);
    }
}

#[test]
fn test_easing_monotonic() {
    for easing in [
        Easing::Linear,
        Easing::EaseIn,
        Easing::EaseOut,
        Easing::EaseInOut,
    ] {
        let mut prev = 0.0;
        for i in 1..=10 {
            let t = i as f32 / 10.0;
            let val = easing.apply(t);
            assert!(val >= prev, "{:?} not monotonic at t={}", easing, t);
            prev = val;
        }
    }
}

#[test]
fn test_default_easing_is_ease_out() {
    assert_eq!(Easing::default(), Easing::EaseOut);
}

// ============================================================================
// Starting Fades
// ============================================================================

#[test]
fn test_fade_in_restores_display_up_front() {
    let mut doc = sample_doc();
    let mut fades = FadeState::new();
    let t0 = Instant::now();

    assert_eq!(doc.find("panel").unwrap().effective_display(), Display::None);

    fades.fade_in(&mut doc, "panel", Display::Flex, DURATION, t0);

    assert_eq!(doc.find("panel").unwrap().effective_display(), Display::Flex);
    assert!(doc.has_class("panel", CLASS_OPENING));
    assert!(fades.is_fading("panel"));
    assert!(fades.has_active());
}

#[test]
fn test_fade_out_keeps_display_until_completion() {
    let mut doc = sample_doc();
    let mut fades = FadeState::new();
    let t0 = Instant::now();

    fades.fade_out(&mut doc, "body", DURATION, t0);

    assert_eq!(doc.find("body").unwrap().effective_display(), Display::Block);
    assert!(doc.has_class("body", CLASS_CLOSING));
    assert!(fades.is_fading("body"));
}

#[test]
fn test_new_fade_replaces_old() {
    let mut doc = sample_doc();
    let mut fades = FadeState::with_easing(Easing::Linear);
    let t0 = Instant::now();

    fades.fade_out(&mut doc, "body", DURATION, t0);
    fades.fade_in(&mut doc, "body", Display::Block, DURATION, t0);

    // The fade-in replaced the fade-out: opacity rises from zero
    assert_close(fades.opacity("body", t0).unwrap(), 0.0);
    assert_close(
        fades.opacity("body", t0 + DURATION).unwrap(),
        1.0,
    );
}

// ============================================================================
// Opacity
// ============================================================================

#[test]
fn test_opacity_fade_in_progress() {
    let mut doc = sample_doc();
    let mut fades = FadeState::with_easing(Easing::Linear);
    let t0 = Instant::now();

    fades.fade_in(&mut doc, "panel", Display::Flex, DURATION, t0);

    assert_close(fades.opacity("panel", t0).unwrap(), 0.0);
    assert_close(
        fades.opacity("panel", t0 + DURATION / 2).unwrap(),
        0.5,
    );
    assert_close(fades.opacity("panel", t0 + DURATION).unwrap(), 1.0);
}

#[test]
fn test_opacity_fade_out_progress() {
    let mut doc = sample_doc();
    let mut fades = FadeState::with_easing(Easing::Linear);
    let t0 = Instant::now();

    fades.fade_out(&mut doc, "body", DURATION, t0);

    assert_close(fades.opacity("body", t0).unwrap(), 1.0);
    assert_close(fades.opacity("body", t0 + DURATION / 2).unwrap(), 0.5);
    assert_close(fades.opacity("body", t0 + DURATION).unwrap(), 0.0);
}

#[test]
fn test_opacity_unknown_element() {
    let fades = FadeState::new();
    assert!(fades.opacity("nope", Instant::now()).is_none());
}

#[test]
fn test_zero_duration_fade_is_complete_immediately() {
    let mut doc = sample_doc();
    let mut fades = FadeState::new();
    let t0 = Instant::now();

    fades.fade_in(&mut doc, "panel", Display::Flex, Duration::ZERO, t0);
    assert_close(fades.opacity("panel", t0).unwrap(), 1.0);

    let completed = fades.update(&mut doc, t0);
    assert_eq!(completed, vec!["panel".to_string()]);
}

// ============================================================================
// Completion
// ============================================================================

#[test]
fn test_update_before_completion_keeps_fades() {
    let mut doc = sample_doc();
    let mut fades = FadeState::new();
    let t0 = Instant::now();

    fades.fade_out(&mut doc, "body", DURATION, t0);
    let completed = fades.update(&mut doc, t0 + DURATION / 2);

    assert!(completed.is_empty());
    assert!(fades.is_fading("body"));
    assert!(doc.has_class("body", CLASS_CLOSING));
}

#[test]
fn test_fade_out_completion_hides_element() {
    let mut doc = sample_doc();
    let mut fades = FadeState::new();
    let t0 = Instant::now();

    fades.fade_out(&mut doc, "body", DURATION, t0);
    let completed = fades.update(&mut doc, t0 + DURATION);

    assert_eq!(completed, vec!["body".to_string()]);
    assert!(!doc.has_class("body", CLASS_CLOSING));
    assert_eq!(doc.find("body").unwrap().effective_display(), Display::None);
    assert!(!fades.has_active());
}

#[test]
fn test_fade_in_completion_keeps_display() {
    let mut doc = sample_doc();
    let mut fades = FadeState::new();
    let t0 = Instant::now();

    fades.fade_in(&mut doc, "panel", Display::Flex, DURATION, t0);
    fades.update(&mut doc, t0 + DURATION);

    assert!(!doc.has_class("panel", CLASS_OPENING));
    assert_eq!(doc.find("panel").unwrap().effective_display(), Display::Flex);
    assert!(!fades.has_active());
}
