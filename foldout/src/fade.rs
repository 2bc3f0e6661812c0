use std::collections::HashMap;
use std::time::{Duration, Instant};

use crate::document::Document;
use crate::types::Display;

/// Transient class carried by an element while it fades in.
pub const CLASS_OPENING: &str = "opening";
/// Transient class carried by an element while it fades out.
pub const CLASS_CLOSING: &str = "closing";

/// Easing function for fades.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Easing {
    Linear,
    EaseIn,
    #[default]
    EaseOut,
    EaseInOut,
}

impl Easing {
    /// Apply easing to progress (0.0 to 1.0).
    pub fn apply(self, t: f32) -> f32 {
        match self {
            Easing::Linear => t,
            Easing::EaseIn => t * t,
            Easing::EaseOut => 1.0 - (1.0 - t) * (1.0 - t),
            Easing::EaseInOut => {
                if t < 0.5 {
                    2.0 * t * t
                } else {
                    1.0 - (-2.0 * t + 2.0).powi(2) / 2.0
                }
            }
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FadeDirection {
    In,
    Out,
}

#[derive(Debug, Clone, Copy)]
struct ActiveFade {
    direction: FadeDirection,
    start: Instant,
    duration: Duration,
    easing: Easing,
}

impl ActiveFade {
    fn progress(&self, now: Instant) -> f32 {
        if self.duration.is_zero() {
            return 1.0;
        }
        let elapsed = now.duration_since(self.start);
        (elapsed.as_secs_f32() / self.duration.as_secs_f32()).min(1.0)
    }

    fn finished(&self, now: Instant) -> bool {
        now.duration_since(self.start) >= self.duration
    }
}

/// Tracks active fades, keyed by element ID.
///
/// Starting a fade applies the element's entry state (display restore for
/// fade-in, nothing for fade-out) and the transient class; `update` performs
/// the completion side effects. At most one fade is active per element;
/// starting a new one replaces the old.
#[derive(Debug, Default)]
pub struct FadeState {
    active: HashMap<String, ActiveFade>,
    easing: Easing,
}

impl FadeState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_easing(easing: Easing) -> Self {
        Self {
            active: HashMap::new(),
            easing,
        }
    }

    /// Returns true if any fade is currently active.
    pub fn has_active(&self) -> bool {
        !self.active.is_empty()
    }

    pub fn is_fading(&self, id: &str) -> bool {
        self.active.contains_key(id)
    }

    /// Start fading an element in: restore its natural display up front,
    /// add the `opening` class, and track progress until `duration` elapses.
    pub fn fade_in(
        &mut self,
        doc: &mut Document,
        id: &str,
        natural: Display,
        duration: Duration,
        now: Instant,
    ) {
        doc.set_inline_display(id, Some(natural));
        doc.add_class(id, CLASS_OPENING);
        log::trace!("fade in {id} over {duration:?}");
        self.active.insert(
            id.to_string(),
            ActiveFade {
                direction: FadeDirection::In,
                start: now,
                duration,
                easing: self.easing,
            },
        );
    }

    /// Start fading an element out: add the `closing` class; the element
    /// keeps its display until the fade completes.
    pub fn fade_out(&mut self, doc: &mut Document, id: &str, duration: Duration, now: Instant) {
        doc.add_class(id, CLASS_CLOSING);
        log::trace!("fade out {id} over {duration:?}");
        self.active.insert(
            id.to_string(),
            ActiveFade {
                direction: FadeDirection::Out,
                start: now,
                duration,
                easing: self.easing,
            },
        );
    }

    /// Eased opacity of an element, 0.0 (invisible) to 1.0 (opaque).
    /// Returns None if the element is not fading.
    pub fn opacity(&self, id: &str, now: Instant) -> Option<f32> {
        let fade = self.active.get(id)?;
        let eased = fade.easing.apply(fade.progress(now));
        Some(match fade.direction {
            FadeDirection::In => eased,
            FadeDirection::Out => 1.0 - eased,
        })
    }

    /// Complete finished fades: remove the transient class and, for
    /// fade-out, hide the element. Returns the IDs that completed.
    pub fn update(&mut self, doc: &mut Document, now: Instant) -> Vec<String> {
        let finished: Vec<(String, FadeDirection)> = self
            .active
            .iter()
            .filter(|(_, fade)| fade.finished(now))
            .map(|(id, fade)| (id.clone(), fade.direction))
            .collect();

        for (id, direction) in &finished {
            match direction {
                FadeDirection::In => {
                    doc.remove_class(id, CLASS_OPENING);
                }
                FadeDirection::Out => {
                    doc.remove_class(id, CLASS_CLOSING);
                    doc.set_inline_display(id, Some(Display::None));
                }
            }
            self.active.remove(id);
        }

        finished.into_iter().map(|(id, _)| id).collect()
    }
}
