use std::time::{Duration, Instant};

use thiserror::Error;

use crate::document::Document;
use crate::event::Event;
use crate::fade::FadeState;
use crate::timer::Deadline;
use crate::types::Display;

/// Class toggled on the trigger while the menu is expanded.
pub const CLASS_TRIGGER_ACTIVE: &str = "change";
/// Data attribute marking the elements the menu controls.
pub const ATTR_DISPLAYED: &str = "displayed";

pub const DEFAULT_TRIGGER_ID: &str = "btn-hamburger-menu";
pub const DEFAULT_BACKDROP_ID: &str = "menu-backdrop";

const DEFAULT_FADE_DURATION: Duration = Duration::from_millis(450);

#[derive(Debug, Error)]
pub enum MenuError {
    #[error("menu trigger `{0}` not found in document")]
    MissingTrigger(String),
    #[error("menu backdrop `{0}` not found in document")]
    MissingBackdrop(String),
}

#[derive(Debug, Clone)]
pub struct MenuConfig {
    pub trigger_id: String,
    pub backdrop_id: String,
    /// Length of the fade animation; the toggle guard window matches it.
    pub fade_duration: Duration,
}

impl Default for MenuConfig {
    fn default() -> Self {
        Self {
            trigger_id: DEFAULT_TRIGGER_ID.to_string(),
            backdrop_id: DEFAULT_BACKDROP_ID.to_string(),
            fade_duration: DEFAULT_FADE_DURATION,
        }
    }
}

impl MenuConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn trigger_id(mut self, id: impl Into<String>) -> Self {
        self.trigger_id = id.into();
        self
    }

    pub fn backdrop_id(mut self, id: impl Into<String>) -> Self {
        self.backdrop_id = id.into();
        self
    }

    pub fn fade_duration(mut self, duration: Duration) -> Self {
        self.fade_duration = duration;
        self
    }
}

/// Toggle guard state. `Animating` is entered on toggle and exited only by
/// deadline expiry, never by per-element fade completion.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TogglePhase {
    #[default]
    Idle,
    Animating,
}

/// A controlled element: its ID paired with its natural (pre-hidden)
/// display value, recorded at initialization.
#[derive(Debug, Clone)]
struct ToggleTarget {
    id: String,
    natural: Display,
}

/// The menu controller.
///
/// Owns the two partitions of controlled elements, the visibility flag, and
/// the animation-window guard. All document mutation goes through the
/// `Document` passed into each operation.
#[derive(Debug)]
pub struct Menu {
    config: MenuConfig,
    /// Elements hidden while the menu is collapsed (`displayed = "false"`).
    hidden: Vec<ToggleTarget>,
    /// Elements shown while the menu is collapsed (`displayed = "true"`).
    displayed: Vec<ToggleTarget>,
    visible: bool,
    phase: TogglePhase,
    deadline: Deadline,
    fades: FadeState,
}

impl Menu {
    /// Scan the document for controlled elements and build the controller.
    ///
    /// Fails if the trigger or backdrop is absent.
    pub fn initialize(doc: &Document, config: MenuConfig) -> Result<Self, MenuError> {
        if !doc.contains(&config.trigger_id) {
            return Err(MenuError::MissingTrigger(config.trigger_id));
        }
        if !doc.contains(&config.backdrop_id) {
            return Err(MenuError::MissingBackdrop(config.backdrop_id));
        }

        let hidden = collect_targets(doc, "false");
        let displayed = collect_targets(doc, "true");
        log::debug!(
            "menu initialized: {} hidden, {} displayed",
            hidden.len(),
            displayed.len()
        );

        Ok(Self {
            config,
            hidden,
            displayed,
            visible: false,
            phase: TogglePhase::Idle,
            deadline: Deadline::new(),
            fades: FadeState::new(),
        })
    }

    pub fn config(&self) -> &MenuConfig {
        &self.config
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    pub fn phase(&self) -> TogglePhase {
        self.phase
    }

    pub fn fades(&self) -> &FadeState {
        &self.fades
    }

    /// The sole state transition.
    ///
    /// While the animation window is open this is a silent no-op. Otherwise
    /// it toggles the trigger class, starts fade-out on the currently
    /// visible partition and fade-in on the currently hidden one, and arms
    /// the deadline that will flip the visibility flag.
    pub fn toggle(&mut self, doc: &mut Document, now: Instant) -> Result<(), MenuError> {
        if !doc.contains(&self.config.trigger_id) {
            return Err(MenuError::MissingTrigger(self.config.trigger_id.clone()));
        }

        if self.phase == TogglePhase::Animating {
            log::debug!("toggle ignored: animation window still open");
            return Ok(());
        }

        doc.toggle_class(&self.config.trigger_id, CLASS_TRIGGER_ACTIVE);

        let duration = self.config.fade_duration;
        let (out_ids, in_targets): (Vec<String>, Vec<(String, Display)>) = if self.visible {
            (
                self.hidden.iter().map(|t| t.id.clone()).collect(),
                self.displayed
                    .iter()
                    .map(|t| (t.id.clone(), t.natural))
                    .collect(),
            )
        } else {
            (
                self.displayed.iter().map(|t| t.id.clone()).collect(),
                self.hidden
                    .iter()
                    .map(|t| (t.id.clone(), t.natural))
                    .collect(),
            )
        };

        log::debug!(
            "menu {}: {} fading out, {} fading in",
            if self.visible { "closing" } else { "opening" },
            out_ids.len(),
            in_targets.len()
        );

        for id in &out_ids {
            self.fades.fade_out(doc, id, duration, now);
        }
        for (id, natural) in &in_targets {
            self.fades.fade_in(doc, id, *natural, duration, now);
        }

        self.phase = TogglePhase::Animating;
        self.deadline.arm(now, duration);
        Ok(())
    }

    /// Drive fade completion and the animation window.
    ///
    /// Returns true when the window closed and the visibility flag flipped.
    pub fn update(&mut self, doc: &mut Document, now: Instant) -> bool {
        self.fades.update(doc, now);

        if self.phase == TogglePhase::Animating && self.deadline.expired(now) {
            self.deadline.cancel();
            self.phase = TogglePhase::Idle;
            self.visible = !self.visible;
            log::debug!(
                "menu now {}",
                if self.visible { "expanded" } else { "collapsed" }
            );
            return true;
        }

        false
    }

    /// Route an event: clicks on the trigger or backdrop toggle the menu,
    /// everything else is ignored. Returns true if the event was consumed.
    pub fn handle_event(
        &mut self,
        doc: &mut Document,
        event: &Event,
        now: Instant,
    ) -> Result<bool, MenuError> {
        if let Event::Click {
            target: Some(target),
            ..
        } = event
        {
            if *target == self.config.trigger_id || *target == self.config.backdrop_id {
                self.toggle(doc, now)?;
                return Ok(true);
            }
        }
        Ok(false)
    }
}

fn collect_targets(doc: &Document, value: &str) -> Vec<ToggleTarget> {
    doc.query_data(ATTR_DISPLAYED, value)
        .into_iter()
        .filter_map(|id| {
            doc.find(&id).map(|element| ToggleTarget {
                natural: element.display,
                id,
            })
        })
        .collect()
}
