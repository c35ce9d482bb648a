use std::collections::BTreeMap;

use crate::{
    cycle::crossfade::SlideLayer,
    foundation::core::{ElementKey, Viewport},
    modal::ModalState,
    reveal::style::RevealStyle,
    scroll::sampler::ScrollListener,
    tilt::card::TiltPose,
};

/// Everything the presentation layer needs to draw one moment of a stage.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct StageSnapshot {
    /// Session clock.
    pub now_ms: u64,
    /// Current viewport.
    pub viewport: Viewport,
    /// Latest scroll offset.
    pub scroll_offset_y: f64,
    /// Derived scroll signals per listening element.
    pub scroll_listeners: BTreeMap<ElementKey, ScrollListener>,
    /// Reveal state per target.
    pub reveals: BTreeMap<ElementKey, RevealSnapshot>,
    /// Slideshow state per show.
    pub slideshows: BTreeMap<ElementKey, SlideshowSnapshot>,
    /// Tilt pose per card.
    pub tilts: BTreeMap<ElementKey, TiltPose>,
    /// Modal flags.
    pub modals: ModalState,
}

/// Reveal state of one target.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct RevealSnapshot {
    /// Whether the one-shot reveal has fired.
    pub revealed: bool,
    /// When it fired.
    pub revealed_at_ms: Option<u64>,
    /// Current entrance style.
    pub style: RevealStyle,
}

/// State of one slideshow.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct SlideshowSnapshot {
    /// Fully visible slide.
    pub current_index: usize,
    /// Whether the timer is armed.
    pub running: bool,
    /// Per-slide opacity and blur.
    pub layers: Vec<SlideLayer>,
}

impl StageSnapshot {
    /// Whether any navigation bar is in its scrolled style.
    pub fn nav_scrolled(&self) -> bool {
        self.scroll_listeners
            .values()
            .any(|l| matches!(l, ScrollListener::NavBar { scrolled: true, .. }))
    }

    /// Parallax translation of `key`, if it is a parallax listener.
    pub fn parallax_offset(&self, key: &ElementKey) -> Option<f64> {
        match self.scroll_listeners.get(key) {
            Some(ScrollListener::Parallax { offset_px, .. }) => Some(*offset_px),
            _ => None,
        }
    }

    /// Whether `key` has revealed; unknown keys count as not revealed.
    pub fn is_revealed(&self, key: &ElementKey) -> bool {
        self.reveals.get(key).is_some_and(|r| r.revealed)
    }
}
