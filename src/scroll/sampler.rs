use std::collections::BTreeMap;

use crate::foundation::core::ElementKey;

/// Signal A: navigation bar switches style strictly past `threshold_px`.
pub fn nav_scrolled(offset_y: f64, threshold_px: f64) -> bool {
    offset_y > threshold_px
}

/// Signal B: vertical parallax translation for a scroll offset.
pub fn parallax_offset(offset_y: f64, factor: f64) -> f64 {
    offset_y * factor
}

/// A scroll listener registered by a mounted element.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ScrollListener {
    /// Navigation bar style switch.
    NavBar {
        /// Offset past which `scrolled` is true.
        threshold_px: f64,
        /// Last derived value.
        scrolled: bool,
    },
    /// Decorative element translated at a fraction of the scroll speed.
    Parallax {
        /// Fraction of the scroll offset.
        factor: f64,
        /// Last derived translation.
        offset_px: f64,
    },
}

impl ScrollListener {
    /// Fresh nav-bar listener.
    pub fn nav_bar(threshold_px: f64) -> Self {
        Self::NavBar {
            threshold_px,
            scrolled: false,
        }
    }

    /// Fresh parallax listener.
    pub fn parallax(factor: f64) -> Self {
        Self::Parallax {
            factor,
            offset_px: 0.0,
        }
    }

    fn sample(&mut self, offset_y: f64) {
        match self {
            Self::NavBar {
                threshold_px,
                scrolled,
            } => *scrolled = nav_scrolled(offset_y, *threshold_px),
            Self::Parallax { factor, offset_px } => *offset_px = parallax_offset(offset_y, *factor),
        }
    }
}

/// Page-wide scroll offset plus the listeners currently subscribed to it.
///
/// Listeners exist only between `subscribe` and `unsubscribe`; scroll events never
/// touch released listeners.
#[derive(Debug, Default)]
pub struct ScrollSampler {
    offset_y: f64,
    listeners: BTreeMap<ElementKey, ScrollListener>,
}

impl ScrollSampler {
    /// Sampler starting at offset zero with no listeners.
    pub fn new() -> Self {
        Self::default()
    }

    /// Latest accepted scroll offset.
    pub fn offset_y(&self) -> f64 {
        self.offset_y
    }

    /// Register `listener` under `key`, sampling the current offset immediately.
    ///
    /// Re-subscribing an existing key replaces its listener.
    pub fn subscribe(&mut self, key: ElementKey, mut listener: ScrollListener) {
        listener.sample(self.offset_y);
        if self.listeners.insert(key.clone(), listener).is_some() {
            tracing::debug!(%key, "scroll listener replaced");
        }
    }

    /// Release the listener under `key`.
    pub fn unsubscribe(&mut self, key: &ElementKey) -> Option<ScrollListener> {
        self.listeners.remove(key)
    }

    /// Apply one scroll event. Non-finite offsets are dropped.
    ///
    /// Returns whether the event was accepted.
    pub fn on_scroll(&mut self, offset_y: f64) -> bool {
        if !offset_y.is_finite() {
            tracing::warn!(offset_y, "ignoring non-finite scroll offset");
            return false;
        }
        self.offset_y = offset_y;
        for listener in self.listeners.values_mut() {
            listener.sample(offset_y);
        }
        tracing::trace!(offset_y, listeners = self.listeners.len(), "scroll sampled");
        true
    }

    /// Look up a listener.
    pub fn get(&self, key: &ElementKey) -> Option<&ScrollListener> {
        self.listeners.get(key)
    }

    /// All listeners in key order.
    pub fn iter(&self) -> impl Iterator<Item = (&ElementKey, &ScrollListener)> {
        self.listeners.iter()
    }

    /// Number of registered listeners.
    pub fn listener_count(&self) -> usize {
        self.listeners.len()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/scroll/sampler.rs"]
mod tests;
