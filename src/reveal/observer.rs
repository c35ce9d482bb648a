use std::collections::BTreeMap;

use crate::{
    animation::transition::TransitionTiming,
    config::validate_threshold,
    foundation::core::{ElementKey, Millis, Rect},
    foundation::error::{FxError, FxResult},
};

/// Whether the host environment can report element visibility at all.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ObserverCapability {
    /// Visibility is observable; targets reveal normally.
    #[default]
    Available,
    /// No observation API; targets stay in their pre-reveal state forever.
    Unavailable,
}

/// One element animated in on first sufficient visibility.
#[derive(Clone, Debug, PartialEq)]
pub struct RevealTarget {
    /// Element bounds in document coordinates.
    pub rect: Rect,
    /// Minimum visible fraction that triggers the reveal.
    pub threshold: f64,
    /// Entrance transition played after the reveal.
    pub timing: TransitionTiming,
    revealed_at: Option<Millis>,
}

impl RevealTarget {
    /// Whether the one-shot reveal has fired.
    pub fn revealed(&self) -> bool {
        self.revealed_at.is_some()
    }

    /// Session time of the reveal, if it happened.
    pub fn revealed_at(&self) -> Option<Millis> {
        self.revealed_at
    }
}

/// Fraction of `element`'s area inside `viewport`, in `[0, 1]`.
///
/// Zero-area elements count as fully visible while they touch the viewport.
pub fn intersection_ratio(element: Rect, viewport: Rect) -> f64 {
    let element = element.abs();
    let viewport = viewport.abs();
    let area = element.area();
    if area <= 0.0 {
        let touches = element.x0 <= viewport.x1
            && element.x1 >= viewport.x0
            && element.y0 <= viewport.y1
            && element.y1 >= viewport.y0;
        return if touches { 1.0 } else { 0.0 };
    }
    let overlap = element.intersect(viewport);
    (overlap.area() / area).clamp(0.0, 1.0)
}

/// Watches reveal targets and flips each one exactly once.
///
/// Revealed targets stop being watched, so later visibility changes (scrolling back
/// up, relayouts) never hide them again.
#[derive(Debug, Default)]
pub struct VisibilityObserver {
    capability: ObserverCapability,
    targets: BTreeMap<ElementKey, RevealTarget>,
}

impl VisibilityObserver {
    /// Create an observer for the given host capability.
    pub fn new(capability: ObserverCapability) -> Self {
        if capability == ObserverCapability::Unavailable {
            tracing::debug!("visibility observation unavailable; reveals are disabled");
        }
        Self {
            capability,
            targets: BTreeMap::new(),
        }
    }

    /// Host capability this observer was built with.
    pub fn capability(&self) -> ObserverCapability {
        self.capability
    }

    /// Start watching `key`, checking it once against the current viewport.
    ///
    /// Returns whether the element revealed immediately.
    pub fn attach(
        &mut self,
        key: ElementKey,
        rect: Rect,
        threshold: f64,
        timing: TransitionTiming,
        viewport: Rect,
        now: Millis,
    ) -> FxResult<bool> {
        validate_threshold(threshold)?;
        if self.targets.contains_key(&key) {
            return Err(FxError::lifecycle(format!(
                "reveal target '{key}' is already attached"
            )));
        }

        let mut target = RevealTarget {
            rect,
            threshold,
            timing,
            revealed_at: None,
        };
        let revealed = self.check(&key, &mut target, viewport, now);
        self.targets.insert(key, target);
        Ok(revealed)
    }

    /// Stop watching `key` and drop its state. Unknown keys are ignored.
    pub fn detach(&mut self, key: &ElementKey) -> Option<RevealTarget> {
        self.targets.remove(key)
    }

    /// Update an element's bounds after a layout change and re-check it.
    ///
    /// Returns whether this call revealed the element.
    pub fn relayout(&mut self, key: &ElementKey, rect: Rect, viewport: Rect, now: Millis) -> bool {
        let capability = self.capability;
        let Some(target) = self.targets.get_mut(key) else {
            tracing::debug!(%key, "relayout for unknown reveal target");
            return false;
        };
        target.rect = rect;
        reveal_if_visible(capability, key, target, viewport, now)
    }

    /// Re-check every watched target against `viewport`, returning the newly revealed keys.
    pub fn observe(&mut self, viewport: Rect, now: Millis) -> Vec<ElementKey> {
        let capability = self.capability;
        let mut fired = Vec::new();
        for (key, target) in self.targets.iter_mut() {
            if reveal_if_visible(capability, key, target, viewport, now) {
                fired.push(key.clone());
            }
        }
        fired
    }

    /// Look up a target.
    pub fn get(&self, key: &ElementKey) -> Option<&RevealTarget> {
        self.targets.get(key)
    }

    /// All targets in key order.
    pub fn iter(&self) -> impl Iterator<Item = (&ElementKey, &RevealTarget)> {
        self.targets.iter()
    }

    /// Number of attached targets.
    pub fn len(&self) -> usize {
        self.targets.len()
    }

    /// Whether nothing is attached.
    pub fn is_empty(&self) -> bool {
        self.targets.is_empty()
    }

    /// Number of attached targets still waiting for their reveal.
    pub fn watching(&self) -> usize {
        self.targets.values().filter(|t| !t.revealed()).count()
    }

    fn check(
        &self,
        key: &ElementKey,
        target: &mut RevealTarget,
        viewport: Rect,
        now: Millis,
    ) -> bool {
        reveal_if_visible(self.capability, key, target, viewport, now)
    }
}

fn reveal_if_visible(
    capability: ObserverCapability,
    key: &ElementKey,
    target: &mut RevealTarget,
    viewport: Rect,
    now: Millis,
) -> bool {
    if capability == ObserverCapability::Unavailable || target.revealed() {
        return false;
    }
    let ratio = intersection_ratio(target.rect, viewport);
    if ratio > 0.0 && ratio >= target.threshold {
        target.revealed_at = Some(now);
        tracing::debug!(%key, ratio, at_ms = now.0, "revealed");
        return true;
    }
    false
}

#[cfg(test)]
#[path = "../../tests/unit/reveal/observer.rs"]
mod tests;
