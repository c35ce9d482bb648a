use std::path::Path;

use crate::{
    animation::{ease::Ease, transition::TransitionTiming},
    foundation::error::{FxError, FxResult},
};

/// Effective settings for every controller in a [`crate::Stage`].
///
/// Every field has a default, so `{}` is a valid config document.
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct FxConfig {
    /// Reveal-on-scroll defaults.
    pub reveal: RevealConfig,
    /// Scroll sampler defaults.
    pub scroll: ScrollConfig,
    /// Slideshow defaults.
    pub slideshow: SlideshowConfig,
    /// Tilt card defaults.
    pub tilt: TiltConfig,
    /// Particle generator defaults.
    pub particles: ParticleConfig,
}

/// Reveal-on-scroll defaults; individual mounts may override threshold and timing.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct RevealConfig {
    /// Minimum visible fraction of the element, in `(0, 1]`.
    pub threshold: f64,
    /// Wait between reveal and the start of the entrance transition.
    pub delay_ms: u64,
    /// Entrance transition length.
    pub duration_ms: u64,
    /// Vertical offset of the hidden state, in pixels.
    pub offset_px: f64,
    /// Entrance curve.
    pub ease: Ease,
}

impl Default for RevealConfig {
    fn default() -> Self {
        Self {
            threshold: 0.15,
            delay_ms: 0,
            duration_ms: 1000,
            offset_px: 48.0,
            ease: Ease::OutCubic,
        }
    }
}

impl RevealConfig {
    /// Transition timing for a mount, applying optional per-mount overrides.
    pub fn timing(&self, delay_ms: Option<u64>, duration_ms: Option<u64>) -> TransitionTiming {
        TransitionTiming {
            delay_ms: delay_ms.unwrap_or(self.delay_ms),
            duration_ms: duration_ms.unwrap_or(self.duration_ms),
            ease: self.ease,
        }
    }
}

/// Scroll sampler defaults.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct ScrollConfig {
    /// Offset past which the navigation bar switches to its scrolled style.
    pub nav_threshold_px: f64,
    /// Fraction of the scroll offset applied to parallax layers.
    pub parallax_factor: f64,
    /// Height of the fixed header subtracted from anchor scroll targets.
    pub header_offset_px: f64,
}

impl Default for ScrollConfig {
    fn default() -> Self {
        Self {
            nav_threshold_px: 50.0,
            parallax_factor: 0.1,
            header_offset_px: 80.0,
        }
    }
}

/// Slideshow defaults.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct SlideshowConfig {
    /// Time between index advances.
    pub interval_ms: u64,
    /// Cross-fade length; must be shorter than the interval.
    pub crossfade_ms: u64,
    /// Blur applied to fully hidden slides.
    pub max_blur_px: f64,
}

impl Default for SlideshowConfig {
    fn default() -> Self {
        Self {
            interval_ms: 4000,
            crossfade_ms: 1000,
            max_blur_px: 8.0,
        }
    }
}

/// Tilt card defaults.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct TiltConfig {
    /// Rotation reached at the card edges.
    pub max_rotation_deg: f64,
    /// Viewports narrower than this never tilt.
    pub disable_below_width_px: f64,
}

impl Default for TiltConfig {
    fn default() -> Self {
        Self {
            max_rotation_deg: 10.0,
            disable_below_width_px: 768.0,
        }
    }
}

/// Particle generator defaults.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct ParticleConfig {
    /// Number of ambient falling leaves.
    pub leaf_count: usize,
    /// Number of pieces in a celebration burst.
    pub confetti_count: usize,
    /// Base seed; bursts derive their own seeds from it.
    pub seed: u64,
}

impl Default for ParticleConfig {
    fn default() -> Self {
        Self {
            leaf_count: 12,
            confetti_count: 60,
            seed: 0,
        }
    }
}

impl FxConfig {
    /// Parse a JSON config document and validate it.
    pub fn from_json_str(s: &str) -> FxResult<Self> {
        let cfg: Self = serde_json::from_str(s)?;
        cfg.validate()?;
        Ok(cfg)
    }

    /// Read, parse and validate a JSON config file.
    pub fn load(path: &Path) -> FxResult<Self> {
        let s = std::fs::read_to_string(path).map_err(|e| {
            FxError::Other(anyhow::Error::new(e).context(format!(
                "read config '{}'",
                path.display()
            )))
        })?;
        Self::from_json_str(&s)
    }

    /// Check every field for ranges the controllers rely on.
    pub fn validate(&self) -> FxResult<()> {
        validate_threshold(self.reveal.threshold)?;
        if !self.reveal.offset_px.is_finite() {
            return Err(FxError::validation("reveal.offset_px must be finite"));
        }

        for (name, value) in [
            ("scroll.nav_threshold_px", self.scroll.nav_threshold_px),
            ("scroll.parallax_factor", self.scroll.parallax_factor),
            ("scroll.header_offset_px", self.scroll.header_offset_px),
        ] {
            if !value.is_finite() {
                return Err(FxError::validation(format!("{name} must be finite")));
            }
        }

        if self.slideshow.interval_ms == 0 {
            return Err(FxError::validation("slideshow.interval_ms must be > 0"));
        }
        if self.slideshow.crossfade_ms >= self.slideshow.interval_ms {
            return Err(FxError::validation(
                "slideshow.crossfade_ms must be shorter than slideshow.interval_ms",
            ));
        }
        if !self.slideshow.max_blur_px.is_finite() || self.slideshow.max_blur_px < 0.0 {
            return Err(FxError::validation(
                "slideshow.max_blur_px must be finite and >= 0",
            ));
        }

        if !self.tilt.max_rotation_deg.is_finite() || self.tilt.max_rotation_deg < 0.0 {
            return Err(FxError::validation(
                "tilt.max_rotation_deg must be finite and >= 0",
            ));
        }
        if !self.tilt.disable_below_width_px.is_finite() || self.tilt.disable_below_width_px < 0.0
        {
            return Err(FxError::validation(
                "tilt.disable_below_width_px must be finite and >= 0",
            ));
        }
        Ok(())
    }
}

/// Reveal thresholds are visible fractions in `(0, 1]`.
pub(crate) fn validate_threshold(threshold: f64) -> FxResult<()> {
    if !threshold.is_finite() || threshold <= 0.0 || threshold > 1.0 {
        return Err(FxError::validation(format!(
            "reveal threshold must be in (0, 1], got {threshold}"
        )));
    }
    Ok(())
}

#[cfg(test)]
#[path = "../tests/unit/config.rs"]
mod tests;
