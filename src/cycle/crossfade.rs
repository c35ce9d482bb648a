use crate::{
    cycle::driver::CycleDriver,
    foundation::core::Millis,
};

/// Render state of one slide. Every slide is drawn; only opacity and blur differ.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct SlideLayer {
    /// Position in the image sequence.
    pub index: usize,
    /// Image URL.
    pub image: String,
    /// Opacity in `[0, 1]`.
    pub opacity: f64,
    /// Gaussian blur radius in pixels.
    pub blur_px: f64,
}

/// Linear cross-fade progress since the last switch, in `[0, 1]`.
///
/// Before the first switch (or after a manual tick) the show is at rest.
pub fn crossfade_progress(driver: &CycleDriver, now: Millis, crossfade_ms: u64) -> f64 {
    let Some(at) = driver.last_switch_at() else {
        return 1.0;
    };
    if crossfade_ms == 0 {
        return 1.0;
    }
    (now.since(at) as f64 / crossfade_ms as f64).clamp(0.0, 1.0)
}

/// Per-slide opacity and blur at `now`.
///
/// The current slide fades in and sharpens while the previous one fades out and
/// blurs; all others stay transparent at full blur.
pub fn slide_layers(
    driver: &CycleDriver,
    now: Millis,
    crossfade_ms: u64,
    max_blur_px: f64,
) -> Vec<SlideLayer> {
    let current = driver.current_index();
    let previous = driver.previous_index().filter(|&i| i != current);
    // A one-image show has nothing to fade from.
    let p = if previous.is_some() {
        crossfade_progress(driver, now, crossfade_ms)
    } else {
        1.0
    };

    driver
        .images()
        .iter()
        .enumerate()
        .map(|(index, image)| {
            let opacity = if index == current {
                p
            } else if Some(index) == previous {
                1.0 - p
            } else {
                0.0
            };
            SlideLayer {
                index,
                image: image.clone(),
                opacity,
                blur_px: max_blur_px * (1.0 - opacity),
            }
        })
        .collect()
}

#[cfg(test)]
#[path = "../../tests/unit/cycle/crossfade.rs"]
mod tests;
