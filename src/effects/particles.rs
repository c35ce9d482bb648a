use crate::foundation::math::Rng64;

/// Kind of decorative particle.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ParticleKind {
    /// Ambient leaf drifting from the top-left toward the bottom-right, looping.
    Leaf,
    /// One-shot celebration piece.
    Confetti,
}

/// Everything a renderer needs to spawn, animate and later remove one particle.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Particle {
    /// Particle kind.
    pub kind: ParticleKind,
    /// Horizontal start position as a percentage of the viewport width.
    pub left_pct: f64,
    /// Wait before the animation starts.
    pub delay_s: f64,
    /// Length of one fall.
    pub duration_s: f64,
    /// Glyph size.
    pub size_px: f64,
    /// Total spin over one fall.
    pub rotation_deg: f64,
    /// Straight (non-premultiplied) RGBA color.
    pub color_rgba8: [u8; 4],
}

/// Leaf green at 30% alpha.
const LEAF_COLOR: [u8; 4] = [22, 163, 74, 77];

const CONFETTI_PALETTE: [[u8; 4]; 5] = [
    [22, 163, 74, 255],
    [250, 204, 21, 255],
    [249, 115, 22, 255],
    [239, 68, 68, 255],
    [255, 255, 255, 255],
];

/// Ambient falling leaves, clustered toward the left half of the page.
pub fn falling_leaves(count: usize, seed: u64) -> Vec<Particle> {
    let mut rng = Rng64::new(seed);
    (0..count)
        .map(|_| Particle {
            kind: ParticleKind::Leaf,
            left_pct: rng.range(0.0, 50.0),
            delay_s: rng.range(0.0, 8.0),
            duration_s: rng.range(10.0, 20.0),
            size_px: rng.range(15.0, 35.0),
            rotation_deg: 360.0,
            color_rgba8: LEAF_COLOR,
        })
        .collect()
}

/// A celebration burst spread across the full page width.
pub fn confetti_burst(count: usize, seed: u64) -> Vec<Particle> {
    let mut rng = Rng64::new(seed);
    (0..count)
        .map(|_| {
            let left_pct = rng.range(0.0, 100.0);
            let delay_s = rng.range(0.0, 0.5);
            let duration_s = rng.range(2.0, 5.0);
            let size_px = rng.range(6.0, 14.0);
            let rotation_deg = rng.range(0.0, 720.0);
            let color_rgba8 = rng
                .pick(&CONFETTI_PALETTE)
                .copied()
                .unwrap_or(CONFETTI_PALETTE[0]);
            Particle {
                kind: ParticleKind::Confetti,
                left_pct,
                delay_s,
                duration_s,
                size_px,
                rotation_deg,
                color_rgba8,
            }
        })
        .collect()
}

#[cfg(test)]
#[path = "../../tests/unit/effects/particles.rs"]
mod tests;
