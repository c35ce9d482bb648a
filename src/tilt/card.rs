use crate::foundation::core::{Point, Rect};

/// Shadow emphasis applied while the pointer is over a card.
const HOVER_SHADOW: f64 = 1.0;

/// Rotation and shadow of a tilt card.
#[derive(Clone, Copy, Debug, Default, PartialEq, serde::Serialize)]
pub struct TiltPose {
    /// Rotation around the horizontal axis, in degrees.
    pub rotate_x_deg: f64,
    /// Rotation around the vertical axis, in degrees.
    pub rotate_y_deg: f64,
    /// Shadow emphasis: 0 at rest, 1 while engaged.
    pub shadow: f64,
}

impl TiltPose {
    /// Flat, unshadowed.
    pub const REST: Self = Self {
        rotate_x_deg: 0.0,
        rotate_y_deg: 0.0,
        shadow: 0.0,
    };

    /// Whether this is the rest pose.
    pub fn is_rest(&self) -> bool {
        *self == Self::REST
    }
}

/// Rotation angles `(rotate_x, rotate_y)` for a pointer over `rect`.
///
/// Both inputs share one coordinate space. The pointer at the box center gives
/// `(0, 0)`; the top-left corner gives `(+max, -max)`. Degenerate boxes give `(0, 0)`.
pub fn tilt_angles(pointer: Point, rect: Rect, max_deg: f64) -> (f64, f64) {
    let rect = rect.abs();
    let cx = rect.width() / 2.0;
    let cy = rect.height() / 2.0;
    if cx <= 0.0 || cy <= 0.0 {
        return (0.0, 0.0);
    }
    let local_x = pointer.x - rect.x0;
    let local_y = pointer.y - rect.y0;
    let rotate_x = -max_deg * (local_y - cy) / cy;
    let rotate_y = max_deg * (local_x - cx) / cx;
    (rotate_x, rotate_y)
}

/// Hover tilt state for one card.
#[derive(Clone, Debug, PartialEq)]
pub struct TiltCard {
    max_rotation_deg: f64,
    disable_below_width_px: f64,
    pose: TiltPose,
}

impl TiltCard {
    /// Card at rest with the given limits.
    pub fn new(max_rotation_deg: f64, disable_below_width_px: f64) -> Self {
        Self {
            max_rotation_deg,
            disable_below_width_px,
            pose: TiltPose::REST,
        }
    }

    /// Whether tilting is allowed at this viewport width.
    pub fn enabled_at(&self, viewport_width: f64) -> bool {
        viewport_width >= self.disable_below_width_px
    }

    /// Follow the pointer. Narrow viewports keep the card at rest.
    pub fn on_pointer_move(&mut self, pointer: Point, rect: Rect, viewport_width: f64) -> TiltPose {
        if !self.enabled_at(viewport_width) {
            self.pose = TiltPose::REST;
            return self.pose;
        }
        let (rotate_x_deg, rotate_y_deg) = tilt_angles(pointer, rect, self.max_rotation_deg);
        self.pose = TiltPose {
            rotate_x_deg,
            rotate_y_deg,
            shadow: HOVER_SHADOW,
        };
        self.pose
    }

    /// Pointer left the card: always back to rest.
    pub fn on_pointer_leave(&mut self) -> TiltPose {
        self.pose = TiltPose::REST;
        self.pose
    }

    /// Current pose.
    pub fn pose(&self) -> TiltPose {
        self.pose
    }
}

#[cfg(test)]
#[path = "../../tests/unit/tilt/card.rs"]
mod tests;
