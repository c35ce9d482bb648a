use crate::{
    foundation::core::{ElementKey, Rect},
    modal::ModalKind,
};

/// An element the host mounts into the stage.
///
/// Optional fields fall back to the stage's [`crate::FxConfig`].
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum MountSpec {
    /// Element that animates in on first sufficient visibility.
    Reveal {
        /// Element identity.
        key: ElementKey,
        /// Bounds in document coordinates.
        rect: Rect,
        /// Visible fraction override.
        #[serde(default)]
        threshold: Option<f64>,
        /// Entrance delay override.
        #[serde(default)]
        delay_ms: Option<u64>,
        /// Entrance duration override.
        #[serde(default)]
        duration_ms: Option<u64>,
    },
    /// Navigation bar listening for the scrolled style switch.
    NavBar {
        /// Element identity.
        key: ElementKey,
    },
    /// Decorative element translated at a fraction of the scroll speed.
    Parallax {
        /// Element identity.
        key: ElementKey,
        /// Factor override.
        #[serde(default)]
        factor: Option<f64>,
    },
    /// Auto-advancing image rotation.
    Slideshow {
        /// Element identity.
        key: ElementKey,
        /// Image URLs in display order.
        images: Vec<String>,
        /// Interval override.
        #[serde(default)]
        interval_ms: Option<u64>,
    },
    /// Card following the pointer with a 3D tilt.
    TiltCard {
        /// Element identity.
        key: ElementKey,
    },
}

impl MountSpec {
    /// Identity of the mounted element.
    pub fn key(&self) -> &ElementKey {
        match self {
            Self::Reveal { key, .. }
            | Self::NavBar { key }
            | Self::Parallax { key, .. }
            | Self::Slideshow { key, .. }
            | Self::TiltCard { key } => key,
        }
    }
}

/// Everything the hosting environment can tell a stage, in arrival order.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum HostEvent {
    /// Window scrolled to a new vertical offset.
    Scroll {
        /// New offset in pixels.
        offset_y: f64,
    },
    /// Window resized.
    Resize {
        /// New inner width.
        width: f64,
        /// New inner height.
        height: f64,
    },
    /// Session clock moved forward.
    Advance {
        /// New clock value.
        now_ms: u64,
    },
    /// Pointer moved over a tilt card.
    PointerMove {
        /// Card identity.
        card: ElementKey,
        /// Pointer x, same space as `rect`.
        x: f64,
        /// Pointer y, same space as `rect`.
        y: f64,
        /// Card bounds at event time.
        rect: Rect,
    },
    /// Pointer left a tilt card.
    PointerLeave {
        /// Card identity.
        card: ElementKey,
    },
    /// A reveal target's bounds changed.
    Relayout {
        /// Element identity.
        key: ElementKey,
        /// New bounds in document coordinates.
        rect: Rect,
    },
    /// Element mounted.
    Mount {
        /// What was mounted.
        spec: MountSpec,
    },
    /// Element unmounted; all its listeners and timers are released.
    Unmount {
        /// Element identity.
        key: ElementKey,
    },
    /// Modal opened.
    OpenModal {
        /// Which modal.
        modal: ModalKind,
    },
    /// Modal closed.
    CloseModal {
        /// Which modal.
        modal: ModalKind,
    },
}

impl HostEvent {
    /// Short name used in logs.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Scroll { .. } => "scroll",
            Self::Resize { .. } => "resize",
            Self::Advance { .. } => "advance",
            Self::PointerMove { .. } => "pointer_move",
            Self::PointerLeave { .. } => "pointer_leave",
            Self::Relayout { .. } => "relayout",
            Self::Mount { .. } => "mount",
            Self::Unmount { .. } => "unmount",
            Self::OpenModal { .. } => "open_modal",
            Self::CloseModal { .. } => "close_modal",
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/stage/event.rs"]
mod tests;
