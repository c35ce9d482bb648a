//! scrollfx drives the decorative motion of a single-page site.
//!
//! The crate is a pure, deterministic state layer. A host (a browser binding, a test,
//! or the bundled `scrollfx` CLI) feeds it [`HostEvent`]s and draws the
//! [`StageSnapshot`]s it produces. No DOM, timer or network access happens here.
//!
//! # Controllers
//!
//! - **Reveal** ([`VisibilityObserver`]): flips each element's `revealed` flag once,
//!   the first time enough of it is inside the viewport, and never flips it back.
//! - **Scroll** ([`ScrollSampler`]): tracks the scroll offset and derives the navigation
//!   bar switch (`offset > 50`) and parallax translations (`offset * 0.1`).
//! - **Cycle** ([`CycleDriver`]): advances a slideshow index on a fixed interval with
//!   wraparound, plus cross-fade layers for the renderer.
//! - **Tilt** ([`TiltCard`]): pointer-driven 3D rotation that always resets on leave.
//!
//! A [`Stage`] owns one of each per page session and routes events to them in arrival
//! order. Particle effects are pure generators ([`falling_leaves`], [`confetti_burst`]);
//! the renderer owns creation and cleanup of whatever they describe.
#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod animation;
mod config;
mod cycle;
mod effects;
mod foundation;
mod modal;
mod reveal;
mod scroll;
mod stage;
mod tilt;

pub use animation::ease::Ease;
pub use animation::transition::TransitionTiming;
pub use config::{
    FxConfig, ParticleConfig, RevealConfig, ScrollConfig, SlideshowConfig, TiltConfig,
};
pub use cycle::crossfade::{SlideLayer, crossfade_progress, slide_layers};
pub use cycle::driver::CycleDriver;
pub use effects::particles::{Particle, ParticleKind, confetti_burst, falling_leaves};
pub use foundation::core::{ElementKey, Millis, Point, Rect, Viewport};
pub use foundation::error::{FxError, FxResult};
pub use modal::{ModalKind, ModalState};
pub use reveal::observer::{
    ObserverCapability, RevealTarget, VisibilityObserver, intersection_ratio,
};
pub use reveal::style::{RevealStyle, reveal_style};
pub use scroll::anchor::anchor_scroll_target;
pub use scroll::sampler::{ScrollListener, ScrollSampler, nav_scrolled, parallax_offset};
pub use stage::event::{HostEvent, MountSpec};
pub use stage::scenario::Scenario;
pub use stage::session::Stage;
pub use stage::snapshot::{RevealSnapshot, SlideshowSnapshot, StageSnapshot};
pub use tilt::card::{TiltCard, TiltPose, tilt_angles};
