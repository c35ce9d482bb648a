use std::collections::{BTreeMap, VecDeque};

use crate::{
    config::FxConfig,
    cycle::{crossfade::slide_layers, driver::CycleDriver},
    effects::particles::{Particle, confetti_burst, falling_leaves},
    foundation::core::{ElementKey, Millis, Point, Rect, Viewport},
    foundation::error::{FxError, FxResult},
    modal::{ModalKind, ModalState},
    reveal::{
        observer::{ObserverCapability, VisibilityObserver},
        style::reveal_style,
    },
    scroll::{
        anchor::anchor_scroll_target,
        sampler::{ScrollListener, ScrollSampler},
    },
    stage::{
        event::{HostEvent, MountSpec},
        snapshot::{RevealSnapshot, SlideshowSnapshot, StageSnapshot},
    },
    tilt::card::TiltCard,
};

/// One page session: every controller, the clock and the viewport.
///
/// All input arrives as [`HostEvent`]s handled one at a time on the caller's thread.
/// Controllers own disjoint state; a stage only routes events to them.
#[derive(Debug)]
pub struct Stage {
    config: FxConfig,
    viewport: Viewport,
    now: Millis,
    observer: VisibilityObserver,
    scroll: ScrollSampler,
    slideshows: BTreeMap<ElementKey, CycleDriver>,
    tilts: BTreeMap<ElementKey, TiltCard>,
    modals: ModalState,
    queue: VecDeque<HostEvent>,
    particles: Vec<Particle>,
    bursts: u64,
}

impl Stage {
    /// Fresh session at time zero, scrolled to the top.
    pub fn new(
        config: FxConfig,
        viewport: Viewport,
        capability: ObserverCapability,
    ) -> FxResult<Self> {
        config.validate()?;
        let viewport = Viewport::new(viewport.width, viewport.height)?;
        Ok(Self {
            config,
            viewport,
            now: Millis::ZERO,
            observer: VisibilityObserver::new(capability),
            scroll: ScrollSampler::new(),
            slideshows: BTreeMap::new(),
            tilts: BTreeMap::new(),
            modals: ModalState::default(),
            queue: VecDeque::new(),
            particles: Vec::new(),
            bursts: 0,
        })
    }

    /// Queue an event for the next [`Stage::pump`].
    pub fn enqueue(&mut self, event: HostEvent) {
        self.queue.push_back(event);
    }

    /// Handle queued events in arrival order, returning how many were handled.
    ///
    /// Stops at the first failing event; it is dropped and later events stay queued.
    pub fn pump(&mut self) -> FxResult<usize> {
        let mut handled = 0;
        while let Some(event) = self.queue.pop_front() {
            self.dispatch(event)?;
            handled += 1;
        }
        Ok(handled)
    }

    /// Number of events waiting in the queue.
    pub fn pending(&self) -> usize {
        self.queue.len()
    }

    /// Handle one event immediately.
    #[tracing::instrument(level = "trace", skip(self), fields(kind = event.kind()))]
    pub fn dispatch(&mut self, event: HostEvent) -> FxResult<()> {
        match event {
            HostEvent::Scroll { offset_y } => {
                if self.scroll.on_scroll(offset_y) {
                    self.observe();
                }
            }
            HostEvent::Resize { width, height } => self.resize(Viewport::new(width, height)?),
            HostEvent::Advance { now_ms } => self.advance(Millis(now_ms)),
            HostEvent::PointerMove { card, x, y, rect } => {
                let width = self.viewport.width;
                match self.tilts.get_mut(&card) {
                    Some(tilt) => {
                        tilt.on_pointer_move(Point::new(x, y), rect, width);
                    }
                    None => tracing::debug!(%card, "pointer move over unknown tilt card"),
                }
            }
            HostEvent::PointerLeave { card } => match self.tilts.get_mut(&card) {
                Some(tilt) => {
                    tilt.on_pointer_leave();
                }
                None => tracing::debug!(%card, "pointer leave from unknown tilt card"),
            },
            HostEvent::Relayout { key, rect } => {
                let visible = self.visible_rect();
                self.observer.relayout(&key, rect, visible, self.now);
            }
            HostEvent::Mount { spec } => self.mount(spec)?,
            HostEvent::Unmount { key } => {
                self.unmount(&key);
            }
            HostEvent::OpenModal { modal } => self.open_modal(modal),
            HostEvent::CloseModal { modal } => {
                self.modals.close(modal);
            }
        }
        Ok(())
    }

    /// Register an element with the controller it needs.
    pub fn mount(&mut self, spec: MountSpec) -> FxResult<()> {
        tracing::debug!(key = %spec.key(), "mount");
        match spec {
            MountSpec::Reveal {
                key,
                rect,
                threshold,
                delay_ms,
                duration_ms,
            } => {
                let threshold = threshold.unwrap_or(self.config.reveal.threshold);
                let timing = self.config.reveal.timing(delay_ms, duration_ms);
                let visible = self.visible_rect();
                self.observer
                    .attach(key, rect, threshold, timing, visible, self.now)?;
            }
            MountSpec::NavBar { key } => {
                self.ensure_unique_listener(&key)?;
                let listener = ScrollListener::nav_bar(self.config.scroll.nav_threshold_px);
                self.scroll.subscribe(key, listener);
            }
            MountSpec::Parallax { key, factor } => {
                self.ensure_unique_listener(&key)?;
                let factor = factor.unwrap_or(self.config.scroll.parallax_factor);
                if !factor.is_finite() {
                    return Err(FxError::validation("parallax factor must be finite"));
                }
                self.scroll.subscribe(key, ScrollListener::parallax(factor));
            }
            MountSpec::Slideshow {
                key,
                images,
                interval_ms,
            } => {
                if self.slideshows.contains_key(&key) {
                    return Err(FxError::lifecycle(format!(
                        "slideshow '{key}' is already mounted"
                    )));
                }
                let interval_ms = interval_ms.unwrap_or(self.config.slideshow.interval_ms);
                if self.config.slideshow.crossfade_ms >= interval_ms {
                    return Err(FxError::validation(format!(
                        "slideshow '{key}' interval must exceed the {}ms cross-fade",
                        self.config.slideshow.crossfade_ms
                    )));
                }
                let driver = CycleDriver::start(images, interval_ms, self.now)?;
                self.slideshows.insert(key, driver);
            }
            MountSpec::TiltCard { key } => {
                if self.tilts.contains_key(&key) {
                    return Err(FxError::lifecycle(format!(
                        "tilt card '{key}' is already mounted"
                    )));
                }
                let card = TiltCard::new(
                    self.config.tilt.max_rotation_deg,
                    self.config.tilt.disable_below_width_px,
                );
                self.tilts.insert(key, card);
            }
        }
        Ok(())
    }

    /// Release everything registered under `key`. Returns whether anything was released.
    pub fn unmount(&mut self, key: &ElementKey) -> bool {
        let mut released = false;
        released |= self.observer.detach(key).is_some();
        released |= self.scroll.unsubscribe(key).is_some();
        if let Some(mut driver) = self.slideshows.remove(key) {
            driver.stop();
            released = true;
        }
        released |= self.tilts.remove(key).is_some();
        if released {
            tracing::debug!(%key, "unmount");
        } else {
            tracing::debug!(%key, "unmount of unknown element");
        }
        released
    }

    /// Drain celebration particles emitted since the last call.
    pub fn take_particles(&mut self) -> Vec<Particle> {
        std::mem::take(&mut self.particles)
    }

    /// Ambient falling leaves for this session's config.
    pub fn ambient_leaves(&self) -> Vec<Particle> {
        falling_leaves(
            self.config.particles.leaf_count,
            self.config.particles.seed,
        )
    }

    /// Scroll offset that brings reveal target `key` just below the fixed header.
    pub fn anchor_target(&self, key: &ElementKey) -> Option<f64> {
        let target = self.observer.get(key)?;
        let scroll_y = self.scroll.offset_y();
        let top_client = target.rect.y0 - scroll_y;
        Some(anchor_scroll_target(
            top_client,
            scroll_y,
            self.config.scroll.header_offset_px,
        ))
    }

    /// Render state of every mounted element at the current clock.
    pub fn snapshot(&self) -> StageSnapshot {
        let offset_px = self.config.reveal.offset_px;
        let reveals = self
            .observer
            .iter()
            .map(|(key, target)| {
                (
                    key.clone(),
                    RevealSnapshot {
                        revealed: target.revealed(),
                        revealed_at_ms: target.revealed_at().map(|m| m.0),
                        style: reveal_style(target, offset_px, self.now),
                    },
                )
            })
            .collect();

        let slideshows = self
            .slideshows
            .iter()
            .map(|(key, driver)| {
                (
                    key.clone(),
                    SlideshowSnapshot {
                        current_index: driver.current_index(),
                        running: driver.is_running(),
                        layers: slide_layers(
                            driver,
                            self.now,
                            self.config.slideshow.crossfade_ms,
                            self.config.slideshow.max_blur_px,
                        ),
                    },
                )
            })
            .collect();

        StageSnapshot {
            now_ms: self.now.0,
            viewport: self.viewport,
            scroll_offset_y: self.scroll.offset_y(),
            scroll_listeners: self
                .scroll
                .iter()
                .map(|(k, l)| (k.clone(), *l))
                .collect(),
            reveals,
            slideshows,
            tilts: self
                .tilts
                .iter()
                .map(|(k, t)| (k.clone(), t.pose()))
                .collect(),
            modals: self.modals,
        }
    }

    /// Session clock.
    pub fn now(&self) -> Millis {
        self.now
    }

    /// Current viewport.
    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    /// Effective config.
    pub fn config(&self) -> &FxConfig {
        &self.config
    }

    /// Modal flags.
    pub fn modals(&self) -> ModalState {
        self.modals
    }

    /// The reveal controller.
    pub fn observer(&self) -> &VisibilityObserver {
        &self.observer
    }

    /// The scroll controller.
    pub fn scroll(&self) -> &ScrollSampler {
        &self.scroll
    }

    /// A mounted slideshow.
    pub fn slideshow(&self, key: &ElementKey) -> Option<&CycleDriver> {
        self.slideshows.get(key)
    }

    /// A mounted tilt card.
    pub fn tilt(&self, key: &ElementKey) -> Option<&TiltCard> {
        self.tilts.get(key)
    }

    fn visible_rect(&self) -> Rect {
        self.viewport.visible_rect(self.scroll.offset_y())
    }

    fn observe(&mut self) {
        let visible = self.visible_rect();
        self.observer.observe(visible, self.now);
    }

    fn resize(&mut self, viewport: Viewport) {
        self.viewport = viewport;
        self.observe();
        let threshold = self.config.tilt.disable_below_width_px;
        if viewport.width < threshold {
            for tilt in self.tilts.values_mut() {
                tilt.on_pointer_leave();
            }
        }
    }

    fn advance(&mut self, now: Millis) {
        if now < self.now {
            tracing::warn!(
                now_ms = now.0,
                clock_ms = self.now.0,
                "ignoring clock moving backwards"
            );
            return;
        }
        self.now = now;
        for driver in self.slideshows.values_mut() {
            driver.advance_to(now);
        }
    }

    fn open_modal(&mut self, modal: ModalKind) {
        let newly_open = self.modals.open(modal);
        if newly_open && modal == ModalKind::Voucher {
            let seed = self.config.particles.seed ^ self.bursts.wrapping_mul(0x9E37_79B9_7F4A_7C15);
            self.bursts += 1;
            let burst = confetti_burst(self.config.particles.confetti_count, seed);
            tracing::debug!(pieces = burst.len(), "celebration burst");
            self.particles.extend(burst);
        }
    }

    fn ensure_unique_listener(&self, key: &ElementKey) -> FxResult<()> {
        if self.scroll.get(key).is_some() {
            return Err(FxError::lifecycle(format!(
                "scroll listener '{key}' is already mounted"
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/stage/session.rs"]
mod tests;
