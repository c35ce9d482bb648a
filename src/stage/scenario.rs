use crate::{
    config::FxConfig,
    foundation::core::Viewport,
    foundation::error::FxResult,
    reveal::observer::ObserverCapability,
    stage::{event::HostEvent, session::Stage, snapshot::StageSnapshot},
};

/// A scripted page session: initial environment plus an event log to replay.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Scenario {
    /// Controller settings.
    #[serde(default)]
    pub config: FxConfig,
    /// Viewport at page load.
    #[serde(default)]
    pub viewport: Viewport,
    /// Whether the host can observe visibility.
    #[serde(default)]
    pub observer: ObserverCapability,
    /// Events in arrival order.
    pub events: Vec<HostEvent>,
}

impl Scenario {
    /// Parse a JSON scenario document.
    pub fn from_json_str(s: &str) -> FxResult<Self> {
        Ok(serde_json::from_str(s)?)
    }

    /// Replay the events, returning the snapshot at load followed by one per event.
    #[tracing::instrument(skip(self), fields(events = self.events.len()))]
    pub fn run(&self) -> FxResult<Vec<StageSnapshot>> {
        let mut stage = Stage::new(self.config.clone(), self.viewport, self.observer)?;
        let mut out = Vec::with_capacity(self.events.len() + 1);
        out.push(stage.snapshot());
        for event in &self.events {
            stage.dispatch(event.clone())?;
            out.push(stage.snapshot());
        }
        tracing::debug!(snapshots = out.len(), "scenario finished");
        Ok(out)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/stage/scenario.rs"]
mod tests;
