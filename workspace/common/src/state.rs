//! Application state for the single page.
//!
//! `AppState::reduce` is the only way state changes. Each submission carries
//! a sequence number from [`RequestSequence`]; a result whose number is not
//! the panel's latest is dropped, so a slow early response can never
//! overwrite a later one.

use crate::error::{PipelineError, ValidationError};
use crate::tabs::{Tab, TabEffect, TabState};
use crate::view::{OptimizeView, PredictView};

/// Hands out increasing submission numbers, one sequence per panel.
#[derive(Debug, Default)]
pub struct RequestSequence {
    last: u64,
}

impl RequestSequence {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn issue(&mut self) -> u64 {
        self.last += 1;
        self.last
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Panel {
    Predict,
    Optimize,
}

impl Panel {
    /// Id of the results region in the page.
    pub fn results_id(self) -> &'static str {
        match self {
            Panel::Predict => "predictResults",
            Panel::Optimize => "optimizeResults",
        }
    }

    pub fn form_id(self) -> &'static str {
        match self {
            Panel::Predict => "predictForm",
            Panel::Optimize => "optimizeForm",
        }
    }

    pub fn placeholder(self) -> &'static str {
        match self {
            Panel::Predict => "Calculating predictions...",
            Panel::Optimize => "Optimizing feed formulation...",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum PanelState<V> {
    #[default]
    Hidden,
    Calculating,
    Ready(V),
    /// Full inline message, already prefixed with `Error: `.
    Failed(String),
}

impl<V> PanelState<V> {
    pub fn is_calculating(&self) -> bool {
        matches!(self, PanelState::Calculating)
    }

    pub fn view(&self) -> Option<&V> {
        match self {
            PanelState::Ready(view) => Some(view),
            _ => None,
        }
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            PanelState::Failed(message) => Some(message),
            _ => None,
        }
    }
}

/// A results panel plus the number of its newest submission.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PanelSlot<V> {
    latest: u64,
    state: PanelState<V>,
}

impl<V> Default for PanelSlot<V> {
    fn default() -> Self {
        Self { latest: 0, state: PanelState::Hidden }
    }
}

impl<V> PanelSlot<V> {
    pub fn state(&self) -> &PanelState<V> {
        &self.state
    }

    pub fn latest(&self) -> u64 {
        self.latest
    }

    fn submitted(&mut self, seq: u64) {
        self.latest = self.latest.max(seq);
        self.state = PanelState::Calculating;
    }

    fn rejected(&mut self, seq: u64, error: ValidationError) {
        self.latest = self.latest.max(seq);
        self.state = PanelState::Failed(PipelineError::from(error).display_message());
    }

    fn settled(&mut self, panel: Panel, seq: u64, outcome: Result<V, PipelineError>) {
        if seq != self.latest {
            tracing::debug!(?panel, seq, latest = self.latest, "dropping stale response");
            return;
        }
        self.state = match outcome {
            Ok(view) => PanelState::Ready(view),
            Err(err) => {
                tracing::warn!(?panel, seq, error = %err, "submission failed");
                PanelState::Failed(err.display_message())
            }
        };
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum AppEvent {
    TabClicked(Tab),
    /// A form passed validation and its request was sent.
    Submitted { panel: Panel, seq: u64 },
    /// A form failed validation; nothing was sent.
    Invalid { panel: Panel, seq: u64, error: ValidationError },
    PredictSettled { seq: u64, outcome: Result<PredictView, PipelineError> },
    OptimizeSettled { seq: u64, outcome: Result<OptimizeView, PipelineError> },
}

/// Work the renderer has to do after a transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Effect {
    SeedDashboard,
}

impl From<TabEffect> for Effect {
    fn from(effect: TabEffect) -> Self {
        match effect {
            TabEffect::SeedDashboard => Effect::SeedDashboard,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AppState {
    pub tabs: TabState,
    pub predict: PanelSlot<PredictView>,
    pub optimize: PanelSlot<OptimizeView>,
}

impl AppState {
    pub fn new(initial: Tab) -> Self {
        Self { tabs: TabState::new(initial), ..Self::default() }
    }

    pub fn reduce(mut self, event: AppEvent) -> (Self, Option<Effect>) {
        let mut effect = None;
        match event {
            AppEvent::TabClicked(tab) => {
                let (tabs, tab_effect) = self.tabs.activate(tab);
                self.tabs = tabs;
                effect = tab_effect.map(Effect::from);
            }
            AppEvent::Submitted { panel: Panel::Predict, seq } => self.predict.submitted(seq),
            AppEvent::Submitted { panel: Panel::Optimize, seq } => self.optimize.submitted(seq),
            AppEvent::Invalid { panel: Panel::Predict, seq, error } => self.predict.rejected(seq, error),
            AppEvent::Invalid { panel: Panel::Optimize, seq, error } => self.optimize.rejected(seq, error),
            AppEvent::PredictSettled { seq, outcome } => {
                self.predict.settled(Panel::Predict, seq, outcome)
            }
            AppEvent::OptimizeSettled { seq, outcome } => {
                self.optimize.settled(Panel::Optimize, seq, outcome)
            }
        }
        (self, effect)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ServiceError;
    use crate::view::Metric;

    fn view(value: &str) -> PredictView {
        PredictView {
            metrics: vec![Metric { label: "Predicted Milk Yield", value: value.to_string(), unit: "Liters" }],
        }
    }

    fn apply(state: AppState, events: Vec<AppEvent>) -> AppState {
        events.into_iter().fold(state, |state, event| state.reduce(event).0)
    }

    #[test]
    fn test_submission_shows_placeholder_then_result() {
        let mut seq = RequestSequence::new();
        let first = seq.issue();

        let state = apply(AppState::default(), vec![AppEvent::Submitted { panel: Panel::Predict, seq: first }]);
        assert!(state.predict.state().is_calculating());

        let state = apply(state, vec![AppEvent::PredictSettled { seq: first, outcome: Ok(view("14.20")) }]);
        assert_eq!(state.predict.state().view(), Some(&view("14.20")));
        assert_eq!(state.optimize.state(), &PanelState::Hidden);
    }

    #[test]
    fn test_stale_response_is_dropped() {
        let mut seq = RequestSequence::new();
        let first = seq.issue();
        let second = seq.issue();

        let state = apply(
            AppState::default(),
            vec![
                AppEvent::Submitted { panel: Panel::Predict, seq: first },
                AppEvent::Submitted { panel: Panel::Predict, seq: second },
                AppEvent::PredictSettled { seq: second, outcome: Ok(view("2.00")) },
                AppEvent::PredictSettled { seq: first, outcome: Ok(view("1.00")) },
            ],
        );

        assert_eq!(state.predict.state().view(), Some(&view("2.00")));
    }

    #[test]
    fn test_earlier_response_waits_for_latest() {
        let state = apply(
            AppState::default(),
            vec![
                AppEvent::Submitted { panel: Panel::Predict, seq: 1 },
                AppEvent::Submitted { panel: Panel::Predict, seq: 2 },
                AppEvent::PredictSettled { seq: 1, outcome: Ok(view("1.00")) },
            ],
        );

        assert!(state.predict.state().is_calculating());
    }

    #[test]
    fn test_failure_is_rendered_inline() {
        let state = apply(
            AppState::default(),
            vec![
                AppEvent::Submitted { panel: Panel::Optimize, seq: 1 },
                AppEvent::OptimizeSettled {
                    seq: 1,
                    outcome: Err(ServiceError::Rejected("infeasible".to_string()).into()),
                },
            ],
        );

        assert_eq!(state.optimize.state().error(), Some("Error: infeasible"));
        assert!(state.optimize.state().view().is_none());
    }

    #[test]
    fn test_invalid_input_supersedes_outstanding_request() {
        let state = apply(
            AppState::default(),
            vec![
                AppEvent::Submitted { panel: Panel::Predict, seq: 1 },
                AppEvent::Invalid {
                    panel: Panel::Predict,
                    seq: 2,
                    error: ValidationError::NotANumber { field: "nel", raw: "x".to_string() },
                },
                AppEvent::PredictSettled { seq: 1, outcome: Ok(view("1.00")) },
            ],
        );

        assert_eq!(
            state.predict.state().error(),
            Some("Error: nel must be a number (got \"x\")")
        );
    }

    #[test]
    fn test_panels_are_independent() {
        let state = apply(
            AppState::default(),
            vec![
                AppEvent::Submitted { panel: Panel::Predict, seq: 1 },
                AppEvent::Submitted { panel: Panel::Optimize, seq: 2 },
                AppEvent::PredictSettled { seq: 1, outcome: Ok(view("3.00")) },
            ],
        );

        assert!(state.predict.state().view().is_some());
        assert!(state.optimize.state().is_calculating());
    }

    #[test]
    fn test_dashboard_click_requests_seeding() {
        let (state, effect) = AppState::new(Tab::Predict).reduce(AppEvent::TabClicked(Tab::Dashboard));

        assert_eq!(effect, Some(Effect::SeedDashboard));
        assert!(state.tabs.is_active(Tab::Dashboard));
    }
}
