use crate::core::scorer::RiskScorer;
use crate::core::validator;
use crate::domain::model::{MeasurementRecord, Measurements, RiskVerdict};
use crate::domain::ports::{Delay, JitterSource};
use crate::utils::error::{RiskError, Result};
use std::time::Duration;

pub const DEFAULT_ANALYSIS_DELAY: Duration = Duration::from_millis(2000);

#[derive(Debug, Clone, PartialEq)]
pub enum FormPhase {
    Editing,
    /// Submission accepted and waiting for the analysis delay to elapse.
    Loading(Measurements),
}

#[derive(Debug, Clone, PartialEq)]
pub enum ViewState {
    Landing,
    Form(FormPhase),
    Result(RiskVerdict),
}

impl ViewState {
    pub fn name(&self) -> &'static str {
        match self {
            ViewState::Landing => "landing",
            ViewState::Form(FormPhase::Editing) => "form",
            ViewState::Form(FormPhase::Loading(_)) => "loading",
            ViewState::Result(_) => "result",
        }
    }
}

/// Drives the landing → form → result → landing flow.
pub struct ViewController<D: Delay, J: JitterSource> {
    state: ViewState,
    scorer: RiskScorer,
    delay: D,
    jitter: J,
    analysis_delay: Duration,
}

impl<D: Delay, J: JitterSource> ViewController<D, J> {
    pub fn new(scorer: RiskScorer, delay: D, jitter: J) -> Self {
        Self {
            state: ViewState::Landing,
            scorer,
            delay,
            jitter,
            analysis_delay: DEFAULT_ANALYSIS_DELAY,
        }
    }

    pub fn with_analysis_delay(mut self, analysis_delay: Duration) -> Self {
        self.analysis_delay = analysis_delay;
        self
    }

    pub fn state(&self) -> &ViewState {
        &self.state
    }

    pub fn verdict(&self) -> Option<&RiskVerdict> {
        match &self.state {
            ViewState::Result(verdict) => Some(verdict),
            _ => None,
        }
    }

    pub fn is_loading(&self) -> bool {
        matches!(self.state, ViewState::Form(FormPhase::Loading(_)))
    }

    pub fn start(&mut self) -> Result<()> {
        if self.state != ViewState::Landing {
            return Err(self.rejected("start"));
        }
        self.transition(ViewState::Form(FormPhase::Editing));
        Ok(())
    }

    /// Validates the record and, if it passes, enters the loading phase.
    ///
    /// A rejected record leaves the form editable; the caller shows
    /// [`RiskError::notice`] to the user.
    pub fn begin_submit(&mut self, record: &MeasurementRecord) -> Result<()> {
        if self.state != ViewState::Form(FormPhase::Editing) {
            return Err(self.rejected("submit"));
        }

        match validator::validate(record) {
            Ok(measurements) => {
                self.transition(ViewState::Form(FormPhase::Loading(measurements)));
                Ok(())
            }
            Err(e) => {
                let field_key = e.field().map_or("-", |field| field.key());
                tracing::warn!(field = field_key, "Submission rejected: {}", e);
                Err(e)
            }
        }
    }

    pub fn complete(&mut self) -> Result<&RiskVerdict> {
        let ViewState::Form(FormPhase::Loading(measurements)) = &self.state else {
            return Err(self.rejected("complete"));
        };

        let verdict = self.scorer.assess(measurements, &mut self.jitter);
        tracing::info!(
            "Assessment complete: risk={}, score={}, confidence={:.1}%",
            verdict.risk_level,
            verdict.score,
            verdict.confidence
        );
        self.transition(ViewState::Result(verdict));

        self.verdict().ok_or(RiskError::InvalidTransition {
            state: "result",
            action: "complete",
        })
    }

    /// Full submission: validate, wait out the analysis delay, then score.
    /// The delay cannot be cancelled and scoring cannot fail.
    pub async fn submit(&mut self, record: &MeasurementRecord) -> Result<&RiskVerdict> {
        self.begin_submit(record)?;
        tracing::debug!("Analyzing for {:?}", self.analysis_delay);
        self.delay.wait(self.analysis_delay).await;
        self.complete()
    }

    pub fn reset(&mut self) -> Result<()> {
        if !matches!(self.state, ViewState::Result(_)) {
            return Err(self.rejected("reset"));
        }
        self.transition(ViewState::Landing);
        Ok(())
    }

    fn transition(&mut self, next: ViewState) {
        tracing::debug!("View {} -> {}", self.state.name(), next.name());
        self.state = next;
    }

    fn rejected(&self, action: &'static str) -> RiskError {
        tracing::warn!("Ignoring {} in {} state", action, self.state.name());
        RiskError::InvalidTransition {
            state: self.state.name(),
            action,
        }
    }
}
