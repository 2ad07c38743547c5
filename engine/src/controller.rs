//! Submission state machine for the analysis form.
//!
//! [`RequestController`] owns the form's [`InputText`] and [`RequestState`]. A submission
//! is accepted only when the trimmed input is non-empty and nothing is in flight; the
//! analysis then runs as a spawned task whose outcome comes back over a oneshot channel
//! and is applied by [`RequestController::poll`] or [`RequestController::settle`].
//!
//! ```text
//!   Idle ──submit──▶ Submitting ──succeed──▶ Succeeded ─┐
//!                       ▲   └──────fail────▶ Failed ────┤
//!                       └─────────submit────────────────┘
//! ```

use std::fmt;
use std::sync::Arc;
use std::time::Instant;

use futures_util::future::{AbortHandle, Abortable};
use tokio::sync::oneshot;

use emotion_client::{AnalysisError, Analyze};
use emotion_types::{EmotionResult, ErrorMessage, InputText, RequestState};

use crate::operation::transition_receipt;

type AnalysisOutcome = Result<EmotionResult, AnalysisError>;

/// What `submit()` did. Informational only: an ignored submit changes nothing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitOutcome {
    Accepted,
    Ignored(SubmitRejection),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitRejection {
    /// Input is empty or whitespace.
    EmptyInput,
    /// A request is already in flight.
    AlreadySubmitting,
}

impl SubmitRejection {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            SubmitRejection::EmptyInput => "input is blank",
            SubmitRejection::AlreadySubmitting => "request already in flight",
        }
    }
}

impl fmt::Display for SubmitRejection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The single in-flight request. Present exactly while the state is `Submitting`.
#[derive(Debug)]
struct InFlight {
    outcome: oneshot::Receiver<AnalysisOutcome>,
    abort_handle: AbortHandle,
    started: Instant,
}

pub struct RequestController<C> {
    client: Arc<C>,
    input: InputText,
    state: RequestState,
    in_flight: Option<InFlight>,
}

impl<C> RequestController<C>
where
    C: Analyze + Send + Sync + 'static,
{
    pub fn new(client: C) -> Self {
        Self::with_shared(Arc::new(client))
    }

    pub fn with_shared(client: Arc<C>) -> Self {
        Self {
            client,
            input: InputText::default(),
            state: RequestState::Idle,
            in_flight: None,
        }
    }

    #[must_use]
    pub fn client(&self) -> &C {
        &self.client
    }

    #[must_use]
    pub fn input(&self) -> &str {
        self.input.as_str()
    }

    #[must_use]
    pub fn state(&self) -> &RequestState {
        &self.state
    }

    /// Whether `submit()` would be accepted right now.
    #[must_use]
    pub fn can_submit(&self) -> bool {
        !self.state.is_submitting() && self.input.is_submittable()
    }

    /// Replace the input text. Never touches the request state.
    pub fn update_input(&mut self, text: impl Into<String>) {
        self.input.replace(text);
    }

    /// Start an analysis of the current input, unless one is running or the input is blank.
    ///
    /// The request captures the text as it is now; later edits do not reach it.
    /// Must be called from within a tokio runtime.
    pub fn submit(&mut self) -> SubmitOutcome {
        if self.state.is_submitting() {
            return ignored(SubmitRejection::AlreadySubmitting);
        }
        if !self.input.is_submittable() {
            return ignored(SubmitRejection::EmptyInput);
        }

        let text = self.input.as_str().to_owned();
        self.transition(RequestState::Submitting);

        let (tx, rx) = oneshot::channel();
        let (abort_handle, abort_registration) = AbortHandle::new_pair();
        let client = Arc::clone(&self.client);
        let task = async move {
            let outcome = client.analyze(&text).await;
            let _ = tx.send(outcome);
        };
        tokio::spawn(async move {
            let _ = Abortable::new(task, abort_registration).await;
        });

        self.in_flight = Some(InFlight {
            outcome: rx,
            abort_handle,
            started: Instant::now(),
        });
        SubmitOutcome::Accepted
    }

    /// Apply the in-flight outcome if it has arrived. Returns true when this call settled it.
    pub fn poll(&mut self) -> bool {
        let Some(in_flight) = self.in_flight.as_mut() else {
            return false;
        };

        let outcome = match in_flight.outcome.try_recv() {
            Ok(outcome) => outcome,
            Err(oneshot::error::TryRecvError::Empty) => return false,
            Err(oneshot::error::TryRecvError::Closed) => Err(task_vanished()),
        };
        self.finish(outcome);
        true
    }

    /// Wait for the in-flight request, if any, and apply its outcome.
    pub async fn settle(&mut self) {
        let Some(in_flight) = self.in_flight.as_mut() else {
            return;
        };

        let outcome = (&mut in_flight.outcome)
            .await
            .unwrap_or_else(|_| Err(task_vanished()));
        self.finish(outcome);
    }

    fn finish(&mut self, outcome: AnalysisOutcome) {
        let elapsed_ms = self
            .in_flight
            .take()
            .map(|in_flight| in_flight.started.elapsed().as_millis());

        let next = match outcome {
            Ok(result) => {
                tracing::debug!(
                    emotion = result.emotion(),
                    confidence = result.confidence(),
                    elapsed_ms,
                    "Analysis succeeded"
                );
                RequestState::Succeeded(result)
            }
            Err(err) => {
                tracing::warn!(error = %err, elapsed_ms, "Analysis request failed");
                RequestState::Failed(ErrorMessage::generic())
            }
        };

        // Leaving Submitting is the last step: submit() is eligible again from here on.
        self.transition(next);
    }

    fn transition(&mut self, next: RequestState) {
        let from = self.state.tag();
        let to = next.tag();
        let receipt = transition_receipt(from, to);
        debug_assert!(receipt.is_some(), "illegal request transition {from} -> {to}");

        match receipt {
            Some(receipt) => tracing::debug!(
                from = %receipt.from(),
                edge = %receipt.edge(),
                to = %receipt.to(),
                "Request transition"
            ),
            None => tracing::error!(%from, %to, "Illegal request transition"),
        }
        self.state = next;
    }
}

impl<C> Drop for RequestController<C> {
    fn drop(&mut self) {
        if let Some(in_flight) = self.in_flight.take() {
            in_flight.abort_handle.abort();
        }
    }
}

fn ignored(reason: SubmitRejection) -> SubmitOutcome {
    tracing::debug!(%reason, "Ignoring submit");
    SubmitOutcome::Ignored(reason)
}

fn task_vanished() -> AnalysisError {
    AnalysisError::transport("analysis task ended without reporting a result")
}
