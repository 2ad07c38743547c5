//! Application state for the emotion analyzer.
//!
//! # Architecture
//!
//! - [`controller`] - The request lifecycle state machine ([`RequestController`])
//! - [`operation`] - Legal `RequestState` edges, checked on every transition
//! - [`App`] - One controller plus presentation options, the quit flag and the frame tick
//!
//! The TUI reads an [`App`] to draw and calls [`App::update_input`] / [`App::submit`] in
//! response to keys. Presentation options live beside the request state and never feed
//! back into it.

pub mod controller;
pub mod operation;

pub use controller::{RequestController, SubmitOutcome, SubmitRejection};
pub use operation::{RequestEdge, TransitionReceipt};

pub use emotion_client::{AnalysisClient, AnalysisError, Analyze, ErrorKind};
pub use emotion_config::EmotionConfig;
pub use emotion_types::{
    EmotionResult, ErrorMessage, RequestState, RequestTag, ThemeMode, UiOptions,
};

pub struct App<C = AnalysisClient> {
    controller: RequestController<C>,
    options: UiOptions,
    should_quit: bool,
    tick: usize,
}

impl App<AnalysisClient> {
    /// Build the real client from configuration.
    pub fn from_config(config: &EmotionConfig) -> anyhow::Result<Self> {
        let endpoint = config.endpoint()?;
        let client = AnalysisClient::new(endpoint)?;
        let options = config.ui_options();
        tracing::info!(
            endpoint = %client.endpoint(),
            theme = options.theme.as_str(),
            "Analysis client ready"
        );
        Ok(Self::new(client, options))
    }
}

impl<C> App<C>
where
    C: Analyze + Send + Sync + 'static,
{
    pub fn new(client: C, options: UiOptions) -> Self {
        Self::with_controller(RequestController::new(client), options)
    }

    pub fn with_controller(controller: RequestController<C>, options: UiOptions) -> Self {
        Self {
            controller,
            options,
            should_quit: false,
            tick: 0,
        }
    }

    #[must_use]
    pub fn controller(&self) -> &RequestController<C> {
        &self.controller
    }

    #[must_use]
    pub fn input(&self) -> &str {
        self.controller.input()
    }

    #[must_use]
    pub fn request_state(&self) -> &RequestState {
        self.controller.state()
    }

    #[must_use]
    pub fn is_loading(&self) -> bool {
        self.controller.state().is_submitting()
    }

    /// The submit button's enabled state.
    #[must_use]
    pub fn can_submit(&self) -> bool {
        self.controller.can_submit()
    }

    pub fn update_input(&mut self, text: impl Into<String>) {
        self.controller.update_input(text);
    }

    pub fn submit(&mut self) -> SubmitOutcome {
        self.controller.submit()
    }

    /// Wait for the in-flight request, if any.
    pub async fn settle_request(&mut self) {
        self.controller.settle().await;
    }

    /// Advance one frame: bump the animation tick and apply a finished request.
    pub fn tick(&mut self) {
        self.tick = self.tick.wrapping_add(1);
        self.controller.poll();
    }

    #[must_use]
    pub fn tick_count(&self) -> usize {
        self.tick
    }

    #[must_use]
    pub fn ui_options(&self) -> UiOptions {
        self.options
    }

    pub fn toggle_theme(&mut self) {
        self.options.theme = self.options.theme.toggle();
        tracing::debug!(theme = self.options.theme.as_str(), "Theme toggled");
    }

    pub fn request_quit(&mut self) {
        self.should_quit = true;
    }

    #[must_use]
    pub fn should_quit(&self) -> bool {
        self.should_quit
    }
}
