use platform_api::ApiError;
use tracing::warn;

/// Loading flag plus the banner messages of one screen.
///
/// After an action both banners can be set at once: `success` reports the
/// mutation, `error` the refetch that followed it. [`ViewState::refresh_failed`]
/// tells that case apart from a failed action.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ViewState {
    pub loading: bool,
    pub error: Option<String>,
    pub success: Option<String>,
}

impl ViewState {
    /// Start a fetch: clear both banners and raise the loading flag.
    pub fn begin(&mut self) {
        self.loading = true;
        self.error = None;
        self.success = None;
    }

    pub fn finish(&mut self) {
        self.loading = false;
    }

    pub fn fail(&mut self, err: &ApiError, fallback: &str) {
        warn!(code = err.code(), error = %err, "{fallback}");
        self.error = Some(err.user_message(fallback));
    }

    pub fn succeed(&mut self, message: impl Into<String>) {
        self.success = Some(message.into());
    }

    pub fn clear_messages(&mut self) {
        self.error = None;
        self.success = None;
    }

    pub fn has_error(&self) -> bool {
        self.error.is_some()
    }

    /// The action went through but reloading the screen did not.
    pub fn refresh_failed(&self) -> bool {
        self.success.is_some() && self.error.is_some()
    }
}
