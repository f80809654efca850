pub const DEFAULT_CANCEL_MESSAGE: &str = "User Cancelled";

/// The user declined to answer a prompt.
///
/// This is the only error a prompt produces on its own behalf: pressing
/// Escape in an interactive prompt, a headless dialog returning no response,
/// and a headless dialog failing while waiting for one all end up here. A
/// failed dialog keeps the underlying error as the source.
#[derive(thiserror::Error, Debug)]
#[error("{message}")]
pub struct CancelError {
    message: String,
    #[source]
    source: Option<Box<dyn std::error::Error + Send + Sync>>,
}

impl CancelError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            source: None,
        }
    }

    pub fn with_source(
        message: impl Into<String>,
        source: impl Into<Box<dyn std::error::Error + Send + Sync>>,
    ) -> Self {
        Self {
            message: message.into(),
            source: Some(source.into()),
        }
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

impl Default for CancelError {
    fn default() -> Self {
        Self::new(DEFAULT_CANCEL_MESSAGE)
    }
}

#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error(transparent)]
    Cancelled(#[from] CancelError),

    // the container holding the prompt went away while it was still pending
    #[error("prompt surface was closed before the prompt completed")]
    SurfaceClosed,
}

impl Error {
    pub fn is_cancelled(&self) -> bool {
        matches!(self, Self::Cancelled(_))
    }
}

pub type Result<T> = std::result::Result<T, Error>;
