use crate::error::{CancelError, Error};
use crate::surface::{Console, Surface};

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum State {
    Pending,
    Resolved,
    Rejected,
}

/// The single-shot outcome of one prompt invocation.
///
/// Only the first call to `resolve` or `reject` has any effect, and the
/// outcome is delivered to the matching `Pending`.
#[derive(Debug)]
pub struct Controller {
    message: String,
    state: State,
    tx: Option<tokio::sync::oneshot::Sender<crate::error::Result<String>>>,
}

impl Controller {
    pub fn new(message: &str) -> (Self, Pending) {
        let (tx, rx) = tokio::sync::oneshot::channel();
        (
            Self {
                message: message.to_string(),
                state: State::Pending,
                tx: Some(tx),
            },
            Pending { rx },
        )
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn state(&self) -> State {
        self.state
    }

    pub fn is_pending(&self) -> bool {
        self.state == State::Pending
    }

    /// True once nobody can observe this controller's outcome any more,
    /// either because it already finished or because the `Pending` was
    /// dropped.
    pub fn is_abandoned(&self) -> bool {
        self.tx.as_ref().map_or(true, |tx| tx.is_closed())
    }

    pub fn resolve(&mut self, text: String) {
        self.finish(State::Resolved, Ok(text));
    }

    pub fn reject(&mut self, e: CancelError) {
        self.finish(State::Rejected, Err(e.into()));
    }

    fn finish(
        &mut self,
        state: State,
        outcome: crate::error::Result<String>,
    ) {
        if let Some(tx) = self.tx.take() {
            self.state = state;
            match &outcome {
                Ok(text) => tracing::debug!(
                    prompt = %self.message,
                    %text,
                    "prompt resolved"
                ),
                Err(e) => tracing::debug!(
                    prompt = %self.message,
                    error = %e,
                    "prompt rejected"
                ),
            }
            if tx.send(outcome).is_err() {
                tracing::debug!(
                    prompt = %self.message,
                    "prompt outcome discarded by caller"
                );
            }
        }
    }
}

/// The eventual outcome of a prompt.
///
/// Resolves to the entered text, to `Error::Cancelled` if the user declined,
/// or to `Error::SurfaceClosed` if the surface holding the prompt was dropped
/// first. Dropping a `Pending` discards the outcome without affecting the
/// prompt itself.
#[derive(Debug)]
pub struct Pending {
    rx: tokio::sync::oneshot::Receiver<crate::error::Result<String>>,
}

impl Pending {
    pub fn ready(outcome: crate::error::Result<String>) -> Self {
        let (tx, rx) = tokio::sync::oneshot::channel();
        // rx is still alive, so this can't fail
        let _ = tx.send(outcome);
        Self { rx }
    }
}

impl std::future::Future for Pending {
    type Output = crate::error::Result<String>;

    fn poll(
        mut self: std::pin::Pin<&mut Self>,
        cx: &mut std::task::Context<'_>,
    ) -> std::task::Poll<Self::Output> {
        std::pin::Pin::new(&mut self.rx)
            .poll(cx)
            .map(|res| res.unwrap_or(Err(Error::SurfaceClosed)))
    }
}

/// Asks for a line of text on either kind of surface.
///
/// A dialog blocks the caller until the console responds and returns an
/// already completed `Pending`; an interactive container attaches an input
/// and completes the `Pending` from its key handling later on.
pub fn prompt_for(
    message: &str,
    surface: Surface<'_>,
    default: &str,
) -> Pending {
    match surface {
        Surface::Dialog(console) => {
            Pending::ready(dialog(console, message, default))
        }
        Surface::Interactive(container) => container.prompt(message, default),
    }
}

/// Asks for a line of text through a blocking headless dialog.
pub fn dialog(
    console: &mut dyn Console,
    message: &str,
    default: &str,
) -> crate::error::Result<String> {
    let (mut controller, mut pending) = Controller::new(message);
    match console.prompt(message, default) {
        Ok(Some(text)) => controller.resolve(text),
        Ok(None) => {
            controller.reject(CancelError::new(console.cancel_message()));
        }
        Err(e) => {
            tracing::warn!(
                error = %crate::format::io_error(&e),
                "dialog prompt failed"
            );
            controller.reject(CancelError::with_source(
                console.cancel_message(),
                e,
            ));
        }
    }
    pending
        .rx
        .try_recv()
        .unwrap_or(Err(Error::SurfaceClosed))
}

#[cfg(test)]
mod test {
    use super::*;

    use futures_util::future::FutureExt as _;

    struct Scripted {
        responses: std::collections::VecDeque<std::io::Result<Option<String>>>,
        asked: Vec<(String, String)>,
    }

    impl Scripted {
        fn new(
            responses: impl IntoIterator<Item = std::io::Result<Option<String>>>,
        ) -> Self {
            Self {
                responses: responses.into_iter().collect(),
                asked: vec![],
            }
        }
    }

    impl Console for Scripted {
        fn prompt(
            &mut self,
            message: &str,
            default: &str,
        ) -> std::io::Result<Option<String>> {
            self.asked.push((message.to_string(), default.to_string()));
            self.responses.pop_front().unwrap_or(Ok(None))
        }

        fn log(&mut self, _message: &str) {}
    }

    #[test]
    fn test_controller_single_shot() {
        let (mut controller, mut pending) = Controller::new("name?");
        assert!(controller.is_pending());
        assert!((&mut pending).now_or_never().is_none());

        controller.resolve("bob".to_string());
        controller.reject(CancelError::default());
        controller.resolve("alice".to_string());
        assert_eq!(controller.state(), State::Resolved);
        assert_eq!(pending.now_or_never().unwrap().unwrap(), "bob");
    }

    #[test]
    fn test_controller_reject() {
        let (mut controller, pending) = Controller::new("name?");
        controller.reject(CancelError::default());
        assert_eq!(controller.state(), State::Rejected);
        let e = pending.now_or_never().unwrap().unwrap_err();
        assert!(e.is_cancelled());
    }

    #[test]
    fn test_controller_abandoned() {
        let (controller, pending) = Controller::new("name?");
        assert!(!controller.is_abandoned());
        drop(pending);
        assert!(controller.is_abandoned());
        assert!(controller.is_pending());

        let (mut controller, _pending) = Controller::new("name?");
        controller.resolve("bob".to_string());
        assert!(controller.is_abandoned());
    }

    #[test]
    fn test_controller_dropped() {
        let (controller, pending) = Controller::new("name?");
        drop(controller);
        assert!(matches!(
            pending.now_or_never(),
            Some(Err(Error::SurfaceClosed))
        ));
    }

    #[test]
    fn test_dialog_response() {
        let mut console = Scripted::new([
            Ok(Some("ls".to_string())),
            Ok(Some(String::new())),
        ]);
        assert_eq!(dialog(&mut console, "cmd", "pwd").unwrap(), "ls");
        assert_eq!(dialog(&mut console, "cmd", "pwd").unwrap(), "");
        assert_eq!(
            console.asked,
            [
                ("cmd".to_string(), "pwd".to_string()),
                ("cmd".to_string(), "pwd".to_string())
            ]
        );
    }

    #[test]
    fn test_dialog_cancel() {
        let mut console = Scripted::new([Ok(None)]);
        let e = dialog(&mut console, "cmd", "").unwrap_err();
        assert!(e.is_cancelled());
        assert_eq!(e.to_string(), "User Cancelled");
    }

    #[test]
    fn test_dialog_failure() {
        let mut console = Scripted::new([Err(std::io::Error::new(
            std::io::ErrorKind::BrokenPipe,
            "closed",
        ))]);
        let e = dialog(&mut console, "cmd", "").unwrap_err();
        assert!(e.is_cancelled());
        assert_eq!(
            std::error::Error::source(&e).unwrap().to_string(),
            "closed"
        );
    }

    #[tokio::test]
    async fn test_prompt_for_dialog() {
        let mut console = Scripted::new([Ok(Some(String::new()))]);
        let pending =
            prompt_for("cmd", Surface::Dialog(&mut console), "default");
        assert_eq!(pending.await.unwrap(), "");

        let pending = prompt_for("cmd", Surface::Dialog(&mut console), "");
        assert!(pending.await.unwrap_err().is_cancelled());
    }
}
