mod console;
pub use console::Stdio;
mod container;
pub use container::Container;
mod input;
pub use input::Input;

/// Where a prompt or status message is shown.
pub enum Surface<'a> {
    /// A headless console: answers arrive through a single blocking call.
    Dialog(&'a mut dyn Console),
    /// A live container that hosts an input and transient alerts.
    Interactive(&'a mut Container),
}

/// A console-like object.
pub trait Console {
    /// Blocks until the user answers. `Ok(None)` means they declined.
    fn prompt(
        &mut self,
        message: &str,
        default: &str,
    ) -> std::io::Result<Option<String>>;

    fn log(&mut self, message: &str);

    // consoles without a separate error channel just get a marker
    fn error(&mut self, message: &str) {
        self.log(&crate::format::warning(message));
    }

    fn cancel_message(&self) -> &str {
        crate::error::DEFAULT_CANCEL_MESSAGE
    }
}
