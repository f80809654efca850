use crate::prelude::*;

pub struct Handler;

impl Handler {
    pub fn new(event_w: crate::event::Writer) -> Result<Self> {
        let signals = tokio::signal::unix::signal(
            tokio::signal::unix::SignalKind::window_change(),
        )
        .context("failed to listen for SIGWINCH")?;
        tokio::spawn(Self::task(signals, event_w));
        Ok(Self)
    }

    async fn task(
        mut signals: tokio::signal::unix::Signal,
        event_w: crate::event::Writer,
    ) {
        while signals.recv().await.is_some() {
            let size = size();
            tracing::debug!(rows = size.0, cols = size.1, "terminal resized");
            event_w.send(Event::Resize(size));
        }
    }
}

/// The current terminal size as (rows, cols).
pub fn size() -> (u16, u16) {
    terminal_size::terminal_size().map_or(
        (24, 80),
        |(terminal_size::Width(w), terminal_size::Height(h))| (h, w),
    )
}
