use crate::prelude::*;

mod clock;
mod resize;
pub use resize::size;
mod stdin;

/// Background sources feeding the event loop: keys from the terminal, size
/// changes, and a periodic tick used to expire alerts.
pub struct Handler {
    _clock: clock::Handler,
    _resize: resize::Handler,
    _stdin: stdin::Handler,
}

impl Handler {
    pub fn new(
        input: textmode::blocking::Input,
        event_w: crate::event::Writer,
        tick: std::time::Duration,
    ) -> Result<Self> {
        Ok(Self {
            _clock: clock::Handler::new(event_w.clone(), tick),
            _resize: resize::Handler::new(event_w.clone())?,
            _stdin: stdin::Handler::new(input, event_w),
        })
    }
}
