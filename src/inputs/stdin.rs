use crate::prelude::*;

pub struct Handler;

impl Handler {
    pub fn new(
        mut input: textmode::blocking::Input,
        event_w: crate::event::Writer,
    ) -> Self {
        std::thread::spawn(move || loop {
            match input.read_key() {
                Ok(Some(key)) => event_w.send(Event::Key(key)),
                Ok(None) => break,
                Err(e) => {
                    tracing::error!(error = %e, "failed to read key");
                    break;
                }
            }
        });
        Self
    }
}
