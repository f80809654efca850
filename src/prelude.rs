pub use anyhow::{Context as _, Result};

pub use crate::event::Event;
