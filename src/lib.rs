//! Ask a user for a line of text and report how things went.
//!
//! A prompt can be shown on two kinds of [`Surface`]: a headless
//! [`Console`], which answers through a single blocking call, or a live
//! [`Container`], which hosts an input with shell style history and
//! completes the prompt from key presses. Either way the caller gets a
//! [`Pending`] that resolves to the entered text or to a [`CancelError`].
//! [`status::alert`] shows the outcome of any operation on the same
//! surfaces.

// will uncomment this once it is closer to release
// #![warn(clippy::cargo)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![warn(clippy::as_conversions)]
#![warn(clippy::get_unwrap)]
#![allow(clippy::missing_const_for_fn)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::new_without_default)]
#![allow(clippy::future_not_send)]

pub mod app;
pub mod config;
mod dirs;
pub mod error;
mod event;
mod format;
pub mod history;
mod inputs;
mod prelude;
pub mod prompt;
pub mod status;
pub mod surface;

pub use config::Config;
pub use error::{CancelError, Error};
pub use history::History;
pub use prompt::{prompt_for, Pending};
pub use surface::{Console, Container, Surface};
