use crate::error::CancelError;
use crate::history::History;
use crate::prompt::{Controller, Pending};
use crate::status::{Alert, Kind};

use super::Input;

use unicode_width::UnicodeWidthStr as _;

struct Label {
    message: String,
    input: Input,
    controller: Controller,
}

/// A live display area that hosts at most one prompt and a stack of alerts.
///
/// The prompt sits on the bottom line and alerts stack up above it, newest
/// first. The container also owns the history shared by every prompt opened
/// on it; it is created by the first prompt and lives as long as the
/// container does.
pub struct Container {
    size: (u16, u16),
    label: Option<Label>,
    alerts: std::collections::VecDeque<Alert>,
    history: Option<History>,
    // prompts replaced by a newer one whose caller may still be waiting;
    // they never complete on their own
    parked: Vec<Controller>,
    config: crate::config::Config,
}

impl Container {
    pub fn new(config: crate::config::Config) -> Self {
        Self {
            size: (24, 80),
            label: None,
            alerts: std::collections::VecDeque::new(),
            history: None,
            parked: vec![],
            config,
        }
    }

    pub fn render(
        &self,
        out: &mut impl textmode::Textmode,
        offset: time::UtcOffset,
    ) {
        let (rows, cols) = self.size;
        let width = usize::from(cols);

        let mut row = rows;
        if let Some(label) = &self.label {
            row = row.saturating_sub(1);
            out.move_to(row, 0);
            out.set_bgcolor(textmode::Color::Rgb(0x20, 0x20, 0x20));
            out.write(b"\x1b[K");
            out.write_str(&label.message);
            out.reset_attributes();
            out.write_str(" ");
            label.input.render(out);
        }

        for alert in &self.alerts {
            if row == 0 {
                break;
            }
            row -= 1;
            let color = match alert.kind() {
                Kind::Success => &self.config.status.success_color,
                Kind::Failure => &self.config.status.failure_color,
            };
            out.move_to(row, 0);
            alert.render(out, width, crate::format::color(color), offset);
        }

        if let Some(label) = &self.label {
            let col = label.message.width() + 1 + label.input.cursor_offset();
            out.move_to(
                rows.saturating_sub(1),
                u16::try_from(col.min(width.saturating_sub(1)))
                    .unwrap_or(cols),
            );
            out.hide_cursor(!label.input.has_focus());
        } else {
            out.hide_cursor(true);
        }
    }

    pub fn resize(&mut self, size: (u16, u16)) {
        self.size = size;
        if let Some(label) = &mut self.label {
            label
                .input
                .resize(input_width(usize::from(size.1), &label.message));
        }
    }

    /// Attaches a new prompt, replacing any prompt already shown.
    ///
    /// A replaced prompt is not cancelled: its outcome stays pending for as
    /// long as this container exists, or until its `Pending` is dropped.
    pub fn prompt(&mut self, message: &str, default: &str) -> Pending {
        self.parked.retain(|controller| !controller.is_abandoned());
        if let Some(label) = self.label.take() {
            tracing::debug!(
                prompt = %label.controller.message(),
                "replacing pending prompt"
            );
            self.parked.push(label.controller);
        }

        let (controller, pending) = Controller::new(message);
        let mut input = Input::new(default);
        input.resize(input_width(usize::from(self.size.1), message));
        if self.history.is_none() {
            tracing::debug!("creating prompt history");
            self.history = Some(History::new(default));
        }
        input.focus();
        self.label = Some(Label {
            message: message.to_string(),
            input,
            controller,
        });
        pending
    }

    /// Applies a keypress to the current prompt, returning whether anything
    /// changed.
    pub fn handle_key(&mut self, key: &textmode::Key) -> bool {
        let label = if let Some(label) = &mut self.label {
            label
        } else {
            return false;
        };
        let history = self
            .history
            .get_or_insert_with(|| History::new(label.input.value()));

        match key {
            textmode::Key::Ctrl(b'm') => {
                let text = label.input.value().to_string();
                history.push_state(text.clone());
                label.controller.resolve(text);
                self.label = None;
            }
            textmode::Key::Escape => {
                label.controller.reject(CancelError::new(
                    self.config.prompt.cancel_message.as_str(),
                ));
                self.label = None;
            }
            textmode::Key::Up => {
                // keep whatever was typed so far reachable with Down
                if history.at_end() {
                    history.push_state(label.input.value());
                    history.back();
                }
                history.back();
                label.input.set_value(history.state());
            }
            textmode::Key::Down => {
                label.input.set_value(history.forward());
            }
            textmode::Key::Char(c) => {
                label.input.add_input(&c.to_string());
            }
            textmode::Key::Backspace => label.input.backspace(),
            textmode::Key::Left => label.input.cursor_left(),
            textmode::Key::Right => label.input.cursor_right(),
            textmode::Key::Ctrl(b'u') => label.input.clear_backwards(),
            _ => return false,
        }
        true
    }

    pub fn alert(&mut self, kind: Kind, text: String) {
        tracing::debug!(?kind, %text, "alert");
        self.alerts
            .push_front(Alert::new(kind, text, self.config.status.display()));
    }

    /// Drops alerts whose display time is over, returning whether any were
    /// removed.
    pub fn tick(&mut self, now: std::time::Instant) -> bool {
        let count = self.alerts.len();
        self.alerts.retain(|alert| !alert.is_expired(now));
        self.alerts.len() != count
    }

    pub fn alerts(&self) -> impl Iterator<Item = &Alert> {
        self.alerts.iter()
    }

    pub fn has_prompt(&self) -> bool {
        self.label.is_some()
    }

    pub fn input_value(&self) -> Option<&str> {
        self.label.as_ref().map(|label| label.input.value())
    }

    pub fn history(&self) -> Option<&History> {
        self.history.as_ref()
    }
}

fn input_width(cols: usize, message: &str) -> usize {
    cols.saturating_sub(message.width() + 1)
}
