use crate::surface::Surface;

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Kind {
    Success,
    Failure,
}

/// A transient status message shown in a container.
#[derive(Debug)]
pub struct Alert {
    kind: Kind,
    text: String,
    created: time::OffsetDateTime,
    expires: std::time::Instant,
}

impl Alert {
    pub fn new(kind: Kind, text: String, display: std::time::Duration) -> Self {
        Self {
            kind,
            text,
            created: time::OffsetDateTime::now_utc(),
            expires: std::time::Instant::now() + display,
        }
    }

    pub fn render(
        &self,
        out: &mut impl textmode::Textmode,
        width: usize,
        color: Option<textmode::Color>,
        offset: time::UtcOffset,
    ) {
        let time = crate::format::time(self.created.to_offset(offset));
        let text: String = self
            .text
            .chars()
            .filter(|c| !c.is_control())
            .take(width.saturating_sub(time.len() + 3))
            .collect();
        out.set_fgcolor(textmode::color::BLUE);
        out.write_str(&format!("[{}] ", time));
        out.reset_attributes();
        if let Some(color) = color {
            out.set_fgcolor(color);
        }
        out.write_str(&text);
        out.reset_attributes();
    }

    pub fn kind(&self) -> Kind {
        self.kind
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn is_expired(&self, now: std::time::Instant) -> bool {
        now >= self.expires
    }
}

/// Reports the outcome of an operation on a surface and hands it back.
///
/// Success is shown as a success alert in a container or logged to a
/// console; failure as a failure alert or the console's error output.
pub fn alert<T, E>(result: Result<T, E>, surface: Surface<'_>) -> Result<T, E>
where
    T: std::fmt::Display,
    E: std::fmt::Display,
{
    match (&result, surface) {
        (Ok(t), Surface::Dialog(console)) => console.log(&t.to_string()),
        (Err(e), Surface::Dialog(console)) => console.error(&e.to_string()),
        (Ok(t), Surface::Interactive(container)) => {
            container.alert(Kind::Success, t.to_string());
        }
        (Err(e), Surface::Interactive(container)) => {
            container.alert(Kind::Failure, e.to_string());
        }
    }
    result
}
