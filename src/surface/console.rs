/// A console over a line-oriented reader and writer.
///
/// End of input counts as declining the prompt. An empty line accepts the
/// default value unless `set_blank_is_default(false)` was called, in which
/// case it answers with the empty string.
pub struct Stdio<R, W> {
    input: R,
    output: W,
    cancel_message: String,
    blank_is_default: bool,
}

impl Stdio<std::io::StdinLock<'static>, std::io::Stdout> {
    pub fn new() -> Self {
        Self::with_io(std::io::stdin().lock(), std::io::stdout())
    }
}

impl<R: std::io::BufRead, W: std::io::Write> Stdio<R, W> {
    pub fn with_io(input: R, output: W) -> Self {
        Self {
            input,
            output,
            cancel_message: crate::error::DEFAULT_CANCEL_MESSAGE.into(),
            blank_is_default: true,
        }
    }

    pub fn set_blank_is_default(&mut self, blank_is_default: bool) {
        self.blank_is_default = blank_is_default;
    }

    pub fn set_cancel_message(&mut self, message: &str) {
        self.cancel_message = message.to_string();
    }

    pub fn into_output(self) -> W {
        self.output
    }
}

impl<R: std::io::BufRead, W: std::io::Write> super::Console for Stdio<R, W> {
    fn prompt(
        &mut self,
        message: &str,
        default: &str,
    ) -> std::io::Result<Option<String>> {
        write!(self.output, "{} ", message)?;
        if !default.is_empty() {
            write!(self.output, "[{}] ", default)?;
        }
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            writeln!(self.output)?;
            return Ok(None);
        }
        line.truncate(line.trim_end_matches(&['\r', '\n'][..]).len());
        if line.is_empty() && self.blank_is_default {
            Ok(Some(default.to_string()))
        } else {
            Ok(Some(line))
        }
    }

    fn log(&mut self, message: &str) {
        if let Err(e) = writeln!(self.output, "{}", message) {
            tracing::warn!(error = %e, "failed to write to console");
        }
    }

    fn cancel_message(&self) -> &str {
        &self.cancel_message
    }
}
