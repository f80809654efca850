use crate::prelude::*;

use crate::status;
use crate::surface::{Console, Container, Stdio, Surface};

use textmode::Textmode as _;

const TICK: std::time::Duration = std::time::Duration::from_millis(250);

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Action {
    Refresh,
    HardRefresh,
    Resize(u16, u16),
    Quit,
}

/// Runs the full screen prompt loop until the user quits with `^D`.
///
/// Every submitted line is shown as a success alert and every cancelled
/// prompt as a failure alert, after which a fresh prompt is opened.
pub async fn interactive(
    config: crate::config::Config,
    message: &str,
    default: &str,
    offset: time::UtcOffset,
) -> Result<i32> {
    let mut input = textmode::blocking::Input::new()?;
    let mut output = textmode::Output::new().await?;

    // avoid the guards getting stuck in a task that doesn't run to
    // completion
    let _input_guard = input.take_raw_guard();
    let _output_guard = output.take_screen_guard();

    let (event_w, event_r) = crate::event::channel();
    let _inputs = crate::inputs::Handler::new(input, event_w, TICK)?;

    let mut container = Container::new(config);
    let (rows, cols) = crate::inputs::size();
    container.resize((rows, cols));
    output.set_size(rows, cols);

    let mut pending = container.prompt(message, default);
    render(&container, &mut output, offset);
    output.hard_refresh().await?;

    loop {
        tokio::select! {
            outcome = &mut pending => {
                let _ = status::alert(
                    outcome,
                    Surface::Interactive(&mut container),
                );
                pending = container.prompt(message, default);
                render(&container, &mut output, offset);
                output.refresh().await?;
            }
            event = event_r.recv() => {
                let event = if let Some(event) = event {
                    event
                } else {
                    break;
                };
                match handle_event(&mut container, event) {
                    Some(Action::Refresh) => {
                        render(&container, &mut output, offset);
                        output.refresh().await?;
                    }
                    Some(Action::HardRefresh) => {
                        render(&container, &mut output, offset);
                        output.hard_refresh().await?;
                    }
                    Some(Action::Resize(rows, cols)) => {
                        output.set_size(rows, cols);
                        render(&container, &mut output, offset);
                        output.hard_refresh().await?;
                    }
                    Some(Action::Quit) => break,
                    None => {}
                }
            }
        }
    }

    Ok(0)
}

/// Prompts on the console until it is cancelled, logging each answer.
pub async fn dialog(
    config: &crate::config::Config,
    message: &str,
    default: &str,
) -> Result<i32> {
    let mut console = Stdio::new();
    console.set_cancel_message(&config.prompt.cancel_message);
    console.set_blank_is_default(config.prompt.blank_is_default);
    run_dialog(&mut console, message, default).await;
    Ok(0)
}

async fn run_dialog<C: Console>(
    console: &mut C,
    message: &str,
    default: &str,
) {
    loop {
        let outcome = crate::prompt::prompt_for(
            message,
            Surface::Dialog(&mut *console),
            default,
        )
        .await;
        let done = outcome.is_err();
        let _ = status::alert(outcome, Surface::Dialog(&mut *console));
        if done {
            break;
        }
    }
}

pub fn handle_event(
    container: &mut Container,
    event: Event,
) -> Option<Action> {
    match event {
        Event::Key(textmode::Key::Ctrl(b'd')) => Some(Action::Quit),
        Event::Key(textmode::Key::Ctrl(b'l')) => Some(Action::HardRefresh),
        Event::Key(key) => {
            container.handle_key(&key).then(|| Action::Refresh)
        }
        Event::Resize(size) => {
            container.resize(size);
            Some(Action::Resize(size.0, size.1))
        }
        Event::ClockTimer => container
            .tick(std::time::Instant::now())
            .then(|| Action::Refresh),
    }
}

fn render(
    container: &Container,
    out: &mut textmode::Output,
    offset: time::UtcOffset,
) {
    out.clear();
    container.render(out, offset);
}
