pub fn time(time: time::OffsetDateTime) -> String {
    format!(
        "{:02}:{:02}:{:02}",
        time.hour(),
        time.minute(),
        time.second()
    )
}

pub fn warning(message: &str) -> String {
    format!("\u{26a0}\u{fe0f} {}", message)
}

pub fn color(name: &str) -> Option<textmode::Color> {
    match name {
        "black" => Some(textmode::color::BLACK),
        "red" => Some(textmode::color::RED),
        "green" => Some(textmode::color::GREEN),
        "yellow" => Some(textmode::color::YELLOW),
        "blue" => Some(textmode::color::BLUE),
        "magenta" => Some(textmode::color::MAGENTA),
        "cyan" => Some(textmode::color::CYAN),
        "white" => Some(textmode::color::WHITE),
        _ => None,
    }
}

pub fn io_error(e: &std::io::Error) -> String {
    let mut s = format!("{}", e);
    if e.raw_os_error().is_some() {
        if let Some(i) = s.rfind(" (") {
            s.truncate(i);
        }
    }
    s
}
