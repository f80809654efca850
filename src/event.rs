#[derive(Debug)]
pub enum Event {
    Key(textmode::Key),
    Resize((u16, u16)),
    ClockTimer,
}

pub fn channel() -> (Writer, Reader) {
    let (event_w, event_r) = tokio::sync::mpsc::unbounded_channel();
    (Writer::new(event_w), Reader::new(event_r))
}

#[derive(Clone)]
pub struct Writer(tokio::sync::mpsc::UnboundedSender<Event>);

impl Writer {
    pub fn new(event_w: tokio::sync::mpsc::UnboundedSender<Event>) -> Self {
        Self(event_w)
    }

    pub fn send(&self, event: Event) {
        // the only time this can fail is when the reader has been dropped,
        // at which point nobody cares about new events anyway
        let _ = self.0.send(event);
    }
}

pub struct Reader {
    pending: std::sync::Arc<tokio::sync::Mutex<Pending>>,
    cvar: std::sync::Arc<tokio::sync::Notify>,
}

impl Reader {
    pub fn new(
        mut input: tokio::sync::mpsc::UnboundedReceiver<Event>,
    ) -> Self {
        let pending = std::sync::Arc::new(tokio::sync::Mutex::new(
            Pending::new(),
        ));
        let cvar = std::sync::Arc::new(tokio::sync::Notify::new());
        {
            let pending = std::sync::Arc::clone(&pending);
            let cvar = std::sync::Arc::clone(&cvar);
            tokio::spawn(async move {
                while let Some(event) = input.recv().await {
                    pending.lock().await.new_event(Some(event));
                    cvar.notify_one();
                }
                pending.lock().await.new_event(None);
                cvar.notify_one();
            });
        }
        Self { pending, cvar }
    }

    pub async fn recv(&self) -> Option<Event> {
        loop {
            {
                let mut pending = self.pending.lock().await;
                if pending.has_event() {
                    return pending.get_event();
                }
            }
            self.cvar.notified().await;
        }
    }
}

#[derive(Default)]
struct Pending {
    key: std::collections::VecDeque<textmode::Key>,
    size: Option<(u16, u16)>,
    clock_timer: bool,
    done: bool,
}

impl Pending {
    fn new() -> Self {
        Self::default()
    }

    fn has_event(&self) -> bool {
        self.done
            || !self.key.is_empty()
            || self.size.is_some()
            || self.clock_timer
    }

    // anything still queued is delivered before the end of input
    fn get_event(&mut self) -> Option<Event> {
        if let Some(key) = self.key.pop_front() {
            return Some(Event::Key(key));
        }
        if let Some(size) = self.size.take() {
            return Some(Event::Resize(size));
        }
        if self.clock_timer {
            self.clock_timer = false;
            return Some(Event::ClockTimer);
        }
        None
    }

    fn new_event(&mut self, event: Option<Event>) {
        match event {
            Some(Event::Key(key)) => self.key.push_back(key),
            Some(Event::Resize(size)) => self.size = Some(size),
            Some(Event::ClockTimer) => self.clock_timer = true,
            None => self.done = true,
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[tokio::test]
    async fn test_keys_in_order() {
        let (event_w, event_r) = channel();
        event_w.send(Event::Key(textmode::Key::Char('a')));
        event_w.send(Event::Key(textmode::Key::Char('b')));
        event_w.send(Event::Key(textmode::Key::Ctrl(b'm')));
        for expected in [
            textmode::Key::Char('a'),
            textmode::Key::Char('b'),
            textmode::Key::Ctrl(b'm'),
        ] {
            match event_r.recv().await {
                Some(Event::Key(key)) => assert_eq!(key, expected),
                event => panic!("unexpected event {:?}", event),
            }
        }
    }

    #[test]
    fn test_coalesce() {
        let mut pending = Pending::new();
        assert!(!pending.has_event());
        pending.new_event(Some(Event::Resize((24, 80))));
        pending.new_event(Some(Event::ClockTimer));
        pending.new_event(Some(Event::Resize((40, 120))));
        pending.new_event(Some(Event::ClockTimer));
        pending.new_event(Some(Event::Key(textmode::Key::Escape)));

        assert!(matches!(
            pending.get_event(),
            Some(Event::Key(textmode::Key::Escape))
        ));
        assert!(matches!(pending.get_event(), Some(Event::Resize((40, 120)))));
        assert!(matches!(pending.get_event(), Some(Event::ClockTimer)));
        assert!(!pending.has_event());
        assert!(pending.get_event().is_none());
    }

    #[tokio::test]
    async fn test_done() {
        let (event_w, event_r) = channel();
        event_w.send(Event::ClockTimer);
        drop(event_w);
        assert!(matches!(event_r.recv().await, Some(Event::ClockTimer)));
        assert!(event_r.recv().await.is_none());
        assert!(event_r.recv().await.is_none());
    }
}
