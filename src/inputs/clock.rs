use crate::prelude::*;

pub struct Handler;

impl Handler {
    pub fn new(
        event_w: crate::event::Writer,
        period: std::time::Duration,
    ) -> Self {
        tokio::spawn(Self::task(event_w, period));
        Self
    }

    async fn task(
        event_w: crate::event::Writer,
        period: std::time::Duration,
    ) {
        let mut interval = tokio::time::interval_at(
            tokio::time::Instant::now() + period,
            period,
        );
        interval.set_missed_tick_behavior(
            tokio::time::MissedTickBehavior::Skip,
        );
        loop {
            interval.tick().await;
            event_w.send(Event::ClockTimer);
        }
    }
}
