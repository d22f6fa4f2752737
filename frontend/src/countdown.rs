use chrono::{DateTime, Utc};
use gloo_timers::callback::Interval;
use shared::{Countdown, CountdownLabel};
use yew::prelude::*;

/// A running countdown timer. Dropping or cancelling the handle stops it.
pub struct CountdownHandle {
    interval: Interval,
}

impl CountdownHandle {
    /// Emits the current label immediately, then again whenever it changes.
    pub fn start(start_time: DateTime<Utc>, period_ms: u32, on_tick: Callback<CountdownLabel>) -> Self {
        let mut countdown = Countdown::new(start_time, Utc::now());
        on_tick.emit(countdown.label().clone());
        let interval = Interval::new(period_ms, move || {
            if countdown.tick(Utc::now()) {
                on_tick.emit(countdown.label().clone());
            }
        });
        Self { interval }
    }

    pub fn cancel(self) {
        self.interval.cancel();
    }
}

/// Live countdown label for `start_time`, refreshed every `period_ms`.
/// The timer lives as long as the calling component.
#[hook]
pub fn use_countdown(start_time: DateTime<Utc>, period_ms: u32) -> CountdownLabel {
    let label = use_state(|| CountdownLabel::at(start_time, Utc::now()));

    {
        let label = label.clone();
        use_effect_with((start_time, period_ms), move |(start_time, period_ms)| {
            let handle = CountdownHandle::start(
                *start_time,
                *period_ms,
                Callback::from(move |next: CountdownLabel| label.set(next)),
            );
            move || handle.cancel()
        });
    }

    (*label).clone()
}
