use std::fmt;
use std::rc::Rc;

use yew::functional::Reducible;

use crate::config;

/// Seconds left on the offer. Counts down to zero and stays there; reaching
/// zero does not trigger anything.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Countdown {
    seconds_remaining: u32,
}

impl Countdown {
    pub const fn new(seconds: u32) -> Self {
        Self {
            seconds_remaining: seconds,
        }
    }

    #[cfg(test)]
    pub fn seconds_remaining(&self) -> u32 {
        self.seconds_remaining
    }

    pub fn is_expired(&self) -> bool {
        self.seconds_remaining == 0
    }

    pub fn tick(&mut self) {
        self.seconds_remaining = self.seconds_remaining.saturating_sub(1);
    }

    /// `minutes:seconds`, e.g. `1:05`.
    pub fn format(&self) -> String {
        self.to_string()
    }
}

impl Default for Countdown {
    fn default() -> Self {
        Self::new(config::OFFER_SECONDS)
    }
}

impl fmt::Display for Countdown {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}:{:02}",
            self.seconds_remaining / 60,
            self.seconds_remaining % 60
        )
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CountdownAction {
    Tick,
}

impl Reducible for Countdown {
    type Action = CountdownAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        match action {
            // Nothing changes at zero, so skip the re-render.
            CountdownAction::Tick if self.is_expired() => self,
            CountdownAction::Tick => {
                let mut next = *self;
                next.tick();
                Rc::new(next)
            }
        }
    }
}
