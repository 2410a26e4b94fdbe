use crate::model::QuizSettings;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TickOutcome {
    Running { remaining_secs: u32 },
    Expired,
}

/// Whole-second countdown for a timed quiz. Floors at zero.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Countdown {
    start_secs: u32,
    remaining_secs: u32,
    critical_threshold_secs: u32,
}

impl Countdown {
    #[must_use]
    pub fn new(settings: &QuizSettings) -> Self {
        Self::with_start(
            settings.duration_secs(),
            settings.critical_threshold_secs(),
        )
    }

    #[must_use]
    pub fn with_start(start_secs: u32, critical_threshold_secs: u32) -> Self {
        Self {
            start_secs,
            remaining_secs: start_secs,
            critical_threshold_secs,
        }
    }

    #[must_use]
    pub fn remaining_secs(&self) -> u32 {
        self.remaining_secs
    }

    #[must_use]
    pub fn start_secs(&self) -> u32 {
        self.start_secs
    }

    /// Seconds consumed since the countdown started.
    #[must_use]
    pub fn elapsed_secs(&self) -> u32 {
        self.start_secs.saturating_sub(self.remaining_secs)
    }

    /// True once fewer than the critical threshold seconds remain.
    #[must_use]
    pub fn is_critical(&self) -> bool {
        self.remaining_secs < self.critical_threshold_secs
    }

    /// True once no more than the critical threshold seconds remain.
    #[must_use]
    pub fn is_urgent(&self) -> bool {
        self.remaining_secs <= self.critical_threshold_secs
    }

    /// Consume one second.
    pub fn tick(&mut self) -> TickOutcome {
        self.remaining_secs = self.remaining_secs.saturating_sub(1);
        if self.remaining_secs == 0 {
            TickOutcome::Expired
        } else {
            TickOutcome::Running {
                remaining_secs: self.remaining_secs,
            }
        }
    }

    pub fn reset(&mut self) {
        self.remaining_secs = self.start_secs;
    }
}
