use thiserror::Error;

pub const DEFAULT_DURATION_SECS: u32 = 60;
pub const DEFAULT_CRITICAL_THRESHOLD_SECS: u32 = 10;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct QuizSettings {
    duration_secs: u32,
    critical_threshold_secs: u32,
}

#[derive(Clone, Copy, Debug, Default)]
pub struct QuizSettingsDraft {
    pub duration_secs: Option<u32>,
    pub critical_threshold_secs: Option<u32>,
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum SettingsError {
    #[error("quiz duration must be at least one second")]
    ZeroDuration,

    #[error("critical threshold ({threshold}s) exceeds quiz duration ({duration}s)")]
    ThresholdExceedsDuration { threshold: u32, duration: u32 },
}

impl QuizSettingsDraft {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Validate the draft, filling unset fields with defaults.
    ///
    /// An unset critical threshold defaults to the smaller of
    /// `DEFAULT_CRITICAL_THRESHOLD_SECS` and the duration.
    ///
    /// # Errors
    ///
    /// Returns `SettingsError::ZeroDuration` for a zero duration and
    /// `SettingsError::ThresholdExceedsDuration` if an explicit critical threshold is
    /// longer than the quiz itself.
    pub fn validate(self) -> Result<QuizSettings, SettingsError> {
        let duration_secs = self.duration_secs.unwrap_or(DEFAULT_DURATION_SECS);
        if duration_secs == 0 {
            return Err(SettingsError::ZeroDuration);
        }

        let critical_threshold_secs = match self.critical_threshold_secs {
            Some(threshold) if threshold > duration_secs => {
                return Err(SettingsError::ThresholdExceedsDuration {
                    threshold,
                    duration: duration_secs,
                });
            }
            Some(threshold) => threshold,
            None => DEFAULT_CRITICAL_THRESHOLD_SECS.min(duration_secs),
        };

        Ok(QuizSettings {
            duration_secs,
            critical_threshold_secs,
        })
    }
}

impl QuizSettings {
    #[must_use]
    pub fn duration_secs(&self) -> u32 {
        self.duration_secs
    }

    #[must_use]
    pub fn critical_threshold_secs(&self) -> u32 {
        self.critical_threshold_secs
    }
}

impl Default for QuizSettings {
    fn default() -> Self {
        Self {
            duration_secs: DEFAULT_DURATION_SECS,
            critical_threshold_secs: DEFAULT_CRITICAL_THRESHOLD_SECS,
        }
    }
}
