use crate::{
    definition::Schedule,
    error::PathError,
    normalize::{DEFAULT_PRECISION, MAX_PRECISION},
};

/// Options for scheduling the points of a morph batch
///
/// Delays and durations are in milliseconds.
/// A fixed `delay` or `duration` overrides the random value picked in its range.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct MorphOptions {
    /// Fixed delay of every point
    delay: Option<f64>,
    /// Fixed duration of every point
    duration: Option<f64>,
    min_delay: f64,
    max_delay: f64,
    min_duration: f64,
    max_duration: f64,
    /// Number of decimals of computed coordinates
    precision: u32,
}

impl Default for MorphOptions {
    fn default() -> Self {
        Self {
            delay: None,
            duration: None,
            min_delay: 0.,
            max_delay: 1000.,
            min_duration: 3000.,
            max_duration: 5000.,
            precision: DEFAULT_PRECISION,
        }
    }
}

impl MorphOptions {
    pub fn delay(&self) -> Option<f64> {
        self.delay
    }

    pub fn duration(&self) -> Option<f64> {
        self.duration
    }

    pub fn min_delay(&self) -> f64 {
        self.min_delay
    }

    pub fn max_delay(&self) -> f64 {
        self.max_delay
    }

    pub fn min_duration(&self) -> f64 {
        self.min_duration
    }

    pub fn max_duration(&self) -> f64 {
        self.max_duration
    }

    pub fn precision(&self) -> u32 {
        self.precision
    }

    pub fn with_delay(mut self, delay: f64) -> Self {
        self.delay = Some(delay);
        self
    }

    pub fn with_duration(mut self, duration: f64) -> Self {
        self.duration = Some(duration);
        self
    }

    pub fn with_delay_range(mut self, min: f64, max: f64) -> Self {
        self.min_delay = min;
        self.max_delay = max;
        self
    }

    pub fn with_duration_range(mut self, min: f64, max: f64) -> Self {
        self.min_duration = min;
        self.max_duration = max;
        self
    }

    pub fn with_precision(mut self, precision: u32) -> Self {
        self.precision = precision;
        self
    }

    /// Timing window of points which carry no schedule
    pub fn default_schedule(&self) -> Schedule {
        Schedule::new(
            self.delay.unwrap_or(self.min_delay),
            self.duration.unwrap_or(self.max_duration),
        )
    }

    /// Check that every value is a non negative number and that ranges are not inverted
    pub fn validate(&self) -> Result<(), PathError> {
        let values = [
            ("delay", self.delay),
            ("duration", self.duration),
            ("min_delay", Some(self.min_delay)),
            ("max_delay", Some(self.max_delay)),
            ("min_duration", Some(self.min_duration)),
            ("max_duration", Some(self.max_duration)),
        ];
        let invalid = values.iter().find_map(|(name, value)| {
            value
                .filter(|v| v.is_nan() || *v < 0.)
                .map(|v| (name, v))
        });
        if let Some((name, value)) = invalid {
            return Err(PathError::InvalidOption(format!(
                "{name} must be a non negative number, got {value}"
            )));
        }

        if self.precision > MAX_PRECISION {
            return Err(PathError::InvalidOption(format!(
                "precision must be at most {MAX_PRECISION} decimals, got {}",
                self.precision
            )));
        }

        if self.min_delay > self.max_delay {
            return Err(PathError::InvalidOption(format!(
                "delay range is inverted: {} > {}",
                self.min_delay, self.max_delay
            )));
        }
        if self.min_duration > self.max_duration {
            return Err(PathError::InvalidOption(format!(
                "duration range is inverted: {} > {}",
                self.min_duration, self.max_duration
            )));
        }
        Ok(())
    }
}
