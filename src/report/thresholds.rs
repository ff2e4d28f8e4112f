use super::Status;

/// Errors raised when a warn/critical pair is inconsistent.
#[derive(Debug, thiserror::Error, PartialEq)]
pub enum ThresholdError {
    #[error("threshold `{0}` must be a finite, non-negative number")]
    OutOfRange(f64),
    #[error("warn threshold {warn} exceeds critical threshold {critical}")]
    Inverted { warn: f64, critical: f64 },
}

/// A validated `(warn, critical)` pair of percentages.
///
/// Invariant: `0 <= warn <= critical`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Thresholds {
    warn: f64,
    critical: f64,
}

impl Thresholds {
    /// Creates a new pair.
    ///
    /// # Errors
    ///
    /// Returns [`ThresholdError::OutOfRange`] for negative or non-finite bounds and
    /// [`ThresholdError::Inverted`] when `warn > critical`.
    pub fn new(warn: f64, critical: f64) -> Result<Self, ThresholdError> {
        for bound in [warn, critical] {
            if !bound.is_finite() || bound < 0.0 {
                return Err(ThresholdError::OutOfRange(bound));
            }
        }
        if warn > critical {
            return Err(ThresholdError::Inverted { warn, critical });
        }

        Ok(Self { warn, critical })
    }

    pub fn warn(&self) -> f64 {
        self.warn
    }

    pub fn critical(&self) -> f64 {
        self.critical
    }

    /// Maps a value onto a [`Status`].
    ///
    /// Meeting the warn bound yields [`Status::Warn`]; meeting the critical bound
    /// yields [`Status::Crit`], which wins when both match.
    pub fn evaluate(&self, value: f64) -> Status {
        let mut status = Status::Ok;
        if value >= self.warn {
            status = Status::Warn;
        }
        if value >= self.critical {
            status = Status::Crit;
        }
        status
    }

    /// Scales both bounds onto an absolute capacity, e.g. bytes of memory.
    pub fn levels_for(&self, capacity: u64) -> (u64, u64) {
        let unit = capacity as f64 / 100.0;
        ((unit * self.warn) as u64, (unit * self.critical) as u64)
    }

    /// Renders `<warn>;<critical>` for the perfdata column.
    pub fn perf_levels(&self) -> String {
        format!("{};{}", self.warn, self.critical)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_evaluate_is_monotonic() {
        let t = Thresholds::new(80.0, 90.0).unwrap();
        assert_eq!(t.evaluate(79.0), Status::Ok);
        assert_eq!(t.evaluate(80.0), Status::Warn);
        assert_eq!(t.evaluate(89.99), Status::Warn);
        assert_eq!(t.evaluate(90.0), Status::Crit);
        assert_eq!(t.evaluate(95.0), Status::Crit);
    }

    #[test]
    fn test_equal_bounds_go_straight_to_critical() {
        let t = Thresholds::new(50.0, 50.0).unwrap();
        assert_eq!(t.evaluate(49.9), Status::Ok);
        assert_eq!(t.evaluate(50.0), Status::Crit);
    }

    #[test]
    fn test_rejects_inverted_pair() {
        let err = Thresholds::new(90.0, 80.0).unwrap_err();
        assert_eq!(
            err,
            ThresholdError::Inverted {
                warn: 90.0,
                critical: 80.0
            }
        );
    }

    #[test]
    fn test_rejects_negative_and_nan() {
        assert!(matches!(
            Thresholds::new(-1.0, 10.0),
            Err(ThresholdError::OutOfRange(_))
        ));
        assert!(matches!(
            Thresholds::new(10.0, f64::NAN),
            Err(ThresholdError::OutOfRange(_))
        ));
    }

    #[test]
    fn test_levels_for_capacity() {
        let t = Thresholds::new(80.0, 90.0).unwrap();
        assert_eq!(t.levels_for(1000), (800, 900));
        assert_eq!(t.levels_for(0), (0, 0));
    }

    #[test]
    fn test_perf_levels() {
        let t = Thresholds::new(95.0, 99.5).unwrap();
        assert_eq!(t.perf_levels(), "95;99.5");
    }
}
