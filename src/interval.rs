//! Interval arithmetic for ray parameter ranges.
//!
//! Provides closed intervals [min, max] used as the distance window of an
//! intersection query.

/// Closed interval [min, max] for range checking.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Interval {
    /// Minimum value of the interval
    pub min: f64,
    /// Maximum value of the interval
    pub max: f64,
}

impl Interval {
    /// Create a new interval with given min and max values
    pub fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    /// Check if the interval contains the given value (inclusive bounds)
    pub fn contains(&self, x: f64) -> bool {
        self.min <= x && x <= self.max
    }

    /// An interval is empty when min > max; no value is contained.
    pub fn is_empty(&self) -> bool {
        self.min > self.max
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn contains_is_inclusive() {
        let window = Interval::new(1.0, 2.0);
        assert!(window.contains(1.0));
        assert!(window.contains(2.0));
        assert!(window.contains(1.5));
        assert!(!window.contains(0.999));
        assert!(!window.contains(2.001));
    }

    #[test]
    fn inverted_interval_is_empty() {
        let window = Interval::new(2.0, 1.0);
        assert!(window.is_empty());
        assert!(!window.contains(1.5));
    }
}
