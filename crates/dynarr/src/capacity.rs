//! Capacity normalization.
//!
//! Every capacity an array holds is a power of its growth factor. The
//! [`CapacityPolicy`] maps an arbitrary requested slot count onto that
//! ladder.

use crate::config::ArrayConfig;
use crate::error::ArrayError;

/// Rounds requested capacities up to the next power of the growth factor.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CapacityPolicy {
    growth_factor: usize,
}

impl CapacityPolicy {
    /// Build a policy from a validated config.
    pub fn from_config(config: &ArrayConfig) -> Result<Self, ArrayError> {
        config.validate()?;
        Ok(Self {
            growth_factor: config.growth_factor,
        })
    }

    /// The multiplier between consecutive capacities.
    pub fn growth_factor(&self) -> usize {
        self.growth_factor
    }

    /// Smallest power of the growth factor that is `>= requested`.
    ///
    /// Starts the ladder at 1, so requests of 0 and 1 both yield 1.
    /// Returns `AllocationFailed` if the next rung overflows `usize`.
    pub fn normalize(&self, requested: usize) -> Result<usize, ArrayError> {
        let mut capacity = 1usize;
        while capacity < requested {
            capacity = capacity
                .checked_mul(self.growth_factor)
                .ok_or(ArrayError::AllocationFailed { requested })?;
        }
        Ok(capacity)
    }

    /// Capacity to grow to when a single insert overflows `current`.
    pub fn grow_one(&self, current: usize) -> Result<usize, ArrayError> {
        let requested = current
            .checked_add(1)
            .ok_or(ArrayError::AllocationFailed { requested: current })?;
        self.normalize(requested)
    }

    /// Whether `capacity` lies on this policy's ladder.
    pub fn is_normalized(&self, capacity: usize) -> bool {
        matches!(self.normalize(capacity), Ok(c) if c == capacity)
    }
}

impl Default for CapacityPolicy {
    fn default() -> Self {
        Self {
            growth_factor: ArrayConfig::DEFAULT_GROWTH_FACTOR,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalizes_to_powers_of_two() {
        let policy = CapacityPolicy::default();
        assert_eq!(policy.normalize(0).unwrap(), 1);
        assert_eq!(policy.normalize(1).unwrap(), 1);
        assert_eq!(policy.normalize(2).unwrap(), 2);
        assert_eq!(policy.normalize(3).unwrap(), 4);
        assert_eq!(policy.normalize(4).unwrap(), 4);
        assert_eq!(policy.normalize(17).unwrap(), 32);
        assert_eq!(policy.normalize(20).unwrap(), 32);
    }

    #[test]
    fn grow_one_doubles_normalized_capacity() {
        let policy = CapacityPolicy::default();
        assert_eq!(policy.grow_one(1).unwrap(), 2);
        assert_eq!(policy.grow_one(16).unwrap(), 32);
    }

    #[test]
    fn custom_growth_factor() {
        let config = ArrayConfig::new(5).growth_factor(3);
        let policy = CapacityPolicy::from_config(&config).unwrap();
        assert_eq!(policy.normalize(5).unwrap(), 9);
        assert_eq!(policy.grow_one(9).unwrap(), 27);
        assert!(policy.is_normalized(81));
        assert!(!policy.is_normalized(12));
    }

    #[test]
    fn overflow_returns_error_not_panic() {
        let policy = CapacityPolicy::default();
        let result = policy.normalize(usize::MAX);
        assert!(matches!(result, Err(ArrayError::AllocationFailed { .. })));
        let result = policy.grow_one(usize::MAX);
        assert!(matches!(result, Err(ArrayError::AllocationFailed { .. })));
    }

    #[test]
    fn invalid_config_rejected() {
        let config = ArrayConfig::new(4).growth_factor(1);
        assert!(CapacityPolicy::from_config(&config).is_err());
    }
}
