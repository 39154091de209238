//! Construction-time configuration for [`DynamicArray`](crate::DynamicArray).

use crate::error::ArrayError;

/// Configuration for a [`DynamicArray`](crate::DynamicArray).
///
/// Controls the initial slot count and the factor capacities are
/// normalized to. Validated at construction; immutable afterwards, so two
/// arrays built from different configs never share growth state.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ArrayConfig {
    /// Number of slots requested at construction.
    ///
    /// Default: 4. Normalized up to the next power of `growth_factor`.
    /// Must be at least 1.
    pub initial_capacity: usize,

    /// Multiplier used to compute normalized capacities.
    ///
    /// Default: 2. Every capacity the array ever holds is a power of this
    /// value. Must be at least 2.
    pub growth_factor: usize,
}

impl ArrayConfig {
    /// Default initial capacity in elements.
    pub const DEFAULT_INITIAL_CAPACITY: usize = 4;

    /// Default growth factor.
    pub const DEFAULT_GROWTH_FACTOR: usize = 2;

    /// Create a config with the default growth factor and the given
    /// initial capacity.
    pub fn new(initial_capacity: usize) -> Self {
        Self {
            initial_capacity,
            growth_factor: Self::DEFAULT_GROWTH_FACTOR,
        }
    }

    /// Set the growth factor.
    pub fn growth_factor(mut self, factor: usize) -> Self {
        self.growth_factor = factor;
        self
    }

    /// Check that both parameters are usable.
    pub fn validate(&self) -> Result<(), ArrayError> {
        if self.initial_capacity == 0 {
            return Err(ArrayError::InvalidArgument {
                reason: "initial capacity must be 1 or greater".into(),
            });
        }
        if self.growth_factor < 2 {
            return Err(ArrayError::InvalidArgument {
                reason: format!(
                    "growth factor must be 2 or greater, got {}",
                    self.growth_factor
                ),
            });
        }
        Ok(())
    }
}

impl Default for ArrayConfig {
    fn default() -> Self {
        Self::new(Self::DEFAULT_INITIAL_CAPACITY)
    }
}
