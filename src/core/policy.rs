use super::ListError;
use getset::CopyGetters;

/// Growth factor used by default. Doubling keeps appends amortized O(1).
pub const DEFAULT_GROWTH_FACTOR: usize = 2;

/// Capacity at or below which a list never shrinks.
pub const DEFAULT_SHRINK_FLOOR: usize = 64;

/// When and by how much a list reallocates its backing buffer.
///
/// Growth is consulted only when an append or insert finds the list full.
/// Shrink is consulted only after an element was removed.
#[derive(CopyGetters, Debug, Clone, Copy, PartialEq, Eq)]
#[getset(get_copy = "pub")]
pub struct CapacityPolicy {
    /// Multiplier applied to capacity on growth. Always >= 2.
    growth_factor: usize,
    /// Capacity must be strictly above this for a shrink to happen.
    shrink_floor: usize,
}

impl CapacityPolicy {
    /// Fails if `growth_factor < 2`.
    pub fn new(growth_factor: usize, shrink_floor: usize) -> Result<Self, ListError> {
        if growth_factor < 2 {
            return Err(ListError::InvalidGrowthFactor {
                factor: growth_factor,
            });
        }
        Ok(Self {
            growth_factor,
            shrink_floor,
        })
    }

    /// Capacity to grow to so that at least `min_capacity` slots exist.
    pub fn grown(&self, capacity: usize, min_capacity: usize) -> usize {
        capacity
            .max(1)
            .saturating_mul(self.growth_factor)
            .max(min_capacity)
    }

    /// Capacity to shrink to, if a list with `len` live elements
    /// and `capacity` slots should shrink.
    pub fn shrunk(&self, capacity: usize, len: usize) -> Option<usize> {
        if capacity > self.shrink_floor && len < capacity / 4 {
            Some(capacity / 2)
        } else {
            None
        }
    }
}

impl Default for CapacityPolicy {
    fn default() -> Self {
        Self {
            growth_factor: DEFAULT_GROWTH_FACTOR,
            shrink_floor: DEFAULT_SHRINK_FLOOR,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_sub_geometric_growth() {
        assert_eq!(
            CapacityPolicy::new(1, 64),
            Err(ListError::InvalidGrowthFactor { factor: 1 })
        );
        assert_eq!(
            CapacityPolicy::new(0, 64),
            Err(ListError::InvalidGrowthFactor { factor: 0 })
        );
        let policy = CapacityPolicy::new(3, 8).unwrap();
        assert_eq!(policy.growth_factor(), 3);
        assert_eq!(policy.shrink_floor(), 8);
    }

    #[test]
    fn grown() {
        let policy = CapacityPolicy::default();
        assert_eq!(policy.grown(0, 1), 2);
        assert_eq!(policy.grown(5, 6), 10);
        assert_eq!(policy.grown(2, 100), 100);
    }

    #[test]
    fn shrunk() {
        let policy = CapacityPolicy::default();
        assert_eq!(policy.shrunk(100, 24), Some(50));
        assert_eq!(policy.shrunk(100, 25), None);
        // Floor is exclusive.
        assert_eq!(policy.shrunk(64, 0), None);
        assert_eq!(policy.shrunk(65, 15), Some(32));
        assert_eq!(policy.shrunk(65, 16), None);
    }

    #[test]
    fn shrunk_stays_above_len() {
        let policy = CapacityPolicy::default();
        for capacity in 0..1024 {
            for len in 0..=capacity {
                if let Some(new) = policy.shrunk(capacity, len) {
                    assert!(new > len);
                }
            }
        }
    }
}
