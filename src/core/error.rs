use std::fmt::Display;

/// List level errors.
/// None of them leave the list modified.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListError {
    /// Index is outside of the range accepted by the operation.
    IndexOutOfRange {
        index: usize,
        len: usize,
        op: &'static str,
    },
    /// Capacity policy would not grow geometrically.
    InvalidGrowthFactor { factor: usize },
}

impl ListError {
    pub fn out_of_range(index: usize, len: usize, op: &'static str) -> Self {
        Self::IndexOutOfRange { index, len, op }
    }

    pub fn is_out_of_range(&self) -> bool {
        matches!(self, Self::IndexOutOfRange { .. })
    }
}

impl Display for ListError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::IndexOutOfRange { index, len, op } => write!(
                f,
                "Index {} is out of range for operation '{}' on list of length {}.",
                index, op, len
            ),
            Self::InvalidGrowthFactor { factor } => {
                write!(f, "Growth factor {} is less than 2.", factor)
            }
        }
    }
}

impl std::error::Error for ListError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_out_of_range() {
        let error = ListError::out_of_range(6, 5, "insert");
        assert!(error.is_out_of_range());
        assert_eq!(
            error.to_string(),
            "Index 6 is out of range for operation 'insert' on list of length 5."
        );
    }

    #[test]
    fn growth_factor_is_not_out_of_range() {
        assert!(!ListError::InvalidGrowthFactor { factor: 1 }.is_out_of_range());
    }
}
