//! Error type for color normalization.

/// Error returned when a color operation receives no color at all.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorError {
    /// Input was absent (`None`) or JSON `null`
    InvalidInput {
        /// What was found instead of a color: `"undefined"` or `"null"`
        found: &'static str,
    },
}

impl std::fmt::Display for ColorError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidInput { found } => {
                write!(f, "Invalid color input: expected a color value, found {}", found)
            }
        }
    }
}

impl std::error::Error for ColorError {}
