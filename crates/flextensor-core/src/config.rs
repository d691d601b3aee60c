//! Buffer-layer configuration
//!
//! Settings that a numeric array library would otherwise keep as global
//! state are carried explicitly and passed to the operations that need them.

/// Rule for combining operands of different shapes in elementwise operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Broadcasting {
    /// Trailing-aligned broadcasting where size-1 dimensions stretch.
    #[default]
    Numpy,
    /// Operands must have identical shapes.
    Strict,
}

/// Configuration for the dense buffer layer
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BufferConfig {
    /// Shape-combination rule for elementwise arithmetic (default: `Numpy`)
    pub broadcasting: Broadcasting,

    /// Fixed number of decimal places when rendering (default: `None`,
    /// i.e. the element type's own formatting)
    pub precision: Option<usize>,
}

impl BufferConfig {
    /// Configuration that rejects broadcasting.
    pub fn strict() -> Self {
        Self {
            broadcasting: Broadcasting::Strict,
            ..Self::default()
        }
    }

    /// Set the rendering precision.
    pub fn with_precision(mut self, precision: usize) -> Self {
        self.precision = Some(precision);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = BufferConfig::default();
        assert_eq!(config.broadcasting, Broadcasting::Numpy);
        assert_eq!(config.precision, None);
    }

    #[test]
    fn test_builders() {
        let config = BufferConfig::strict().with_precision(3);
        assert_eq!(config.broadcasting, Broadcasting::Strict);
        assert_eq!(config.precision, Some(3));
    }
}
