//! Numeric property constraints.
//!
//! This module provides [`NumericConstraints`], the constraint fields
//! shared by `number` and `integer` properties.

use serde_json::Number;

/// Constraint fields for a `number` or `integer` property.
///
/// Bounds are stored as [`serde_json::Number`] so integer bounds
/// round-trip through the schema without becoming floats.
///
/// # Example
///
/// ```rust
/// use schematree::NumericConstraints;
///
/// let constraints = NumericConstraints::new().minimum(18).maximum(120);
/// assert_eq!(constraints.minimum, Some(18.into()));
/// ```
#[derive(Debug, Clone, PartialEq, Default)]
pub struct NumericConstraints {
    /// Inclusive lower bound (`minimum`).
    pub minimum: Option<Number>,
    /// Inclusive upper bound (`maximum`).
    pub maximum: Option<Number>,
}

impl NumericConstraints {
    /// Creates an empty constraint set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the inclusive lower bound.
    ///
    /// Integer literals convert directly; for float bounds pass a
    /// [`Number`] built with [`Number::from_f64`].
    pub fn minimum(mut self, min: impl Into<Number>) -> Self {
        self.minimum = Some(min.into());
        self
    }

    /// Sets the inclusive upper bound.
    pub fn maximum(mut self, max: impl Into<Number>) -> Self {
        self.maximum = Some(max.into());
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder_sets_bounds() {
        let c = NumericConstraints::new().minimum(0).maximum(100);
        assert_eq!(c.minimum, Some(0.into()));
        assert_eq!(c.maximum, Some(100.into()));
    }

    #[test]
    fn test_float_bounds() {
        let half = Number::from_f64(0.5).unwrap();
        let c = NumericConstraints::new().minimum(half.clone());
        assert_eq!(c.minimum, Some(half));
    }
}
