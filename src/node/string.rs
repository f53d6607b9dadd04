//! String property constraints.
//!
//! This module provides [`StringConstraints`], the constraint fields legal
//! for `string` properties: length bounds, a regex pattern, and an
//! enumeration of allowed values.

use regex::Regex;

/// Constraint fields for a `string` property.
///
/// Only fields that are set serialize into the property's sub-schema;
/// an unset field is absent from the generated JSON, not `null`.
///
/// # Example
///
/// ```rust
/// use schematree::StringConstraints;
///
/// let constraints = StringConstraints::new()
///     .min_length(3)
///     .max_length(20)
///     .pattern(r"^[a-z]+$")
///     .unwrap();
///
/// assert_eq!(constraints.min_length, Some(3));
/// assert_eq!(constraints.pattern.as_deref(), Some(r"^[a-z]+$"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct StringConstraints {
    /// Minimum string length (`minLength`).
    pub min_length: Option<u64>,
    /// Maximum string length (`maxLength`).
    pub max_length: Option<u64>,
    /// Regex pattern the string must match (`pattern`).
    pub pattern: Option<String>,
    /// Allowed values (`enum`).
    pub enum_values: Option<Vec<String>>,
}

impl StringConstraints {
    /// Creates an empty constraint set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the minimum length.
    pub fn min_length(mut self, min: u64) -> Self {
        self.min_length = Some(min);
        self
    }

    /// Sets the maximum length.
    pub fn max_length(mut self, max: u64) -> Self {
        self.max_length = Some(max);
        self
    }

    /// Sets the regex pattern, verifying that it compiles.
    ///
    /// The pattern is stored as a string for serialization; compiling it
    /// here rejects patterns no downstream validator could use.
    ///
    /// # Example
    ///
    /// ```rust
    /// use schematree::StringConstraints;
    ///
    /// let ok = StringConstraints::new().pattern(r"^\d+$");
    /// assert!(ok.is_ok());
    ///
    /// let bad = StringConstraints::new().pattern(r"[unclosed");
    /// assert!(bad.is_err());
    /// ```
    pub fn pattern(mut self, pattern: &str) -> Result<Self, regex::Error> {
        Regex::new(pattern)?;
        self.pattern = Some(pattern.to_string());
        Ok(self)
    }

    /// Sets the allowed values.
    pub fn enum_values<I, S>(mut self, values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.enum_values = Some(values.into_iter().map(Into::into).collect());
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder_sets_fields() {
        let c = StringConstraints::new()
            .min_length(1)
            .max_length(10)
            .enum_values(["pending", "active"]);
        assert_eq!(c.min_length, Some(1));
        assert_eq!(c.max_length, Some(10));
        assert_eq!(
            c.enum_values,
            Some(vec!["pending".to_string(), "active".to_string()])
        );
        assert_eq!(c.pattern, None);
    }

    #[test]
    fn test_invalid_pattern_is_rejected() {
        let result = StringConstraints::new().pattern(r"[invalid");
        assert!(result.is_err());
    }

    #[test]
    fn test_valid_pattern_is_stored_verbatim() {
        let c = StringConstraints::new().pattern(r"^\d+$").unwrap();
        assert_eq!(c.pattern.as_deref(), Some(r"^\d+$"));
    }
}
