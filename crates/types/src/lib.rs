//! Validated primitive types shared across UMRS crates.
//!
//! These newtypes enforce their invariants at construction time so that
//! downstream code can rely on the content without re-checking it.

/// Errors that can occur when creating validated text types.
#[derive(Debug, thiserror::Error)]
pub enum TextError {
    /// The input text was empty or contained only whitespace
    #[error("Text cannot be empty")]
    Empty,

    /// The input was not exactly the required length
    #[error("Expected exactly {expected} characters, got {actual}")]
    WrongLength { expected: usize, actual: usize },
}

/// A string type that guarantees non-empty content.
///
/// This type wraps a `String` and ensures it contains at least one non-whitespace character.
/// The input is automatically trimmed of leading and trailing whitespace during construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NonEmptyText(String);

impl NonEmptyText {
    /// Creates a new `NonEmptyText` from the given input.
    ///
    /// The input is trimmed of leading and trailing whitespace. If the trimmed
    /// result is empty, an error is returned.
    ///
    /// # Errors
    ///
    /// Returns `TextError::Empty` if the trimmed input is empty.
    pub fn new(input: impl AsRef<str>) -> Result<Self, TextError> {
        let trimmed = input.as_ref().trim();
        if trimmed.is_empty() {
            return Err(TextError::Empty);
        }
        Ok(Self(trimmed.to_owned()))
    }

    /// Returns the inner string as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for NonEmptyText {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl AsRef<str> for NonEmptyText {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl serde::Serialize for NonEmptyText {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.0)
    }
}

impl<'de> serde::Deserialize<'de> for NonEmptyText {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        NonEmptyText::new(&s).map_err(serde::de::Error::custom)
    }
}

/// A practitioner or patient login identifier: exactly ten characters.
///
/// The sign-in form accepts an ID only when it is exactly ten characters
/// long; this type makes that rule a construction-time guarantee. No
/// character-class restriction is applied (the upstream identity system
/// issues the IDs; this crate only checks the length contract).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TenDigitId(String);

impl TenDigitId {
    /// Required length of a login identifier.
    pub const LENGTH: usize = 10;

    /// Creates a new `TenDigitId` from the given input.
    ///
    /// # Errors
    ///
    /// Returns `TextError::WrongLength` if the input is not exactly ten
    /// characters long.
    pub fn new(input: impl AsRef<str>) -> Result<Self, TextError> {
        let s = input.as_ref();
        let actual = s.chars().count();
        if actual != Self::LENGTH {
            return Err(TextError::WrongLength {
                expected: Self::LENGTH,
                actual,
            });
        }
        Ok(Self(s.to_owned()))
    }

    /// Returns the inner string as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for TenDigitId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl AsRef<str> for TenDigitId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl serde::Serialize for TenDigitId {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.0)
    }
}

impl<'de> serde::Deserialize<'de> for TenDigitId {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        TenDigitId::new(&s).map_err(serde::de::Error::custom)
    }
}
