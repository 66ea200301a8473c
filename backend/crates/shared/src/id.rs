//! Common ID Types
//!
//! Type-safe wrappers for the numeric identifiers assigned by storage.
//! A user ID and an app ID are both `i64` on the wire, but must never be
//! swapped inside the service.

use std::fmt;
use std::hash::{Hash, Hasher};
use std::marker::PhantomData;
use std::str::FromStr;

use thiserror::Error;

/// Generic typed numeric ID
///
/// Usage:
/// ```
/// use kernel::id::Id;
/// pub struct UserMarker;
/// type UserId = Id<UserMarker>;
///
/// let id = UserId::new(42);
/// assert_eq!(id.value(), 42);
/// ```
pub struct Id<T> {
    value: i64,
    _marker: PhantomData<fn() -> T>,
}

/// Failure to read an ID from its decimal string form
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid identifier: {0:?}")]
pub struct IdParseError(String);

impl<T> Id<T> {
    pub const fn new(value: i64) -> Self {
        Self {
            value,
            _marker: PhantomData,
        }
    }

    pub const fn value(&self) -> i64 {
        self.value
    }

    /// Storage-assigned IDs start at 1
    pub const fn is_assigned(&self) -> bool {
        self.value > 0
    }
}

// Manual impls: derives would demand the same traits of the marker type.

impl<T> Clone for Id<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for Id<T> {}

impl<T> PartialEq for Id<T> {
    fn eq(&self, other: &Self) -> bool {
        self.value == other.value
    }
}

impl<T> Eq for Id<T> {}

impl<T> Hash for Id<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.value.hash(state);
    }
}

impl<T> fmt::Debug for Id<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Id({})", self.value)
    }
}

impl<T> fmt::Display for Id<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.value)
    }
}

impl<T> From<i64> for Id<T> {
    fn from(value: i64) -> Self {
        Self::new(value)
    }
}

impl<T> From<Id<T>> for i64 {
    fn from(id: Id<T>) -> Self {
        id.value
    }
}

impl<T> FromStr for Id<T> {
    type Err = IdParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim()
            .parse::<i64>()
            .map(Self::new)
            .map_err(|_| IdParseError(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Apple;
    struct Pear;

    #[test]
    fn test_id_type_safety() {
        let apple: Id<Apple> = Id::new(7);
        let pear: Id<Pear> = Id::new(7);

        // Same value, different types; only the raw value can be compared
        assert_eq!(apple.value(), pear.value());
    }

    #[test]
    fn test_display_and_parse() {
        let id: Id<Apple> = Id::new(1234);
        assert_eq!(id.to_string(), "1234");

        let parsed: Id<Apple> = "1234".parse().unwrap();
        assert_eq!(parsed, id);
        assert!("12a".parse::<Id<Apple>>().is_err());
    }

    #[test]
    fn test_is_assigned() {
        assert!(Id::<Apple>::new(1).is_assigned());
        assert!(!Id::<Apple>::new(0).is_assigned());
        assert!(!Id::<Apple>::new(-3).is_assigned());
    }
}
