//! # Enum Members
//!
//! A [`Member`] is a cheap handle to one constant of an enum type: a shared
//! reference to the owning registry plus the backing integer value.
//!
//! Members normally come out of the registry (`parse`, `get`, `values`) and
//! carry a registered value. A member may also be constructed out of band
//! from a raw integer via `EnumType::from_value`; such a member still
//! renders and compares, falling back to its decimal value where a name
//! would be used.

use crate::types::EnumTypeInner;
use serde::{Serialize, Serializer};
use std::cmp::Ordering;
use std::fmt;
use std::sync::Arc;

/// One constant of an enum type.
///
/// Cloning a member is cheap (an `Arc` bump plus an integer copy).
///
/// ## Equality and ordering
///
/// Two members are equal iff they belong to the same enum type (identity
/// of the shared registry) and carry the same backing value. Ordering
/// compares backing values only, so within one enum type it is consistent
/// with equality; ordering across distinct enum types compares raw values.
#[derive(Clone)]
pub struct Member {
    owner: Arc<EnumTypeInner>,
    value: i64,
}

impl Member {
    pub(crate) fn new(owner: Arc<EnumTypeInner>, value: i64) -> Self {
        Self { owner, value }
    }

    /// The backing integer value.
    #[must_use]
    pub fn value(&self) -> i64 {
        self.value
    }

    /// The backing integer value. Alias for [`Member::value`], kept for
    /// symmetry with the string rendering.
    #[must_use]
    pub fn to_i(&self) -> i64 {
        self.value
    }

    /// The name of the owning enum type.
    #[must_use]
    pub fn enum_type(&self) -> &str {
        &self.owner.name
    }

    /// The registered name for this member's current value, or `None` if
    /// the value matches no registered member (constructed out of band).
    ///
    /// Resolution is by value, not identity: when several members share a
    /// backing value, the first-declared name wins.
    #[must_use]
    pub fn name(&self) -> Option<&str> {
        self.owner
            .by_value
            .get(&self.value)
            .and_then(|&index| self.owner.defs.get(index))
            .map(|def| def.name.as_str())
    }

    /// Predicate form of equality: `member.is(&Color::parse("red")?)`.
    ///
    /// Replaces the per-member `red?` accessors of dynamic languages with
    /// a single comparison.
    #[must_use]
    pub fn is(&self, other: &Member) -> bool {
        self == other
    }

    fn same_owner(&self, other: &Member) -> bool {
        Arc::ptr_eq(&self.owner, &other.owner)
    }
}

impl PartialEq for Member {
    fn eq(&self, other: &Self) -> bool {
        self.same_owner(other) && self.value == other.value
    }
}

impl Eq for Member {}

impl PartialOrd for Member {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Member {
    /// Total ordering by backing value: `a.cmp(b) == a.value().cmp(&b.value())`.
    fn cmp(&self, other: &Self) -> Ordering {
        self.value.cmp(&other.value)
    }
}

impl std::hash::Hash for Member {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.value.hash(state);
    }
}

impl fmt::Display for Member {
    /// Renders the registered name, or the decimal value when no
    /// registered member matches the current value.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.name() {
            Some(name) => f.write_str(name),
            None => write!(f, "{}", self.value),
        }
    }
}

impl fmt::Debug for Member {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Member")
            .field("enum_type", &self.owner.name)
            .field("name", &self.name())
            .field("value", &self.value)
            .finish()
    }
}

impl Serialize for Member {
    /// Serializes as the display string: the registered name, or the
    /// decimal value for out-of-band members. Plain string conversion
    /// only; there is deliberately no `Deserialize`, since resolving a
    /// name back to a member needs the owning enum type for context.
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

// =============================================================================
// TESTS
// =============================================================================
