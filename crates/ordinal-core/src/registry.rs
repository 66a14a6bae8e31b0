//! # Enum Registry
//!
//! Per-type storage and lookup for enumerated constants.
//!
//! An [`EnumType`] is built exactly once, at application initialization,
//! through [`EnumTypeBuilder`]; after `build()` it is immutable and can be
//! shared freely across threads (cloning is an `Arc` bump). There is no
//! mutation path, so steady-state lookups need no locking.
//!
//! ```
//! use ordinal_core::EnumType;
//!
//! # fn main() -> Result<(), ordinal_core::OrdinalError> {
//! let color = EnumType::builder("Color")
//!     .member("RED")
//!     .member("GREEN")
//!     .member("BLUE")
//!     .build()?;
//!
//! let red = color.parse("red")?;
//! assert_eq!(red.to_i(), 0);
//! assert_eq!(red.to_string(), "RED");
//! assert_eq!(color.names(), ["RED", "GREEN", "BLUE"]);
//! # Ok(())
//! # }
//! ```

use crate::member::Member;
use crate::normalize::{is_identifier, normalized};
use crate::types::{EnumTypeInner, MemberDef, OrdinalError};
use std::collections::BTreeMap;
use std::fmt;
use std::sync::Arc;

// =============================================================================
// ENUM TYPE
// =============================================================================

/// A named, closed, ordered set of integer-backed constants.
///
/// Clones share the same underlying registry: members obtained from any
/// clone compare equal to members obtained from another.
#[derive(Debug, Clone)]
pub struct EnumType {
    inner: Arc<EnumTypeInner>,
}

impl EnumType {
    /// Start declaring a new enum type with the given name.
    #[must_use]
    pub fn builder(name: impl Into<String>) -> EnumTypeBuilder {
        EnumTypeBuilder {
            name: name.into(),
            declared: Vec::new(),
        }
    }

    /// The enum type's own name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.inner.name
    }

    /// Number of registered members.
    #[must_use]
    pub fn len(&self) -> usize {
        self.inner.defs.len()
    }

    /// Check whether the enum type has no members.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.inner.defs.is_empty()
    }

    /// All registered member names, in declaration order.
    #[must_use]
    pub fn names(&self) -> Vec<&str> {
        self.inner.defs.iter().map(|def| def.name.as_str()).collect()
    }

    /// All registered members, in declaration order.
    #[must_use]
    pub fn values(&self) -> Vec<Member> {
        self.inner
            .defs
            .iter()
            .map(|def| Member::new(Arc::clone(&self.inner), def.value))
            .collect()
    }

    /// Look up the member with the given name.
    ///
    /// The comparison is normalization-insensitive: `parse("red")` finds a
    /// member declared as `RED`, and `parse("my_name")` one declared as
    /// `MyName`. Fails with [`OrdinalError::UnknownMember`] when no member
    /// matches.
    pub fn parse(&self, name: &str) -> Result<Member, OrdinalError> {
        self.get(name).ok_or_else(|| OrdinalError::UnknownMember {
            enum_type: self.inner.name.clone(),
            name: name.to_string(),
        })
    }

    /// Total variant of [`EnumType::parse`]: `None` instead of an error
    /// for unknown names.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<Member> {
        self.inner
            .by_name
            .get(&normalized(name))
            .and_then(|&index| self.inner.defs.get(index))
            .map(|def| Member::new(Arc::clone(&self.inner), def.value))
    }

    /// Construct a member of this enum type from a raw backing value.
    ///
    /// Never fails; the value need not match any registered member. An
    /// unregistered value renders as its decimal form and has no name.
    #[must_use]
    pub fn from_value(&self, value: i64) -> Member {
        Member::new(Arc::clone(&self.inner), value)
    }

    /// Look up the registered member with the given backing value, or
    /// `None` if the value was never registered.
    ///
    /// When several members share a value, the first-declared one wins.
    #[must_use]
    pub fn member_for_value(&self, value: i64) -> Option<Member> {
        self.inner
            .by_value
            .get(&value)
            .map(|_| Member::new(Arc::clone(&self.inner), value))
    }
}

impl fmt::Display for EnumType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.inner.name)
    }
}

// =============================================================================
// BUILDER
// =============================================================================

/// Declares the members of an [`EnumType`], then validates and freezes
/// them with [`EnumTypeBuilder::build`].
///
/// Declarations are collected as-is; validation (identifier check,
/// duplicate detection) runs once at build time so declaration chains
/// stay infallible.
#[derive(Debug)]
pub struct EnumTypeBuilder {
    name: String,
    declared: Vec<MemberDef>,
}

impl EnumTypeBuilder {
    /// Declare a member with a defaulted backing value: the count of
    /// members already declared. Three bare declarations get 0, 1, 2.
    #[must_use]
    pub fn member(self, name: impl Into<String>) -> Self {
        let value = self.declared.len() as i64;
        self.member_with_value(name, value)
    }

    /// Declare a member with an explicit backing value.
    ///
    /// Values are unconstrained: duplicates and out-of-order values are
    /// permitted. Iteration order stays declaration order regardless.
    #[must_use]
    pub fn member_with_value(mut self, name: impl Into<String>, value: i64) -> Self {
        self.declared.push(MemberDef {
            name: name.into(),
            value,
        });
        self
    }

    /// Validate the declarations and freeze them into an [`EnumType`].
    ///
    /// Fails with [`OrdinalError::InvalidMemberName`] for names that are
    /// not identifier-like tokens, and [`OrdinalError::DuplicateMember`]
    /// when two declarations collide on the same normalized name.
    pub fn build(self) -> Result<EnumType, OrdinalError> {
        let mut by_name = BTreeMap::new();
        let mut by_value = BTreeMap::new();

        for (index, def) in self.declared.iter().enumerate() {
            if !is_identifier(&def.name) {
                return Err(OrdinalError::InvalidMemberName {
                    enum_type: self.name,
                    name: def.name.clone(),
                });
            }
            let key = normalized(&def.name);
            if by_name.insert(key, index).is_some() {
                return Err(OrdinalError::DuplicateMember {
                    enum_type: self.name,
                    name: def.name.clone(),
                });
            }
            // First declaration wins on value collisions.
            by_value.entry(def.value).or_insert(index);
        }

        Ok(EnumType {
            inner: Arc::new(EnumTypeInner {
                name: self.name,
                defs: self.declared,
                by_name,
                by_value,
            }),
        })
    }
}

// =============================================================================
// TESTS
// =============================================================================
