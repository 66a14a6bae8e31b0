//! # Core Type Definitions
//!
//! This module contains the storage types shared by the registry and its
//! member handles, plus the error enum:
//! - Member definitions (`MemberDef`)
//! - Registry internals (`EnumTypeInner`)
//! - Error types (`OrdinalError`)
//!
//! ## Determinism Guarantees
//!
//! All types in this module:
//! - Use integer arithmetic only (no floating-point)
//! - Use `BTreeMap` for lookup tables (deterministic iteration)
//! - Are immutable once the owning registry is built

use std::collections::BTreeMap;
use thiserror::Error;

// =============================================================================
// MEMBER DEFINITION
// =============================================================================

/// One declared member of an enum type: a name and its backing value.
///
/// Definitions are created at build time and never mutated. Declaration
/// order is significant: `names()` and `values()` iterate in this order,
/// and the first declaration wins when backing values collide.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct MemberDef {
    /// The name under which the member was declared.
    pub(crate) name: String,
    /// The backing integer value.
    pub(crate) value: i64,
}

// =============================================================================
// REGISTRY INTERNALS
// =============================================================================

/// Shared, immutable storage behind an `EnumType`.
///
/// Member handles hold an `Arc` to this struct, which gives them identity
/// (two members belong to the same enum type iff they point at the same
/// internals) and access to the name tables for rendering.
#[derive(Debug)]
pub(crate) struct EnumTypeInner {
    /// The enum type's own name, used in diagnostics.
    pub(crate) name: String,
    /// Member definitions in declaration order.
    pub(crate) defs: Vec<MemberDef>,
    /// Normalized member name -> index into `defs`.
    pub(crate) by_name: BTreeMap<String, usize>,
    /// Backing value -> index into `defs`. First declaration wins on
    /// value collisions.
    pub(crate) by_value: BTreeMap<i64, usize>,
}

// =============================================================================
// ERROR TYPES
// =============================================================================

/// Errors that can occur when building or querying an enum type.
///
/// - No silent failures
/// - Use `Result<T, OrdinalError>` for fallible operations
/// - The registry never panics; all errors are recoverable
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum OrdinalError {
    /// `parse` was given a name with no matching registered member.
    #[error("unknown {enum_type} member: {name}")]
    UnknownMember {
        /// Name of the enum type the lookup ran against.
        enum_type: String,
        /// The name that failed to resolve.
        name: String,
    },

    /// Two declarations collide on the same (normalized) member name.
    #[error("duplicate {enum_type} member: {name}")]
    DuplicateMember {
        /// Name of the enum type being built.
        enum_type: String,
        /// The colliding member name, as declared the second time.
        name: String,
    },

    /// A declared member name is not an identifier-like token.
    #[error("invalid member name for {enum_type}: {name:?}")]
    InvalidMemberName {
        /// Name of the enum type being built.
        enum_type: String,
        /// The rejected name.
        name: String,
    },
}

// =============================================================================
// TESTS
// =============================================================================
