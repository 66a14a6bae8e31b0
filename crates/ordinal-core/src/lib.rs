//! # ordinal-core
//!
//! Named, ordered, integer-backed enumerated constants - THE LOGIC.
//!
//! This crate implements the enumeration substrate for Ordinal: a registry
//! that lets the host application declare a fixed, ordered set of named
//! constants at initialization time, then look them up by name, compare
//! them by backing value, enumerate them, and render them as strings.
//!
//! ## Architectural Constraints
//!
//! - Registries are built once, at init time, and immutable afterwards;
//!   there is no mutation path and therefore no locking
//! - Deterministic: `BTreeMap` lookup tables, integer arithmetic only
//! - Pure Rust: no async, no I/O, no network dependencies
//! - No panics in library code; fallible operations return
//!   `Result<T, OrdinalError>`
//!
//! ## Example
//!
//! ```
//! use ordinal_core::EnumType;
//!
//! # fn main() -> Result<(), ordinal_core::OrdinalError> {
//! let priority = EnumType::builder("Priority")
//!     .member_with_value("LOW", 10)
//!     .member_with_value("HIGH", 20)
//!     .build()?;
//!
//! assert!(priority.parse("low")? < priority.parse("high")?);
//! assert_eq!(priority.get("medium"), None);
//! # Ok(())
//! # }
//! ```

// =============================================================================
// MODULES
// =============================================================================

pub mod member;
pub mod normalize;
pub mod registry;
pub mod types;

// =============================================================================
// RE-EXPORTS
// =============================================================================

pub use member::Member;
pub use registry::{EnumType, EnumTypeBuilder};
pub use types::OrdinalError;
