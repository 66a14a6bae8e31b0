//! # Property-Based Tests
//!
//! Verification of the registry invariants with proptest:
//! lookup round-trips, default-value sequencing, declaration-order
//! iteration, ordering consistency, and normalization idempotence.

use ordinal_core::normalize::normalized;
use ordinal_core::{EnumType, OrdinalError};
use proptest::collection::{btree_set, vec};
use proptest::prelude::*;

/// Lowercase snake-case identifiers normalize to themselves, so a set of
/// them is collision-free by construction.
fn name_set() -> impl Strategy<Value = Vec<String>> {
    btree_set("[a-z][a-z0-9_]{0,8}", 1..20).prop_map(|set| set.into_iter().collect())
}

fn build(names: &[String]) -> EnumType {
    let mut builder = EnumType::builder("Generated");
    for name in names {
        builder = builder.member(name.clone());
    }
    builder.build().expect("collision-free build")
}

// =============================================================================
// PROPERTY TESTS
// =============================================================================

proptest! {
    /// Every registered name parses back to the member at its
    /// declaration index, through both `parse` and `get`.
    #[test]
    fn parse_round_trips_registered_names(names in name_set()) {
        let enum_type = build(&names);
        let values = enum_type.values();

        for (index, name) in names.iter().enumerate() {
            let parsed = enum_type.parse(name).expect("registered name parses");
            prop_assert_eq!(&parsed, &values[index]);
            let got = enum_type.get(name);
            prop_assert_eq!(got.as_ref(), Some(&parsed));
            prop_assert_eq!(parsed.to_string(), name.clone());
        }
    }

    /// Defaulted values are the declaration indices: 0, 1, 2, ...
    #[test]
    fn default_values_count_up_from_zero(names in name_set()) {
        let enum_type = build(&names);

        for (index, member) in enum_type.values().into_iter().enumerate() {
            prop_assert_eq!(member.value(), index as i64);
        }
    }

    /// `names()` and `values()` agree on length and declaration order.
    #[test]
    fn names_and_values_stay_aligned(names in name_set()) {
        let enum_type = build(&names);

        prop_assert_eq!(enum_type.names().len(), enum_type.values().len());
        prop_assert_eq!(enum_type.len(), names.len());
        let reported: Vec<String> =
            enum_type.names().into_iter().map(String::from).collect();
        prop_assert_eq!(reported, names);
    }

    /// Unregistered names fail `parse` and return `None` from `get`.
    #[test]
    fn unknown_names_fail_loudly(names in name_set(), probe in "[a-z][a-z0-9_]{0,8}") {
        prop_assume!(!names.contains(&probe));
        let enum_type = build(&names);

        prop_assert!(enum_type.get(&probe).is_none());
        let err = enum_type.parse(&probe).expect_err("unknown name");
        prop_assert_eq!(err, OrdinalError::UnknownMember {
            enum_type: "Generated".to_string(),
            name: probe,
        });
    }

    /// Member ordering agrees with backing-value ordering, for arbitrary
    /// explicit values including duplicates.
    #[test]
    fn ordering_matches_value_ordering(values in vec(-1000i64..1000, 2..20)) {
        let mut builder = EnumType::builder("Ordered");
        for (index, value) in values.iter().enumerate() {
            builder = builder.member_with_value(format!("m{index}"), *value);
        }
        let enum_type = builder.build().expect("unique names");
        let members = enum_type.values();

        for a in &members {
            for b in &members {
                prop_assert_eq!(a.cmp(b), a.value().cmp(&b.value()));
            }
        }
    }

    /// Values with no registered member render as their decimal form.
    #[test]
    fn unregistered_values_render_decimal(names in name_set(), raw in 1000i64..2000) {
        let enum_type = build(&names);

        // Defaulted values stay below 1000, so `raw` is never registered.
        let stray = enum_type.from_value(raw);
        prop_assert!(stray.name().is_none());
        prop_assert_eq!(stray.to_string(), raw.to_string());
        prop_assert!(enum_type.member_for_value(raw).is_none());
    }

    /// Normalization is idempotent over identifier-ish input.
    #[test]
    fn normalization_is_idempotent(name in "[A-Za-z0-9_\\- ]{0,24}") {
        let once = normalized(&name);
        prop_assert_eq!(normalized(&once), once.clone());
    }

    /// A declared name and its normalized form resolve identically.
    #[test]
    fn normalized_query_finds_declared_name(names in name_set()) {
        let enum_type = build(&names);

        for name in &names {
            let direct = enum_type.parse(name).expect("direct");
            let via_normalized = enum_type.parse(&normalized(name)).expect("normalized");
            prop_assert_eq!(direct, via_normalized);
        }
    }
}
