//! Property-based tests for the parse/format round-trip law.

use armid::{
    format, parse_as, validate, BatchPoolId, Casing, DatabricksWorkspaceId, DnsRecordSetId,
    IdError, Registry, ResourceGroupId, SqlDatabaseId, DNS_RECORD_TYPES,
};
use proptest::prelude::*;

/// Names as users write them: anything but the `/` delimiter.
fn arb_name() -> impl Strategy<Value = String> {
    "[A-Za-z0-9][A-Za-z0-9._() -]{0,39}"
}

fn arb_subscription() -> impl Strategy<Value = String> {
    "[0-9a-f]{8}-[0-9a-f]{4}-[0-9a-f]{4}-[0-9a-f]{4}-[0-9a-f]{12}"
}

fn arb_workspace() -> impl Strategy<Value = DatabricksWorkspaceId> {
    (arb_subscription(), arb_name(), arb_name())
        .prop_map(|(sub, rg, name)| DatabricksWorkspaceId::new(sub, rg, name))
}

fn arb_database() -> impl Strategy<Value = SqlDatabaseId> {
    (arb_subscription(), arb_name(), arb_name(), arb_name())
        .prop_map(|(sub, rg, server, db)| SqlDatabaseId::new(sub, rg, server, db))
}

fn arb_record_set() -> impl Strategy<Value = DnsRecordSetId> {
    (
        arb_subscription(),
        arb_name(),
        arb_name(),
        prop::sample::select(DNS_RECORD_TYPES),
        arb_name(),
    )
        .prop_map(|(sub, rg, zone, record_type, name)| {
            DnsRecordSetId::new(sub, rg, zone, record_type, name)
        })
}

/// Randomly flips the ASCII case of each character.
fn scramble_case(input: &str, flips: &[bool]) -> String {
    input
        .chars()
        .zip(flips.iter().cycle())
        .map(|(c, flip)| {
            if *flip {
                if c.is_ascii_lowercase() {
                    c.to_ascii_uppercase()
                } else {
                    c.to_ascii_lowercase()
                }
            } else {
                c
            }
        })
        .collect()
}

proptest! {
    #[test]
    fn workspace_roundtrip(id in arb_workspace()) {
        let formatted = id.id();
        let parsed = DatabricksWorkspaceId::parse(&formatted).unwrap();
        prop_assert_eq!(&parsed, &id);
        prop_assert_eq!(parsed.id(), formatted);
    }

    #[test]
    fn database_roundtrip_both_casings(id in arb_database()) {
        let formatted = format(&id);
        for casing in [Casing::Strict, Casing::Insensitive] {
            let parsed: SqlDatabaseId = parse_as(&formatted, casing).unwrap();
            prop_assert_eq!(&parsed, &id);
        }
    }

    #[test]
    fn record_set_roundtrip(id in arb_record_set()) {
        let parsed = DnsRecordSetId::parse(&id.id()).unwrap();
        prop_assert_eq!(parsed, id);
    }

    #[test]
    fn insensitive_accepts_any_static_casing(
        id in arb_workspace(),
        flips in prop::collection::vec(any::<bool>(), 1..16),
    ) {
        // Scramble only the fixed segments so user values stay intact.
        let scrambled = format!(
            "/{}/{}/{}/{}/{}/{}/{}/{}",
            scramble_case("subscriptions", &flips),
            id.subscription_id,
            scramble_case("resourceGroups", &flips),
            id.resource_group_name,
            scramble_case("providers", &flips),
            scramble_case("Microsoft.Databricks", &flips),
            scramble_case("workspaces", &flips),
            id.workspace_name,
        );
        let parsed = DatabricksWorkspaceId::parse_insensitively(&scrambled).unwrap();
        prop_assert_eq!(parsed.id(), id.id());
        prop_assert_eq!(Registry::builtin().recase(&scrambled), id.id());
    }

    #[test]
    fn missing_segment_always_fails(id in arb_database(), drop in 0usize..10) {
        let formatted = id.id();
        let mut tokens: Vec<&str> = formatted.split('/').skip(1).collect();
        tokens.remove(drop);
        let truncated = format!("/{}", tokens.join("/"));
        prop_assert!(SqlDatabaseId::parse(&truncated).is_err());
    }

    #[test]
    fn validator_agrees_with_parser(input in "(/[A-Za-z0-9.]{0,12}){0,12}") {
        let parsed = ResourceGroupId::parse(&input);
        let (_, errors) = validate::<ResourceGroupId>(&input, "id");
        prop_assert_eq!(parsed.is_ok(), errors.is_empty());

        let parsed = BatchPoolId::parse(&input);
        let (_, errors) = validate::<BatchPoolId>(&input, "id");
        prop_assert_eq!(parsed.is_ok(), errors.is_empty());
    }

    #[test]
    fn parse_never_panics(input in ".{0,200}") {
        let result = DatabricksWorkspaceId::parse(&input);
        if input.is_empty() {
            prop_assert_eq!(result, Err(IdError::EmptyInput));
        }
    }
}
