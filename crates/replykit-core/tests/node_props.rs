// Rust guideline compliant 2026-10-12

//! Property-based tests for response nodes.
//!
//! These tests validate dedup, ordering, aggregation and idempotence across
//! arbitrary registration sequences.

use proptest::prelude::*;
use replykit_core::{Entry, Preset, ResponseNode};
use std::collections::HashSet;

/// A single registration call.
#[derive(Debug, Clone)]
enum Registration {
    Error(Entry),
    Info(Entry),
    Preset(Preset, Option<String>),
}

fn apply(response: &mut ResponseNode, registration: &Registration) {
    match registration {
        Registration::Error(entry) => {
            response.error(entry.clone());
        }
        Registration::Info(entry) => {
            response.information(entry.clone());
        }
        Registration::Preset(preset, description) => {
            response.error_preset(*preset, description.as_deref(), None);
        }
    }
}

/// Generates entries from small alphabets so collisions are common.
fn arb_entry() -> impl Strategy<Value = Entry> {
    (
        prop::option::of(prop_oneof![Just(400u16), Just(404), Just(409), Just(500), Just(503)]),
        prop::option::of(prop::string::string_regex("C[1-3]").unwrap()),
        prop::string::string_regex("d[1-5]").unwrap(),
    )
        .prop_map(|(status, code, description)| Entry {
            status,
            code,
            description: Some(description),
            metadata: None,
        })
}

fn arb_preset() -> impl Strategy<Value = Preset> {
    prop::sample::select(Preset::ALL.to_vec())
}

fn arb_registration() -> impl Strategy<Value = Registration> {
    prop_oneof![
        arb_entry().prop_map(Registration::Error),
        arb_entry().prop_map(Registration::Info),
        (
            arb_preset(),
            prop::option::of(prop::string::string_regex("d[1-5]").unwrap())
        )
            .prop_map(|(preset, description)| Registration::Preset(preset, description)),
    ]
}

proptest! {
    /// Replaying a registration sequence never changes the serialized envelope.
    #[test]
    fn prop_registration_is_idempotent(
        registrations in prop::collection::vec(arb_registration(), 0..30)
    ) {
        let mut once = ResponseNode::new();
        for registration in &registrations {
            apply(&mut once, registration);
        }

        let mut twice = once.clone();
        for registration in &registrations {
            apply(&mut twice, registration);
        }

        prop_assert_eq!(once.to_json().unwrap(), twice.to_json().unwrap());
    }

    /// Applying each registration twice in a row equals applying it once.
    #[test]
    fn prop_immediate_repeat_is_noop(
        registrations in prop::collection::vec(arb_registration(), 0..30)
    ) {
        let mut once = ResponseNode::new();
        let mut doubled = ResponseNode::new();
        for registration in &registrations {
            apply(&mut once, registration);
            apply(&mut doubled, registration);
            apply(&mut doubled, registration);
        }
        prop_assert_eq!(once, doubled);
    }

    /// Sibling descriptions are unique in both lists; info codes are unique.
    #[test]
    fn prop_siblings_are_deduplicated(
        registrations in prop::collection::vec(arb_registration(), 0..40)
    ) {
        let mut response = ResponseNode::new();
        for registration in &registrations {
            apply(&mut response, registration);
        }

        for list in [response.errors(), response.info()] {
            let descriptions: Vec<_> = list.iter().filter_map(|n| n.description()).collect();
            let unique: HashSet<_> = descriptions.iter().collect();
            prop_assert_eq!(unique.len(), descriptions.len());
        }

        let codes: Vec<_> = response.info().iter().filter_map(|n| n.code()).collect();
        let unique: HashSet<_> = codes.iter().collect();
        prop_assert_eq!(unique.len(), codes.len());
    }

    /// Without presets, error codes are unique too.
    #[test]
    fn prop_error_codes_unique_without_presets(
        entries in prop::collection::vec(arb_entry(), 0..40)
    ) {
        let mut response = ResponseNode::new();
        for entry in entries {
            response.error(entry);
        }
        let codes: Vec<_> = response.errors().iter().filter_map(|n| n.code()).collect();
        let unique: HashSet<_> = codes.iter().collect();
        prop_assert_eq!(unique.len(), codes.len());
    }

    /// The aggregate status is the maximum immediate error status, or 200.
    #[test]
    fn prop_status_is_max_of_errors(
        registrations in prop::collection::vec(arb_registration(), 0..30)
    ) {
        let mut response = ResponseNode::new();
        for registration in &registrations {
            apply(&mut response, registration);
        }

        let expected = response
            .errors()
            .iter()
            .filter_map(|error| error.status())
            .max()
            .unwrap_or(200);
        prop_assert_eq!(response.status_code(), expected);
        prop_assert!(response.errors().iter().all(|error| error.status().is_some()));
    }

    /// Entries keep the order in which they were first registered.
    #[test]
    fn prop_insertion_order_is_preserved(
        entries in prop::collection::vec(arb_entry(), 0..30)
    ) {
        let mut response = ResponseNode::new();
        let mut first_seen = Vec::new();
        for entry in entries {
            let before = response.errors().len();
            response.error(entry.clone());
            if response.errors().len() > before {
                first_seen.push(entry.description.clone());
            }
        }
        let stored: Vec<_> = response
            .errors()
            .iter()
            .map(|error| error.description().map(str::to_string))
            .collect();
        prop_assert_eq!(stored, first_seen);
    }
}
