//! The value-projection search contract over arbitrary datasets: every
//! present value is findable, absent values never are, and bulk removal
//! by value removes exactly the matching count.

use proptest::prelude::*;
use strix::{find_by_projection, HashRegistry, KeyedStore, OwlKey, Registration};

fn owner_strategy() -> impl Strategy<Value = String> {
    prop::string::string_regex("[a-z]{1,5}").unwrap()
}

fn registrations_strategy() -> impl Strategy<Value = Vec<Registration>> {
    prop::collection::vec(
        (
            prop::string::string_regex("[a-z]{1,8}").unwrap(),
            prop::string::string_regex("[a-z]{1,8}").unwrap(),
            owner_strategy(),
        ),
        0..15,
    )
    .prop_map(|triples| {
        triples
            .into_iter()
            .map(|(nickname, species, owner)| {
                Registration::new(OwlKey::new(nickname, species), owner)
            })
            .collect()
    })
}

#[test]
fn sample_dataset_probes() {
    let registry = HashRegistry::from_registrations(crate::common::sample_registrations());
    assert!(registry.find_by_owner("Олена").is_some());
    assert!(registry.find_by_owner("Unknown").is_none());
}

proptest! {
    #[test]
    fn every_present_value_is_found(registrations in registrations_strategy()) {
        for registration in &registrations {
            let hit = find_by_projection(
                &registrations,
                |r: &Registration| r.owner.as_str(),
                registration.owner.as_str(),
            );
            let hit = hit.expect("present value must be found");
            prop_assert_eq!(&hit.owner, &registration.owner);
        }
    }

    #[test]
    fn absent_values_are_never_found(registrations in registrations_strategy()) {
        // "Unknown" cannot be generated: owners are lowercase ASCII only.
        let hit = find_by_projection(
            &registrations,
            |r: &Registration| r.owner.as_str(),
            "Unknown",
        );
        prop_assert!(hit.is_none());
    }

    #[test]
    fn remove_all_by_owner_removes_exactly_the_matches(
        registrations in registrations_strategy(),
        probe in owner_strategy(),
    ) {
        let mut registry = HashRegistry::from_registrations(registrations.clone());
        // Duplicate keys collapse on insertion, so count matches against
        // the registry's own view of its entries.
        let expected = registry
            .entries()
            .iter()
            .filter(|(_, owner)| *owner == probe)
            .count();
        let survivors = registry.len() - expected;

        prop_assert_eq!(registry.remove_all_by_owner(&probe), expected);
        prop_assert_eq!(registry.len(), survivors);
        prop_assert_eq!(registry.remove_all_by_owner(&probe), 0);
        prop_assert!(registry.entries().iter().all(|(_, owner)| *owner != probe));
    }

    #[test]
    fn search_agrees_with_linear_scan(registrations in registrations_strategy()) {
        let registry = HashRegistry::from_registrations(registrations);
        for (_, owner) in registry.entries() {
            prop_assert!(registry.find_by_owner(owner).is_some());
        }
    }
}
