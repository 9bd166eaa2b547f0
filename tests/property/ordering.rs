//! Ordering laws for the composite key: strict total order, consistency
//! with equality and hashing, and the descending iteration property.

use std::cmp::Ordering;
use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};

use proptest::prelude::*;
use strix::OwlKey;

fn field_strategy() -> impl Strategy<Value = Option<String>> {
    prop::option::weighted(0.8, prop::string::string_regex("[а-яa-z]{1,6}").unwrap())
}

fn key_strategy() -> impl Strategy<Value = OwlKey> {
    (field_strategy(), field_strategy()).prop_map(|(nickname, species)| OwlKey {
        nickname,
        species,
    })
}

fn hash_of(key: &OwlKey) -> u64 {
    let mut hasher = DefaultHasher::new();
    key.hash(&mut hasher);
    hasher.finish()
}

proptest! {
    #[test]
    fn equality_implies_zero_comparison_and_equal_hash(key in key_strategy()) {
        let twin = key.clone();
        prop_assert_eq!(key.cmp(&twin), Ordering::Equal);
        prop_assert_eq!(hash_of(&key), hash_of(&twin));
    }

    #[test]
    fn comparison_is_antisymmetric(a in key_strategy(), b in key_strategy()) {
        prop_assert_eq!(a.cmp(&b), b.cmp(&a).reverse());
        prop_assert_eq!(a.cmp(&b) == Ordering::Equal, a == b);
    }

    #[test]
    fn comparison_is_transitive(
        a in key_strategy(),
        b in key_strategy(),
        c in key_strategy(),
    ) {
        let mut keys = [a, b, c];
        keys.sort();
        prop_assert!(keys[0] <= keys[1] && keys[1] <= keys[2]);
        prop_assert!(keys[0] <= keys[2]);
    }

    #[test]
    fn sorted_keys_are_non_increasing_on_nickname(
        mut keys in prop::collection::vec(key_strategy(), 0..20),
    ) {
        keys.sort();
        for window in keys.windows(2) {
            match (&window[0].nickname, &window[1].nickname) {
                // Present nicknames run descending; an absent one only ever
                // appears at the tail of the run.
                (Some(first), Some(second)) => prop_assert!(first >= second),
                (None, Some(_)) => prop_assert!(false, "absent nickname sorted before present"),
                _ => {}
            }
        }
    }

    #[test]
    fn nickname_ties_are_non_increasing_on_species(
        nickname in prop::string::string_regex("[а-я]{1,4}").unwrap(),
        mut species in prop::collection::vec(field_strategy(), 2..10),
    ) {
        let mut keys: Vec<OwlKey> = species
            .drain(..)
            .map(|species| OwlKey { nickname: Some(nickname.clone()), species })
            .collect();
        keys.sort();
        for window in keys.windows(2) {
            match (&window[0].species, &window[1].species) {
                (Some(first), Some(second)) => prop_assert!(first >= second),
                (None, Some(_)) => prop_assert!(false, "absent species sorted before present"),
                _ => {}
            }
        }
    }
}
