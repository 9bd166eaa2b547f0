//! The composite key's equality-and-ordering contract, example by example.

use std::cmp::Ordering;
use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};

use strix::OwlKey;

fn hash_of(key: &OwlKey) -> u64 {
    let mut hasher = DefaultHasher::new();
    key.hash(&mut hasher);
    hasher.finish()
}

#[test]
fn equality_requires_both_fields() {
    let a = OwlKey::new("Луна", "Полярна сова");
    assert_eq!(a, OwlKey::new("Луна", "Полярна сова"));
    assert_ne!(a, OwlKey::new("Луна", "Сипуха"));
    assert_ne!(a, OwlKey::new("Кір", "Полярна сова"));
    assert_ne!(a, OwlKey::nickname_only("Луна"));
}

#[test]
fn absent_fields_compare_equal_only_to_absent() {
    let absent = OwlKey::nickname_only("Кір");
    assert_eq!(absent, OwlKey::nickname_only("Кір"));
    assert_eq!(absent.cmp(&OwlKey::nickname_only("Кір")), Ordering::Equal);
}

#[test]
fn equal_keys_hash_equal() {
    let a = OwlKey::new("Муся", "Сова білолиця");
    let b = OwlKey::new("Муся", "Сова білолиця");
    assert_eq!(hash_of(&a), hash_of(&b));

    let c = OwlKey::nickname_only("Муся");
    let d = OwlKey::nickname_only("Муся");
    assert_eq!(hash_of(&c), hash_of(&d));
}

#[test]
fn order_is_descending_on_both_fields() {
    // "Чіпо" > "Барсик", so "Чіпо" sorts first under the descending rule.
    let mut keys = vec![
        OwlKey::new("Барсик", "Сова сіра"),
        OwlKey::new("Чіпо", "Сичик-хатник"),
        OwlKey::new("Барсик", "Сичик-горобець"),
    ];
    keys.sort();
    assert_eq!(
        keys,
        [
            OwlKey::new("Чіпо", "Сичик-хатник"),
            OwlKey::new("Барсик", "Сова сіра"),
            OwlKey::new("Барсик", "Сичик-горобець"),
        ]
    );
}

#[test]
fn absent_field_sorts_after_any_present_value() {
    let mut keys = vec![
        OwlKey::nickname_only("Боні"),
        OwlKey::new("Боні", "Сипуха"),
        OwlKey::new("Боні", "Сова яструбина"),
    ];
    keys.sort();
    assert_eq!(
        keys,
        [
            OwlKey::new("Боні", "Сова яструбина"),
            OwlKey::new("Боні", "Сипуха"),
            OwlKey::nickname_only("Боні"),
        ]
    );
}

#[test]
fn comparison_with_absent_fields_never_panics() {
    let fully_absent = OwlKey {
        nickname: None,
        species: None,
    };
    let present = OwlKey::new("Кір", "Сова вухата");
    assert_eq!(fully_absent.cmp(&present), Ordering::Greater);
    assert_eq!(present.cmp(&fully_absent), Ordering::Less);
    assert_eq!(fully_absent.cmp(&fully_absent.clone()), Ordering::Equal);
}
