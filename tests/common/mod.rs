//! Shared builders for integration and property tests.

use strix::{OwlKey, Registration};

/// The canonical ten-owl dataset, in insertion order.
pub fn sample_registrations() -> Vec<Registration> {
    vec![
        Registration::new(OwlKey::new("Тум", "Сова вухата"), "Андрій"),
        Registration::new(OwlKey::new("Луна", "Полярна сова"), "Ірина"),
        Registration::new(OwlKey::new("Барсик", "Сова сіра"), "Олена"),
        Registration::new(OwlKey::new("Боні", "Сипуха"), "Олена"),
        Registration::new(OwlKey::new("Тайсон", "Сова болотяна"), "Ірина"),
        Registration::new(OwlKey::new("Барсик", "Сичик-горобець"), "Андрій"),
        Registration::new(OwlKey::new("Ґуфі", "Сова болотяна"), "Тимофій"),
        Registration::new(OwlKey::new("Боні", "Сова яструбина"), "Поліна"),
        Registration::new(OwlKey::new("Муся", "Сова білолиця"), "Стефанія"),
        Registration::new(OwlKey::new("Чіпо", "Сичик-хатник"), "Ярослав"),
    ]
}
