//! GearSource - Stats from equipped items

use crate::config::Catalogs;
use crate::source::StatSource;
use crate::stat_block::StatAccumulator;
use crate::types::{is_bow_class, EquipmentSlot};

/// Stats from an item equipped in one slot
pub struct GearSource {
    /// Which slot this item is in
    pub slot: EquipmentSlot,
    /// Catalog name of the equipped item
    pub item: String,
}

impl GearSource {
    /// Create a new gear source
    pub fn new(slot: EquipmentSlot, item: impl Into<String>) -> Self {
        GearSource {
            slot,
            item: item.into(),
        }
    }
}

impl StatSource for GearSource {
    fn id(&self) -> &str {
        &self.item
    }

    fn priority(&self) -> i32 {
        0 // Gear applies at default priority
    }

    fn apply(&self, catalogs: &Catalogs, stats: &mut StatAccumulator) {
        match self.slot {
            EquipmentSlot::Weapon => {
                stats.weapon_damage = stats
                    .weapon_damage
                    .saturating_add(catalogs.weapon_damage(&self.item));
                stats.bow_equipped = is_bow_class(&self.item);
            }
            // Only counted if a bow turns out to be equipped
            EquipmentSlot::Arrow => {
                stats.arrow_damage = stats
                    .arrow_damage
                    .saturating_add(catalogs.arrow_damage(&self.item));
            }
            armor_slot => {
                stats.armor_flat = stats
                    .armor_flat
                    .saturating_add(catalogs.armor_value(armor_slot, &self.item));
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::parse_catalogs;

    fn catalogs() -> Catalogs {
        parse_catalogs(
            r#"
[armor.helmet]
"Leather Helmet 1" = 2

[weapons]
"Iron Sword 1" = 55
"Crude Bow 1" = 22

[arrows]
"Wood Arrow" = 22
"#,
        )
        .unwrap()
    }

    #[test]
    fn test_gear_source_id() {
        let source = GearSource::new(EquipmentSlot::Weapon, "Iron Sword 1");
        assert_eq!(source.id(), "Iron Sword 1");
        assert_eq!(source.priority(), 0);
    }

    #[test]
    fn test_armor_piece() {
        let mut acc = StatAccumulator::new();
        GearSource::new(EquipmentSlot::Helmet, "Leather Helmet 1").apply(&catalogs(), &mut acc);
        assert_eq!(acc.armor_flat, 2);
        assert_eq!(acc.weapon_damage, 0);
    }

    #[test]
    fn test_weapon_marks_bow() {
        let mut acc = StatAccumulator::new();
        GearSource::new(EquipmentSlot::Weapon, "Crude Bow 1").apply(&catalogs(), &mut acc);
        assert_eq!(acc.weapon_damage, 22);
        assert!(acc.bow_equipped);

        let mut acc = StatAccumulator::new();
        GearSource::new(EquipmentSlot::Weapon, "Iron Sword 1").apply(&catalogs(), &mut acc);
        assert!(!acc.bow_equipped);
    }

    #[test]
    fn test_arrow_is_recorded_separately() {
        let mut acc = StatAccumulator::new();
        GearSource::new(EquipmentSlot::Arrow, "Wood Arrow").apply(&catalogs(), &mut acc);
        assert_eq!(acc.arrow_damage, 22);
        assert_eq!(acc.weapon_damage, 0);
    }

    #[test]
    fn test_unknown_item_contributes_nothing() {
        let mut acc = StatAccumulator::new();
        GearSource::new(EquipmentSlot::Chest, "Mystery Tunic").apply(&catalogs(), &mut acc);
        GearSource::new(EquipmentSlot::Weapon, "Mystery Axe").apply(&catalogs(), &mut acc);
        assert_eq!(acc.armor_flat, 0);
        assert_eq!(acc.weapon_damage, 0);
    }
}
