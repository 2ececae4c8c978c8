use crate::entity::Hero;
use crate::world::{Merchant, Product, Receipt};
use rust_decimal::Decimal;

/// Price the armor pieces the hero is missing at this merchant
///
/// Pieces the merchant does not stock are charged at the generic armor price.
pub fn upgrade_armor(merchant: &Merchant, hero: &Hero) -> Receipt {
    let fallback = Product::armor();

    let total = hero
        .required_armor_pieces()
        .iter()
        .map(|slot| merchant.find_product(slot.name()).unwrap_or(&fallback).price)
        .fold(Decimal::ZERO, |sum, price| sum + price);

    tracing::debug!("{} quotes {} for {}'s armor", merchant.name, total, hero.name);
    Receipt { total }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entity::ArmorSlot;

    #[test]
    fn test_unstocked_pieces_use_generic_price() {
        let merchant = Merchant::new(
            "Gorm",
            vec![
                Product::new("Helmet", Decimal::from(25)),
                Product::new("Boots", Decimal::new(125, 1)),
            ],
        );
        let mut hero = Hero::new("Brunhild");
        hero.equipped_armor = vec![ArmorSlot::Chestplate];

        // Helmet 25 + Gauntlets 10 + Greaves 10 + Boots 12.5
        let receipt = upgrade_armor(&merchant, &hero);
        assert_eq!(receipt.total, Decimal::new(575, 1));
        assert_eq!(receipt.to_string(), "Receipt value: 57.5 gold");
    }

    #[test]
    fn test_fully_armored_hero_pays_nothing() {
        let mut hero = Hero::new("Brunhild");
        hero.equipped_armor = ArmorSlot::all().to_vec();

        let receipt = upgrade_armor(&Merchant::default(), &hero);
        assert_eq!(receipt.total, Decimal::ZERO);
    }
}
