use pet_core::StatKind;

/// Shop shelf an item is listed under.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum ItemCategory {
    Food,
    Toy,
    Clothing,
    Special,
}

/// One effect granted when an item is bought.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ItemEffect {
    /// Raise (or lower, if negative) a vital.
    Stat { stat: StatKind, amount: i32 },
    /// Refund coins into the balance.
    Coins { amount: u32 },
}

/// Catalog entry.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ShopItem {
    pub id: String,
    pub name: String,
    pub description: String,
    pub price: u32,
    pub category: ItemCategory,
    pub effects: Vec<ItemEffect>,
}

impl ShopItem {
    fn new(
        id: &str,
        name: &str,
        description: &str,
        price: u32,
        category: ItemCategory,
        effects: Vec<ItemEffect>,
    ) -> Self {
        Self {
            id: id.to_string(),
            name: name.to_string(),
            description: description.to_string(),
            price,
            category,
            effects,
        }
    }
}

/// Ordered list of everything for sale.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ShopCatalog {
    pub items: Vec<ShopItem>,
}

impl ShopCatalog {
    pub fn new(items: Vec<ShopItem>) -> Self {
        Self { items }
    }

    pub fn get(&self, id: &str) -> Option<&ShopItem> {
        self.items.iter().find(|item| item.id == id)
    }

    /// Items on one shelf, or everything when `category` is `None`.
    pub fn by_category(&self, category: Option<ItemCategory>) -> Vec<&ShopItem> {
        self.items
            .iter()
            .filter(|item| category.is_none_or(|c| item.category == c))
            .collect()
    }

    /// Items the given balance can pay for.
    pub fn affordable(&self, coins: u32) -> impl Iterator<Item = &ShopItem> {
        self.items.iter().filter(move |item| item.price <= coins)
    }
}

impl Default for ShopCatalog {
    fn default() -> Self {
        use ItemCategory::*;
        use ItemEffect::{Coins, Stat};
        use StatKind::*;

        Self::new(vec![
            ShopItem::new(
                "premium-food",
                "Premium Food",
                "A delicious meal that will fully satisfy your pet.",
                10,
                Food,
                vec![Stat { stat: Hunger, amount: 50 }],
            ),
            ShopItem::new(
                "gourmet-treat",
                "Gourmet Treat",
                "A special treat that boosts happiness and hunger.",
                15,
                Food,
                vec![
                    Stat { stat: Hunger, amount: 30 },
                    Stat { stat: Happiness, amount: 30 },
                ],
            ),
            ShopItem::new(
                "interactive-toy",
                "Interactive Toy",
                "A fun toy that greatly increases happiness.",
                20,
                Toy,
                vec![Stat { stat: Happiness, amount: 60 }],
            ),
            ShopItem::new(
                "energy-drink",
                "Energy Drink",
                "Restores energy so your pet can play more.",
                15,
                Food,
                vec![Stat { stat: Energy, amount: 50 }],
            ),
            ShopItem::new(
                "stylish-hat",
                "Stylish Hat",
                "A fashionable hat that makes your pet look cool.",
                30,
                Clothing,
                vec![Stat { stat: Happiness, amount: 40 }],
            ),
            ShopItem::new(
                "cozy-sweater",
                "Cozy Sweater",
                "A warm sweater that keeps your pet comfortable.",
                35,
                Clothing,
                vec![
                    Stat { stat: Happiness, amount: 45 },
                    Stat { stat: Energy, amount: 20 },
                ],
            ),
            ShopItem::new(
                "lucky-charm",
                "Lucky Charm",
                "A special item that brings good fortune.",
                50,
                Special,
                vec![Coins { amount: 25 }, Stat { stat: Happiness, amount: 30 }],
            ),
        ])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_catalog_lists_seven_items() {
        let catalog = ShopCatalog::default();
        assert_eq!(catalog.items.len(), 7);
        assert_eq!(catalog.get("lucky-charm").map(|i| i.price), Some(50));
        assert!(catalog.get("golden-bone").is_none());
    }

    #[test]
    fn filters_by_shelf() {
        let catalog = ShopCatalog::default();
        let food: Vec<_> = catalog
            .by_category(Some(ItemCategory::Food))
            .into_iter()
            .map(|i| i.id.as_str())
            .collect();
        assert_eq!(food, ["premium-food", "gourmet-treat", "energy-drink"]);
        assert_eq!(catalog.by_category(None).len(), 7);
    }

    #[test]
    fn affordable_respects_balance() {
        let catalog = ShopCatalog::default();
        assert_eq!(catalog.affordable(15).count(), 3);
        assert_eq!(catalog.affordable(9).count(), 0);
    }
}
