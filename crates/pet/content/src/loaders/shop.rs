//! Shop catalog loader.

use std::path::Path;

use crate::catalog::ShopCatalog;
use crate::loaders::{LoadResult, read_file};

/// Loader for the shop catalog from RON files.
pub struct ShopLoader;

impl ShopLoader {
    /// Load a catalog from a RON file containing a `ShopCatalog`.
    pub fn load(path: &Path) -> LoadResult<ShopCatalog> {
        let content = read_file(path)?;
        Self::parse(&content)
    }

    /// Parse a catalog from RON text.
    pub fn parse(content: &str) -> LoadResult<ShopCatalog> {
        let catalog: ShopCatalog = ron::from_str(content)
            .map_err(|e| anyhow::anyhow!("Failed to parse shop catalog RON: {}", e))?;

        let mut seen = std::collections::HashSet::new();
        for item in &catalog.items {
            if !seen.insert(item.id.as_str()) {
                anyhow::bail!("Duplicate shop item id: {}", item.id);
            }
        }

        Ok(catalog)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{ItemCategory, ItemEffect};
    use pet_core::StatKind;

    #[test]
    fn bundled_file_matches_builtin_catalog() {
        let catalog = ShopLoader::parse(include_str!("../../data/shop.ron"))
            .expect("bundled shop.ron should parse");
        assert_eq!(catalog, ShopCatalog::default());
    }

    #[test]
    fn parses_effects() {
        let catalog = ShopLoader::parse(
            r#"(
                items: [
                    (
                        id: "bone",
                        name: "Bone",
                        description: "Chewy.",
                        price: 3,
                        category: toy,
                        effects: [Stat(stat: happiness, amount: 5), Coins(amount: 1)],
                    ),
                ],
            )"#,
        )
        .expect("catalog should parse");

        let bone = catalog.get("bone").expect("bone listed");
        assert_eq!(bone.category, ItemCategory::Toy);
        assert_eq!(
            bone.effects,
            vec![
                ItemEffect::Stat {
                    stat: StatKind::Happiness,
                    amount: 5
                },
                ItemEffect::Coins { amount: 1 },
            ]
        );
    }

    #[test]
    fn rejects_duplicate_ids() {
        let content = r#"(
            items: [
                (id: "a", name: "A", description: "", price: 1, category: food, effects: []),
                (id: "a", name: "A", description: "", price: 2, category: food, effects: []),
            ],
        )"#;
        assert!(ShopLoader::parse(content).is_err());
    }

    #[test]
    fn missing_file_is_an_error() {
        let err = ShopLoader::load(Path::new("/nonexistent/shop.ron")).unwrap_err();
        assert!(err.to_string().contains("Failed to read file"));
    }
}
