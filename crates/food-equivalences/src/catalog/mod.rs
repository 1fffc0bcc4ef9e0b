//! The recipe and nutrition equivalence catalog.
//!
//! A fixed, compiled-in sequence of `Equivalence` records. Recipe topics come first,
//! then nutrition topics; that order is the order every search returns.

mod nutrition;
mod recipe;

use serde::Serialize;

use crate::model::{Equivalence, EquivalenceType};

/// Every equivalence record, in catalog order.
pub fn equivalences() -> impl Iterator<Item = &'static Equivalence> + Clone {
    recipe::EQUIVALENCES.iter().chain(nutrition::EQUIVALENCES)
}

/// A display label from the `category` field, with the number of records carrying it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RecipeCategory {
    pub label: &'static str,
    #[serde(rename = "type")]
    pub kind: EquivalenceType,
    pub equivalence_count: usize,
}

/// Distinct `(category, type)` pairs in first-seen catalog order.
pub fn recipe_categories() -> Vec<RecipeCategory> {
    let mut categories: Vec<RecipeCategory> = Vec::new();
    for eq in equivalences() {
        match categories
            .iter_mut()
            .find(|c| c.label == eq.category && c.kind == eq.kind)
        {
            Some(existing) => existing.equivalence_count += 1,
            None => categories.push(RecipeCategory {
                label: eq.category,
                kind: eq.kind,
                equivalence_count: 1,
            }),
        }
    }
    categories
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn recipe_topics_precede_nutrition_topics() {
        let kinds: Vec<EquivalenceType> = equivalences().map(|e| e.kind).collect();
        let first_nutrition = kinds
            .iter()
            .position(|k| *k == EquivalenceType::Nutrition)
            .expect("catalog has nutrition topics");
        assert!(first_nutrition > 0);
        assert!(kinds[first_nutrition..]
            .iter()
            .all(|k| *k == EquivalenceType::Nutrition));
    }

    #[test]
    fn butter_appears_under_several_categories() {
        let butter: Vec<&str> = equivalences()
            .filter(|e| e.ingredient == "Beurre")
            .map(|e| e.category)
            .collect();
        assert!(butter.len() >= 2);
        assert!(butter.contains(&"Matières grasses - Pâtisserie"));
        assert!(butter.contains(&"Matières grasses - Tartines"));
    }

    #[test]
    fn recipe_categories_count_every_record_once() {
        let categories = recipe_categories();
        let total: usize = categories.iter().map(|c| c.equivalence_count).sum();
        assert_eq!(total, equivalences().count());

        let first = &categories[0];
        assert_eq!(first.label, "Matières grasses - Pâtisserie");
        assert_eq!(first.kind, EquivalenceType::Recipe);
        // "Beurre" and "Huile" share the pastry fats label.
        assert_eq!(first.equivalence_count, 2);
    }

    #[test]
    fn recipe_categories_are_distinct() {
        let categories = recipe_categories();
        for (i, a) in categories.iter().enumerate() {
            for b in &categories[i + 1..] {
                assert!(
                    !(a.label == b.label && a.kind == b.kind),
                    "duplicate category {}",
                    a.label
                );
            }
        }
    }
}
