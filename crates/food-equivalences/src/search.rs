//! Keyword lookup over the equivalence catalog.
//!
//! Matching is plain case-insensitive substring containment: no tokenizing, no fuzzy
//! matching, no ranking. Results keep catalog order.

use tracing::debug;

use crate::catalog;
use crate::model::{Equivalence, EquivalenceType};

/// Free search: records whose ingredient or any keyword contains `query`.
///
/// A blank query returns nothing rather than the whole catalog.
pub fn search_equivalences(
    query: &str,
    kind: Option<EquivalenceType>,
) -> Vec<&'static Equivalence> {
    let needle = query.trim().to_lowercase();
    if needle.is_empty() {
        return Vec::new();
    }

    let results: Vec<&'static Equivalence> = catalog::equivalences()
        .filter(|eq| kind.map_or(true, |k| eq.kind == k))
        .filter(|eq| eq.mentions(&needle))
        .collect();

    debug!(query = %needle, ?kind, matches = results.len(), "equivalence search");
    results
}

/// Exact lookup on the ingredient name, ignoring case and surrounding whitespace.
///
/// Keywords do not take part in exact lookup.
pub fn get_equivalences_for_ingredient(
    ingredient: &str,
    kind: Option<EquivalenceType>,
) -> Vec<&'static Equivalence> {
    let wanted = ingredient.trim().to_lowercase();

    catalog::equivalences()
        .filter(|eq| kind.map_or(true, |k| eq.kind == k))
        .filter(|eq| eq.ingredient.to_lowercase() == wanted)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    const QUERIES: &[&str] = &[
        "beurre", "BEURRE", "  lait ", "crème", "creme", "oeuf", "œuf", "farine", "riz", "sucre",
        "pain", "chocolat", "jus", "soda", "fromage", "e", "de", "xyz", "chips", "viande",
        "levure", "sel", "gélatine", "pâtes",
    ];

    fn kinds() -> [Option<EquivalenceType>; 3] {
        [
            None,
            Some(EquivalenceType::Recipe),
            Some(EquivalenceType::Nutrition),
        ]
    }

    fn matches(eq: &Equivalence, query: &str, kind: Option<EquivalenceType>) -> bool {
        let q = query.trim().to_lowercase();
        kind.map_or(true, |k| eq.kind == k)
            && (eq.ingredient.to_lowercase().contains(&q)
                || eq.keywords.iter().any(|k| k.to_lowercase().contains(&q)))
    }

    #[test]
    fn search_results_are_sound_and_complete() {
        for query in QUERIES {
            for kind in kinds() {
                let results = search_equivalences(query, kind);
                let expected: Vec<&Equivalence> = catalog::equivalences()
                    .filter(|eq| matches(eq, query, kind))
                    .collect();
                assert_eq!(results, expected, "query {query:?}, kind {kind:?}");
            }
        }
    }

    #[test]
    fn blank_query_returns_nothing() {
        for kind in kinds() {
            assert!(search_equivalences("", kind).is_empty());
            assert!(search_equivalences("   ", kind).is_empty());
            assert!(search_equivalences("\t\n", kind).is_empty());
        }
    }

    #[test]
    fn butter_recipe_search_finds_pastry_and_toast() {
        let results = search_equivalences("beurre", Some(EquivalenceType::Recipe));
        assert!(results.len() >= 2);
        assert!(results.iter().all(|e| e.kind == EquivalenceType::Recipe));

        let categories: Vec<&str> = results.iter().map(|e| e.category).collect();
        assert!(categories.contains(&"Matières grasses - Pâtisserie"));
        assert!(categories.contains(&"Matières grasses - Tartines"));
    }

    #[test]
    fn type_filter_excludes_other_kind() {
        let all = search_equivalences("riz", None);
        let recipe = search_equivalences("riz", Some(EquivalenceType::Recipe));
        let nutrition = search_equivalences("riz", Some(EquivalenceType::Nutrition));
        assert_eq!(all.len(), recipe.len() + nutrition.len());
        assert!(nutrition.iter().any(|e| e.ingredient == "Riz blanc"));
    }

    #[test]
    fn search_matches_keyword_only_hits() {
        // "butter" is only a keyword, never an ingredient name.
        let results = search_equivalences("butter", None);
        assert!(!results.is_empty());
        assert!(results.iter().all(|e| e.ingredient == "Beurre"));
    }

    #[test]
    fn exact_lookup_ignores_case_and_whitespace() {
        let results = get_equivalences_for_ingredient("  bEURRE ", None);
        assert!(results.len() >= 2);
        assert!(results.iter().all(|e| e.ingredient == "Beurre"));

        let as_nutrition =
            get_equivalences_for_ingredient("beurre", Some(EquivalenceType::Nutrition));
        assert!(as_nutrition.is_empty());
    }

    #[test]
    fn exact_lookup_rejects_partial_names() {
        assert!(!search_equivalences("beur", None).is_empty());
        assert!(get_equivalences_for_ingredient("beur", None).is_empty());

        assert!(!search_equivalences("crème", None).is_empty());
        assert!(get_equivalences_for_ingredient("crème", None).is_empty());
    }

    #[test]
    fn exact_lookup_ignores_keywords() {
        assert!(get_equivalences_for_ingredient("butter", None).is_empty());
        assert!(get_equivalences_for_ingredient("oeuf", None).is_empty());
        assert_eq!(get_equivalences_for_ingredient("Œuf", None).len(), 1);
    }

    #[test]
    fn exact_lookup_preserves_catalog_order() {
        let results = get_equivalences_for_ingredient("beurre", Some(EquivalenceType::Recipe));
        let categories: Vec<&str> = results.iter().map(|e| e.category).collect();
        assert_eq!(
            categories,
            vec![
                "Matières grasses - Pâtisserie",
                "Matières grasses - Tartines",
                "Matières grasses - Cuisson",
            ]
        );
    }
}
