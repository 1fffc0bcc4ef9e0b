//! Keyword lookup scoped to one nutrition goal.

use tracing::debug;

use crate::goals::goal_data;
use crate::goals::model::{ByCategory, EquivalenceCategory, NutritionEquivalence, NutritionGoal};

/// Per-category search results. Every category is present, possibly empty.
pub type GoalSearchResults = ByCategory<Vec<&'static NutritionEquivalence>>;

/// Filters the goal's entries, category by category, on base food, substitute and
/// keywords. An absent or blank query returns every entry unchanged.
pub fn search_nutrition_equivalences(
    goal: NutritionGoal,
    query: Option<&str>,
) -> GoalSearchResults {
    let data = goal_data(goal);
    let needle = query.map(|q| q.trim().to_lowercase()).unwrap_or_default();

    let results: GoalSearchResults = if needle.is_empty() {
        data.equivalences.map(|_, &entries| entries.iter().collect())
    } else {
        data.equivalences.map(|_, &entries| {
            entries
                .iter()
                .filter(|entry| entry.mentions(&needle))
                .collect::<Vec<_>>()
        })
    };

    debug!(
        goal = %goal,
        query = %needle,
        browse = needle.is_empty(),
        matches = results.iter().map(|(_, entries)| entries.len()).sum::<usize>(),
        "goal equivalence search"
    );
    results
}

/// Categories holding at least one entry in the goal's unfiltered data, in canonical
/// order.
pub fn get_categories_with_equivalences(goal: NutritionGoal) -> Vec<EquivalenceCategory> {
    goal_data(goal)
        .equivalences
        .iter()
        .filter(|(_, entries)| !entries.is_empty())
        .map(|(category, _)| category)
        .collect()
}

#[cfg(test)]
mod tests {
    use std::io;
    use std::sync::{Arc, Mutex};

    use super::*;

    const QUERIES: &[&str] = &[
        "riz", "RIZ", " pain ", "huile", "soda", "café", "oeuf", "œuf", "chips", "a", "e",
        "lentilles", "fromage", "xyz", "poulet", "sel",
    ];

    fn is_subsequence(filtered: &[&NutritionEquivalence], full: &[&NutritionEquivalence]) -> bool {
        let mut rest = full.iter();
        filtered.iter().all(|f| rest.any(|e| std::ptr::eq(*e, *f)))
    }

    #[test]
    fn browse_returns_stored_data_unchanged() {
        for goal in NutritionGoal::ALL {
            let stored = &goal_data(goal).equivalences;
            for query in [None, Some(""), Some("   ")] {
                let results = search_nutrition_equivalences(goal, query);
                for category in EquivalenceCategory::ALL {
                    let expected: Vec<&NutritionEquivalence> = stored.get(category).iter().collect();
                    assert_eq!(results.get(category), &expected, "{goal} / {category}");
                }
            }
        }
    }

    #[test]
    fn filtered_results_are_sound_complete_subsequences() {
        for goal in NutritionGoal::ALL {
            let stored = &goal_data(goal).equivalences;
            for query in QUERIES {
                let needle = query.trim().to_lowercase();
                let results = search_nutrition_equivalences(goal, Some(*query));
                for category in EquivalenceCategory::ALL {
                    let full: Vec<&NutritionEquivalence> = stored.get(category).iter().collect();
                    let filtered = results.get(category);
                    assert!(is_subsequence(filtered, &full), "{goal} / {category} / {query}");

                    let expected: Vec<&NutritionEquivalence> = full
                        .iter()
                        .copied()
                        .filter(|e| {
                            e.base_food.to_lowercase().contains(&needle)
                                || e.substitute.to_lowercase().contains(&needle)
                                || e.keywords.iter().any(|k| k.to_lowercase().contains(&needle))
                        })
                        .collect();
                    assert_eq!(filtered, &expected, "{goal} / {category} / {query}");
                }
            }
        }
    }

    #[test]
    fn weight_loss_rice_only_hits_starches() {
        let results = search_nutrition_equivalences(NutritionGoal::WeightLoss, Some("riz"));

        let starches = results.get(EquivalenceCategory::Feculents);
        assert_eq!(starches.len(), 1);
        assert_eq!(starches[0].base_food, "Riz blanc");
        assert!(starches[0].substitute.contains("basmati"));
        assert!(starches[0].substitute.contains("lentilles"));

        for (category, entries) in results.iter() {
            if category != EquivalenceCategory::Feculents {
                assert!(entries.is_empty(), "unexpected hit in {category}");
            }
        }
    }

    #[test]
    fn query_matches_substitute_name() {
        let results = search_nutrition_equivalences(NutritionGoal::Vegetarian, Some("tofu"));
        let proteins = results.get(EquivalenceCategory::Proteines);
        assert_eq!(proteins.len(), 1);
        assert_eq!(proteins[0].substitute, "Tofu ferme mariné");
    }

    #[test]
    fn muscle_gain_categories_skip_empty_sections() {
        assert_eq!(
            get_categories_with_equivalences(NutritionGoal::MuscleGain),
            vec![
                EquivalenceCategory::Feculents,
                EquivalenceCategory::Proteines,
                EquivalenceCategory::Snacks,
            ]
        );
    }

    #[test]
    fn listed_categories_follow_canonical_order_and_stored_data() {
        for goal in NutritionGoal::ALL {
            let listed = get_categories_with_equivalences(goal);
            let mut sorted = listed.clone();
            sorted.sort();
            assert_eq!(listed, sorted, "{goal}");

            for category in EquivalenceCategory::ALL {
                let non_empty = !goal_data(goal).equivalences.get(category).is_empty();
                assert_eq!(listed.contains(&category), non_empty, "{goal} / {category}");
            }
        }
    }

    #[derive(Clone, Default)]
    struct CapturedLogs(Arc<Mutex<Vec<u8>>>);

    impl io::Write for CapturedLogs {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn browse_and_filtered_searches_are_both_logged() {
        let logs = CapturedLogs::default();
        let writer = logs.clone();
        let subscriber = tracing_subscriber::fmt()
            .with_max_level(tracing::Level::DEBUG)
            .with_ansi(false)
            .with_writer(move || writer.clone())
            .finish();

        tracing::subscriber::with_default(subscriber, || {
            search_nutrition_equivalences(NutritionGoal::Diabetes, None);
            search_nutrition_equivalences(NutritionGoal::Diabetes, Some("pain"));
        });

        let output = String::from_utf8(logs.0.lock().unwrap().clone()).unwrap();
        assert_eq!(output.matches("goal equivalence search").count(), 2, "{output}");
        assert!(output.contains("browse=true"), "{output}");
        assert!(output.contains("browse=false"), "{output}");
    }

    #[test]
    fn listed_categories_ignore_any_search() {
        let before = get_categories_with_equivalences(NutritionGoal::WeightLoss);
        let _ = search_nutrition_equivalences(NutritionGoal::WeightLoss, Some("riz"));
        assert_eq!(get_categories_with_equivalences(NutritionGoal::WeightLoss), before);
        assert_eq!(before.len(), EquivalenceCategory::ALL.len());
    }
}
