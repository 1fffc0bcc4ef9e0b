//! Integrity checks over both compiled-in catalogs.
//!
//! The datasets are constants, so a violation here is a data bug. The server runs
//! `validate_catalogs` once at startup and the test suite runs it on every build.

use serde::Serialize;

use crate::catalog;
use crate::error::CatalogError;
use crate::goals::goal_data;
use crate::goals::model::{NutritionEquivalence, NutritionGoal, NutritionGoalData};
use crate::model::Equivalence;

/// Counts reported after a successful validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CatalogStats {
    pub equivalences: usize,
    pub alternatives: usize,
    pub goals: usize,
    pub goal_equivalences: usize,
}

pub fn validate_catalogs() -> Result<CatalogStats, CatalogError> {
    let mut stats = CatalogStats {
        equivalences: 0,
        alternatives: 0,
        goals: 0,
        goal_equivalences: 0,
    };

    for (index, eq) in catalog::equivalences().enumerate() {
        validate_equivalence(index, eq)?;
        stats.equivalences += 1;
        stats.alternatives += eq.alternatives.len();
    }

    for goal in NutritionGoal::ALL {
        let data = goal_data(goal);
        if data.id != goal {
            return Err(CatalogError::GoalMismatch {
                registered: goal.to_string(),
                found: data.id.to_string(),
            });
        }
        validate_goal(data)?;
        stats.goals += 1;
        stats.goal_equivalences += data.entry_count();
    }

    Ok(stats)
}

fn validate_equivalence(index: usize, eq: &Equivalence) -> Result<(), CatalogError> {
    let ingredient = || eq.ingredient.to_string();

    for (field, value) in [("ingredient", eq.ingredient), ("category", eq.category)] {
        if value.trim().is_empty() {
            return Err(CatalogError::BlankField {
                index,
                ingredient: ingredient(),
                field,
            });
        }
    }
    if eq.alternatives.is_empty() {
        return Err(CatalogError::NoAlternatives {
            index,
            ingredient: ingredient(),
        });
    }
    if eq.keywords.iter().all(|k| k.trim().is_empty()) {
        return Err(CatalogError::NoKeywords {
            index,
            ingredient: ingredient(),
        });
    }

    for (position, alt) in eq.alternatives.iter().enumerate() {
        for (field, value) in [("name", alt.name), ("equivalence", alt.equivalence)] {
            if value.trim().is_empty() {
                return Err(CatalogError::BlankAlternativeField {
                    index,
                    ingredient: ingredient(),
                    position,
                    field,
                });
            }
        }
    }
    Ok(())
}

fn validate_goal(data: &NutritionGoalData) -> Result<(), CatalogError> {
    let goal = data.id.to_string();

    if data.key_principles.is_empty() {
        return Err(CatalogError::NoPrinciples(goal));
    }
    if data.entry_count() == 0 {
        return Err(CatalogError::EmptyGoal(goal));
    }

    for (category, entries) in data.equivalences.iter() {
        for (position, entry) in entries.iter().enumerate() {
            validate_goal_entry(entry).map_err(|problem| match problem {
                EntryProblem::Blank(field) => CatalogError::BlankGoalField {
                    goal: goal.clone(),
                    category: category.to_string(),
                    position,
                    field,
                },
                EntryProblem::NoKeywords => CatalogError::NoGoalKeywords {
                    goal: goal.clone(),
                    category: category.to_string(),
                    position,
                    base_food: entry.base_food.to_string(),
                },
            })?;
        }
    }
    Ok(())
}

enum EntryProblem {
    Blank(&'static str),
    NoKeywords,
}

fn validate_goal_entry(entry: &NutritionEquivalence) -> Result<(), EntryProblem> {
    let required = [
        ("baseFood", entry.base_food),
        ("substitute", entry.substitute),
        ("baseQuantity", entry.base_quantity),
        ("substituteQuantity", entry.substitute_quantity),
        ("interest", entry.interest),
    ];
    if let Some(&(field, _)) = required.iter().find(|(_, value)| value.trim().is_empty()) {
        return Err(EntryProblem::Blank(field));
    }
    if entry.keywords.iter().all(|k| k.trim().is_empty()) {
        return Err(EntryProblem::NoKeywords);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Alternative, EquivalenceType};

    #[test]
    fn shipped_catalogs_are_valid() {
        let stats = validate_catalogs().expect("shipped catalogs should validate");
        assert_eq!(stats.equivalences, catalog::equivalences().count());
        assert_eq!(stats.goals, NutritionGoal::ALL.len());
        assert!(stats.alternatives >= stats.equivalences);
        assert!(stats.goal_equivalences >= stats.goals);
    }

    #[test]
    fn every_record_has_alternatives_and_keywords() {
        for eq in catalog::equivalences() {
            assert!(!eq.alternatives.is_empty(), "{} has no alternatives", eq.ingredient);
            assert!(!eq.keywords.is_empty(), "{} has no keywords", eq.ingredient);
        }
    }

    #[test]
    fn rejects_equivalence_without_alternatives() {
        let eq = Equivalence {
            ingredient: "Beurre",
            category: "Test",
            kind: EquivalenceType::Recipe,
            keywords: &["beurre"],
            alternatives: &[],
        };
        assert_eq!(
            validate_equivalence(3, &eq),
            Err(CatalogError::NoAlternatives {
                index: 3,
                ingredient: "Beurre".to_string(),
            })
        );
    }

    #[test]
    fn rejects_equivalence_with_blank_keywords() {
        static ALTS: [Alternative; 1] = [Alternative::new("Huile", "10 g → 8 g")];
        let eq = Equivalence {
            ingredient: "Beurre",
            category: "Test",
            kind: EquivalenceType::Recipe,
            keywords: &["  "],
            alternatives: &ALTS,
        };
        assert!(matches!(
            validate_equivalence(0, &eq),
            Err(CatalogError::NoKeywords { .. })
        ));
    }

    #[test]
    fn rejects_blank_alternative_name() {
        static ALTS: [Alternative; 2] = [
            Alternative::new("Huile", "10 g → 8 g"),
            Alternative::new(" ", "10 g → 10 g"),
        ];
        let eq = Equivalence {
            ingredient: "Beurre",
            category: "Test",
            kind: EquivalenceType::Recipe,
            keywords: &["beurre"],
            alternatives: &ALTS,
        };
        assert!(matches!(
            validate_equivalence(0, &eq),
            Err(CatalogError::BlankAlternativeField {
                position: 1,
                field: "name",
                ..
            })
        ));
    }

    #[test]
    fn rejects_goal_entry_without_interest() {
        let entry = NutritionEquivalence::new("Soda", "33 cl", "Eau", "33 cl", "", &["soda"]);
        assert!(matches!(
            validate_goal_entry(&entry),
            Err(EntryProblem::Blank("interest"))
        ));
    }
}
