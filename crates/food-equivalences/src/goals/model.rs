use std::fmt;
use std::str::FromStr;

use serde::Serialize;

use crate::error::ParseError;

/// A dietary objective. Every value has exactly one catalog record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum NutritionGoal {
    WeightLoss,
    MuscleGain,
    Diabetes,
    Hypertension,
    Cholesterol,
    DigestiveHealth,
    Pregnancy,
    Seniors,
    EnduranceSport,
    Vegetarian,
}

impl NutritionGoal {
    /// Canonical order.
    pub const ALL: [Self; 10] = [
        Self::WeightLoss,
        Self::MuscleGain,
        Self::Diabetes,
        Self::Hypertension,
        Self::Cholesterol,
        Self::DigestiveHealth,
        Self::Pregnancy,
        Self::Seniors,
        Self::EnduranceSport,
        Self::Vegetarian,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::WeightLoss => "weight-loss",
            Self::MuscleGain => "muscle-gain",
            Self::Diabetes => "diabetes",
            Self::Hypertension => "hypertension",
            Self::Cholesterol => "cholesterol",
            Self::DigestiveHealth => "digestive-health",
            Self::Pregnancy => "pregnancy",
            Self::Seniors => "seniors",
            Self::EnduranceSport => "endurance-sport",
            Self::Vegetarian => "vegetarian",
        }
    }
}

impl fmt::Display for NutritionGoal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for NutritionGoal {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        Self::ALL
            .into_iter()
            .find(|g| g.as_str().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| ParseError::UnknownGoal {
                input: wanted.to_string(),
                available: Self::ALL.map(Self::as_str).join(", "),
            })
    }
}

/// The fixed partition of a goal's entries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub enum EquivalenceCategory {
    #[serde(rename = "féculents")]
    Feculents,
    #[serde(rename = "protéines")]
    Proteines,
    #[serde(rename = "matières-grasses")]
    MatieresGrasses,
    #[serde(rename = "boissons")]
    Boissons,
    #[serde(rename = "snacks")]
    Snacks,
    #[serde(rename = "desserts")]
    Desserts,
    #[serde(rename = "général")]
    General,
}

impl EquivalenceCategory {
    /// Canonical order.
    pub const ALL: [Self; 7] = [
        Self::Feculents,
        Self::Proteines,
        Self::MatieresGrasses,
        Self::Boissons,
        Self::Snacks,
        Self::Desserts,
        Self::General,
    ];

    /// Key used in serialized maps.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Feculents => "féculents",
            Self::Proteines => "protéines",
            Self::MatieresGrasses => "matières-grasses",
            Self::Boissons => "boissons",
            Self::Snacks => "snacks",
            Self::Desserts => "desserts",
            Self::General => "général",
        }
    }

    /// Section title for display.
    pub fn label(self) -> &'static str {
        match self {
            Self::Feculents => "Féculents",
            Self::Proteines => "Protéines",
            Self::MatieresGrasses => "Matières grasses",
            Self::Boissons => "Boissons",
            Self::Snacks => "Snacks",
            Self::Desserts => "Desserts",
            Self::General => "Général",
        }
    }

    fn ascii_key(self) -> &'static str {
        match self {
            Self::Feculents => "feculents",
            Self::Proteines => "proteines",
            Self::MatieresGrasses => "matieres-grasses",
            Self::Boissons => "boissons",
            Self::Snacks => "snacks",
            Self::Desserts => "desserts",
            Self::General => "general",
        }
    }
}

impl fmt::Display for EquivalenceCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for EquivalenceCategory {
    type Err = ParseError;

    /// Accepts the accented key or its unaccented spelling.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_lowercase();
        Self::ALL
            .into_iter()
            .find(|c| c.as_str() == wanted || c.ascii_key() == wanted)
            .ok_or_else(|| ParseError::UnknownCategory {
                input: s.trim().to_string(),
                available: Self::ALL.map(Self::as_str).join(", "),
            })
    }
}

/// One value per `EquivalenceCategory`.
///
/// Each category is a named field, so a value of this type always covers the whole
/// enum: consumers can iterate every category without existence checks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ByCategory<T> {
    #[serde(rename = "féculents")]
    pub feculents: T,
    #[serde(rename = "protéines")]
    pub proteines: T,
    #[serde(rename = "matières-grasses")]
    pub matieres_grasses: T,
    #[serde(rename = "boissons")]
    pub boissons: T,
    #[serde(rename = "snacks")]
    pub snacks: T,
    #[serde(rename = "desserts")]
    pub desserts: T,
    #[serde(rename = "général")]
    pub general: T,
}

impl<T> ByCategory<T> {
    pub fn from_fn(mut f: impl FnMut(EquivalenceCategory) -> T) -> Self {
        Self {
            feculents: f(EquivalenceCategory::Feculents),
            proteines: f(EquivalenceCategory::Proteines),
            matieres_grasses: f(EquivalenceCategory::MatieresGrasses),
            boissons: f(EquivalenceCategory::Boissons),
            snacks: f(EquivalenceCategory::Snacks),
            desserts: f(EquivalenceCategory::Desserts),
            general: f(EquivalenceCategory::General),
        }
    }

    pub fn get(&self, category: EquivalenceCategory) -> &T {
        match category {
            EquivalenceCategory::Feculents => &self.feculents,
            EquivalenceCategory::Proteines => &self.proteines,
            EquivalenceCategory::MatieresGrasses => &self.matieres_grasses,
            EquivalenceCategory::Boissons => &self.boissons,
            EquivalenceCategory::Snacks => &self.snacks,
            EquivalenceCategory::Desserts => &self.desserts,
            EquivalenceCategory::General => &self.general,
        }
    }

    pub fn map<U>(&self, mut f: impl FnMut(EquivalenceCategory, &T) -> U) -> ByCategory<U> {
        ByCategory::from_fn(|category| f(category, self.get(category)))
    }

    /// Entries in canonical category order.
    pub fn iter(&self) -> impl Iterator<Item = (EquivalenceCategory, &T)> + '_ {
        EquivalenceCategory::ALL
            .into_iter()
            .map(move |category| (category, self.get(category)))
    }
}

/// A single swap recommended for a goal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NutritionEquivalence {
    pub base_food: &'static str,
    pub base_quantity: &'static str,
    pub substitute: &'static str,
    pub substitute_quantity: &'static str,
    pub interest: &'static str,
    /// Meal or time-of-day tag, e.g. "Petit-déjeuner".
    #[serde(skip_serializing_if = "Option::is_none")]
    pub context: Option<&'static str>,
    pub keywords: &'static [&'static str],
}

impl NutritionEquivalence {
    pub const fn new(
        base_food: &'static str,
        base_quantity: &'static str,
        substitute: &'static str,
        substitute_quantity: &'static str,
        interest: &'static str,
        keywords: &'static [&'static str],
    ) -> Self {
        Self {
            base_food,
            base_quantity,
            substitute,
            substitute_quantity,
            interest,
            context: None,
            keywords,
        }
    }

    pub const fn context(self, context: &'static str) -> Self {
        Self {
            context: Some(context),
            ..self
        }
    }

    /// Substring match of an already normalized needle against the base food, the
    /// substitute and every keyword.
    pub(crate) fn mentions(&self, needle: &str) -> bool {
        self.base_food.to_lowercase().contains(needle)
            || self.substitute.to_lowercase().contains(needle)
            || self
                .keywords
                .iter()
                .any(|k| k.to_lowercase().contains(needle))
    }
}

/// Everything the catalog holds for one goal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NutritionGoalData {
    pub id: NutritionGoal,
    pub title: &'static str,
    pub icon: &'static str,
    pub key_principles: &'static [&'static str],
    pub equivalences: ByCategory<&'static [NutritionEquivalence]>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub warning: Option<&'static str>,
}

impl NutritionGoalData {
    pub fn entry_count(&self) -> usize {
        self.equivalences.iter().map(|(_, entries)| entries.len()).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn goal_ids_round_trip() {
        for goal in NutritionGoal::ALL {
            assert_eq!(goal.as_str().parse::<NutritionGoal>(), Ok(goal));
            assert_eq!(
                serde_json::to_value(goal).unwrap(),
                serde_json::Value::String(goal.as_str().to_string())
            );
        }
    }

    #[test]
    fn unknown_goal_lists_available_ids() {
        let err = "keto".parse::<NutritionGoal>().unwrap_err();
        let message = err.to_string();
        assert!(message.contains("'keto'"));
        assert!(message.contains("weight-loss"));
        assert!(message.contains("vegetarian"));
    }

    #[test]
    fn category_accepts_unaccented_keys() {
        assert_eq!(
            "feculents".parse::<EquivalenceCategory>(),
            Ok(EquivalenceCategory::Feculents)
        );
        assert_eq!(
            "Matières-Grasses".parse::<EquivalenceCategory>(),
            Ok(EquivalenceCategory::MatieresGrasses)
        );
        assert_eq!(
            "general".parse::<EquivalenceCategory>(),
            Ok(EquivalenceCategory::General)
        );
        assert!("légumes".parse::<EquivalenceCategory>().is_err());
    }

    #[test]
    fn category_serde_key_matches_as_str() {
        for category in EquivalenceCategory::ALL {
            assert_eq!(
                serde_json::to_value(category).unwrap(),
                serde_json::Value::String(category.as_str().to_string())
            );
        }
    }

    #[test]
    fn by_category_serializes_every_key() {
        let counts = ByCategory::from_fn(|c| c.as_str().len());
        let json = serde_json::to_value(counts).unwrap();
        let object = json.as_object().unwrap();
        assert_eq!(object.len(), 7);
        for category in EquivalenceCategory::ALL {
            assert!(object.contains_key(category.as_str()), "missing {category}");
        }
    }

    #[test]
    fn by_category_iterates_in_canonical_order() {
        let labels = ByCategory::from_fn(EquivalenceCategory::label);
        let order: Vec<EquivalenceCategory> = labels.iter().map(|(c, _)| c).collect();
        assert_eq!(order, EquivalenceCategory::ALL.to_vec());
        assert_eq!(*labels.get(EquivalenceCategory::MatieresGrasses), "Matières grasses");
    }

    #[test]
    fn mentions_covers_substitute() {
        let entry = NutritionEquivalence::new(
            "Riz blanc",
            "150 g",
            "Quinoa",
            "150 g",
            "Protéines complètes",
            &["riz"],
        );
        assert!(entry.mentions("quinoa"));
        assert!(entry.mentions("blanc"));
        assert!(!entry.mentions("lentille"));
    }
}
