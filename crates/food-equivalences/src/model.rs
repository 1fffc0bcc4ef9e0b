use std::fmt;
use std::str::FromStr;

use serde::Serialize;

use crate::error::ParseError;

/// How an equivalence is meant to be used: swapping an ingredient inside a recipe, or
/// swapping a food for nutritional reasons.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum EquivalenceType {
    Recipe,
    Nutrition,
}

impl EquivalenceType {
    pub const ALL: [Self; 2] = [Self::Recipe, Self::Nutrition];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Recipe => "recipe",
            Self::Nutrition => "nutrition",
        }
    }
}

impl fmt::Display for EquivalenceType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for EquivalenceType {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        Self::ALL
            .into_iter()
            .find(|t| t.as_str().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| ParseError::UnknownType(wanted.to_string()))
    }
}

/// One concrete substitute for an ingredient.
///
/// `equivalence` is prose ("100 g de beurre → 80 g d'huile"), never parsed into a ratio.
/// The optional annotations are display text only.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Alternative {
    pub name: &'static str,
    pub equivalence: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub interest: Option<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ideal_for: Option<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub remarks: Option<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limits: Option<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub variant: Option<&'static str>,
}

impl Alternative {
    pub const fn new(name: &'static str, equivalence: &'static str) -> Self {
        Self {
            name,
            equivalence,
            interest: None,
            ideal_for: None,
            remarks: None,
            limits: None,
            variant: None,
        }
    }

    pub const fn interest(self, text: &'static str) -> Self {
        Self {
            interest: Some(text),
            ..self
        }
    }

    pub const fn ideal_for(self, text: &'static str) -> Self {
        Self {
            ideal_for: Some(text),
            ..self
        }
    }

    pub const fn remarks(self, text: &'static str) -> Self {
        Self {
            remarks: Some(text),
            ..self
        }
    }

    pub const fn limits(self, text: &'static str) -> Self {
        Self {
            limits: Some(text),
            ..self
        }
    }

    pub const fn variant(self, text: &'static str) -> Self {
        Self {
            variant: Some(text),
            ..self
        }
    }
}

/// One substitution topic: an ingredient, in a given usage context, and its alternatives.
///
/// The same `ingredient` may appear in several records (butter for pastry, butter on
/// toast), so records are never keyed by ingredient alone. `category` is a free-text
/// display label, not a closed set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Equivalence {
    pub ingredient: &'static str,
    pub category: &'static str,
    #[serde(rename = "type")]
    pub kind: EquivalenceType,
    pub keywords: &'static [&'static str],
    /// Display order.
    pub alternatives: &'static [Alternative],
}

impl Equivalence {
    /// Substring match of an already normalized (trimmed, lowercased) needle against the
    /// ingredient name and every keyword.
    pub(crate) fn mentions(&self, needle: &str) -> bool {
        self.ingredient.to_lowercase().contains(needle)
            || self
                .keywords
                .iter()
                .any(|k| k.to_lowercase().contains(needle))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_type_is_case_insensitive() {
        assert_eq!("recipe".parse::<EquivalenceType>(), Ok(EquivalenceType::Recipe));
        assert_eq!(" Nutrition ".parse::<EquivalenceType>(), Ok(EquivalenceType::Nutrition));
        assert_eq!(
            "dessert".parse::<EquivalenceType>(),
            Err(ParseError::UnknownType("dessert".to_string()))
        );
    }

    #[test]
    fn alternative_builder_sets_only_requested_annotations() {
        let alt = Alternative::new("Huile de colza", "100 g → 80 g")
            .interest("Riche en oméga-3")
            .limits("Goût marqué");
        assert_eq!(alt.interest, Some("Riche en oméga-3"));
        assert_eq!(alt.limits, Some("Goût marqué"));
        assert_eq!(alt.ideal_for, None);
        assert_eq!(alt.remarks, None);
        assert_eq!(alt.variant, None);
    }

    #[test]
    fn equivalence_serializes_type_and_camel_case_fields() {
        static ALTS: [Alternative; 1] =
            [Alternative::new("Compote", "100 g → 100 g").ideal_for("Muffins")];
        let eq = Equivalence {
            ingredient: "Beurre",
            category: "Test",
            kind: EquivalenceType::Recipe,
            keywords: &["beurre"],
            alternatives: &ALTS,
        };
        let json = serde_json::to_value(eq).unwrap();
        assert_eq!(json["type"], "recipe");
        assert_eq!(json["alternatives"][0]["idealFor"], "Muffins");
        assert!(json["alternatives"][0].get("remarks").is_none());
    }

    #[test]
    fn mentions_checks_ingredient_and_keywords() {
        let eq = Equivalence {
            ingredient: "Crème fraîche",
            category: "Test",
            kind: EquivalenceType::Recipe,
            keywords: &["creme", "crème épaisse"],
            alternatives: &[],
        };
        assert!(eq.mentions("fraîche"));
        assert!(eq.mentions("paisse"));
        assert!(eq.mentions("creme"));
        assert!(!eq.mentions("lait"));
    }
}
