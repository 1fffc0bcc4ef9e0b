/// Errors raised by the food equivalence catalogs.
///
/// Searching never fails: an empty result is a normal answer. These errors cover the two
/// places where something can actually be wrong: identifiers received as free text from a
/// collaborator, and integrity violations in the compiled-in datasets.

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseError {
    #[error("unknown equivalence type: '{0}'. Available types: recipe, nutrition")]
    UnknownType(String),

    #[error("unknown nutrition goal: '{input}'. Available goals: {available}")]
    UnknownGoal { input: String, available: String },

    #[error("unknown equivalence category: '{input}'. Available categories: {available}")]
    UnknownCategory { input: String, available: String },
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CatalogError {
    #[error("equivalence #{index} ({ingredient}) has a blank {field}")]
    BlankField {
        index: usize,
        ingredient: String,
        field: &'static str,
    },

    #[error("equivalence #{index} ({ingredient}) has no alternatives")]
    NoAlternatives { index: usize, ingredient: String },

    #[error("equivalence #{index} ({ingredient}) has no keywords")]
    NoKeywords { index: usize, ingredient: String },

    #[error("alternative {position} of equivalence #{index} ({ingredient}) has a blank {field}")]
    BlankAlternativeField {
        index: usize,
        ingredient: String,
        position: usize,
        field: &'static str,
    },

    #[error("goal {registered} is backed by the record for {found}")]
    GoalMismatch { registered: String, found: String },

    #[error("goal {0} has no key principles")]
    NoPrinciples(String),

    #[error("goal {0} has no equivalences in any category")]
    EmptyGoal(String),

    #[error("goal {goal}, category {category}, entry {position} has a blank {field}")]
    BlankGoalField {
        goal: String,
        category: String,
        position: usize,
        field: &'static str,
    },

    #[error("goal {goal}, category {category}, entry {position} ({base_food}) has no keywords")]
    NoGoalKeywords {
        goal: String,
        category: String,
        position: usize,
        base_food: String,
    },
}
