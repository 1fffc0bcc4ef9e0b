//! Curated food substitutions with two query engines.
//!
//! - The equivalence catalog answers "what can replace butter in a cake?": free search
//!   with [`search_equivalences`] and exact lookup with [`get_equivalences_for_ingredient`].
//! - The nutrition-goal catalog answers "what should I eat instead of white rice to lose
//!   weight?": [`search_nutrition_equivalences`] and [`get_categories_with_equivalences`].
//!
//! Both catalogs are compiled-in constants. Every query function is pure and can be
//! called concurrently from any number of threads.

pub mod catalog;
pub mod error;
pub mod goal_search;
pub mod goals;
pub mod model;
pub mod search;
pub mod validate;

pub use catalog::{equivalences, recipe_categories, RecipeCategory};
pub use error::{CatalogError, ParseError};
pub use goal_search::{
    get_categories_with_equivalences, search_nutrition_equivalences, GoalSearchResults,
};
pub use goals::model::{
    ByCategory, EquivalenceCategory, NutritionEquivalence, NutritionGoal, NutritionGoalData,
};
pub use goals::{all_goals, goal_data};
pub use model::{Alternative, Equivalence, EquivalenceType};
pub use search::{get_equivalences_for_ingredient, search_equivalences};
pub use validate::{validate_catalogs, CatalogStats};
