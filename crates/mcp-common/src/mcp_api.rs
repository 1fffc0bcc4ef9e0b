use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct SearchEquivalencesParams {
    /// Free text matched against ingredient names and keywords, e.g. "beurre".
    pub query: String,
    /// Optional usage filter: "recipe" or "nutrition".
    #[serde(rename = "type")]
    pub kind: Option<String>,
}

#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct GetIngredientParams {
    /// Exact ingredient name, e.g. "Beurre" (case-insensitive).
    pub ingredient: String,
    /// Optional usage filter: "recipe" or "nutrition".
    #[serde(rename = "type")]
    pub kind: Option<String>,
}

#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct SearchGoalEquivalencesParams {
    /// Goal identifier such as "weight-loss" or "muscle-gain".
    pub goal: String,
    /// Optional free text matched against base foods, substitutes and keywords.
    /// Omit it to browse every swap of the goal.
    pub query: Option<String>,
}

#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct GoalParams {
    /// Goal identifier such as "weight-loss" or "diabetes".
    pub goal: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct AlternativeInfo {
    pub name: String,
    pub equivalence: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub interest: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ideal_for: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub remarks: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limits: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub variant: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct EquivalenceInfo {
    pub ingredient: String,
    pub category: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub keywords: Vec<String>,
    pub alternatives: Vec<AlternativeInfo>,
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct EquivalenceListResponse {
    pub results: Vec<EquivalenceInfo>,
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct NutritionEquivalenceInfo {
    pub base_food: String,
    pub base_quantity: String,
    pub substitute: String,
    pub substitute_quantity: String,
    pub interest: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub context: Option<String>,
    pub keywords: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct CategorySection {
    /// Category key, e.g. "féculents".
    pub category: String,
    pub label: String,
    pub equivalences: Vec<NutritionEquivalenceInfo>,
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct GoalEquivalencesResponse {
    pub goal: String,
    pub title: String,
    pub icon: String,
    /// Every category, in canonical order, even when empty.
    pub categories: Vec<CategorySection>,
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct CategoryInfo {
    pub key: String,
    pub label: String,
    pub equivalence_count: usize,
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct GoalCategoriesResponse {
    pub goal: String,
    /// Keys of the categories holding at least one swap, in canonical order.
    pub populated: Vec<String>,
    /// Every category, in canonical order, even when empty.
    pub categories: Vec<CategoryInfo>,
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct GoalDetailResponse {
    pub goal: String,
    pub title: String,
    pub icon: String,
    pub key_principles: Vec<String>,
    pub warning: Option<String>,
    pub categories: Vec<CategoryInfo>,
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct GoalSummary {
    pub goal: String,
    pub title: String,
    pub icon: String,
    pub equivalence_count: usize,
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct GoalListResponse {
    pub goals: Vec<GoalSummary>,
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct RecipeCategoryInfo {
    pub label: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub equivalence_count: usize,
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct RecipeCategoryListResponse {
    pub categories: Vec<RecipeCategoryInfo>,
}
