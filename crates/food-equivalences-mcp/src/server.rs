/// MCP server implementation for the food equivalences catalogs.
///
/// Exposes seven tools:
/// - `search_equivalences`: Substring search over the recipe/nutrition catalog
/// - `get_ingredient_equivalences`: Exact ingredient lookup
/// - `search_goal_equivalences`: Goal-scoped search, per category
/// - `list_goal_categories`: Category counts for one goal
/// - `get_goal`: Title, principles and warning of one goal
/// - `list_goals`: Every supported goal
/// - `list_recipe_categories`: Display categories of the catalog
use std::sync::Arc;

use rmcp::{
    Json, ServerHandler,
    handler::server::router::tool::ToolRouter,
    handler::server::wrapper::Parameters,
    model::*,
    tool, tool_handler, tool_router,
};
use tracing::debug;

use crate::cache::EquivalenceCache;
use food_equivalences::{
    all_goals, get_categories_with_equivalences, get_equivalences_for_ingredient, goal_data,
    recipe_categories, search_equivalences, search_nutrition_equivalences, Alternative,
    Equivalence, EquivalenceType, GoalSearchResults, NutritionEquivalence, NutritionGoal,
    NutritionGoalData,
};
use mcp_common::mcp_api::{
    AlternativeInfo, CategoryInfo, CategorySection, EquivalenceInfo, EquivalenceListResponse,
    GetIngredientParams, GoalCategoriesResponse, GoalDetailResponse, GoalEquivalencesResponse,
    GoalListResponse, GoalParams, GoalSummary, NutritionEquivalenceInfo, RecipeCategoryInfo,
    RecipeCategoryListResponse, SearchEquivalencesParams, SearchGoalEquivalencesParams,
};

#[derive(Clone)]
pub struct FoodEquivalencesServer {
    cache: Arc<EquivalenceCache>,
    tool_router: ToolRouter<FoodEquivalencesServer>,
}

impl FoodEquivalencesServer {
    pub fn new(cache: Arc<EquivalenceCache>) -> Self {
        Self {
            cache,
            tool_router: Self::tool_router(),
        }
    }
}

#[tool_router]
impl FoodEquivalencesServer {
    #[tool(description = "Search ingredient substitutions by name or keyword (e.g. 'beurre', 'butter', 'sucre'). Optionally restrict to type 'recipe' (cooking swaps) or 'nutrition' (healthier swaps). Results keep catalog order.")]
    async fn search_equivalences(
        &self,
        Parameters(params): Parameters<SearchEquivalencesParams>,
    ) -> Result<Json<EquivalenceListResponse>, String> {
        let kind = parse_kind(params.kind.as_deref())?;
        let query = params.query.trim().to_lowercase();
        let filter = kind.map(EquivalenceType::as_str).unwrap_or_default();
        debug!(query = %query, filter, "search_equivalences invoked");

        if let Some(cached) = self
            .cache
            .get_search::<EquivalenceListResponse>("search_equivalences", &query, filter)
            .await
        {
            debug!(query = %query, "search cache hit");
            return Ok(Json(cached));
        }

        let response = to_api_list(search_equivalences(&query, kind));
        self.cache
            .set_search("search_equivalences", &query, filter, &response)
            .await;
        Ok(Json(response))
    }

    #[tool(description = "Get the substitutions recorded for one exact ingredient name (case-insensitive, e.g. 'Beurre'). An ingredient can have several records, one per usage context.")]
    async fn get_ingredient_equivalences(
        &self,
        Parameters(params): Parameters<GetIngredientParams>,
    ) -> Result<Json<EquivalenceListResponse>, String> {
        let kind = parse_kind(params.kind.as_deref())?;
        debug!(ingredient = %params.ingredient, "get_ingredient_equivalences invoked");
        Ok(Json(to_api_list(get_equivalences_for_ingredient(
            &params.ingredient,
            kind,
        ))))
    }

    #[tool(description = "Search the food swaps recommended for a nutrition goal (e.g. 'weight-loss', 'diabetes'). Matches base foods, substitutes and keywords. Omit the query to browse every swap of the goal. Always lists all seven categories.")]
    async fn search_goal_equivalences(
        &self,
        Parameters(params): Parameters<SearchGoalEquivalencesParams>,
    ) -> Result<Json<GoalEquivalencesResponse>, String> {
        let goal = parse_goal(&params.goal)?;
        let query = params
            .query
            .as_deref()
            .map(|q| q.trim().to_lowercase())
            .unwrap_or_default();
        debug!(goal = %goal, query = %query, "search_goal_equivalences invoked");

        if let Some(cached) = self
            .cache
            .get_search::<GoalEquivalencesResponse>(
                "search_goal_equivalences",
                &query,
                goal.as_str(),
            )
            .await
        {
            debug!(goal = %goal, query = %query, "search cache hit");
            return Ok(Json(cached));
        }

        let results = search_nutrition_equivalences(goal, Some(&query));
        let response = to_api_goal_equivalences(goal_data(goal), &results);
        self.cache
            .set_search("search_goal_equivalences", &query, goal.as_str(), &response)
            .await;
        Ok(Json(response))
    }

    #[tool(description = "List which swap categories of a nutrition goal hold swaps, plus the swap count of all seven categories (zero included).")]
    async fn list_goal_categories(
        &self,
        Parameters(params): Parameters<GoalParams>,
    ) -> Result<Json<GoalCategoriesResponse>, String> {
        let goal = parse_goal(&params.goal)?;
        debug!(goal = %goal, "list_goal_categories invoked");
        Ok(Json(GoalCategoriesResponse {
            goal: goal.to_string(),
            populated: get_categories_with_equivalences(goal)
                .into_iter()
                .map(|c| c.to_string())
                .collect(),
            categories: to_api_category_counts(goal_data(goal)),
        }))
    }

    #[tool(description = "Get the description of a nutrition goal: title, icon, key principles, health warning and per-category swap counts.")]
    async fn get_goal(
        &self,
        Parameters(params): Parameters<GoalParams>,
    ) -> Result<Json<GoalDetailResponse>, String> {
        let goal = parse_goal(&params.goal)?;
        debug!(goal = %goal, "get_goal invoked");
        let data = goal_data(goal);
        Ok(Json(GoalDetailResponse {
            goal: goal.to_string(),
            title: data.title.to_string(),
            icon: data.icon.to_string(),
            key_principles: data.key_principles.iter().map(|p| p.to_string()).collect(),
            warning: data.warning.map(str::to_string),
            categories: to_api_category_counts(data),
        }))
    }

    #[tool(description = "List every supported nutrition goal with its identifier, title and total number of swaps.")]
    async fn list_goals(&self) -> Result<Json<GoalListResponse>, String> {
        let goals = all_goals()
            .map(|data| GoalSummary {
                goal: data.id.to_string(),
                title: data.title.to_string(),
                icon: data.icon.to_string(),
                equivalence_count: data.entry_count(),
            })
            .collect();
        Ok(Json(GoalListResponse { goals }))
    }

    #[tool(description = "List the display categories of the ingredient substitution catalog (e.g. 'Matières grasses - Pâtisserie') with their type and number of records.")]
    async fn list_recipe_categories(&self) -> Result<Json<RecipeCategoryListResponse>, String> {
        let categories = recipe_categories()
            .into_iter()
            .map(|c| RecipeCategoryInfo {
                label: c.label.to_string(),
                kind: c.kind.to_string(),
                equivalence_count: c.equivalence_count,
            })
            .collect();
        Ok(Json(RecipeCategoryListResponse { categories }))
    }
}

/// An absent or blank `type` means no filter.
fn parse_kind(kind: Option<&str>) -> Result<Option<EquivalenceType>, String> {
    match kind.map(str::trim) {
        None | Some("") => Ok(None),
        Some(kind) => kind
            .parse::<EquivalenceType>()
            .map(Some)
            .map_err(|e| e.to_string()),
    }
}

fn parse_goal(goal: &str) -> Result<NutritionGoal, String> {
    goal.parse::<NutritionGoal>().map_err(|e| e.to_string())
}

fn to_api_alternative(alt: &Alternative) -> AlternativeInfo {
    AlternativeInfo {
        name: alt.name.to_string(),
        equivalence: alt.equivalence.to_string(),
        interest: alt.interest.map(str::to_string),
        ideal_for: alt.ideal_for.map(str::to_string),
        remarks: alt.remarks.map(str::to_string),
        limits: alt.limits.map(str::to_string),
        variant: alt.variant.map(str::to_string),
    }
}

fn to_api_equivalence(eq: &Equivalence) -> EquivalenceInfo {
    EquivalenceInfo {
        ingredient: eq.ingredient.to_string(),
        category: eq.category.to_string(),
        kind: eq.kind.to_string(),
        keywords: eq.keywords.iter().map(|k| k.to_string()).collect(),
        alternatives: eq.alternatives.iter().map(to_api_alternative).collect(),
    }
}

fn to_api_list(results: Vec<&Equivalence>) -> EquivalenceListResponse {
    EquivalenceListResponse {
        results: results.into_iter().map(to_api_equivalence).collect(),
    }
}

fn to_api_nutrition_equivalence(entry: &NutritionEquivalence) -> NutritionEquivalenceInfo {
    NutritionEquivalenceInfo {
        base_food: entry.base_food.to_string(),
        base_quantity: entry.base_quantity.to_string(),
        substitute: entry.substitute.to_string(),
        substitute_quantity: entry.substitute_quantity.to_string(),
        interest: entry.interest.to_string(),
        context: entry.context.map(str::to_string),
        keywords: entry.keywords.iter().map(|k| k.to_string()).collect(),
    }
}

fn to_api_goal_equivalences(
    data: &NutritionGoalData,
    results: &GoalSearchResults,
) -> GoalEquivalencesResponse {
    GoalEquivalencesResponse {
        goal: data.id.to_string(),
        title: data.title.to_string(),
        icon: data.icon.to_string(),
        categories: results
            .iter()
            .map(|(category, entries)| CategorySection {
                category: category.to_string(),
                label: category.label().to_string(),
                equivalences: entries
                    .iter()
                    .map(|e| to_api_nutrition_equivalence(e))
                    .collect(),
            })
            .collect(),
    }
}

fn to_api_category_counts(data: &NutritionGoalData) -> Vec<CategoryInfo> {
    data.equivalences
        .iter()
        .map(|(category, entries)| CategoryInfo {
            key: category.to_string(),
            label: category.label().to_string(),
            equivalence_count: entries.len(),
        })
        .collect()
}

#[tool_handler]
impl ServerHandler for FoodEquivalencesServer {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            protocol_version: ProtocolVersion::V_2025_06_18,
            capabilities: ServerCapabilities::builder()
                .enable_tools()
                .build(),
            server_info: Implementation {
                name: "food-equivalences".to_string(),
                version: env!("CARGO_PKG_VERSION").to_string(),
                title: None,
                icons: None,
                website_url: None,
            },
            instructions: Some(
                "Food substitution MCP server (French catalog). Use search_equivalences \
                 or get_ingredient_equivalences to replace an ingredient in a recipe or \
                 for nutrition, list_goals and get_goal to discover nutrition goals, \
                 and search_goal_equivalences or list_goal_categories for the swaps \
                 recommended under a given goal."
                    .to_string(),
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mcp_common::redis::RedisCache;

    fn server() -> FoodEquivalencesServer {
        let cache = EquivalenceCache::new(RedisCache::new(None), "test".to_string(), 60);
        FoodEquivalencesServer::new(Arc::new(cache))
    }

    #[test]
    fn tools_publish_output_schemas() {
        let tools = FoodEquivalencesServer::tool_router().list_all();
        for name in [
            "search_equivalences",
            "get_ingredient_equivalences",
            "search_goal_equivalences",
            "list_goal_categories",
            "get_goal",
            "list_goals",
            "list_recipe_categories",
        ] {
            let tool = tools
                .iter()
                .find(|t| t.name == name)
                .unwrap_or_else(|| panic!("missing tool: {name}"));
            assert!(
                tool.output_schema.is_some(),
                "tool {name} should publish output_schema"
            );
        }
    }

    #[test]
    fn blank_kind_means_no_filter() {
        assert_eq!(parse_kind(None), Ok(None));
        assert_eq!(parse_kind(Some("  ")), Ok(None));
        assert_eq!(parse_kind(Some("Recipe")), Ok(Some(EquivalenceType::Recipe)));
        let err = parse_kind(Some("dessert")).unwrap_err();
        assert!(err.contains("recipe") && err.contains("nutrition"), "{err}");
    }

    #[test]
    fn unknown_goal_error_lists_goals() {
        let err = parse_goal("keto").unwrap_err();
        assert!(err.contains("weight-loss"), "{err}");
        assert_eq!(parse_goal(" Diabetes "), Ok(NutritionGoal::Diabetes));
    }

    #[tokio::test]
    async fn search_tool_filters_by_type() {
        let Json(response) = server()
            .search_equivalences(Parameters(SearchEquivalencesParams {
                query: "Beurre".to_string(),
                kind: Some("recipe".to_string()),
            }))
            .await
            .unwrap();
        assert!(response.results.len() >= 2);
        assert!(response.results.iter().all(|r| r.kind == "recipe"));
    }

    #[tokio::test]
    async fn blank_search_returns_empty_list() {
        let Json(response) = server()
            .search_equivalences(Parameters(SearchEquivalencesParams {
                query: "   ".to_string(),
                kind: None,
            }))
            .await
            .unwrap();
        assert!(response.results.is_empty());
    }

    #[tokio::test]
    async fn goal_search_lists_every_category() {
        let Json(response) = server()
            .search_goal_equivalences(Parameters(SearchGoalEquivalencesParams {
                goal: "weight-loss".to_string(),
                query: Some("riz".to_string()),
            }))
            .await
            .unwrap();
        let keys: Vec<&str> = response.categories.iter().map(|c| c.category.as_str()).collect();
        assert_eq!(
            keys,
            food_equivalences::EquivalenceCategory::ALL.map(|c| c.as_str()).to_vec()
        );
        assert_eq!(response.categories[0].equivalences.len(), 1);
        assert!(response.categories[1..].iter().all(|c| c.equivalences.is_empty()));
    }

    #[tokio::test]
    async fn goal_categories_include_empty_ones() {
        let Json(response) = server()
            .list_goal_categories(Parameters(GoalParams {
                goal: "muscle-gain".to_string(),
            }))
            .await
            .unwrap();
        assert_eq!(response.categories.len(), 7);
        let boissons = response
            .categories
            .iter()
            .find(|c| c.key == "boissons")
            .unwrap();
        assert_eq!(boissons.equivalence_count, 0);
        assert_eq!(response.populated, vec!["féculents", "protéines", "snacks"]);
    }

    #[tokio::test]
    async fn unknown_goal_is_a_tool_error() {
        let Err(err) = server()
            .get_goal(Parameters(GoalParams {
                goal: "keto".to_string(),
            }))
            .await
        else {
            panic!("keto should not resolve to a goal");
        };
        assert!(err.contains("vegetarian"), "{err}");
    }

    #[tokio::test]
    async fn list_goals_covers_all_goals() {
        let Json(response) = server().list_goals().await.unwrap();
        assert_eq!(response.goals.len(), NutritionGoal::ALL.len());
        assert_eq!(response.goals[0].goal, "weight-loss");
        assert!(response.goals.iter().all(|g| g.equivalence_count > 0));
    }
}
