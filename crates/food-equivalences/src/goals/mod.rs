//! The nutrition-goal catalog: one record per `NutritionGoal`.

mod cholesterol;
mod diabetes;
mod digestive_health;
mod endurance_sport;
mod hypertension;
pub mod model;
mod muscle_gain;
mod pregnancy;
mod seniors;
mod vegetarian;
mod weight_loss;

use model::{NutritionGoal, NutritionGoalData};

/// The record for `goal`. The match is exhaustive, so every goal has a record.
pub fn goal_data(goal: NutritionGoal) -> &'static NutritionGoalData {
    match goal {
        NutritionGoal::WeightLoss => &weight_loss::DATA,
        NutritionGoal::MuscleGain => &muscle_gain::DATA,
        NutritionGoal::Diabetes => &diabetes::DATA,
        NutritionGoal::Hypertension => &hypertension::DATA,
        NutritionGoal::Cholesterol => &cholesterol::DATA,
        NutritionGoal::DigestiveHealth => &digestive_health::DATA,
        NutritionGoal::Pregnancy => &pregnancy::DATA,
        NutritionGoal::Seniors => &seniors::DATA,
        NutritionGoal::EnduranceSport => &endurance_sport::DATA,
        NutritionGoal::Vegetarian => &vegetarian::DATA,
    }
}

/// Every goal record in canonical goal order.
pub fn all_goals() -> impl Iterator<Item = &'static NutritionGoalData> {
    NutritionGoal::ALL.into_iter().map(goal_data)
}
