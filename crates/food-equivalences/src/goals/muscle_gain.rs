use super::model::{ByCategory, NutritionEquivalence as Swap, NutritionGoal, NutritionGoalData};

pub(super) static DATA: NutritionGoalData = NutritionGoalData {
    id: NutritionGoal::MuscleGain,
    title: "Prise de masse musculaire",
    icon: "💪",
    key_principles: &[
        "Viser 1,6 à 2 g de protéines par kilo de poids de corps et par jour",
        "Répartir les protéines sur trois à cinq prises dans la journée",
        "Maintenir un léger surplus calorique",
        "Consommer des glucides complexes autour de l'entraînement",
    ],
    equivalences: ByCategory {
        feculents: &[
            Swap::new(
                "Pâtes blanches",
                "100 g crues",
                "Pâtes de lentilles corail",
                "100 g crues",
                "Deux fois plus de protéines pour la même portion",
                &["pâtes", "pates", "lentilles"],
            )
            .context("Déjeuner"),
            Swap::new(
                "Céréales sucrées",
                "50 g",
                "Porridge d'avoine protéiné",
                "60 g de flocons d'avoine + 250 ml de lait + 1 cuillère de skyr",
                "Glucides complexes et protéines dès le petit-déjeuner",
                &["céréales", "avoine", "porridge"],
            )
            .context("Petit-déjeuner"),
        ],
        proteines: &[
            Swap::new(
                "Jambon blanc",
                "2 tranches",
                "Blanc de poulet",
                "150 g",
                "Plus de protéines, beaucoup moins de sel",
                &["jambon", "poulet", "volaille"],
            ),
            Swap::new(
                "Yaourt aux fruits",
                "1 pot",
                "Skyr nature",
                "150 g",
                "Trois fois plus de protéines, peu de sucre",
                &["yaourt", "skyr", "laitage"],
            )
            .context("Collation"),
            Swap::new(
                "Œufs brouillés au beurre",
                "2 œufs",
                "Omelette de 3 œufs aux épinards",
                "3 œufs + 100 g d'épinards",
                "Apport protéique supérieur avec fer et magnésium",
                &["oeufs", "œufs", "omelette"],
            )
            .context("Petit-déjeuner"),
        ],
        matieres_grasses: &[],
        boissons: &[],
        snacks: &[
            Swap::new(
                "Biscuits",
                "4 biscuits",
                "Fromage blanc, banane et beurre de cacahuète",
                "200 g de fromage blanc + 1 banane + 1 cuillère à café de beurre de cacahuète",
                "Collation complète après l'entraînement",
                &["biscuits", "collation", "post-entraînement"],
            )
            .context("Après l'entraînement"),
            Swap::new(
                "Barre de céréales",
                "1 barre",
                "Mélange d'oléagineux et fruits secs",
                "30 g d'amandes + 20 g de raisins secs",
                "Énergie dense, protéines et bonnes graisses",
                &["barre", "encas", "oléagineux"],
            ),
        ],
        desserts: &[],
        general: &[],
    },
    warning: None,
};
