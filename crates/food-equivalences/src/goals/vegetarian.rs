use super::model::{ByCategory, NutritionEquivalence as Swap, NutritionGoal, NutritionGoalData};

pub(super) static DATA: NutritionGoalData = NutritionGoalData {
    id: NutritionGoal::Vegetarian,
    title: "Alimentation végétarienne",
    icon: "🥕",
    key_principles: &[
        "Associer céréales et légumineuses pour des protéines complètes",
        "Soigner les apports en fer en les associant à de la vitamine C",
        "Consommer œufs et produits laitiers ou une source de vitamine B12",
        "Intégrer des oléagineux et des graines chaque jour",
    ],
    equivalences: ByCategory {
        feculents: &[Swap::new(
            "Semoule blanche",
            "150 g cuite",
            "Boulgour et pois chiches",
            "100 g de boulgour + 80 g de pois chiches",
            "Association céréale et légumineuse : protéines complètes",
            &["semoule", "boulgour", "couscous"],
        )],
        proteines: &[
            Swap::new(
                "Steak haché",
                "125 g",
                "Galette de lentilles et flocons d'avoine",
                "1 galette de 120 g",
                "Protéines et fer végétaux, riche en fibres",
                &["steak", "burger", "galette"],
            ),
            Swap::new(
                "Blanc de poulet",
                "120 g",
                "Tofu ferme mariné",
                "150 g",
                "Protéines complètes et calcium",
                &["poulet", "tofu", "volaille"],
            ),
            Swap::new(
                "Thon",
                "100 g",
                "Tempeh",
                "100 g",
                "Protéines fermentées, très digestes",
                &["thon", "poisson", "tempeh"],
            ),
        ],
        matieres_grasses: &[Swap::new(
            "Huile de tournesol",
            "1 cuillère à soupe",
            "Huile de lin ou de colza",
            "1 cuillère à soupe",
            "Compense l'absence d'oméga-3 issus du poisson",
            &["huile", "lin", "oméga-3"],
        )],
        boissons: &[Swap::new(
            "Thé au repas",
            "1 tasse",
            "Jus d'agrumes ou eau citronnée",
            "1 verre",
            "La vitamine C favorise l'absorption du fer végétal, le thé la freine",
            &["thé", "fer", "agrumes"],
        )
        .context("Au repas")],
        snacks: &[Swap::new(
            "Chips",
            "30 g",
            "Edamame",
            "100 g",
            "Collation riche en protéines végétales",
            &["chips", "edamame", "apéritif"],
        )],
        desserts: &[],
        general: &[Swap::new(
            "Parmesan",
            "20 g",
            "Levure maltée",
            "2 cuillères à soupe",
            "Goût fromager et vitamines B, sans présure animale",
            &["parmesan", "fromage", "levure"],
        )],
    },
    warning: None,
};
