use super::model::{ByCategory, NutritionEquivalence as Swap, NutritionGoal, NutritionGoalData};

pub(super) static DATA: NutritionGoalData = NutritionGoalData {
    id: NutritionGoal::EnduranceSport,
    title: "Sport d'endurance",
    icon: "🏃",
    key_principles: &[
        "Recharger les réserves de glycogène avec des glucides complexes",
        "S'hydrater avant, pendant et après l'effort",
        "Récupérer dans les deux heures avec glucides et protéines",
        "Tester l'alimentation de course à l'entraînement, jamais le jour J",
    ],
    equivalences: ByCategory {
        feculents: &[
            Swap::new(
                "Viennoiserie avant l'effort",
                "1 croissant",
                "Pain et miel",
                "2 tranches + 1 cuillère à café de miel",
                "Glucides digestes, peu de graisses avant l'effort",
                &["croissant", "pain", "miel", "avant course"],
            )
            .context("Avant l'effort"),
            Swap::new(
                "Frites",
                "150 g",
                "Patate douce rôtie",
                "200 g",
                "Glucides complexes et vitamine A, sans friture",
                &["frites", "patate douce", "pommes de terre"],
            ),
        ],
        proteines: &[Swap::new(
            "Boisson protéinée industrielle",
            "1 shaker",
            "Lait chocolaté",
            "400 ml",
            "Ratio glucides/protéines adapté à la récupération",
            &["protéine", "shaker", "récupération"],
        )
        .context("Après l'effort")],
        matieres_grasses: &[],
        boissons: &[
            Swap::new(
                "Boisson énergisante",
                "25 cl",
                "Boisson d'effort maison",
                "500 ml d'eau + 30 g de sirop + 1 pincée de sel",
                "Glucides et sodium sans excès de caféine",
                &["boisson énergisante", "isotonique", "hydratation"],
            )
            .context("Pendant l'effort"),
            Swap::new(
                "Eau seule sur effort long",
                "500 ml",
                "Eau riche en bicarbonates",
                "500 ml",
                "Compense les pertes minérales de la transpiration",
                &["eau", "minéraux", "hydratation"],
            ),
        ],
        snacks: &[
            Swap::new(
                "Barre chocolatée",
                "1 barre",
                "Pâte de fruits et amandes",
                "2 pâtes de fruits + 5 amandes",
                "Sucres rapides faciles à digérer pendant l'effort",
                &["barre", "pâte de fruits", "ravitaillement"],
            )
            .context("Pendant l'effort"),
            Swap::new(
                "Gel énergétique",
                "1 gel",
                "Dattes",
                "3 dattes",
                "Sucres naturels, potassium et magnésium",
                &["gel", "dattes", "ravitaillement"],
            ),
        ],
        desserts: &[Swap::new(
            "Gâteau au chocolat",
            "1 part",
            "Riz au lait maison",
            "150 g",
            "Glucides et protéines pour la récupération",
            &["gâteau", "riz au lait", "récupération"],
        )
        .context("Après l'effort")],
        general: &[],
    },
    warning: None,
};
