use super::model::{ByCategory, NutritionEquivalence as Swap, NutritionGoal, NutritionGoalData};

pub(super) static DATA: NutritionGoalData = NutritionGoalData {
    id: NutritionGoal::Seniors,
    title: "Bien vieillir",
    icon: "🧓",
    key_principles: &[
        "Maintenir les apports en protéines pour préserver la masse musculaire",
        "Assurer calcium et vitamine D pour la santé osseuse",
        "Boire régulièrement, même sans soif",
        "Enrichir les plats plutôt que d'augmenter les portions",
    ],
    equivalences: ByCategory {
        feculents: &[Swap::new(
            "Biscottes",
            "3 biscottes",
            "Pain complet trempé dans du lait",
            "1 tranche + 100 ml de lait",
            "Plus de fibres et de calcium, texture facile à mâcher",
            &["biscottes", "pain", "petit-déjeuner"],
        )
        .context("Petit-déjeuner")],
        proteines: &[
            Swap::new(
                "Viande dure",
                "100 g",
                "Poisson émietté ou viande hachée",
                "100 g",
                "Mêmes protéines, mastication plus facile",
                &["viande", "poisson", "mastication"],
            ),
            Swap::new(
                "Soupe de légumes",
                "1 bol",
                "Soupe enrichie en lentilles corail",
                "1 bol + 30 g de lentilles",
                "Ajoute des protéines sans augmenter le volume",
                &["soupe", "potage", "lentilles"],
            )
            .context("Dîner"),
        ],
        matieres_grasses: &[],
        boissons: &[Swap::new(
            "Thé",
            "1 tasse",
            "Lait chaud aromatisé",
            "1 tasse",
            "Hydrate tout en apportant calcium et protéines",
            &["thé", "lait", "hydratation"],
        )],
        snacks: &[Swap::new(
            "Biscuits secs",
            "3 biscuits",
            "Fromage et fruit",
            "30 g de fromage + 1 poire",
            "Calcium et protéines pour la collation",
            &["biscuits", "collation", "fromage"],
        )
        .context("Goûter")],
        desserts: &[Swap::new(
            "Compote",
            "1 pot",
            "Flan aux œufs",
            "1 ramequin",
            "Protéines et calcium en plus",
            &["compote", "flan", "dessert"],
        )],
        general: &[Swap::new(
            "Purée nature",
            "200 g",
            "Purée enrichie",
            "200 g + 1 jaune d'œuf + 20 g de fromage râpé",
            "Enrichit sans augmenter la portion",
            &["purée", "enrichissement", "dénutrition"],
        )],
    },
    warning: Some(
        "Une perte d'appétit ou de poids chez la personne âgée doit être signalée au médecin : \
         la dénutrition s'installe vite.",
    ),
};
