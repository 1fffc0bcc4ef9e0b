use super::model::{ByCategory, NutritionEquivalence as Swap, NutritionGoal, NutritionGoalData};

pub(super) static DATA: NutritionGoalData = NutritionGoalData {
    id: NutritionGoal::DigestiveHealth,
    title: "Confort digestif",
    icon: "🌿",
    key_principles: &[
        "Augmenter les fibres progressivement et boire suffisamment",
        "Intégrer des aliments fermentés pour le microbiote",
        "Manger lentement et dans le calme",
        "Repérer ses aliments déclencheurs plutôt que de tout exclure",
    ],
    equivalences: ByCategory {
        feculents: &[
            Swap::new(
                "Pain de mie industriel",
                "2 tranches",
                "Pain au levain",
                "2 tranches",
                "La fermentation au levain rend le pain plus digeste",
                &["pain", "levain", "pain de mie"],
            ),
            Swap::new(
                "Pâtes blanches",
                "150 g cuites",
                "Sarrasin",
                "150 g cuit",
                "Sans gluten, riche en fibres et en magnésium",
                &["pâtes", "sarrasin", "kasha"],
            ),
        ],
        proteines: &[Swap::new(
            "Pois chiches en boîte",
            "150 g",
            "Lentilles corail",
            "150 g cuites",
            "Sans peau, elles provoquent moins de ballonnements",
            &["pois chiches", "lentilles", "légumineuses"],
        )],
        matieres_grasses: &[Swap::new(
            "Friture",
            "1 portion",
            "Cuisson vapeur avec un filet d'huile d'olive crue",
            "1 cuillère à café",
            "Les graisses cuites à haute température ralentissent la digestion",
            &["friture", "frites", "huile"],
        )],
        boissons: &[
            Swap::new(
                "Soda",
                "33 cl",
                "Kéfir de fruits",
                "25 cl",
                "Boisson fermentée riche en probiotiques",
                &["soda", "kéfir", "boisson"],
            ),
            Swap::new(
                "Café après le repas",
                "1 tasse",
                "Infusion de fenouil ou de menthe",
                "1 tasse",
                "Favorise la digestion et limite les ballonnements",
                &["café", "infusion", "tisane"],
            )
            .context("Après le repas"),
        ],
        snacks: &[Swap::new(
            "Biscuits",
            "3 biscuits",
            "Kiwi",
            "2 fruits",
            "Fibres et actinidine qui facilitent le transit",
            &["biscuits", "kiwi", "transit"],
        )],
        desserts: &[Swap::new(
            "Crème dessert",
            "1 pot",
            "Yaourt au bifidus et compote",
            "1 yaourt + 2 cuillères à soupe de compote",
            "Probiotiques et fibres douces",
            &["crème dessert", "yaourt", "compote"],
        )],
        general: &[],
    },
    warning: Some(
        "Des troubles digestifs persistants, une perte de poids inexpliquée ou du sang \
         dans les selles nécessitent une consultation médicale.",
    ),
};
