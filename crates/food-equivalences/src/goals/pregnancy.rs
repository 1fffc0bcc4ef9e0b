use super::model::{ByCategory, NutritionEquivalence as Swap, NutritionGoal, NutritionGoalData};

pub(super) static DATA: NutritionGoalData = NutritionGoalData {
    id: NutritionGoal::Pregnancy,
    title: "Grossesse",
    icon: "🤰",
    key_principles: &[
        "Couvrir les besoins en folates, fer, iode et oméga-3",
        "Écarter les aliments à risque de listériose et de toxoplasmose",
        "Bannir totalement l'alcool",
        "Manger pour deux en qualité, pas en quantité",
    ],
    equivalences: ByCategory {
        feculents: &[Swap::new(
            "Pâtes blanches",
            "150 g cuites",
            "Quinoa",
            "150 g cuit",
            "Apporte fer et folates en plus des glucides",
            &["pâtes", "quinoa"],
        )],
        proteines: &[
            Swap::new(
                "Saumon fumé",
                "2 tranches",
                "Saumon cuit au four",
                "120 g",
                "Oméga-3 conservés sans risque de listériose",
                &["saumon", "poisson fumé", "listeria"],
            ),
            Swap::new(
                "Steak saignant",
                "150 g",
                "Steak bien cuit",
                "150 g",
                "La cuisson à cœur écarte le risque de toxoplasmose",
                &["steak", "viande", "toxoplasmose"],
            ),
            Swap::new(
                "Œuf mollet",
                "2 œufs",
                "Œuf dur",
                "2 œufs",
                "Le jaune bien cuit élimine le risque de salmonelle",
                &["oeuf", "œuf", "salmonelle"],
            )
            .context("Petit-déjeuner"),
        ],
        matieres_grasses: &[Swap::new(
            "Huile de tournesol",
            "1 cuillère à soupe",
            "Huile de colza ou de noix",
            "1 cuillère à soupe",
            "Oméga-3 utiles au développement cérébral du bébé",
            &["huile", "colza", "noix"],
        )],
        boissons: &[
            Swap::new(
                "Vin",
                "1 verre",
                "Jus de raisin pétillant coupé d'eau",
                "1 verre",
                "Aucune consommation d'alcool n'est sans risque pendant la grossesse",
                &["vin", "alcool", "apéritif"],
            ),
            Swap::new(
                "Café",
                "3 tasses",
                "Chicorée ou café décaféiné",
                "à partir de la deuxième tasse",
                "Limite la caféine à moins de 200 mg par jour",
                &["café", "caféine", "chicorée"],
            ),
        ],
        snacks: &[Swap::new(
            "Fromage au lait cru",
            "30 g",
            "Fromage à pâte cuite pasteurisé",
            "30 g",
            "Calcium sans risque de listériose",
            &["fromage", "lait cru", "camembert"],
        )],
        desserts: &[Swap::new(
            "Mousse au chocolat maison",
            "1 ramequin",
            "Crème au chocolat cuite",
            "1 ramequin",
            "Évite les œufs crus",
            &["mousse", "chocolat", "oeufs crus"],
        )],
        general: &[],
    },
    warning: Some(
        "Chaque grossesse est unique : suivez les recommandations de votre sage-femme \
         ou de votre médecin, notamment pour la supplémentation.",
    ),
};
