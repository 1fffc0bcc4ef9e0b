use super::model::{ByCategory, NutritionEquivalence as Swap, NutritionGoal, NutritionGoalData};

pub(super) static DATA: NutritionGoalData = NutritionGoalData {
    id: NutritionGoal::Hypertension,
    title: "Hypertension",
    icon: "❤️",
    key_principles: &[
        "Limiter le sel à moins de 5 g par jour",
        "Augmenter les apports en potassium : fruits, légumes, légumineuses",
        "Se méfier du sel caché dans le pain, la charcuterie et les plats préparés",
        "Limiter l'alcool",
    ],
    equivalences: ByCategory {
        feculents: &[Swap::new(
            "Pain de boulangerie",
            "1/4 de baguette",
            "Pain sans sel ajouté",
            "1/4 de baguette",
            "Le pain est la première source de sel de l'alimentation",
            &["pain", "baguette", "sel"],
        )],
        proteines: &[
            Swap::new(
                "Charcuterie",
                "50 g",
                "Blanc de poulet rôti maison",
                "80 g",
                "Jusqu'à dix fois moins de sodium",
                &["charcuterie", "jambon", "saucisson"],
            ),
            Swap::new(
                "Thon en conserve",
                "1 boîte",
                "Sardines fraîches grillées",
                "120 g",
                "Moins de sel, riches en oméga-3",
                &["thon", "conserve", "poisson"],
            ),
        ],
        matieres_grasses: &[Swap::new(
            "Beurre demi-sel",
            "10 g",
            "Beurre doux ou huile de colza",
            "10 g",
            "Supprime le sel ajouté",
            &["beurre", "demi-sel"],
        )],
        boissons: &[Swap::new(
            "Eau gazeuse riche en sodium",
            "1 l",
            "Eau plate ou gazeuse pauvre en sodium",
            "1 l",
            "Certaines eaux gazeuses dépassent 1 g de sodium par litre",
            &["eau gazeuse", "eau pétillante", "sodium"],
        )],
        snacks: &[Swap::new(
            "Cacahuètes salées",
            "30 g",
            "Noix et amandes nature",
            "30 g",
            "Mêmes bonnes graisses, sans sel, avec du potassium",
            &["cacahuètes", "apéritif", "noix"],
        )
        .context("Apéritif")],
        desserts: &[Swap::new(
            "Viennoiserie",
            "1 pièce",
            "Banane",
            "1 fruit",
            "Très riche en potassium, sans sel caché",
            &["viennoiserie", "croissant", "banane"],
        )
        .context("Petit-déjeuner")],
        general: &[
            Swap::new(
                "Sel de table",
                "1 pincée",
                "Herbes, épices et zestes",
                "à volonté",
                "Relève le goût sans sodium",
                &["sel", "assaisonnement", "épices"],
            ),
            Swap::new(
                "Bouillon cube",
                "1 cube",
                "Bouillon maison de légumes",
                "250 ml",
                "Un cube contient près de 5 g de sel",
                &["bouillon", "cube", "soupe"],
            ),
        ],
    },
    warning: Some(
        "En cas de traitement antihypertenseur ou d'insuffisance rénale, \
         demandez l'avis de votre médecin avant d'augmenter vos apports en potassium.",
    ),
};
