use super::model::{ByCategory, NutritionEquivalence as Swap, NutritionGoal, NutritionGoalData};

pub(super) static DATA: NutritionGoalData = NutritionGoalData {
    id: NutritionGoal::WeightLoss,
    title: "Perte de poids",
    icon: "⚖️",
    key_principles: &[
        "Créer un déficit calorique modéré, sans jamais sauter de repas",
        "Privilégier les aliments rassasiants : fibres, protéines, légumes",
        "Remplir la moitié de l'assiette avec des légumes",
        "Limiter les boissons sucrées et l'alcool, qui n'apportent aucune satiété",
    ],
    equivalences: ByCategory {
        feculents: &[
            Swap::new(
                "Riz blanc",
                "150 g cuit",
                "Riz basmati complet et lentilles",
                "100 g de riz basmati complet + 50 g de lentilles cuites",
                "Plus de fibres et de protéines pour une satiété prolongée",
                &["riz", "riz blanc", "basmati", "lentilles"],
            )
            .context("Déjeuner"),
            Swap::new(
                "Pâtes blanches",
                "200 g cuites",
                "Pâtes complètes et courgettes",
                "120 g de pâtes complètes + 100 g de courgettes en spirales",
                "Volume identique pour un tiers de calories en moins",
                &["pâtes", "pates", "spaghetti"],
            )
            .context("Dîner"),
            Swap::new(
                "Pain de mie",
                "2 tranches",
                "Pain complet au levain",
                "1 tranche épaisse",
                "Index glycémique plus bas, rassasie davantage",
                &["pain", "tartine", "sandwich"],
            )
            .context("Petit-déjeuner"),
        ],
        proteines: &[
            Swap::new(
                "Steak haché 20 % MG",
                "125 g",
                "Steak haché 5 % MG",
                "125 g",
                "Quatre fois moins de graisses saturées, autant de protéines",
                &["steak", "viande hachée", "boeuf"],
            ),
            Swap::new(
                "Poisson pané",
                "2 pièces",
                "Filet de cabillaud en papillote",
                "150 g",
                "Supprime la panure frite et ses matières grasses",
                &["poisson", "pané", "cabillaud"],
            )
            .context("Dîner"),
        ],
        matieres_grasses: &[Swap::new(
            "Huile pour l'assaisonnement",
            "2 cuillères à soupe",
            "Vinaigrette allégée au yaourt",
            "2 cuillères à soupe de yaourt + moutarde + 1 cuillère à café d'huile de colza",
            "Divise par trois les calories de la sauce",
            &["huile", "vinaigrette", "sauce salade"],
        )],
        boissons: &[
            Swap::new(
                "Soda",
                "33 cl",
                "Eau gazeuse citronnée",
                "33 cl",
                "Économise environ 140 kcal par canette",
                &["soda", "coca", "boisson sucrée"],
            ),
            Swap::new(
                "Café latte sucré",
                "1 grande tasse",
                "Café noisette sans sucre",
                "1 tasse",
                "Limite le sucre et le lait entier",
                &["café", "latte", "cappuccino"],
            )
            .context("Matin"),
        ],
        snacks: &[
            Swap::new(
                "Barre chocolatée",
                "1 barre de 50 g",
                "Pomme et amandes",
                "1 pomme + 10 amandes",
                "Fibres et bonnes graisses pour deux fois moins de calories",
                &["barre", "chocolat", "goûter", "encas"],
            )
            .context("Goûter"),
            Swap::new(
                "Chips",
                "1 petit paquet",
                "Bâtonnets de légumes et houmous",
                "150 g de légumes + 2 cuillères à soupe de houmous",
                "Croquant conservé, densité calorique bien plus faible",
                &["chips", "apéritif"],
            )
            .context("Apéritif"),
        ],
        desserts: &[Swap::new(
            "Crème glacée",
            "2 boules",
            "Fromage blanc aux fruits rouges",
            "150 g de fromage blanc 0 % + 80 g de fruits rouges",
            "Protéines rassasiantes, peu de sucres ajoutés",
            &["glace", "crème glacée", "dessert"],
        )],
        general: &[Swap::new(
            "Plat préparé industriel",
            "1 barquette",
            "Assiette composée maison",
            "½ légumes, ¼ protéines, ¼ féculents complets",
            "Maîtrise des portions, du sel et des matières grasses",
            &["plat préparé", "plat cuisiné", "assiette"],
        )],
    },
    warning: Some(
        "Une perte de poids durable se situe entre 0,5 et 1 kg par semaine. \
         Au-delà, consultez un professionnel de santé.",
    ),
};
