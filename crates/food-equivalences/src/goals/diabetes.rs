use super::model::{ByCategory, NutritionEquivalence as Swap, NutritionGoal, NutritionGoalData};

pub(super) static DATA: NutritionGoalData = NutritionGoalData {
    id: NutritionGoal::Diabetes,
    title: "Diabète",
    icon: "🩸",
    key_principles: &[
        "Privilégier les aliments à index glycémique bas",
        "Associer toujours les glucides à des fibres, des protéines ou des lipides",
        "Répartir les glucides de façon régulière sur les repas",
        "Éviter les boissons sucrées, y compris les jus de fruits",
        "Pratiquer une activité physique après les repas quand c'est possible",
    ],
    equivalences: ByCategory {
        feculents: &[
            Swap::new(
                "Pain blanc",
                "60 g",
                "Pain de seigle complet",
                "60 g",
                "Index glycémique nettement plus bas",
                &["pain", "baguette", "seigle"],
            ),
            Swap::new(
                "Pommes de terre en purée",
                "200 g",
                "Lentilles vertes",
                "150 g cuites",
                "Fibres solubles qui ralentissent l'absorption du glucose",
                &["pomme de terre", "purée", "lentilles"],
            )
            .context("Déjeuner"),
            Swap::new(
                "Riz blanc",
                "150 g cuit",
                "Riz basmati cuit al dente puis refroidi",
                "150 g",
                "L'amidon résistant formé au refroidissement limite le pic glycémique",
                &["riz", "basmati"],
            ),
        ],
        proteines: &[Swap::new(
            "Poisson pané",
            "150 g",
            "Poisson vapeur et légumineuses",
            "120 g de poisson + 80 g de pois chiches",
            "Supprime les glucides rapides de la panure",
            &["poisson", "pané"],
        )],
        matieres_grasses: &[Swap::new(
            "Beurre",
            "10 g",
            "Huile d'olive",
            "1 cuillère à soupe",
            "Les acides gras mono-insaturés améliorent la sensibilité à l'insuline",
            &["beurre", "huile", "olive"],
        )],
        boissons: &[
            Swap::new(
                "Jus d'orange",
                "20 cl",
                "Orange entière",
                "1 fruit",
                "Les fibres du fruit freinent la montée de la glycémie",
                &["jus", "orange", "jus de fruits"],
            )
            .context("Petit-déjeuner"),
            Swap::new(
                "Soda",
                "33 cl",
                "Eau aromatisée maison",
                "33 cl d'eau + menthe et citron",
                "Aucun sucre ajouté",
                &["soda", "sucré", "boisson"],
            ),
        ],
        snacks: &[Swap::new(
            "Biscuits secs",
            "4 biscuits",
            "Amandes et carré de chocolat noir",
            "15 amandes + 1 carré à 85 %",
            "Collation à très faible charge glycémique",
            &["biscuits", "goûter", "chocolat"],
        )
        .context("Goûter")],
        desserts: &[Swap::new(
            "Tarte aux fruits",
            "1 part",
            "Fruits rouges et yaourt grec",
            "100 g de fruits rouges + 100 g de yaourt grec",
            "Fruits peu sucrés associés à des protéines",
            &["tarte", "dessert", "fruits"],
        )],
        general: &[Swap::new(
            "Sucre dans les boissons chaudes",
            "2 morceaux",
            "Cannelle ou vanille",
            "1 pincée",
            "Apporte une note sucrée sans glucides",
            &["sucre", "café", "thé"],
        )],
    },
    warning: Some(
        "Ces équivalences ne remplacent pas un suivi médical. \
         Adaptez toujours votre traitement avec votre médecin ou votre diététicien.",
    ),
};
