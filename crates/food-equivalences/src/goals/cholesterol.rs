use super::model::{ByCategory, NutritionEquivalence as Swap, NutritionGoal, NutritionGoalData};

pub(super) static DATA: NutritionGoalData = NutritionGoalData {
    id: NutritionGoal::Cholesterol,
    title: "Cholestérol",
    icon: "🫀",
    key_principles: &[
        "Réduire les graisses saturées : beurre, fromages gras, viandes grasses",
        "Privilégier les huiles de colza, de noix et d'olive",
        "Manger du poisson gras deux fois par semaine",
        "Augmenter les fibres solubles : avoine, légumineuses, fruits",
    ],
    equivalences: ByCategory {
        feculents: &[Swap::new(
            "Viennoiserie",
            "1 croissant",
            "Flocons d'avoine",
            "40 g",
            "Les bêta-glucanes de l'avoine aident à réduire le LDL",
            &["croissant", "viennoiserie", "avoine"],
        )
        .context("Petit-déjeuner")],
        proteines: &[
            Swap::new(
                "Entrecôte",
                "150 g",
                "Maquereau ou saumon",
                "150 g",
                "Remplace les graisses saturées par des oméga-3",
                &["entrecôte", "viande rouge", "poisson gras"],
            ),
            Swap::new(
                "Saucisses",
                "2 pièces",
                "Galettes de pois chiches",
                "2 galettes",
                "Fibres solubles et aucune graisse animale",
                &["saucisses", "charcuterie", "pois chiches"],
            ),
        ],
        matieres_grasses: &[
            Swap::new(
                "Beurre",
                "10 g",
                "Huile de colza",
                "1 cuillère à soupe",
                "Riche en oméga-3, pauvre en graisses saturées",
                &["beurre", "colza"],
            ),
            Swap::new(
                "Crème fraîche",
                "2 cuillères à soupe",
                "Yaourt grec allégé",
                "2 cuillères à soupe",
                "Texture onctueuse avec cinq fois moins de graisses saturées",
                &["crème", "creme fraiche", "sauce"],
            ),
        ],
        boissons: &[],
        snacks: &[Swap::new(
            "Chips",
            "30 g",
            "Noix",
            "20 g",
            "Les acides gras polyinsaturés des noix améliorent le profil lipidique",
            &["chips", "apéritif", "noix"],
        )],
        desserts: &[Swap::new(
            "Pâtisserie à la crème",
            "1 part",
            "Pomme au four à la cannelle",
            "1 pomme",
            "Pectine et fibres solubles, sans graisses saturées",
            &["pâtisserie", "gâteau", "pomme"],
        )],
        general: &[Swap::new(
            "Fromage à pâte dure",
            "40 g",
            "Fromage frais à 20 % MG",
            "60 g",
            "Calcium conservé avec moins de graisses saturées",
            &["fromage", "emmental", "comté"],
        )],
    },
    warning: Some(
        "En cas d'hypercholestérolémie familiale ou de traitement par statines, \
         ces conseils complètent le suivi médical sans le remplacer.",
    ),
};
