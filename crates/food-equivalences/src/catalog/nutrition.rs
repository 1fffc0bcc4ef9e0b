use crate::model::{Alternative, Equivalence, EquivalenceType::Nutrition};

pub(super) static EQUIVALENCES: &[Equivalence] = &[
    Equivalence {
        ingredient: "Riz blanc",
        category: "Féculents",
        kind: Nutrition,
        keywords: &["riz", "riz blanc", "rice"],
        alternatives: &[
            Alternative::new("Riz complet", "100 g de riz blanc cru → 100 g de riz complet cru")
                .interest("Trois fois plus de fibres, index glycémique plus bas")
                .remarks("Cuisson plus longue, environ 35 minutes"),
            Alternative::new("Quinoa", "100 g de riz cru → 100 g de quinoa cru")
                .interest("Protéines complètes, sans gluten")
                .remarks("Bien rincer avant cuisson pour enlever l'amertume"),
            Alternative::new("Chou-fleur en semoule", "150 g de riz cuit → 200 g de chou-fleur mixé")
                .interest("Cinq fois moins calorique")
                .limits("Peu rassasiant seul, à associer à une protéine"),
        ],
    },
    Equivalence {
        ingredient: "Pain blanc",
        category: "Féculents",
        kind: Nutrition,
        keywords: &["pain", "baguette", "pain blanc", "pain de mie"],
        alternatives: &[
            Alternative::new("Pain complet au levain", "50 g de baguette → 50 g de pain complet au levain")
                .interest("Plus de fibres et de minéraux, meilleure satiété"),
            Alternative::new("Pain de seigle", "50 g de pain blanc → 50 g de pain de seigle")
                .interest("Index glycémique modéré"),
            Alternative::new("Galettes de sarrasin", "50 g de pain → 2 galettes de sarrasin")
                .interest("Sans gluten")
                .ideal_for("Petit-déjeuner salé"),
        ],
    },
    Equivalence {
        ingredient: "Céréales du petit-déjeuner",
        category: "Petit-déjeuner",
        kind: Nutrition,
        keywords: &["céréales", "cereales", "corn flakes", "céréales sucrées", "petit-déjeuner"],
        alternatives: &[
            Alternative::new("Flocons d'avoine", "40 g de céréales sucrées → 40 g de flocons d'avoine")
                .interest("Riches en bêta-glucanes, énergie plus stable")
                .variant("En porridge ou en overnight oats"),
            Alternative::new("Muesli sans sucre ajouté", "40 g de céréales → 40 g de muesli nature")
                .interest("Fibres, fruits secs et oléagineux"),
        ],
    },
    Equivalence {
        ingredient: "Soda",
        category: "Boissons",
        kind: Nutrition,
        keywords: &["soda", "coca", "boisson sucrée", "limonade"],
        alternatives: &[
            Alternative::new("Eau pétillante aromatisée", "33 cl de soda → 33 cl d'eau gazeuse + rondelles d'agrumes")
                .interest("Zéro sucre, garde les bulles"),
            Alternative::new("Thé glacé maison", "33 cl de soda → 33 cl d'infusion froide non sucrée")
                .variant("Ajouter de la menthe fraîche"),
            Alternative::new("Kombucha", "33 cl de soda → 25 cl de kombucha")
                .interest("Peu sucré, boisson fermentée")
                .limits("Contient des traces d'alcool"),
        ],
    },
    Equivalence {
        ingredient: "Jus de fruits",
        category: "Boissons",
        kind: Nutrition,
        keywords: &["jus", "jus de fruits", "jus d'orange"],
        alternatives: &[
            Alternative::new("Fruit entier", "20 cl de jus d'orange → 1 orange")
                .interest("Garde les fibres, sucre absorbé plus lentement"),
            Alternative::new("Eau infusée aux fruits", "20 cl de jus → 20 cl d'eau + fruits frais coupés"),
        ],
    },
    Equivalence {
        ingredient: "Chips",
        category: "Snacks",
        kind: Nutrition,
        keywords: &["chips", "apéritif", "snack salé", "crackers"],
        alternatives: &[
            Alternative::new("Pois chiches grillés", "30 g de chips → 30 g de pois chiches rôtis au four")
                .interest("Protéines et fibres, croquant conservé"),
            Alternative::new("Bâtonnets de légumes", "30 g de chips → 150 g de carottes et concombre + houmous")
                .ideal_for("Apéritif"),
            Alternative::new("Pop-corn nature", "30 g de chips → 20 g de pop-corn maison")
                .interest("Céréale complète, peu calorique sans beurre"),
        ],
    },
    Equivalence {
        ingredient: "Biscuits",
        category: "Snacks",
        kind: Nutrition,
        keywords: &["biscuits", "gâteaux secs", "goûter", "cookies"],
        alternatives: &[
            Alternative::new("Fruit + oléagineux", "3 biscuits → 1 pomme + 10 amandes")
                .interest("Fibres, vitamines et bonnes graisses"),
            Alternative::new("Yaourt nature et fruits rouges", "3 biscuits → 1 yaourt + 80 g de fruits rouges"),
        ],
    },
    Equivalence {
        ingredient: "Crème dessert",
        category: "Desserts",
        kind: Nutrition,
        keywords: &["crème dessert", "flan", "danette", "dessert lacté"],
        alternatives: &[
            Alternative::new("Fromage blanc au cacao", "1 crème dessert → 100 g de fromage blanc + 1 cuillère à café de cacao")
                .interest("Deux fois plus de protéines, moins de sucre"),
            Alternative::new("Pudding de chia", "1 crème dessert → 2 cuillères à soupe de chia + 120 ml de lait")
                .interest("Oméga-3 et fibres"),
        ],
    },
    Equivalence {
        ingredient: "Glace",
        category: "Desserts",
        kind: Nutrition,
        keywords: &["glace", "crème glacée", "sorbet"],
        alternatives: &[
            Alternative::new("Nice cream", "2 boules de glace → 1 banane congelée mixée")
                .interest("Sans sucre ajouté ni matière grasse"),
            Alternative::new("Yaourt glacé maison", "2 boules → 150 g de yaourt grec congelé avec des fruits"),
        ],
    },
    Equivalence {
        ingredient: "Charcuterie",
        category: "Protéines",
        kind: Nutrition,
        keywords: &["charcuterie", "saucisson", "jambon", "rillettes", "pâté"],
        alternatives: &[
            Alternative::new("Blanc de poulet", "50 g de saucisson → 80 g de blanc de poulet")
                .interest("Protéines maigres, beaucoup moins de sel"),
            Alternative::new("Maquereau", "50 g de rillettes → 50 g de rillettes de maquereau maison")
                .interest("Riche en oméga-3"),
            Alternative::new("Œuf dur", "50 g de pâté → 1 œuf dur")
                .interest("Protéines de haute qualité"),
        ],
    },
    Equivalence {
        ingredient: "Viande rouge",
        category: "Protéines",
        kind: Nutrition,
        keywords: &["viande rouge", "boeuf", "bœuf", "steak", "agneau"],
        alternatives: &[
            Alternative::new("Poisson gras", "120 g de bœuf → 120 g de saumon ou de sardines")
                .interest("Oméga-3 pour la santé cardiovasculaire"),
            Alternative::new("Légumineuses + céréale", "120 g de viande → 150 g de lentilles cuites + 100 g de riz")
                .interest("Protéines complètes, fibres, moins de graisses saturées"),
            Alternative::new("Volaille", "120 g de bœuf → 120 g de poulet ou de dinde")
                .limits("Moins riche en fer"),
        ],
    },
    Equivalence {
        ingredient: "Fromage",
        category: "Produits laitiers",
        kind: Nutrition,
        keywords: &["fromage", "camembert", "emmental", "raclette"],
        alternatives: &[
            Alternative::new("Fromage frais allégé", "30 g de fromage → 60 g de fromage frais à 3 % MG")
                .interest("Calcium conservé, trois fois moins gras"),
            Alternative::new("Yaourt nature", "30 g de fromage → 1 yaourt nature")
                .interest("Calcium pour peu de calories")
                .ideal_for("Fin de repas"),
        ],
    },
    Equivalence {
        ingredient: "Sel",
        category: "Assaisonnements",
        kind: Nutrition,
        keywords: &["sel", "salé", "sodium"],
        alternatives: &[
            Alternative::new("Herbes et épices", "1 pincée de sel → herbes de Provence, curcuma, paprika à volonté")
                .interest("Relève le goût sans sodium"),
            Alternative::new("Gomasio", "1 cuillère à café de sel → 1 cuillère à café de gomasio")
                .interest("Sésame grillé, moins de sodium par portion"),
            Alternative::new("Jus de citron", "1 pincée de sel → quelques gouttes de citron")
                .ideal_for("Poissons, légumes vapeur"),
        ],
    },
];
