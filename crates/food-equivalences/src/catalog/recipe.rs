use crate::model::{Alternative, Equivalence, EquivalenceType::Recipe};

pub(super) static EQUIVALENCES: &[Equivalence] = &[
    Equivalence {
        ingredient: "Beurre",
        category: "Matières grasses - Pâtisserie",
        kind: Recipe,
        keywords: &["beurre", "beurre doux", "beurre demi-sel", "matière grasse", "butter"],
        alternatives: &[
            Alternative::new("Huile de colza", "100 g de beurre → 80 g d'huile de colza")
                .interest("Riche en oméga-3, moins d'acides gras saturés")
                .ideal_for("Cakes, muffins, pains d'épices")
                .limits("Ne convient pas aux pâtes feuilletées ni aux sablés"),
            Alternative::new("Compote de pommes", "100 g de beurre → 100 g de compote sans sucre ajouté")
                .interest("Divise l'apport calorique par sept")
                .ideal_for("Brownies, gâteaux moelleux, muffins")
                .remarks("Réduire légèrement le sucre de la recette")
                .limits("Texture plus dense, moins croustillante"),
            Alternative::new("Purée d'oléagineux", "100 g de beurre → 80 g de purée d'amande ou de noisette")
                .interest("Apporte fibres, protéines et bonnes graisses")
                .ideal_for("Cookies, sablés, crumbles")
                .variant("Purée de cajou pour un goût plus neutre"),
            Alternative::new("Fromage blanc", "100 g de beurre → 50 g de fromage blanc + 25 g d'huile")
                .ideal_for("Cheesecakes, gâteaux au yaourt")
                .limits("À éviter pour les pâtes brisées"),
        ],
    },
    Equivalence {
        ingredient: "Beurre",
        category: "Matières grasses - Tartines",
        kind: Recipe,
        keywords: &["beurre", "tartine", "pain beurré", "butter"],
        alternatives: &[
            Alternative::new("Purée d'amande complète", "10 g de beurre → 10 g de purée d'amande")
                .interest("Source de magnésium et de vitamine E"),
            Alternative::new("Avocat écrasé", "10 g de beurre → 20 g d'avocat")
                .interest("Acides gras mono-insaturés et fibres")
                .remarks("Ajouter un filet de citron pour éviter l'oxydation"),
            Alternative::new("Fromage frais léger", "10 g de beurre → 15 g de fromage frais à 5 % MG")
                .ideal_for("Tartines salées"),
            Alternative::new("Margarine végétale", "10 g de beurre → 10 g de margarine")
                .limits("Choisir une margarine sans huile de palme ni graisses hydrogénées"),
        ],
    },
    Equivalence {
        ingredient: "Beurre",
        category: "Matières grasses - Cuisson",
        kind: Recipe,
        keywords: &["beurre", "poêler", "saisir", "butter"],
        alternatives: &[
            Alternative::new("Huile d'olive", "10 g de beurre → 1 cuillère à soupe d'huile d'olive")
                .interest("Supporte bien les températures de cuisson douces")
                .ideal_for("Légumes sautés, poissons"),
            Alternative::new("Ghee", "10 g de beurre → 8 g de ghee")
                .interest("Point de fumée élevé, sans lactose")
                .ideal_for("Saisir une viande, currys")
                .limits("Aussi riche en graisses saturées que le beurre"),
        ],
    },
    Equivalence {
        ingredient: "Huile",
        category: "Matières grasses - Pâtisserie",
        kind: Recipe,
        keywords: &["huile", "huile neutre", "huile de tournesol"],
        alternatives: &[
            Alternative::new("Yaourt nature", "100 ml d'huile → 125 g de yaourt nature")
                .ideal_for("Gâteaux au yaourt, cakes")
                .remarks("Allonger le temps de cuisson de quelques minutes"),
            Alternative::new("Purée de banane", "100 ml d'huile → 1 banane bien mûre écrasée")
                .ideal_for("Banana bread, pancakes")
                .limits("Donne un goût de banane prononcé"),
        ],
    },
    Equivalence {
        ingredient: "Crème fraîche",
        category: "Produits laitiers - Sauces",
        kind: Recipe,
        keywords: &["crème fraîche", "creme fraiche", "crème épaisse", "crème"],
        alternatives: &[
            Alternative::new("Yaourt grec", "100 g de crème → 100 g de yaourt grec")
                .interest("Deux fois moins gras, plus riche en protéines")
                .remarks("Ajouter hors du feu pour éviter qu'il ne tranche"),
            Alternative::new("Crème de soja", "100 g de crème → 100 g de crème de soja")
                .ideal_for("Cuisine végétale, sauces chaudes")
                .interest("Sans lactose"),
            Alternative::new("Fromage blanc", "100 g de crème → 100 g de fromage blanc + 1 cuillère à café de fécule")
                .ideal_for("Quiches, gratins")
                .remarks("La fécule empêche le fromage blanc de grainer à la cuisson"),
            Alternative::new("Crème de cajou", "100 g de crème → 50 g de cajou mixées avec 60 ml d'eau")
                .variant("Faire tremper les noix de cajou 4 h pour une texture plus lisse"),
        ],
    },
    Equivalence {
        ingredient: "Crème liquide",
        category: "Produits laitiers - Pâtisserie",
        kind: Recipe,
        keywords: &["crème liquide", "creme liquide", "crème entière", "crème fleurette"],
        alternatives: &[
            Alternative::new("Lait de coco", "200 ml de crème → 200 ml de lait de coco")
                .ideal_for("Ganaches, panna cotta, currys")
                .limits("Goût de coco marqué"),
            Alternative::new("Lait concentré non sucré", "200 ml de crème → 200 ml de lait concentré")
                .interest("Moins gras, texture onctueuse"),
            Alternative::new("Crème d'avoine", "200 ml de crème → 200 ml de crème d'avoine")
                .interest("Végétale, sans lactose")
                .limits("Ne monte pas en chantilly"),
        ],
    },
    Equivalence {
        ingredient: "Lait de vache",
        category: "Produits laitiers - Pâtisserie",
        kind: Recipe,
        keywords: &["lait", "lait entier", "lait demi-écrémé", "milk"],
        alternatives: &[
            Alternative::new("Boisson d'avoine", "250 ml de lait → 250 ml de boisson d'avoine")
                .ideal_for("Crêpes, gâteaux, béchamel")
                .remarks("Légèrement sucrée naturellement"),
            Alternative::new("Boisson de soja", "250 ml de lait → 250 ml de boisson de soja")
                .interest("Teneur en protéines proche du lait de vache")
                .ideal_for("Flans, crèmes dessert"),
            Alternative::new("Boisson d'amande", "250 ml de lait → 250 ml de boisson d'amande")
                .limits("Très peu de protéines, texture plus liquide"),
        ],
    },
    Equivalence {
        ingredient: "Œuf",
        category: "Œufs - Liant",
        kind: Recipe,
        keywords: &["oeuf", "œuf", "oeufs", "œufs", "jaune d'oeuf", "egg"],
        alternatives: &[
            Alternative::new("Graines de lin moulues", "1 œuf → 1 cuillère à soupe de lin moulu + 3 cuillères à soupe d'eau")
                .interest("Riche en oméga-3 et en fibres")
                .ideal_for("Cookies, muffins, galettes végétales")
                .remarks("Laisser gonfler 10 minutes avant usage"),
            Alternative::new("Graines de chia", "1 œuf → 1 cuillère à soupe de chia + 3 cuillères à soupe d'eau")
                .ideal_for("Pancakes, pains"),
            Alternative::new("Compote de pommes", "1 œuf → 60 g de compote")
                .ideal_for("Gâteaux moelleux")
                .limits("N'apporte pas de tenue aux préparations salées"),
            Alternative::new("Banane écrasée", "1 œuf → ½ banane mûre")
                .ideal_for("Pancakes, cakes")
                .limits("Goût de banane"),
            Alternative::new("Tofu soyeux", "1 œuf → 60 g de tofu soyeux mixé")
                .ideal_for("Quiches, flans, brownies"),
        ],
    },
    Equivalence {
        ingredient: "Blanc d'œuf",
        category: "Œufs - Foisonnement",
        kind: Recipe,
        keywords: &["blanc d'oeuf", "blanc d'œuf", "blancs en neige", "meringue"],
        alternatives: &[
            Alternative::new("Aquafaba", "1 blanc d'œuf → 30 ml d'eau de cuisson de pois chiches")
                .interest("Monte en neige comme un blanc d'œuf")
                .ideal_for("Meringues, mousses au chocolat, macarons")
                .remarks("Ajouter une pincée de crème de tartre pour stabiliser"),
        ],
    },
    Equivalence {
        ingredient: "Farine de blé",
        category: "Farines",
        kind: Recipe,
        keywords: &["farine", "farine de blé", "farine t45", "farine t55", "flour"],
        alternatives: &[
            Alternative::new("Farine de riz", "100 g de farine de blé → 100 g de farine de riz")
                .interest("Sans gluten")
                .ideal_for("Crêpes, sauces, biscuits")
                .remarks("Associer à de la fécule pour les gâteaux"),
            Alternative::new("Poudre d'amande", "100 g de farine → 100 g de poudre d'amande")
                .interest("Sans gluten, plus riche en protéines")
                .ideal_for("Financiers, fonds de tarte")
                .limits("Nettement plus calorique"),
            Alternative::new("Farine d'épeautre", "100 g de farine de blé → 100 g de farine d'épeautre")
                .interest("Plus digeste, goût de noisette")
                .limits("Contient du gluten"),
            Alternative::new("Farine de pois chiche", "100 g de farine → 80 g de farine de pois chiche")
                .ideal_for("Préparations salées, socca, panisse"),
            Alternative::new("Flocons d'avoine mixés", "100 g de farine → 110 g de flocons mixés")
                .ideal_for("Muffins, pancakes, crumbles"),
        ],
    },
    Equivalence {
        ingredient: "Maïzena",
        category: "Épaississants",
        kind: Recipe,
        keywords: &["maïzena", "maizena", "fécule de maïs", "amidon"],
        alternatives: &[
            Alternative::new("Fécule de pomme de terre", "1 cuillère à soupe de maïzena → 1 cuillère à soupe de fécule")
                .ideal_for("Sauces, crèmes pâtissières"),
            Alternative::new("Arrow-root", "1 cuillère à soupe de maïzena → 2 cuillères à café d'arrow-root")
                .interest("Résiste bien à la congélation"),
            Alternative::new("Farine de blé", "1 cuillère à soupe de maïzena → 2 cuillères à soupe de farine")
                .limits("Contient du gluten, texture moins nappante"),
        ],
    },
    Equivalence {
        ingredient: "Gélatine",
        category: "Gélifiants",
        kind: Recipe,
        keywords: &["gélatine", "gelatine", "feuille de gélatine"],
        alternatives: &[
            Alternative::new("Agar-agar", "6 feuilles de gélatine → 2 g d'agar-agar")
                .interest("Végétal, issu d'algues")
                .ideal_for("Panna cotta, bavarois, entremets")
                .remarks("Doit bouillir 2 minutes pour gélifier"),
        ],
    },
    Equivalence {
        ingredient: "Sucre blanc",
        category: "Sucres",
        kind: Recipe,
        keywords: &["sucre", "sucre blanc", "sucre en poudre", "sugar"],
        alternatives: &[
            Alternative::new("Sucre de coco", "100 g de sucre → 100 g de sucre de coco")
                .interest("Index glycémique plus bas, goût caramélisé")
                .limits("Aussi calorique que le sucre blanc"),
            Alternative::new("Sirop d'érable", "100 g de sucre → 75 ml de sirop d'érable")
                .remarks("Réduire les liquides de la recette de 30 ml"),
            Alternative::new("Miel", "100 g de sucre → 75 g de miel")
                .remarks("Baisser la température du four de 10 °C")
                .limits("Déconseillé avant un an"),
            Alternative::new("Dattes mixées", "100 g de sucre → 120 g de pâte de dattes")
                .interest("Apporte fibres et minéraux")
                .ideal_for("Brownies, barres de céréales"),
            Alternative::new("Érythritol", "100 g de sucre → 130 g d'érythritol")
                .interest("Quasiment sans calories")
                .limits("Effet laxatif à forte dose, ne caramélise pas"),
        ],
    },
    Equivalence {
        ingredient: "Cassonade",
        category: "Sucres",
        kind: Recipe,
        keywords: &["cassonade", "sucre roux", "vergeoise"],
        alternatives: &[
            Alternative::new("Sucre complet", "100 g de cassonade → 100 g de sucre complet")
                .interest("Non raffiné, conserve ses minéraux"),
            Alternative::new("Sucre blanc + mélasse", "100 g de cassonade → 95 g de sucre + 1 cuillère à soupe de mélasse"),
        ],
    },
    Equivalence {
        ingredient: "Chocolat noir",
        category: "Chocolat",
        kind: Recipe,
        keywords: &["chocolat", "chocolat noir", "chocolat pâtissier"],
        alternatives: &[
            Alternative::new("Cacao en poudre + huile", "100 g de chocolat → 40 g de cacao non sucré + 30 g d'huile de coco + 50 g de sucre")
                .ideal_for("Brownies, gâteaux au chocolat"),
            Alternative::new("Caroube", "100 g de chocolat → 100 g de chocolat de caroube")
                .interest("Sans caféine, naturellement sucrée")
                .limits("Goût différent du cacao"),
        ],
    },
    Equivalence {
        ingredient: "Levure chimique",
        category: "Levures",
        kind: Recipe,
        keywords: &["levure", "levure chimique", "poudre à lever"],
        alternatives: &[
            Alternative::new("Bicarbonate + acide", "1 sachet de levure → ½ cuillère à café de bicarbonate + 1 cuillère à soupe de jus de citron")
                .remarks("Enfourner immédiatement après le mélange"),
            Alternative::new("Blancs montés en neige", "1 sachet de levure → 2 blancs d'œufs montés")
                .ideal_for("Génoises, gâteaux légers"),
        ],
    },
    Equivalence {
        ingredient: "Lardons",
        category: "Viandes - Plats salés",
        kind: Recipe,
        keywords: &["lardons", "lard", "bacon", "poitrine fumée"],
        alternatives: &[
            Alternative::new("Tofu fumé", "100 g de lardons → 100 g de tofu fumé en dés")
                .interest("Végétal, riche en protéines, moins gras")
                .ideal_for("Quiches, pâtes carbonara, salades"),
            Alternative::new("Dés de blanc de dinde", "100 g de lardons → 100 g de dés de dinde fumée")
                .interest("Trois fois moins gras"),
            Alternative::new("Champignons poêlés", "100 g de lardons → 150 g de champignons + paprika fumé")
                .ideal_for("Tartes, omelettes"),
        ],
    },
    Equivalence {
        ingredient: "Viande hachée",
        category: "Viandes - Plats salés",
        kind: Recipe,
        keywords: &["viande hachée", "steak haché", "boeuf haché", "bœuf haché", "bolognaise"],
        alternatives: &[
            Alternative::new("Lentilles corail", "100 g de viande → 60 g de lentilles crues")
                .interest("Fibres et protéines végétales, très économique")
                .ideal_for("Bolognaise, hachis parmentier, chili"),
            Alternative::new("Protéines de soja texturées", "100 g de viande → 40 g de PST réhydratées dans un bouillon")
                .interest("Texture proche de la viande hachée"),
            Alternative::new("Mélange viande et légumes", "100 g de viande → 60 g de viande + 60 g de champignons hachés")
                .interest("Réduit l'apport en graisses sans changer le goût")
                .variant("Remplacer les champignons par des lentilles vertes cuites"),
        ],
    },
    Equivalence {
        ingredient: "Parmesan",
        category: "Fromages",
        kind: Recipe,
        keywords: &["parmesan", "fromage râpé", "parmigiano"],
        alternatives: &[
            Alternative::new("Levure maltée", "20 g de parmesan → 2 cuillères à soupe de levure maltée")
                .interest("Végétal, source de vitamines B")
                .ideal_for("Pâtes, pestos, gratins"),
            Alternative::new("Poudre d'amande torréfiée", "20 g de parmesan → 20 g d'amandes torréfiées + sel")
                .ideal_for("Crumbles salés"),
        ],
    },
    Equivalence {
        ingredient: "Mascarpone",
        category: "Fromages",
        kind: Recipe,
        keywords: &["mascarpone", "tiramisu"],
        alternatives: &[
            Alternative::new("Ricotta", "250 g de mascarpone → 250 g de ricotta")
                .interest("Trois fois moins grasse"),
            Alternative::new("Fromage blanc égoutté", "250 g de mascarpone → 250 g de fromage blanc égoutté une nuit")
                .ideal_for("Tiramisu allégé, cheesecake"),
        ],
    },
    Equivalence {
        ingredient: "Mayonnaise",
        category: "Sauces",
        kind: Recipe,
        keywords: &["mayonnaise", "mayo", "sauce"],
        alternatives: &[
            Alternative::new("Yaourt moutardé", "100 g de mayonnaise → 100 g de yaourt + 1 cuillère à café de moutarde")
                .interest("Cinq fois moins calorique"),
            Alternative::new("Avocat mixé", "100 g de mayonnaise → 1 avocat mixé avec du citron")
                .ideal_for("Sandwichs, salades de pâtes"),
        ],
    },
    Equivalence {
        ingredient: "Chapelure",
        category: "Panures",
        kind: Recipe,
        keywords: &["chapelure", "panure", "pané"],
        alternatives: &[
            Alternative::new("Flocons d'avoine mixés", "50 g de chapelure → 50 g de flocons mixés"),
            Alternative::new("Poudre d'amande", "50 g de chapelure → 50 g de poudre d'amande")
                .interest("Sans gluten"),
            Alternative::new("Corn flakes écrasés", "50 g de chapelure → 50 g de corn flakes nature")
                .ideal_for("Panures croustillantes au four"),
        ],
    },
    Equivalence {
        ingredient: "Vin blanc",
        category: "Liquides de cuisson",
        kind: Recipe,
        keywords: &["vin", "vin blanc", "déglacer", "alcool"],
        alternatives: &[
            Alternative::new("Bouillon + vinaigre", "100 ml de vin → 100 ml de bouillon + 1 cuillère à café de vinaigre de cidre")
                .ideal_for("Risottos, sauces, moules"),
            Alternative::new("Jus de raisin blanc", "100 ml de vin → 100 ml de jus de raisin + un trait de citron")
                .ideal_for("Desserts, poires pochées"),
        ],
    },
    Equivalence {
        ingredient: "Pâtes blanches",
        category: "Féculents - Plats",
        kind: Recipe,
        keywords: &["pâtes", "pates", "spaghetti", "penne", "tagliatelles"],
        alternatives: &[
            Alternative::new("Courgettes en spirales", "100 g de pâtes cuites → 150 g de courgette")
                .interest("Très peu calorique")
                .limits("Rend de l'eau, à saisir rapidement"),
            Alternative::new("Pâtes de lentilles", "100 g de pâtes → 100 g de pâtes de lentilles")
                .interest("Deux fois plus de protéines, sans gluten"),
        ],
    },
];
