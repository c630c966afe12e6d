/// A named group of pantry ingredients
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Category {
    pub name: &'static str,
    pub items: &'static [&'static str],
}

const CATEGORIES: &[Category] = &[
    Category {
        name: "The Base",
        items: &["Oat Milk", "Almond Milk", "Coconut Milk", "Soy Milk", "Whole Milk"],
    },
    Category {
        name: "The Twist",
        items: &[
            "Mango",
            "Strawberry",
            "Blueberries",
            "Vanilla Syrup",
            "Honey",
            "White Chocolate",
        ],
    },
    Category {
        name: "The Boost",
        items: &["Collagen", "Protein Powder", "Cinnamon", "Ginger"],
    },
];

/// Built-in ingredient categories, in display order
pub fn categories() -> &'static [Category] {
    CATEGORIES
}

/// Every pantry ingredient, category by category
pub fn all_ingredients() -> impl Iterator<Item = &'static str> {
    CATEGORIES.iter().flat_map(|c| c.items.iter().copied())
}

/// Look up a pantry ingredient, ignoring case and surrounding whitespace
pub fn find(name: &str) -> Option<&'static str> {
    let name = name.trim();
    all_ingredients().find(|item| item.eq_ignore_ascii_case(name))
}
