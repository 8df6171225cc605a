use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::sync::OnceLock;

/// The selection section an item belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ItemKind {
    Protein,
    Vegetable,
    HerbOrSpice,
    Cookware,
}

impl ItemKind {
    pub const ALL: [ItemKind; 4] = [
        ItemKind::Protein,
        ItemKind::Vegetable,
        ItemKind::HerbOrSpice,
        ItemKind::Cookware,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            ItemKind::Protein => "Proteins",
            ItemKind::Vegetable => "Vegetables",
            ItemKind::HerbOrSpice => "Herbs & Spices",
            ItemKind::Cookware => "Cookware",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CatalogItem {
    pub id: String,
    pub display_name: String,
    /// Display subcategory, e.g. "Pork" or "Root Vegetables".
    pub category: String,
    pub kind: ItemKind,
}

/// Read-only lookup table of selectable items.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    items: Vec<CatalogItem>,
    by_id: HashMap<String, usize>,
}

impl Catalog {
    /// Builds a catalog. If an id appears twice the first entry wins.
    pub fn from_items(items: impl IntoIterator<Item = CatalogItem>) -> Self {
        let mut catalog = Catalog::default();
        for item in items {
            if catalog.by_id.contains_key(&item.id) {
                continue;
            }
            catalog.by_id.insert(item.id.clone(), catalog.items.len());
            catalog.items.push(item);
        }
        catalog
    }

    /// The built-in catalog, constructed once per process.
    pub fn standard() -> &'static Catalog {
        static STANDARD: OnceLock<Catalog> = OnceLock::new();
        STANDARD.get_or_init(|| {
            let sections = [
                (ItemKind::Protein, PROTEINS),
                (ItemKind::Vegetable, VEGETABLES),
                (ItemKind::HerbOrSpice, HERBS_AND_SPICES),
                (ItemKind::Cookware, COOKWARE),
            ];
            Catalog::from_items(sections.iter().flat_map(|(kind, rows)| {
                rows.iter().map(move |(id, name, category)| CatalogItem {
                    id: id.to_string(),
                    display_name: name.to_string(),
                    category: category.to_string(),
                    kind: *kind,
                })
            }))
        })
    }

    pub fn resolve(&self, id: &str) -> Option<&CatalogItem> {
        self.by_id.get(id).map(|&idx| &self.items[idx])
    }

    /// Display name for `id`, or `id` itself when the catalog doesn't know it.
    pub fn display_name<'a>(&'a self, id: &'a str) -> &'a str {
        self.resolve(id)
            .map(|item| item.display_name.as_str())
            .unwrap_or(id)
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn items(&self) -> &[CatalogItem] {
        &self.items
    }

    pub fn items_of(&self, kind: ItemKind) -> impl Iterator<Item = &CatalogItem> {
        self.items.iter().filter(move |item| item.kind == kind)
    }

    /// Items of one section grouped by subcategory, groups in first-seen order.
    pub fn grouped_by_category(&self, kind: ItemKind) -> Vec<(&str, Vec<&CatalogItem>)> {
        let mut groups: Vec<(&str, Vec<&CatalogItem>)> = Vec::new();
        for item in self.items_of(kind) {
            match groups.iter_mut().find(|(name, _)| *name == item.category) {
                Some((_, members)) => members.push(item),
                None => groups.push((item.category.as_str(), vec![item])),
            }
        }
        groups
    }
}

type Row = (&'static str, &'static str, &'static str);

const PROTEINS: &[Row] = &[
    ("pork-chop", "Pork Chop", "Pork"),
    ("pork-belly", "Pork Belly", "Pork"),
    ("bacon", "Bacon", "Pork"),
    ("ground-pork", "Ground Pork", "Pork"),
    ("pork-tenderloin", "Pork Tenderloin", "Pork"),
    ("ham", "Ham", "Pork"),
    ("chicken-breast", "Chicken Breast", "Chicken"),
    ("chicken-thigh", "Chicken Thigh", "Chicken"),
    ("chicken-wings", "Chicken Wings", "Chicken"),
    ("whole-chicken", "Whole Chicken", "Chicken"),
    ("ground-chicken", "Ground Chicken", "Chicken"),
    ("beef-steak", "Beef Steak", "Beef"),
    ("ground-beef", "Ground Beef", "Beef"),
    ("beef-ribs", "Beef Ribs", "Beef"),
    ("beef-brisket", "Beef Brisket", "Beef"),
    ("beef-roast", "Beef Roast", "Beef"),
    ("salmon", "Salmon", "Fish"),
    ("tuna", "Tuna", "Fish"),
    ("cod", "Cod", "Fish"),
    ("tilapia", "Tilapia", "Fish"),
    ("shrimp", "Shrimp", "Seafood"),
    ("crab", "Crab", "Seafood"),
    ("lobster", "Lobster", "Seafood"),
    ("scallops", "Scallops", "Seafood"),
    ("tofu", "Tofu", "Plant-Based"),
    ("tempeh", "Tempeh", "Plant-Based"),
    ("seitan", "Seitan", "Plant-Based"),
];

const VEGETABLES: &[Row] = &[
    ("onion", "Onion", "Aromatics"),
    ("garlic", "Garlic", "Aromatics"),
    ("shallots", "Shallots", "Aromatics"),
    ("ginger", "Ginger", "Aromatics"),
    ("green-onion", "Green Onion", "Aromatics"),
    ("leeks", "Leeks", "Aromatics"),
    ("carrot", "Carrot", "Root Vegetables"),
    ("potato", "Potato", "Root Vegetables"),
    ("sweet-potato", "Sweet Potato", "Root Vegetables"),
    ("parsnip", "Parsnip", "Root Vegetables"),
    ("turnip", "Turnip", "Root Vegetables"),
    ("radish", "Radish", "Root Vegetables"),
    ("tomato", "Tomato", "Fruits/Vegetables"),
    ("cucumber", "Cucumber", "Fruits/Vegetables"),
    ("zucchini", "Zucchini", "Fruits/Vegetables"),
    ("eggplant", "Eggplant", "Fruits/Vegetables"),
    ("bell-pepper", "Bell Pepper", "Vegetables"),
    ("celery", "Celery", "Vegetables"),
    ("corn", "Corn", "Vegetables"),
    ("green-beans", "Green Beans", "Vegetables"),
    ("peas", "Peas", "Vegetables"),
    ("asparagus", "Asparagus", "Vegetables"),
    ("spinach", "Spinach", "Leafy Greens"),
    ("kale", "Kale", "Leafy Greens"),
    ("lettuce", "Lettuce", "Leafy Greens"),
    ("swiss-chard", "Swiss Chard", "Leafy Greens"),
    ("arugula", "Arugula", "Leafy Greens"),
    ("broccoli", "Broccoli", "Cruciferous"),
    ("cauliflower", "Cauliflower", "Cruciferous"),
    ("brussels-sprouts", "Brussels Sprouts", "Cruciferous"),
    ("cabbage", "Cabbage", "Cruciferous"),
    ("mushroom", "Mushroom", "Fungi"),
    ("shiitake", "Shiitake", "Fungi"),
    ("portobello", "Portobello", "Fungi"),
];

const HERBS_AND_SPICES: &[Row] = &[
    ("black-pepper", "Black Pepper", "Spices"),
    ("white-pepper", "White Pepper", "Spices"),
    ("cayenne", "Cayenne", "Spices"),
    ("paprika", "Paprika", "Spices"),
    ("cumin", "Cumin", "Spices"),
    ("coriander", "Coriander", "Spices"),
    ("turmeric", "Turmeric", "Spices"),
    ("cinnamon", "Cinnamon", "Spices"),
    ("nutmeg", "Nutmeg", "Spices"),
    ("cardamom", "Cardamom", "Spices"),
    ("salt", "Salt", "Seasonings"),
    ("garlic-powder", "Garlic Powder", "Seasonings"),
    ("onion-powder", "Onion Powder", "Seasonings"),
    ("msg", "MSG", "Seasonings"),
    ("basil", "Basil", "Herbs"),
    ("thyme", "Thyme", "Herbs"),
    ("rosemary", "Rosemary", "Herbs"),
    ("oregano", "Oregano", "Herbs"),
    ("sage", "Sage", "Herbs"),
    ("mint", "Mint", "Herbs"),
    ("parsley", "Parsley", "Herbs"),
    ("cilantro", "Cilantro", "Herbs"),
    ("dill", "Dill", "Herbs"),
    ("bay-leaves", "Bay Leaves", "Herbs"),
    ("soy-sauce", "Soy Sauce", "Sauces"),
    ("fish-sauce", "Fish Sauce", "Sauces"),
    ("oyster-sauce", "Oyster Sauce", "Sauces"),
    ("worcestershire", "Worcestershire", "Sauces"),
    ("hot-sauce", "Hot Sauce", "Sauces"),
    ("vinegar", "Vinegar", "Sauces"),
];

const COOKWARE: &[Row] = &[
    ("skillet", "Skillet/Frying Pan", "Pans"),
    ("non-stick-pan", "Non-stick Pan", "Pans"),
    ("wok", "Wok", "Pans"),
    ("grill-pan", "Grill Pan", "Pans"),
    ("pot", "Pot", "Pots"),
    ("stock-pot", "Stock Pot", "Pots"),
    ("sauce-pan", "Sauce Pan", "Pots"),
    ("dutch-oven", "Dutch Oven", "Pots"),
    ("pressure-cooker", "Pressure Cooker", "Appliances"),
    ("slow-cooker", "Slow Cooker", "Appliances"),
    ("rice-cooker", "Rice Cooker", "Appliances"),
    ("food-processor", "Food Processor", "Appliances"),
    ("blender", "Blender", "Appliances"),
    ("baking-sheet", "Baking Sheet", "Bakeware"),
    ("roasting-pan", "Roasting Pan", "Bakeware"),
    ("casserole-dish", "Casserole Dish", "Bakeware"),
    ("cutting-board", "Cutting Board", "Prep Tools"),
    ("mixing-bowls", "Mixing Bowls", "Prep Tools"),
    ("colander", "Colander", "Prep Tools"),
    ("grater", "Grater", "Prep Tools"),
    ("knife", "Chef's Knife", "Knives"),
    ("paring-knife", "Paring Knife", "Knives"),
    ("bread-knife", "Bread Knife", "Knives"),
    ("tongs", "Tongs", "Utensils"),
    ("spatula", "Spatula", "Utensils"),
    ("wooden-spoon", "Wooden Spoon", "Utensils"),
    ("whisk", "Whisk", "Utensils"),
    ("ladle", "Ladle", "Utensils"),
    ("measuring-cups", "Measuring Cups", "Measuring Tools"),
    ("measuring-spoons", "Measuring Spoons", "Measuring Tools"),
    ("kitchen-scale", "Kitchen Scale", "Measuring Tools"),
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_standard_catalog_sizes() {
        let catalog = Catalog::standard();
        assert_eq!(catalog.items_of(ItemKind::Protein).count(), 27);
        assert_eq!(catalog.items_of(ItemKind::Vegetable).count(), 34);
        assert_eq!(catalog.items_of(ItemKind::HerbOrSpice).count(), 30);
        assert_eq!(catalog.items_of(ItemKind::Cookware).count(), 31);
        assert_eq!(catalog.len(), 27 + 34 + 30 + 31);
    }

    #[test]
    fn test_resolve_and_display_name() {
        let catalog = Catalog::standard();
        let item = catalog.resolve("pork-chop").unwrap();
        assert_eq!(item.display_name, "Pork Chop");
        assert_eq!(item.category, "Pork");
        assert_eq!(item.kind, ItemKind::Protein);

        assert_eq!(catalog.display_name("skillet"), "Skillet/Frying Pan");
        // Unknown ids pass through untouched
        assert_eq!(catalog.display_name("dragonfruit"), "dragonfruit");
        assert!(catalog.resolve("dragonfruit").is_none());
    }

    #[test]
    fn test_from_items_keeps_first_duplicate() {
        let make = |name: &str| CatalogItem {
            id: "x".to_string(),
            display_name: name.to_string(),
            category: "Misc".to_string(),
            kind: ItemKind::Vegetable,
        };
        let catalog = Catalog::from_items(vec![make("First"), make("Second")]);
        assert_eq!(catalog.len(), 1);
        assert_eq!(catalog.display_name("x"), "First");
    }

    #[test]
    fn test_grouped_by_category_preserves_order() {
        let groups = Catalog::standard().grouped_by_category(ItemKind::Protein);
        let names: Vec<&str> = groups.iter().map(|(name, _)| *name).collect();
        assert_eq!(names, vec!["Pork", "Chicken", "Beef", "Fish", "Seafood", "Plant-Based"]);
        assert_eq!(groups[0].1.len(), 6);
        assert_eq!(groups[0].1[0].id, "pork-chop");
    }
}
