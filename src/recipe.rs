use serde::{Deserialize, Serialize};

use crate::catalog::ItemKind;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StructuredIngredient {
    pub name: String,
    pub amount: String,
    pub unit: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub preparation: Option<String>,
}

/// A recipe ingredient as it appears in the source data: either a bare line of
/// text or a name/amount/unit record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Ingredient {
    PlainName(String),
    Structured(StructuredIngredient),
}

impl Ingredient {
    /// The text that gets normalized for matching.
    pub fn name(&self) -> &str {
        match self {
            Ingredient::PlainName(text) => text,
            Ingredient::Structured(structured) => &structured.name,
        }
    }

    /// Human-readable line, e.g. "2 tbsp Butter, softened".
    pub fn display_line(&self) -> String {
        match self {
            Ingredient::PlainName(text) => text.clone(),
            Ingredient::Structured(s) => {
                let mut line = [s.amount.as_str(), s.unit.as_str(), s.name.as_str()]
                    .iter()
                    .filter(|part| !part.trim().is_empty())
                    .copied()
                    .collect::<Vec<_>>()
                    .join(" ");
                if let Some(prep) = s.preparation.as_deref().filter(|p| !p.trim().is_empty()) {
                    line.push_str(", ");
                    line.push_str(prep);
                }
                line
            }
        }
    }
}

impl From<&str> for Ingredient {
    fn from(text: &str) -> Self {
        Ingredient::PlainName(text.to_string())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Recipe {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub ingredients: Vec<Ingredient>,
    #[serde(default)]
    pub required_cookware: Vec<String>,
    #[serde(default)]
    pub protein_tags: Vec<String>,
    #[serde(default)]
    pub veggie_tags: Vec<String>,
    #[serde(default)]
    pub herb_tags: Vec<String>,
    #[serde(default)]
    pub instructions: Vec<String>,
    /// Minutes.
    #[serde(default)]
    pub cooking_time: u32,
    #[serde(default)]
    pub servings: u32,
    #[serde(default)]
    pub difficulty: String,
}

impl Recipe {
    /// A recipe with only an id and title; the remaining fields are empty.
    pub fn new(id: impl Into<String>, title: impl Into<String>) -> Self {
        Recipe {
            id: id.into(),
            title: title.into(),
            description: String::new(),
            ingredients: Vec::new(),
            required_cookware: Vec::new(),
            protein_tags: Vec::new(),
            veggie_tags: Vec::new(),
            herb_tags: Vec::new(),
            instructions: Vec::new(),
            cooking_time: 0,
            servings: 0,
            difficulty: String::new(),
        }
    }

    /// Tag list matched against the selection section `kind`. Cookware has none.
    pub fn tags_for(&self, kind: ItemKind) -> &[String] {
        match kind {
            ItemKind::Protein => &self.protein_tags,
            ItemKind::Vegetable => &self.veggie_tags,
            ItemKind::HerbOrSpice => &self.herb_tags,
            ItemKind::Cookware => &[],
        }
    }
}

/// The catalog ids a user has checked, per section.
///
/// Each list behaves as a set; use [`Selection::toggle`] to keep it that way.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Selection {
    #[serde(default)]
    pub proteins: Vec<String>,
    #[serde(default)]
    pub vegetables: Vec<String>,
    #[serde(default)]
    pub herbs_and_spices: Vec<String>,
    #[serde(default)]
    pub cookware: Vec<String>,
}

impl Selection {
    pub fn ids(&self, kind: ItemKind) -> &[String] {
        match kind {
            ItemKind::Protein => &self.proteins,
            ItemKind::Vegetable => &self.vegetables,
            ItemKind::HerbOrSpice => &self.herbs_and_spices,
            ItemKind::Cookware => &self.cookware,
        }
    }

    fn ids_mut(&mut self, kind: ItemKind) -> &mut Vec<String> {
        match kind {
            ItemKind::Protein => &mut self.proteins,
            ItemKind::Vegetable => &mut self.vegetables,
            ItemKind::HerbOrSpice => &mut self.herbs_and_spices,
            ItemKind::Cookware => &mut self.cookware,
        }
    }

    /// Adds `id` to the section if absent, removes it if present.
    /// Returns whether the id is selected afterwards.
    pub fn toggle(&mut self, kind: ItemKind, id: &str) -> bool {
        let ids = self.ids_mut(kind);
        if let Some(pos) = ids.iter().position(|existing| existing == id) {
            ids.remove(pos);
            false
        } else {
            ids.push(id.to_string());
            true
        }
    }

    /// Proteins, then vegetables, then herbs & spices. Cookware is scored separately.
    pub fn ingredient_ids(&self) -> impl Iterator<Item = &String> {
        self.proteins
            .iter()
            .chain(self.vegetables.iter())
            .chain(self.herbs_and_spices.iter())
    }

    pub fn is_empty(&self) -> bool {
        ItemKind::ALL.iter().all(|kind| self.ids(*kind).is_empty())
    }
}
