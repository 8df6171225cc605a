use anyhow::{Context, Result};
use csv::ReaderBuilder;
use std::io::Read;
use std::path::Path;
use tracing::warn;

use crate::recipe::{Ingredient, Recipe};

// Expected column headers
const ID_COL: &str = "id";
const TITLE_COL: &str = "title";
const DESCRIPTION_COL: &str = "description";
const INGREDIENTS_COL: &str = "ingredients";
const COOKWARE_COL: &str = "requiredCookware";
const PROTEIN_TAGS_COL: &str = "proteinTags";
const VEGGIE_TAGS_COL: &str = "veggieTags";
const HERB_TAGS_COL: &str = "herbTags";
const INSTRUCTIONS_COL: &str = "instructions";
const COOKING_TIME_COL: &str = "cookingTime";
const SERVINGS_COL: &str = "servings";
const DIFFICULTY_COL: &str = "difficulty";

/// Separator for list-valued cells.
pub const LIST_SEPARATOR: char = '|';

fn parse_list(cell: &str) -> Vec<String> {
    cell.split(LIST_SEPARATOR)
        .map(|part| part.trim())
        .filter(|part| !part.is_empty())
        .map(str::to_string)
        .collect()
}

fn parse_count(cell: &str) -> u32 {
    cell.trim().parse::<u32>().unwrap_or(0)
}

/// Either a JSON array of strings / `{name, amount, unit, preparation?}` objects,
/// or a `|` separated list of plain ingredient lines.
fn parse_ingredients(cell: &str) -> Result<Vec<Ingredient>> {
    let trimmed = cell.trim();
    if trimmed.starts_with('[') {
        serde_json::from_str(trimmed).with_context(|| format!("Invalid ingredients JSON: {}", trimmed))
    } else {
        Ok(parse_list(trimmed).into_iter().map(Ingredient::PlainName).collect())
    }
}

pub fn load_recipes(csv_path: &Path) -> Result<Vec<Recipe>> {
    if !csv_path.exists() {
        return Err(anyhow::anyhow!("Recipe CSV file not found at: {:?}", csv_path));
    }

    let file = std::fs::File::open(csv_path)
        .with_context(|| format!("Failed to open recipe CSV file at {:?}", csv_path))?;
    parse_recipes_csv(file).with_context(|| format!("Failed to load recipes from {:?}", csv_path))
}

pub fn parse_recipes_csv<R: Read>(reader: R) -> Result<Vec<Recipe>> {
    let mut rdr = ReaderBuilder::new().has_headers(true).from_reader(reader);

    let headers = rdr.headers()?.clone();
    let column = |name: &str| -> Result<usize> {
        headers
            .iter()
            .position(|h| h.trim() == name)
            .ok_or_else(|| anyhow::anyhow!("Column '{}' not found", name))
    };

    let id_idx = column(ID_COL)?;
    let title_idx = column(TITLE_COL)?;
    let description_idx = column(DESCRIPTION_COL)?;
    let ingredients_idx = column(INGREDIENTS_COL)?;
    let cookware_idx = column(COOKWARE_COL)?;
    let protein_idx = column(PROTEIN_TAGS_COL)?;
    let veggie_idx = column(VEGGIE_TAGS_COL)?;
    let herb_idx = column(HERB_TAGS_COL)?;
    let instructions_idx = column(INSTRUCTIONS_COL)?;
    let time_idx = column(COOKING_TIME_COL)?;
    let servings_idx = column(SERVINGS_COL)?;
    let difficulty_idx = column(DIFFICULTY_COL)?;

    let mut recipes = Vec::new();
    for (row_index, result) in rdr.records().enumerate() {
        let record = result.with_context(|| format!("Failed to read record at row index {}", row_index))?;
        let cell = |idx: usize| record.get(idx).unwrap_or("");

        let id = cell(id_idx).trim().to_string();
        if id.is_empty() {
            warn!("Skipping recipe row {} with an empty id", row_index + 1);
            continue;
        }

        let ingredients = parse_ingredients(cell(ingredients_idx))
            .with_context(|| format!("Bad ingredients for recipe '{}' at row {}", id, row_index + 1))?;

        recipes.push(Recipe {
            id,
            title: cell(title_idx).trim().to_string(),
            description: cell(description_idx).trim().to_string(),
            ingredients,
            required_cookware: parse_list(cell(cookware_idx)),
            protein_tags: parse_list(cell(protein_idx)),
            veggie_tags: parse_list(cell(veggie_idx)),
            herb_tags: parse_list(cell(herb_idx)),
            instructions: parse_list(cell(instructions_idx)),
            cooking_time: parse_count(cell(time_idx)),
            servings: parse_count(cell(servings_idx)),
            difficulty: cell(difficulty_idx).trim().to_string(),
        });
    }

    if recipes.is_empty() {
        return Err(anyhow::anyhow!("No valid recipes loaded"));
    }

    Ok(recipes)
}
