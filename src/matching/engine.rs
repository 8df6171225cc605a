use serde::Serialize;
use tracing::{debug, info, warn};

use crate::catalog::{Catalog, ItemKind};
use crate::config::{MatchConfig, ScoringLaw};
use crate::matching::missing::{compute_missing, NormalizedSet};
use crate::normalizer::contains_either;
use crate::recipe::{Ingredient, Recipe, Selection};

/// The parts a match percentage was assembled from.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ScoreBreakdown {
    pub ingredient_percentage: f64,
    pub cookware_percentage: f64,
    pub tag_bonus: f64,
    /// Only populated under [`ScoringLaw::TagOverlap`].
    pub tag_overlap_percentage: Option<f64>,
}

/// One recipe's score and what the user still lacks to cook it.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MatchResult<'r> {
    pub recipe: &'r Recipe,
    pub match_percentage: f64,
    pub breakdown: ScoreBreakdown,
    pub missing_ingredients: Vec<&'r Ingredient>,
    pub missing_cookware: Vec<&'r String>,
}

impl MatchResult<'_> {
    /// Percentage as shown on a card. Not clamped.
    pub fn display_percentage(&self) -> i64 {
        self.match_percentage.round() as i64
    }

    pub fn matched_ingredient_count(&self) -> usize {
        self.recipe.ingredients.len() - self.missing_ingredients.len()
    }
}

/// Normalized selection shared by every recipe of one pass.
struct PreparedSelection<'s> {
    ingredients: NormalizedSet,
    cookware: NormalizedSet,
    selection: &'s Selection,
}

impl<'s> PreparedSelection<'s> {
    fn new(catalog: &Catalog, selection: &'s Selection) -> Self {
        for id in selection.ingredient_ids().chain(selection.cookware.iter()) {
            if catalog.resolve(id).is_none() {
                warn!("Selection id '{}' is not in the catalog, comparing it as-is", id);
            }
        }

        let ingredients = NormalizedSet::new(selection.ingredient_ids().map(|id| catalog.display_name(id)));
        let cookware = NormalizedSet::cookware(selection.cookware.iter().map(|id| catalog.display_name(id)));

        PreparedSelection {
            ingredients,
            cookware,
            selection,
        }
    }
}

// Tags hold catalog ids ("pork-chop"), so compare ids directly rather than display names.
fn tag_matches(tag: &str, selected_ids: &[String]) -> bool {
    let tag = tag.trim().to_lowercase();
    selected_ids
        .iter()
        .any(|id| contains_either(&tag, &id.trim().to_lowercase()))
}

/// `matched / total * 100`, with an empty requirement list counting as fully covered.
fn coverage(total: usize, missing: usize) -> f64 {
    if total == 0 {
        100.0
    } else {
        (total - missing) as f64 / total as f64 * 100.0
    }
}

/// Scores a recipe catalog against a user's selection.
///
/// Holds only read-only references, so a single engine can serve any number
/// of concurrent callers.
pub struct MatchingEngine<'c> {
    catalog: &'c Catalog,
    config: MatchConfig,
}

impl MatchingEngine<'static> {
    /// Engine over the built-in catalog with the canonical scoring.
    pub fn standard() -> Self {
        MatchingEngine::new(Catalog::standard(), MatchConfig::default())
    }
}

impl<'c> MatchingEngine<'c> {
    pub fn new(catalog: &'c Catalog, config: MatchConfig) -> Self {
        MatchingEngine { catalog, config }
    }

    pub fn config(&self) -> &MatchConfig {
        &self.config
    }

    /// Scores every recipe, drops those at or below the threshold and sorts
    /// the rest by descending match percentage.
    ///
    /// The sort is stable: equal scores keep their order from `recipes`.
    /// Neither input is modified.
    pub fn find_matches<'r>(&self, recipes: &'r [Recipe], selection: &Selection) -> Vec<MatchResult<'r>> {
        let prepared = PreparedSelection::new(self.catalog, selection);

        let mut matches: Vec<MatchResult<'r>> = recipes
            .iter()
            .map(|recipe| self.score_prepared(recipe, &prepared))
            .filter(|result| result.match_percentage > self.config.threshold)
            .collect();

        matches.sort_by(|a, b| b.match_percentage.total_cmp(&a.match_percentage));

        info!(
            "Matched {} of {} recipes (law: {}, threshold: {})",
            matches.len(),
            recipes.len(),
            self.config.law,
            self.config.threshold
        );
        matches
    }

    /// Scores a single recipe without applying the threshold.
    pub fn score_recipe<'r>(&self, recipe: &'r Recipe, selection: &Selection) -> MatchResult<'r> {
        let prepared = PreparedSelection::new(self.catalog, selection);
        self.score_prepared(recipe, &prepared)
    }

    fn score_prepared<'r>(&self, recipe: &'r Recipe, prepared: &PreparedSelection<'_>) -> MatchResult<'r> {
        let missing_ingredients = compute_missing(&recipe.ingredients, &prepared.ingredients);
        let missing_cookware = compute_missing(&recipe.required_cookware, &prepared.cookware);

        let ingredient_percentage = coverage(recipe.ingredients.len(), missing_ingredients.len());
        let cookware_percentage = coverage(recipe.required_cookware.len(), missing_cookware.len());

        let (match_percentage, tag_bonus, tag_overlap_percentage) = match self.config.law {
            ScoringLaw::Weighted => {
                let bonus = self.tag_bonus(recipe, prepared.selection);
                ((ingredient_percentage + cookware_percentage) / 2.0 + bonus, bonus, None)
            }
            ScoringLaw::TagOverlap => {
                let overlap = tag_overlap(recipe, prepared.selection);
                (overlap, 0.0, Some(overlap))
            }
        };

        debug!(
            recipe = %recipe.id,
            ingredients = ingredient_percentage,
            cookware = cookware_percentage,
            bonus = tag_bonus,
            score = match_percentage,
            "Scored recipe"
        );

        MatchResult {
            recipe,
            match_percentage,
            breakdown: ScoreBreakdown {
                ingredient_percentage,
                cookware_percentage,
                tag_bonus,
                tag_overlap_percentage,
            },
            missing_ingredients,
            missing_cookware,
        }
    }

    /// One bonus per tag category in which any selected id hits any recipe tag.
    fn tag_bonus(&self, recipe: &Recipe, selection: &Selection) -> f64 {
        [ItemKind::Protein, ItemKind::Vegetable, ItemKind::HerbOrSpice]
            .iter()
            .filter(|kind| {
                recipe
                    .tags_for(**kind)
                    .iter()
                    .any(|tag| tag_matches(tag, selection.ids(**kind)))
            })
            .count() as f64
            * self.config.tag_bonus
    }
}

/// Share of the recipe's tags (all three categories) hit by the selection; 0 without tags.
fn tag_overlap(recipe: &Recipe, selection: &Selection) -> f64 {
    let mut total = 0usize;
    let mut hit = 0usize;
    for kind in [ItemKind::Protein, ItemKind::Vegetable, ItemKind::HerbOrSpice] {
        for tag in recipe.tags_for(kind) {
            total += 1;
            if tag_matches(tag, selection.ids(kind)) {
                hit += 1;
            }
        }
    }
    if total == 0 {
        0.0
    } else {
        hit as f64 / total as f64 * 100.0
    }
}

/// [`MatchingEngine::find_matches`] with the built-in catalog and canonical scoring.
pub fn find_matches<'r>(recipes: &'r [Recipe], selection: &Selection) -> Vec<MatchResult<'r>> {
    MatchingEngine::standard().find_matches(recipes, selection)
}
