use crate::normalizer::{contains_either, normalize, normalize_cookware};
use crate::recipe::Ingredient;

/// Anything that carries a name to be matched against a selection.
pub trait MatchName {
    fn match_name(&self) -> &str;
}

impl MatchName for Ingredient {
    fn match_name(&self) -> &str {
        self.name()
    }
}

impl MatchName for String {
    fn match_name(&self) -> &str {
        self
    }
}

/// Normalized names the user has on hand. Built once per matching pass.
///
/// Candidates are projected with the same function as the members, so a set
/// built with [`NormalizedSet::cookware`] compares cookware names only.
#[derive(Debug, Clone)]
pub struct NormalizedSet {
    names: Vec<String>,
    project: fn(&str) -> String,
}

impl Default for NormalizedSet {
    fn default() -> Self {
        NormalizedSet {
            names: Vec::new(),
            project: normalize,
        }
    }
}

impl NormalizedSet {
    /// Ingredient names through [`normalize`], dropping empties and duplicates (first occurrence kept).
    pub fn new<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self::with_projection(names, normalize)
    }

    /// Cookware names through [`normalize_cookware`]; the ingredient stoplist is not applied.
    pub fn cookware<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self::with_projection(names, normalize_cookware)
    }

    fn with_projection<I, S>(names: I, project: fn(&str) -> String) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut set = NormalizedSet {
            names: Vec::new(),
            project,
        };
        for name in names {
            let normalized = project(name.as_ref());
            if !normalized.is_empty() && !set.names.contains(&normalized) {
                set.names.push(normalized);
            }
        }
        set
    }

    pub fn names(&self) -> &[String] {
        &self.names
    }

    /// Whether the raw `name` containment-matches any member after projection.
    pub fn matches(&self, name: &str) -> bool {
        let candidate = (self.project)(name);
        self.matches_normalized(&candidate)
    }

    pub fn matches_normalized(&self, candidate: &str) -> bool {
        self.names.iter().any(|selected| contains_either(candidate, selected))
    }
}

/// Items of `recipe_items` that match nothing in `selected`, in their original order.
///
/// Uses the same predicate as scoring, so `recipe_items.len() - missing.len()`
/// is always the matched count.
pub fn compute_missing<'a, T: MatchName>(recipe_items: &'a [T], selected: &NormalizedSet) -> Vec<&'a T> {
    recipe_items
        .iter()
        .filter(|item| !selected.matches(item.match_name()))
        .collect()
}
