use clap::Parser;

use crate::config::{parse_number, ConfigError, MatchConfig, ScoringLaw};
use crate::recipe::Selection;

#[derive(Parser, Debug)]
#[command(author, version, about = "Rank recipes by what's already in your kitchen", long_about = None)]
pub struct Cli {
    /// Path to the recipe CSV file
    #[arg(short, long, required_unless_present = "list_catalog")]
    pub recipes: Option<String>,

    /// Protein ids, comma separated (e.g. pork-chop,bacon)
    #[arg(long, value_delimiter = ',')]
    pub proteins: Vec<String>,

    /// Vegetable ids, comma separated
    #[arg(long, value_delimiter = ',')]
    pub vegetables: Vec<String>,

    /// Herb and spice ids, comma separated
    #[arg(long, value_delimiter = ',')]
    pub herbs: Vec<String>,

    /// Cookware ids, comma separated
    #[arg(long, value_delimiter = ',')]
    pub cookware: Vec<String>,

    /// Scoring law, overrides PANTRY_MATCH_LAW
    #[arg(long, value_enum)]
    pub law: Option<ScoringLaw>,

    /// Keep recipes scoring strictly above this, overrides PANTRY_MATCH_THRESHOLD
    #[arg(long, allow_hyphen_values = true, value_parser = parse_threshold)]
    pub threshold: Option<f64>,

    /// Print results as JSON
    #[arg(long)]
    pub json: bool,

    /// Print the built-in ingredient catalog and exit
    #[arg(long)]
    pub list_catalog: bool,
}

fn parse_threshold(value: &str) -> Result<f64, ConfigError> {
    parse_number("--threshold", value)
}

impl Cli {
    /// Builds a selection with duplicates removed, keeping first-seen order.
    pub fn selection(&self) -> Selection {
        fn dedup(ids: &[String]) -> Vec<String> {
            let mut out: Vec<String> = Vec::new();
            for id in ids.iter().map(|id| id.trim()).filter(|id| !id.is_empty()) {
                if !out.iter().any(|existing| existing == id) {
                    out.push(id.to_string());
                }
            }
            out
        }

        Selection {
            proteins: dedup(&self.proteins),
            vegetables: dedup(&self.vegetables),
            herbs_and_spices: dedup(&self.herbs),
            cookware: dedup(&self.cookware),
        }
    }

    /// Applies command line overrides on top of `base`.
    pub fn apply_overrides(&self, mut base: MatchConfig) -> MatchConfig {
        if let Some(law) = self.law {
            base.law = law;
        }
        if let Some(threshold) = self.threshold {
            base.threshold = threshold;
        }
        base
    }
}

pub fn parse_args() -> Cli {
    Cli::parse()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_selection_from_args() {
        let cli = Cli::try_parse_from([
            "pantry-match",
            "--recipes",
            "recipes.csv",
            "--proteins",
            "pork-chop,bacon,pork-chop",
            "--cookware",
            "skillet",
        ])
        .unwrap();
        let selection = cli.selection();
        assert_eq!(selection.proteins, vec!["pork-chop", "bacon"]);
        assert_eq!(selection.cookware, vec!["skillet"]);
        assert!(selection.vegetables.is_empty());
    }

    #[test]
    fn test_overrides() {
        let cli = Cli::try_parse_from([
            "pantry-match",
            "-r",
            "recipes.csv",
            "--law",
            "tag-overlap",
            "--threshold",
            "20",
        ])
        .unwrap();
        let config = cli.apply_overrides(MatchConfig::default());
        assert_eq!(config.law, ScoringLaw::TagOverlap);
        assert_eq!(config.threshold, 20.0);
        assert_eq!(config.tag_bonus, 10.0);
    }

    #[test]
    fn test_threshold_must_be_finite() {
        for bad in ["nan", "NaN", "inf", "-inf", "lots"] {
            let result = Cli::try_parse_from(["pantry-match", "-r", "recipes.csv", "--threshold", bad]);
            let err = result.unwrap_err().to_string();
            assert!(err.contains("--threshold must be a finite number"), "{}: {}", bad, err);
        }
        let cli = Cli::try_parse_from(["pantry-match", "-r", "recipes.csv", "--threshold", "-5"]).unwrap();
        assert_eq!(cli.threshold, Some(-5.0));
    }

    #[test]
    fn test_recipes_required_unless_listing_catalog() {
        assert!(Cli::try_parse_from(["pantry-match"]).is_err());
        assert!(Cli::try_parse_from(["pantry-match", "--list-catalog"]).is_ok());
    }
}
