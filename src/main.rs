use anyhow::{Context, Result};
use pantry_match::catalog::{Catalog, ItemKind};
use pantry_match::cli::parse_args;
use pantry_match::config::MatchConfig;
use pantry_match::matching::{MatchResult, MatchingEngine};
use pantry_match::recipe_loader::parse_recipes_csv;
use tokio::fs;
use tracing::info;
use tracing_subscriber::EnvFilter;

fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn print_catalog(catalog: &Catalog) {
    for kind in ItemKind::ALL {
        println!("{}", kind.label());
        for (category, items) in catalog.grouped_by_category(kind) {
            println!("  {}", category);
            for item in items {
                println!("    {:<20} {}", item.id, item.display_name);
            }
        }
    }
}

fn print_matches(matches: &[MatchResult<'_>]) {
    if matches.is_empty() {
        println!("No recipes match your selection.");
        return;
    }
    for (rank, result) in matches.iter().enumerate() {
        println!(
            "{:>2}. {:>3}% {} ({} min, {})",
            rank + 1,
            result.display_percentage(),
            result.recipe.title,
            result.recipe.cooking_time,
            result.recipe.difficulty
        );
        if !result.missing_ingredients.is_empty() {
            let missing: Vec<String> = result.missing_ingredients.iter().map(|i| i.display_line()).collect();
            println!("      missing ingredients: {}", missing.join(", "));
        }
        if !result.missing_cookware.is_empty() {
            let missing: Vec<&str> = result.missing_cookware.iter().map(|c| c.as_str()).collect();
            println!("      missing cookware: {}", missing.join(", "));
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenv::dotenv().ok(); // Load .env file for PANTRY_MATCH_* settings
    init_logging();

    let cli_args = parse_args();
    let catalog = Catalog::standard();

    if cli_args.list_catalog {
        print_catalog(catalog);
        return Ok(());
    }

    let config = cli_args.apply_overrides(MatchConfig::from_env()?);
    let recipe_file = cli_args
        .recipes
        .as_deref()
        .context("--recipes is required unless --list-catalog is given")?;

    info!("Reading recipes from {}", recipe_file);
    let csv_content = fs::read_to_string(recipe_file)
        .await
        .with_context(|| format!("Failed to read recipe file '{}'", recipe_file))?;
    let recipes = parse_recipes_csv(csv_content.as_bytes())
        .with_context(|| format!("Failed to parse recipe file '{}'", recipe_file))?;
    info!("Loaded {} recipes", recipes.len());

    let selection = cli_args.selection();
    let engine = MatchingEngine::new(catalog, config);
    let matches = engine.find_matches(&recipes, &selection);

    if cli_args.json {
        println!("{}", serde_json::to_string_pretty(&matches)?);
    } else {
        print_matches(&matches);
    }

    Ok(())
}
