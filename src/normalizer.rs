//! Canonical comparable form for ingredient and cookware names.
//!
//! The output of [`normalize`] is only ever compared (equality / substring),
//! never shown to a user. Changing [`STOPLIST`] changes which recipes match,
//! so bump [`STOPLIST_VERSION`] whenever it is edited.

/// Version of [`STOPLIST`]. Matching outcomes are only reproducible for the same version.
pub const STOPLIST_VERSION: u32 = 1;

/// Words that describe preparation, size or measurement rather than what the ingredient is.
pub const STOPLIST: &[&str] = &[
    // preparation
    "fresh", "freshly", "chopped", "diced", "minced", "sliced", "grated", "crushed",
    "peeled", "shredded", "cubed", "julienned", "halved", "quartered", "trimmed",
    "rinsed", "drained", "softened", "melted", "beaten", "sifted", "dried",
    // degree
    "finely", "roughly", "coarsely", "thinly", "thickly",
    // size
    "large", "medium", "small",
    // filler
    "optional", "taste", "to", "of", "for", "and", "or", "about", "plus", "extra", "needed",
    // units
    "cup", "cups", "tablespoon", "tablespoons", "tbsp", "teaspoon", "teaspoons", "tsp",
    "ounce", "ounces", "oz", "pound", "pounds", "lb", "lbs", "g", "gram", "grams", "kg",
    "ml", "l", "liter", "liters", "pinch", "dash", "handful", "can", "cans", "package",
    "packages",
];

fn is_stopword(token: &str) -> bool {
    STOPLIST.contains(&token)
}

// "2", "1/2" (already split on '/'), "1.5", "½"
fn is_quantity(token: &str) -> bool {
    token.chars().all(|c| c.is_numeric() || c == '.')
}

/// Lower-cases, turns punctuation (except `'` and `-`) into spaces and collapses whitespace.
fn clean(text: &str) -> String {
    let lowered: String = text
        .to_lowercase()
        .chars()
        .map(|c| if c.is_alphanumeric() || c == '\'' || c == '-' { c } else { ' ' })
        .collect();
    lowered.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Turns any ingredient text into the form used for matching.
///
/// Total and deterministic: lower-case, trimmed, single-spaced, with quantities
/// and [`STOPLIST`] words removed. When removal would leave nothing, the cleaned
/// text is kept as-is so that e.g. `"Fresh"` still compares as `"fresh"`.
///
/// `normalize(&normalize(x)) == normalize(x)` for every input.
pub fn normalize(text: &str) -> String {
    let cleaned = clean(text);
    let kept: Vec<&str> = cleaned
        .split(' ')
        .filter(|token| !token.is_empty() && !is_quantity(token) && !is_stopword(token))
        .collect();

    if kept.is_empty() {
        cleaned
    } else {
        kept.join(" ")
    }
}

/// Comparable form for cookware: cleaned and lower-cased, no stoplist.
///
/// Unit words are part of cookware identity ("Measuring Cups", "Can Opener").
pub fn normalize_cookware(text: &str) -> String {
    clean(text)
}

/// Bidirectional substring test on two already-normalized names.
///
/// Empty names never match; the empty string is a substring of everything.
pub fn contains_either(a: &str, b: &str) -> bool {
    if a.is_empty() || b.is_empty() {
        return false;
    }
    a.contains(b) || b.contains(a)
}
