use std::fmt;
use std::sync::LazyLock;

use regex::Regex;

use super::quantity::format_count;
use super::units::canonical_unit;

/// Parenthetical asides such as "(8 ounce)" or "(optional)"
static PARENTHETICAL: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\([^)]*\)").expect("parenthetical pattern is valid"));

const UNICODE_FRACTIONS: &[(char, &str)] = &[
    ('¼', "1/4"),
    ('½', "1/2"),
    ('¾', "3/4"),
    ('⅓', "1/3"),
    ('⅔', "2/3"),
    ('⅕', "1/5"),
    ('⅖', "2/5"),
    ('⅗', "3/5"),
    ('⅘', "4/5"),
    ('⅙', "1/6"),
    ('⅚', "5/6"),
    ('⅛', "1/8"),
    ('⅜', "3/8"),
    ('⅝', "5/8"),
    ('⅞', "7/8"),
];

/// A recipe ingredient split into quantity, unit and name
#[derive(Debug, Clone, PartialEq)]
pub struct StructuredIngredient {
    /// `None` when the source line carried no quantity
    pub count: Option<f64>,
    /// Canonical unit, or empty when no unit was recognized
    pub unit: String,
    pub ingredient: String,
}

impl StructuredIngredient {
    /// Rescale the count from `old_servings` to `new_servings`, leaving a missing count missing
    pub fn rescale(&mut self, old_servings: u32, new_servings: u32) {
        self.count = self
            .count
            .map(|count| count * f64::from(new_servings) / f64::from(old_servings));
    }
}

impl fmt::Display for StructuredIngredient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let count = format_count(self.count);
        let parts: Vec<&str> = [count.as_str(), self.unit.as_str(), self.ingredient.as_str()]
            .into_iter()
            .filter(|part| !part.is_empty())
            .collect();
        write!(f, "{}", parts.join(" "))
    }
}

/// Parse one free-text ingredient line
///
/// Returns `None` only for blank lines. Any other input yields an
/// ingredient with a non-empty name, falling back to progressively less
/// processed text when stripping the quantity and unit leaves nothing.
pub fn parse_ingredient(line: &str) -> Option<StructuredIngredient> {
    let normalized = normalize_fractions(line);
    if normalized.trim().is_empty() {
        return None;
    }

    let without_asides = PARENTHETICAL.replace_all(&normalized, " ");
    let mut tokens: Vec<&str> = without_asides.split_whitespace().collect();

    let unit_index = tokens
        .iter()
        .position(|token| canonical_unit(token).is_some());
    let unit = unit_index.and_then(|index| canonical_unit(tokens.remove(index)));

    // Only tokens before the unit may form the count
    let count_span = unit_index.unwrap_or(tokens.len());
    let number_at = |index: usize| {
        tokens[..count_span]
            .get(index)
            .and_then(|token| parse_number(token))
    };
    let first = number_at(0);
    let second = number_at(1);
    let (count, consumed) = match (first, second) {
        // The "4 1/2" idiom
        (Some(whole), Some(fraction)) => (Some(whole.trunc() + fraction), 2),
        (Some(value), None) => (Some(value), 1),
        (None, _) => (None, 0),
    };
    tokens.drain(..consumed);

    let mut ingredient = tokens.join(" ").to_lowercase().trim().to_string();
    if ingredient.is_empty() {
        ingredient = fallback_name(&normalized, unit, consumed);
    }

    Some(StructuredIngredient {
        count,
        unit: unit.unwrap_or_default().to_string(),
        ingredient,
    })
}

/// Name for lines whose remainder is empty once asides, unit and count are gone
fn fallback_name(normalized: &str, unit: Option<&str>, consumed: usize) -> String {
    let mut tokens: Vec<&str> = normalized.split_whitespace().collect();

    if unit.is_some() {
        if let Some(index) = tokens.iter().position(|token| canonical_unit(token).is_some()) {
            tokens.remove(index);
        }
    }
    let leading_numbers = tokens
        .iter()
        .take(consumed)
        .take_while(|token| parse_number(token).is_some())
        .count();
    tokens.drain(..leading_numbers);

    let name = tokens.join(" ").to_lowercase();
    if name.is_empty() {
        normalized.split_whitespace().collect::<Vec<_>>().join(" ").to_lowercase()
    } else {
        name
    }
}

fn normalize_fractions(line: &str) -> String {
    let mut normalized = String::with_capacity(line.len());
    for c in line.chars() {
        match UNICODE_FRACTIONS.iter().find(|(glyph, _)| *glyph == c) {
            Some((_, ascii)) => {
                normalized.push(' ');
                normalized.push_str(ascii);
                normalized.push(' ');
            }
            None => normalized.push(c),
        }
    }
    normalized
}

fn is_digits(text: &str) -> bool {
    !text.is_empty() && text.chars().all(|c| c.is_ascii_digit())
}

/// Parse an integer, decimal or "x/y" fraction token
fn parse_number(token: &str) -> Option<f64> {
    match token.split_once('/') {
        Some((numerator, denominator)) => {
            if !is_digits(numerator) || !is_digits(denominator) {
                return None;
            }
            let denominator: f64 = denominator.parse().ok()?;
            if denominator == 0.0 {
                return None;
            }
            Some(numerator.parse::<f64>().ok()? / denominator)
        }
        None => {
            let numeric = token.chars().all(|c| c.is_ascii_digit() || c == '.')
                && token.chars().any(|c| c.is_ascii_digit());
            if numeric { token.parse().ok() } else { None }
        }
    }
}
