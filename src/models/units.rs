/// One row of the unit table: every spelling in a row normalizes to `canonical`
struct UnitVariant {
    long: &'static str,
    short: &'static str,
    canonical: &'static str,
}

const UNIT_TABLE: &[UnitVariant] = &[
    UnitVariant { long: "tablespoons", short: "tbsps", canonical: "tbsp" },
    UnitVariant { long: "tablespoon", short: "tbsp", canonical: "tbsp" },
    UnitVariant { long: "teaspoons", short: "tsps", canonical: "tsp" },
    UnitVariant { long: "teaspoon", short: "tsp", canonical: "tsp" },
    UnitVariant { long: "ounces", short: "ozs", canonical: "oz" },
    UnitVariant { long: "ounce", short: "oz", canonical: "oz" },
    UnitVariant { long: "cups", short: "cups", canonical: "cup" },
    UnitVariant { long: "cup", short: "cup", canonical: "cup" },
    UnitVariant { long: "pounds", short: "lbs", canonical: "pound" },
    UnitVariant { long: "pound", short: "lb", canonical: "pound" },
    UnitVariant { long: "kilograms", short: "kgs", canonical: "kg" },
    UnitVariant { long: "kilogram", short: "kg", canonical: "kg" },
    UnitVariant { long: "grams", short: "g", canonical: "g" },
    UnitVariant { long: "gram", short: "g", canonical: "g" },
    UnitVariant { long: "milliliters", short: "ml", canonical: "ml" },
    UnitVariant { long: "milliliter", short: "ml", canonical: "ml" },
];

/// Look up the canonical short form of a unit spelling
///
/// Matching ignores case and a single trailing `.` or `,` so that
/// "Tbsp." and "cups," are recognized.
pub fn canonical_unit(token: &str) -> Option<&'static str> {
    let token = token.trim_end_matches(['.', ',']).to_lowercase();
    UNIT_TABLE
        .iter()
        .find(|variant| {
            variant.long == token || variant.short == token || variant.canonical == token
        })
        .map(|variant| variant.canonical)
}

/// Canonicalize a token, passing unknown tokens through verbatim
pub fn canonicalize(token: &str) -> &str {
    canonical_unit(token).unwrap_or(token)
}

/// All canonical unit forms, in table order without duplicates
pub fn canonical_units() -> Vec<&'static str> {
    let mut units: Vec<&'static str> = Vec::new();
    for variant in UNIT_TABLE {
        if !units.contains(&variant.canonical) {
            units.push(variant.canonical);
        }
    }
    units
}
