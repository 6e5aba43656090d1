//! Best-effort parsing of free-text ingredient lines.
//!
//! A line such as `"1 1/2 Cups (12 ounces) flour"` becomes
//! `{count: 1.5, unit: "cup", ingredient: "flour"}`. The parser never fails;
//! anything it cannot make sense of ends up in the ingredient name.

use crate::model::Ingredient;

/// Unit spellings and the canonical short form they collapse to
const UNIT_SYNONYMS: &[(&str, &str)] = &[
    ("tablespoons", "tbsp"),
    ("tablespoon", "tbsp"),
    ("tbsps", "tbsp"),
    ("tbsp", "tbsp"),
    ("tbs", "tbsp"),
    ("teaspoons", "tsp"),
    ("teaspoon", "tsp"),
    ("tsps", "tsp"),
    ("tsp", "tsp"),
    ("ounces", "oz"),
    ("ounce", "oz"),
    ("oz", "oz"),
    ("cups", "cup"),
    ("cup", "cup"),
    ("pounds", "pound"),
    ("pound", "pound"),
    ("lbs", "pound"),
    ("lb", "pound"),
    ("kilograms", "kg"),
    ("kilogram", "kg"),
    ("kg", "kg"),
    ("grams", "g"),
    ("gram", "g"),
    ("g", "g"),
];

const VULGAR_FRACTIONS: &[(char, f64)] = &[
    ('½', 0.5),
    ('⅓', 1.0 / 3.0),
    ('⅔', 2.0 / 3.0),
    ('¼', 0.25),
    ('¾', 0.75),
    ('⅛', 0.125),
];

/// Map a word to its canonical unit, if it is one
pub fn canonical_unit(word: &str) -> Option<&'static str> {
    let word = word.trim_end_matches(['.', ',']);
    UNIT_SYNONYMS
        .iter()
        .find(|(synonym, _)| *synonym == word)
        .map(|(_, unit)| *unit)
}

/// Parse one ingredient line into a structured guess
pub fn parse_ingredient(line: &str) -> Ingredient {
    let lowered = line.to_lowercase();
    let cleaned = strip_parentheses(&lowered);
    let tokens: Vec<&str> = cleaned.split_whitespace().collect();

    // Leading quantities add up: "1 1/2" is one and a half
    let mut count: Option<f64> = None;
    let mut idx = 0;
    while let Some(value) = tokens.get(idx).and_then(|t| parse_quantity(t)) {
        count = Some(count.unwrap_or(0.0) + value);
        idx += 1;
    }

    let (unit, rest) = match tokens.get(idx).and_then(|t| canonical_unit(t)) {
        Some(unit) => (unit.to_string(), &tokens[idx + 1..]),
        None => (String::new(), &tokens[idx..]),
    };

    Ingredient {
        count,
        unit,
        ingredient: rest.join(" "),
    }
}

/// Remove `( ... )` asides, nested or not
fn strip_parentheses(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut depth = 0usize;
    for c in text.chars() {
        match c {
            '(' => {
                depth += 1;
                out.push(' ');
            }
            ')' if depth > 0 => depth -= 1,
            _ if depth == 0 => out.push(c),
            _ => {}
        }
    }
    out
}

/// Parse a quantity token: `2`, `0.5`, `1/2`, `½`, `1-1/2` (mixed) or `1-2` (range, lower bound)
fn parse_quantity(token: &str) -> Option<f64> {
    let token = token.trim_end_matches(',');

    if let Some((whole, frac)) = token.split_once('-') {
        let whole = parse_number(whole)?;
        return if frac.contains('/') {
            parse_number(frac).map(|f| whole + f)
        } else {
            parse_number(frac).map(|_| whole)
        };
    }

    parse_number(token)
}

fn parse_number(token: &str) -> Option<f64> {
    if let Some((_, value)) = VULGAR_FRACTIONS
        .iter()
        .find(|(c, _)| token.chars().eq(std::iter::once(*c)))
    {
        return Some(*value);
    }

    if let Some((num, den)) = token.split_once('/') {
        let num: u32 = num.parse().ok()?;
        let den: u32 = den.parse().ok()?;
        return (den != 0).then(|| f64::from(num) / f64::from(den));
    }

    // f64::from_str also accepts "inf" and "nan"
    if token.is_empty() || !token.chars().all(|c| c.is_ascii_digit() || c == '.') {
        return None;
    }
    token.parse().ok()
}
