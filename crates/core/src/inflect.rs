//! Identifier inflection: case transforms plus English pluralization with
//! irregular-noun support. The table names baked into migration filenames and
//! the identifiers in generated code must round-trip through these, so both
//! directions live here side by side.

/// Irregular noun pairs, singular then plural. Lookup is exact and applies to
/// the final underscore-separated segment, so `sales_person` pluralizes to
/// `sales_people`.
static IRREGULARS: &[(&str, &str)] = &[
    ("person", "people"),
    ("child", "children"),
    ("man", "men"),
    ("woman", "women"),
    ("mouse", "mice"),
    ("goose", "geese"),
];

/// Nouns whose singular and plural forms coincide.
static UNCOUNTABLES: &[&str] = &["sheep", "fish", "series", "species", "equipment"];

pub fn pluralize(word: &str) -> String {
    inflect_last_segment(word, pluralize_segment)
}

pub fn singularize(word: &str) -> String {
    inflect_last_segment(word, singularize_segment)
}

/// Insert `_` before every uppercase letter not at position 0, then lowercase.
pub fn to_snake_case(s: &str) -> String {
    let mut result = String::new();
    for (i, c) in s.chars().enumerate() {
        if c.is_uppercase() && i > 0 {
            result.push('_');
        }
        result.push(c.to_lowercase().next().unwrap_or(c));
    }
    result
}

/// StudlyCase: split on underscores, capitalize each segment, concatenate.
pub fn to_studly_case(s: &str) -> String {
    s.split('_')
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                None => String::new(),
                Some(first) => first.to_uppercase().collect::<String>() + &chars.collect::<String>(),
            }
        })
        .collect()
}

fn inflect_last_segment(word: &str, f: fn(&str) -> String) -> String {
    match word.rfind('_') {
        Some(idx) => {
            let (head, tail) = word.split_at(idx + 1);
            format!("{}{}", head, f(tail))
        }
        None => f(word),
    }
}

fn pluralize_segment(word: &str) -> String {
    if UNCOUNTABLES.contains(&word) {
        return word.to_string();
    }
    if let Some((_, plural)) = IRREGULARS.iter().find(|(s, _)| *s == word) {
        return (*plural).to_string();
    }
    if let Some(stem) = word.strip_suffix('y') {
        if !stem.is_empty() && !stem.ends_with(is_vowel) {
            return format!("{}ies", stem);
        }
    }
    if word.ends_with('s')
        || word.ends_with("sh")
        || word.ends_with("ch")
        || word.ends_with('x')
        || word.ends_with('z')
    {
        return format!("{}es", word);
    }
    format!("{}s", word)
}

fn singularize_segment(word: &str) -> String {
    if UNCOUNTABLES.contains(&word) {
        return word.to_string();
    }
    if let Some((singular, _)) = IRREGULARS.iter().find(|(_, p)| *p == word) {
        return (*singular).to_string();
    }
    if let Some(stem) = word.strip_suffix("ies") {
        if !stem.is_empty() {
            return format!("{}y", stem);
        }
    }
    for suffix in ["sses", "shes", "ches", "xes", "zes"] {
        if let Some(stem) = word.strip_suffix(suffix) {
            return format!("{}{}", stem, &suffix[..suffix.len() - 2]);
        }
    }
    if word.ends_with('s') && !word.ends_with("ss") {
        return word[..word.len() - 1].to_string();
    }
    word.to_string()
}

fn is_vowel(c: char) -> bool {
    matches!(c, 'a' | 'e' | 'i' | 'o' | 'u')
}
