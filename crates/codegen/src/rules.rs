//! Declared-type to validation-rule derivation. A static lookup table with a
//! default branch: unknown tokens fall back to the generic string rule, so
//! the derivation never fails.

static TYPE_RULES: &[(&str, &str)] = &[
    ("email", "nullable|email|max:255"),
    ("password", "nullable|string|min:8|max:255"),
];

static DEFAULT_RULE: &str = "nullable|string|max:255";

pub fn rule_for(declared_type: &str) -> &'static str {
    TYPE_RULES
        .iter()
        .find(|(token, _)| *token == declared_type)
        .map(|(_, rule)| *rule)
        .unwrap_or(DEFAULT_RULE)
}
