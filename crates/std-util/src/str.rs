use heck::ToSnakeCase;

/// Converts an identifier such as `UserProfile` to `user_profile`.
pub fn snake_case(src: &str) -> String {
    src.to_snake_case()
}

/// Pluralizes the last word of a snake case name: `user_profile` becomes
/// `user_profiles`.
pub fn pluralize(src: &str) -> String {
    match src.rsplit_once('_') {
        Some((head, last)) => format!("{head}_{}", pluralizer::pluralize(last, 2, false)),
        None => pluralizer::pluralize(src, 2, false),
    }
}
