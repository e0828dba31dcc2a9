//! Title resolution
//!
//! Maps a free-form query onto one canonical title by case-insensitive
//! containment.

/// Resolve `query` to the title that contains it
///
/// The query is uppercased and compared against every title in list order.
/// When several titles contain it, the last one in list order wins.
pub fn resolve<'t>(query: &str, titles: &'t [String]) -> Option<&'t str> {
    let needle = query.to_uppercase();
    titles
        .iter()
        .rev()
        .find(|title| title.contains(&needle))
        .map(String::as_str)
}
