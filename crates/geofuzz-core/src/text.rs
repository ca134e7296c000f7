// crates/geofuzz-core/src/text.rs

/// Convert a name or query into the key used for indexing and comparison.
///
/// This performs:
/// 1\) Transliterate Unicode → ASCII (e.g. `Łódź` -> `Lodz`, `Москва` -> `Moskva`)
/// 2\) Normalize to lowercase
/// 3\) Turn every non-alphanumeric character into a token separator
/// 4\) Collapse runs of whitespace and trim
///
/// The same function runs at index build time and at query time, so equal
/// inputs always produce equal keys. An input made only of punctuation or of
/// characters `deunicode` cannot transliterate folds to the empty string.
///
/// # Examples
///
/// ```rust
/// use geofuzz_core::text::normalize;
///
/// assert_eq!(normalize("  Łódź "), "lodz");
/// assert_eq!(normalize("Sankt-Peterburg"), "sankt peterburg");
/// assert_eq!(normalize("Москва"), "moskva");
/// ```
pub fn normalize(s: &str) -> String {
    let folded = deunicode::deunicode_with_tofu(s, " ");
    let mut out = String::with_capacity(folded.len());
    let mut pending_space = false;
    for ch in folded.chars() {
        if ch.is_ascii_alphanumeric() {
            if pending_space && !out.is_empty() {
                out.push(' ');
            }
            pending_space = false;
            out.push(ch.to_ascii_lowercase());
        } else {
            pending_space = true;
        }
    }
    out
}

/// Splits a GeoNames `alternatenames` column into individual names.
///
/// The column is comma separated; pieces are trimmed, empty pieces are
/// dropped and the source order is kept.
///
/// ```rust
/// use geofuzz_core::text::split_alternate_names;
///
/// assert_eq!(
///     split_alternate_names("Moskva, Москва,,Moscou"),
///     vec!["Moskva", "Москва", "Moscou"]
/// );
/// ```
pub fn split_alternate_names(column: &str) -> Vec<String> {
    column
        .split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_owned)
        .collect()
}

/// Normalizes a country filter: trimmed and uppercased, `None` when empty.
pub fn country_key(code: &str) -> Option<String> {
    let code = code.trim();
    if code.is_empty() {
        None
    } else {
        Some(code.to_ascii_uppercase())
    }
}
