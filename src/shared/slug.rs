//! District slug normalization.
//!
//! Every district identifier that enters the system, whether from the static
//! bound table, a Nominatim address field, or a client assertion, passes
//! through [`slugify`] so topic names stay stable: lowercase ASCII words
//! joined by single underscores. Normalizing an already-normalized slug is a
//! no-op.

use unicode_normalization::UnicodeNormalization;

/// Normalize free-text into a district slug.
///
/// NFD-decomposes the input, drops combining marks and everything else
/// outside ASCII, lowercases, collapses runs of non-alphanumeric ASCII into
/// single underscores, and trims leading/trailing underscores. Returns an
/// empty string when nothing survives.
pub fn slugify(input: &str) -> String {
    let mut slug = String::with_capacity(input.len());
    let mut pending_separator = false;

    for ch in input.nfd() {
        if !ch.is_ascii() {
            // Combining marks from the decomposition land here too.
            continue;
        }
        if ch.is_ascii_alphanumeric() {
            if pending_separator && !slug.is_empty() {
                slug.push('_');
            }
            pending_separator = false;
            slug.push(ch.to_ascii_lowercase());
        } else {
            pending_separator = true;
        }
    }

    slug
}

/// Human-readable label for a district slug: underscores become spaces and
/// each word is title-cased. Used when the sender supplied no location text.
pub fn display_name(slug: &str) -> String {
    slug.split('_')
        .filter(|word| !word.is_empty())
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect::<String>(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}
