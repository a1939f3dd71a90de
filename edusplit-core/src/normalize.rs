//! Surface text normalization applied before any model call
//!
//! Models were trained on whitespace-normalized text over a limited
//! vocabulary. This module folds confusable out-of-vocabulary characters
//! to in-vocabulary equivalents and masks URL-like tokens, the same way
//! for the segmenter and the pairwise classifier.

/// Marker that replaces every URL-like token.
pub const HTML_MARKER: &str = "_html_";

/// Folds a single confusable character to its in-vocabulary equivalent.
///
/// Latin/Cyrillic look-alikes map to Cyrillic, curly quotes to guillemets,
/// rare emoji to one representative, Greek letters to alpha, CJK
/// characters to one representative. Everything else passes through.
fn fold_char(ch: char) -> char {
    match ch {
        // Latin look-alikes seen in Cyrillic text; capital X is not
        // folded, only the lowercase forms are
        'x' => 'х',
        'y' => 'у',
        // Dashes and quotes
        '\u{2014}' => '-',
        '“' | '‘' => '«',
        '”' | '’' => '»',
        // Emoji outside the vocabulary
        '😆' | '😊' | '😑' | '😔' | '😉' | '❗' | '🤔' | '😅' | '⚓' => '😄',
        // Greek letters
        'ε' | 'ζ' | 'η' | 'μ' | 'δ' | 'λ' | 'ν' | 'β' | 'γ' => 'α',
        // CJK characters
        'と' | 'の' | '神' | '隠' | 'し' => '尋',
        _ => ch,
    }
}

/// Normalizes a single whitespace-delimited token.
///
/// Applies [`fold_char`] to every character; if the folded token still
/// contains `"www"` or `"http"` anywhere, the whole token is replaced by
/// [`HTML_MARKER`].
pub fn normalize_token(token: &str) -> String {
    let folded: String = token.chars().map(fold_char).collect();

    if folded.contains("www") || folded.contains("http") {
        return HTML_MARKER.to_string();
    }
    folded
}

/// Normalizes a whitespace-separated sequence.
///
/// Splits on whitespace, normalizes each piece and rejoins with single
/// spaces. Original whitespace width is intentionally not preserved.
pub fn normalize_sequence(text: &str) -> String {
    text.split_whitespace()
        .map(normalize_token)
        .collect::<Vec<_>>()
        .join(" ")
}
