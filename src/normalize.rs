use once_cell::sync::Lazy;
use regex::Regex;

/// Diacritic folds applied before punctuation stripping, in mapper order.
pub const DIACRITIC_FOLDS: [(char, char); 14] = [
    ('ë', 'e'),
    ('ï', 'i'),
    ('é', 'e'),
    ('è', 'e'),
    ('ê', 'e'),
    ('â', 'a'),
    ('ô', 'o'),
    ('û', 'u'),
    ('î', 'i'),
    ('ä', 'a'),
    ('ö', 'o'),
    ('ü', 'u'),
    ('ÿ', 'y'),
    ('ç', 'c'),
];

// Word characters are letters, numbers and `_` only; combining marks and joiners are stripped.
static NON_WORD: Lazy<Regex> = Lazy::new(|| Regex::new(r"[^\p{L}\p{N}_\s]").unwrap());

fn fold_char(c: char) -> char {
    DIACRITIC_FOLDS
        .iter()
        .find(|(from, _)| *from == c)
        .map(|(_, to)| *to)
        .unwrap_or(c)
}

/// Normalize a book name into the comparison key used by the canonical mapper.
/// - Trims surrounding whitespace
/// - Folds the fixed diacritic set to base letters (case is kept)
/// - Drops every character that is neither a word character nor whitespace
pub fn normalize_book_name(text: &str) -> String {
    let folded: String = text.trim().chars().map(fold_char).collect();
    NON_WORD.replace_all(&folded, "").trim().to_string()
}
