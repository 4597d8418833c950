use std::collections::HashMap;

use once_cell::sync::Lazy;
use serde::Serialize;

/// Normalized keys of the canonical mapper with their ordinal position.
const CANONICAL_BOOKS: [(&str, u8); 67] = [
    // Old Testament
    ("Genesis", 1),
    ("Exodus", 2),
    ("Leviticus", 3),
    ("Numeri", 4),
    ("Deuteronomium", 5),
    ("Jozua", 6),
    ("Richteren", 7),
    ("Ruth", 8),
    ("1 Samuel", 9),
    ("2 Samuel", 10),
    ("1 Koningen", 11),
    ("2 Koningen", 12),
    ("1 Kronieken", 13),
    ("2 Kronieken", 14),
    ("Ezra", 15),
    ("Nehemia", 16),
    ("Esther", 17),
    ("Job", 18),
    ("Psalmen", 19),
    ("Spreuken", 20),
    ("Prediker", 21),
    ("Hooglied", 22),
    ("Jesaja", 23),
    ("Jeremia", 24),
    ("Klaagliederen", 25),
    ("Ezechiel", 26),
    ("Daniel", 27),
    ("Hosea", 28),
    ("Joel", 29),
    ("Amos", 30),
    ("Obadja", 31),
    ("Jona", 32),
    ("Micha", 33),
    ("Nahum", 34),
    ("Habakuk", 35),
    ("Sefanja", 36),
    ("Haggai", 37),
    ("Zacharia", 38),
    ("Maleachi", 39),
    // New Testament
    ("Nieuwe testament", 40),
    ("Mattheus", 41),
    ("Markus", 42),
    ("Lukas", 43),
    ("Johannes", 44),
    ("Handelingen", 45),
    ("Romeinen", 46),
    ("1 Korintiers", 47),
    ("2 Korintiers", 48),
    ("Galaten", 49),
    ("Efeziers", 50),
    ("Filippenzen", 51),
    ("Kolossenzen", 52),
    ("1 Tessalonicenzen", 53),
    ("2 Tessalonicenzen", 54),
    ("1 Timoteus", 55),
    ("2 Timoteus", 56),
    ("Titus", 57),
    ("Filemon", 58),
    ("Hebreeen", 59),
    ("Jakobus", 60),
    ("1 Petrus", 61),
    ("2 Petrus", 62),
    ("1 Johannes", 63),
    ("2 Johannes", 64),
    ("3 Johannes", 65),
    ("Judas", 66),
    ("Openbaring", 67),
];

/// Keys whose display spelling lost its diacritics under normalization.
const RESTORED_NAMES: [(&str, &str); 12] = [
    ("Ezechiel", "Ezechiël"),
    ("Daniel", "Daniël"),
    ("Joel", "Joël"),
    ("1 Korintiers", "1 Korintiërs"),
    ("2 Korintiers", "2 Korintiërs"),
    ("Efeziers", "Efeziërs"),
    ("Hebreeen", "Hebreeën"),
    ("Mattheus", "Mattheüs"),
    ("1 Timoteus", "1 Timotheüs"),
    ("2 Timoteus", "2 Timotheüs"),
    ("1 Samuel", "1 Samuël"),
    ("2 Samuel", "2 Samuël"),
];

/// Last ordinal belonging to the Old Testament.
pub const LAST_OLD_TESTAMENT_ORDINAL: u8 = 39;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Testament {
    Old,
    New,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CanonicalBook {
    pub canonical_key: &'static str,
    pub ordinal: u8,
    pub display_name: &'static str,
}

impl CanonicalBook {
    pub fn testament(&self) -> Testament {
        if self.ordinal <= LAST_OLD_TESTAMENT_ORDINAL {
            Testament::Old
        } else {
            Testament::New
        }
    }
}

/// Read-only table of canonical book names, built once per process.
#[derive(Debug, Clone)]
pub struct CanonicalRegistry {
    books: Vec<CanonicalBook>,
    by_key: HashMap<&'static str, usize>,
}

static GLOBAL: Lazy<CanonicalRegistry> = Lazy::new(CanonicalRegistry::new);

impl CanonicalRegistry {
    pub fn new() -> Self {
        let restored: HashMap<&'static str, &'static str> = RESTORED_NAMES.iter().copied().collect();
        let books: Vec<CanonicalBook> = CANONICAL_BOOKS
            .iter()
            .map(|&(key, ordinal)| CanonicalBook {
                canonical_key: key,
                ordinal,
                display_name: restored.get(key).copied().unwrap_or(key),
            })
            .collect();
        let by_key = books.iter().enumerate().map(|(i, b)| (b.canonical_key, i)).collect();
        CanonicalRegistry { books, by_key }
    }

    /// Shared process-wide instance.
    pub fn global() -> &'static CanonicalRegistry {
        &GLOBAL
    }

    pub fn get(&self, normalized_key: &str) -> Option<&CanonicalBook> {
        self.by_key.get(normalized_key).map(|&i| &self.books[i])
    }

    pub fn is_valid(&self, normalized_key: &str) -> bool {
        self.by_key.contains_key(normalized_key)
    }

    /// Diacritic-restored spelling for a key, or the key itself when no restoration exists.
    pub fn display_name<'a>(&self, normalized_key: &'a str) -> &'a str {
        match self.get(normalized_key) {
            Some(book) => book.display_name,
            None => normalized_key,
        }
    }

    pub fn ordinal(&self, normalized_key: &str) -> Option<u8> {
        self.get(normalized_key).map(|b| b.ordinal)
    }

    pub fn testament(&self, normalized_key: &str) -> Option<Testament> {
        self.get(normalized_key).map(CanonicalBook::testament)
    }

    /// Books in ordinal order.
    pub fn books(&self) -> impl Iterator<Item = &CanonicalBook> {
        self.books.iter()
    }

    pub fn len(&self) -> usize {
        self.books.len()
    }

    pub fn is_empty(&self) -> bool {
        self.books.is_empty()
    }
}

impl Default for CanonicalRegistry {
    fn default() -> Self {
        Self::new()
    }
}
