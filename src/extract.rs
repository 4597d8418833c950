use once_cell::sync::Lazy;
use regex::Regex;

// "Genesis 2 en 3", "Johannes 3 en verder"
static RANGE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^(.+?)\s+(?:\d+\s+en\s+\d+|\d+\s*en\s*[a-zA-Z]*)").unwrap());
// "1 en 2 Korintiërs 5"
static LEADING_DUAL_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^(?:\d+\s+en\s+\d+)\s+(.+?)(?:\s+\d+|$)").unwrap());
// "1 Korintiërs 13:4", "Nieuwe testament"
static SINGLE_BOOK_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^([a-zA-Z\x{C0}-\x{17F}\s\d.]+?)(?:\s+\d+|$)").unwrap());
// "Ruth 1", must start with a letter
static SINGLE_TOKEN_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^([a-zA-Z\x{C0}-\x{17F}][a-zA-Z\x{C0}-\x{17F}\s\d.]*?)(?:\s+\d+|$)").unwrap()
});
static ALL_DIGITS_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^\d+$").unwrap());

/// Shortest span the single-token rule accepts as a book name.
pub const MIN_SINGLE_TOKEN_CHARS: usize = 3;

/// Independent extraction rules. Every rule runs against every reference;
/// overlapping or contradicting results are resolved later by registry lookup.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExtractionRule {
    /// Book name before a trailing `<n> en <n>` or `<n> en <word>` range.
    Range,
    /// Book name after a leading `<n> en <n>` prefix, without trailing chapter.
    LeadingDualNumber,
    /// Leading run of letters/digits/periods/spaces before a trailing chapter number.
    TrimmedSingleBook,
    /// Same as `TrimmedSingleBook`, but must start with a letter and be at least three chars.
    FallbackSingleToken,
}

impl ExtractionRule {
    /// Rules in the order their candidates are collected.
    pub const ALL: [ExtractionRule; 4] = [
        ExtractionRule::Range,
        ExtractionRule::LeadingDualNumber,
        ExtractionRule::TrimmedSingleBook,
        ExtractionRule::FallbackSingleToken,
    ];

    pub fn name(self) -> &'static str {
        match self {
            ExtractionRule::Range => "range",
            ExtractionRule::LeadingDualNumber => "leading_dual_number",
            ExtractionRule::TrimmedSingleBook => "trimmed_single_book",
            ExtractionRule::FallbackSingleToken => "fallback_single_token",
        }
    }

    fn pattern(self) -> &'static Regex {
        match self {
            ExtractionRule::Range => &*RANGE_RE,
            ExtractionRule::LeadingDualNumber => &*LEADING_DUAL_RE,
            ExtractionRule::TrimmedSingleBook => &*SINGLE_BOOK_RE,
            ExtractionRule::FallbackSingleToken => &*SINGLE_TOKEN_RE,
        }
    }

    /// Apply the rule to an already trimmed reference, yielding at most one candidate.
    pub fn apply(self, reference: &str) -> Option<String> {
        let caps = self.pattern().captures(reference)?;
        let name = caps.get(1)?.as_str().trim();
        let accepted = match self {
            ExtractionRule::Range | ExtractionRule::LeadingDualNumber => true,
            ExtractionRule::TrimmedSingleBook => !ALL_DIGITS_RE.is_match(name),
            ExtractionRule::FallbackSingleToken => {
                !ALL_DIGITS_RE.is_match(name) && name.chars().count() >= MIN_SINGLE_TOKEN_CHARS
            }
        };
        accepted.then(|| name.to_string())
    }
}

/// True when a reference counts as absent: empty, whitespace-only or the literal `null` (any case).
pub fn is_no_reference(reference: &str) -> bool {
    let trimmed = reference.trim();
    trimmed.is_empty() || trimmed.eq_ignore_ascii_case("null")
}

/// Extract candidate book names from a free-text citation.
/// Returns de-duplicated candidates in first-seen rule order; absent references yield none.
pub fn extract_book_names(reference: &str) -> Vec<String> {
    if is_no_reference(reference) {
        return Vec::new();
    }
    let reference = reference.trim();
    let mut names: Vec<String> = Vec::new();
    for rule in ExtractionRule::ALL {
        if let Some(name) = rule.apply(reference) {
            if !names.contains(&name) {
                names.push(name);
            }
        }
    }
    names
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_digits_guard_matches_whole_span_only() {
        assert!(ALL_DIGITS_RE.is_match("12"));
        assert!(!ALL_DIGITS_RE.is_match("1 en"));
        assert!(!ALL_DIGITS_RE.is_match(""));
    }

    #[test]
    fn rule_names_are_distinct() {
        let mut names: Vec<&str> = ExtractionRule::ALL.iter().map(|r| r.name()).collect();
        names.dedup();
        assert_eq!(names.len(), 4);
    }
}
