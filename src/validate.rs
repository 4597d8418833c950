use serde::Serialize;

use crate::extract::{extract_book_names, is_no_reference};
use crate::normalize::normalize_book_name;
use crate::registry::CanonicalRegistry;

/// Id reported for records that carry none.
pub const UNKNOWN_ID: &str = "unknown";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuestionRecord {
    pub id: String,
    pub biblical_reference: Option<String>,
}

impl QuestionRecord {
    pub fn new(id: impl Into<String>, biblical_reference: Option<&str>) -> Self {
        QuestionRecord { id: id.into(), biblical_reference: biblical_reference.map(str::to_string) }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BookCandidate {
    pub original_text: String,
    pub normalized_key: String,
}

impl BookCandidate {
    pub fn new(original_text: String) -> Self {
        let normalized_key = normalize_book_name(&original_text);
        BookCandidate { original_text, normalized_key }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MatchedBook {
    pub original: String,
    pub normalized: String,
    pub display_name: String,
    pub ordinal: u8,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UnmatchedBook {
    pub original: String,
    pub normalized: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum ReferenceClassification {
    NoReference,
    Valid { books: Vec<MatchedBook> },
    /// Only the candidates that failed lookup. Empty when nothing could be extracted.
    Invalid { books: Vec<UnmatchedBook> },
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReportEntry<B> {
    pub id: String,
    pub reference: Option<String>,
    pub books: Vec<B>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NoReferenceEntry {
    pub id: String,
    pub reference: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ValidationReport {
    pub total: usize,
    pub with_reference: usize,
    pub valid_count: usize,
    pub invalid_count: usize,
    pub no_reference_count: usize,
    pub valid: Vec<ReportEntry<MatchedBook>>,
    pub invalid: Vec<ReportEntry<UnmatchedBook>>,
    pub no_reference: Vec<NoReferenceEntry>,
}

impl ValidationReport {
    pub fn valid_ids(&self) -> Vec<&str> {
        self.valid.iter().map(|e| e.id.as_str()).collect()
    }

    pub fn invalid_ids(&self) -> Vec<&str> {
        self.invalid.iter().map(|e| e.id.as_str()).collect()
    }

    pub fn no_reference_ids(&self) -> Vec<&str> {
        self.no_reference.iter().map(|e| e.id.as_str()).collect()
    }

    /// Share of referenced questions that validated, as a percentage. Zero when nothing was referenced.
    pub fn success_rate(&self) -> f64 {
        if self.with_reference == 0 {
            return 0.0;
        }
        self.valid_count as f64 / self.with_reference as f64 * 100.0
    }

    /// 0 when no invalid references were found, 1 otherwise.
    pub fn exit_code(&self) -> i32 {
        if self.invalid_count == 0 {
            0
        } else {
            1
        }
    }

    fn push(&mut self, record: &QuestionRecord, classification: ReferenceClassification) {
        self.total += 1;
        let id = record.id.clone();
        let reference = record.biblical_reference.clone();
        match classification {
            ReferenceClassification::NoReference => {
                self.no_reference_count += 1;
                self.no_reference.push(NoReferenceEntry { id, reference });
            }
            ReferenceClassification::Valid { books } => {
                self.with_reference += 1;
                self.valid_count += 1;
                self.valid.push(ReportEntry { id, reference, books });
            }
            ReferenceClassification::Invalid { books } => {
                self.with_reference += 1;
                self.invalid_count += 1;
                self.invalid.push(ReportEntry { id, reference, books });
            }
        }
    }
}

/// Classifies citations against a canonical registry.
#[derive(Debug, Clone, Copy)]
pub struct Validator<'r> {
    registry: &'r CanonicalRegistry,
}

impl Default for Validator<'static> {
    fn default() -> Self {
        Validator::new(CanonicalRegistry::global())
    }
}

impl<'r> Validator<'r> {
    pub fn new(registry: &'r CanonicalRegistry) -> Self {
        Validator { registry }
    }

    pub fn classify(&self, record: &QuestionRecord) -> ReferenceClassification {
        self.classify_reference(record.biblical_reference.as_deref())
    }

    pub fn classify_reference(&self, reference: Option<&str>) -> ReferenceClassification {
        let Some(reference) = reference.filter(|r| !is_no_reference(r)) else {
            return ReferenceClassification::NoReference;
        };

        let mut matched = Vec::new();
        let mut unmatched = Vec::new();
        for candidate in extract_book_names(reference).into_iter().map(BookCandidate::new) {
            match self.registry.get(&candidate.normalized_key) {
                Some(book) => matched.push(MatchedBook {
                    display_name: book.display_name.to_string(),
                    ordinal: book.ordinal,
                    original: candidate.original_text,
                    normalized: candidate.normalized_key,
                }),
                None => unmatched.push(UnmatchedBook {
                    original: candidate.original_text,
                    normalized: candidate.normalized_key,
                }),
            }
        }

        // Nothing extractable from non-empty text is never a silent success.
        if matched.is_empty() || !unmatched.is_empty() {
            ReferenceClassification::Invalid { books: unmatched }
        } else {
            ReferenceClassification::Valid { books: matched }
        }
    }

    /// Classify every record in input order and aggregate the counts.
    pub fn classify_all(&self, records: &[QuestionRecord]) -> ValidationReport {
        let mut report = ValidationReport::default();
        for record in records {
            report.push(record, self.classify(record));
        }
        report
    }
}

/// Classify a single record against the process-wide registry.
pub fn classify(record: &QuestionRecord) -> ReferenceClassification {
    Validator::default().classify(record)
}

/// Classify a dataset against the process-wide registry.
pub fn classify_all(records: &[QuestionRecord]) -> ValidationReport {
    Validator::default().classify_all(records)
}
