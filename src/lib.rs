pub mod config;
pub mod extract;
pub mod input;
pub mod normalize;
pub mod registry;
pub mod report;
pub mod validate;

pub use config::{
    check_mapper, load_config, parse_config, CheckerConfig, ConfigError, MapperError, DEFAULT_CONFIG_FILE,
    DEFAULT_QUESTIONS_PATH,
};
pub use extract::{extract_book_names, is_no_reference, ExtractionRule, MIN_SINGLE_TOKEN_CHARS};
pub use input::{load_questions, parse_questions, InputError, QuestionSet};
pub use normalize::{normalize_book_name, DIACRITIC_FOLDS};
pub use registry::{CanonicalBook, CanonicalRegistry, Testament, LAST_OLD_TESTAMENT_ORDINAL};
pub use report::{
    format_success_rate, render, render_counters, render_details, render_ids, render_summary, OutputFilter,
};
pub use validate::{
    classify, classify_all, BookCandidate, MatchedBook, NoReferenceEntry, QuestionRecord, ReferenceClassification,
    ReportEntry, UnmatchedBook, ValidationReport, Validator, UNKNOWN_ID,
};
