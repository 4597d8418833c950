use bibleref_check::{
    classify_all, format_success_rate, render, render_details, render_ids, render_summary, OutputFilter,
    QuestionRecord, ValidationReport,
};

fn sample() -> ValidationReport {
    classify_all(&[
        QuestionRecord::new("n1", None),
        QuestionRecord::new("i1", Some("Atlantis 3")),
        QuestionRecord::new("v1", Some("Ezechiël 37")),
        QuestionRecord::new("v2", Some("Ruth 1")),
        QuestionRecord::new("i2", Some("Genesis:1")),
    ])
}

#[test]
fn no_filter_prints_counters_in_invalid_valid_none_order() {
    let out = render(&sample(), &OutputFilter::default());
    assert_eq!(out, "Invalid references: 2\nValid references: 2\nQuestions without references: 1\n");
}

#[test]
fn filters_list_ids_in_fixed_category_order() {
    let report = sample();
    let filter = OutputFilter { valid: false, invalid: true, no_reference: false };
    assert_eq!(render(&report, &filter), "i1\ni2\n");
    let all = OutputFilter { valid: true, invalid: true, no_reference: true };
    assert_eq!(render_ids(&report, &all), "v1\nv2\ni1\ni2\nn1\n");
    let two = OutputFilter { valid: false, invalid: true, no_reference: true };
    assert_eq!(render_ids(&report, &two), "i1\ni2\nn1\n");
}

#[test]
fn success_rate_has_one_decimal_and_handles_zero() {
    let report = classify_all(&[
        QuestionRecord::new("a", Some("Ruth 1")),
        QuestionRecord::new("b", Some("Ruth 2")),
        QuestionRecord::new("c", Some("Atlantis 3")),
    ]);
    assert_eq!(format_success_rate(&report), "66.7%");
    assert_eq!(format_success_rate(&classify_all(&[QuestionRecord::new("x", None)])), "0.0%");
}

#[test]
fn summary_reports_rate_and_verdict() {
    let out = render_summary(&sample());
    assert!(out.contains("SUMMARY"));
    assert!(out.contains("Success rate: 50.0% (2/4 references)"));
    assert!(out.contains("✗ 2 references need to be fixed"));

    let clean = classify_all(&[QuestionRecord::new("a", Some("Ruth 1"))]);
    assert!(render_summary(&clean).contains("✓ All biblical references are compatible with BibleBookMapper!"));
}

#[test]
fn details_list_books_and_flag_unextractable_references() {
    let out = render_details(&sample());
    assert!(out.contains("Total questions: 5"));
    assert!(out.contains("Questions with biblical references: 4"));
    assert!(out.contains("✓ VALID REFERENCES (2):"));
    assert!(out.contains("  v1: Ezechiël 37\n    Books: Ezechiël (→ Ezechiël)"));
    assert!(out.contains("✗ INVALID REFERENCES (2):"));
    assert!(out.contains("    Unrecognized books: Atlantis (→ Atlantis)"));
    assert!(out.contains("  i2: Genesis:1\n    Unrecognized books: (no book name could be extracted)"));
    assert!(out.contains("- NO REFERENCES (1):\n----------------------------------------\n  n1: null"));
}

#[test]
fn details_truncate_long_valid_and_no_reference_lists() {
    let mut records = Vec::new();
    for i in 0..12 {
        records.push(QuestionRecord::new(format!("v{}", i), Some("Job 1")));
    }
    for i in 0..7 {
        records.push(QuestionRecord::new(format!("n{}", i), None));
    }
    let out = render_details(&classify_all(&records));
    assert!(out.contains("  v9: Job 1"));
    assert!(!out.contains("  v10: Job 1"));
    assert!(out.contains("    ... and 2 more"));
    assert!(out.contains("  n4: null"));
    assert!(!out.contains("  n5: null"));
    assert!(!out.contains("INVALID REFERENCES"));
}
