use career_fit::assessment::{
    AnswerFormat, AnswerImportError, AnswerImporter, AssessmentError, Recommendation,
};
use std::io::Cursor;

const FULL_CSV: &str = "question_id,answer
psyc_1,4
psyc_2,3
psyc_3,4
psyc_4,3
psyc_5,4
psyc_6,4
tech_1,0
tech_2,1
tech_3,0
tech_4,0
tech_5,1
wiscar_1,0
wiscar_2,1
wiscar_3,0
wiscar_4,1
wiscar_5,0
wiscar_6,1
";

#[test]
fn csv_import_scores_complete_answer_sheet() {
    let session = AnswerImporter::default()
        .import_reader(Cursor::new(FULL_CSV), AnswerFormat::Csv)
        .expect("import succeeds");

    assert!(session.is_complete());
    assert_eq!(session.responses().len(), 17);

    let results = session.results().expect("scored");
    // (4+3+4+3+4+4)/24 of 100
    assert!((results.scores.psychometric - 2200.0 / 24.0).abs() < 1e-9);
    assert!((results.scores.technical - 80.0).abs() < 1e-9);
    assert!((results.wiscar_scores.skill - 80.0).abs() < 1e-9);
    assert!((results.wiscar_scores.interest - 75.0).abs() < 1e-9);
    assert_eq!(results.recommendation, Recommendation::StrongFit);
}

#[test]
fn csv_import_tolerates_partial_sheets() {
    let csv = "question_id,answer\ntech_1,0\ntech_2,\n";
    let session = AnswerImporter::default()
        .import_reader(Cursor::new(csv), AnswerFormat::Csv)
        .expect("import succeeds");

    let results = session.results().expect("scored");
    assert_eq!(session.responses().len(), 1);
    assert!((results.scores.overall - 40.0).abs() < 1e-9);
    assert!(results.alternative_roles.is_some());
}

#[test]
fn csv_import_rejects_out_of_range_option() {
    let error = AnswerImporter::default()
        .import_reader(
            Cursor::new("question_id,answer\nwiscar_1,4\n"),
            AnswerFormat::Csv,
        )
        .expect_err("option out of range");

    match error {
        AnswerImportError::Assessment(AssessmentError::OptionOutOfRange {
            question_id,
            answer,
            option_count,
        }) => {
            assert_eq!(question_id, "wiscar_1");
            assert_eq!(answer, 4);
            assert_eq!(option_count, 4);
        }
        other => panic!("expected out-of-range error, got {other:?}"),
    }
}

#[test]
fn csv_import_reports_malformed_rows() {
    let error = AnswerImporter::default()
        .import_reader(
            Cursor::new("question_id,answer\npsyc_1,often\n"),
            AnswerFormat::Csv,
        )
        .expect_err("non-numeric answer");
    assert!(matches!(error, AnswerImportError::Csv(_)));
}

#[test]
fn json_import_trusts_records_in_lenient_mode() {
    let json = r#"[
        {"questionId": "wiscar_4", "answer": 1, "category": "wiscar", "subcategory": "skill", "weight": 5},
        {"questionId": "wiscar_5", "answer": 6, "category": "wiscar", "subcategory": "cognitive", "weight": 5}
    ]"#;

    let session = AnswerImporter::new(false)
        .import_reader(Cursor::new(json), AnswerFormat::Json)
        .expect("lenient import");
    let results = session.results().expect("scored");

    assert!((results.wiscar_scores.skill - 80.0).abs() < 1e-9);
    assert_eq!(results.wiscar_scores.cognitive, 0.0);
    // the unscorable record still carries weight in the category average
    assert!((results.scores.wiscar - 40.0).abs() < 1e-9);
}

#[test]
fn json_import_rejects_unscorable_records_in_strict_mode() {
    let json = r#"[{"questionId": "wiscar_5", "answer": 6, "category": "wiscar", "subcategory": "cognitive", "weight": 5}]"#;

    let error = AnswerImporter::new(true)
        .import_reader(Cursor::new(json), AnswerFormat::Json)
        .expect_err("strict import rejects");

    match error {
        AnswerImportError::Rejected {
            question_id,
            reason,
        } => {
            assert_eq!(question_id, "wiscar_5");
            assert!(reason.contains("cognitive"));
        }
        other => panic!("expected rejection, got {other:?}"),
    }
}

#[test]
fn json_import_replaces_duplicate_question_ids() {
    let json = r#"[
        {"questionId": "tech_2", "answer": 0, "category": "technical", "subcategory": "interest-rates", "weight": 8},
        {"questionId": "tech_2", "answer": 1, "category": "technical", "subcategory": "interest-rates", "weight": 8}
    ]"#;

    let session = AnswerImporter::new(true)
        .import_reader(Cursor::new(json), AnswerFormat::Json)
        .expect("import");

    assert_eq!(session.responses().len(), 1);
    let results = session.results().expect("scored");
    assert!((results.scores.technical - 100.0).abs() < 1e-9);
}

#[test]
fn json_import_reports_invalid_documents() {
    let error = AnswerImporter::default()
        .import_reader(Cursor::new("{not json"), AnswerFormat::Json)
        .expect_err("invalid json");
    assert!(matches!(error, AnswerImportError::Json(_)));
}

#[test]
fn json_import_rejects_records_that_disagree_with_the_catalog_in_strict_mode() {
    let inflated = r#"[
        {"questionId": "psyc_1", "answer": 4, "category": "psychometric", "subcategory": "interest", "weight": 10},
        {"questionId": "psyc_2", "answer": 0, "category": "psychometric", "subcategory": "confidence", "weight": -5}
    ]"#;
    let relabeled = r#"[{"questionId": "tech_1", "answer": 0, "category": "wiscar", "subcategory": "will", "weight": 5}]"#;

    for (json, rejected_id) in [(inflated, "psyc_1"), (relabeled, "tech_1")] {
        let error = AnswerImporter::new(true)
            .import_reader(Cursor::new(json), AnswerFormat::Json)
            .expect_err("strict import rejects");
        match error {
            AnswerImportError::Rejected { question_id, .. } => {
                assert_eq!(question_id, rejected_id)
            }
            other => panic!("expected rejection, got {other:?}"),
        }
    }

    let error = AnswerImporter::new(true)
        .import_reader(
            Cursor::new(
                r#"[{"questionId": "psyc_2", "answer": 0, "category": "psychometric", "subcategory": "confidence", "weight": 0}]"#,
            ),
            AnswerFormat::Json,
        )
        .expect_err("zero weight rejected");
    assert!(error.to_string().contains("must be positive"));
}

#[test]
fn json_import_accepts_catalog_records_in_strict_mode() {
    let json = r#"[
        {"questionId": "psyc_1", "answer": 4, "category": "psychometric", "subcategory": "interest", "weight": 5},
        {"questionId": "wiscar_3", "answer": 0, "category": "wiscar", "subcategory": "will", "weight": 5}
    ]"#;

    let session = AnswerImporter::new(true)
        .import_reader(Cursor::new(json), AnswerFormat::Json)
        .expect("strict import accepts");
    let results = session.results().expect("scored");

    assert!((results.scores.psychometric - 100.0).abs() < 1e-9);
    assert!((results.wiscar_scores.will - 100.0).abs() < 1e-9);
    assert!((0.0..=100.0).contains(&results.scores.overall));
}
