//! End-to-end tests: annotator JSON in, gist out

use gist_core::PipelineConfig;
use gist_parser::{AnnotationParser, JsonAnnotationParser};
use gist_summarizer::{ingest, summarize, Pipeline};

const DOCUMENT: &str = r#"{
    "sentences": [
        {
            "text": "In 1990 , the company grew its sales .",
            "tokens": [
                {"text": "In", "ner": "O"},
                {"text": "1990", "ner": "DATE"},
                {"text": ",", "ner": "O"},
                {"text": "the", "ner": "O"},
                {"text": "company", "ner": "O"},
                {"text": "grew", "ner": "O"},
                {"text": "its", "ner": "O"},
                {"text": "sales", "ner": "O"}
            ],
            "triples": [
                {"subject": "the company", "relation": "Grew", "object": "its sales", "confidence": "1.000"},
                {"subject": "company", "relation": "grew", "object": "sales", "confidence": "1.000"}
            ]
        },
        {
            "text": "He left today .",
            "tokens": [
                {"text": "He", "ner": "O"},
                {"text": "left", "ner": "O"},
                {"text": "today", "ner": "DATE"}
            ],
            "triples": [
                {"subject": "he", "relation": "left", "object": "today", "confidence": 0.54}
            ]
        },
        {
            "text": "On March 3 , 1990 , sales peaked at $ 5 million in 1990 .",
            "tokens": [
                {"text": "On", "ner": "O"},
                {"text": "March", "ner": "DATE"},
                {"text": "3", "ner": "DATE"},
                {"text": ",", "ner": "DATE"},
                {"text": "1990", "ner": "DATE"},
                {"text": "sales", "ner": "O"},
                {"text": "peaked", "ner": "O"}
            ],
            "triples": [
                {"subject": "sales", "relation": "peaked at", "object": "$ 5 million in 1990", "confidence": "1.0"},
                {"subject": "sales", "relation": "peaked", "object": "in 1990", "confidence": "1.0"}
            ]
        },
        {
            "text": "John 's brother founded the firm in the 1980s .",
            "tokens": [
                {"text": "John", "ner": "PERSON"},
                {"text": "1980s", "ner": "DATE"}
            ],
            "triples": [
                {"subject": "John 's brother", "relation": "founded", "object": "the firm in the 1980s", "confidence": "1.0"}
            ]
        }
    ]
}"#;

#[test]
fn test_summarize_document() {
    let document = JsonAnnotationParser.parse_str(DOCUMENT).unwrap();
    let report = summarize(&document, &PipelineConfig::default()).unwrap();

    assert_eq!(
        report.summary,
        "The company grew its sales in 1990. \
         Sales peaked at $5 million in 1990 on March 3 1990. \
         John's brother founded the firm in the 1980s. "
    );
    assert_eq!(report.removed_sentences, vec!["He left today .".to_string()]);
    assert_eq!(report.stats.triples_in, 6);
    assert_eq!(report.stats.triples_purged, 2);
    assert_eq!(report.stats.sentences_fused, 2);
}

#[test]
fn test_repeated_date_still_fused() {
    let document = JsonAnnotationParser
        .parse_str(
            r#"{
                "sentences": [{
                    "text": "1990 sales beat the 1990 forecast .",
                    "tokens": [
                        {"text": "1990", "ner": "DATE"},
                        {"text": "sales", "ner": "O"},
                        {"text": "beat", "ner": "O"},
                        {"text": "1990", "ner": "DATE"}
                    ],
                    "triples": [
                        {"subject": "sales", "relation": "beat", "object": "the forecast", "confidence": "1.0"}
                    ]
                }]
            }"#,
        )
        .unwrap();
    let report = summarize(&document, &PipelineConfig::default()).unwrap();

    assert_eq!(report.summary, "Sales beat the forecast in 1990. ");
    assert!(report.summary.ends_with(" in 1990. "));
    assert_eq!(report.stats.sentences_fused, 1);
}

#[test]
fn test_summarize_without_fusion() {
    let document = JsonAnnotationParser.parse_str(DOCUMENT).unwrap();
    let config = PipelineConfig {
        fuse_time: false,
        ..Default::default()
    };
    let report = summarize(&document, &config).unwrap();

    assert_eq!(
        report.summary,
        "The company grew its sales. \
         Sales peaked at $5 million in 1990. \
         John's brother founded the firm in the 1980s. "
    );
}

#[test]
fn test_dump_is_unfiltered() {
    let document = JsonAnnotationParser.parse_str(DOCUMENT).unwrap();
    let ingested = ingest(&document, &PipelineConfig::default());
    let dump = ingested.dump();

    assert!(dump.contains("He left today .\n   [he | left | today]\n"));
    assert!(dump.contains("1990 -> DATE\n"));
    assert!(dump.contains("John -> PERSON\n"));
}

#[test]
fn test_dump_after_run_lists_survivors() {
    let document = JsonAnnotationParser.parse_str(DOCUMENT).unwrap();
    let mut ingested = ingest(&document, &PipelineConfig::default());

    Pipeline::default().run(&mut ingested.network).unwrap();
    let dump = ingested.dump();

    assert!(!dump.contains("He left today ."));
    assert!(!dump.contains("[company | grew | sales]"));
    assert!(dump.contains("In 1990 , the company grew its sales .\n   [the company | Grew | its sales]\n"));
    assert!(dump.contains("1990 -> DATE\n"));
}

#[test]
fn test_pipeline_leaves_network_selected() {
    let document = JsonAnnotationParser.parse_str(DOCUMENT).unwrap();
    let mut ingested = ingest(&document, &PipelineConfig::default());

    Pipeline::default().run(&mut ingested.network).unwrap();

    let ordinals: Vec<u32> = ingested.network.sentences().map(|s| s.ordinal()).collect();
    assert_eq!(ordinals, vec![1, 3, 4]);
    assert_eq!(
        ingested.network.compressed_text().unwrap(),
        "The company grew its sales. Sales peaked at $5 million in 1990. John's brother founded the firm in the 1980s. "
    );
}

#[test]
fn test_report_serializes() {
    let document = JsonAnnotationParser.parse_str(DOCUMENT).unwrap();
    let report = summarize(&document, &PipelineConfig::default()).unwrap();

    let json = serde_json::to_value(&report).unwrap();
    assert_eq!(json["stats"]["sentences_kept"], 3);
    assert_eq!(json["removed_triples"][0]["actor"], "company");
}
