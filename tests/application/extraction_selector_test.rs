use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use anuvadakah::application::ports::{ExtractionStrategy, RawExtraction};
use anuvadakah::application::services::ExtractionSelector;
use anuvadakah::domain::{ErrorKind, ExtractionResult, Modality};

use crate::helpers::{
    Outcome, ScriptedStrategy, TEST_TIMEOUT, image_document, pdf_document, scripted, shared,
};

fn selector(chain: Vec<Arc<dyn ExtractionStrategy>>) -> ExtractionSelector {
    ExtractionSelector::new(TEST_TIMEOUT).with_chain(Modality::Pdf, chain)
}

#[tokio::test]
async fn given_first_strategy_fails_when_extracting_then_second_output_is_used() {
    let selector = selector(vec![
        scripted("first", Outcome::Fail),
        scripted("second", Outcome::Text("from second")),
    ]);

    let result = selector.extract(&pdf_document(b"%PDF")).await;

    assert_eq!(result.text(), Some("from second"));
}

#[tokio::test]
async fn given_first_strategy_succeeds_when_extracting_then_later_ones_never_run() {
    let later_calls = Arc::new(AtomicUsize::new(0));
    let selector = selector(vec![
        scripted("first", Outcome::Text("done")),
        shared(ScriptedStrategy::new("second", Outcome::Text("unused")).with_counter(&later_calls)),
    ]);

    let result = selector.extract(&pdf_document(b"%PDF")).await;

    assert!(result.is_success());
    assert_eq!(later_calls.load(Ordering::SeqCst), 0);
}

#[tokio::test]
async fn given_chain_when_all_fail_then_strategies_run_in_declared_order() {
    let journal = Arc::new(Mutex::new(Vec::new()));
    let selector = selector(vec![
        shared(ScriptedStrategy::new("primary", Outcome::Fail).with_journal(&journal)),
        shared(ScriptedStrategy::new("alternate", Outcome::Text("  ")).with_journal(&journal)),
        shared(ScriptedStrategy::new("pages", Outcome::Fail).with_journal(&journal)),
    ]);

    selector.extract(&pdf_document(b"%PDF")).await;

    assert_eq!(*journal.lock().unwrap(), vec!["primary", "alternate", "pages"]);
}

#[tokio::test]
async fn given_every_strategy_returns_empty_text_when_extracting_then_exhausted() {
    let selector = selector(vec![
        scripted("first", Outcome::Text("")),
        scripted("second", Outcome::Text(" \n\t ")),
    ]);

    let result = selector.extract(&pdf_document(b"%PDF")).await;

    assert_eq!(result.error_kind(), Some(ErrorKind::ExtractionExhausted));
    assert!(matches!(
        result,
        ExtractionResult::Failure { ref message, .. } if message == "Failed to extract text from PDF"
    ));
}

#[tokio::test]
async fn given_every_strategy_unavailable_when_extracting_then_backend_unavailable() {
    let selector = ExtractionSelector::new(TEST_TIMEOUT)
        .with_chain(Modality::Image, vec![scripted("ocr", Outcome::Unavailable)]);

    let result = selector.extract(&image_document(b"\x89PNG")).await;

    assert_eq!(result.error_kind(), Some(ErrorKind::BackendUnavailable));
}

#[tokio::test]
async fn given_mix_of_unavailable_and_failed_when_extracting_then_exhausted() {
    let selector = selector(vec![
        scripted("missing", Outcome::Unavailable),
        scripted("broken", Outcome::Fail),
    ]);

    let result = selector.extract(&pdf_document(b"%PDF")).await;

    assert_eq!(result.error_kind(), Some(ErrorKind::ExtractionExhausted));
}

#[tokio::test]
async fn given_no_chain_for_modality_when_extracting_then_backend_unavailable() {
    let selector = ExtractionSelector::new(TEST_TIMEOUT);

    let result = selector.extract(&image_document(b"\x89PNG")).await;

    assert_eq!(result.error_kind(), Some(ErrorKind::BackendUnavailable));
}

#[tokio::test]
async fn given_panicking_strategy_when_extracting_then_next_strategy_still_runs() {
    let selector = selector(vec![
        scripted("fragile", Outcome::Panic),
        scripted("sturdy", Outcome::Text("recovered")),
    ]);

    let result = selector.extract(&pdf_document(b"%PDF")).await;

    assert_eq!(result.text(), Some("recovered"));
}

#[tokio::test]
async fn given_only_panicking_strategy_when_extracting_then_details_mention_panic() {
    let selector = selector(vec![scripted("fragile", Outcome::Panic)]);

    let result = selector.extract(&pdf_document(b"%PDF")).await;

    match result {
        ExtractionResult::Failure { kind, details, .. } => {
            assert_eq!(kind, ErrorKind::ExtractionExhausted);
            assert!(details.unwrap().contains("fragile exploded"));
        }
        other => panic!("expected failure, got {other:?}"),
    }
}

#[tokio::test]
async fn given_hanging_strategy_when_deadline_passes_then_falls_through() {
    let selector = selector(vec![
        scripted("slow", Outcome::Hang),
        scripted("fast", Outcome::Text("in time")),
    ]);

    let result = selector.extract(&pdf_document(b"%PDF")).await;

    assert_eq!(result.text(), Some("in time"));
}

#[tokio::test]
async fn given_strategy_without_page_count_when_succeeding_then_reports_one_page() {
    let selector = selector(vec![scripted("bare", Outcome::Text("text"))]);

    let result = selector.extract(&pdf_document(b"%PDF")).await;

    assert!(matches!(result, ExtractionResult::Success { page_count: 1, .. }));
}

#[tokio::test]
async fn given_strategy_with_page_count_when_succeeding_then_count_is_kept() {
    let raw = RawExtraction::text("three pages").with_page_count(3);
    let selector = selector(vec![scripted("paged", Outcome::Raw(raw))]);

    let result = selector.extract(&pdf_document(b"%PDF")).await;

    assert!(matches!(result, ExtractionResult::Success { page_count: 3, .. }));
}

#[test]
fn given_selector_with_chains_when_inspected_then_order_is_preserved() {
    let selector = selector(vec![
        scripted("a", Outcome::Fail),
        scripted("b", Outcome::Fail),
    ]);

    let names: Vec<&str> = selector.chain(Modality::Pdf).iter().map(|s| s.name()).collect();

    assert_eq!(names, vec!["a", "b"]);
    assert!(selector.chain(Modality::Image).is_empty());
    assert_eq!(selector.attempt_timeout(), TEST_TIMEOUT);
}
