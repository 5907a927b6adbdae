//! End-to-end pipeline tests with mock loader and AI.

use std::sync::Arc;

use extraction::testing::{MockAI, MockLoader};
use extraction::{CvExtractor, ExtractionError, ExtractorConfig};

fn extractor(loader: MockLoader, ai: MockAI) -> CvExtractor {
    CvExtractor::new(Arc::new(loader), Arc::new(ai))
}

#[tokio::test]
async fn extracts_a_merged_profile() {
    let reply = r#"```json
{
    "Nom": "Dupont",
    "Prénom": "Jean",
    "Titre": "Ingénieur",
    "Nombre d'enfants": 2,
    "Adresse e-mail": "jean.dupont@example.com",
    "Sexe": null
}
```"#;

    let ai = MockAI::new().with_reply(reply);
    let extractor = extractor(MockLoader::new("Jean Dupont\nIngénieur logiciel"), ai.clone());

    let profile = extractor.extract_bytes(b"%PDF-stub").await.unwrap();

    assert_eq!(profile.last_name.as_deref(), Some("Dupont"));
    assert_eq!(profile.first_name.as_deref(), Some("Jean"));
    assert_eq!(profile.title.as_deref(), Some("Ingénieur"));
    assert_eq!(profile.children_count, 2);
    assert_eq!(profile.email.as_deref(), Some("jean.dupont@example.com"));
    assert_eq!(profile.gender, None);
    assert_eq!(ai.call_count(), 1);
}

#[tokio::test]
async fn prompt_carries_the_document_text() {
    let ai = MockAI::new();
    let extractor = extractor(MockLoader::new("Marie Curie, Physicienne"), ai.clone());

    extractor.extract_bytes(b"%PDF-stub").await.unwrap();

    let calls = ai.calls();
    assert_eq!(calls.len(), 1);
    assert!(calls[0].user.contains("Marie Curie, Physicienne"));
    assert!(calls[0].system.contains("extraction engine"));
}

#[tokio::test]
async fn empty_document_short_circuits_before_the_model() {
    let ai = MockAI::new();
    let extractor = extractor(MockLoader::new("   \n  "), ai.clone());

    let result = extractor.extract_bytes(b"%PDF-stub").await;

    assert!(matches!(result, Err(ExtractionError::EmptyDocument)));
    assert_eq!(ai.call_count(), 0);
}

#[tokio::test]
async fn loader_failure_surfaces_as_document_error() {
    let extractor = extractor(MockLoader::failing("encrypted file"), MockAI::new());

    let result = extractor.extract_bytes(b"%PDF-stub").await;
    assert!(matches!(result, Err(ExtractionError::Document(_))));
}

#[tokio::test]
async fn ai_failure_surfaces_as_ai_error() {
    let extractor = extractor(
        MockLoader::new("some text"),
        MockAI::new().failing("upstream down"),
    );

    let result = extractor.extract_bytes(b"%PDF-stub").await;
    assert!(matches!(result, Err(ExtractionError::AI(_))));
}

#[tokio::test]
async fn invalid_model_reply_surfaces_as_model_output_error() {
    let extractor = extractor(
        MockLoader::new("some text"),
        MockAI::new().with_reply("I could not find any information."),
    );

    let result = extractor.extract_bytes(b"%PDF-stub").await;
    assert!(matches!(result, Err(ExtractionError::ModelOutput(_))));
}

#[tokio::test]
async fn long_documents_are_truncated_in_the_prompt() {
    let ai = MockAI::new();
    let long_text = "curriculum vitae ".repeat(10_000);
    let extractor = extractor(MockLoader::new(long_text), ai.clone())
        .with_config(ExtractorConfig { max_doc_bytes: 500 });

    extractor.extract_bytes(b"%PDF-stub").await.unwrap();

    let calls = ai.calls();
    // Prompt template adds its own text; the embedded document is capped.
    assert!(calls[0].user.len() < 500 + extraction::EXTRACT_PROMPT.len());
}
