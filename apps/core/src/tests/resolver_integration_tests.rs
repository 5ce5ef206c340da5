//! Resolver behavior against a mock HTTP lookup backend.
//!
//! These tests exercise the whole explanation path: WikipediaLookup over
//! wiremock, resolver fallback decisions, and final composition.

use std::sync::Arc;
use std::time::Duration;

use serde_json::json;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use crate::config::Settings;
use crate::engine::StudyBuddyEngine;
use crate::knowledge::WikipediaLookup;
use crate::models::Level;

async fn engine_against(server: &MockServer) -> StudyBuddyEngine {
    let settings = Settings {
        lookup_base_url: server.uri(),
        lookup_timeout: Duration::from_secs(2),
        user_agent: "test-agent".to_string(),
    };
    let lookup = Arc::new(WikipediaLookup::new(&settings).unwrap());
    StudyBuddyEngine::with_lookup(lookup).unwrap()
}

#[tokio::test]
async fn test_resolved_topic_end_to_end() {
    let server = MockServer::start().await;
    let body = json!({
        "type": "standard",
        "extract": "Calculus is the study of change. It has two branches. Many fields use it.",
        "content_urls": { "desktop": { "page": "https://en.wikipedia.org/wiki/Calculus" } }
    });

    Mock::given(method("GET"))
        .and(path("/api/rest_v1/page/summary/Calculus"))
        .respond_with(ResponseTemplate::new(200).set_body_json(body))
        .mount(&server)
        .await;

    let engine = engine_against(&server).await;
    let result = engine.explain("Calculus", Level::Basic).await;

    assert_eq!(result.title, "Calculus (Basic)");
    // Basic level: two sentences, no article pointer.
    assert!(result.content.contains("Calculus is the study of change. It has two branches."));
    assert!(!result.content.contains("Many fields use it."));
    assert!(!result.content.contains("Read the full article"));
    assert!(result.content.contains("Khan Academy"));
    assert!(result.content.contains("Source: Wikipedia"));
}

#[tokio::test]
async fn test_advanced_level_includes_article_pointer() {
    let server = MockServer::start().await;
    let body = json!({
        "type": "standard",
        "extract": "Calculus is the study of change.",
        "content_urls": { "desktop": { "page": "https://en.wikipedia.org/wiki/Calculus" } }
    });

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_json(body))
        .mount(&server)
        .await;

    let engine = engine_against(&server).await;
    let result = engine.explain("Calculus", Level::Advanced).await;

    assert!(result
        .content
        .contains("Read the full article at: https://en.wikipedia.org/wiki/Calculus"));
}

#[tokio::test]
async fn test_ambiguous_topic_lists_options_without_article_link() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/rest_v1/page/summary/Mercury"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!({ "type": "disambiguation" })),
        )
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path("/w/api.php"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            "Mercury",
            [
                "Mercury (planet)",
                "Mercury (element)",
                "Mercury Records",
                "Freddie Mercury",
                "Mercury (mythology)",
                "Project Mercury"
            ],
            [],
            []
        ])))
        .mount(&server)
        .await;

    let engine = engine_against(&server).await;
    let result = engine.explain("Mercury", Level::Advanced).await;

    assert!(result.content.contains("'Mercury' is ambiguous"));
    assert!(result.content.contains("Mercury (planet)"));
    assert!(result.content.contains("Mercury (mythology)"));
    // Capped at five options.
    assert!(!result.content.contains("Project Mercury"));
    assert!(!result.content.contains("Read the full article"));
    assert!(result.content.contains("Source: Wikipedia"));
}

#[tokio::test]
async fn test_missing_page_falls_back_to_internal_database() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&server)
        .await;

    let engine = engine_against(&server).await;
    let result = engine.explain("Photosynthesis", Level::Basic).await;

    assert!(result.content.contains("Definition (Offline Mode)"));
    assert!(result.content.contains("sunlight to synthesize foods"));
    assert!(result.content.contains("Source: Internal Database"));
}

#[tokio::test]
async fn test_server_outage_falls_back_to_generic_message() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    let engine = engine_against(&server).await;
    let result = engine.explain("Obscure Topic", Level::Intermediate).await;

    assert!(result.content.contains("couldn't find detailed info on 'Obscure Topic'"));
    assert!(result.content.contains("Source: Internal Database"));
    // Generic search links still get recommended.
    assert!(result.content.contains("YouTube Search"));
    assert!(result.content.contains("Google Scholar"));
}
