use serde_json::{Value, json};
use tubeboost::domain::titles::{TitleSuggestion, TitleSuggestionsResponse, fallback_title_suggestions};
use wiremock::matchers::{body_partial_json, header, method, path};
use wiremock::{Mock, ResponseTemplate};

use crate::helpers::{
    COMPLETIONS_PATH, TEST_API_KEY, mock_completion_response, spawn_app, spawn_app_with_ai_mock,
    spawn_app_with_unreachable_ai,
};

async fn optimize(app: &crate::helpers::TestApp, body: Value) -> Vec<TitleSuggestion> {
    let response = app.post_json("/titles/optimize", &body).await;
    assert_eq!(response.status(), 200);

    let body: TitleSuggestionsResponse = response.json().await.expect("Failed to parse response");
    body.titles
}

fn suggestion(title: &str, score: f64) -> Value {
    json!({
        "title": title,
        "score": score,
        "estimatedCtr": 31,
        "seoScore": 8.2,
        "tags": ["gaming", "minecraft"],
        "reasoning": "Specific and curiosity driven"
    })
}

// --- without an API key ---

#[tokio::test]
async fn without_key_returns_hinglish_fallback() {
    let app = spawn_app().await;

    let titles = optimize(&app, json!({ "title": "Share market me paise kaise banaye" })).await;

    assert_eq!(titles.len(), 5);
    assert_eq!(titles[0].title, "Share Market Me Paise Kaise Banaye - Asaan Tarika");
    assert_eq!(titles[0].score, 9.5);
    assert_eq!(titles[4].score, 9.1);
    assert_eq!(titles[0].tags, vec!["hinglish", "desi", "guide", "tips"]);
}

#[tokio::test]
async fn without_key_returns_english_fallback() {
    let app = spawn_app().await;

    let titles = optimize(&app, json!({ "title": "How to invest in stocks" })).await;

    assert_eq!(titles, fallback_title_suggestions("How to invest in stocks"));
    assert_eq!(
        titles[0].title,
        "How to Make Money in Stock Market - Beginner Guide"
    );
}

#[tokio::test]
async fn response_uses_camel_case_fields() {
    let app = spawn_app().await;

    let response = app
        .post_json("/titles/optimize", &json!({ "title": "Paneer recipe" }))
        .await;
    let body: Value = response.json().await.unwrap();

    let first = &body["titles"][0];
    assert!(first["estimatedCtr"].is_number());
    assert!(first["seoScore"].is_number());
    assert!(first.get("estimated_ctr").is_none());
}

#[tokio::test]
async fn accepts_form_payload() {
    let app = spawn_app().await;

    let response = reqwest::Client::new()
        .post(app.api_url("/titles/optimize"))
        .form(&[("title", "Top 10 gaming chairs")])
        .send()
        .await
        .unwrap();

    assert_eq!(response.status(), 200);
    let body: TitleSuggestionsResponse = response.json().await.unwrap();
    assert_eq!(body.titles.len(), 5);
}

// --- request validation ---

#[tokio::test]
async fn rejects_blank_title() {
    let app = spawn_app().await;

    let response = app
        .post_json("/titles/optimize", &json!({ "title": "   " }))
        .await;

    assert_eq!(response.status(), 400);
    let body: Value = response.json().await.unwrap();
    assert_eq!(body["message"], "title must not be empty");
}

#[tokio::test]
async fn rejects_missing_title() {
    let app = spawn_app().await;

    let response = app.post_json("/titles/optimize", &json!({})).await;

    assert_eq!(response.status(), 400);
}

#[tokio::test]
async fn rejects_unsupported_content_type() {
    let app = spawn_app().await;

    let response = reqwest::Client::new()
        .post(app.api_url("/titles/optimize"))
        .header("Content-Type", "text/plain")
        .body("Share market tips")
        .send()
        .await
        .unwrap();

    assert_eq!(response.status(), 415);
}

// --- with a model ---

#[tokio::test]
async fn sends_json_mode_request_with_token_budget() {
    let app = spawn_app_with_ai_mock().await;
    let mock_server = app.mock_server.as_ref().unwrap();

    let content = json!({
        "titles": [
            suggestion("I Survived 100 Days in Hardcore Minecraft", 9.6),
            suggestion("Minecraft Hardcore: Day 1 to Day 100", 9.1),
            suggestion("The Minecraft Base That Saved My World", 8.8),
            suggestion("100 Days of Minecraft Survival, No Deaths", 8.5),
            suggestion("My Hardest Minecraft Challenge Yet", 8.0),
        ]
    });

    Mock::given(method("POST"))
        .and(path(COMPLETIONS_PATH))
        .and(header("authorization", format!("Bearer {TEST_API_KEY}").as_str()))
        .and(body_partial_json(json!({
            "model": "gpt-5",
            "max_tokens": 2500,
            "response_format": { "type": "json_object" }
        })))
        .respond_with(mock_completion_response(&content.to_string()))
        .expect(1)
        .mount(mock_server)
        .await;

    let titles = optimize(&app, json!({ "title": "Minecraft survival game part 3" })).await;

    assert_eq!(titles.len(), 5);
    assert_eq!(titles[0].title, "I Survived 100 Days in Hardcore Minecraft");
    assert_eq!(titles[0].score, 9.6);
    assert_eq!(titles[0].estimated_ctr, 31.0);
    assert_eq!(titles[0].tags, vec!["gaming", "minecraft"]);
}

#[tokio::test]
async fn includes_thumbnail_context_in_prompt() {
    let app = spawn_app_with_ai_mock().await;
    let mock_server = app.mock_server.as_ref().unwrap();

    Mock::given(method("POST"))
        .and(path(COMPLETIONS_PATH))
        .respond_with(mock_completion_response(r#"{"titles": []}"#))
        .mount(mock_server)
        .await;

    optimize(
        &app,
        json!({
            "title": "Minecraft survival game part 3",
            "thumbnailContext": "shocked face next to a diamond sword"
        }),
    )
    .await;

    let requests = mock_server.received_requests().await.unwrap();
    let body: Value = serde_json::from_slice(&requests[0].body).unwrap();
    let system_prompt = body["messages"][0]["content"].as_str().unwrap();
    assert!(system_prompt.contains("Thumbnail context: shocked face next to a diamond sword"));
    let user_prompt = body["messages"][1]["content"].as_str().unwrap();
    assert!(user_prompt.contains("Minecraft survival game part 3"));
}

#[tokio::test]
async fn backfills_partial_model_output_from_fallback() {
    let app = spawn_app_with_ai_mock().await;
    let mock_server = app.mock_server.as_ref().unwrap();

    let content = json!({
        "titles": [
            suggestion("Budget Gaming Chairs Ranked", 9.0),
            { "title": "Chairs Worth Buying in 2025", "score": 14, "estimatedCtr": -3 },
            { "title": "" },
            "not an object",
        ]
    });

    Mock::given(method("POST"))
        .and(path(COMPLETIONS_PATH))
        .respond_with(mock_completion_response(&content.to_string()))
        .mount(mock_server)
        .await;

    let titles = optimize(&app, json!({ "title": "Top 10 gaming chairs" })).await;
    let fallback = fallback_title_suggestions("Top 10 gaming chairs");

    assert_eq!(titles.len(), 5);
    assert_eq!(titles[0].title, "Budget Gaming Chairs Ranked");
    assert_eq!(titles[1].title, "Chairs Worth Buying in 2025");
    assert_eq!(titles[1].score, 10.0);
    assert_eq!(titles[1].estimated_ctr, 0.0);
    assert_eq!(titles[1].seo_score, 7.0);
    assert_eq!(titles[1].reasoning, "Optimized for better click-through rate");
    assert_eq!(&titles[2..], &fallback[..3]);
}

#[tokio::test]
async fn unwraps_fenced_model_output() {
    let app = spawn_app_with_ai_mock().await;
    let mock_server = app.mock_server.as_ref().unwrap();

    let content = format!(
        "```json\n{}\n```",
        json!({ "titles": [suggestion("Fenced But Fine", 8.4)] })
    );

    Mock::given(method("POST"))
        .and(path(COMPLETIONS_PATH))
        .respond_with(mock_completion_response(&content))
        .mount(mock_server)
        .await;

    let titles = optimize(&app, json!({ "title": "Top 10 gaming chairs" })).await;

    assert_eq!(titles[0].title, "Fenced But Fine");
    assert_eq!(titles.len(), 5);
}

#[tokio::test]
async fn truncates_long_model_titles() {
    let app = spawn_app_with_ai_mock().await;
    let mock_server = app.mock_server.as_ref().unwrap();

    let long = "I Tested Every Single Budget Gaming Chair on Amazon So You Do Not Have To";
    let content = json!({ "titles": [suggestion(long, 9.0)] });

    Mock::given(method("POST"))
        .and(path(COMPLETIONS_PATH))
        .respond_with(mock_completion_response(&content.to_string()))
        .mount(mock_server)
        .await;

    let titles = optimize(&app, json!({ "title": "Top 10 gaming chairs" })).await;

    assert!(titles[0].title.chars().count() < 70);
    assert!(titles[0].title.ends_with("..."));
}

#[tokio::test]
async fn non_json_model_output_falls_back() {
    let app = spawn_app_with_ai_mock().await;
    let mock_server = app.mock_server.as_ref().unwrap();

    Mock::given(method("POST"))
        .and(path(COMPLETIONS_PATH))
        .respond_with(mock_completion_response("Sorry, I cannot help with that."))
        .mount(mock_server)
        .await;

    let titles = optimize(&app, json!({ "title": "Share market me paise kaise banaye" })).await;

    assert_eq!(
        titles,
        fallback_title_suggestions("Share market me paise kaise banaye")
    );
}

#[tokio::test]
async fn upstream_error_status_falls_back() {
    let app = spawn_app_with_ai_mock().await;
    let mock_server = app.mock_server.as_ref().unwrap();

    Mock::given(method("POST"))
        .and(path(COMPLETIONS_PATH))
        .respond_with(ResponseTemplate::new(500).set_body_string("upstream exploded"))
        .mount(mock_server)
        .await;

    let titles = optimize(&app, json!({ "title": "How to invest in stocks" })).await;

    assert_eq!(titles, fallback_title_suggestions("How to invest in stocks"));
}

#[tokio::test]
async fn titles_key_that_is_not_an_array_falls_back() {
    let app = spawn_app_with_ai_mock().await;
    let mock_server = app.mock_server.as_ref().unwrap();

    Mock::given(method("POST"))
        .and(path(COMPLETIONS_PATH))
        .respond_with(mock_completion_response(r#"{"titles": "none today"}"#))
        .mount(mock_server)
        .await;

    let titles = optimize(&app, json!({ "title": "How to invest in stocks" })).await;

    assert_eq!(titles, fallback_title_suggestions("How to invest in stocks"));
}

#[tokio::test]
async fn unreachable_model_falls_back() {
    let app = spawn_app_with_unreachable_ai().await;

    let titles = optimize(&app, json!({ "title": "Paneer butter masala recipe" })).await;

    assert_eq!(
        titles,
        fallback_title_suggestions("Paneer butter masala recipe")
    );
}
