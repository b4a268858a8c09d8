use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use serde_json::{Value, json};
use tubeboost::domain::thumbnails::{
    ENHANCEMENT_FAILURE_MESSAGE, ENHANCEMENT_SUCCESS_MESSAGE, EnhancementResult, ThumbnailAnalysis,
    fallback_thumbnail_analysis,
};
use wiremock::matchers::{body_partial_json, method, path};
use wiremock::{Mock, ResponseTemplate};

use crate::helpers::{
    COMPLETIONS_PATH, gradient_png_base64, mock_completion_response, spawn_app,
    spawn_app_with_ai_mock,
};

const JPEG_MAGIC: [u8; 3] = [0xFF, 0xD8, 0xFF];

// --- analyze ---

#[tokio::test]
async fn analyze_without_key_returns_fallback() {
    let app = spawn_app().await;

    let response = app
        .post_json("/thumbnails/analyze", &json!({ "image": gradient_png_base64(4, 4) }))
        .await;

    assert_eq!(response.status(), 200);
    let analysis: ThumbnailAnalysis = response.json().await.unwrap();
    assert_eq!(analysis, fallback_thumbnail_analysis());
}

#[tokio::test]
async fn analyze_serializes_camel_case() {
    let app = spawn_app().await;

    let response = app
        .post_json("/thumbnails/analyze", &json!({ "image": "/9j/4AAQSkZJRg" }))
        .await;
    let body: Value = response.json().await.unwrap();

    assert_eq!(body["enhancementSuggestions"]["clarity"], 9.0);
    assert_eq!(body["ctrImprovement"], 25.0);
    assert_eq!(body["recommendations"].as_array().unwrap().len(), 5);
}

#[tokio::test]
async fn analyze_rejects_blank_image() {
    let app = spawn_app().await;

    let response = app
        .post_json("/thumbnails/analyze", &json!({ "image": "" }))
        .await;

    assert_eq!(response.status(), 400);
    let body: Value = response.json().await.unwrap();
    assert_eq!(body["message"], "image must not be empty");
}

#[tokio::test]
async fn analyze_sends_image_as_data_url() {
    let app = spawn_app_with_ai_mock().await;
    let mock_server = app.mock_server.as_ref().unwrap();

    let content = json!({
        "enhancementSuggestions": { "contrast": 140, "saturation": 35, "clarity": -5 },
        "ctrImprovement": 18,
        "description": "Busy background, small text",
        "recommendations": ["Crop tighter on the face", "Use larger text"]
    });

    Mock::given(method("POST"))
        .and(path(COMPLETIONS_PATH))
        .and(body_partial_json(json!({
            "max_tokens": 1000,
            "response_format": { "type": "json_object" }
        })))
        .respond_with(mock_completion_response(&content.to_string()))
        .expect(1)
        .mount(mock_server)
        .await;

    let image = gradient_png_base64(4, 4);
    let response = app
        .post_json("/thumbnails/analyze", &json!({ "image": image }))
        .await;

    assert_eq!(response.status(), 200);
    let analysis: ThumbnailAnalysis = response.json().await.unwrap();
    assert_eq!(analysis.enhancement_suggestions.contrast, 100.0);
    assert_eq!(analysis.enhancement_suggestions.saturation, 35.0);
    assert_eq!(analysis.enhancement_suggestions.clarity, 0.0);
    assert_eq!(analysis.description, "Busy background, small text");

    let requests = mock_server.received_requests().await.unwrap();
    let body: Value = serde_json::from_slice(&requests[0].body).unwrap();
    let parts = body["messages"][1]["content"].as_array().unwrap();
    assert_eq!(parts[1]["type"], "image_url");
    assert_eq!(
        parts[1]["image_url"]["url"],
        format!("data:image/jpeg;base64,{image}")
    );
}

#[tokio::test]
async fn analyze_with_unexpected_shape_returns_fallback() {
    let app = spawn_app_with_ai_mock().await;
    let mock_server = app.mock_server.as_ref().unwrap();

    Mock::given(method("POST"))
        .and(path(COMPLETIONS_PATH))
        .respond_with(mock_completion_response(r#"{"verdict": "looks great"}"#))
        .mount(mock_server)
        .await;

    let response = app
        .post_json("/thumbnails/analyze", &json!({ "image": "/9j/4AAQSkZJRg" }))
        .await;

    let analysis: ThumbnailAnalysis = response.json().await.unwrap();
    assert_eq!(analysis, fallback_thumbnail_analysis());
}

#[tokio::test]
async fn analyze_upstream_failure_returns_fallback() {
    let app = spawn_app_with_ai_mock().await;
    let mock_server = app.mock_server.as_ref().unwrap();

    Mock::given(method("POST"))
        .and(path(COMPLETIONS_PATH))
        .respond_with(ResponseTemplate::new(429).set_body_string("slow down"))
        .mount(mock_server)
        .await;

    let response = app
        .post_json("/thumbnails/analyze", &json!({ "image": "/9j/4AAQSkZJRg" }))
        .await;

    assert_eq!(response.status(), 200);
    let analysis: ThumbnailAnalysis = response.json().await.unwrap();
    assert_eq!(analysis, fallback_thumbnail_analysis());
}

// --- enhance ---

#[tokio::test]
async fn enhance_returns_jpeg() {
    let app = spawn_app().await;

    let response = app
        .post_json(
            "/thumbnails/enhance",
            &json!({
                "image": gradient_png_base64(32, 18),
                "enhancements": { "contrast": 20, "saturation": 10, "clarity": 5 }
            }),
        )
        .await;

    assert_eq!(response.status(), 200);
    let result: EnhancementResult = response.json().await.unwrap();
    assert!(result.success);
    assert_eq!(result.message, ENHANCEMENT_SUCCESS_MESSAGE);

    let bytes = STANDARD.decode(&result.enhanced_image).unwrap();
    assert_eq!(bytes[..3], JPEG_MAGIC);
    let decoded = image::load_from_memory(&bytes).unwrap();
    assert_eq!((decoded.width(), decoded.height()), (32, 18));
}

#[tokio::test]
async fn enhance_accepts_data_url_without_adjustments() {
    let app = spawn_app().await;
    let data_url = format!("data:image/png;base64,{}", gradient_png_base64(8, 8));

    let response = app
        .post_json("/thumbnails/enhance", &json!({ "image": data_url }))
        .await;

    let result: EnhancementResult = response.json().await.unwrap();
    assert!(result.success);
    assert_eq!(STANDARD.decode(&result.enhanced_image).unwrap()[..3], JPEG_MAGIC);
}

#[tokio::test]
async fn enhance_failure_preserves_original_exactly() {
    let app = spawn_app().await;
    let original = STANDARD.encode(b"GIF89a but not really a gif");

    let response = app
        .post_json("/thumbnails/enhance", &json!({ "image": original }))
        .await;

    assert_eq!(response.status(), 200);
    let result: EnhancementResult = response.json().await.unwrap();
    assert!(!result.success);
    assert_eq!(result.message, ENHANCEMENT_FAILURE_MESSAGE);
    assert_eq!(result.enhanced_image, original);
}

#[tokio::test]
async fn enhance_rejects_blank_image() {
    let app = spawn_app().await;

    let response = app
        .post_json("/thumbnails/enhance", &json!({ "image": " " }))
        .await;

    assert_eq!(response.status(), 400);
}
