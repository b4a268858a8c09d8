use crate::helpers::{TestServer, run_tubeboost, stdout_json};

#[test]
fn test_titles_prints_five_suggestions() {
    let server = TestServer::start();

    let output = server.run(&["titles", "--title", "Share market me paise kaise banaye"]);

    let titles = stdout_json(&output);
    let titles = titles.as_array().expect("Should return an array");
    assert_eq!(titles.len(), 5);
    assert_eq!(
        titles[0]["title"],
        "Share Market Me Paise Kaise Banaye - Asaan Tarika"
    );
    assert_eq!(titles[0]["score"], 9.5);
}

#[test]
fn test_titles_accepts_thumbnail_context() {
    let server = TestServer::start();

    let output = server.run(&[
        "titles",
        "--title",
        "How to invest in stocks",
        "--context",
        "chart going up, surprised face",
    ]);

    let titles = stdout_json(&output);
    assert_eq!(
        titles[0]["title"],
        "How to Make Money in Stock Market - Beginner Guide"
    );
}

#[test]
fn test_titles_reports_validation_error() {
    let server = TestServer::start();

    let output = server.run(&["titles", "--title", "   "]);

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(
        stderr.contains("title must not be empty"),
        "unexpected stderr: {stderr}"
    );
}

#[test]
fn test_titles_fails_without_server() {
    let port = portpicker::pick_unused_port().expect("no free port");
    let url = format!("http://127.0.0.1:{port}");

    let output = run_tubeboost(
        &["titles", "--title", "Anything"],
        &[("TUBEBOOST_URL", &url)],
    );

    assert!(!output.status.success());
}
