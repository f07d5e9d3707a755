mod common;

use axum::http::{header, StatusCode};
use common::TestApp;

#[tokio::test]
async fn test_list_page_renders_every_event() {
    let app = TestApp::new().await;

    let (status, html) = app.get_html("/").await;
    assert_eq!(status, StatusCode::OK);

    for name in ["Figma Workshop", "Hack Night", "Past Meetup", "Robotics Expo", "Mystery Talk"] {
        assert!(html.contains(name), "list page is missing {}", name);
    }
    assert!(html.contains("Plexus Club Events"));
    assert!(html.contains(r#"href="/events/1""#));

    // Every card keeps its link so the polling script can enable it; only the open one starts enabled.
    assert!(html.contains(r#"<a class="button register" href="https:&#x2F;&#x2F;forms.example.com&#x2F;figma""#));
    assert!(html.contains(r#"<a class="button register disabled" href="https:&#x2F;&#x2F;forms.example.com&#x2F;hack""#));
    assert!(html.contains(r#"<a class="button register disabled" href="https:&#x2F;&#x2F;forms.example.com&#x2F;robotics""#));

    assert!(html.contains("Registration Opens Soon"));
    assert!(html.contains("Event Cancelled"));
    assert!(html.contains("Registration Closed"));
    assert!(html.contains(r#"class="badge unknown">Unavailable<"#));
}

#[tokio::test]
async fn test_detail_page_shows_sections_and_countdown() {
    let app = TestApp::new().await;

    let (status, html) = app.get_html("/events/1").await;
    assert_eq!(status, StatusCode::OK);
    assert!(html.contains("Figma Workshop"));
    assert!(html.contains("Design Team Plexus"));
    assert!(html.contains("Auto layout"));
    assert!(html.contains("A laptop with Figma installed"));
    assert!(html.contains("Registration Closes In"));
    assert!(html.contains(">Register Now</a>"));
    assert!(html.contains("₹100"));

    let verdict = app.state.board.current().verdicts[&1].clone();
    assert!(verdict.is_open);
    assert!(html.contains("d ") && html.contains("m "), "countdown missing from detail page");
}

#[tokio::test]
async fn test_detail_page_for_closed_event_disables_register_link() {
    let app = TestApp::new().await;

    let (status, html) = app.get_html("/events/3").await;
    assert_eq!(status, StatusCode::OK);
    assert!(!html.contains(">Register Now</a>"));
    assert!(html.contains("Registration Closed"));
    assert!(html.contains(r#"<a class="button register disabled" href="https:&#x2F;&#x2F;forms.example.com&#x2F;past""#));
    assert!(html.contains(r#"data-open-text="Register Now""#));
}

#[tokio::test]
async fn test_pages_carry_status_labels_for_live_badges() {
    let app = TestApp::new().await;

    let (_, html) = app.get_html("/").await;
    assert!(html.contains(r#"<li data-status="coming-soon">Coming Soon</li>"#));
    assert!(html.contains(r#"<li data-status="ended">Ended</li>"#));
    assert!(html.contains(r#"<li data-status="unknown">Unavailable</li>"#));
    assert!(html.contains("verdict.effectiveStatus"));
}

#[tokio::test]
async fn test_unknown_event_page_is_not_found() {
    let app = TestApp::new().await;

    let (status, html) = app.get_html("/events/42").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert!(html.contains("Event 42 not found"));
    assert!(html.contains("Back to Events"));
}

#[tokio::test]
async fn test_fetch_failure_shows_retry_then_recovers() {
    let app = TestApp::new().await;
    app.source.set_offline(true);

    let (status, html) = app.get_html("/").await;
    assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
    assert!(html.contains("Events could not be loaded"));
    assert!(html.contains(r#"action="/reload""#));
    assert!(!html.contains("Figma Workshop"));

    app.source.set_offline(false);
    let res = app.post("/reload").await;
    assert_eq!(res.status(), StatusCode::SEE_OTHER);
    assert_eq!(res.headers()[header::LOCATION], "/");

    let (status, html) = app.get_html("/").await;
    assert_eq!(status, StatusCode::OK);
    assert!(html.contains("Figma Workshop"));
}

#[tokio::test]
async fn test_missing_images_fall_back_to_text() {
    let app = TestApp::new().await;

    let (_, html) = app.get_html("/").await;
    assert!(html.contains(r#"<span class="fallback-text">PLEXUS</span>"#));
    assert!(!html.contains("logo.png"));
}

#[tokio::test]
async fn test_present_logos_are_served_and_shown() {
    let app = TestApp::new().await;
    std::fs::write(app.static_dir.join("images/logo.png"), b"not really a png").unwrap();
    std::fs::write(app.static_dir.join("images/Plexus White.png"), b"not really a png").unwrap();

    let (_, html) = app.get_html("/").await;
    assert!(html.contains("&#x2F;images&#x2F;logo.png"));
    assert!(!html.contains(r#"<span class="fallback-text">PLEXUS</span>"#));

    let res = app.get("/images/logo.png").await;
    assert_eq!(res.status(), StatusCode::OK);
    assert_eq!(common::body_text(res).await, "not really a png");

    let res = app.get("/images/nope.png").await;
    assert_eq!(res.status(), StatusCode::NOT_FOUND);
}
