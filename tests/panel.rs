use axum::extract::State;
use axum::http::StatusCode;
use axum::routing::{get, post};
use axum::{Json, Router};
use pretty_assertions::assert_eq;
use serde_json::{json, Value};
use spoofpanel_cfg::Config;
use std::net::SocketAddr;
use std::sync::{Arc, Mutex};

/// Last JSON body the stub upstream received on `/send-spoofed`.
type Captured = Arc<Mutex<Option<Value>>>;

#[tokio::test]
async fn panel_lists_groups_in_upstream_order() {
    // Arrange
    let upstream = spawn_upstream(Captured::default());
    let panel = spawn_panel(upstream);
    let client = reqwest::Client::new();

    // Act
    let page = client
        .get(format!("http://{panel}/"))
        .send()
        .await
        .expect("Failed to execute request")
        .text()
        .await
        .expect("Failed to read page");

    // Assert
    assert!(page.contains("<b>Team Alpha</b><br /><code>1111@g.us</code>"));
    assert!(page.contains("<b>Ops</b><br /><code>2222@g.us</code>"));
    let first = page.find("Team Alpha").expect("First group is missing");
    let second = page.find("Ops").expect("Second group is missing");
    assert!(first < second);
}

#[tokio::test]
async fn submission_relays_the_qualified_payload_and_shows_the_verdict() {
    // Arrange
    let captured = Captured::default();
    let upstream = spawn_upstream(captured.clone());
    let panel = spawn_panel(upstream);
    let client = reqwest::Client::new();

    // Act
    let page = client
        .post(format!("http://{panel}/send"))
        .form(&[
            ("cid", "999"),
            ("sid", "888"),
            ("spf_msg", "hi"),
            ("rpl_msg", "yo"),
        ])
        .send()
        .await
        .expect("Failed to execute request")
        .text()
        .await
        .expect("Failed to read page");

    // Assert
    assert!(page.contains("spoofed msg sended"));
    let sent = captured
        .lock()
        .expect("Lock poisoned")
        .take()
        .expect("No request reached the upstream");
    assert_eq!(
        json!({
            "chat_id": "999@s.whatsapp.net",
            "spoofed_id": "888",
            "message_id": "!",
            "spoofed_message": "hi",
            "reply_message": "yo"
        }),
        sent
    );
}

#[tokio::test]
async fn empty_fields_short_circuit_before_the_upstream() {
    // Arrange
    let captured = Captured::default();
    let upstream = spawn_upstream(captured.clone());
    let panel = spawn_panel(upstream);
    let client = reqwest::Client::new();

    // Act
    let page = client
        .post(format!("http://{panel}/send"))
        .form(&[("cid", "999"), ("sid", ""), ("spf_msg", "hi"), ("rpl_msg", "yo")])
        .send()
        .await
        .expect("Failed to execute request")
        .text()
        .await
        .expect("Failed to read page");

    // Assert
    assert!(page.contains("All fields are required"));
    assert!(captured.lock().expect("Lock poisoned").is_none());
}

#[tokio::test]
async fn unreachable_upstream_renders_a_visible_error_state() {
    // Arrange: bind and drop a listener so the port refuses connections.
    let dead = {
        let listener = std::net::TcpListener::bind("127.0.0.1:0").expect("Failed to bind");
        listener.local_addr().expect("Failed to read local address")
    };
    let panel = spawn_panel(dead);
    let client = reqwest::Client::new();

    // Act
    let page = client
        .get(format!("http://{panel}/"))
        .send()
        .await
        .expect("Failed to execute request")
        .text()
        .await
        .expect("Failed to read page");

    // Assert
    assert!(page.contains("Could not load groups"));
    assert!(page.contains(r#"<form method="post" action="/send">"#));
}

#[tokio::test]
async fn upstream_error_status_is_classified_and_rendered() {
    // Arrange
    let failing = serve(Router::new().route(
        "/get-groups",
        get(|| async { (StatusCode::INTERNAL_SERVER_ERROR, "boom") }),
    ));
    let panel = spawn_panel(failing);
    let client = reqwest::Client::new();

    // Act
    let page = client
        .get(format!("http://{panel}/"))
        .send()
        .await
        .expect("Failed to execute request")
        .text()
        .await
        .expect("Failed to read page");

    // Assert
    assert!(page.contains("answered with status 500"));
}

fn spawn_upstream(captured: Captured) -> SocketAddr {
    let app = Router::new()
        .route(
            "/get-groups",
            get(|| async { "Team Alpha:1111@g.us\nOps:2222@g.us\n" }),
        )
        .route(
            "/send-spoofed",
            post(
                |State(captured): State<Captured>, body: String| async move {
                    let value: Value =
                        serde_json::from_str(&body).expect("Upstream received invalid JSON");
                    *captured.lock().expect("Lock poisoned") = Some(value);
                    Json(json!({ "message": "spoofed msg sended" }))
                },
            ),
        )
        .with_state(captured);
    serve(app)
}

fn spawn_panel(upstream: SocketAddr) -> SocketAddr {
    let config = Config {
        upstream_url: format!("http://{upstream}"),
        ..Config::default()
    };
    let app = spoofpanel::setup_app(&config).expect("Failed to set up app");
    serve(app)
}

fn serve(app: Router) -> SocketAddr {
    let listener = std::net::TcpListener::bind("127.0.0.1:0").expect("Failed to bind");
    let address = listener.local_addr().expect("Failed to read local address");
    let server = axum::Server::from_tcp(listener)
        .expect("Failed to create server")
        .serve(app.into_make_service());
    let _ = tokio::spawn(server);
    address
}
