use spoofpanel_cfg::Config;
use std::net::SocketAddr;

#[tokio::test]
async fn ping_works() {
    // Arrange
    let address = spawn_app();
    let client = reqwest::Client::new();

    // Act
    let response = client
        .get(format!("http://{address}/ping"))
        .send()
        .await
        .expect("Failed to execute request");

    // Assert
    assert!(response.status().is_success());
    assert_eq!(Some(0), response.content_length());
}

#[tokio::test]
async fn unknown_routes_answer_404() {
    // Arrange
    let address = spawn_app();
    let client = reqwest::Client::new();

    // Act
    let response = client
        .get(format!("http://{address}/no-such-page"))
        .send()
        .await
        .expect("Failed to execute request");

    // Assert
    assert_eq!(404, response.status().as_u16());
}

fn spawn_app() -> SocketAddr {
    let listener = std::net::TcpListener::bind("127.0.0.1:0").expect("Failed to bind");
    let address = listener.local_addr().expect("Failed to read local address");
    let app = spoofpanel::setup_app(&Config::default()).expect("Failed to set up app");
    let server = axum::Server::from_tcp(listener)
        .expect("Failed to create server")
        .serve(app.into_make_service());
    let _ = tokio::spawn(server);
    address
}
