use axum::Router;
use tokio::net::TcpListener;

pub const GAZETTE_PATH: &str = "/all-notices/notice/data.json";

/// Serve `router` on an ephemeral local port and return the notices URL.
pub async fn serve(router: Router) -> String {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, router).await.unwrap();
    });
    format!("http://{}{}", addr, GAZETTE_PATH)
}

/// A notices URL on a port nothing listens on.
pub async fn unused_url() -> String {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);
    format!("http://{}{}", addr, GAZETTE_PATH)
}
