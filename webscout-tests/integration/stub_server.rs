//! Local HTTP stub used to stand in for the hosted search backends.

use std::net::SocketAddr;

use axum::Router;
use tokio::net::TcpListener;

/// Bind a router on an ephemeral local port and serve it in the background.
pub async fn spawn(router: Router) -> SocketAddr {
    let listener = TcpListener::bind("127.0.0.1:0")
        .await
        .expect("bind stub listener");
    let addr = listener.local_addr().expect("stub listener address");

    tokio::spawn(async move {
        axum::serve(listener, router).await.expect("serve stub");
    });

    addr
}

/// Search endpoint URL for a spawned stub.
pub fn endpoint(addr: SocketAddr) -> String {
    format!("http://{addr}/search")
}
