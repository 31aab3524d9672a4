use std::{env, net::SocketAddr, sync::Arc};

use beerbot::api::{self, AppState, HandshakeMeta};
use beerbot::engine::EngineConfig;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let bind = env::var("BEERBOT_BIND").unwrap_or_else(|_| "0.0.0.0:8080".to_string());
    let addr: SocketAddr = bind.parse()?;

    let state = Arc::new(AppState {
        config: EngineConfig::default(),
        handshake: HandshakeMeta::from_env(),
    });
    let app = api::router(state);

    println!("beerbot listening on http://{addr}");
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;
    Ok(())
}
