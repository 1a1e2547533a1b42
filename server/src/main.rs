#![recursion_limit = "256"]

mod routes;
mod state;
mod voice;

use std::sync::Arc;

use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
    // A missing .env file is normal in production; variables may come from the host.
    if let Err(e) = dotenvy::dotenv() {
        if !e.not_found() {
            eprintln!("failed to load .env: {e}");
        }
    }

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let port: u16 = std::env::var("PORT")
        .unwrap_or_else(|_| "3000".into())
        .parse()
        .expect("invalid PORT");

    // A missing key is non-fatal (the proxy answers 500); a client that cannot be built is.
    let voice = voice::client_from_env()
        .expect("voice client setup failed")
        .map(|client| {
            tracing::info!(agent_id = client.agent_id(), "voice client initialized");
            Arc::new(client) as Arc<dyn voice::SignedUrlSource>
        });

    let state = state::AppState::new(voice);

    let app = routes::leptos_app(state).expect("leptos app setup failed");
    let listener = tokio::net::TcpListener::bind(format!("0.0.0.0:{port}"))
        .await
        .expect("failed to bind");

    tracing::info!(%port, "hirewise listening");
    axum::serve(listener, app).await.expect("server failed");
}
