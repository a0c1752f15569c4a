mod config;
mod routes;
mod services;
mod state;

use services::todo::TodoStore;

#[tokio::main]
async fn main() {
    let _ = dotenvy::dotenv();
    tracing_subscriber::fmt::init();

    let config = config::ServerConfig::from_env().expect("invalid server configuration");

    let store = TodoStore::with_seed(&config.seed);
    if !store.is_empty() {
        tracing::info!(count = store.len(), "seeded todos");
    }
    let state = state::AppState::new(store);

    // Serve the API alone if the Leptos site configuration is unavailable.
    let app = match routes::leptos_app(state.clone()) {
        Ok(app) => app,
        Err(e) => {
            tracing::warn!(error = %e, "leptos app not configured; serving API only");
            routes::api_routes(state)
        }
    };

    let addr = config.bind_addr();
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .expect("failed to bind");

    tracing::info!(%addr, "todo server listening");
    axum::serve(listener, app).await.expect("server failed");
}
