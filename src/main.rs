#![allow(non_snake_case)]

mod client;

#[cfg(feature = "server")]
use arc_portal::server;

fn main() {
    #[cfg(not(feature = "server"))]
    dioxus::launch(client::App);

    #[cfg(feature = "server")]
    dioxus::serve(|| async move {
        use dioxus_logger::tracing;

        use crate::server::{config::Config, model::app::AppState, startup};

        dotenvy::dotenv().ok();
        let config = match Config::from_env() {
            Ok(config) => config,
            Err(e) => {
                eprintln!("Configuration error: {}", e);
                std::process::exit(1);
            }
        };

        let backend = startup::build_backend_client(&config)?;
        let session = startup::connect_to_session(&config).await?;

        tracing::info!(backend = %backend.base_url(), "Starting server");

        let mut router = dioxus::server::router(client::App);
        let server_routes = server::router::routes()
            .with_state(AppState { backend })
            .layer(session);
        router = router.merge(server_routes);

        Ok(router)
    })
}
