use std::sync::Arc;

use email_generator::{app, config, service::EmailGeneratorService};

#[tokio::main]
async fn main() {
    // Log setup
    tracing_subscriber::fmt().init();

    // Load config
    let cfg = config::load_config().expect("failed to locate or load config file");
    tracing::info!("Successfully loaded email generator config");

    // Setup service
    let service = EmailGeneratorService::new(&cfg);
    let service_ptr = Arc::new(service);

    // Setup router
    let router = app(service_ptr);

    // Start server
    let listener = tokio::net::TcpListener::bind(format!("0.0.0.0:{}", cfg.port))
        .await
        .expect("Failed to bind to address");
    let addr = listener.local_addr().unwrap();

    tracing::info!("Email generator starting, listening on {}", addr);

    axum::serve(listener, router)
        .await
        .expect("Failed to start server");
}
