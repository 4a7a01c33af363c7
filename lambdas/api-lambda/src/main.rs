use lambda_http::{run, service_fn, tracing, Error, Request};
use std::sync::Arc;
use user_records_shared::config::Config;
use user_records_shared::store::DynamoStore;
use user_records_shared::AppState;

mod http_handler;

#[tokio::main]
async fn main() -> Result<(), Error> {
    tracing::init_default_subscriber();

    // Initialize AWS clients once at startup
    let config = Config::from_env();
    let sdk_config = aws_config::load_from_env().await;
    let store = DynamoStore::new(config.dynamo_client(&sdk_config));

    tracing::info!("Serving users from table {}", config.table_name);
    let state = AppState::new(Arc::new(store), &config);

    run(service_fn(move |event: Request| {
        let state = Arc::clone(&state);
        async move { http_handler::function_handler(event, state).await }
    }))
    .await
}
