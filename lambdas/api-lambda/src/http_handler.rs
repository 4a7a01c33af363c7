use lambda_http::{http::Method, Body, Error, Request, Response};
use std::sync::Arc;
use user_records_shared::{handlers, AppState};

/// Main Lambda handler - routes requests by HTTP method
pub(crate) async fn function_handler(
    event: Request,
    state: Arc<AppState>,
) -> Result<Response<Body>, Error> {
    let method = event.method();
    tracing::info!(
        "Users Lambda invoked - Method: {} Path: {}",
        method,
        event.uri().path()
    );

    let store = state.store.as_ref();
    let table_name = state.table_name.as_str();

    match method {
        &Method::GET => handlers::get_user(&event, table_name, store).await,
        &Method::POST => handlers::create_user(&event, table_name, store).await,
        &Method::PUT => handlers::update_user(&event, table_name, store).await,
        &Method::DELETE => handlers::delete_user(&event, table_name, store).await,
        _ => handlers::unhandled_method(),
    }
}
