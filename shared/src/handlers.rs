use lambda_http::{http::StatusCode, Body, Error, Request, RequestExt, Response};
use serde::Serialize;

use crate::error::UserError;
use crate::store::UserStore;
use crate::types::ErrorBody;
use crate::users;

fn email_param(req: &Request) -> Option<String> {
    req.query_string_parameters_ref()
        .and_then(|params| params.first("email"))
        .map(|email| email.to_string())
}

/// GET: a single user when `email` is given, otherwise every user.
pub async fn get_user(
    req: &Request,
    table_name: &str,
    store: &dyn UserStore,
) -> Result<Response<Body>, Error> {
    match email_param(req).filter(|email| !email.is_empty()) {
        Some(email) => match users::fetch_user(store, table_name, &email).await {
            Ok(user) => api_response(StatusCode::OK, &user),
            Err(e) => error_response(e),
        },
        None => match users::fetch_all_users(store, table_name).await {
            Ok(users) => api_response(StatusCode::OK, &users),
            Err(e) => error_response(e),
        },
    }
}

pub async fn create_user(
    req: &Request,
    table_name: &str,
    store: &dyn UserStore,
) -> Result<Response<Body>, Error> {
    match users::create_user(store, table_name, req.body()).await {
        Ok(user) => api_response(StatusCode::CREATED, &user),
        Err(e) => error_response(e),
    }
}

pub async fn update_user(
    req: &Request,
    table_name: &str,
    store: &dyn UserStore,
) -> Result<Response<Body>, Error> {
    match users::update_user(store, table_name, req.body()).await {
        Ok(user) => api_response(StatusCode::OK, &user),
        Err(e) => error_response(e),
    }
}

/// DELETE: removes the user named by the `email` query parameter.
pub async fn delete_user(
    req: &Request,
    table_name: &str,
    store: &dyn UserStore,
) -> Result<Response<Body>, Error> {
    let email = email_param(req).unwrap_or_default();
    match users::delete_user(store, table_name, &email).await {
        Ok(()) => api_response(StatusCode::OK, &()),
        Err(e) => error_response(e),
    }
}

pub fn unhandled_method() -> Result<Response<Body>, Error> {
    api_response(
        StatusCode::METHOD_NOT_ALLOWED,
        &ErrorBody {
            error: "Method not allowed".to_string(),
        },
    )
}

fn error_response(err: UserError) -> Result<Response<Body>, Error> {
    tracing::warn!("Request failed: {}", err);
    api_response(
        StatusCode::INTERNAL_SERVER_ERROR,
        &ErrorBody {
            error: err.to_string(),
        },
    )
}

fn api_response<T: Serialize>(status: StatusCode, body: &T) -> Result<Response<Body>, Error> {
    let resp = Response::builder()
        .status(status)
        .header("Content-Type", "application/json")
        .body(serde_json::to_string(body)?.into())
        .map_err(Box::new)?;
    Ok(resp)
}
