use once_cell::sync::Lazy;
use regex::Regex;
use serde_json::Value;

use crate::error::UserError;
use crate::item::{from_item, string_key, to_item};
use crate::store::UserStore;
use crate::types::{User, PARTITION_KEY};

// Local part: RFC 5322 atext and dots. Domain: dot-separated labels, at least two.
static EMAIL_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"^[a-zA-Z0-9.!#$%&'*+/=?^_`{|}~-]+@[a-zA-Z0-9](?:[a-zA-Z0-9-]{0,61}[a-zA-Z0-9])?(?:\.[a-zA-Z0-9](?:[a-zA-Z0-9-]{0,61}[a-zA-Z0-9])?)+$",
    )
    .expect("email pattern compiles")
});

pub fn is_email_valid(email: &str) -> bool {
    (3..=254).contains(&email.len()) && EMAIL_RE.is_match(email)
}

/// Decode a request body into a user. The body must be a JSON object; unknown
/// fields are ignored and missing ones are left empty.
pub fn parse_user(body: &[u8]) -> Result<User, UserError> {
    let value = match serde_json::from_slice::<Value>(body) {
        Ok(value @ Value::Object(_)) => value,
        Ok(other) => {
            tracing::debug!("Rejecting non-object user payload: {}", other);
            return Err(UserError::InvalidUserData);
        }
        Err(e) => {
            tracing::debug!("Rejecting user payload: {}", e);
            return Err(UserError::InvalidUserData);
        }
    };

    serde_json::from_value(value).map_err(|e| {
        tracing::debug!("Rejecting user payload: {}", e);
        UserError::InvalidUserData
    })
}

/// Fetch a single user by email.
///
/// A missing record is not an error: it comes back as a user with every field
/// empty, so callers check [`User::exists`].
pub async fn fetch_user(
    store: &dyn UserStore,
    table_name: &str,
    email: &str,
) -> Result<User, UserError> {
    let item = store
        .get_item(table_name, string_key(PARTITION_KEY, email))
        .await
        .map_err(|e| {
            tracing::error!("GetItem on {} failed: {}", table_name, e);
            UserError::FailedToFetchRecord
        })?;

    from_item(item.unwrap_or_default())
}

/// Fetch every user in the table, in store order.
pub async fn fetch_all_users(
    store: &dyn UserStore,
    table_name: &str,
) -> Result<Vec<User>, UserError> {
    let items = store.scan(table_name).await.map_err(|e| {
        tracing::error!("Scan on {} failed: {}", table_name, e);
        UserError::FailedToFetchRecord
    })?;

    items.into_iter().map(from_item::<User>).collect()
}

/// Create a user from a request body. Rejected when a user with the same
/// email is already stored.
///
/// The existence check and the write are separate calls, so two concurrent
/// creates for one email can both succeed; the later write wins.
pub async fn create_user(
    store: &dyn UserStore,
    table_name: &str,
    body: &[u8],
) -> Result<User, UserError> {
    let user = parse_user(body)?;
    if !is_email_valid(&user.email) {
        return Err(UserError::InvalidEmail);
    }

    let existing = fetch_user(store, table_name, &user.email)
        .await
        .map_err(|_| UserError::FailedToFetchRecord)?;
    if existing.exists() {
        tracing::debug!("User {} already exists", user.email);
        return Err(UserError::UserAlreadyExists);
    }

    put_user(store, table_name, &user).await?;
    tracing::info!("Created user {}", user.email);
    Ok(user)
}

/// Replace an existing user with the request body. The email in the body
/// selects the record and is not re-validated.
pub async fn update_user(
    store: &dyn UserStore,
    table_name: &str,
    body: &[u8],
) -> Result<User, UserError> {
    let user = parse_user(body)?;

    // Fetch errors pass through unchanged, unlike create.
    let existing = fetch_user(store, table_name, &user.email).await?;
    if !existing.exists() {
        tracing::debug!("User {} does not exist", user.email);
        return Err(UserError::UserDoesNotExist);
    }

    put_user(store, table_name, &user).await?;
    tracing::info!("Updated user {}", user.email);
    Ok(user)
}

/// Delete a user by email. Deleting an unknown email succeeds.
pub async fn delete_user(
    store: &dyn UserStore,
    table_name: &str,
    email: &str,
) -> Result<(), UserError> {
    store
        .delete_item(table_name, string_key(PARTITION_KEY, email))
        .await
        .map_err(|e| {
            tracing::error!("DeleteItem on {} failed: {}", table_name, e);
            UserError::FailedToDeleteRecord
        })?;

    tracing::info!("Deleted user {}", email);
    Ok(())
}

async fn put_user(store: &dyn UserStore, table_name: &str, user: &User) -> Result<(), UserError> {
    let item = to_item(user)?;
    store.put_item(table_name, item).await.map_err(|e| {
        tracing::error!("PutItem on {} failed: {}", table_name, e);
        UserError::CouldNotPutItem
    })
}
