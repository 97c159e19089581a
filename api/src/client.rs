//! # Remote user intake
//!
//! [`ApiClient`] wraps the single outbound call the console makes:
//! `GET {base}/users` against the demo endpoint, with a fixed per-request
//! timeout. The payload is decoded into typed wire structs at the boundary
//! and converted into [`store::User`] values; unknown fields in the payload
//! are ignored. The endpoint carries no status field, so statuses are
//! assigned by position (even index → active).
//!
//! Every failure is logged in one place before it is returned, so callers
//! only decide what to show, never whether to log.

use std::time::Duration;

use serde::Deserialize;
use store::{Status, User};

use crate::error::ApiError;

/// Demo endpoint serving the read-only user list.
pub const BASE_URL: &str = "https://jsonplaceholder.typicode.com";

/// Per-request budget. There is no retry once it is spent.
pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(5);

/// Wire shape of one remote user record. The endpoint sends more fields
/// (username, phone, company, geo coordinates); only what the console
/// displays is decoded.
#[derive(Debug, Deserialize)]
struct RemoteUser {
    id: u64,
    name: String,
    email: String,
    address: RemoteAddress,
}

#[derive(Debug, Deserialize)]
struct RemoteAddress {
    city: String,
}

/// Client for the demo endpoint.
#[derive(Clone, Debug)]
pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
}

impl Default for ApiClient {
    fn default() -> Self {
        Self::new()
    }
}

impl ApiClient {
    pub fn new() -> Self {
        Self::with_base_url(BASE_URL)
    }

    /// Point the client at a different base URL (tests, future self-hosted
    /// endpoints).
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: base_url.into(),
        }
    }

    /// Fetch the full remote user list. Statuses are assigned by position.
    pub async fn fetch_users(&self) -> Result<Vec<User>, ApiError> {
        let result = self.fetch_users_inner().await;
        if let Err(err) = &result {
            tracing::error!("API error: {err}");
        }
        result
    }

    async fn fetch_users_inner(&self) -> Result<Vec<User>, ApiError> {
        let url = format!("{}/users", self.base_url);
        let response = self
            .http
            .get(&url)
            .timeout(REQUEST_TIMEOUT)
            .send()
            .await
            .map_err(ApiError::from_reqwest)?
            .error_for_status()
            .map_err(ApiError::from_reqwest)?;
        let remote: Vec<RemoteUser> = response.json().await.map_err(ApiError::from_reqwest)?;
        Ok(intake(remote))
    }
}

/// Convert decoded wire records into directory entries.
fn intake(remote: Vec<RemoteUser>) -> Vec<User> {
    remote
        .into_iter()
        .enumerate()
        .map(|(i, u)| User {
            id: u.id,
            name: u.name,
            email: u.email,
            city: u.address.city,
            status: if i % 2 == 0 {
                Status::Active
            } else {
                Status::Inactive
            },
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    // Trimmed from a real /users response; extra fields left in on purpose.
    const PAYLOAD: &str = r#"[
        {
            "id": 1,
            "name": "Leanne Graham",
            "username": "Bret",
            "email": "Sincere@april.biz",
            "address": {
                "street": "Kulas Light",
                "city": "Gwenborough",
                "zipcode": "92998-3874",
                "geo": { "lat": "-37.3159", "lng": "81.1496" }
            },
            "phone": "1-770-736-8031 x56442"
        },
        {
            "id": 2,
            "name": "Ervin Howell",
            "username": "Antonette",
            "email": "Shanna@melissa.tv",
            "address": { "city": "Wisokyburgh" }
        },
        {
            "id": 3,
            "name": "Clementine Bauch",
            "email": "Nathan@yesenia.net",
            "address": { "city": "McKenziehaven" }
        }
    ]"#;

    #[test]
    fn wire_payload_decodes_and_flattens_city() {
        let remote: Vec<RemoteUser> = serde_json::from_str(PAYLOAD).unwrap();
        let users = intake(remote);

        assert_eq!(users.len(), 3);
        assert_eq!(users[0].id, 1);
        assert_eq!(users[0].name, "Leanne Graham");
        assert_eq!(users[0].city, "Gwenborough");
        assert_eq!(users[1].email, "Shanna@melissa.tv");
    }

    #[test]
    fn statuses_alternate_by_position() {
        let remote: Vec<RemoteUser> = serde_json::from_str(PAYLOAD).unwrap();
        let users = intake(remote);

        assert_eq!(users[0].status, Status::Active);
        assert_eq!(users[1].status, Status::Inactive);
        assert_eq!(users[2].status, Status::Active);
    }

    #[test]
    fn missing_required_fields_fail_decode() {
        let err = serde_json::from_str::<Vec<RemoteUser>>(r#"[{"id": 1, "name": "X"}]"#);
        assert!(err.is_err());
    }
}
