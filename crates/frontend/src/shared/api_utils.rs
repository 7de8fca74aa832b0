//! API client plumbing shared by every domain module.
//!
//! All requests go through an explicit [`ApiContext`] — the bearer token
//! is handed in by the caller, never read from storage down here.

use gloo_net::http::{Request, RequestBuilder, Response};
use serde::de::DeserializeOwned;
use serde::Serialize;

/// Base URL for backend requests, derived from the current window
/// location: same host, port 4000, `/api` prefix.
pub fn api_base() -> String {
    let window = match web_sys::window() {
        Some(w) => w,
        None => return String::new(),
    };
    let location = window.location();
    let protocol = location.protocol().unwrap_or_else(|_| "http:".to_string());
    let hostname = location
        .hostname()
        .unwrap_or_else(|_| "127.0.0.1".to_string());
    format!("{}//{}:4000/api", protocol, hostname)
}

/// Endpoint plus credentials for one session, passed to every fetch
/// function.
#[derive(Clone, Debug, PartialEq)]
pub struct ApiContext {
    pub base_url: String,
    pub token: Option<String>,
}

impl ApiContext {
    pub fn new(base_url: String, token: Option<String>) -> Self {
        Self { base_url, token }
    }

    /// Context for the current window with the given bearer token.
    pub fn for_window(token: Option<String>) -> Self {
        Self::new(api_base(), token)
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    fn authorize(&self, builder: RequestBuilder) -> RequestBuilder {
        match &self.token {
            Some(token) => builder.header("Authorization", &format!("Bearer {}", token)),
            None => builder,
        }
    }

    pub async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, String> {
        let response = self
            .authorize(Request::get(&self.url(path)))
            .header("Accept", "application/json")
            .send()
            .await
            .map_err(|e| format!("Failed to send request: {}", e))?;
        decode(path, response).await
    }

    pub async fn post_json<B: Serialize, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T, String> {
        let response = self
            .authorize(Request::post(&self.url(path)))
            .json(body)
            .map_err(|e| format!("Failed to serialize request: {}", e))?
            .send()
            .await
            .map_err(|e| format!("Failed to send request: {}", e))?;
        decode(path, response).await
    }

    pub async fn put_json<B: Serialize, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T, String> {
        let response = self
            .authorize(Request::put(&self.url(path)))
            .json(body)
            .map_err(|e| format!("Failed to serialize request: {}", e))?
            .send()
            .await
            .map_err(|e| format!("Failed to send request: {}", e))?;
        decode(path, response).await
    }

    /// POST where the response body is ignored (logout and friends).
    pub async fn post_no_content<B: Serialize>(&self, path: &str, body: &B) -> Result<(), String> {
        let response = self
            .authorize(Request::post(&self.url(path)))
            .json(body)
            .map_err(|e| format!("Failed to serialize request: {}", e))?
            .send()
            .await
            .map_err(|e| format!("Failed to send request: {}", e))?;
        if response.ok() {
            Ok(())
        } else {
            Err(fail(path, response).await)
        }
    }

    pub async fn delete(&self, path: &str) -> Result<(), String> {
        let response = self
            .authorize(Request::delete(&self.url(path)))
            .send()
            .await
            .map_err(|e| format!("Failed to send request: {}", e))?;
        if response.ok() {
            Ok(())
        } else {
            Err(fail(path, response).await)
        }
    }
}

async fn decode<T: DeserializeOwned>(path: &str, response: Response) -> Result<T, String> {
    if !response.ok() {
        return Err(fail(path, response).await);
    }
    response
        .json::<T>()
        .await
        .map_err(|e| format!("Failed to parse response: {}", e))
}

/// Turn a non-2xx response into the operator-facing message and log it.
async fn fail(path: &str, response: Response) -> String {
    let status = response.status();
    let body = response.text().await.unwrap_or_default();
    let message = error_from_body(status, &body);
    log::error!("request to {} failed: {}", path, message);
    message
}

/// Extract the backend's `{"error": …}` message. The message is shown to
/// the operator verbatim; anything unparseable falls back to the bare
/// status code.
pub fn error_from_body(status: u16, body: &str) -> String {
    serde_json::from_str::<serde_json::Value>(body)
        .ok()
        .and_then(|v| {
            v.get("error")
                .and_then(|e| e.as_str())
                .map(str::to_owned)
        })
        .unwrap_or_else(|| format!("HTTP {}", status))
}

/// Render list-filter params as a query string; empty when nothing is set.
pub fn query_string<P: Serialize>(params: &P) -> String {
    match serde_qs::to_string(params) {
        Ok(qs) if !qs.is_empty() => format!("?{}", qs),
        _ => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn backend_error_message_surfaces_verbatim() {
        assert_eq!(
            error_from_body(400, r#"{"error":"Unknown stage slug: PAINTING"}"#),
            "Unknown stage slug: PAINTING"
        );
    }

    #[test]
    fn unparseable_bodies_fall_back_to_status() {
        assert_eq!(error_from_body(502, "<html>Bad Gateway</html>"), "HTTP 502");
        assert_eq!(error_from_body(404, ""), "HTTP 404");
        assert_eq!(error_from_body(500, r#"{"message":"nope"}"#), "HTTP 500");
    }

    #[test]
    fn query_string_skips_unset_params() {
        use contracts::domain::a010_service_lead::dto::ServiceLeadListParams;

        let empty = ServiceLeadListParams::default();
        assert_eq!(query_string(&empty), "");

        let params = ServiceLeadListParams {
            status: Some("PENDING".into()),
            customer_name: Some("Asha".into()),
            ..Default::default()
        };
        let qs = query_string(&params);
        assert!(qs.starts_with('?'));
        assert!(qs.contains("status=PENDING"));
        assert!(qs.contains("customerName=Asha"));
        assert!(!qs.contains("stage"));
    }
}
