//! HTTP implementation of the fetch client
//!
//! `GET {api_url}/animals/available?type=..&gender=..` with a bearer token.
//! Non-2xx answers come back as `Ok(ApiResponse { data: None, .. })` so the
//! controller can tell "server said no" apart from "never reached the server"
//! in its logs, while treating both as failures.

use super::{AnimalsApi, AnimalsPayload, ApiResponse, FetchError};
use crate::animals::AnimalFilter;
use async_trait::async_trait;
use std::time::Duration;

/// Adoption API client backed by reqwest
pub struct HttpAnimalsApi {
    client: reqwest::Client,
    base_url: String,
}

impl HttpAnimalsApi {
    /// Create a client for `base_url` with a per-request timeout
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self, FetchError> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| FetchError::Transport(format!("Failed to create HTTP client: {}", e)))?;

        tracing::debug!(
            "Initialized adoption API client: {} (timeout: {:?})",
            base_url,
            timeout
        );

        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    fn endpoint(&self) -> String {
        format!("{}/animals/available", self.base_url)
    }

    fn build_request(&self, filter: Option<&AnimalFilter>, token: &str) -> reqwest::RequestBuilder {
        let mut req = self.client.get(self.endpoint());

        if let Some(filter) = filter {
            req = req.query(&filter.query_pairs());
        }

        // An empty token still makes the call; the server decides
        if !token.is_empty() {
            req = req.bearer_auth(token);
        }

        req.header("Accept", "application/json")
    }
}

#[async_trait]
impl AnimalsApi for HttpAnimalsApi {
    fn name(&self) -> &'static str {
        "http"
    }

    async fn fetch_available(
        &self,
        filter: Option<AnimalFilter>,
        token: String,
    ) -> Result<ApiResponse, FetchError> {
        let response = self.build_request(filter.as_ref(), &token).send().await?;
        let status = response.status().as_u16();

        if !response.status().is_success() {
            tracing::debug!("Listing request answered {}", status);
            return Ok(ApiResponse { status, data: None });
        }

        let data: AnimalsPayload = response.json().await.map_err(|e| {
            FetchError::Decode(format!("Failed to parse animals response: {}", e))
        })?;

        Ok(ApiResponse {
            status,
            data: Some(data),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{
        extract::Query,
        http::{HeaderMap, StatusCode},
        response::IntoResponse,
        routing::get,
        Json, Router,
    };
    use std::collections::HashMap;

    /// Serve `router` on an ephemeral port, return its base URL
    async fn serve(router: Router) -> String {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, router).await.unwrap();
        });
        format!("http://{}", addr)
    }

    /// Echo the query and the auth header back as a one-animal list
    async fn echo(
        Query(params): Query<HashMap<String, String>>,
        headers: HeaderMap,
    ) -> impl IntoResponse {
        let auth = headers
            .get("authorization")
            .and_then(|v| v.to_str().ok())
            .unwrap_or("")
            .to_string();
        Json(serde_json::json!({
            "animals": [{
                "id": 7,
                "name": auth,
                "type": params.get("type").cloned().unwrap_or_default(),
                "gender": params.get("gender").cloned().unwrap_or_default(),
                "breed": "Vira-lata",
                "description": "",
                "photo": ""
            }]
        }))
    }

    #[tokio::test]
    async fn test_fetch_sends_filter_and_token() {
        let base = serve(Router::new().route("/animals/available", get(echo))).await;
        let api = HttpAnimalsApi::new(&base, Duration::from_secs(5)).unwrap();

        let filter = AnimalFilter::new(Some("Cachorro".into()), Some("Macho".into()));
        let response = api
            .fetch_available(filter, "tok-123".to_string())
            .await
            .unwrap();
        let animals = response.into_animals().unwrap();

        assert_eq!(animals.len(), 1);
        assert_eq!(animals[0].id, "7");
        assert_eq!(animals[0].name, "Bearer tok-123");
        assert_eq!(animals[0].kind, "Cachorro");
        assert_eq!(animals[0].gender, "Macho");
    }

    #[tokio::test]
    async fn test_empty_token_and_no_filter() {
        let base = serve(Router::new().route("/animals/available", get(echo))).await;
        let api = HttpAnimalsApi::new(&format!("{}/", base), Duration::from_secs(5)).unwrap();

        let animals = api
            .fetch_available(None, String::new())
            .await
            .unwrap()
            .into_animals()
            .unwrap();

        assert_eq!(animals[0].name, "");
        assert_eq!(animals[0].kind, "");
    }

    #[tokio::test]
    async fn test_non_success_status_is_not_decoded() {
        let router = Router::new().route(
            "/animals/available",
            get(|| async { (StatusCode::UNAUTHORIZED, "not json") }),
        );
        let base = serve(router).await;
        let api = HttpAnimalsApi::new(&base, Duration::from_secs(5)).unwrap();

        let response = api.fetch_available(None, String::new()).await.unwrap();
        assert_eq!(response.status, 401);
        assert!(response.data.is_none());
    }

    #[tokio::test]
    async fn test_malformed_body_is_decode_error() {
        let router = Router::new().route("/animals/available", get(|| async { "[1, 2" }));
        let base = serve(router).await;
        let api = HttpAnimalsApi::new(&base, Duration::from_secs(5)).unwrap();

        let err = api.fetch_available(None, String::new()).await.unwrap_err();
        assert!(matches!(err, FetchError::Decode(_)), "got {:?}", err);
    }

    #[tokio::test]
    async fn test_unreachable_server_is_transport_error() {
        // Bind then drop to get a port nobody listens on
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);

        let api = HttpAnimalsApi::new(&format!("http://{}", addr), Duration::from_secs(5)).unwrap();
        let err = api.fetch_available(None, String::new()).await.unwrap_err();
        assert!(matches!(err, FetchError::Transport(_)), "got {:?}", err);
    }
}
