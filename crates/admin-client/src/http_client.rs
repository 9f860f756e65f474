//! reqwest-based admin API client
//!
//! Direct implementation of the `AdminClient` trait. The bearer token is
//! requested from the injected [`SessionContext`] on every call; without a
//! token the call fails before touching the network.

use crate::client::AdminClient;
use crate::error::{ApiError, ApiResult};
use crate::resource::Resource;
use crate::types::{AmenityInput, Envelope, Page, PageData, Record};
use admin_config::{AppConfig, SessionContext};
use async_trait::async_trait;
use log::debug;
use reqwest::{Method, RequestBuilder, StatusCode};
use serde::de::DeserializeOwned;
use std::sync::Arc;
use std::time::Duration;

/// Page size used when the whole collection is needed
pub const FETCH_ALL_LIMIT: u32 = 1000;

/// Admin API client over HTTP
#[derive(Debug, Clone)]
pub struct HttpAdminClient {
    http: reqwest::Client,
    base_url: String,
    session: Arc<dyn SessionContext>,
}

impl HttpAdminClient {
    /// Create a client for the configured backend
    pub fn new(config: &AppConfig, session: Arc<dyn SessionContext>) -> ApiResult<Self> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.request_timeout_secs))
            .build()?;

        Ok(Self {
            http,
            base_url: config.api_base_url.trim_end_matches('/').to_string(),
            session,
        })
    }

    fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path)
    }

    /// Build a request carrying the session's bearer token
    fn authorized(&self, method: Method, path: &str) -> ApiResult<RequestBuilder> {
        let token = self.session.token().ok_or(ApiError::Unauthenticated)?;
        Ok(self.http.request(method, self.url(path)).bearer_auth(token))
    }

    async fn send<T: DeserializeOwned>(&self, request: RequestBuilder) -> ApiResult<Envelope<T>> {
        let response = request.send().await?;
        let status = response.status();
        let body = response.text().await?;
        interpret(status, &body)
    }

    /// Send a mutation and return the server's message
    async fn mutate(&self, request: RequestBuilder) -> ApiResult<String> {
        let envelope: Envelope<serde_json::Value> = self.send(request).await?;
        Ok(envelope.message)
    }
}

/// Interpret an HTTP response body as an envelope
///
/// `status: false` or a non-2xx status is a rejection, carrying the
/// envelope's message when the body is an envelope at all.
pub fn interpret<T: DeserializeOwned>(status: StatusCode, body: &str) -> ApiResult<Envelope<T>> {
    let raw: Envelope<serde_json::Value> = match serde_json::from_str(body) {
        Ok(raw) => raw,
        Err(e) if status.is_success() => return Err(ApiError::Decode(e.to_string())),
        Err(_) => {
            return Err(ApiError::Rejected {
                status_code: status.as_u16(),
                message: status.canonical_reason().unwrap_or_default().to_string(),
            })
        }
    };

    if !status.is_success() || !raw.status {
        let status_code = if raw.status_code != 0 {
            raw.status_code
        } else {
            status.as_u16()
        };
        return Err(ApiError::Rejected {
            status_code,
            message: raw.message,
        });
    }

    let data = raw
        .data
        .map(serde_json::from_value::<T>)
        .transpose()
        .map_err(|e| ApiError::Decode(e.to_string()))?;

    Ok(Envelope {
        status: raw.status,
        status_code: raw.status_code,
        message: raw.message,
        data,
    })
}

#[async_trait]
impl AdminClient for HttpAdminClient {
    async fn fetch_page(
        &self,
        resource: Resource,
        page: u32,
        limit: u32,
    ) -> ApiResult<Page<Record>> {
        debug!("Fetching {} page {} (limit {})", resource.path(), page, limit);

        let request = self
            .authorized(Method::GET, resource.path())?
            .query(&[("page", page), ("limit", limit)]);
        let envelope: Envelope<PageData<serde_json::Value>> = self.send(request).await?;
        let data = envelope
            .data
            .ok_or_else(|| ApiError::Decode("list response without data".to_string()))?;

        let items = data
            .data
            .into_iter()
            .map(|value| Record::decode(resource, value))
            .collect::<Result<Vec<_>, _>>()
            .map_err(|e| ApiError::Decode(e.to_string()))?;

        debug!(
            "Fetched {} {} (total {})",
            items.len(),
            resource.path(),
            data.total
        );
        Ok(Page {
            total: data.total,
            page: data.page,
            limit: data.limit,
            items,
        })
    }

    async fn fetch_all(&self, resource: Resource) -> ApiResult<Vec<Record>> {
        Ok(self.fetch_page(resource, 1, FETCH_ALL_LIMIT).await?.items)
    }

    async fn delete(&self, resource: Resource, id: &str) -> ApiResult<String> {
        debug!("Deleting {} {}", resource.path(), id);
        let request = self.authorized(Method::DELETE, &format!("{}/{}", resource.path(), id))?;
        self.mutate(request).await
    }

    async fn mark_seen(&self, enquiry_id: &str) -> ApiResult<String> {
        debug!("Marking enquiry {} as seen", enquiry_id);
        let path = format!("{}/{}/seen", Resource::Enquiries.path(), enquiry_id);
        let request = self.authorized(Method::PATCH, &path)?;
        self.mutate(request).await
    }

    async fn create_amenity(&self, input: &AmenityInput) -> ApiResult<String> {
        input.validate()?;
        debug!("Creating amenity {}", input.key);
        let request = self
            .authorized(Method::POST, Resource::Amenities.path())?
            .json(input);
        self.mutate(request).await
    }

    async fn update_amenity(&self, id: &str, input: &AmenityInput) -> ApiResult<String> {
        input.validate()?;
        debug!("Updating amenity {}", id);
        let path = format!("{}/{}", Resource::Amenities.path(), id);
        let request = self.authorized(Method::PUT, &path)?.json(input);
        self.mutate(request).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use admin_config::StaticSession;
    use pretty_assertions::assert_eq;

    fn anonymous_client() -> HttpAdminClient {
        HttpAdminClient::new(&AppConfig::default(), Arc::new(StaticSession::anonymous())).unwrap()
    }

    #[test]
    fn test_interpret_success() {
        let envelope: Envelope<serde_json::Value> = interpret(
            StatusCode::OK,
            r#"{"status":true,"statusCode":200,"message":"Deleted"}"#,
        )
        .unwrap();
        assert_eq!(envelope.message, "Deleted");
    }

    #[test]
    fn test_interpret_status_false_on_http_200_is_rejection() {
        let result: ApiResult<Envelope<serde_json::Value>> = interpret(
            StatusCode::OK,
            r#"{"status":false,"statusCode":409,"message":"already seen"}"#,
        );
        assert_eq!(
            result.unwrap_err(),
            ApiError::Rejected {
                status_code: 409,
                message: "already seen".to_string()
            }
        );
    }

    #[test]
    fn test_interpret_non_2xx_with_envelope() {
        let result: ApiResult<Envelope<serde_json::Value>> = interpret(
            StatusCode::FORBIDDEN,
            r#"{"status":true,"message":"forbidden"}"#,
        );
        assert_eq!(
            result.unwrap_err(),
            ApiError::Rejected {
                status_code: 403,
                message: "forbidden".to_string()
            }
        );
    }

    #[test]
    fn test_interpret_non_2xx_without_envelope() {
        let result: ApiResult<Envelope<serde_json::Value>> =
            interpret(StatusCode::BAD_GATEWAY, "<html>bad gateway</html>");
        assert_eq!(
            result.unwrap_err(),
            ApiError::Rejected {
                status_code: 502,
                message: "Bad Gateway".to_string()
            }
        );
    }

    #[test]
    fn test_interpret_malformed_success_is_decode_error() {
        let result: ApiResult<Envelope<PageData<serde_json::Value>>> = interpret(
            StatusCode::OK,
            r#"{"status":true,"data":{"total":1,"data":"nope"}}"#,
        );
        assert!(matches!(result, Err(ApiError::Decode(_))));
    }

    #[test]
    fn test_base_url_trailing_slash_is_trimmed() {
        let config = AppConfig {
            api_base_url: "https://admin.example.com/api/".to_string(),
            ..AppConfig::default()
        };
        let client = HttpAdminClient::new(&config, Arc::new(StaticSession::anonymous())).unwrap();
        assert_eq!(
            client.url("amenities"),
            "https://admin.example.com/api/amenities"
        );
    }

    #[tokio::test]
    async fn test_no_token_fails_before_network() {
        let client = anonymous_client();
        let result = client.delete(Resource::Amenities, "a1").await;
        assert_eq!(result, Err(ApiError::Unauthenticated));
    }

    #[tokio::test]
    async fn test_invalid_amenity_is_rejected_locally() {
        let client = anonymous_client();
        let result = client.create_amenity(&AmenityInput::default()).await;
        assert!(matches!(result, Err(ApiError::Validation(_))));
    }
}
