use crate::{AuthUser, GatewayError, GatewayResult, RemoteGateway, UploadOptions};

use pf_config::GatewayConfig;
use pf_core::{UserField, UserId};

use std::time::Duration;

use async_trait::async_trait;
use bytes::Bytes;
use log::{debug, warn};
use reqwest::{Client as ReqwestClient, Method, RequestBuilder, Response, StatusCode};
use serde::Deserialize;
use serde_json::{Map, Value, json};

const USERS_TABLE: &str = "users";
const SINGLE_OBJECT: &str = "application/vnd.pgrst.object+json";
const DEFAULT_CONTENT_TYPE: &str = "application/octet-stream";

/// Gateway over a Supabase-compatible REST backend.
///
/// Tables are served under `/rest/v1`, objects under `/storage/v1` and the
/// identity provider under `/auth/v1`.
pub struct HttpGateway {
    pub base_url: String,
    api_key: String,
    service_role_key: Option<String>,
    access_token: Option<String>,
    client: ReqwestClient,
}

#[derive(Deserialize)]
struct UserResponse {
    id: String,
    email: Option<String>,
}

impl HttpGateway {
    /// Create a gateway with default client settings
    ///
    /// # Arguments
    /// * `base_url` - Backend URL (e.g., "https://xyz.supabase.co")
    /// * `api_key` - Public API key sent as the `apikey` header
    pub fn new(base_url: &str, api_key: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            api_key: api_key.to_string(),
            service_role_key: None,
            access_token: None,
            client: ReqwestClient::new(),
        }
    }

    /// Create a gateway from configuration, applying the request timeout.
    pub fn from_config(config: &GatewayConfig) -> GatewayResult<Self> {
        let client = ReqwestClient::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(Self {
            base_url: config.url.trim_end_matches('/').to_string(),
            api_key: config.api_key.clone(),
            service_role_key: config.service_role_key.clone(),
            access_token: None,
            client,
        })
    }

    /// Attach the signed-in user's access token.
    pub fn with_access_token(mut self, token: impl Into<String>) -> Self {
        self.access_token = Some(token.into());
        self
    }

    /// Attach the privileged key required by `delete_identity`.
    pub fn with_service_role_key(mut self, key: impl Into<String>) -> Self {
        self.service_role_key = Some(key.into());
        self
    }

    pub fn has_session(&self) -> bool {
        self.access_token.is_some()
    }

    /// Build a request carrying the API key and the user's bearer token
    fn request(&self, method: Method, path: &str) -> RequestBuilder {
        let url = format!("{}{}", self.base_url, path);
        let bearer = self.access_token.as_deref().unwrap_or(&self.api_key);

        self.client
            .request(method, &url)
            .header("apikey", &self.api_key)
            .bearer_auth(bearer)
    }

    /// Build a request authorized with the service-role key
    #[track_caller]
    fn admin_request(&self, method: Method, path: &str) -> GatewayResult<RequestBuilder> {
        let key = self.service_role_key.as_deref().ok_or_else(|| {
            GatewayError::invalid_request("service role key is required for admin operations")
        })?;

        let url = format!("{}{}", self.base_url, path);
        Ok(self
            .client
            .request(method, &url)
            .header("apikey", key)
            .bearer_auth(key))
    }

    /// Send a request and turn non-success statuses into errors
    async fn execute(&self, req: RequestBuilder) -> GatewayResult<Response> {
        let response = req.send().await?;
        let status = response.status();

        if status.is_success() {
            return Ok(response);
        }

        let body = response.text().await.unwrap_or_default();
        Err(Self::error_from_body(status, &body))
    }

    /// Maps the error bodies of the table, storage and auth APIs.
    pub(crate) fn error_from_body(status: StatusCode, body: &str) -> GatewayError {
        let parsed: Option<Value> = serde_json::from_str(body).ok();
        let field = |names: &[&str]| -> Option<String> {
            let value = parsed.as_ref()?;
            names.iter().find_map(|name| match value.get(*name) {
                Some(Value::String(s)) => Some(s.clone()),
                Some(Value::Number(n)) => Some(n.to_string()),
                _ => None,
            })
        };

        let code = field(&["code", "error_code", "error"]).unwrap_or_else(|| "UNKNOWN".to_string());
        let message = field(&["message", "msg", "error_description"]).unwrap_or_else(|| {
            if body.is_empty() {
                status.canonical_reason().unwrap_or("Unknown error").to_string()
            } else {
                body.to_string()
            }
        });

        if status == StatusCode::UNAUTHORIZED || status == StatusCode::FORBIDDEN {
            return GatewayError::unauthorized(format!("{code}: {message}"));
        }

        GatewayError::api(status.as_u16(), code, message)
    }

    /// Rejects identifiers that would change the meaning of a query path.
    #[track_caller]
    fn checked_identifier<'a>(kind: &str, value: &'a str) -> GatewayResult<&'a str> {
        let valid = !value.is_empty()
            && value
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || c == '_');

        if valid {
            Ok(value)
        } else {
            Err(GatewayError::invalid_request(format!(
                "invalid {kind} name: '{value}'"
            )))
        }
    }

    #[track_caller]
    fn checked_object_path(path: &str) -> GatewayResult<&str> {
        let valid = !path.is_empty()
            && !path.starts_with('/')
            && path
                .split('/')
                .all(|segment| !segment.is_empty() && segment != "." && segment != "..")
            && !path.contains(['?', '#', '%', ' ']);

        if valid {
            Ok(path)
        } else {
            Err(GatewayError::invalid_request(format!(
                "invalid object path: '{path}'"
            )))
        }
    }

    /// Parses the total out of `Content-Range: 0-24/42` or `*/42`.
    #[track_caller]
    pub(crate) fn parse_content_range_total(header: &str) -> GatewayResult<u64> {
        header
            .rsplit_once('/')
            .and_then(|(_, total)| total.trim().parse::<u64>().ok())
            .ok_or_else(|| {
                GatewayError::invalid_response(format!("unusable Content-Range: '{header}'"))
            })
    }

    fn rows_path(table: &str, column: &str, user_id: &UserId) -> String {
        format!("/rest/v1/{table}?{column}=eq.{user_id}")
    }
}

#[async_trait]
impl RemoteGateway for HttpGateway {
    async fn current_user(&self) -> GatewayResult<Option<AuthUser>> {
        if self.access_token.is_none() {
            debug!("No access token, treating session as signed out");
            return Ok(None);
        }

        let req = self.request(Method::GET, "/auth/v1/user");
        let response = match self.execute(req).await {
            Ok(response) => response,
            Err(GatewayError::Unauthorized { message, .. }) => {
                warn!("Session rejected by identity provider: {message}");
                return Ok(None);
            }
            Err(e) => return Err(e),
        };

        let user: UserResponse = serde_json::from_slice(&response.bytes().await?)?;
        let id = UserId::new(user.id)
            .map_err(|e| GatewayError::invalid_response(format!("user id: {e}")))?;

        Ok(Some(AuthUser {
            id,
            email: user.email,
        }))
    }

    async fn read_user_field(
        &self,
        user_id: &UserId,
        field: UserField,
    ) -> GatewayResult<Option<String>> {
        let column = field.as_column();
        let path = format!("/rest/v1/{USERS_TABLE}?select={column}&id=eq.{user_id}");
        let req = self
            .request(Method::GET, &path)
            .header("Accept", SINGLE_OBJECT);

        let response = match self.execute(req).await {
            Ok(response) => response,
            Err(e) if e.is_not_found() => {
                return Err(GatewayError::not_found(format!(
                    "{USERS_TABLE}.{column} for {user_id}"
                )));
            }
            Err(e) => return Err(e),
        };

        let row: Value = serde_json::from_slice(&response.bytes().await?)?;
        match row.get(column) {
            None | Some(Value::Null) => Ok(None),
            Some(Value::String(s)) => Ok(Some(s.clone())),
            Some(other) => Ok(Some(other.to_string())),
        }
    }

    async fn update_user_field(
        &self,
        user_id: &UserId,
        field: UserField,
        value: &str,
    ) -> GatewayResult<()> {
        let mut body = Map::new();
        body.insert(field.as_column().to_string(), Value::String(value.to_string()));

        let req = self
            .request(Method::PATCH, &Self::rows_path(USERS_TABLE, "id", user_id))
            .header("Prefer", "return=minimal")
            .json(&Value::Object(body));

        self.execute(req).await?;
        Ok(())
    }

    async fn delete_rows(
        &self,
        table: &str,
        column: &str,
        user_id: &UserId,
    ) -> GatewayResult<()> {
        let table = Self::checked_identifier("table", table)?;
        let column = Self::checked_identifier("column", column)?;

        let req = self
            .request(Method::DELETE, &Self::rows_path(table, column, user_id))
            .header("Prefer", "return=minimal");

        self.execute(req).await?;
        Ok(())
    }

    async fn count_rows(&self, table: &str, column: &str, user_id: &UserId) -> GatewayResult<u64> {
        let table = Self::checked_identifier("table", table)?;
        let column = Self::checked_identifier("column", column)?;

        let req = self
            .request(Method::HEAD, &Self::rows_path(table, column, user_id))
            .header("Prefer", "count=exact");

        let response = self.execute(req).await?;
        let header = response
            .headers()
            .get("content-range")
            .and_then(|v| v.to_str().ok())
            .ok_or_else(|| GatewayError::invalid_response("missing Content-Range header"))?;

        Self::parse_content_range_total(header)
    }

    async fn upload_blob(
        &self,
        bucket: &str,
        path: &str,
        bytes: Bytes,
        options: &UploadOptions,
    ) -> GatewayResult<()> {
        let bucket = Self::checked_identifier("bucket", bucket)?;
        let path = Self::checked_object_path(path)?;
        let content_type = options
            .content_type
            .as_deref()
            .unwrap_or(DEFAULT_CONTENT_TYPE);

        let req = self
            .request(Method::POST, &format!("/storage/v1/object/{bucket}/{path}"))
            .header("x-upsert", if options.upsert { "true" } else { "false" })
            .header(
                "cache-control",
                format!("max-age={}", options.cache_control_secs),
            )
            .header("content-type", content_type)
            .body(bytes);

        self.execute(req).await?;
        Ok(())
    }

    fn public_url(&self, bucket: &str, path: &str) -> String {
        format!("{}/storage/v1/object/public/{bucket}/{path}", self.base_url)
    }

    async fn remove_blobs(&self, bucket: &str, paths: &[String]) -> GatewayResult<()> {
        let bucket = Self::checked_identifier("bucket", bucket)?;
        if paths.is_empty() {
            return Ok(());
        }

        let req = self
            .request(Method::DELETE, &format!("/storage/v1/object/{bucket}"))
            .json(&json!({ "prefixes": paths }));

        self.execute(req).await?;
        Ok(())
    }

    async fn delete_identity(&self, user_id: &UserId) -> GatewayResult<()> {
        let req = self.admin_request(Method::DELETE, &format!("/auth/v1/admin/users/{user_id}"))?;

        self.execute(req).await?;
        Ok(())
    }
}
