//! HTTP API client wrapping `gloo-net` for calls to the Re-Builder backend.
//!
//! Failures stop here: they are logged and reported as `None`, never
//! propagated to the views.

use std::future::Future;

use gloo_net::http::{Request, Response};
use rebuilder_app::ports::PanelApi;
use rebuilder_domain::action::ActionRequest;
use rebuilder_domain::settings::{Settings, SettingsPayload};
use rebuilder_domain::status::StatusSnapshot;
use serde::Serialize;
use serde::de::DeserializeOwned;
use tracing::{debug, warn};

const ACTION_PATH: &str = "/action";
const SETTINGS_PATH: &str = "/settings";
const STATUS_PATH: &str = "/status";

/// Error raised while talking to the backend.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// The request never got a response, or its body could not be read.
    #[error("request failed: {0}")]
    Transport(#[from] gloo_net::Error),

    /// The response body is not the JSON we expect.
    #[error("invalid response body: {0}")]
    Decode(gloo_net::Error),

    /// The backend answered with a non-2xx status.
    #[error("HTTP {status} {status_text}")]
    HttpStatus { status: u16, status_text: String },
}

fn check_status(status: u16, status_text: &str) -> Result<(), ApiError> {
    if (200..300).contains(&status) {
        return Ok(());
    }
    Err(ApiError::HttpStatus {
        status,
        status_text: status_text.to_string(),
    })
}

/// Check the HTTP response status and extract an error if non-2xx.
fn check_response(resp: Response) -> Result<Response, ApiError> {
    check_status(resp.status(), &resp.status_text())?;
    Ok(resp)
}

async fn get_json<T: DeserializeOwned>(url: &str) -> Result<T, ApiError> {
    let resp = check_response(Request::get(url).send().await?)?;
    resp.json().await.map_err(ApiError::Decode)
}

async fn post_json<B: Serialize>(url: &str, body: &B) -> Result<(u16, String), ApiError> {
    let resp = Request::post(url).json(body)?.send().await?;
    let status = resp.status();
    let text = resp.text().await?;
    Ok((status, text))
}

/// [`PanelApi`] over HTTP.
#[derive(Debug, Clone, Default)]
pub struct HttpPanelApi {
    base_url: String,
}

impl HttpPanelApi {
    /// Client for the backend at `base_url`; empty means same origin.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{path}", self.base_url.trim_end_matches('/'))
    }

    /// GET `path` and decode the JSON body of a 2xx response.
    pub async fn send_get_request<T: DeserializeOwned>(&self, path: &str) -> Option<T> {
        let url = self.url(path);
        match get_json(&url).await {
            Ok(body) => Some(body),
            Err(err) => {
                warn!(%url, error = %err, "GET request failed");
                None
            }
        }
    }

    /// POST `body` as JSON to `path` and return the response text, whatever
    /// the status.
    pub async fn send_post_request<B: Serialize>(&self, path: &str, body: &B) -> Option<String> {
        let url = self.url(path);
        match post_json(&url, body).await {
            Ok((status, text)) if (200..300).contains(&status) => {
                debug!(%url, status, %text, "POST request answered");
                Some(text)
            }
            Ok((status, text)) => {
                warn!(%url, status, %text, "POST request rejected");
                Some(text)
            }
            Err(err) => {
                warn!(%url, error = %err, "POST request failed");
                None
            }
        }
    }
}

impl PanelApi for HttpPanelApi {
    fn fetch_settings(&self) -> impl Future<Output = Option<SettingsPayload>> {
        self.send_get_request(SETTINGS_PATH)
    }

    fn submit_settings(&self, settings: Settings) -> impl Future<Output = Option<String>> {
        async move { self.send_post_request(SETTINGS_PATH, &settings).await }
    }

    fn submit_action(&self, request: ActionRequest) -> impl Future<Output = Option<String>> {
        async move { self.send_post_request(ACTION_PATH, &request).await }
    }

    fn fetch_status(&self) -> impl Future<Output = Option<StatusSnapshot>> {
        self.send_get_request(STATUS_PATH)
    }
}
