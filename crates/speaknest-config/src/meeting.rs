use std::env;

use serde::{Deserialize, Serialize};

fn default_oauth_url() -> String {
    "https://zoom.us/oauth/token".to_string()
}

fn default_api_base() -> String {
    "https://api.zoom.us/v2".to_string()
}

fn default_timezone() -> String {
    "Europe/Istanbul".to_string()
}

fn default_duration_minutes() -> u32 {
    40
}

fn default_request_timeout_secs() -> u64 {
    30
}

/// Server-to-server OAuth credentials and endpoints of the meeting provider
#[derive(Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct MeetingConfig {
    pub account_id: String,
    pub client_id: String,
    #[serde(skip_serializing)]
    pub client_secret: String,
    #[serde(default = "default_oauth_url")]
    pub oauth_url: String,
    #[serde(default = "default_api_base")]
    pub api_base: String,
    #[serde(default = "default_timezone")]
    pub timezone: String,
    #[serde(default = "default_duration_minutes")]
    pub default_duration_minutes: u32,
    #[serde(default = "default_request_timeout_secs")]
    pub request_timeout_secs: u64,
}

impl MeetingConfig {
    pub fn new() -> Self {
        Self {
            account_id: env::var("ZOOM_ACCOUNT_ID").unwrap_or_default(),
            client_id: env::var("ZOOM_CLIENT_ID").unwrap_or_default(),
            client_secret: env::var("ZOOM_CLIENT_SECRET").unwrap_or_default(),
            oauth_url: env::var("ZOOM_OAUTH_URL").unwrap_or_else(|_| default_oauth_url()),
            api_base: env::var("ZOOM_API_BASE").unwrap_or_else(|_| default_api_base()),
            timezone: default_timezone(),
            default_duration_minutes: default_duration_minutes(),
            request_timeout_secs: default_request_timeout_secs(),
        }
    }

    pub fn has_credentials(&self) -> bool {
        !self.account_id.is_empty() && !self.client_id.is_empty() && !self.client_secret.is_empty()
    }
}

impl Default for MeetingConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for MeetingConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MeetingConfig")
            .field("account_id", &self.account_id)
            .field("client_id", &self.client_id)
            .field("client_secret", &"<redacted>")
            .field("oauth_url", &self.oauth_url)
            .field("api_base", &self.api_base)
            .field("timezone", &self.timezone)
            .finish_non_exhaustive()
    }
}
