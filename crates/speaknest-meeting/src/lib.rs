mod client;
mod service;
mod token;

#[cfg(test)]
mod test_support;

pub use client::ZoomMeetingClient;
pub use service::MeetingService;
pub use token::ZoomTokenProvider;

use chrono::{DateTime, Utc};
use serde::Deserialize;
use speaknest_types::MeetingInfo;

/// Exchanges service credentials for a bearer token
#[async_trait::async_trait]
pub trait TokenProvider: Send + Sync {
    async fn access_token(&self) -> Result<AccessToken, MeetingError>;
}

/// Video meeting resource API
#[async_trait::async_trait]
pub trait MeetingClient: Send + Sync {
    async fn create_meeting(&self, request: &MeetingRequest) -> Result<Meeting, MeetingError>;

    async fn get_meeting(&self, meeting_id: u64) -> Result<Meeting, MeetingError>;
}

#[derive(Debug, Clone, Deserialize)]
pub struct AccessToken {
    pub access_token: String,
    #[serde(default = "default_token_type")]
    pub token_type: String,
    #[serde(default)]
    pub expires_in: u64,
}

fn default_token_type() -> String {
    "bearer".to_string()
}

#[derive(Debug, Clone, PartialEq)]
pub struct MeetingRequest {
    pub topic: String,
    /// Scheduled when set, instant otherwise
    pub start_time: Option<DateTime<Utc>>,
    pub duration_minutes: u32,
    pub timezone: String,
    pub agenda: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Meeting {
    pub id: u64,
    #[serde(default)]
    pub topic: String,
    pub join_url: String,
    #[serde(default)]
    pub start_url: String,
    #[serde(default)]
    pub start_time: Option<DateTime<Utc>>,
    #[serde(default)]
    pub duration: Option<u32>,
    #[serde(default)]
    pub password: Option<String>,
}

impl From<Meeting> for MeetingInfo {
    fn from(meeting: Meeting) -> Self {
        MeetingInfo {
            id: meeting.id,
            topic: meeting.topic,
            join_url: meeting.join_url,
            start_time: meeting.start_time,
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum MeetingError {
    #[error("Meeting provider credentials are not configured")]
    MissingCredentials,

    #[error("Network error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Meeting API error {status}: {body}")]
    Api { status: u16, body: String },

    #[error("Unexpected response: {0}")]
    InvalidResponse(String),

    #[error("Invalid meeting request: {0}")]
    InvalidRequest(String),
}

/// Turn a non-2xx response into `MeetingError::Api`, keeping the vendor body
pub(crate) async fn check_status(
    response: reqwest::Response,
) -> Result<reqwest::Response, MeetingError> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }

    let body = response.text().await.unwrap_or_default();
    Err(MeetingError::Api {
        status: status.as_u16(),
        body,
    })
}
