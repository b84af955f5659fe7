use std::sync::Arc;
use std::time::Duration;

use serde_json::json;
use speaknest_config::meeting::MeetingConfig;

use crate::{Meeting, MeetingClient, MeetingError, MeetingRequest, TokenProvider, check_status};

/// Meeting REST API client; fetches a fresh token for every call
#[derive(Clone)]
pub struct ZoomMeetingClient {
    api_base: String,
    client: reqwest::Client,
    tokens: Arc<dyn TokenProvider>,
}

impl ZoomMeetingClient {
    pub fn new(api_base: String, tokens: Arc<dyn TokenProvider>) -> Self {
        Self {
            api_base,
            client: reqwest::Client::new(),
            tokens,
        }
    }

    pub fn from_config(
        config: &MeetingConfig,
        tokens: Arc<dyn TokenProvider>,
    ) -> Result<Self, MeetingError> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.request_timeout_secs))
            .build()?;

        Ok(Self {
            api_base: config.api_base.clone(),
            client,
            tokens,
        })
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.api_base.trim_end_matches('/'), path)
    }

    async fn parse_meeting(response: reqwest::Response) -> Result<Meeting, MeetingError> {
        check_status(response)
            .await?
            .json::<Meeting>()
            .await
            .map_err(|e| MeetingError::InvalidResponse(format!("meeting response: {e}")))
    }
}

#[async_trait::async_trait]
impl MeetingClient for ZoomMeetingClient {
    async fn create_meeting(&self, request: &MeetingRequest) -> Result<Meeting, MeetingError> {
        let token = self.tokens.access_token().await?;

        // 1 = instant, 2 = scheduled
        let meeting_type = if request.start_time.is_some() { 2 } else { 1 };
        let mut body = json!({
            "topic": request.topic,
            "type": meeting_type,
            "duration": request.duration_minutes,
            "timezone": request.timezone,
            "settings": {
                "join_before_host": true,
                "waiting_room": false
            }
        });
        if let Some(start_time) = request.start_time {
            body["start_time"] = json!(start_time.format("%Y-%m-%dT%H:%M:%SZ").to_string());
        }
        if let Some(agenda) = &request.agenda {
            body["agenda"] = json!(agenda);
        }

        let response = self
            .client
            .post(self.url("/users/me/meetings"))
            .bearer_auth(&token.access_token)
            .json(&body)
            .send()
            .await?;

        let meeting = Self::parse_meeting(response).await?;
        tracing::info!("Created meeting {} ({})", meeting.id, meeting.topic);
        Ok(meeting)
    }

    async fn get_meeting(&self, meeting_id: u64) -> Result<Meeting, MeetingError> {
        let token = self.tokens.access_token().await?;

        let response = self
            .client
            .get(self.url(&format!("/meetings/{meeting_id}")))
            .bearer_auth(&token.access_token)
            .send()
            .await?;

        Self::parse_meeting(response).await
    }
}
