use std::sync::Arc;

use speaknest_config::meeting::MeetingConfig;
use speaknest_types::MeetingDraft;

use crate::{Meeting, MeetingClient, MeetingError, MeetingRequest};

/// Fills in defaults and validates drafts before they reach the provider
pub struct MeetingService {
    client: Arc<dyn MeetingClient>,
    timezone: String,
    default_duration_minutes: u32,
}

impl MeetingService {
    pub fn new(client: Arc<dyn MeetingClient>, timezone: String, default_duration_minutes: u32) -> Self {
        Self {
            client,
            timezone,
            default_duration_minutes,
        }
    }

    pub fn from_config(client: Arc<dyn MeetingClient>, config: &MeetingConfig) -> Self {
        Self::new(client, config.timezone.clone(), config.default_duration_minutes)
    }

    pub fn request_from(&self, draft: &MeetingDraft) -> Result<MeetingRequest, MeetingError> {
        let topic = draft.topic.trim();
        if topic.is_empty() {
            return Err(MeetingError::InvalidRequest("topic must not be empty".to_string()));
        }

        let duration_minutes = draft.duration_minutes.unwrap_or(self.default_duration_minutes);
        if duration_minutes == 0 {
            return Err(MeetingError::InvalidRequest(
                "duration must be at least one minute".to_string(),
            ));
        }

        Ok(MeetingRequest {
            topic: topic.to_string(),
            start_time: draft.start_time,
            duration_minutes,
            timezone: self.timezone.clone(),
            agenda: None,
        })
    }

    pub async fn schedule(&self, draft: &MeetingDraft) -> Result<Meeting, MeetingError> {
        let request = self.request_from(draft)?;
        self.client.create_meeting(&request).await
    }

    pub async fn fetch(&self, meeting_id: u64) -> Result<Meeting, MeetingError> {
        self.client.get_meeting(meeting_id).await
    }
}
