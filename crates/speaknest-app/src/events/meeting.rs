use anyhow::Context;
use speaknest_meeting::MeetingService;
use speaknest_types::{AppEvent, MeetingDraft};

use crate::state::AppState;

fn meeting_service(state: &AppState) -> anyhow::Result<&MeetingService> {
    state.meetings.as_ref().context(
        "Meeting integration disabled: set ZOOM_ACCOUNT_ID, ZOOM_CLIENT_ID and ZOOM_CLIENT_SECRET",
    )
}

pub async fn handle_meeting_creation(
    state: &AppState,
    draft: MeetingDraft,
) -> anyhow::Result<AppEvent> {
    let meeting = meeting_service(state)?.schedule(&draft).await?;
    tracing::info!("Meeting ready: id={} join_url={}", meeting.id, meeting.join_url);

    Ok(AppEvent::MeetingReady(meeting.into()))
}

pub async fn handle_get_meeting(state: &AppState, meeting_id: u64) -> anyhow::Result<AppEvent> {
    let meeting = meeting_service(state)?
        .fetch(meeting_id)
        .await
        .with_context(|| format!("Failed to fetch meeting {meeting_id}"))?;

    Ok(AppEvent::MeetingReady(meeting.into()))
}
