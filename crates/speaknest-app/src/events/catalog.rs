use anyhow::Context;
use speaknest_types::AppEvent;

use crate::state::AppState;

/// Word groups of the catalog, optionally only those of one level
pub fn handle_list_groups(state: &AppState, level: Option<&str>) -> AppEvent {
    let groups = match level {
        Some(level) => state.catalog.groups_by_level(level),
        None => state.catalog.groups().iter().collect(),
    };

    AppEvent::ShowGroups(groups.into_iter().cloned().collect())
}

pub fn handle_list_words(state: &AppState, group_id: &str) -> anyhow::Result<AppEvent> {
    let group = state
        .catalog
        .group(group_id)
        .with_context(|| format!("Unknown word group {group_id}"))?;

    let words = state
        .catalog
        .words_in(group_id)
        .into_iter()
        .cloned()
        .collect();

    Ok(AppEvent::ShowWords {
        group: group.clone(),
        words,
    })
}
