//! Facade over the remote record collections. Callers update local state
//! optimistically; writes hand back the result so a failure surfaces as a
//! recoverable error, and reads fall back to defaults when the store has
//! nothing for the project.

use zen_atoms::finance::{self, FinanceRecord};
use zen_atoms::moodboard::{self, MoodboardItem};
use zen_atoms::traffic::{self, TrafficRecord};

use crate::AppState;

pub async fn load_finance(state: &AppState, project_id: &str) -> FinanceRecord {
    match finance::load_for_project(&state.dynamo_client, &state.table_name, project_id).await {
        Ok(Some(record)) => record,
        Ok(None) => FinanceRecord::default_for(project_id),
        Err(e) => {
            tracing::error!("Failed to load finance record for {}: {}", project_id, e);
            FinanceRecord::default_for(project_id)
        }
    }
}

pub async fn save_finance(
    state: &AppState,
    record: &FinanceRecord,
) -> Result<FinanceRecord, String> {
    let result = finance::save(&state.dynamo_client, &state.table_name, record).await;
    if let Err(e) = &result {
        tracing::error!(
            "Failed to save finance record for {}: {}",
            record.project_id,
            e
        );
    }
    result
}

pub async fn load_traffic(state: &AppState, project_id: &str) -> TrafficRecord {
    match traffic::load_for_project(&state.dynamo_client, &state.table_name, project_id).await {
        Ok(Some(record)) => record,
        Ok(None) => TrafficRecord::default_for(project_id),
        Err(e) => {
            tracing::error!("Failed to load traffic record for {}: {}", project_id, e);
            TrafficRecord::default_for(project_id)
        }
    }
}

pub async fn save_traffic(state: &AppState, record: &TrafficRecord) -> Result<(), String> {
    let result = traffic::save(&state.dynamo_client, &state.table_name, record).await;
    if let Err(e) = &result {
        tracing::error!(
            "Failed to save traffic record for {}: {}",
            record.project_id,
            e
        );
    }
    result
}

/// Moodboard items for a project, newest first. An unreachable store reads
/// as an empty board.
pub async fn load_moodboard(state: &AppState, project_id: &str) -> Vec<MoodboardItem> {
    match moodboard::load_for_project(&state.dynamo_client, &state.table_name, project_id).await {
        Ok(items) => items,
        Err(e) => {
            tracing::error!("Failed to load moodboard for {}: {}", project_id, e);
            Vec::new()
        }
    }
}

pub async fn pin_moodboard_item(
    state: &AppState,
    project_id: &str,
    url: &str,
    title: Option<String>,
) -> Result<MoodboardItem, String> {
    let result =
        moodboard::create_item(&state.dynamo_client, &state.table_name, project_id, url, title)
            .await;
    if let Err(e) = &result {
        tracing::error!("Failed to pin moodboard item for {}: {}", project_id, e);
    }
    result
}

pub async fn remove_moodboard_item(
    state: &AppState,
    project_id: &str,
    item_id: &str,
) -> Result<(), String> {
    let result =
        moodboard::delete_item(&state.dynamo_client, &state.table_name, project_id, item_id).await;
    if let Err(e) = &result {
        tracing::error!("Failed to remove moodboard item {}: {}", item_id, e);
    }
    result
}
