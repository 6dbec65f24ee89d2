use aws_sdk_dynamodb::types::AttributeValue;
use aws_sdk_dynamodb::Client as DynamoClient;

use super::model::{classify_url, MoodboardItem, MoodboardKind};

/// Load all moodboard items for a project, newest first.
pub async fn load_for_project(
    client: &DynamoClient,
    table_name: &str,
    project_id: &str,
) -> Result<Vec<MoodboardItem>, String> {
    let pk = format!("PROJECT#{}", project_id);

    let result = client
        .query()
        .table_name(table_name)
        .key_condition_expression("PK = :pk AND begins_with(SK, :sk_prefix)")
        .expression_attribute_values(":pk", AttributeValue::S(pk))
        .expression_attribute_values(":sk_prefix", AttributeValue::S("MOOD#".to_string()))
        .send()
        .await
        .map_err(|e| format!("DynamoDB query error: {}", e))?;

    let mut items = Vec::new();
    for item in result.items() {
        if let Some(sk) = item.get("SK").and_then(|v| v.as_s().ok()) {
            if let Some(item_id) = sk.strip_prefix("MOOD#") {
                let url = item
                    .get("url")
                    .and_then(|v| v.as_s().ok())
                    .map(|s| s.to_string())
                    .unwrap_or_default();
                items.push(MoodboardItem {
                    item_id: item_id.to_string(),
                    project_id: project_id.to_string(),
                    kind: item
                        .get("kind")
                        .and_then(|v| v.as_s().ok())
                        .map(|s| MoodboardKind::from_label(s))
                        .unwrap_or(MoodboardKind::Link),
                    url,
                    title: item
                        .get("title")
                        .and_then(|v| v.as_s().ok())
                        .map(|s| s.to_string())
                        .unwrap_or_default(),
                    created_at: item
                        .get("created_at")
                        .and_then(|v| v.as_s().ok())
                        .map(|s| s.to_string())
                        .unwrap_or_default(),
                });
            }
        }
    }

    // Newest first
    items.sort_by(|a, b| b.created_at.cmp(&a.created_at));

    Ok(items)
}

/// Pin a new reference to a project's moodboard and return the stored item.
/// The kind is classified from the URL at creation time.
pub async fn create_item(
    client: &DynamoClient,
    table_name: &str,
    project_id: &str,
    url: &str,
    title: Option<String>,
) -> Result<MoodboardItem, String> {
    let item_id = uuid::Uuid::new_v4().to_string();
    let now = chrono::Utc::now().to_rfc3339();
    let kind = classify_url(url);
    let title = title.unwrap_or_else(|| "New Reference".to_string());

    client
        .put_item()
        .table_name(table_name)
        .item("PK", AttributeValue::S(format!("PROJECT#{}", project_id)))
        .item("SK", AttributeValue::S(format!("MOOD#{}", item_id)))
        .item("url", AttributeValue::S(url.to_string()))
        .item("kind", AttributeValue::S(kind.as_label().to_string()))
        .item("title", AttributeValue::S(title.clone()))
        .item("created_at", AttributeValue::S(now.clone()))
        .send()
        .await
        .map_err(|e| format!("DynamoDB put_item error: {}", e))?;

    Ok(MoodboardItem {
        item_id,
        project_id: project_id.to_string(),
        url: url.to_string(),
        kind,
        title,
        created_at: now,
    })
}

/// Remove a pinned reference.
pub async fn delete_item(
    client: &DynamoClient,
    table_name: &str,
    project_id: &str,
    item_id: &str,
) -> Result<(), String> {
    client
        .delete_item()
        .table_name(table_name)
        .key("PK", AttributeValue::S(format!("PROJECT#{}", project_id)))
        .key("SK", AttributeValue::S(format!("MOOD#{}", item_id)))
        .send()
        .await
        .map_err(|e| format!("DynamoDB delete_item error: {}", e))?;

    Ok(())
}
