use aws_sdk_dynamodb::types::AttributeValue;
use aws_sdk_dynamodb::Client as DynamoClient;

use super::model::TrafficRecord;

/// Load the traffic inputs for a project. `None` when the project has never
/// saved a simulation; callers fall back to [`TrafficRecord::default_for`].
pub async fn load_for_project(
    client: &DynamoClient,
    table_name: &str,
    project_id: &str,
) -> Result<Option<TrafficRecord>, String> {
    let pk = format!("PROJECT#{}", project_id);

    let result = client
        .get_item()
        .table_name(table_name)
        .key("PK", AttributeValue::S(pk))
        .key("SK", AttributeValue::S("TRAFFIC".to_string()))
        .send()
        .await
        .map_err(|e| format!("DynamoDB get_item error: {}", e))?;

    let Some(item) = result.item() else {
        return Ok(None);
    };

    Ok(Some(TrafficRecord {
        project_id: project_id.to_string(),
        month: item
            .get("month")
            .and_then(|v| v.as_s().ok())
            .map(|s| s.to_string())
            .unwrap_or_default(),
        investment: item
            .get("investment")
            .and_then(|v| v.as_n().ok())
            .and_then(|n| n.parse().ok())
            .unwrap_or(0.0),
        ticket_price: item
            .get("ticket_price")
            .and_then(|v| v.as_n().ok())
            .and_then(|n| n.parse().ok())
            .unwrap_or(0.0),
    }))
}

/// Upsert the traffic inputs for a project, keyed by the project so each
/// save replaces the previous row.
pub async fn save(
    client: &DynamoClient,
    table_name: &str,
    record: &TrafficRecord,
) -> Result<(), String> {
    client
        .put_item()
        .table_name(table_name)
        .item(
            "PK",
            AttributeValue::S(format!("PROJECT#{}", record.project_id)),
        )
        .item("SK", AttributeValue::S("TRAFFIC".to_string()))
        .item("month", AttributeValue::S(record.month.clone()))
        .item(
            "investment",
            AttributeValue::N(record.investment.to_string()),
        )
        .item(
            "ticket_price",
            AttributeValue::N(record.ticket_price.to_string()),
        )
        .send()
        .await
        .map_err(|e| format!("DynamoDB put_item error: {}", e))?;

    Ok(())
}
