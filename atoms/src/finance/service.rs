use aws_sdk_dynamodb::types::AttributeValue;
use aws_sdk_dynamodb::Client as DynamoClient;

use super::model::{FinanceRecord, MemberCost};

/// Load the finance record for a project (pure domain row, no defaults).
/// Callers fall back to [`FinanceRecord::default_for`] when `None`.
pub async fn load_for_project(
    client: &DynamoClient,
    table_name: &str,
    project_id: &str,
) -> Result<Option<FinanceRecord>, String> {
    let pk = format!("PROJECT#{}", project_id);

    let result = client
        .get_item()
        .table_name(table_name)
        .key("PK", AttributeValue::S(pk))
        .key("SK", AttributeValue::S("FINANCE".to_string()))
        .send()
        .await
        .map_err(|e| format!("DynamoDB get_item error: {}", e))?;

    let Some(item) = result.item() else {
        return Ok(None);
    };

    let member_costs: Vec<MemberCost> = item
        .get("member_costs")
        .and_then(|v| v.as_s().ok())
        .and_then(|s| serde_json::from_str(s).ok())
        .unwrap_or_default();

    Ok(Some(FinanceRecord {
        finance_id: item
            .get("finance_id")
            .and_then(|v| v.as_s().ok())
            .map(|s| s.to_string())
            .unwrap_or_default(),
        project_id: project_id.to_string(),
        sale_value: item
            .get("sale_value")
            .and_then(|v| v.as_n().ok())
            .and_then(|n| n.parse().ok())
            .unwrap_or(0.0),
        contract_duration: item
            .get("contract_duration")
            .and_then(|v| v.as_n().ok())
            .and_then(|n| n.parse().ok())
            .unwrap_or(0),
        member_costs,
    }))
}

/// Upsert the finance record for a project. The record key is the project,
/// so repeated saves replace the previous row.
pub async fn save(
    client: &DynamoClient,
    table_name: &str,
    record: &FinanceRecord,
) -> Result<FinanceRecord, String> {
    let mut stored = record.clone();
    if stored.finance_id.is_empty() {
        stored.finance_id = uuid::Uuid::new_v4().to_string();
    }

    let member_costs = serde_json::to_string(&stored.member_costs)
        .map_err(|e| format!("serialize member_costs error: {}", e))?;

    client
        .put_item()
        .table_name(table_name)
        .item(
            "PK",
            AttributeValue::S(format!("PROJECT#{}", stored.project_id)),
        )
        .item("SK", AttributeValue::S("FINANCE".to_string()))
        .item("finance_id", AttributeValue::S(stored.finance_id.clone()))
        .item(
            "sale_value",
            AttributeValue::N(stored.sale_value.to_string()),
        )
        .item(
            "contract_duration",
            AttributeValue::N(stored.contract_duration.to_string()),
        )
        .item("member_costs", AttributeValue::S(member_costs))
        .send()
        .await
        .map_err(|e| format!("DynamoDB put_item error: {}", e))?;

    Ok(stored)
}
