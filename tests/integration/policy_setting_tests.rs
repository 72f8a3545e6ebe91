//! Policy setting reconciliation against a mock workspace.

use serde_json::json;
use turbot_provider::reconcile::{PolicySettingReconciler, ResourceData};
use turbot_provider::{ErrorKind, Reconciler};

use crate::common::TestWorkspace;

const POLICY_TYPE: &str = "tmod:@turbot/aws#/policy/types/regionStackSource";
const RESOURCE: &str = "tmod:@turbot/turbot#/";

fn configured(value: &str) -> ResourceData {
    ResourceData::new()
        .with("policy_type", POLICY_TYPE)
        .with("resource", RESOURCE)
        .with("value", value)
        .with("precedence", "must")
}

async fn no_existing_setting(ws: &TestWorkspace) {
    ws.respond_once("FindPolicySetting", json!({"policySettings": {"items": []}}))
        .await;
}

#[tokio::test]
async fn test_create_falls_back_to_value_source() {
    let ws = TestWorkspace::start().await;
    no_existing_setting(&ws).await;
    ws.fail_once(
        "CreatePolicySetting",
        "Data validation failed. Specified data does not match the policy type schema",
    )
    .await;
    ws.respond_once(
        "CreatePolicySetting",
        json!({"policySetting": {
            "value": "Skip",
            "valueSource": "'Skip'",
            "precedence": "MUST",
            "turbot": {"id": "185437591183428"}
        }}),
    )
    .await;

    let mut data = configured("'Skip'");
    PolicySettingReconciler::new()
        .create(&ws.client, &mut data)
        .await
        .unwrap();

    assert_eq!(data.id(), Some("185437591183428"));
    assert_eq!(data.get_str("value").unwrap(), "Skip");
    assert_eq!(data.get_str("value_source").unwrap(), "'Skip'");
    assert!(data.get_bool("value_source_used").unwrap());

    let bodies = ws.request_bodies().await;
    assert_eq!(bodies.len(), 3);
    let filter = bodies[0]["variables"]["filter"][0].as_str().unwrap();
    assert!(filter.contains(POLICY_TYPE));
    assert_eq!(bodies[1]["variables"]["input"]["value"], "'Skip'");
    assert_eq!(bodies[1]["variables"]["input"]["precedence"], "must");
    assert_eq!(bodies[2]["variables"]["input"]["valueSource"], "'Skip'");
    assert_eq!(bodies[2]["variables"]["input"]["type"], POLICY_TYPE);
}

#[tokio::test]
async fn test_existing_setting_is_not_duplicated() {
    let ws = TestWorkspace::start().await;
    ws.respond_once(
        "FindPolicySetting",
        json!({"policySettings": {"items": [
            {"value": "Check: Approved", "turbot": {"id": "178"}}
        ]}}),
    )
    .await;

    let mut data = configured("Skip");
    let err = PolicySettingReconciler::new()
        .create(&ws.client, &mut data)
        .await
        .unwrap_err();

    assert_eq!(err.kind(), ErrorKind::Conflict);
    assert!(err.to_string().contains("import"));
    assert_eq!(ws.request_bodies().await.len(), 1);
    assert_eq!(data.id(), None);
}

#[tokio::test]
async fn test_read_of_deleted_setting_clears_id() {
    let ws = TestWorkspace::start().await;
    ws.fail_once("query PolicySetting(", "Not Found").await;

    let mut data = configured("Skip");
    data.set_id("178");
    PolicySettingReconciler::new()
        .read(&ws.client, &mut data)
        .await
        .unwrap();
    assert_eq!(data.id(), None);
}

#[tokio::test]
async fn test_update_then_suppress_unchanged_value() {
    let ws = TestWorkspace::start().await;
    ws.respond_once(
        "UpdatePolicySetting",
        json!({"policySetting": {
            "value": ["us-east-1", "eu-west-2"],
            "valueSource": "- us-east-1\n- eu-west-2\n",
            "turbot": {"id": "178"}
        }}),
    )
    .await;

    let reconciler = PolicySettingReconciler::new();
    let mut data = configured(r#"["us-east-1","eu-west-2"]"#);
    data.set_id("178");
    reconciler.update(&ws.client, &mut data).await.unwrap();

    let stored = data.get_str("value").unwrap().to_string();
    assert_eq!(stored, r#"["us-east-1","eu-west-2"]"#);
    assert!(reconciler.suppress_diff("value", &stored, r#"["us-east-1","eu-west-2"]"#, &data));
    assert_eq!(ws.request_bodies().await[0]["variables"]["input"]["id"], "178");
}
