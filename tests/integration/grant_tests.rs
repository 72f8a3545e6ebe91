//! Grant and grant activation reconciliation against a mock workspace.

use serde_json::json;
use turbot_provider::reconcile::{GrantActivationReconciler, GrantReconciler, ResourceData};
use turbot_provider::{Reconciler, ResourceKind};

use crate::common::TestWorkspace;

const FOLDER_AKA: &str = "tmod:@turbot/turbot#/folder/finance";

fn akas() -> serde_json::Value {
    json!({"resource": {"turbot": {"id": "14", "akas": [FOLDER_AKA, "arn:aws:::folder/14"]}}})
}

#[tokio::test]
async fn test_grant_create_read_delete() {
    let ws = TestWorkspace::start().await;
    ws.respond_once(
        "CreateGrant",
        json!({"grant": {"turbot": {"id": "99", "profileId": "13", "resourceId": "14"}}}),
    )
    .await;
    ws.respond_once("ResourceAkas", akas()).await;

    let mut data = ResourceData::new()
        .with("resource", FOLDER_AKA)
        .with("profile_id", "13")
        .with("permission_type", "turbot")
        .with("permission_level", "owner");
    GrantReconciler.create(&ws.client, &mut data).await.unwrap();
    assert_eq!(data.id(), Some("99"));

    ws.respond_once(
        "query Grant(",
        json!({"grant": {
            "permissionTypeId": "11",
            "permissionLevelId": "12",
            "turbot": {"id": "99", "profileId": "13", "resourceId": "14"}
        }}),
    )
    .await;
    ws.respond_once("ResourceAkas", akas()).await;
    GrantReconciler.read(&ws.client, &mut data).await.unwrap();

    // state holds the id, configuration the aka
    assert_eq!(data.get_str("resource").unwrap(), "14");
    assert!(GrantReconciler.suppress_diff("resource", "14", FOLDER_AKA, &data));
    assert!(!GrantReconciler.suppress_diff("resource", "14", "tmod:@turbot/turbot#/", &data));

    ws.respond_once("DeleteGrant", json!({"grant": {"turbot": {"id": "99"}}}))
        .await;
    GrantReconciler.delete(&ws.client, &mut data).await.unwrap();
    assert_eq!(data.id(), None);

    let bodies = ws.request_bodies().await;
    assert_eq!(bodies[0]["variables"]["input"]["permissionLevelAka"], "owner");
    assert_eq!(bodies[3]["variables"]["id"], "14");
}

#[tokio::test]
async fn test_grant_exists_is_false_after_removal() {
    let ws = TestWorkspace::start().await;
    ws.respond_once("query Grant(", json!({"grant": null})).await;

    let data = ResourceData::with_id("99");
    let reconciler = ResourceKind::Grant.reconciler();
    assert!(!reconciler.exists(&ws.client, &data).await.unwrap());
}

#[tokio::test]
async fn test_activation_suppresses_aka() {
    let ws = TestWorkspace::start().await;
    ws.respond_once(
        "ActivateGrant",
        json!({"activeGrant": {"turbot": {"id": "5", "grantId": "99", "resourceId": "14"}}}),
    )
    .await;
    ws.respond_once("ResourceAkas", akas()).await;

    let mut data = ResourceData::new()
        .with("grant", "99")
        .with("resource", FOLDER_AKA);
    GrantActivationReconciler.create(&ws.client, &mut data).await.unwrap();

    assert_eq!(data.id(), Some("5"));
    assert!(GrantActivationReconciler.suppress_diff("resource", "14", FOLDER_AKA, &data));
}
