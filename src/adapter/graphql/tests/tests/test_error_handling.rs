// Copyright Kamu Data, Inc. and contributors. All rights reserved.
//
// Use of this software is governed by the Business Source License
// included in the LICENSE file.
//
// As of the Change Date specified in that file, in accordance with
// the Business Source License, use of this software will be governed
// by the Apache License, Version 2.0.

use async_graphql::value;
use indoc::indoc;
use internal_error::ErrorIntoInternal;
use pretty_assertions::assert_eq;
use stash_accounts::CurrentAccountSubject;
use thiserror::Error;

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

#[test_log::test(tokio::test)]
async fn test_malformed_argument() {
    let catalog = dill::CatalogBuilder::new()
        .add_value(CurrentAccountSubject::new_test())
        .build();

    let schema = stash_adapter_graphql::schema_quiet();
    let res = schema
        .execute(
            async_graphql::Request::new(indoc!(
                r#"
                {
                    webhook (id: "????") {
                        id
                    }
                }
                "#
            ))
            .data(catalog),
        )
        .await;

    let mut json_resp = serde_json::to_value(res).unwrap();

    // Ignore error locations
    json_resp["errors"][0]["locations"] = serde_json::Value::Array(Vec::new());

    assert_eq!(
        json_resp,
        serde_json::json!({
            "errors":[{
                "locations": [],
                "message": "Failed to parse \"WebhookID\": Value '????' is not a valid WebhookID",
                "path": ["webhook"],
            }],
            "data": {
                "webhook": null,
            }
        })
    );
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

#[test_log::test(tokio::test)]
async fn test_internal_error() {
    // NOTE: Service chosen to have the shortest DI catalog.
    #[dill::component]
    #[dill::interface(dyn stash_webhooks::WebhookQueryService)]
    struct DummyWebhookQueryService;

    #[async_trait::async_trait]
    impl stash_webhooks::WebhookQueryService for DummyWebhookQueryService {
        async fn find_webhook(
            &self,
            _webhook_id: stash_webhooks::WebhookID,
        ) -> Result<Option<stash_webhooks::Webhook>, stash_webhooks::FindWebhookError> {
            #[derive(Debug, Error)]
            #[error("I'm a dummy error that should not propagate through")]
            struct DummyError;

            Err(DummyError.int_err().into())
        }

        async fn list_webhooks(
            &self,
        ) -> Result<Vec<stash_webhooks::Webhook>, stash_webhooks::ListWebhooksError> {
            unimplemented!()
        }
    }

    let catalog = dill::CatalogBuilder::new()
        .add::<DummyWebhookQueryService>()
        .add_value(CurrentAccountSubject::new_test())
        .build();

    let schema = stash_adapter_graphql::schema_quiet();
    let res = schema
        .execute(
            async_graphql::Request::new(indoc!(
                r#"
                query ($id: WebhookID!) {
                    webhook (id: $id) {
                        id
                    }
                }
                "#
            ))
            .variables(async_graphql::Variables::from_json(serde_json::json!({
                "id": uuid::Uuid::new_v4().to_string(),
            })))
            .data(catalog),
        )
        .await;

    let mut json_resp = serde_json::to_value(res).unwrap();

    // Ignore error locations
    json_resp["errors"][0]["locations"] = serde_json::Value::Array(Vec::new());

    assert_eq!(
        json_resp,
        serde_json::json!({
            "errors":[{
                "locations": [],
                "message": "Internal error",
                "path": ["webhook"],
            }],
            "data": {
                "webhook": null,
            }
        })
    );
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

#[test_log::test(tokio::test)]
async fn test_api_version() {
    let schema = stash_adapter_graphql::schema_quiet();
    let res = schema.execute("{ apiVersion }").await;

    assert!(res.is_ok(), "{res:?}");
    assert_eq!(res.data, value!({ "apiVersion": "0.1" }));
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
