// Copyright Kamu Data, Inc. and contributors. All rights reserved.
//
// Use of this software is governed by the Business Source License
// included in the LICENSE file.
//
// As of the Change Date specified in that file, in accordance with
// the Business Source License, use of this software will be governed
// by the Apache License, Version 2.0.

use std::sync::Arc;

use chrono::{TimeZone, Utc};
use dill::CatalogBuilder;
use stash_accounts::{AccountID, DEFAULT_ACCOUNT_ID};
use stash_webhooks::*;
use stash_webhooks_services::SetWebhookUseCaseImpl;

use super::WebhookUseCaseHarness;

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

#[test_log::test(tokio::test)]
async fn test_create_webhook_success() {
    let harness = SetWebhookUseCaseHarness::new();

    let target_url = url::Url::parse("https://example.com/webhook").unwrap();
    let event_types = vec![WebhookEventTypeCatalog::highlight_created()];

    let res = harness
        .use_case
        .execute(None, target_url.clone(), event_types.clone(), true)
        .await;
    assert!(res.is_ok(), "Failed to create webhook: {res:?}");

    let webhook = res.unwrap();
    assert_eq!(webhook.account_id, *DEFAULT_ACCOUNT_ID);
    assert_eq!(webhook.target_url, target_url);
    assert_eq!(webhook.event_types, event_types);
    assert!(webhook.enabled);
    assert_eq!(webhook.created_at, WebhookUseCaseHarness::initial_time());
    assert_eq!(webhook.updated_at, webhook.created_at);

    // Round-trip: a subsequent read returns exactly the persisted record
    let stored = harness.base_harness.find_webhook(webhook.id).await;
    assert_eq!(stored, Some(webhook));
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

#[test_log::test(tokio::test)]
async fn test_created_webhooks_get_distinct_ids() {
    let harness = SetWebhookUseCaseHarness::new();

    let webhook_1 = harness
        .use_case
        .execute(
            None,
            url::Url::parse("https://example.com/webhook").unwrap(),
            vec![WebhookEventTypeCatalog::page_created()],
            true,
        )
        .await
        .unwrap();

    let webhook_2 = harness
        .use_case
        .execute(
            None,
            url::Url::parse("https://example.com/webhook").unwrap(),
            vec![WebhookEventTypeCatalog::page_created()],
            true,
        )
        .await
        .unwrap();

    assert_ne!(webhook_1.id, webhook_2.id);
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

#[test_log::test(tokio::test)]
async fn test_invalid_target_url_rejected() {
    let harness = SetWebhookUseCaseHarness::new();

    let invalid_urls = vec![
        "ftp://example.com/webhook",
        "mailto:owner@example.com",
        "data:text/plain,webhook",
    ];

    for invalid_url in invalid_urls {
        let res = harness
            .use_case
            .execute(
                None,
                url::Url::parse(invalid_url).unwrap(),
                vec![WebhookEventTypeCatalog::page_created()],
                true,
            )
            .await;

        assert!(
            matches!(res, Err(SetWebhookError::InvalidTargetUrl(_))),
            "URL '{invalid_url}' unexpectedly accepted: {res:?}",
        );
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

#[test_log::test(tokio::test)]
async fn test_update_replaces_all_mutable_fields() {
    let harness = SetWebhookUseCaseHarness::new();
    let existing = harness.base_harness.create_webhook().await;

    let updated_time = Utc.with_ymd_and_hms(2050, 1, 2, 12, 0, 0).unwrap();
    harness.base_harness.set_time(updated_time);

    let res = harness
        .use_case
        .execute(
            Some(existing.id),
            url::Url::parse("https://example.com/webhook_2").unwrap(),
            vec![WebhookEventTypeCatalog::page_created()],
            false,
        )
        .await;
    assert!(res.is_ok(), "Failed to update webhook: {res:?}");

    let webhook = res.unwrap();
    assert_eq!(webhook.id, existing.id);
    assert_eq!(webhook.account_id, existing.account_id);
    assert_eq!(
        webhook.target_url.as_str(),
        "https://example.com/webhook_2"
    );
    assert_eq!(
        webhook.event_types,
        vec![WebhookEventTypeCatalog::page_created()]
    );
    assert!(!webhook.enabled);
    assert_eq!(webhook.created_at, existing.created_at);
    assert_eq!(webhook.updated_at, updated_time);

    let stored = harness.base_harness.find_webhook(webhook.id).await;
    assert_eq!(stored, Some(webhook));
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

#[test_log::test(tokio::test)]
async fn test_update_unknown_webhook_not_found() {
    let harness = SetWebhookUseCaseHarness::new();

    let unknown_id = WebhookID::new_generated();
    let res = harness
        .use_case
        .execute(
            Some(unknown_id),
            url::Url::parse("https://example.com/webhook").unwrap(),
            vec![WebhookEventTypeCatalog::page_created()],
            true,
        )
        .await;

    assert!(matches!(
        res,
        Err(SetWebhookError::NotFound(e)) if e.webhook_id == unknown_id
    ));
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

#[test_log::test(tokio::test)]
async fn test_update_foreign_webhook_not_found() {
    let harness = SetWebhookUseCaseHarness::new();

    let foreign_webhook = harness
        .base_harness
        .create_webhook_for(AccountID::new_generated())
        .await;

    let res = harness
        .use_case
        .execute(
            Some(foreign_webhook.id),
            url::Url::parse("https://example.com/hijacked").unwrap(),
            vec![],
            false,
        )
        .await;

    assert!(matches!(
        res,
        Err(SetWebhookError::NotFound(e)) if e.webhook_id == foreign_webhook.id
    ));

    // The foreign record must remain untouched
    let stored = harness
        .base_harness
        .get_webhook_unscoped(foreign_webhook.id)
        .await;
    assert_eq!(stored, foreign_webhook);
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

#[test_log::test(tokio::test)]
async fn test_event_types_deduplicated() {
    let harness = SetWebhookUseCaseHarness::new();

    let webhook = harness
        .use_case
        .execute(
            None,
            url::Url::parse("https://example.com/webhook").unwrap(),
            vec![
                WebhookEventTypeCatalog::page_created(),
                WebhookEventTypeCatalog::highlight_created(),
                WebhookEventTypeCatalog::page_created(),
            ],
            true,
        )
        .await
        .unwrap();

    assert_eq!(
        webhook.event_types,
        vec![
            WebhookEventTypeCatalog::page_created(),
            WebhookEventTypeCatalog::highlight_created(),
        ]
    );
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

#[test_log::test(tokio::test)]
async fn test_empty_event_types_stored_as_is() {
    let harness = SetWebhookUseCaseHarness::new();
    let existing = harness.base_harness.create_webhook().await;

    // An empty set is a valid full replacement: the webhook stays enabled
    // but matches no events
    let res = harness
        .use_case
        .execute(
            Some(existing.id),
            existing.target_url.clone(),
            vec![],
            true,
        )
        .await;
    assert!(res.is_ok(), "Failed to update webhook: {res:?}");

    let webhook = res.unwrap();
    assert!(webhook.event_types.is_empty());
    assert!(webhook.enabled);
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

#[test_log::test(tokio::test)]
async fn test_update_is_idempotent() {
    let harness = SetWebhookUseCaseHarness::new();
    let existing = harness.base_harness.create_webhook().await;

    let target_url = url::Url::parse("https://example.com/webhook_2").unwrap();
    let event_types = vec![WebhookEventTypeCatalog::label_created()];

    let first = harness
        .use_case
        .execute(Some(existing.id), target_url.clone(), event_types.clone(), false)
        .await
        .unwrap();
    let second = harness
        .use_case
        .execute(Some(existing.id), target_url, event_types, false)
        .await
        .unwrap();

    assert_eq!(first, second);
    assert_eq!(
        harness.base_harness.find_webhook(existing.id).await,
        Some(second)
    );
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

struct SetWebhookUseCaseHarness {
    base_harness: WebhookUseCaseHarness,
    use_case: Arc<dyn SetWebhookUseCase>,
}

impl SetWebhookUseCaseHarness {
    fn new() -> Self {
        let base_harness = WebhookUseCaseHarness::new();

        let mut b = CatalogBuilder::new_chained(base_harness.catalog());
        b.add::<SetWebhookUseCaseImpl>();

        let catalog = b.build();

        Self {
            base_harness,
            use_case: catalog.get_one().unwrap(),
        }
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
