// Copyright Kamu Data, Inc. and contributors. All rights reserved.
//
// Use of this software is governed by the Business Source License
// included in the LICENSE file.
//
// As of the Change Date specified in that file, in accordance with
// the Business Source License, use of this software will be governed
// by the Apache License, Version 2.0.

use std::sync::Arc;

use chrono::{DateTime, TimeZone, Utc};
use dill::{Catalog, CatalogBuilder};
use stash_accounts::{AccountID, CurrentAccountSubject, DEFAULT_ACCOUNT_ID};
use stash_webhooks::*;
use stash_webhooks_inmem::InMemoryWebhookRepository;
use stash_webhooks_services::WebhookQueryServiceImpl;
use time_source::{SystemTimeSource, SystemTimeSourceStub};

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

pub(crate) struct WebhookUseCaseHarness {
    catalog: Catalog,
    webhook_repository: Arc<dyn WebhookRepository>,
    query_service: Arc<dyn WebhookQueryService>,
    time_source_stub: Arc<SystemTimeSourceStub>,
}

impl WebhookUseCaseHarness {
    pub(crate) fn new() -> Self {
        let mut b = CatalogBuilder::new();
        b.add::<InMemoryWebhookRepository>();
        b.add::<WebhookQueryServiceImpl>();
        b.add_value(SystemTimeSourceStub::new_set(Self::initial_time()));
        b.bind::<dyn SystemTimeSource, SystemTimeSourceStub>();
        b.add_value(CurrentAccountSubject::new_test());

        let catalog = b.build();

        Self {
            webhook_repository: catalog.get_one().unwrap(),
            query_service: catalog.get_one().unwrap(),
            time_source_stub: catalog.get_one().unwrap(),
            catalog,
        }
    }

    pub(crate) fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub(crate) fn initial_time() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2050, 1, 1, 12, 0, 0).unwrap()
    }

    pub(crate) fn set_time(&self, t: DateTime<Utc>) {
        self.time_source_stub.set(t);
    }

    pub(crate) async fn create_webhook_for(&self, account_id: AccountID) -> Webhook {
        let webhook = Webhook::new(
            WebhookID::new_generated(),
            account_id,
            url::Url::parse("https://example.com/webhook").unwrap(),
            vec![WebhookEventTypeCatalog::page_created()],
            true,
            Self::initial_time(),
        );

        self.webhook_repository
            .create_webhook(&webhook)
            .await
            .unwrap();
        webhook
    }

    pub(crate) async fn create_webhook(&self) -> Webhook {
        self.create_webhook_for(*DEFAULT_ACCOUNT_ID).await
    }

    pub(crate) async fn find_webhook(&self, webhook_id: WebhookID) -> Option<Webhook> {
        self.query_service.find_webhook(webhook_id).await.unwrap()
    }

    pub(crate) async fn get_webhook_unscoped(&self, webhook_id: WebhookID) -> Webhook {
        self.webhook_repository
            .get_webhook_by_id(webhook_id)
            .await
            .unwrap()
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
