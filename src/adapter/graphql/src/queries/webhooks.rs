// Copyright Kamu Data, Inc. and contributors. All rights reserved.
//
// Use of this software is governed by the Business Source License
// included in the LICENSE file.
//
// As of the Change Date specified in that file, in accordance with
// the Business Source License, use of this software will be governed
// by the Apache License, Version 2.0.

use chrono::{DateTime, Utc};

use crate::prelude::*;

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

#[derive(Debug)]
pub struct Webhook {
    webhook: stash_webhooks::Webhook,
}

#[Object]
impl Webhook {
    #[graphql(skip)]
    pub fn new(webhook: stash_webhooks::Webhook) -> Self {
        Self { webhook }
    }

    /// System-assigned unique identifier
    async fn id(&self) -> WebhookID {
        self.webhook.id.into()
    }

    /// Destination endpoint that receives event notifications
    async fn url(&self) -> String {
        self.webhook.target_url.to_string()
    }

    /// Event kinds this webhook reacts to. May be empty, in which case the
    /// webhook matches no events
    async fn event_types(&self) -> Result<Vec<WebhookEventType>> {
        self.webhook
            .event_types
            .iter()
            .map(|event_type| WebhookEventType::try_from(event_type).map_err(GqlError::Internal))
            .collect()
    }

    async fn enabled(&self) -> bool {
        self.webhook.enabled
    }

    async fn created_at(&self) -> DateTime<Utc> {
        self.webhook.created_at
    }

    async fn updated_at(&self) -> DateTime<Utc> {
        self.webhook.updated_at
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

pub(crate) struct Webhooks;

impl Webhooks {
    pub(crate) async fn by_id(
        ctx: &Context<'_>,
        webhook_id: WebhookID,
    ) -> Result<Option<Webhook>> {
        let webhook_query_service = from_catalog_n!(ctx, dyn stash_webhooks::WebhookQueryService);

        match webhook_query_service.find_webhook(webhook_id.into()).await {
            Ok(maybe_webhook) => Ok(maybe_webhook.map(Webhook::new)),
            Err(stash_webhooks::FindWebhookError::Internal(e)) => Err(GqlError::Internal(e)),
        }
    }

    pub(crate) async fn all(ctx: &Context<'_>) -> Result<Vec<Webhook>> {
        let webhook_query_service = from_catalog_n!(ctx, dyn stash_webhooks::WebhookQueryService);

        match webhook_query_service.list_webhooks().await {
            Ok(webhooks) => Ok(webhooks.into_iter().map(Webhook::new).collect()),
            Err(stash_webhooks::ListWebhooksError::Internal(e)) => Err(GqlError::Internal(e)),
        }
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
