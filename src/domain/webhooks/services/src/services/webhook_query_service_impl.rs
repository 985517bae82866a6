// Copyright Kamu Data, Inc. and contributors. All rights reserved.
//
// Use of this software is governed by the Business Source License
// included in the LICENSE file.
//
// As of the Change Date specified in that file, in accordance with
// the Business Source License, use of this software will be governed
// by the Apache License, Version 2.0.

use std::sync::Arc;

use dill::{component, interface};
use stash_accounts::CurrentAccountSubject;
use stash_webhooks::*;

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

#[component(pub)]
#[interface(dyn WebhookQueryService)]
pub struct WebhookQueryServiceImpl {
    webhook_repository: Arc<dyn WebhookRepository>,
    current_account_subject: Arc<CurrentAccountSubject>,
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

#[async_trait::async_trait]
impl WebhookQueryService for WebhookQueryServiceImpl {
    #[tracing::instrument(level = "debug", skip_all, fields(%webhook_id))]
    async fn find_webhook(
        &self,
        webhook_id: WebhookID,
    ) -> Result<Option<Webhook>, FindWebhookError> {
        let account_id = self.current_account_subject.account_id();

        match self.webhook_repository.get_webhook_by_id(webhook_id).await {
            // A record owned by another account is indistinguishable from an
            // absent one
            Ok(webhook) if webhook.is_owned_by(account_id) => Ok(Some(webhook)),
            Ok(_) => Ok(None),
            Err(GetWebhookError::NotFound(_)) => Ok(None),
            Err(GetWebhookError::Internal(e)) => Err(FindWebhookError::Internal(e)),
        }
    }

    #[tracing::instrument(level = "debug", skip_all)]
    async fn list_webhooks(&self) -> Result<Vec<Webhook>, ListWebhooksError> {
        let account_id = self.current_account_subject.account_id();

        let mut webhooks = self
            .webhook_repository
            .list_webhooks_by_account(account_id)
            .await
            .map_err(|e| match e {
                ListAccountWebhooksError::Internal(e) => ListWebhooksError::Internal(e),
            })?;

        webhooks.sort_by_key(|w| w.created_at);
        Ok(webhooks)
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
