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
#[interface(dyn RemoveWebhookUseCase)]
pub struct RemoveWebhookUseCaseImpl {
    webhook_repository: Arc<dyn WebhookRepository>,
    current_account_subject: Arc<CurrentAccountSubject>,
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

#[async_trait::async_trait]
impl RemoveWebhookUseCase for RemoveWebhookUseCaseImpl {
    #[tracing::instrument(
        level = "info",
        name = "RemoveWebhookUseCaseImpl::execute",
        skip_all,
        fields(%webhook_id),
    )]
    async fn execute(&self, webhook_id: WebhookID) -> Result<Webhook, RemoveWebhookError> {
        let webhook = match self.webhook_repository.get_webhook_by_id(webhook_id).await {
            Ok(webhook) => Ok(webhook),
            Err(GetWebhookError::NotFound(e)) => Err(RemoveWebhookError::NotFound(e)),
            Err(GetWebhookError::Internal(e)) => Err(RemoveWebhookError::Internal(e)),
        }?;

        if !webhook.is_owned_by(self.current_account_subject.account_id()) {
            return Err(RemoveWebhookError::NotFound(WebhookNotFoundError {
                webhook_id,
            }));
        }

        self.webhook_repository
            .delete_webhook(webhook_id)
            .await
            .map_err(|e| match e {
                DeleteWebhookError::NotFound(e) => RemoveWebhookError::NotFound(e),
                DeleteWebhookError::Internal(e) => RemoveWebhookError::Internal(e),
            })?;

        tracing::info!(webhook_id = %webhook.id, "Removed webhook");
        Ok(webhook)
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
