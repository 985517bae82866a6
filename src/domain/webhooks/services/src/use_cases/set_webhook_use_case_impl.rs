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
use internal_error::ErrorIntoInternal;
use stash_accounts::CurrentAccountSubject;
use stash_webhooks::*;
use time_source::SystemTimeSource;

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

#[component(pub)]
#[interface(dyn SetWebhookUseCase)]
pub struct SetWebhookUseCaseImpl {
    webhook_repository: Arc<dyn WebhookRepository>,
    time_source: Arc<dyn SystemTimeSource>,
    current_account_subject: Arc<CurrentAccountSubject>,
}

impl SetWebhookUseCaseImpl {
    async fn create_webhook(
        &self,
        target_url: url::Url,
        event_types: Vec<WebhookEventType>,
        enabled: bool,
    ) -> Result<Webhook, SetWebhookError> {
        let webhook = Webhook::new(
            WebhookID::new_generated(),
            self.current_account_subject.account_id(),
            target_url,
            event_types,
            enabled,
            self.time_source.now(),
        );

        self.webhook_repository
            .create_webhook(&webhook)
            .await
            .map_err(|e| match e {
                // Freshly generated UUID colliding with an existing record is
                // not a caller-facing condition
                CreateWebhookError::Duplicate(e) => SetWebhookError::Internal(e.int_err()),
                CreateWebhookError::Internal(e) => SetWebhookError::Internal(e),
            })?;

        tracing::info!(webhook_id = %webhook.id, "Created webhook");
        Ok(webhook)
    }

    async fn update_webhook(
        &self,
        webhook_id: WebhookID,
        target_url: url::Url,
        event_types: Vec<WebhookEventType>,
        enabled: bool,
    ) -> Result<Webhook, SetWebhookError> {
        let mut webhook = match self.webhook_repository.get_webhook_by_id(webhook_id).await {
            Ok(webhook) => Ok(webhook),
            Err(GetWebhookError::NotFound(e)) => Err(SetWebhookError::NotFound(e)),
            Err(GetWebhookError::Internal(e)) => Err(SetWebhookError::Internal(e)),
        }?;

        if !webhook.is_owned_by(self.current_account_subject.account_id()) {
            return Err(SetWebhookError::NotFound(WebhookNotFoundError {
                webhook_id,
            }));
        }

        webhook.modify(target_url, event_types, enabled, self.time_source.now());

        self.webhook_repository
            .update_webhook(&webhook)
            .await
            .map_err(|e| match e {
                UpdateWebhookError::NotFound(e) => SetWebhookError::NotFound(e),
                UpdateWebhookError::Internal(e) => SetWebhookError::Internal(e),
            })?;

        tracing::info!(webhook_id = %webhook.id, "Updated webhook");
        Ok(webhook)
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

#[async_trait::async_trait]
impl SetWebhookUseCase for SetWebhookUseCaseImpl {
    #[tracing::instrument(
        level = "info",
        name = "SetWebhookUseCaseImpl::execute",
        skip_all,
        fields(?maybe_webhook_id, %target_url, ?event_types, %enabled),
    )]
    async fn execute(
        &self,
        maybe_webhook_id: Option<WebhookID>,
        target_url: url::Url,
        mut event_types: Vec<WebhookEventType>,
        enabled: bool,
    ) -> Result<Webhook, SetWebhookError> {
        use super::helpers::*;

        validate_webhook_target_url(&target_url)?;
        deduplicate_event_types(&mut event_types);

        match maybe_webhook_id {
            None => self.create_webhook(target_url, event_types, enabled).await,
            Some(webhook_id) => {
                self.update_webhook(webhook_id, target_url, event_types, enabled)
                    .await
            }
        }
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
