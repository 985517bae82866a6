// Copyright Kamu Data, Inc. and contributors. All rights reserved.
//
// Use of this software is governed by the Business Source License
// included in the LICENSE file.
//
// As of the Change Date specified in that file, in accordance with
// the Business Source License, use of this software will be governed
// by the Apache License, Version 2.0.

use std::collections::HashMap;
use std::sync::Arc;

use dill::{Singleton, component, interface, scope};
use stash_accounts::AccountID;
use stash_webhooks::*;
use tokio::sync::RwLock;

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

#[derive(Default)]
struct State {
    webhooks_by_id: HashMap<WebhookID, Webhook>,
    webhook_ids_by_account: HashMap<AccountID, Vec<WebhookID>>,
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

pub struct InMemoryWebhookRepository {
    state: Arc<RwLock<State>>,
}

#[component(pub)]
#[interface(dyn WebhookRepository)]
#[scope(Singleton)]
impl InMemoryWebhookRepository {
    pub fn new() -> Self {
        Self {
            state: Default::default(),
        }
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

#[async_trait::async_trait]
impl WebhookRepository for InMemoryWebhookRepository {
    async fn create_webhook(&self, webhook: &Webhook) -> Result<(), CreateWebhookError> {
        let mut writable_state = self.state.write().await;

        if writable_state.webhooks_by_id.contains_key(&webhook.id) {
            return Err(CreateWebhookError::Duplicate(CreateWebhookErrorDuplicate {
                webhook_id: webhook.id,
            }));
        }

        writable_state
            .webhooks_by_id
            .insert(webhook.id, webhook.clone());
        writable_state
            .webhook_ids_by_account
            .entry(webhook.account_id)
            .or_default()
            .push(webhook.id);

        Ok(())
    }

    async fn get_webhook_by_id(
        &self,
        webhook_id: WebhookID,
    ) -> Result<Webhook, GetWebhookError> {
        let readable_state = self.state.read().await;

        readable_state
            .webhooks_by_id
            .get(&webhook_id)
            .cloned()
            .ok_or(GetWebhookError::NotFound(WebhookNotFoundError {
                webhook_id,
            }))
    }

    async fn list_webhooks_by_account(
        &self,
        account_id: AccountID,
    ) -> Result<Vec<Webhook>, ListAccountWebhooksError> {
        let readable_state = self.state.read().await;

        let Some(webhook_ids) = readable_state.webhook_ids_by_account.get(&account_id) else {
            return Ok(vec![]);
        };

        let webhooks = webhook_ids
            .iter()
            .filter_map(|id| readable_state.webhooks_by_id.get(id).cloned())
            .collect();

        Ok(webhooks)
    }

    async fn update_webhook(&self, webhook: &Webhook) -> Result<(), UpdateWebhookError> {
        let mut writable_state = self.state.write().await;

        let Some(existing) = writable_state.webhooks_by_id.get_mut(&webhook.id) else {
            return Err(UpdateWebhookError::NotFound(WebhookNotFoundError {
                webhook_id: webhook.id,
            }));
        };

        *existing = webhook.clone();
        Ok(())
    }

    async fn delete_webhook(&self, webhook_id: WebhookID) -> Result<(), DeleteWebhookError> {
        let mut writable_state = self.state.write().await;

        let Some(webhook) = writable_state.webhooks_by_id.remove(&webhook_id) else {
            return Err(DeleteWebhookError::NotFound(WebhookNotFoundError {
                webhook_id,
            }));
        };

        if let Some(account_webhook_ids) = writable_state
            .webhook_ids_by_account
            .get_mut(&webhook.account_id)
        {
            account_webhook_ids.retain(|id| *id != webhook_id);
        }

        Ok(())
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
