// Copyright Kamu Data, Inc. and contributors. All rights reserved.
//
// Use of this software is governed by the Business Source License
// included in the LICENSE file.
//
// As of the Change Date specified in that file, in accordance with
// the Business Source License, use of this software will be governed
// by the Apache License, Version 2.0.

use internal_error::InternalError;
use stash_accounts::AccountID;
use thiserror::Error;

use crate::{Webhook, WebhookID};

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

/// Persistent store of webhook records. Each operation touches a single
/// record and is atomic with respect to concurrent requests.
#[async_trait::async_trait]
pub trait WebhookRepository: Send + Sync {
    async fn create_webhook(&self, webhook: &Webhook) -> Result<(), CreateWebhookError>;

    async fn get_webhook_by_id(&self, webhook_id: WebhookID) -> Result<Webhook, GetWebhookError>;

    async fn list_webhooks_by_account(
        &self,
        account_id: AccountID,
    ) -> Result<Vec<Webhook>, ListAccountWebhooksError>;

    async fn update_webhook(&self, webhook: &Webhook) -> Result<(), UpdateWebhookError>;

    async fn delete_webhook(&self, webhook_id: WebhookID) -> Result<(), DeleteWebhookError>;
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
// Errors
////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

#[derive(Error, Debug)]
#[error("Webhook not found by ID: '{webhook_id}'")]
pub struct WebhookNotFoundError {
    pub webhook_id: WebhookID,
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

#[derive(Error, Debug)]
pub enum CreateWebhookError {
    #[error(transparent)]
    Duplicate(CreateWebhookErrorDuplicate),

    #[error(transparent)]
    Internal(#[from] InternalError),
}

#[derive(Error, Debug)]
#[error("Webhook not created, duplicate ID: '{webhook_id}'")]
pub struct CreateWebhookErrorDuplicate {
    pub webhook_id: WebhookID,
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

#[derive(Error, Debug)]
pub enum GetWebhookError {
    #[error(transparent)]
    NotFound(WebhookNotFoundError),

    #[error(transparent)]
    Internal(#[from] InternalError),
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

#[derive(Error, Debug)]
pub enum ListAccountWebhooksError {
    #[error(transparent)]
    Internal(#[from] InternalError),
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

#[derive(Error, Debug)]
pub enum UpdateWebhookError {
    #[error(transparent)]
    NotFound(WebhookNotFoundError),

    #[error(transparent)]
    Internal(#[from] InternalError),
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

#[derive(Error, Debug)]
pub enum DeleteWebhookError {
    #[error(transparent)]
    NotFound(WebhookNotFoundError),

    #[error(transparent)]
    Internal(#[from] InternalError),
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
