// Copyright Kamu Data, Inc. and contributors. All rights reserved.
//
// Use of this software is governed by the Business Source License
// included in the LICENSE file.
//
// As of the Change Date specified in that file, in accordance with
// the Business Source License, use of this software will be governed
// by the Apache License, Version 2.0.

use internal_error::InternalError;
use thiserror::Error;

use crate::{Webhook, WebhookID};

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

/// Read access to the caller's webhooks. Records owned by other accounts are
/// never observable through this service.
#[async_trait::async_trait]
pub trait WebhookQueryService: Send + Sync {
    async fn find_webhook(
        &self,
        webhook_id: WebhookID,
    ) -> Result<Option<Webhook>, FindWebhookError>;

    /// Caller's webhooks ordered by creation time
    async fn list_webhooks(&self) -> Result<Vec<Webhook>, ListWebhooksError>;
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

#[derive(Error, Debug)]
pub enum FindWebhookError {
    #[error(transparent)]
    Internal(#[from] InternalError),
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

#[derive(Error, Debug)]
pub enum ListWebhooksError {
    #[error(transparent)]
    Internal(#[from] InternalError),
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
