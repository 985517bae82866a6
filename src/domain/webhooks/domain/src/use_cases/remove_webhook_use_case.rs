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

use crate::{Webhook, WebhookID, WebhookNotFoundError};

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

/// Deletes a webhook owned by the current caller, returning the last state
/// of the removed record.
#[async_trait::async_trait]
pub trait RemoveWebhookUseCase: Send + Sync {
    async fn execute(&self, webhook_id: WebhookID) -> Result<Webhook, RemoveWebhookError>;
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

#[derive(Debug, Error)]
pub enum RemoveWebhookError {
    #[error(transparent)]
    NotFound(#[from] WebhookNotFoundError),

    #[error(transparent)]
    Internal(#[from] InternalError),
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
