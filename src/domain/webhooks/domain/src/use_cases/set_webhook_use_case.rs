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

use crate::{Webhook, WebhookEventType, WebhookID, WebhookNotFoundError};

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

/// Creates a new webhook when no identifier is supplied, or fully replaces
/// the mutable fields of an existing one owned by the current caller.
#[async_trait::async_trait]
pub trait SetWebhookUseCase: Send + Sync {
    async fn execute(
        &self,
        maybe_webhook_id: Option<WebhookID>,
        target_url: url::Url,
        event_types: Vec<WebhookEventType>,
        enabled: bool,
    ) -> Result<Webhook, SetWebhookError>;
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

#[derive(Debug, Error)]
pub enum SetWebhookError {
    // Deliberately covers both an unknown ID and an ID owned by another
    // account, so callers cannot probe for foreign records
    #[error(transparent)]
    NotFound(#[from] WebhookNotFoundError),

    #[error(transparent)]
    InvalidTargetUrl(#[from] WebhookInvalidTargetUrlError),

    #[error(transparent)]
    Internal(#[from] InternalError),
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

#[derive(Debug, Error)]
#[error("Webhook target URL '{url}' is invalid")]
pub struct WebhookInvalidTargetUrlError {
    pub url: url::Url,
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
