// Copyright Kamu Data, Inc. and contributors. All rights reserved.
//
// Use of this software is governed by the Business Source License
// included in the LICENSE file.
//
// As of the Change Date specified in that file, in accordance with
// the Business Source License, use of this software will be governed
// by the Apache License, Version 2.0.

use crate::prelude::*;
use crate::queries::*;

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

pub(crate) struct WebhooksMut;

impl WebhooksMut {
    pub(crate) async fn set_webhook(
        ctx: &Context<'_>,
        input: SetWebhookInput,
    ) -> Result<SetWebhookResult> {
        let set_webhook_use_case = from_catalog_n!(ctx, dyn stash_webhooks::SetWebhookUseCase);

        // An empty identifier is how clients request creation, same as
        // omitting the field
        let maybe_webhook_id = match input.id.as_deref() {
            None | Some("") => None,
            Some(s) => match s.parse::<stash_webhooks::WebhookID>() {
                Ok(webhook_id) => Some(webhook_id),
                Err(_) => {
                    return Ok(SetWebhookResult::Error(SetWebhookError {
                        error_codes: vec![WebhookErrorCode::BadRequest],
                    }));
                }
            },
        };

        let Ok(target_url) = url::Url::parse(&input.url) else {
            return Ok(SetWebhookResult::Error(SetWebhookError {
                error_codes: vec![WebhookErrorCode::BadRequest],
            }));
        };

        let event_types = input.event_types.into_iter().map(Into::into).collect();

        match set_webhook_use_case
            .execute(maybe_webhook_id, target_url, event_types, input.enabled)
            .await
        {
            Ok(webhook) => Ok(SetWebhookResult::Success(SetWebhookSuccess {
                webhook: Webhook::new(webhook),
            })),

            Err(stash_webhooks::SetWebhookError::NotFound(_)) => {
                Ok(SetWebhookResult::Error(SetWebhookError {
                    error_codes: vec![WebhookErrorCode::NotFound],
                }))
            }

            Err(stash_webhooks::SetWebhookError::InvalidTargetUrl(_)) => {
                Ok(SetWebhookResult::Error(SetWebhookError {
                    error_codes: vec![WebhookErrorCode::BadRequest],
                }))
            }

            Err(stash_webhooks::SetWebhookError::Internal(e)) => Err(GqlError::Internal(e)),
        }
    }

    pub(crate) async fn delete_webhook(
        ctx: &Context<'_>,
        webhook_id: WebhookID,
    ) -> Result<DeleteWebhookResult> {
        let remove_webhook_use_case = from_catalog_n!(ctx, dyn stash_webhooks::RemoveWebhookUseCase);

        match remove_webhook_use_case.execute(webhook_id.into()).await {
            Ok(webhook) => Ok(DeleteWebhookResult::Success(DeleteWebhookSuccess {
                webhook: Webhook::new(webhook),
            })),

            Err(stash_webhooks::RemoveWebhookError::NotFound(_)) => {
                Ok(DeleteWebhookResult::Error(DeleteWebhookError {
                    error_codes: vec![WebhookErrorCode::NotFound],
                }))
            }

            Err(stash_webhooks::RemoveWebhookError::Internal(e)) => Err(GqlError::Internal(e)),
        }
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

#[derive(InputObject, Debug)]
pub struct SetWebhookInput {
    /// Identifier of the webhook to update; empty or omitted to create a
    /// new one
    pub id: Option<String>,
    pub url: String,
    pub event_types: Vec<WebhookEventType>,
    pub enabled: bool,
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

/// Expected failures render as error codes the client can act upon, never as
/// transport-level errors
#[derive(Enum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum WebhookErrorCode {
    NotFound,
    BadRequest,
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

#[derive(Interface, Debug)]
#[graphql(field(name = "message", ty = "String"))]
pub enum SetWebhookResult {
    Success(SetWebhookSuccess),
    Error(SetWebhookError),
}

#[derive(SimpleObject, Debug)]
#[graphql(complex)]
pub struct SetWebhookSuccess {
    pub webhook: Webhook,
}

#[ComplexObject]
impl SetWebhookSuccess {
    async fn message(&self) -> String {
        "Success".to_string()
    }
}

#[derive(SimpleObject, Debug)]
#[graphql(complex)]
pub struct SetWebhookError {
    pub error_codes: Vec<WebhookErrorCode>,
}

#[ComplexObject]
impl SetWebhookError {
    async fn message(&self) -> String {
        "Failed to set webhook".to_string()
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

#[derive(Interface, Debug)]
#[graphql(field(name = "message", ty = "String"))]
pub enum DeleteWebhookResult {
    Success(DeleteWebhookSuccess),
    Error(DeleteWebhookError),
}

#[derive(SimpleObject, Debug)]
#[graphql(complex)]
pub struct DeleteWebhookSuccess {
    /// Last state of the removed webhook
    pub webhook: Webhook,
}

#[ComplexObject]
impl DeleteWebhookSuccess {
    async fn message(&self) -> String {
        "Success".to_string()
    }
}

#[derive(SimpleObject, Debug)]
#[graphql(complex)]
pub struct DeleteWebhookError {
    pub error_codes: Vec<WebhookErrorCode>,
}

#[ComplexObject]
impl DeleteWebhookError {
    async fn message(&self) -> String {
        "Failed to delete webhook".to_string()
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
