// Copyright Kamu Data, Inc. and contributors. All rights reserved.
//
// Use of this software is governed by the Business Source License
// included in the LICENSE file.
//
// As of the Change Date specified in that file, in accordance with
// the Business Source License, use of this software will be governed
// by the Apache License, Version 2.0.

use async_graphql::Enum;
use internal_error::InternalError;
use stash_webhooks::WebhookEventTypeCatalog;

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

/// Event kinds a webhook subscription can react to. The closed enum rejects
/// unknown types at the API boundary; the domain catalog stays the source of
/// truth for the actual identifiers.
#[derive(Enum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum WebhookEventType {
    PageCreated,
    PageUpdated,
    PageDeleted,
    HighlightCreated,
    HighlightUpdated,
    HighlightDeleted,
    LabelCreated,
    LabelDeleted,
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

impl From<WebhookEventType> for stash_webhooks::WebhookEventType {
    fn from(value: WebhookEventType) -> Self {
        match value {
            WebhookEventType::PageCreated => WebhookEventTypeCatalog::page_created(),
            WebhookEventType::PageUpdated => WebhookEventTypeCatalog::page_updated(),
            WebhookEventType::PageDeleted => WebhookEventTypeCatalog::page_deleted(),
            WebhookEventType::HighlightCreated => WebhookEventTypeCatalog::highlight_created(),
            WebhookEventType::HighlightUpdated => WebhookEventTypeCatalog::highlight_updated(),
            WebhookEventType::HighlightDeleted => WebhookEventTypeCatalog::highlight_deleted(),
            WebhookEventType::LabelCreated => WebhookEventTypeCatalog::label_created(),
            WebhookEventType::LabelDeleted => WebhookEventTypeCatalog::label_deleted(),
        }
    }
}

impl TryFrom<&stash_webhooks::WebhookEventType> for WebhookEventType {
    type Error = InternalError;

    fn try_from(value: &stash_webhooks::WebhookEventType) -> Result<Self, Self::Error> {
        match value.as_ref() {
            WebhookEventTypeCatalog::PAGE_CREATED => Ok(Self::PageCreated),
            WebhookEventTypeCatalog::PAGE_UPDATED => Ok(Self::PageUpdated),
            WebhookEventTypeCatalog::PAGE_DELETED => Ok(Self::PageDeleted),
            WebhookEventTypeCatalog::HIGHLIGHT_CREATED => Ok(Self::HighlightCreated),
            WebhookEventTypeCatalog::HIGHLIGHT_UPDATED => Ok(Self::HighlightUpdated),
            WebhookEventTypeCatalog::HIGHLIGHT_DELETED => Ok(Self::HighlightDeleted),
            WebhookEventTypeCatalog::LABEL_CREATED => Ok(Self::LabelCreated),
            WebhookEventTypeCatalog::LABEL_DELETED => Ok(Self::LabelDeleted),
            unknown => InternalError::bail(format!("Unknown webhook event type '{unknown}'")),
        }
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
