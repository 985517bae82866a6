// Copyright Kamu Data, Inc. and contributors. All rights reserved.
//
// Use of this software is governed by the Business Source License
// included in the LICENSE file.
//
// As of the Change Date specified in that file, in accordance with
// the Business Source License, use of this software will be governed
// by the Apache License, Version 2.0.

use nutype::nutype;

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

#[nutype(
    sanitize(trim, uppercase),
    validate(not_empty),
    derive(
        Debug,
        Display,
        AsRef,
        Clone,
        Ord,
        PartialOrd,
        Eq,
        PartialEq,
        Hash,
        Serialize,
        Deserialize
    )
)]
pub struct WebhookEventType(String);

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

/// Known event types that may trigger a webhook delivery
pub struct WebhookEventTypeCatalog;

impl WebhookEventTypeCatalog {
    pub const PAGE_CREATED: &'static str = "PAGE.CREATED";
    pub const PAGE_UPDATED: &'static str = "PAGE.UPDATED";
    pub const PAGE_DELETED: &'static str = "PAGE.DELETED";
    pub const HIGHLIGHT_CREATED: &'static str = "HIGHLIGHT.CREATED";
    pub const HIGHLIGHT_UPDATED: &'static str = "HIGHLIGHT.UPDATED";
    pub const HIGHLIGHT_DELETED: &'static str = "HIGHLIGHT.DELETED";
    pub const LABEL_CREATED: &'static str = "LABEL.CREATED";
    pub const LABEL_DELETED: &'static str = "LABEL.DELETED";

    pub fn page_created() -> WebhookEventType {
        WebhookEventType::try_new(Self::PAGE_CREATED).unwrap()
    }

    pub fn page_updated() -> WebhookEventType {
        WebhookEventType::try_new(Self::PAGE_UPDATED).unwrap()
    }

    pub fn page_deleted() -> WebhookEventType {
        WebhookEventType::try_new(Self::PAGE_DELETED).unwrap()
    }

    pub fn highlight_created() -> WebhookEventType {
        WebhookEventType::try_new(Self::HIGHLIGHT_CREATED).unwrap()
    }

    pub fn highlight_updated() -> WebhookEventType {
        WebhookEventType::try_new(Self::HIGHLIGHT_UPDATED).unwrap()
    }

    pub fn highlight_deleted() -> WebhookEventType {
        WebhookEventType::try_new(Self::HIGHLIGHT_DELETED).unwrap()
    }

    pub fn label_created() -> WebhookEventType {
        WebhookEventType::try_new(Self::LABEL_CREATED).unwrap()
    }

    pub fn label_deleted() -> WebhookEventType {
        WebhookEventType::try_new(Self::LABEL_DELETED).unwrap()
    }

    pub fn all() -> Vec<WebhookEventType> {
        vec![
            Self::page_created(),
            Self::page_updated(),
            Self::page_deleted(),
            Self::highlight_created(),
            Self::highlight_updated(),
            Self::highlight_deleted(),
            Self::label_created(),
            Self::label_deleted(),
        ]
    }

    pub fn is_valid_type(event_type: &WebhookEventType) -> bool {
        matches!(
            event_type.as_ref(),
            Self::PAGE_CREATED
                | Self::PAGE_UPDATED
                | Self::PAGE_DELETED
                | Self::HIGHLIGHT_CREATED
                | Self::HIGHLIGHT_UPDATED
                | Self::HIGHLIGHT_DELETED
                | Self::LABEL_CREATED
                | Self::LABEL_DELETED
        )
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
