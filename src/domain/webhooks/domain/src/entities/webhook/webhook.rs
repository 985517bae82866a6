// Copyright Kamu Data, Inc. and contributors. All rights reserved.
//
// Use of this software is governed by the Business Source License
// included in the LICENSE file.
//
// As of the Change Date specified in that file, in accordance with
// the Business Source License, use of this software will be governed
// by the Apache License, Version 2.0.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use stash_accounts::AccountID;

use crate::{WebhookEventType, WebhookID};

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

/// A subscription describing where and for which event kinds a user wants
/// notifications delivered.
///
/// Identity (`id`) and ownership (`account_id`) are fixed at creation.
/// An empty `event_types` set is valid: the subscription stays registered
/// but matches no events.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Webhook {
    pub id: WebhookID,
    pub account_id: AccountID,
    pub target_url: url::Url,
    pub event_types: Vec<WebhookEventType>,
    pub enabled: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Webhook {
    pub fn new(
        id: WebhookID,
        account_id: AccountID,
        target_url: url::Url,
        event_types: Vec<WebhookEventType>,
        enabled: bool,
        now: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            account_id,
            target_url,
            event_types,
            enabled,
            created_at: now,
            updated_at: now,
        }
    }

    /// Full replacement of the mutable fields, not a merge
    pub fn modify(
        &mut self,
        target_url: url::Url,
        event_types: Vec<WebhookEventType>,
        enabled: bool,
        now: DateTime<Utc>,
    ) {
        self.target_url = target_url;
        self.event_types = event_types;
        self.enabled = enabled;
        self.updated_at = now;
    }

    pub fn is_owned_by(&self, account_id: AccountID) -> bool {
        self.account_id == account_id
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
