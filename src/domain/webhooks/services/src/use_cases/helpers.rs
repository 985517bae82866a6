// Copyright Kamu Data, Inc. and contributors. All rights reserved.
//
// Use of this software is governed by the Business Source License
// included in the LICENSE file.
//
// As of the Change Date specified in that file, in accordance with
// the Business Source License, use of this software will be governed
// by the Apache License, Version 2.0.

use std::collections::HashSet;

use stash_webhooks::{WebhookEventType, WebhookInvalidTargetUrlError};

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

/// The endpoint must be reachable over plain HTTP(S) and name a concrete
/// host. Everything else about the URL is the subscriber's business.
pub(crate) fn validate_webhook_target_url(
    target_url: &url::Url,
) -> Result<(), WebhookInvalidTargetUrlError> {
    let scheme_ok = matches!(target_url.scheme(), "http" | "https");
    if !scheme_ok || target_url.host().is_none() {
        return Err(WebhookInvalidTargetUrlError {
            url: target_url.clone(),
        });
    }

    Ok(())
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

/// Collapses repeated event types preserving the first occurrence
pub(crate) fn deduplicate_event_types(event_types: &mut Vec<WebhookEventType>) {
    let mut seen = HashSet::new();
    event_types.retain(|event_type| seen.insert(event_type.clone()));
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
