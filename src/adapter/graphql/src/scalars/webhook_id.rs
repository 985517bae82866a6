// Copyright Kamu Data, Inc. and contributors. All rights reserved.
//
// Use of this software is governed by the Business Source License
// included in the LICENSE file.
//
// As of the Change Date specified in that file, in accordance with
// the Business Source License, use of this software will be governed
// by the Apache License, Version 2.0.

use async_graphql::{InputValueError, InputValueResult, Scalar, ScalarType, Value};

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WebhookID(stash_webhooks::WebhookID);

impl From<stash_webhooks::WebhookID> for WebhookID {
    fn from(value: stash_webhooks::WebhookID) -> Self {
        WebhookID(value)
    }
}

impl From<WebhookID> for stash_webhooks::WebhookID {
    fn from(val: WebhookID) -> Self {
        val.0
    }
}

impl std::fmt::Display for WebhookID {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[Scalar]
impl ScalarType for WebhookID {
    fn parse(value: Value) -> InputValueResult<Self> {
        if let Value::String(s) = &value {
            match s.parse() {
                Ok(id) => Ok(Self(id)),
                Err(_) => Err(InputValueError::custom(format!(
                    "Value '{s}' is not a valid WebhookID"
                ))),
            }
        } else {
            Err(InputValueError::expected_type(value))
        }
    }

    fn to_value(&self) -> Value {
        Value::String(self.0.to_string())
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
