// Copyright Kamu Data, Inc. and contributors. All rights reserved.
//
// Use of this software is governed by the Business Source License
// included in the LICENSE file.
//
// As of the Change Date specified in that file, in accordance with
// the Business Source License, use of this software will be governed
// by the Apache License, Version 2.0.

use std::sync::LazyLock;

use nutype::nutype;
use serde::{Deserialize, Serialize};

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

/// Unique identifier of an account, assigned at registration
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct AccountID(uuid::Uuid);

impl AccountID {
    pub fn new(id: uuid::Uuid) -> Self {
        Self(id)
    }

    pub fn new_generated() -> Self {
        Self(uuid::Uuid::new_v4())
    }

    pub fn as_uuid(&self) -> &uuid::Uuid {
        &self.0
    }
}

impl std::fmt::Display for AccountID {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl std::str::FromStr for AccountID {
    type Err = uuid::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self(uuid::Uuid::parse_str(s)?))
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

#[nutype(
    sanitize(trim),
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
pub struct AccountName(String);

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

pub static DEFAULT_ACCOUNT_ID: LazyLock<AccountID> = LazyLock::new(|| {
    AccountID::new(uuid::Uuid::from_u128(0x736f_6d65_6465_6661_756c_7461_6363_7431))
});

pub static DEFAULT_ACCOUNT_NAME: LazyLock<AccountName> =
    LazyLock::new(|| AccountName::try_new("stash").unwrap());

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
