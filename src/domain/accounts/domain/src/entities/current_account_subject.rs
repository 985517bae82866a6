// Copyright Kamu Data, Inc. and contributors. All rights reserved.
//
// Use of this software is governed by the Business Source License
// included in the LICENSE file.
//
// As of the Change Date specified in that file, in accordance with
// the Business Source License, use of this software will be governed
// by the Apache License, Version 2.0.

use crate::{AccountID, AccountName, DEFAULT_ACCOUNT_ID, DEFAULT_ACCOUNT_NAME};

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

/// Identity of the caller on whose behalf the current request executes.
/// Resolved from the bearer token upstream and injected into the per-request
/// catalog rather than held as ambient state.
#[derive(Debug)]
pub enum CurrentAccountSubject {
    Logged(LoggedAccount),
    Anonymous(AnonymousAccountReason),
}

#[derive(Debug, Clone)]
pub struct LoggedAccount {
    pub account_id: AccountID,
    pub account_name: AccountName,
}

#[derive(Debug)]
pub enum AnonymousAccountReason {
    NoAuthenticationProvided,
    AuthenticationInvalid,
    AuthenticationExpired,
}

impl CurrentAccountSubject {
    pub fn anonymous(reason: AnonymousAccountReason) -> Self {
        Self::Anonymous(reason)
    }

    pub fn logged(account_id: AccountID, account_name: AccountName) -> Self {
        Self::Logged(LoggedAccount {
            account_id,
            account_name,
        })
    }

    pub fn new_test() -> Self {
        Self::logged(*DEFAULT_ACCOUNT_ID, DEFAULT_ACCOUNT_NAME.clone())
    }

    /// Caller's account ID. Panics for anonymous subjects, which guards must
    /// reject before any domain logic runs.
    pub fn account_id(&self) -> AccountID {
        match self {
            Self::Logged(l) => l.account_id,
            Self::Anonymous(_) => {
                panic!("Anonymous account misses identity")
            }
        }
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
