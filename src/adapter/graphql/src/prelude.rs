// Copyright Kamu Data, Inc. and contributors. All rights reserved.
//
// Use of this software is governed by the Business Source License
// included in the LICENSE file.
//
// As of the Change Date specified in that file, in accordance with
// the Business Source License, use of this software will be governed
// by the Apache License, Version 2.0.

pub(crate) use async_graphql::{
    ComplexObject,
    Context,
    Enum,
    InputObject,
    Interface,
    Object,
    SimpleObject,
};
pub(crate) use internal_error::*;

pub(crate) use crate::guards::*;
pub(crate) use crate::scalars::*;
pub(crate) use crate::utils::from_catalog_n;

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

pub(crate) type Result<T, E = GqlError> = std::result::Result<T, E>;

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

/// Errors that resolvers surface as GraphQL errors instead of result data.
/// Internal errors render as a bare "Internal error" message; the source
/// chain is preserved for the logging extension only.
#[derive(Debug, thiserror::Error)]
pub enum GqlError {
    #[error(transparent)]
    Internal(#[from] InternalError),

    #[error("{0:?}")]
    Gql(async_graphql::Error),
}

impl From<async_graphql::Error> for GqlError {
    fn from(value: async_graphql::Error) -> Self {
        Self::Gql(value)
    }
}

impl From<GqlError> for async_graphql::Error {
    fn from(val: GqlError) -> Self {
        match val {
            GqlError::Internal(e) => async_graphql::Error::new_with_source(e),
            GqlError::Gql(e) => e,
        }
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
