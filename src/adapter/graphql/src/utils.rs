// Copyright Kamu Data, Inc. and contributors. All rights reserved.
//
// Use of this software is governed by the Business Source License
// included in the LICENSE file.
//
// As of the Change Date specified in that file, in accordance with
// the Business Source License, use of this software will be governed
// by the Apache License, Version 2.0.

use std::sync::Arc;

use async_graphql::Context;

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

pub(crate) fn from_catalog<T>(ctx: &Context<'_>) -> Result<Arc<T>, dill::InjectionError>
where
    T: ?Sized + Send + Sync + 'static,
{
    let cat = ctx.data::<dill::Catalog>().unwrap();
    cat.get_one::<T>()
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

/// Resolves one or more components from the request catalog, panicking on
/// wiring mistakes which are a server bug, not a request error
macro_rules! from_catalog_n {
    ($ctx:expr, $T:ty) => {{ $crate::utils::from_catalog::<$T>($ctx).unwrap() }};
    ($ctx:expr, $($Ts:ty),+) => {{
        ( $( $crate::utils::from_catalog::<$Ts>($ctx).unwrap() ),+ )
    }};
}

pub(crate) use from_catalog_n;
