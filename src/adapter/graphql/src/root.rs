// Copyright Kamu Data, Inc. and contributors. All rights reserved.
//
// Use of this software is governed by the Business Source License
// included in the LICENSE file.
//
// As of the Change Date specified in that file, in accordance with
// the Business Source License, use of this software will be governed
// by the Apache License, Version 2.0.

use async_graphql::EmptySubscription;

use crate::extensions::*;
use crate::mutations::*;
use crate::prelude::*;
use crate::queries::*;

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
// Query
////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

pub struct Query;

#[Object]
impl Query {
    /// Returns the version of the GQL API
    async fn api_version(&self) -> String {
        "0.1".to_string()
    }

    /// Returns a webhook by ID, if it exists and is registered by the
    /// current caller
    #[graphql(guard = "LoggedInGuard::new()")]
    async fn webhook(&self, ctx: &Context<'_>, id: WebhookID) -> Result<Option<Webhook>> {
        Webhooks::by_id(ctx, id).await
    }

    /// Returns all webhooks registered by the current caller
    #[graphql(guard = "LoggedInGuard::new()")]
    async fn webhooks(&self, ctx: &Context<'_>) -> Result<Vec<Webhook>> {
        Webhooks::all(ctx).await
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
// Mutation
////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

pub struct Mutation;

#[Object]
impl Mutation {
    /// Creates a new webhook when no identifier is supplied, or fully
    /// replaces the mutable fields of an existing one
    #[graphql(guard = "LoggedInGuard::new()")]
    async fn set_webhook(
        &self,
        ctx: &Context<'_>,
        input: SetWebhookInput,
    ) -> Result<SetWebhookResult> {
        WebhooksMut::set_webhook(ctx, input).await
    }

    /// Deletes a webhook registered by the current caller
    #[graphql(guard = "LoggedInGuard::new()")]
    async fn delete_webhook(
        &self,
        ctx: &Context<'_>,
        id: WebhookID,
    ) -> Result<DeleteWebhookResult> {
        WebhooksMut::delete_webhook(ctx, id).await
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

pub type Schema = async_graphql::Schema<Query, Mutation, EmptySubscription>;
pub type SchemaBuilder = async_graphql::SchemaBuilder<Query, Mutation, EmptySubscription>;

/// Returns schema builder without any extensions
pub fn schema_builder() -> SchemaBuilder {
    Schema::build(Query, Mutation, EmptySubscription)
}

/// Returns schema preconfigured with default extensions
pub fn schema() -> Schema {
    schema_builder().extension(Tracing).finish()
}

/// Returns schema without tracing extensions, useful for tests
pub fn schema_quiet() -> Schema {
    schema_builder().finish()
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
