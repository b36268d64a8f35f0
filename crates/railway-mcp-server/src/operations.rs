//! The fixed set of GraphQL operations sent to Railway

pub mod mutations;
pub mod queries;

use crate::client::RailwayClient;
use crate::errors::RailwayError;
use crate::graphql::{self, JsonObject, Variables};
use serde::de::DeserializeOwned;
use tracing::{Instrument, debug_span};

/// Whether an operation reads or changes remote state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OperationKind {
    Query,
    Mutation,
}

/// A named GraphQL document
#[derive(Debug, PartialEq, Eq)]
pub struct Operation {
    pub name: &'static str,
    pub kind: OperationKind,
    pub document: &'static str,
}

impl Operation {
    const fn query(name: &'static str, document: &'static str) -> Self {
        Self {
            name,
            kind: OperationKind::Query,
            document,
        }
    }

    const fn mutation(name: &'static str, document: &'static str) -> Self {
        Self {
            name,
            kind: OperationKind::Mutation,
            document,
        }
    }

    /// Execute the operation, returning the raw `data` object
    pub async fn execute(
        &self,
        client: &RailwayClient,
        variables: Variables,
    ) -> Result<JsonObject, RailwayError> {
        client
            .execute(self.document, Some(&variables))
            .instrument(debug_span!("railway_operation", operation = self.name))
            .await
    }

    /// Execute the operation and decode its `data` into `T`
    pub async fn fetch<T: DeserializeOwned>(
        &self,
        client: &RailwayClient,
        variables: Variables,
    ) -> Result<T, RailwayError> {
        graphql::decode(self.execute(client, variables).await?)
    }
}

/// Every operation in the catalog
pub fn all() -> impl Iterator<Item = &'static Operation> {
    queries::ALL.into_iter().chain(mutations::ALL)
}
