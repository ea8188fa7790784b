//! Typed dispatch of queries to the external query service.
//!
//! A query is encoded into a [`QueryRequest`] envelope, sent through a
//! [`QueryTransport`] and the [`QueryReply`] envelope is decoded into the
//! query's output type.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use thiserror::Error;

use crate::queries::Query;

#[cfg(any(test, feature = "test-mocks"))]
pub mod mock;
pub mod zmq_transport;

pub use zmq_transport::ZmqTransport;

/// Failures of a single query round trip.
#[derive(Debug, Error)]
pub enum ClientError {
    #[error("query service did not answer in time")]
    Timeout,

    #[error("not found: {0}")]
    NotFound(String),

    #[error("query rejected: {0}")]
    Rejected(String),

    #[error("query service error: {0}")]
    Backend(String),

    #[error("transport error: {0}")]
    Transport(String),

    #[error("malformed payload: {0}")]
    Decode(#[from] serde_json::Error),
}

pub type ClientResult<T> = Result<T, ClientError>;

/// Request envelope sent to the query service.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct QueryRequest {
    /// Wire name of the query.
    pub query: String,
    #[serde(default)]
    pub params: Value,
}

impl QueryRequest {
    pub fn encode<Q: Query>(query: &Q) -> ClientResult<Self> {
        Ok(Self {
            query: Q::NAME.to_string(),
            params: serde_json::to_value(query)?,
        })
    }
}

/// Failure category reported by the query service.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum ErrorKind {
    NotFound,
    Validation,
    Timeout,
    #[serde(other)]
    Internal,
}

/// Reply envelope returned by the query service.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum QueryReply {
    Ok {
        #[serde(default)]
        data: Value,
    },
    Error {
        kind: ErrorKind,
        #[serde(default)]
        message: String,
    },
}

impl QueryReply {
    /// Decodes a successful reply or converts a reported failure.
    pub fn into_result<T: DeserializeOwned>(self) -> ClientResult<T> {
        match self {
            QueryReply::Ok { data } => Ok(serde_json::from_value(data)?),
            QueryReply::Error { kind, message } => Err(match kind {
                ErrorKind::NotFound => ClientError::NotFound(message),
                ErrorKind::Validation => ClientError::Rejected(message),
                ErrorKind::Timeout => ClientError::Timeout,
                ErrorKind::Internal => ClientError::Backend(message),
            }),
        }
    }
}

/// One request/response exchange with the query service.
pub trait QueryTransport: Send + Sync {
    fn round_trip(&self, request: &QueryRequest) -> ClientResult<QueryReply>;
}

/// Sends `query` and waits for its typed result.
pub fn dispatch<Q, T>(transport: &T, query: &Q) -> ClientResult<Q::Output>
where
    Q: Query,
    T: QueryTransport + ?Sized,
{
    let request = QueryRequest::encode(query)?;
    log::debug!("Dispatching query {}", request.query);

    transport.round_trip(&request)?.into_result()
}
