//! Mock transport for isolating services in tests.

use mockall::mock;

use crate::client::{ClientResult, QueryReply, QueryRequest, QueryTransport};

mock! {
    pub QueryTransport {}

    impl QueryTransport for QueryTransport {
        fn round_trip(&self, request: &QueryRequest) -> ClientResult<QueryReply>;
    }
}
