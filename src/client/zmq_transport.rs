//! Query transport over a ZeroMQ REQ socket carrying JSON envelopes.

use std::time::Duration;

use crate::client::{ClientError, ClientResult, QueryReply, QueryRequest, QueryTransport};

/// Connects to the query service's REP endpoint.
///
/// A REQ socket whose reply never arrived is stuck in the "awaiting reply"
/// state, so every round trip uses a fresh socket from the shared context.
#[derive(Clone)]
pub struct ZmqTransport {
    context: zmq::Context,
    endpoint: String,
    timeout: Duration,
}

impl ZmqTransport {
    pub fn new(endpoint: impl Into<String>, timeout: Duration) -> Self {
        Self::with_context(zmq::Context::new(), endpoint, timeout)
    }

    pub fn with_context(
        context: zmq::Context,
        endpoint: impl Into<String>,
        timeout: Duration,
    ) -> Self {
        Self {
            context,
            endpoint: endpoint.into(),
            timeout,
        }
    }

    fn connect(&self) -> ClientResult<zmq::Socket> {
        let timeout_ms = socket_timeout_ms(self.timeout);

        let socket = self.context.socket(zmq::REQ).map_err(socket_error)?;
        socket.set_linger(0).map_err(socket_error)?;
        socket.set_sndtimeo(timeout_ms).map_err(socket_error)?;
        socket.set_rcvtimeo(timeout_ms).map_err(socket_error)?;
        socket.connect(&self.endpoint).map_err(socket_error)?;

        Ok(socket)
    }
}

impl QueryTransport for ZmqTransport {
    fn round_trip(&self, request: &QueryRequest) -> ClientResult<QueryReply> {
        let payload = serde_json::to_vec(request)?;
        let socket = self.connect()?;

        socket.send(payload, 0).map_err(socket_error)?;
        let reply = socket.recv_bytes(0).map_err(socket_error)?;

        Ok(serde_json::from_slice(&reply)?)
    }
}

/// ZeroMQ reads `0` as "never block" and `-1` as "block forever"; a zero
/// timeout is configured as waiting forever.
fn socket_timeout_ms(timeout: Duration) -> i32 {
    if timeout.is_zero() {
        -1
    } else {
        i32::try_from(timeout.as_millis()).unwrap_or(i32::MAX)
    }
}

fn socket_error(err: zmq::Error) -> ClientError {
    match err {
        zmq::Error::EAGAIN => ClientError::Timeout,
        other => ClientError::Transport(other.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    fn tools_request() -> QueryRequest {
        QueryRequest {
            query: "tools.list".to_string(),
            params: json!({"page": 1}),
        }
    }

    #[test]
    fn round_trip_against_rep_peer() {
        let context = zmq::Context::new();
        let responder = context.socket(zmq::REP).unwrap();
        responder.bind("inproc://query-bus-round-trip").unwrap();

        let peer = std::thread::spawn(move || {
            let raw = responder.recv_bytes(0).unwrap();
            let request: QueryRequest = serde_json::from_slice(&raw).unwrap();
            let reply = QueryReply::Ok {
                data: json!({"query": request.query, "params": request.params}),
            };
            responder.send(serde_json::to_vec(&reply).unwrap(), 0).unwrap();
        });

        let transport = ZmqTransport::with_context(
            context,
            "inproc://query-bus-round-trip",
            Duration::from_secs(5),
        );
        let reply = transport.round_trip(&tools_request()).unwrap();
        peer.join().unwrap();

        assert_eq!(
            reply,
            QueryReply::Ok {
                data: json!({"query": "tools.list", "params": {"page": 1}}),
            }
        );
    }

    #[test]
    fn zero_timeout_waits_for_reply() {
        assert_eq!(socket_timeout_ms(Duration::ZERO), -1);
        assert_eq!(socket_timeout_ms(Duration::from_millis(250)), 250);

        let context = zmq::Context::new();
        let responder = context.socket(zmq::REP).unwrap();
        responder.bind("inproc://query-bus-zero-timeout").unwrap();

        let peer = std::thread::spawn(move || {
            responder.recv_bytes(0).unwrap();
            std::thread::sleep(Duration::from_millis(20));
            let reply = QueryReply::Ok { data: json!([]) };
            responder.send(serde_json::to_vec(&reply).unwrap(), 0).unwrap();
        });

        let transport =
            ZmqTransport::with_context(context, "inproc://query-bus-zero-timeout", Duration::ZERO);
        let reply = transport.round_trip(&tools_request()).unwrap();
        peer.join().unwrap();

        assert_eq!(reply, QueryReply::Ok { data: json!([]) });
    }

    #[test]
    fn silent_peer_times_out() {
        let context = zmq::Context::new();
        let responder = context.socket(zmq::REP).unwrap();
        responder.bind("inproc://query-bus-silent").unwrap();

        let transport = ZmqTransport::with_context(
            context,
            "inproc://query-bus-silent",
            Duration::from_millis(50),
        );
        let result = transport.round_trip(&tools_request());

        assert!(matches!(result, Err(ClientError::Timeout)));
        drop(responder);
    }

    #[test]
    fn garbage_reply_is_a_decode_error() {
        let context = zmq::Context::new();
        let responder = context.socket(zmq::REP).unwrap();
        responder.bind("inproc://query-bus-garbage").unwrap();

        let peer = std::thread::spawn(move || {
            responder.recv_bytes(0).unwrap();
            responder.send("not json", 0).unwrap();
        });

        let transport = ZmqTransport::with_context(
            context,
            "inproc://query-bus-garbage",
            Duration::from_secs(5),
        );
        let result = transport.round_trip(&tools_request());
        peer.join().unwrap();

        assert!(matches!(result, Err(ClientError::Decode(_))));
    }
}
