use async_trait::async_trait;
use ferrous_audit_domain::{DnsProtocol, DomainError};
use ferrous_audit_infrastructure::dns::{TransportConnector, TransportResponse};
use std::net::Ipv4Addr;
use std::sync::Mutex;
use std::time::Duration;

use super::wire;

type Responder = Box<dyn Fn(&DnsProtocol, &[u8]) -> Result<Vec<u8>, DomainError> + Send + Sync>;

#[derive(Debug, Clone)]
pub struct SentMessage {
    pub protocol: DnsProtocol,
    pub bytes: Vec<u8>,
}

/// Connector answering from a closure and recording every message sent.
pub struct ScriptedConnector {
    responder: Responder,
    sent: Mutex<Vec<SentMessage>>,
}

impl ScriptedConnector {
    pub fn new<F>(responder: F) -> Self
    where
        F: Fn(&DnsProtocol, &[u8]) -> Result<Vec<u8>, DomainError> + Send + Sync + 'static,
    {
        Self {
            responder: Box::new(responder),
            sent: Mutex::new(Vec::new()),
        }
    }

    pub fn answering(ip: Ipv4Addr) -> Self {
        Self::new(move |_, query| Ok(wire::a_response(query, ip, false)))
    }

    /// Truncates every UDP answer; TCP gets the full one.
    pub fn truncating_udp(ip: Ipv4Addr) -> Self {
        Self::new(move |protocol, query| {
            let truncated = matches!(protocol, DnsProtocol::Udp { .. });
            Ok(wire::a_response(query, ip, truncated))
        })
    }

    pub fn rcode(rcode: u8) -> Self {
        Self::new(move |_, query| Ok(wire::rcode_response(query, rcode)))
    }

    pub fn failing(error: DomainError) -> Self {
        Self::new(move |_, _| Err(error.clone()))
    }

    pub fn sent(&self) -> Vec<SentMessage> {
        self.sent.lock().unwrap().clone()
    }

    pub fn servers(&self) -> Vec<String> {
        self.sent()
            .iter()
            .map(|m| m.protocol.socket_addr().to_string())
            .collect()
    }
}

#[async_trait]
impl TransportConnector for ScriptedConnector {
    async fn exchange(
        &self,
        protocol: DnsProtocol,
        message_bytes: &[u8],
        _timeout: Duration,
    ) -> Result<TransportResponse, DomainError> {
        self.sent.lock().unwrap().push(SentMessage {
            protocol,
            bytes: message_bytes.to_vec(),
        });

        let bytes = (self.responder)(&protocol, message_bytes)?;
        Ok(TransportResponse {
            bytes,
            protocol_used: protocol.protocol_name(),
        })
    }
}
