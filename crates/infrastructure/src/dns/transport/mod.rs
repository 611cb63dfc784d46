pub mod tcp;
pub mod udp;

use async_trait::async_trait;
use ferrous_audit_domain::{DnsProtocol, DomainError};
use std::io;
use std::net::SocketAddr;
use std::time::Duration;

#[derive(Debug)]
pub struct TransportResponse {
    pub bytes: Vec<u8>,

    pub protocol_used: &'static str,
}

/// Seam between the resolution engine and the network.
#[async_trait]
pub trait TransportConnector: Send + Sync {
    async fn exchange(
        &self,
        protocol: DnsProtocol,
        message_bytes: &[u8],
        timeout: Duration,
    ) -> Result<TransportResponse, DomainError>;
}

/// Opens a fresh socket per exchange.
#[derive(Debug, Default, Clone, Copy)]
pub struct NetworkConnector;

#[async_trait]
impl TransportConnector for NetworkConnector {
    async fn exchange(
        &self,
        protocol: DnsProtocol,
        message_bytes: &[u8],
        timeout: Duration,
    ) -> Result<TransportResponse, DomainError> {
        match protocol {
            DnsProtocol::Udp { addr } => udp::UdpTransport::new(addr).send(message_bytes, timeout).await,
            DnsProtocol::Tcp { addr } => tcp::TcpTransport::new(addr).send(message_bytes, timeout).await,
        }
    }
}

/// Rejects a response whose ID differs from the query's.
pub(crate) fn validate_response_id(
    query: &[u8],
    response: &[u8],
    server: SocketAddr,
) -> Result<(), DomainError> {
    if query.len() < 2 || response.len() < 2 {
        return Err(DomainError::InvalidDnsResponse(format!(
            "Message from {} too short to carry an ID",
            server
        )));
    }
    if query[..2] != response[..2] {
        return Err(DomainError::InvalidDnsResponse(format!(
            "DNS ID mismatch from {}: sent {:02x}{:02x}, got {:02x}{:02x}",
            server, query[0], query[1], response[0], response[1]
        )));
    }
    Ok(())
}

pub(crate) fn timeout_error(server: SocketAddr) -> DomainError {
    DomainError::TransportTimeout {
        server: server.to_string(),
    }
}

pub(crate) fn io_error(server: SocketAddr, context: &str, e: io::Error) -> DomainError {
    match e.kind() {
        io::ErrorKind::ConnectionRefused => DomainError::TransportConnectionRefused {
            server: server.to_string(),
        },
        io::ErrorKind::TimedOut => timeout_error(server),
        _ => DomainError::TransportError {
            server: server.to_string(),
            message: format!("{}: {}", context, e),
        },
    }
}
