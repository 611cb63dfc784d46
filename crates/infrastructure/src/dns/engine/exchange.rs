use crate::dns::forwarding::{MessageBuilder, ResponseParser};
use crate::dns::transport::TransportConnector;
use ferrous_audit_domain::{DnsProtocol, DnsQuery, DomainError, QueryResponse, EXTENDED_UDP_PAYLOAD};
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;
use tracing::debug;

/// One query against one server: UDP first, then a single TCP retry with
/// EDNS(0) if the UDP answer came back truncated.
pub struct QueryExchange<C: TransportConnector> {
    connector: Arc<C>,
    timeout: Duration,
}

impl<C: TransportConnector> QueryExchange<C> {
    pub fn new(connector: Arc<C>, timeout: Duration) -> Self {
        Self { connector, timeout }
    }

    pub async fn exchange(
        &self,
        query: &DnsQuery,
        server: SocketAddr,
    ) -> Result<QueryResponse, DomainError> {
        let udp = DnsProtocol::Udp { addr: server };
        let response = self.send(query, udp).await?;

        if !response.truncated {
            return Ok(response);
        }

        debug!(
            domain = %query.domain,
            record_type = %query.record_type,
            server = %server,
            "Truncated UDP response, retrying over TCP"
        );

        let retry = query.with_edns(EXTENDED_UDP_PAYLOAD);
        self.send(&retry, udp.to_tcp()).await
    }

    async fn send(
        &self,
        query: &DnsQuery,
        protocol: DnsProtocol,
    ) -> Result<QueryResponse, DomainError> {
        let message = MessageBuilder::build(query)?;
        let response = self
            .connector
            .exchange(protocol, &message, self.timeout)
            .await?;

        debug!(
            domain = %query.domain,
            server = %protocol,
            protocol = response.protocol_used,
            bytes = response.bytes.len(),
            "Exchange complete"
        );

        ResponseParser::parse(&response.bytes)
    }
}
