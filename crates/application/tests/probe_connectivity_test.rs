mod helpers;

use ferrous_audit_application::use_cases::{ProbeConnectivityUseCase, IPV4_PROBES, IPV6_PROBES};
use ferrous_audit_domain::RecordType;
use helpers::{answer, soa, timeout, MockDnsQuery, QueryKind};
use std::net::{IpAddr, SocketAddr};
use std::sync::Arc;

const PROBE: &str = "example.com.";

fn addr(ip: impl Into<IpAddr>) -> SocketAddr {
    SocketAddr::new(ip.into(), 53)
}

fn answer_all(dns: &MockDnsQuery, servers: &[SocketAddr]) {
    for server in servers {
        dns.on_direct_recursive(PROBE, RecordType::SOA, *server, answer(vec![soa(PROBE)]));
    }
}

fn public_v4() -> Vec<SocketAddr> {
    IPV4_PROBES.iter().map(|ip| addr(*ip)).collect()
}

fn public_v6() -> Vec<SocketAddr> {
    IPV6_PROBES.iter().map(|ip| addr(*ip)).collect()
}

#[tokio::test]
async fn test_all_sets_answer() {
    let dns = Arc::new(MockDnsQuery::new());
    let resolvers = vec!["192.0.2.53:53".parse().unwrap()];
    answer_all(&dns, &public_v4());
    answer_all(&dns, &public_v6());
    answer_all(&dns, &resolvers);

    let connectivity = ProbeConnectivityUseCase::new(dns.clone(), resolvers, PROBE)
        .execute()
        .await;

    assert!(connectivity.ipv4);
    assert!(connectivity.ipv6);
    assert!(connectivity.resolvers);
    assert_eq!(dns.calls_of(QueryKind::DirectRecursive).len(), 13);
}

#[tokio::test]
async fn test_one_unreachable_probe_clears_its_family_only() {
    let dns = Arc::new(MockDnsQuery::new());
    let resolvers = vec!["192.0.2.53:53".parse().unwrap()];
    let v4 = public_v4();
    answer_all(&dns, &v4);
    answer_all(&dns, &public_v6());
    answer_all(&dns, &resolvers);
    dns.on_direct_recursive(PROBE, RecordType::SOA, v4[4], timeout("9.9.9.9:53"));

    let connectivity = ProbeConnectivityUseCase::new(dns, resolvers, PROBE)
        .execute()
        .await;

    assert!(!connectivity.ipv4);
    assert!(connectivity.ipv6);
    assert!(connectivity.resolvers);
}

#[tokio::test]
async fn test_answer_without_soa_is_failure() {
    let dns = Arc::new(MockDnsQuery::new());
    let resolvers: Vec<SocketAddr> = vec!["192.0.2.53:53".parse().unwrap()];
    answer_all(&dns, &public_v4());
    answer_all(&dns, &public_v6());
    dns.on_direct_recursive(PROBE, RecordType::SOA, resolvers[0], answer(vec![]));

    let connectivity = ProbeConnectivityUseCase::new(dns, resolvers, PROBE)
        .execute()
        .await;

    assert!(connectivity.ipv4);
    assert!(!connectivity.resolvers);
}

#[tokio::test]
async fn test_custom_probe_sets_and_resolver_port() {
    let dns = Arc::new(MockDnsQuery::new());
    let resolver: SocketAddr = "127.0.0.1:5353".parse().unwrap();
    answer_all(&dns, &[resolver]);

    let connectivity = ProbeConnectivityUseCase::new(dns.clone(), vec![resolver], PROBE)
        .with_probe_sets(vec!["192.0.2.1:53".parse().unwrap()], Vec::new())
        .execute()
        .await;

    assert!(!connectivity.ipv4);
    assert!(connectivity.ipv6);
    assert!(connectivity.resolvers);
    let servers: Vec<_> = dns.calls().into_iter().filter_map(|c| c.server).collect();
    assert!(servers.contains(&resolver));
}
