#![allow(dead_code)]
mod dns_server_mock;
mod scripted_connector;
mod wire;

pub use dns_server_mock::MockDnsServer;
pub use scripted_connector::{ScriptedConnector, SentMessage};
pub use wire::*;
