pub mod engine;
pub mod forwarding;
pub mod transport;

pub use engine::{QueryExchange, ResolutionEngine, ResolverRotation};
pub use transport::{NetworkConnector, TransportConnector, TransportResponse};
