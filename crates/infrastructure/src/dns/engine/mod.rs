mod exchange;
mod resolution_engine;
mod rotation;

pub use exchange::QueryExchange;
pub use resolution_engine::ResolutionEngine;
pub use rotation::ResolverRotation;
