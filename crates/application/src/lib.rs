//! ferrous-audit application layer: ports, checkers and scan use cases
pub mod checkers;
pub mod ports;
pub mod services;
pub mod use_cases;
