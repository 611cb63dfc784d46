mod mocks;

pub use mocks::*;
