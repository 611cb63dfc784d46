use std::net::SocketAddr;
use std::sync::atomic::{AtomicUsize, Ordering};

/// Round-robin cursor over the configured recursive resolvers.
#[derive(Debug)]
pub struct ResolverRotation {
    resolvers: Vec<SocketAddr>,
    counter: AtomicUsize,
}

impl ResolverRotation {
    pub fn new(resolvers: Vec<SocketAddr>) -> Self {
        Self {
            resolvers,
            counter: AtomicUsize::new(0),
        }
    }

    /// Resolver for the next recursive query; advances the cursor by one.
    pub fn next(&self) -> Option<SocketAddr> {
        if self.resolvers.is_empty() {
            return None;
        }
        let index = self.counter.fetch_add(1, Ordering::Relaxed) % self.resolvers.len();
        Some(self.resolvers[index])
    }

    pub fn resolvers(&self) -> &[SocketAddr] {
        &self.resolvers
    }

    pub fn len(&self) -> usize {
        self.resolvers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.resolvers.is_empty()
    }
}
