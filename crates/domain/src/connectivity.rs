use std::fmt;
use std::net::IpAddr;

/// Snapshot of which network paths were usable when the scan started.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Connectivity {
    pub ipv4: bool,
    pub ipv6: bool,
    pub resolvers: bool,
}

impl Connectivity {
    pub fn all() -> Self {
        Self {
            ipv4: true,
            ipv6: true,
            resolvers: true,
        }
    }

    pub fn permits(&self, address: IpAddr) -> bool {
        match address {
            IpAddr::V4(_) => self.ipv4,
            IpAddr::V6(_) => self.ipv6,
        }
    }
}

impl fmt::Display for Connectivity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "ipv4={} ipv6={} resolvers={}",
            self.ipv4, self.ipv6, self.resolvers
        )
    }
}
