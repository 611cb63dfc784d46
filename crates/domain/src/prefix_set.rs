use ipnetwork::IpNetwork;
use std::net::IpAddr;

#[derive(Debug, Clone, Default)]
struct Node {
    children: [Option<usize>; 2],
    prefix: Option<IpNetwork>,
}

/// Binary trie over address bits. Nodes live in a flat arena, index 0 is the root.
#[derive(Debug, Clone)]
struct Trie {
    width: u8,
    nodes: Vec<Node>,
}

impl Trie {
    fn new(width: u8) -> Self {
        Self {
            width,
            nodes: vec![Node::default()],
        }
    }

    #[inline]
    fn bit(&self, bits: u128, index: u8) -> usize {
        ((bits >> (self.width - 1 - index)) & 1) as usize
    }

    fn insert(&mut self, bits: u128, prefix_len: u8, network: IpNetwork) -> bool {
        let mut current = 0;
        for index in 0..prefix_len {
            let bit = self.bit(bits, index);
            current = match self.nodes[current].children[bit] {
                Some(next) => next,
                None => {
                    self.nodes.push(Node::default());
                    let next = self.nodes.len() - 1;
                    self.nodes[current].children[bit] = Some(next);
                    next
                }
            };
        }
        self.nodes[current].prefix.replace(network).is_none()
    }

    fn longest_match(&self, bits: u128) -> Option<IpNetwork> {
        let mut current = 0;
        let mut best = self.nodes[current].prefix;
        for index in 0..self.width {
            match self.nodes[current].children[self.bit(bits, index)] {
                Some(next) => current = next,
                None => break,
            }
            if let Some(prefix) = self.nodes[current].prefix {
                best = Some(prefix);
            }
        }
        best
    }
}

/// Set of CIDR ranges answering containment and longest-prefix queries.
#[derive(Debug, Clone)]
pub struct PrefixSet {
    v4: Trie,
    v6: Trie,
    len: usize,
}

impl Default for PrefixSet {
    fn default() -> Self {
        Self::new()
    }
}

impl PrefixSet {
    pub fn new() -> Self {
        Self {
            v4: Trie::new(32),
            v6: Trie::new(128),
            len: 0,
        }
    }

    pub fn insert(&mut self, network: IpNetwork) {
        let prefix = network.prefix();
        let normalized = IpNetwork::new(network.network(), prefix).unwrap_or(network);
        let added = match normalized.network() {
            IpAddr::V4(addr) => self.v4.insert(u32::from(addr) as u128, prefix, normalized),
            IpAddr::V6(addr) => self.v6.insert(u128::from(addr), prefix, normalized),
        };
        if added {
            self.len += 1;
        }
    }

    pub fn contains(&self, address: IpAddr) -> bool {
        self.longest_match(address).is_some()
    }

    /// Most specific inserted network containing `address`.
    pub fn longest_match(&self, address: IpAddr) -> Option<IpNetwork> {
        match address {
            IpAddr::V4(addr) => self.v4.longest_match(u32::from(addr) as u128),
            IpAddr::V6(addr) => self.v6.longest_match(u128::from(addr)),
        }
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }
}

impl FromIterator<IpNetwork> for PrefixSet {
    fn from_iter<I: IntoIterator<Item = IpNetwork>>(iter: I) -> Self {
        let mut set = PrefixSet::new();
        for network in iter {
            set.insert(network);
        }
        set
    }
}
