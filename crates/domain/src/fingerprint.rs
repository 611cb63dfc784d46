use crate::prefix_set::PrefixSet;
use crate::{DomainError, RecordData, ResourceRecord};
use ipnetwork::IpNetwork;
use serde::{Deserialize, Serialize};

pub const DEFAULT_URL_TEMPLATE: &str = "http://%s";
const PLACEHOLDER: &str = "%s";

/// One entry of the fingerprint catalog as it is stored on disk.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct FingerprintDefinition {
    pub service: String,

    #[serde(default)]
    pub cname: Vec<String>,

    #[serde(default, rename = "address")]
    pub addresses: Vec<String>,

    #[serde(default)]
    pub fingerprint: Vec<String>,

    /// Carried by the catalog format; not used for matching.
    #[serde(default)]
    pub nxdomain: Vec<String>,

    #[serde(default)]
    pub template: Option<String>,
}

/// A compiled fingerprint, ready to match resolution chains.
#[derive(Debug, Clone)]
pub struct Fingerprint {
    pub service: String,
    pub cname_patterns: Vec<String>,
    pub prefixes: PrefixSet,
    pub content: Vec<String>,
    pub nxdomain: Vec<String>,
    pub url_template: String,
}

impl Fingerprint {
    pub fn compile(definition: FingerprintDefinition) -> Result<Self, DomainError> {
        let mut prefixes = PrefixSet::new();
        for address in &definition.addresses {
            let network: IpNetwork = address.trim().parse().map_err(|_| {
                DomainError::InvalidCidr(format!("{} (service {})", address, definition.service))
            })?;
            prefixes.insert(network);
        }

        let url_template = match definition.template {
            Some(template) if !template.is_empty() => template,
            _ => DEFAULT_URL_TEMPLATE.to_string(),
        };
        if url_template.matches(PLACEHOLDER).count() != 1 {
            return Err(DomainError::FingerprintCatalog(format!(
                "template '{}' for {} must contain exactly one {}",
                url_template, definition.service, PLACEHOLDER
            )));
        }

        Ok(Self {
            service: definition.service,
            cname_patterns: definition.cname,
            prefixes,
            content: definition.fingerprint,
            nxdomain: definition.nxdomain,
            url_template,
        })
    }

    /// Parses and compiles a whole JSON catalog. Any bad entry fails the catalog.
    pub fn compile_catalog(json: &str) -> Result<Vec<Self>, DomainError> {
        let definitions: Vec<FingerprintDefinition> = serde_json::from_str(json)
            .map_err(|e| DomainError::FingerprintCatalog(e.to_string()))?;
        definitions.into_iter().map(Self::compile).collect()
    }

    /// True when any answer of the chain points at this service.
    pub fn match_chain(&self, chain: &[ResourceRecord]) -> bool {
        chain.iter().any(|answer| self.matches_record(answer))
    }

    pub fn matches_record(&self, answer: &ResourceRecord) -> bool {
        match &answer.data {
            RecordData::CNAME(target) => self
                .cname_patterns
                .iter()
                .any(|pattern| target.contains(pattern.as_str())),
            RecordData::A(addr) => self.prefixes.contains((*addr).into()),
            RecordData::AAAA(addr) => self.prefixes.contains((*addr).into()),
            _ => false,
        }
    }

    pub fn probe_url(&self, owner: &str) -> String {
        self.url_template
            .replacen(PLACEHOLDER, owner.trim_end_matches('.'), 1)
    }

    /// Content substrings found in `body`, in catalog order.
    pub fn matched_content<'a>(&'a self, body: &str) -> Vec<&'a str> {
        self.content
            .iter()
            .filter(|needle| body.contains(needle.as_str()))
            .map(String::as_str)
            .collect()
    }
}
