use super::{Checker, CheckerContext};
use async_trait::async_trait;
use ferrous_audit_domain::{
    AuditResult, DomainError, Fingerprint, RecordData, RecordType, ResourceRecord,
};
use std::borrow::Cow;
use tracing::{debug, info};

/// Detects takeover candidates by matching resolution chains against service
/// fingerprints and probing the site for the service's "unclaimed" page.
pub struct HttpChecker {
    ctx: CheckerContext,
    fingerprints: Vec<Fingerprint>,
}

impl HttpChecker {
    pub fn new(ctx: CheckerContext) -> Self {
        Self {
            ctx,
            fingerprints: Vec::new(),
        }
    }

    pub fn fingerprints(&self) -> &[Fingerprint] {
        &self.fingerprints
    }

    /// Answers to match fingerprints against, or `None` when nothing resolves.
    async fn resolution_chain<'a>(
        &self,
        record: &'a ResourceRecord,
    ) -> Result<Option<Cow<'a, [ResourceRecord]>>, DomainError> {
        match record.data {
            RecordData::CNAME(_) => {
                let response = self
                    .ctx
                    .dns
                    .recursive_query(&record.name, RecordType::A)
                    .await?;
                if !response.has_address() {
                    debug!(record = %record.name, "CNAME chain has no address, skipping");
                    return Ok(None);
                }
                Ok(Some(Cow::Owned(response.answers)))
            }
            RecordData::A(_) | RecordData::AAAA(_) => {
                Ok(Some(Cow::Borrowed(std::slice::from_ref(record))))
            }
            _ => Ok(None),
        }
    }

    async fn probe(&self, record: &ResourceRecord, fingerprint: &Fingerprint) {
        let url = fingerprint.probe_url(&record.name);
        debug!(record = %record.name, service = %fingerprint.service, url = %url, "Fingerprint matched, probing");

        let body = match self.ctx.http.fetch(&url).await {
            Ok(body) => body,
            Err(e) => {
                info!(url = %url, error = %e, "HTTP probe failed");
                return;
            }
        };

        for needle in fingerprint.matched_content(&body) {
            self.ctx.sink.add(AuditResult::new(
                record.name.clone(),
                "http",
                needle,
                format!(
                    "Dangling site {} -> {} ({})",
                    record.name, fingerprint.service, needle
                ),
            ));
        }
    }
}

#[async_trait]
impl Checker for HttpChecker {
    fn name(&self) -> &'static str {
        "http"
    }

    async fn init(&mut self) -> Result<(), DomainError> {
        self.fingerprints = self.ctx.catalog.load()?;
        info!(
            check = "http",
            fingerprints = self.fingerprints.len(),
            "Initializing check"
        );
        Ok(())
    }

    async fn check(&self, record: &ResourceRecord) -> Result<(), DomainError> {
        let Some(chain) = self.resolution_chain(record).await? else {
            return Ok(());
        };

        for fingerprint in &self.fingerprints {
            if fingerprint.match_chain(&chain) {
                self.probe(record, fingerprint).await;
            }
        }

        Ok(())
    }
}
