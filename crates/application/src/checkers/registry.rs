use super::{Checker, CheckerContext, CnameChecker, HttpChecker, NsChecker};
use ferrous_audit_domain::DomainError;
use std::collections::HashMap;

pub type CheckerFactory = fn(&CheckerContext) -> Box<dyn Checker>;

/// Checks shipped with the binary, in their default execution order.
pub static BUILTIN_CHECKERS: &[(&str, CheckerFactory)] = &[
    ("cname", cname_checker),
    ("ns", ns_checker),
    ("http", http_checker),
];

fn cname_checker(ctx: &CheckerContext) -> Box<dyn Checker> {
    Box::new(CnameChecker::new(ctx.clone()))
}

fn ns_checker(ctx: &CheckerContext) -> Box<dyn Checker> {
    Box::new(NsChecker::new(ctx.clone()))
}

fn http_checker(ctx: &CheckerContext) -> Box<dyn Checker> {
    Box::new(HttpChecker::new(ctx.clone()))
}

/// Maps accepted aliases onto registry identifiers.
pub fn canonical_check_id(id: &str) -> &str {
    match id {
        "http-fingerprint" => "http",
        other => other,
    }
}

/// Rejects identifiers that name no built-in check, without building any
/// checker.
pub fn validate_check_ids(ids: &[String]) -> Result<(), DomainError> {
    for id in ids {
        let canonical = canonical_check_id(id);
        if !BUILTIN_CHECKERS.iter().any(|(builtin, _)| *builtin == canonical) {
            return Err(DomainError::UnknownCheck(id.clone()));
        }
    }
    Ok(())
}

#[derive(Default)]
pub struct CheckerRegistry {
    checkers: HashMap<String, Box<dyn Checker>>,
}

impl CheckerRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_builtins(ctx: &CheckerContext) -> Self {
        let mut registry = Self::new();
        for (id, factory) in BUILTIN_CHECKERS.iter() {
            registry.register(id, factory(ctx));
        }
        registry
    }

    /// Registers `checker` under `id`, replacing any earlier entry.
    pub fn register(&mut self, id: &str, checker: Box<dyn Checker>) {
        self.checkers.insert(id.to_string(), checker);
    }

    pub fn contains(&self, id: &str) -> bool {
        self.checkers.contains_key(canonical_check_id(id))
    }

    pub fn get(&self, id: &str) -> Option<&dyn Checker> {
        self.checkers.get(canonical_check_id(id)).map(|c| c.as_ref())
    }

    pub fn take(&mut self, id: &str) -> Option<Box<dyn Checker>> {
        self.checkers.remove(canonical_check_id(id))
    }

    pub fn ids(&self) -> Vec<&str> {
        let mut ids: Vec<&str> = self.checkers.keys().map(String::as_str).collect();
        ids.sort_unstable();
        ids
    }

    pub fn len(&self) -> usize {
        self.checkers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.checkers.is_empty()
    }
}
