use crate::ResourceRecord;
use std::path::Path;

#[derive(Debug, Clone, Default)]
pub struct Zone {
    pub name: String,
    pub records: Vec<ResourceRecord>,
}

impl Zone {
    pub fn new(name: impl Into<String>, records: Vec<ResourceRecord>) -> Self {
        Self {
            name: name.into(),
            records,
        }
    }

    /// Zone name derived from a source identifier: the file name of the path.
    pub fn name_from_source(source: &str) -> String {
        Path::new(source)
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| source.to_string())
    }
}
