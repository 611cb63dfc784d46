use serde::{Deserialize, Serialize};

/// Where the JSON report goes; `-` means standard output.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct OutputConfig {
    #[serde(default = "default_output_path")]
    pub path: String,
}

impl OutputConfig {
    pub fn is_stdout(&self) -> bool {
        self.path == "-"
    }
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            path: default_output_path(),
        }
    }
}

fn default_output_path() -> String {
    "-".to_string()
}
