//! Content-based hashing for design IDs.

use sha2::{Digest, Sha256};
use td_design::DesignSpec;

pub fn compute_design_id(spec: &DesignSpec, tool_version: &str) -> String {
    let mut hasher = Sha256::new();

    let spec_json = serde_json::to_string(spec).unwrap_or_default();
    hasher.update(spec_json.as_bytes());

    hasher.update(tool_version.as_bytes());

    let result = hasher.finalize();
    format!("{:x}", result)
}
