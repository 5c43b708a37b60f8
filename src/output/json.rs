use serde_json::{json, Value};

use crate::error::ImportError;
use crate::models::{ImportSummary, Warning};

pub fn success(data: Value) -> Value {
    json!({
        "success": true,
        "data": data
    })
}

pub fn error(err: &ImportError) -> Value {
    json!({
        "success": false,
        "error": {
            "code": err.code.as_str(),
            "message": err.message
        }
    })
}

/// `success` is false when any task failed; the data is reported either way.
pub fn run_report(summary: &ImportSummary, warnings: &[Warning]) -> Value {
    let added: Vec<_> = summary.added().collect();
    let failed: Vec<_> = summary.failed().collect();
    json!({
        "success": !summary.has_failures(),
        "data": {
            "added": added,
            "failed": failed,
            "warnings": warnings,
            "totals": {
                "added": added.len(),
                "failed": failed.len()
            }
        }
    })
}

pub fn no_tasks() -> Value {
    success(json!({
        "added": [],
        "failed": [],
        "warnings": [],
        "totals": { "added": 0, "failed": 0 },
        "message": "No tasks entered."
    }))
}
