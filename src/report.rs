//! Report assembly and JSON serialization.
//!
//! A `Report` partitions resolved fields into three buckets:
//!
//! - `DD`: device data, fields that resolved to a value
//! - `DPNA`: device parameters not available, with the reason code
//! - `SW`: security warnings, produced only by `SecurityCheck`s
//!
//! Serialized form: `{"DV": "1.0.0", "DD": {...}, "DPNA": {...}, "SW": {...}}`,
//! where `DV` is always present and each bucket only when non-empty.

use std::collections::BTreeMap;

use serde::Serialize;
use tracing::{debug, error};

use crate::collector::{FieldCollector, HostContext};
use crate::model::{DATA_VERSION, ErrorCode, FetchResult, FieldKey};

/// Host inspection that may raise a security warning.
pub trait SecurityCheck {
    /// Key the warning is reported under.
    fn key(&self) -> FieldKey;

    /// Returns a code when the host warrants a warning.
    fn evaluate(&self, host: &dyn HostContext) -> Option<ErrorCode>;
}

/// Collected device parameters. Immutable once built.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Report {
    #[serde(rename = "DV")]
    version: String,
    #[serde(rename = "DD", skip_serializing_if = "BTreeMap::is_empty")]
    data: BTreeMap<FieldKey, String>,
    #[serde(rename = "DPNA", skip_serializing_if = "BTreeMap::is_empty")]
    dpna: BTreeMap<FieldKey, ErrorCode>,
    #[serde(rename = "SW", skip_serializing_if = "BTreeMap::is_empty")]
    warnings: BTreeMap<FieldKey, ErrorCode>,
}

impl Report {
    /// Partitions per-field results into the `DD` and `DPNA` buckets.
    pub fn from_results(results: impl IntoIterator<Item = (FieldKey, FetchResult)>) -> Self {
        let mut data = BTreeMap::new();
        let mut dpna = BTreeMap::new();

        for (key, result) in results {
            match result {
                FetchResult::Success(value) => {
                    data.insert(key, value);
                }
                FetchResult::Failure(code) => {
                    dpna.insert(key, code);
                }
            }
        }

        Self {
            version: DATA_VERSION.to_string(),
            data,
            dpna,
            warnings: BTreeMap::new(),
        }
    }

    pub fn version(&self) -> &str {
        &self.version
    }

    /// Fields that resolved to a value.
    pub fn data(&self) -> &BTreeMap<FieldKey, String> {
        &self.data
    }

    /// Fields that could not be resolved.
    pub fn dpna(&self) -> &BTreeMap<FieldKey, ErrorCode> {
        &self.dpna
    }

    /// Security warnings.
    pub fn warnings(&self) -> &BTreeMap<FieldKey, ErrorCode> {
        &self.warnings
    }

    /// Compact JSON envelope.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }

    /// Indented JSON envelope.
    pub fn to_json_pretty(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}

/// Drives the field collector over the catalog and runs security checks.
#[derive(Default)]
pub struct ReportBuilder {
    checks: Vec<Box<dyn SecurityCheck>>,
}

impl ReportBuilder {
    /// Creates a builder without security checks.
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a security check.
    pub fn with_check(mut self, check: impl SecurityCheck + 'static) -> Self {
        self.checks.push(Box::new(check));
        self
    }

    /// Collects every catalog field from `host` and builds a fresh report.
    pub fn build(&self, host: &dyn HostContext) -> Report {
        let mut report = Report::from_results(FieldCollector::new(host).collect());

        for check in &self.checks {
            if let Some(code) = check.evaluate(host) {
                debug!(key = %check.key(), %code, "security warning");
                report.warnings.insert(check.key(), code);
            }
        }

        report
    }
}

/// Collects device parameters from `host` and returns the JSON envelope.
///
/// Always returns well-formed JSON.
pub fn get_device_info(host: &dyn HostContext) -> String {
    let report = ReportBuilder::new().build(host);
    report.to_json().unwrap_or_else(|e| {
        error!("failed to serialize device report: {}", e);
        format!("{{\"DV\":\"{}\"}}", DATA_VERSION)
    })
}
