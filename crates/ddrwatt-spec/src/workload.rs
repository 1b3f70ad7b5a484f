//! Workload descriptor: activity ratios of the modeled memory traffic.

use std::path::Path;
use std::rc::Rc;

use serde::Serialize;
use serde_json::Value;

use crate::error::ModelError;
use crate::parse::f64_field;

/// Steady-state activity ratios describing a memory workload.
///
/// Percent fields are expressed in 0-100 and divided by 100 at point of use.
/// They are deliberately not clamped: out-of-range values propagate into the
/// power models and can produce negative or larger-than-physical
/// contributions, which callers are expected to validate upstream.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Workload {
    /// Fraction of time all banks are precharged, in percent.
    pub bnk_pre_percent: f64,
    /// Fraction of precharged time spent in power-down, in percent.
    pub cke_lo_pre_percent: f64,
    /// Fraction of active time spent in power-down, in percent.
    pub cke_lo_act_percent: f64,
    /// Row-buffer page hit rate, in percent.
    pub page_hit_percent: f64,
    /// Fraction of scheduled cycles that are read bursts, in percent.
    pub rdsch_percent: f64,
    /// Fraction of read data pins driven low, in percent.
    pub rd_data_low_percent: f64,
    /// Fraction of scheduled cycles that are write bursts, in percent.
    pub wrsch_percent: f64,
    /// Fraction of write data pins driven low, in percent.
    pub wr_data_low_percent: f64,
    /// Fraction of cycles terminating reads of another rank, in percent.
    pub term_rdsch_percent: f64,
    /// Fraction of cycles terminating writes of another rank, in percent.
    pub term_wrsch_percent: f64,
    /// Observed system row cycle time in nanoseconds.
    pub system_trc_ns: f64,
    /// Average interval between row activations in nanoseconds.
    ///
    /// Zero means no row activity at all, not an infinitely fast stream.
    pub trrdsch_ns: f64,
}

impl Workload {
    /// Builds a workload from a parsed JSON document (a flat object with the
    /// twelve fields). Failure semantics match [`crate::memspec::MemSpec`].
    pub fn from_json(value: &Value) -> Result<Self, ModelError> {
        Ok(Self {
            bnk_pre_percent: f64_field(value, "BNK_PRE_percent")?,
            cke_lo_pre_percent: f64_field(value, "CKE_LO_PRE_percent")?,
            cke_lo_act_percent: f64_field(value, "CKE_LO_ACT_percent")?,
            page_hit_percent: f64_field(value, "PageHit_percent")?,
            rdsch_percent: f64_field(value, "RDsch_percent")?,
            rd_data_low_percent: f64_field(value, "RD_Data_Low_percent")?,
            wrsch_percent: f64_field(value, "WRsch_percent")?,
            wr_data_low_percent: f64_field(value, "WR_Data_Low_percent")?,
            term_rdsch_percent: f64_field(value, "termRDsch_percent")?,
            term_wrsch_percent: f64_field(value, "termWRsch_percent")?,
            system_trc_ns: f64_field(value, "System_tRC_ns")?,
            trrdsch_ns: f64_field(value, "tRRDsch_ns")?,
        })
    }

    /// Builds a workload from a JSON string.
    pub fn from_str(s: &str) -> Result<Self, ModelError> {
        let value: Value = serde_json::from_str(s)
            .map_err(|e| ModelError::Configuration(format!("invalid JSON document: {}", e)))?;
        Self::from_json(&value)
    }

    /// Builds a workload from a JSON file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ModelError> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| {
            ModelError::Configuration(format!("cannot read {}: {}", path.display(), e))
        })?;
        Self::from_str(&content)
    }

    /// Wraps the workload in an `Rc` for sharing across devices.
    pub fn into_shared(self) -> Rc<Self> {
        Rc::new(self)
    }
}
