//! DDR5 datasheet records and their JSON ingestion.
//!
//! A [`MemSpec`] aggregates the geometry, DC operating point and timing of a
//! single DRAM device, as published in a JEDEC-style datasheet document.
//! Records are immutable value objects: loaded once, read many times, and
//! never mutated by any power model. Share them with `Rc` when several
//! devices are built from the same datasheet.

use std::path::Path;
use std::rc::Rc;

use log::debug;
use serde::Serialize;
use serde_json::Value;

use crate::error::ModelError;
use crate::parse::{f64_field, object_field, str_field_or_default, u32_field};

/// Static DRAM geometry parameters.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MemArchitectureSpec {
    /// Device I/O width in bits (x4/x8/x16).
    pub width: u32,
    /// Number of banks.
    pub banks: u32,
    /// Number of bank groups.
    pub bank_groups: u32,
    /// Number of ranks.
    pub ranks: u32,
    /// Number of columns per row.
    pub columns: u32,
    /// Number of rows per bank.
    pub rows: u32,
    /// Burst length.
    pub burst_length: u32,
    /// Data-rate multiplier (2 for DDR).
    pub data_rate: u32,
    /// Number of devices (chips) per rank.
    pub devices: u32,
}

impl MemArchitectureSpec {
    fn from_json(raw: &Value) -> Result<Self, ModelError> {
        Ok(Self {
            width: u32_field(raw, "width")?,
            banks: u32_field(raw, "nbrOfBanks")?,
            bank_groups: u32_field(raw, "nbrOfBankGroups")?,
            ranks: u32_field(raw, "nbrOfRanks")?,
            columns: u32_field(raw, "nbrOfColumns")?,
            rows: u32_field(raw, "nbrOfRows")?,
            burst_length: u32_field(raw, "burstLength")?,
            data_rate: u32_field(raw, "dataRate")?,
            devices: u32_field(raw, "nbrOfDevices")?,
        })
    }
}

/// JEDEC-style IDD/IPP current constants and supply voltages.
///
/// Currents are in amperes, voltages in volts. No ordering between current
/// constants is enforced: a malformed datasheet still parses, and the power
/// models propagate whatever it says.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MemPowerSpec {
    /// DRAM core supply voltage.
    pub vdd: f64,
    /// Wordline pump supply voltage, used by ACT and REF operations.
    pub vpp: f64,
    /// I/O supply voltage for the DQ/DQS bus.
    pub vddq: f64,

    /// Current during a full ACT - ACTIVE - PRE row cycle.
    pub idd0: f64,
    /// Precharged standby current (CKE high).
    pub idd2n: f64,
    /// Active standby current (one or more banks active).
    pub idd3n: f64,
    /// Burst read current.
    pub idd4r: f64,
    /// Burst write current.
    pub idd4w: f64,
    /// Refresh current.
    pub idd5b: f64,
    /// Self-refresh current (CKE low, autonomous refresh).
    pub idd6n: f64,
    /// Precharged power-down current (CKE low).
    pub idd2p: f64,
    /// Active power-down current (CKE low).
    pub idd3p: f64,

    /// VPP current during ACTIVATE (wordline driver energy).
    pub ipp0: f64,
    /// Precharged VPP standby current.
    pub ipp2n: f64,
    /// Active VPP standby current.
    pub ipp3n: f64,
    /// Additional VPP current during reads.
    pub ipp4r: f64,
    /// Additional VPP current during writes.
    pub ipp4w: f64,
    /// VPP current during refresh (wordline energization).
    pub ipp5b: f64,
    /// Self-refresh VPP current.
    pub ipp6n: f64,
    /// Precharged power-down VPP current.
    pub ipp2p: f64,
    /// Active power-down VPP current.
    pub ipp3p: f64,
}

impl MemPowerSpec {
    fn from_json(raw: &Value) -> Result<Self, ModelError> {
        Ok(Self {
            vdd: f64_field(raw, "vdd")?,
            vpp: f64_field(raw, "vpp")?,
            vddq: f64_field(raw, "vddq")?,
            idd0: f64_field(raw, "idd0")?,
            idd2n: f64_field(raw, "idd2n")?,
            idd3n: f64_field(raw, "idd3n")?,
            idd4r: f64_field(raw, "idd4r")?,
            idd4w: f64_field(raw, "idd4w")?,
            idd5b: f64_field(raw, "idd5b")?,
            idd6n: f64_field(raw, "idd6n")?,
            idd2p: f64_field(raw, "idd2p")?,
            idd3p: f64_field(raw, "idd3p")?,
            ipp0: f64_field(raw, "ipp0")?,
            ipp2n: f64_field(raw, "ipp2n")?,
            ipp3n: f64_field(raw, "ipp3n")?,
            ipp4r: f64_field(raw, "ipp4r")?,
            ipp4w: f64_field(raw, "ipp4w")?,
            ipp5b: f64_field(raw, "ipp5b")?,
            ipp6n: f64_field(raw, "ipp6n")?,
            ipp2p: f64_field(raw, "ipp2p")?,
            ipp3p: f64_field(raw, "ipp3p")?,
        })
    }
}

/// Clock period and command timing parameters.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MemTimingSpec {
    /// Clock period in seconds.
    ///
    /// Must be positive: every duty cycle below is derived from it, and the
    /// power models reject a non-positive value instead of dividing by it.
    pub t_ck: f64,
    /// Row active time in clock cycles.
    pub ras: u32,
    /// Row-to-column delay in clock cycles.
    pub rcd: u32,
    /// Row precharge time in clock cycles.
    pub rp: u32,
    /// All-bank refresh cycle time in clock cycles.
    pub rfc1: u32,
    /// Fine-granularity refresh cycle time in clock cycles.
    pub rfc2: u32,
    /// Same-bank refresh cycle time in clock cycles.
    pub rfcsb: u32,
    /// Average refresh interval in clock cycles.
    pub refi: u32,
}

impl MemTimingSpec {
    fn from_json(raw: &Value) -> Result<Self, ModelError> {
        Ok(Self {
            t_ck: f64_field(raw, "tCK")?,
            ras: u32_field(raw, "RAS")?,
            rcd: u32_field(raw, "RCD")?,
            rp: u32_field(raw, "RP")?,
            rfc1: u32_field(raw, "RFC1")?,
            rfc2: u32_field(raw, "RFC2")?,
            rfcsb: u32_field(raw, "RFCsb")?,
            refi: u32_field(raw, "REFI")?,
        })
    }
}

/// A complete device datasheet: identifier plus architecture, power and
/// timing specs.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MemSpec {
    /// Device identifier, e.g. the vendor part number.
    pub memory_id: String,
    /// Memory type tag, e.g. `DDR5`.
    pub memory_type: String,
    /// Geometry parameters.
    pub arch: MemArchitectureSpec,
    /// Currents and voltages.
    pub power: MemPowerSpec,
    /// Clock period and command timings.
    pub timing: MemTimingSpec,
}

impl MemSpec {
    /// Builds a datasheet from a parsed JSON document.
    ///
    /// The document nests everything under a top-level `memspec` key. A
    /// missing field is reported as [`ModelError::MissingField`] with the key
    /// name; a field that cannot be coerced to its declared numeric type as
    /// [`ModelError::InvalidType`]. The identifier strings are optional and
    /// default to empty.
    pub fn from_json(value: &Value) -> Result<Self, ModelError> {
        let raw = object_field(value, "memspec")?;
        let spec = Self {
            memory_id: str_field_or_default(raw, "memoryId"),
            memory_type: str_field_or_default(raw, "memoryType"),
            arch: MemArchitectureSpec::from_json(object_field(raw, "memarchitecturespec")?)?,
            power: MemPowerSpec::from_json(object_field(raw, "mempowerspec")?)?,
            timing: MemTimingSpec::from_json(object_field(raw, "memtimingspec")?)?,
        };
        debug!("loaded memspec {} ({})", spec.memory_id, spec.memory_type);
        Ok(spec)
    }

    /// Builds a datasheet from a JSON string.
    pub fn from_str(s: &str) -> Result<Self, ModelError> {
        let value: Value = serde_json::from_str(s)
            .map_err(|e| ModelError::Configuration(format!("invalid JSON document: {}", e)))?;
        Self::from_json(&value)
    }

    /// Builds a datasheet from a JSON file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ModelError> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| {
            ModelError::Configuration(format!("cannot read {}: {}", path.display(), e))
        })?;
        Self::from_str(&content)
    }

    /// Wraps the datasheet in an `Rc` for sharing across devices.
    pub fn into_shared(self) -> Rc<Self> {
        Rc::new(self)
    }
}
