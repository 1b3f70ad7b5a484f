//! Power breakdown records.
//!
//! Breakdowns are closed structs with named fields so that every component is
//! always populated; the string-keyed view needed at the serialization
//! boundary is produced on demand by `to_map`, preserving the canonical key
//! order of the reports these records feed.

use std::ops::{Add, AddAssign};

use indexmap::IndexMap;
use serde::Serialize;

/// DRAM core power breakdown, all values in Watts.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct CorePowerBreakdown {
    /// Precharged standby power (power-down blended in).
    pub p_pre_stby: f64,
    /// Active standby power (power-down blended in).
    pub p_act_stby: f64,
    /// Activate/precharge power, VDD and VPP parts combined.
    pub p_act_pre: f64,
    /// Incremental read burst power.
    pub p_rd: f64,
    /// Incremental write burst power.
    pub p_wr: f64,
    /// Refresh power, VDD and VPP parts combined.
    pub p_ref: f64,
    /// Total power drawn from the VDD rail.
    pub p_vdd: f64,
    /// Total power drawn from the VPP rail.
    pub p_vpp: f64,
    /// Total core power.
    pub p_total: f64,
}

impl CorePowerBreakdown {
    /// Renders the breakdown under its canonical string keys.
    pub fn to_map(&self) -> IndexMap<String, f64> {
        [
            ("P_PRE_STBY_core", self.p_pre_stby),
            ("P_ACT_STBY_core", self.p_act_stby),
            ("P_ACT_PRE_core", self.p_act_pre),
            ("P_RD_core", self.p_rd),
            ("P_WR_core", self.p_wr),
            ("P_REF_core", self.p_ref),
            ("P_VDD_core", self.p_vdd),
            ("P_VPP_core", self.p_vpp),
            ("P_total_core", self.p_total),
        ]
        .into_iter()
        .map(|(k, v)| (k.to_string(), v))
        .collect()
    }
}

impl AddAssign for CorePowerBreakdown {
    fn add_assign(&mut self, rhs: Self) {
        self.p_pre_stby += rhs.p_pre_stby;
        self.p_act_stby += rhs.p_act_stby;
        self.p_act_pre += rhs.p_act_pre;
        self.p_rd += rhs.p_rd;
        self.p_wr += rhs.p_wr;
        self.p_ref += rhs.p_ref;
        self.p_vdd += rhs.p_vdd;
        self.p_vpp += rhs.p_vpp;
        self.p_total += rhs.p_total;
    }
}

impl Add for CorePowerBreakdown {
    type Output = Self;

    fn add(mut self, rhs: Self) -> Self {
        self += rhs;
        self
    }
}

/// I/O interface power breakdown, all values in Watts.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct InterfacePowerBreakdown {
    /// Data bus write power, dissipated in the DRAM on-die termination.
    pub p_dq_write: f64,
    /// Data bus read power, dissipated in the DRAM output driver.
    pub p_dq_read: f64,
    /// Command/address bus power.
    pub p_ca: f64,
    /// System clock power.
    pub p_ck: f64,
    /// Write clock power.
    pub p_wck: f64,
    /// Data strobe power, read and write directions combined.
    pub p_dqs: f64,
    /// Chip-select power.
    pub p_cs: f64,
    /// Total interface power.
    pub p_total: f64,
}

impl InterfacePowerBreakdown {
    /// Renders the breakdown under its canonical string keys.
    pub fn to_map(&self) -> IndexMap<String, f64> {
        [
            ("P_DQ_WRITE", self.p_dq_write),
            ("P_DQ_READ", self.p_dq_read),
            ("P_CA", self.p_ca),
            ("P_CK", self.p_ck),
            ("P_WCK", self.p_wck),
            ("P_DQS", self.p_dqs),
            ("P_CS", self.p_cs),
            ("P_total_interface", self.p_total),
        ]
        .into_iter()
        .map(|(k, v)| (k.to_string(), v))
        .collect()
    }
}

impl AddAssign for InterfacePowerBreakdown {
    fn add_assign(&mut self, rhs: Self) {
        self.p_dq_write += rhs.p_dq_write;
        self.p_dq_read += rhs.p_dq_read;
        self.p_ca += rhs.p_ca;
        self.p_ck += rhs.p_ck;
        self.p_wck += rhs.p_wck;
        self.p_dqs += rhs.p_dqs;
        self.p_cs += rhs.p_cs;
        self.p_total += rhs.p_total;
    }
}

impl Add for InterfacePowerBreakdown {
    type Output = Self;

    fn add(mut self, rhs: Self) -> Self {
        self += rhs;
        self
    }
}

/// First-order switching power estimate, reported separately from the
/// termination breakdown and never folded into its totals.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct DynamicPowerBreakdown {
    /// Data bus switching power.
    pub p_dq: f64,
    /// Command/address bus switching power.
    pub p_ca: f64,
    /// Clock switching power.
    pub p_ck: f64,
    /// Data strobe switching power.
    pub p_dqs: f64,
    /// Total switching power.
    pub p_total: f64,
}

impl DynamicPowerBreakdown {
    /// Renders the breakdown under its canonical string keys.
    pub fn to_map(&self) -> IndexMap<String, f64> {
        [
            ("P_DQ_dyn", self.p_dq),
            ("P_CA_dyn", self.p_ca),
            ("P_CK_dyn", self.p_ck),
            ("P_DQS_dyn", self.p_dqs),
            ("P_Total_Dynamic", self.p_total),
        ]
        .into_iter()
        .map(|(k, v)| (k.to_string(), v))
        .collect()
    }
}

/// Merged core + interface breakdown for one device or one module.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct DevicePowerBreakdown {
    /// Core contribution.
    pub core: CorePowerBreakdown,
    /// Interface contribution.
    pub interface: InterfacePowerBreakdown,
    /// Total core power, same value as `core.p_total`.
    pub p_total_core: f64,
    /// Total interface power, same value as `interface.p_total`.
    pub p_total_interface: f64,
    /// Grand total.
    pub p_total: f64,
}

impl DevicePowerBreakdown {
    /// Merges a core and an interface breakdown into one record.
    pub fn merge(core: CorePowerBreakdown, interface: InterfacePowerBreakdown) -> Self {
        Self {
            core,
            interface,
            p_total_core: core.p_total,
            p_total_interface: interface.p_total,
            p_total: core.p_total + interface.p_total,
        }
    }

    /// Renders the merged breakdown: embedded keys namespaced as `core.*` and
    /// `if.*`, followed by the three un-namespaced totals.
    pub fn to_map(&self) -> IndexMap<String, f64> {
        let mut map = IndexMap::new();
        for (key, value) in self.core.to_map() {
            map.insert(format!("core.{}", key), value);
        }
        for (key, value) in self.interface.to_map() {
            map.insert(format!("if.{}", key), value);
        }
        map.insert("P_total_core".to_string(), self.p_total_core);
        map.insert("P_total_interface".to_string(), self.p_total_interface);
        map.insert("P_total".to_string(), self.p_total);
        map
    }
}
