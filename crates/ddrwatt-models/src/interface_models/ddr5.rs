//! DDR5 interface power model.
//!
//! A first-order resistive approximation of the host-device link, intended
//! for architectural and comparative analysis rather than silicon-accurate
//! prediction. Each signal wire is a series path through a driver impedance
//! and a termination impedance; transmission-line effects are not modeled.
//! DDR5 signaling is pseudo open drain, so a wire sinks current primarily
//! while driving the low level, approximated by a probability factor per
//! signal class. Differential pairs (CK, WCK, DQS) are modeled per wire at a
//! 0.5 low-level residency. Impedances are assumed static and pre-calibrated
//! (JESD79-5 mode register values).

use ddrwatt_spec::error::ModelError;
use ddrwatt_spec::memspec::MemSpec;
use ddrwatt_spec::workload::Workload;

use crate::breakdown::{DynamicPowerBreakdown, InterfacePowerBreakdown};
use crate::interface::InterfacePowerModel;

/// Electrical and topological settings of the host-device link.
///
/// Impedance defaults follow JESD79-5 mode register typicals. The
/// capacitances feed only the optional switching-power estimate and are
/// placeholders pending calibration against hardware.
#[derive(Debug, Clone, PartialEq)]
pub struct InterfaceConfig {
    /// Subchannels per channel.
    pub subchannels: u32,
    /// Data width of one subchannel in bits.
    pub subchannel_width: u32,
    /// Chip-select lines per subchannel; `None` derives one per rank.
    pub cs_lines: Option<u32>,
    /// Host controller output driver impedance in ohms (MR5, RZQ/7).
    pub r_on_host: f64,
    /// Host-side termination used during reads, in ohms.
    pub r_tt_host: f64,
    /// DRAM output driver impedance in ohms (MR5, RZQ/7).
    pub r_on_dram: f64,
    /// DRAM write termination in ohms (MR34, RZQ/5).
    pub r_tt_dram_wr: f64,
    /// DRAM command/address and chip-select termination in ohms (MR33).
    pub r_tt_ca: f64,
    /// DRAM clock termination in ohms, shared with the write clock.
    pub r_tt_ck: f64,
    /// Command bus utilization.
    pub ca_util: f64,
    /// Chip-select utilization.
    pub cs_util: f64,
    /// Clock utilization; the clock runs whenever the device is powered up.
    pub ck_util: f64,
    /// Probability of a data pin driving logical zero. 0.5 models unbiased
    /// data without data-bus inversion.
    pub prob_data_zero: f64,
    /// Probability of a command pin driving logical zero.
    pub prob_cmd_zero: f64,
    /// Fraction of time a differential clock wire sits at the low level.
    pub prob_clock_toggle: f64,
    /// DQ pin capacitance in farads (pin + trace).
    pub c_dq: f64,
    /// CA pin capacitance in farads.
    pub c_ca: f64,
    /// CK pin capacitance in farads.
    pub c_ck: f64,
    /// DQS pin capacitance in farads.
    pub c_dqs: f64,
}

impl Default for InterfaceConfig {
    fn default() -> Self {
        Self {
            subchannels: 2,
            subchannel_width: 32,
            cs_lines: None,
            r_on_host: 34.0,
            r_tt_host: 40.0,
            r_on_dram: 34.0,
            r_tt_dram_wr: 48.0,
            r_tt_ca: 80.0,
            r_tt_ck: 40.0,
            ca_util: 0.15,
            cs_util: 0.22,
            ck_util: 1.0,
            prob_data_zero: 0.5,
            prob_cmd_zero: 0.5,
            prob_clock_toggle: 0.5,
            c_dq: 3.5e-12,
            c_ca: 8.0e-12,
            c_ck: 12.0e-12,
            c_dqs: 3.5e-12,
        }
    }
}

/// Power dissipated in the termination resistor of a divider driven at
/// `voltage`. A path with zero total impedance carries no modeled power.
fn termination_power(voltage: f64, r_source: f64, r_term: f64) -> f64 {
    if r_source + r_term == 0.0 {
        return 0.0;
    }
    let current = voltage / (r_source + r_term);
    current * current * r_term
}

/// Power dissipated in the output driver of the same divider.
fn driver_power(voltage: f64, r_source: f64, r_term: f64) -> f64 {
    if r_source + r_term == 0.0 {
        return 0.0;
    }
    let current = voltage / (r_source + r_term);
    current * current * r_source
}

/// Resistive termination model of the DDR5 host interface.
///
/// Write-direction data heats the DRAM on-die termination, read-direction
/// data heats the DRAM output driver; keeping the two attributions separate
/// lets die self-heating be estimated per transfer direction.
#[derive(Debug, Clone, Default)]
pub struct Ddr5InterfacePowerModel {
    config: InterfaceConfig,
}

impl Ddr5InterfacePowerModel {
    /// Creates the model with default JESD79-5 settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates the model with explicit link settings.
    pub fn with_config(config: InterfaceConfig) -> Self {
        Self { config }
    }

    /// Returns the link settings of this model.
    pub fn config(&self) -> &InterfaceConfig {
        &self.config
    }

    /// Switching power on the transmission lines, `P = N*C*V^2*f*a` per
    /// class.
    ///
    /// The clock rate is taken from the timing spec (`f = 1/tCK`, the CA bus
    /// runs at half rate). Reported separately; no other total includes it.
    pub fn compute_dynamic(
        &self,
        spec: &MemSpec,
        workload: &Workload,
    ) -> Result<DynamicPowerBreakdown, ModelError> {
        let t_ck = spec.timing.t_ck;
        if t_ck <= 0.0 {
            return Err(ModelError::Domain(format!(
                "clock period must be positive, got {}",
                t_ck
            )));
        }
        let cfg = &self.config;

        let rd_duty = workload.rdsch_percent / 100.0;
        let wr_duty = workload.wrsch_percent / 100.0;
        let v2 = spec.power.vddq * spec.power.vddq;
        let f_clock = 1.0 / t_ck;
        let f_ca = f_clock / 2.0;

        let num_dq = cfg.subchannel_width as f64;
        let num_dqs = (cfg.subchannel_width / 8 * 2) as f64;

        let p_dq = num_dq * cfg.c_dq * v2 * f_clock * 0.5 * (rd_duty + wr_duty);
        let p_ca = 14.0 * cfg.c_ca * v2 * f_ca * 0.5 * cfg.ca_util;
        // Differential pairs toggle every cycle, both wires.
        let p_ck = 2.0 * 2.0 * cfg.c_ck * v2 * f_clock;
        let p_dqs = num_dqs * 2.0 * cfg.c_dqs * v2 * f_clock * (rd_duty + wr_duty);

        Ok(DynamicPowerBreakdown {
            p_dq,
            p_ca,
            p_ck,
            p_dqs,
            p_total: p_dq + p_ca + p_ck + p_dqs,
        })
    }
}

impl InterfacePowerModel for Ddr5InterfacePowerModel {
    fn compute(
        &self,
        spec: &MemSpec,
        workload: &Workload,
    ) -> Result<InterfacePowerBreakdown, ModelError> {
        let cfg = &self.config;
        let vddq = spec.power.vddq;

        let rd_duty = workload.rdsch_percent / 100.0;
        let wr_duty = workload.wrsch_percent / 100.0;
        let subchannels = cfg.subchannels as f64;

        // Pin counts per subchannel. One strobe pair and one write-clock pair
        // per byte lane; 14 CA pins and one differential clock pair per
        // subchannel; chip selects default to one per rank.
        let num_dq = cfg.subchannel_width as f64;
        let num_dqs = (cfg.subchannel_width / 8 * 2) as f64;
        let num_wck = num_dqs;
        let num_ca = 14.0;
        let num_ck = 2.0;
        let num_cs = cfg.cs_lines.unwrap_or(spec.arch.ranks) as f64;

        let p_pin_wr = termination_power(vddq, cfg.r_on_host, cfg.r_tt_dram_wr);
        let p_pin_rd = driver_power(vddq, cfg.r_on_dram, cfg.r_tt_host);
        let p_pin_ca = termination_power(vddq, cfg.r_on_host, cfg.r_tt_ca);
        let p_pin_ck = termination_power(vddq, cfg.r_on_host, cfg.r_tt_ck);

        // Host drives, DRAM ODT heats.
        let p_dq_write = p_pin_wr * wr_duty * cfg.prob_data_zero * num_dq * subchannels;
        // DRAM drives, its output driver heats.
        let p_dq_read = p_pin_rd * rd_duty * cfg.prob_data_zero * num_dq * subchannels;
        let p_ca = p_pin_ca * cfg.ca_util * cfg.prob_cmd_zero * num_ca * subchannels;
        let p_ck = p_pin_ck * cfg.ck_util * cfg.prob_clock_toggle * num_ck * subchannels;
        // Write clock is only driven during writes; terminated like CK.
        let p_wck = p_pin_ck * wr_duty * cfg.prob_clock_toggle * num_wck * subchannels;
        // Strobe follows the data direction.
        let p_dqs_write = p_pin_wr * wr_duty * cfg.prob_clock_toggle * num_dqs * subchannels;
        let p_dqs_read = p_pin_rd * rd_duty * cfg.prob_clock_toggle * num_dqs * subchannels;
        let p_dqs = p_dqs_write + p_dqs_read;
        let p_cs = p_pin_ca * cfg.cs_util * cfg.prob_cmd_zero * num_cs * subchannels;

        let p_total = p_dq_write + p_dq_read + p_ca + p_ck + p_wck + p_dqs + p_cs;

        Ok(InterfacePowerBreakdown {
            p_dq_write,
            p_dq_read,
            p_ca,
            p_ck,
            p_wck,
            p_dqs,
            p_cs,
            p_total,
        })
    }
}
