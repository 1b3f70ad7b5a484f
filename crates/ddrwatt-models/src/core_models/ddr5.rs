//! DDR5 core power model.

use ddrwatt_spec::error::ModelError;
use ddrwatt_spec::memspec::MemSpec;
use ddrwatt_spec::workload::Workload;

use crate::breakdown::CorePowerBreakdown;
use crate::core::CorePowerModel;

/// Baseline current subtracted from IDD0/IPP0 in the activate/precharge term.
///
/// Datasheet IDD0 covers a full row cycle that starts and ends precharged,
/// which argues for the precharged standby baseline; published first-order
/// models disagree and subtract active standby instead. The choice is a model
/// parameter rather than a constant.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ActPreBaseline {
    /// Subtract IDD2N/IPP2N (precharged standby).
    #[default]
    PrechargedStandby,
    /// Subtract IDD3N/IPP3N (active standby).
    ActiveStandby,
}

/// A first-order power model of the DDR5 DRAM core.
///
/// Follows the classic datasheet methodology: each contribution is a rail
/// voltage times an incremental current times the duty cycle of the operation
/// it belongs to, summed per rail.
/// 1) Background power blends the normal and power-down standby currents of
///    the precharged and active bank states.
/// 2) Refresh power is the extra current of a refresh window over active
///    standby, weighted by `tRFC1/tREFI`.
/// 3) Read/write power is the extra burst current over active standby,
///    weighted directly by the scheduling shares.
/// 4) Activate/precharge power is the extra row-cycle current over the
///    configured baseline, weighted by `(tRAS+tRP)/tRRDsch` on VDD and
///    `tRAS/tRRDsch` on VPP. Both duties saturate at 1 when rows are
///    scheduled faster than a cycle can physically complete.
#[derive(Debug, Clone, Default)]
pub struct Ddr5CorePowerModel {
    act_pre_baseline: ActPreBaseline,
}

impl Ddr5CorePowerModel {
    /// Creates the model with the default activate/precharge baseline.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates the model with an explicit activate/precharge baseline.
    pub fn with_baseline(act_pre_baseline: ActPreBaseline) -> Self {
        Self { act_pre_baseline }
    }
}

impl CorePowerModel for Ddr5CorePowerModel {
    fn compute(
        &self,
        spec: &MemSpec,
        workload: &Workload,
    ) -> Result<CorePowerBreakdown, ModelError> {
        let p = &spec.power;
        let t = &spec.timing;

        if t.t_ck <= 0.0 {
            return Err(ModelError::Domain(format!(
                "clock period must be positive, got {}",
                t.t_ck
            )));
        }
        if t.refi == 0 {
            return Err(ModelError::Domain(
                "refresh interval REFI is zero, refresh must eventually occur".to_string(),
            ));
        }

        let vdd = p.vdd;
        let vpp = p.vpp;

        let t_ras = t.ras as f64 * t.t_ck;
        let t_rp = t.rp as f64 * t.t_ck;
        let t_rfc1 = t.rfc1 as f64 * t.t_ck;
        let t_refi = t.refi as f64 * t.t_ck;

        let bnk_pre = workload.bnk_pre_percent / 100.0;
        let pd_pre = workload.cke_lo_pre_percent / 100.0;
        let pd_act = workload.cke_lo_act_percent / 100.0;
        let rd = workload.rdsch_percent / 100.0;
        let wr = workload.wrsch_percent / 100.0;

        // Standby power of each bank state, power-down residency blended in,
        // then mixed by the precharge occupancy.
        let i_pre_bg = (1.0 - pd_pre) * p.idd2n + pd_pre * p.idd2p;
        let p_pre_stby = vdd * i_pre_bg;
        let i_act_bg = (1.0 - pd_act) * p.idd3n + pd_act * p.idd3p;
        let p_act_stby = vdd * i_act_bg;
        let p_background_vdd = bnk_pre * p_pre_stby + (1.0 - bnk_pre) * p_act_stby;

        // Refresh: extra current over active standby for the fraction of time
        // spent inside a refresh window, on both rails.
        let duty_ref = t_rfc1 / t_refi;
        let p_ref_vdd = vdd * (p.idd5b - p.idd3n) * duty_ref;
        let p_ref_vpp = vpp * (p.ipp5b - p.ipp3n) * duty_ref;
        let p_ref = p_ref_vdd + p_ref_vpp;

        // Read/write bursts: the scheduling shares already are duty cycles.
        let p_rd = vdd * (p.idd4r - p.idd3n) * rd;
        let p_wr = vdd * (p.idd4w - p.idd3n) * wr;

        // Row cycles. tRRDsch == 0 means no row activity at all. VPP is only
        // pumped while the wordline is up, so its duty excludes tRP.
        let t_rrdsch = workload.trrdsch_ns * 1e-9;
        let (duty_act_pre, duty_act_vpp) = if t_rrdsch > 0.0 {
            (
                ((t_ras + t_rp) / t_rrdsch).min(1.0),
                (t_ras / t_rrdsch).min(1.0),
            )
        } else {
            (0.0, 0.0)
        };
        let (base_vdd, base_vpp) = match self.act_pre_baseline {
            ActPreBaseline::PrechargedStandby => (p.idd2n, p.ipp2n),
            ActPreBaseline::ActiveStandby => (p.idd3n, p.ipp3n),
        };
        let p_act_pre_vdd = vdd * (p.idd0 - base_vdd) * duty_act_pre;
        let p_act_vpp = vpp * (p.ipp0 - base_vpp) * duty_act_vpp;
        let p_act_pre = p_act_pre_vdd + p_act_vpp;

        let p_vdd = p_background_vdd + p_rd + p_wr + p_ref_vdd + p_act_pre_vdd;
        let p_vpp = p_ref_vpp + p_act_vpp;

        Ok(CorePowerBreakdown {
            p_pre_stby,
            p_act_stby,
            p_act_pre,
            p_rd,
            p_wr,
            p_ref,
            p_vdd,
            p_vpp,
            p_total: p_vdd + p_vpp,
        })
    }
}
