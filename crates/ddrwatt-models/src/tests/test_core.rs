//! Tests for the DDR5 core power model.

use approx::{assert_abs_diff_eq, assert_relative_eq};

use ddrwatt_spec::error::ModelError;

use crate::core::CorePowerModel;
use crate::core_models::ddr5::{ActPreBaseline, Ddr5CorePowerModel};
use crate::tests::{sample_spec, sample_workload, zero_workload};

#[test]
fn totals_decompose_additively() {
    let breakdown = Ddr5CorePowerModel::new()
        .compute(&sample_spec(), &sample_workload())
        .unwrap();
    assert!(breakdown.p_total > 0.0);
    assert_relative_eq!(
        breakdown.p_vdd + breakdown.p_vpp,
        breakdown.p_total,
        max_relative = 1e-9
    );
}

#[test]
fn micron_like_scenario_bounds_background_power() {
    // Datasheet currents written in the raw milliamp figures, as some
    // datasheet transcriptions do; the model does not care about scale.
    let mut spec = sample_spec();
    spec.power.vdd = 1.1;
    spec.power.idd0 = 135.0;
    spec.power.idd2n = 46.0;
    spec.power.idd3n = 105.0;
    spec.power.idd4r = 210.0;
    spec.power.idd4w = 245.0;
    spec.power.idd5b = 10500.0;
    spec.timing.t_ck = 0.416e-9;
    spec.timing.ras = 28;
    spec.timing.rp = 14;
    spec.timing.rfc1 = 350;
    spec.timing.refi = 7800;

    let mut workload = zero_workload();
    workload.bnk_pre_percent = 50.0;
    workload.rdsch_percent = 50.0;
    workload.wrsch_percent = 50.0;
    workload.trrdsch_ns = 4.0;

    let breakdown = Ddr5CorePowerModel::new().compute(&spec, &workload).unwrap();
    assert!(breakdown.p_total > 0.0);

    // Half precharged, half active, no power-down: the blended background
    // sits strictly between the two standby levels.
    let background = 0.5 * breakdown.p_pre_stby + 0.5 * breakdown.p_act_stby;
    assert!(background > 1.1 * 46.0);
    assert!(background < 1.1 * 105.0);
}

#[test]
fn zero_activity_gates_read_write_and_row_cycles_only() {
    let breakdown = Ddr5CorePowerModel::new()
        .compute(&sample_spec(), &zero_workload())
        .unwrap();
    assert_eq!(breakdown.p_rd, 0.0);
    assert_eq!(breakdown.p_wr, 0.0);
    assert_eq!(breakdown.p_act_pre, 0.0);
    // Standby and refresh are not activity-gated.
    assert!(breakdown.p_act_stby > 0.0);
    assert!(breakdown.p_ref > 0.0);
    assert!(breakdown.p_total > 0.0);
}

#[test]
fn refresh_power_follows_the_refresh_duty() {
    let spec = sample_spec();
    let breakdown = Ddr5CorePowerModel::new()
        .compute(&spec, &zero_workload())
        .unwrap();
    // tCK cancels out of tRFC1/tREFI.
    let duty = 708.0 / 9390.0;
    let p = &spec.power;
    let expected = p.vdd * (p.idd5b - p.idd3n) * duty + p.vpp * (p.ipp5b - p.ipp3n) * duty;
    assert_relative_eq!(breakdown.p_ref, expected, max_relative = 1e-9);
}

#[test]
fn row_cycle_duty_saturates_at_one() {
    let spec = sample_spec();
    let mut workload = sample_workload();
    // tRAS + tRP is about 45.8 ns here; schedule rows far faster than that.
    workload.trrdsch_ns = 4.0;
    let breakdown = Ddr5CorePowerModel::new().compute(&spec, &workload).unwrap();
    let p = &spec.power;
    let expected = p.vdd * (p.idd0 - p.idd2n) + p.vpp * (p.ipp0 - p.ipp2n);
    assert_abs_diff_eq!(breakdown.p_act_pre, expected, epsilon = 1e-12);
}

#[test]
fn row_cycle_duty_scales_with_activation_rate() {
    let spec = sample_spec();
    let mut workload = sample_workload();
    workload.trrdsch_ns = 100.0;
    let breakdown = Ddr5CorePowerModel::new().compute(&spec, &workload).unwrap();

    let t_ras = 76.0 * 0.416e-9;
    let t_rp = 34.0 * 0.416e-9;
    let duty_pre = (t_ras + t_rp) / 100.0e-9;
    let duty_vpp = t_ras / 100.0e-9;
    let p = &spec.power;
    let expected =
        p.vdd * (p.idd0 - p.idd2n) * duty_pre + p.vpp * (p.ipp0 - p.ipp2n) * duty_vpp;
    assert_relative_eq!(breakdown.p_act_pre, expected, max_relative = 1e-9);
}

#[test]
fn zero_activation_interval_means_no_row_activity() {
    let mut workload = sample_workload();
    workload.trrdsch_ns = 0.0;
    let breakdown = Ddr5CorePowerModel::new()
        .compute(&sample_spec(), &workload)
        .unwrap();
    assert_eq!(breakdown.p_act_pre, 0.0);
}

#[test]
fn zero_refresh_interval_is_rejected() {
    let mut spec = sample_spec();
    spec.timing.refi = 0;
    match Ddr5CorePowerModel::new()
        .compute(&spec, &sample_workload())
        .unwrap_err()
    {
        ModelError::Domain(msg) => assert!(msg.contains("REFI")),
        other => panic!("expected Domain, got {:?}", other),
    }
}

#[test]
fn non_positive_clock_period_is_rejected() {
    let mut spec = sample_spec();
    spec.timing.t_ck = 0.0;
    match Ddr5CorePowerModel::new()
        .compute(&spec, &sample_workload())
        .unwrap_err()
    {
        ModelError::Domain(msg) => assert!(msg.contains("clock period")),
        other => panic!("expected Domain, got {:?}", other),
    }
}

#[test]
fn read_power_grows_with_read_share() {
    let spec = sample_spec();
    let model = Ddr5CorePowerModel::new();
    // Holds whenever idd4r >= idd3n, as in any sane datasheet.
    let mut last = f64::NEG_INFINITY;
    for rdsch in [0.0, 10.0, 30.0, 60.0, 100.0] {
        let mut workload = sample_workload();
        workload.rdsch_percent = rdsch;
        let breakdown = model.compute(&spec, &workload).unwrap();
        assert!(breakdown.p_rd >= last);
        last = breakdown.p_rd;
    }
}

#[test]
fn full_power_down_uses_the_power_down_currents() {
    let spec = sample_spec();
    let mut workload = sample_workload();
    workload.cke_lo_pre_percent = 100.0;
    workload.cke_lo_act_percent = 100.0;
    let breakdown = Ddr5CorePowerModel::new().compute(&spec, &workload).unwrap();
    assert_abs_diff_eq!(
        breakdown.p_pre_stby,
        spec.power.vdd * spec.power.idd2p,
        epsilon = 1e-12
    );
    assert_abs_diff_eq!(
        breakdown.p_act_stby,
        spec.power.vdd * spec.power.idd3p,
        epsilon = 1e-12
    );
}

#[test]
fn act_pre_baseline_is_configurable() {
    // The sample workload saturates both row-cycle duties at 1, so the two
    // baselines differ by exactly the standby current gap on each rail.
    let spec = sample_spec();
    let workload = sample_workload();
    let pre = Ddr5CorePowerModel::with_baseline(ActPreBaseline::PrechargedStandby)
        .compute(&spec, &workload)
        .unwrap();
    let act = Ddr5CorePowerModel::with_baseline(ActPreBaseline::ActiveStandby)
        .compute(&spec, &workload)
        .unwrap();
    let p = &spec.power;
    let delta = p.vdd * (p.idd3n - p.idd2n) + p.vpp * (p.ipp3n - p.ipp2n);
    assert_relative_eq!(pre.p_act_pre - act.p_act_pre, delta, max_relative = 1e-9);
    assert!(pre.p_act_pre > act.p_act_pre);
}
