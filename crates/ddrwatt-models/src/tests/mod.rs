//! Tests for the DDR5 power models and their composition.

mod test_core;

use ddrwatt_spec::memspec::{MemArchitectureSpec, MemPowerSpec, MemSpec, MemTimingSpec};
use ddrwatt_spec::workload::Workload;

/// Datasheet loosely following a Micron 16Gb DDR5-4800 x8 part.
pub(crate) fn sample_spec() -> MemSpec {
    MemSpec {
        memory_id: "MICRON_16Gb_DDR5-4800_8Gbx8".to_string(),
        memory_type: "DDR5".to_string(),
        arch: MemArchitectureSpec {
            width: 8,
            banks: 32,
            bank_groups: 8,
            ranks: 1,
            columns: 1024,
            rows: 65536,
            burst_length: 16,
            data_rate: 2,
            devices: 8,
        },
        power: MemPowerSpec {
            vdd: 1.1,
            vpp: 1.8,
            vddq: 1.1,
            idd0: 0.118,
            idd2n: 0.046,
            idd3n: 0.105,
            idd4r: 0.210,
            idd4w: 0.245,
            idd5b: 0.262,
            idd6n: 0.030,
            idd2p: 0.030,
            idd3p: 0.070,
            ipp0: 0.0023,
            ipp2n: 0.0015,
            ipp3n: 0.0023,
            ipp4r: 0.0023,
            ipp4w: 0.0023,
            ipp5b: 0.0076,
            ipp6n: 0.0013,
            ipp2p: 0.0013,
            ipp3p: 0.0015,
        },
        timing: MemTimingSpec {
            t_ck: 0.416e-9,
            ras: 76,
            rcd: 34,
            rp: 34,
            rfc1: 708,
            rfc2: 498,
            rfcsb: 277,
            refi: 9390,
        },
    }
}

/// A mixed read/write workload with no power-down residency.
pub(crate) fn sample_workload() -> Workload {
    Workload {
        bnk_pre_percent: 25.0,
        cke_lo_pre_percent: 0.0,
        cke_lo_act_percent: 0.0,
        page_hit_percent: 50.0,
        rdsch_percent: 30.0,
        rd_data_low_percent: 50.0,
        wrsch_percent: 15.0,
        wr_data_low_percent: 50.0,
        term_rdsch_percent: 0.0,
        term_wrsch_percent: 0.0,
        system_trc_ns: 46.0,
        trrdsch_ns: 15.0,
    }
}

/// All activity ratios at zero.
pub(crate) fn zero_workload() -> Workload {
    Workload {
        bnk_pre_percent: 0.0,
        cke_lo_pre_percent: 0.0,
        cke_lo_act_percent: 0.0,
        page_hit_percent: 0.0,
        rdsch_percent: 0.0,
        rd_data_low_percent: 0.0,
        wrsch_percent: 0.0,
        wr_data_low_percent: 0.0,
        term_rdsch_percent: 0.0,
        term_wrsch_percent: 0.0,
        system_trc_ns: 0.0,
        trrdsch_ns: 0.0,
    }
}
