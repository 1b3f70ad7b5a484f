//! Core power model trait.

use ddrwatt_spec::error::ModelError;
use ddrwatt_spec::memspec::MemSpec;
use ddrwatt_spec::workload::Workload;
use dyn_clone::{clone_trait_object, DynClone};

use crate::breakdown::CorePowerBreakdown;

/// A model for estimating the power consumed by the DRAM core of one device.
///
/// Implementations are pure: `compute` is a deterministic function of the
/// datasheet and workload with no internal mutable state, so a single
/// instance may be shared (or cloned) across any number of devices.
pub trait CorePowerModel: DynClone {
    /// Returns the core power breakdown in W.
    fn compute(&self, spec: &MemSpec, workload: &Workload)
        -> Result<CorePowerBreakdown, ModelError>;
}

clone_trait_object!(CorePowerModel);
