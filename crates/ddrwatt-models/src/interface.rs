//! Interface power model trait.

use ddrwatt_spec::error::ModelError;
use ddrwatt_spec::memspec::MemSpec;
use ddrwatt_spec::workload::Workload;
use dyn_clone::{clone_trait_object, DynClone};

use crate::breakdown::InterfacePowerBreakdown;

/// A model for estimating the power dissipated on the host-facing I/O bus.
///
/// Same purity guarantees as [`crate::core::CorePowerModel`].
pub trait InterfacePowerModel: DynClone {
    /// Returns the interface power breakdown in W.
    fn compute(&self, spec: &MemSpec, workload: &Workload)
        -> Result<InterfacePowerBreakdown, ModelError>;
}

clone_trait_object!(InterfacePowerModel);
