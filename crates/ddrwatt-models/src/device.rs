//! Device composer binding a datasheet and workload to power models.

use std::rc::Rc;

use ddrwatt_spec::error::ModelError;
use ddrwatt_spec::memspec::MemSpec;
use ddrwatt_spec::workload::Workload;

use crate::breakdown::{CorePowerBreakdown, DevicePowerBreakdown, InterfacePowerBreakdown};
use crate::core::CorePowerModel;
use crate::interface::InterfacePowerModel;

/// One DRAM device (chip) paired with its power models.
///
/// The breakdowns kept on the device are memoized results, not authoritative
/// state: every `compute_*` call rederives them from the datasheet and
/// workload and overwrites the cache. The records behind the `Rc`s are
/// read-only and safe to share between devices; the device itself is not,
/// so concurrent callers must either use one instance per computation or
/// serialize access.
#[derive(Clone)]
pub struct DramDevice {
    spec: Rc<MemSpec>,
    workload: Rc<Workload>,
    core_model: Option<Box<dyn CorePowerModel>>,
    interface_model: Option<Box<dyn InterfacePowerModel>>,
    core_power: Option<CorePowerBreakdown>,
    interface_power: Option<InterfacePowerBreakdown>,
    total_power: Option<DevicePowerBreakdown>,
}

impl DramDevice {
    /// Creates a device with both a core and an interface model.
    pub fn new(
        spec: Rc<MemSpec>,
        workload: Rc<Workload>,
        core_model: Box<dyn CorePowerModel>,
        interface_model: Box<dyn InterfacePowerModel>,
    ) -> Self {
        Self {
            spec,
            workload,
            core_model: Some(core_model),
            interface_model: Some(interface_model),
            core_power: None,
            interface_power: None,
            total_power: None,
        }
    }

    /// Creates a device that models core power only.
    pub fn core_only(
        spec: Rc<MemSpec>,
        workload: Rc<Workload>,
        core_model: Box<dyn CorePowerModel>,
    ) -> Self {
        Self {
            spec,
            workload,
            core_model: Some(core_model),
            interface_model: None,
            core_power: None,
            interface_power: None,
            total_power: None,
        }
    }

    /// Creates a device that models interface power only.
    pub fn interface_only(
        spec: Rc<MemSpec>,
        workload: Rc<Workload>,
        interface_model: Box<dyn InterfacePowerModel>,
    ) -> Self {
        Self {
            spec,
            workload,
            core_model: None,
            interface_model: Some(interface_model),
            core_power: None,
            interface_power: None,
            total_power: None,
        }
    }

    /// Returns the datasheet this device was built from.
    pub fn spec(&self) -> &MemSpec {
        &self.spec
    }

    /// Returns the workload this device was built from.
    pub fn workload(&self) -> &Workload {
        &self.workload
    }

    /// Computes, caches and returns the core power breakdown.
    pub fn compute_core(&mut self) -> Result<CorePowerBreakdown, ModelError> {
        let model = self.core_model.as_ref().ok_or_else(|| {
            ModelError::Configuration("no core model bound to this device".to_string())
        })?;
        let breakdown = model.compute(&self.spec, &self.workload)?;
        self.core_power = Some(breakdown);
        Ok(breakdown)
    }

    /// Computes, caches and returns the interface power breakdown.
    pub fn compute_interface(&mut self) -> Result<InterfacePowerBreakdown, ModelError> {
        let model = self.interface_model.as_ref().ok_or_else(|| {
            ModelError::Configuration("no interface model bound to this device".to_string())
        })?;
        let breakdown = model.compute(&self.spec, &self.workload)?;
        self.interface_power = Some(breakdown);
        Ok(breakdown)
    }

    /// Computes both parts and returns the merged breakdown.
    ///
    /// Requires both models to be bound; fails with a configuration error
    /// otherwise.
    pub fn compute_all(&mut self) -> Result<DevicePowerBreakdown, ModelError> {
        let core = self.compute_core()?;
        let interface = self.compute_interface()?;
        let merged = DevicePowerBreakdown::merge(core, interface);
        self.total_power = Some(merged);
        Ok(merged)
    }

    /// Last computed core breakdown, if any.
    pub fn core_power(&self) -> Option<&CorePowerBreakdown> {
        self.core_power.as_ref()
    }

    /// Last computed interface breakdown, if any.
    pub fn interface_power(&self) -> Option<&InterfacePowerBreakdown> {
        self.interface_power.as_ref()
    }

    /// Last computed merged breakdown, if any.
    pub fn total_power(&self) -> Option<&DevicePowerBreakdown> {
        self.total_power.as_ref()
    }
}
