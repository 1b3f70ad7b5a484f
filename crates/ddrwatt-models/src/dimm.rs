//! DIMM aggregator summing device breakdowns.

use std::rc::Rc;

use ddrwatt_spec::error::ModelError;
use ddrwatt_spec::memspec::MemSpec;
use ddrwatt_spec::workload::Workload;
use log::debug;

use crate::breakdown::{CorePowerBreakdown, DevicePowerBreakdown, InterfacePowerBreakdown};
use crate::core::CorePowerModel;
use crate::device::DramDevice;
use crate::interface::InterfacePowerModel;

/// A memory module: one device per chip reported by the datasheet, all
/// sharing the same datasheet and workload, plus a single channel-level
/// interface.
///
/// Core power scales with the number of chips, so every device carries a
/// clone of the shared core model and their breakdowns are summed key-wise.
/// The command/data channel exists once per module, so the interface model
/// stays with the DIMM and its contribution is resolved exactly once, not
/// once per chip. Same concurrency contract as [`DramDevice`]: cached
/// aggregates are overwritten on every call.
pub struct Dimm {
    spec: Rc<MemSpec>,
    workload: Rc<Workload>,
    devices: Vec<DramDevice>,
    interface_model: Box<dyn InterfacePowerModel>,
    core_power: Option<CorePowerBreakdown>,
    interface_power: Option<InterfacePowerBreakdown>,
    total_power: Option<DevicePowerBreakdown>,
}

impl Dimm {
    /// Creates a DIMM with `spec.arch.devices` devices.
    pub fn new(
        spec: Rc<MemSpec>,
        workload: Rc<Workload>,
        core_model: Box<dyn CorePowerModel>,
        interface_model: Box<dyn InterfacePowerModel>,
    ) -> Self {
        let devices = (0..spec.arch.devices)
            .map(|_| DramDevice::core_only(spec.clone(), workload.clone(), core_model.clone()))
            .collect();
        Self {
            spec,
            workload,
            devices,
            interface_model,
            core_power: None,
            interface_power: None,
            total_power: None,
        }
    }

    /// Returns the datasheet shared by all devices on the module.
    pub fn spec(&self) -> &MemSpec {
        &self.spec
    }

    /// Returns the workload shared by all devices on the module.
    pub fn workload(&self) -> &Workload {
        &self.workload
    }

    /// Returns the devices on the module.
    pub fn devices(&self) -> &[DramDevice] {
        &self.devices
    }

    /// Computes the module-level breakdown: per-device core power summed
    /// across all chips plus one channel-level interface contribution.
    ///
    /// A DIMM with zero devices is meaningless and fails with a configuration
    /// error rather than reporting zero watts as a valid result.
    pub fn compute_all(&mut self) -> Result<DevicePowerBreakdown, ModelError> {
        if self.devices.is_empty() {
            return Err(ModelError::Configuration(
                "DIMM has no DRAM devices".to_string(),
            ));
        }

        let mut core_sum = CorePowerBreakdown::default();
        for device in &mut self.devices {
            core_sum += device.compute_core()?;
        }
        debug!(
            "aggregated core power of {} devices: {:.4} W",
            self.devices.len(),
            core_sum.p_total
        );

        let interface = self.interface_model.compute(&self.spec, &self.workload)?;
        let merged = DevicePowerBreakdown::merge(core_sum, interface);

        self.core_power = Some(core_sum);
        self.interface_power = Some(interface);
        self.total_power = Some(merged);
        Ok(merged)
    }

    /// Last computed aggregate core breakdown, if any.
    pub fn core_power(&self) -> Option<&CorePowerBreakdown> {
        self.core_power.as_ref()
    }

    /// Last computed channel interface breakdown, if any.
    pub fn interface_power(&self) -> Option<&InterfacePowerBreakdown> {
        self.interface_power.as_ref()
    }

    /// Last computed module breakdown, if any.
    pub fn total_power(&self) -> Option<&DevicePowerBreakdown> {
        self.total_power.as_ref()
    }
}
