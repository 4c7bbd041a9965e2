use std::collections::BTreeMap;

use config::Config;
use config::File;
use serde::Deserialize;
use serde::Serialize;
use tracing::debug;

use super::HostApis;
use super::TargetAddress;
use crate::HostError;
use crate::Result;

/// One tunable parameter of a simulated target
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimulatedParameter {
    pub name: String,
    #[serde(default)]
    pub value: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct SimulatedTarget {
    pub name: String,
    /// User-assigned name. `None` means it mirrors `name`.
    pub display_name: Option<String>,
    pub parameters: Vec<SimulatedParameter>,
}

impl SimulatedTarget {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            display_name: None,
            parameters: Vec::new(),
        }
    }

    pub fn with_display_name(
        mut self,
        display_name: impl Into<String>,
    ) -> Self {
        self.display_name = Some(display_name.into());
        self
    }

    pub fn with_parameter(
        mut self,
        name: impl Into<String>,
        value: f64,
    ) -> Self {
        self.parameters.push(SimulatedParameter {
            name: name.into(),
            value,
        });
        self
    }
}

/// Rack file layout, e.g.
///
/// ```toml
/// [[targets]]
/// index = 1
/// slot = 3
/// name = "Fruity Reeverb 2"
/// display_name = "Hall"
/// params = [{ name = "Decay", value = 0.4 }]
/// ```
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RackConfig {
    #[serde(default)]
    pub targets: Vec<RackTarget>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RackTarget {
    pub index: usize,
    #[serde(default)]
    pub slot: Option<usize>,
    pub name: String,
    #[serde(default)]
    pub display_name: Option<String>,
    #[serde(default)]
    pub params: Vec<SimulatedParameter>,
}

/// In-memory host whose targets are scripted by the caller.
///
/// Stands in for a real host in the demo device and in tests. Lookups against
/// an unknown address or parameter answer with empty values instead of
/// failing, matching a host that treats them as no-ops.
#[derive(Debug, Clone, Default)]
pub struct SimulatedHost {
    targets: BTreeMap<TargetAddress, SimulatedTarget>,
}

impl SimulatedHost {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_rack(rack: RackConfig) -> Result<Self> {
        let mut host = Self::new();
        for entry in rack.targets {
            let address = TargetAddress::new(entry.index, entry.slot);
            let target = SimulatedTarget {
                name: entry.name,
                display_name: entry.display_name,
                parameters: entry.params,
            };
            host.insert_target(address, target)?;
        }
        Ok(host)
    }

    pub fn from_rack_file(path: &str) -> Result<Self> {
        let rack: RackConfig = Config::builder()
            .add_source(File::with_name(path))
            .build()?
            .try_deserialize()?;
        debug!("loaded {} targets from rack file {}", rack.targets.len(), path);
        Self::from_rack(rack)
    }

    pub fn insert_target(
        &mut self,
        address: TargetAddress,
        target: SimulatedTarget,
    ) -> Result<()> {
        if self.targets.contains_key(&address) {
            return Err(HostError::DuplicateTarget(address).into());
        }
        self.targets.insert(address, target);
        Ok(())
    }

    pub fn remove_target(
        &mut self,
        address: &TargetAddress,
    ) -> Option<SimulatedTarget> {
        self.targets.remove(address)
    }

    pub fn set_value(
        &mut self,
        address: &TargetAddress,
        index: usize,
        value: f64,
    ) -> Result<()> {
        let target = self
            .targets
            .get_mut(address)
            .ok_or(HostError::UnknownTarget(*address))?;
        let count = target.parameters.len();
        let parameter = target
            .parameters
            .get_mut(index)
            .ok_or(HostError::ParameterOutOfRange {
                address: *address,
                index,
                count,
            })?;
        parameter.value = value;
        Ok(())
    }

    pub fn addresses(&self) -> impl Iterator<Item = &TargetAddress> {
        self.targets.keys()
    }

    fn parameter(
        &self,
        index: usize,
        address: &TargetAddress,
    ) -> Option<&SimulatedParameter> {
        self.targets.get(address).and_then(|t| t.parameters.get(index))
    }
}

impl HostApis for SimulatedHost {
    fn target_exists(
        &self,
        address: &TargetAddress,
    ) -> bool {
        self.targets.contains_key(address)
    }

    fn parameter_count(
        &self,
        address: &TargetAddress,
    ) -> usize {
        self.targets.get(address).map(|t| t.parameters.len()).unwrap_or(0)
    }

    fn parameter_value(
        &self,
        index: usize,
        address: &TargetAddress,
    ) -> f64 {
        self.parameter(index, address).map(|p| p.value).unwrap_or_default()
    }

    fn parameter_name(
        &self,
        index: usize,
        address: &TargetAddress,
    ) -> String {
        self.parameter(index, address).map(|p| p.name.clone()).unwrap_or_default()
    }

    fn canonical_name(
        &self,
        address: &TargetAddress,
    ) -> String {
        self.targets.get(address).map(|t| t.name.clone()).unwrap_or_default()
    }

    fn display_name(
        &self,
        address: &TargetAddress,
    ) -> String {
        self.targets
            .get(address)
            .map(|t| t.display_name.clone().unwrap_or_else(|| t.name.clone()))
            .unwrap_or_default()
    }
}
