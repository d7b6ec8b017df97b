use serde::{Deserialize, Serialize};

/// A sparse selection of component ids to evaluate jointly.
///
/// One optional slot per component kind. An empty string is treated the same
/// as an unset slot. The GPU slot is accepted for completeness but no
/// pairwise rule consumes it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BuildRequest {
    #[serde(default, alias = "CpuId")]
    pub cpu_id: Option<String>,
    #[serde(default, alias = "MotherboardId")]
    pub motherboard_id: Option<String>,
    #[serde(default, alias = "RamId")]
    pub ram_id: Option<String>,
    #[serde(default, alias = "GpuId")]
    pub gpu_id: Option<String>,
}

impl BuildRequest {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_cpu(mut self, id: impl Into<String>) -> Self {
        self.cpu_id = Some(id.into());
        self
    }

    pub fn with_motherboard(mut self, id: impl Into<String>) -> Self {
        self.motherboard_id = Some(id.into());
        self
    }

    pub fn with_ram(mut self, id: impl Into<String>) -> Self {
        self.ram_id = Some(id.into());
        self
    }

    pub fn with_gpu(mut self, id: impl Into<String>) -> Self {
        self.gpu_id = Some(id.into());
        self
    }

    pub fn cpu(&self) -> Option<&str> {
        filled(&self.cpu_id)
    }

    pub fn motherboard(&self) -> Option<&str> {
        filled(&self.motherboard_id)
    }

    pub fn ram(&self) -> Option<&str> {
        filled(&self.ram_id)
    }

    pub fn gpu(&self) -> Option<&str> {
        filled(&self.gpu_id)
    }
}

fn filled(slot: &Option<String>) -> Option<&str> {
    slot.as_deref().filter(|id| !id.is_empty())
}
