use serde::{Deserialize, Serialize};
use std::fmt;

/// Closed set of component categories the engine understands.
///
/// The wire value is a string; anything outside these four variants fails
/// deserialization, which the catalog source treats as an unusable payload.
/// Keeping the set closed makes the "GPU has no pairwise rule" gap explicit
/// instead of hiding it behind an open string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ComponentKind {
    #[serde(rename = "CPU", alias = "cpu", alias = "Cpu")]
    Cpu,
    #[serde(rename = "Motherboard", alias = "motherboard", alias = "MOTHERBOARD")]
    Motherboard,
    #[serde(rename = "RAM", alias = "ram", alias = "Ram")]
    Ram,
    #[serde(rename = "GPU", alias = "gpu", alias = "Gpu")]
    Gpu,
}

impl fmt::Display for ComponentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ComponentKind::Cpu => write!(f, "CPU"),
            ComponentKind::Motherboard => write!(f, "Motherboard"),
            ComponentKind::Ram => write!(f, "RAM"),
            ComponentKind::Gpu => write!(f, "GPU"),
        }
    }
}

/// A catalog entry.
///
/// `kind` determines which attributes carry meaning: `socket` for CPUs and
/// motherboards, `memory_type` for RAM and motherboards. Inactive attributes
/// are empty strings. `cores`, `threads` and `vram` are informational only
/// and never consulted by the compatibility rules.
///
/// Field names parse case-insensitively for the realistic casings (camelCase
/// on the wire, PascalCase from legacy producers).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Component {
    #[serde(alias = "Id")]
    pub id: String,
    #[serde(alias = "Name")]
    pub name: String,
    #[serde(rename = "type", alias = "Type")]
    pub kind: ComponentKind,
    #[serde(alias = "Manufacturer")]
    pub manufacturer: String,
    #[serde(default, alias = "Socket")]
    pub socket: String,
    #[serde(default, alias = "MemoryType")]
    pub memory_type: String,
    #[serde(default, alias = "Cores")]
    pub cores: u32,
    #[serde(default, alias = "Threads")]
    pub threads: u32,
    #[serde(default, alias = "Vram")]
    pub vram: String,
}

impl Component {
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        kind: ComponentKind,
        manufacturer: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            kind,
            manufacturer: manufacturer.into(),
            socket: String::new(),
            memory_type: String::new(),
            cores: 0,
            threads: 0,
            vram: String::new(),
        }
    }

    pub fn with_socket(mut self, socket: impl Into<String>) -> Self {
        self.socket = socket.into();
        self
    }

    pub fn with_memory_type(mut self, memory_type: impl Into<String>) -> Self {
        self.memory_type = memory_type.into();
        self
    }

    pub fn with_cores_threads(mut self, cores: u32, threads: u32) -> Self {
        self.cores = cores;
        self.threads = threads;
        self
    }

    pub fn with_vram(mut self, vram: impl Into<String>) -> Self {
        self.vram = vram.into();
        self
    }
}
