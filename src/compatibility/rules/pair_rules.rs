use crate::compatibility::domain::{CompatibilityResult, Component};

/// CPU against motherboard: compatible iff the sockets match exactly
/// (case-sensitive). Two empty sockets compare equal and report compatible;
/// no constraint was expressed on either side.
///
/// On mismatch the result carries exactly one issue naming both socket
/// values.
pub fn cpu_motherboard(cpu: &Component, board: &Component) -> CompatibilityResult {
    if cpu.socket == board.socket {
        CompatibilityResult::compatible(format!(
            "✅ CPU {} fits motherboard {} (Socket: {})",
            cpu.name, board.name, cpu.socket
        ))
    } else {
        CompatibilityResult::incompatible(
            format!(
                "❌ CPU {} does NOT fit motherboard {} (CPU: {}, Board: {})",
                cpu.name, board.name, cpu.socket, board.socket
            ),
            vec![format!(
                "Socket mismatch: CPU={}, Board={}",
                cpu.socket, board.socket
            )],
        )
    }
}

/// RAM against motherboard: compatible iff the memory types match exactly.
///
/// The incompatible branch records no rule-level issue; for the RAM pair,
/// issue attribution happens during build aggregation, which appends a
/// fixed marker instead of detailed text.
pub fn ram_motherboard(ram: &Component, board: &Component) -> CompatibilityResult {
    if ram.memory_type == board.memory_type {
        CompatibilityResult::compatible(format!(
            "✅ RAM {} fits motherboard {} (Type: {})",
            ram.name, board.name, ram.memory_type
        ))
    } else {
        CompatibilityResult::incompatible(
            format!(
                "❌ RAM {} does NOT fit motherboard {} (RAM: {}, Board: {})",
                ram.name, board.name, ram.memory_type, board.memory_type
            ),
            Vec::new(),
        )
    }
}

/// Substitution result for a lookup miss. Rules are never invoked with an
/// absent component; callers hand out this verdict instead.
pub fn components_not_found() -> CompatibilityResult {
    CompatibilityResult::incompatible(
        "Components not found",
        vec!["Missing component data".to_string()],
    )
}
