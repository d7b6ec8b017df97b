use super::{Component, ComponentKind};

/// The built-in reference catalog served whenever the remote source is
/// unavailable or returns an unusable payload.
///
/// Fixed set of 7 parts, chosen so the fallback path exercises both a
/// compatible and an incompatible CPU/motherboard pairing and both a
/// compatible and an incompatible RAM/motherboard pairing. Deterministic
/// across calls.
pub fn reference_catalog() -> Vec<Component> {
    vec![
        Component::new("1", "Intel Core i5-12400", ComponentKind::Cpu, "Intel")
            .with_socket("LGA1700")
            .with_cores_threads(6, 12),
        Component::new("2", "AMD Ryzen 5 5600X", ComponentKind::Cpu, "AMD")
            .with_socket("AM4")
            .with_cores_threads(6, 12),
        Component::new("3", "MSI B660M-A", ComponentKind::Motherboard, "MSI")
            .with_socket("LGA1700")
            .with_memory_type("DDR4"),
        Component::new("4", "ASUS TUF B550-PLUS", ComponentKind::Motherboard, "ASUS")
            .with_socket("AM4")
            .with_memory_type("DDR4"),
        Component::new(
            "5",
            "Corsair Vengeance LPX 16GB DDR4",
            ComponentKind::Ram,
            "Corsair",
        )
        .with_memory_type("DDR4"),
        Component::new(
            "6",
            "Kingston Fury Beast 32GB DDR5",
            ComponentKind::Ram,
            "Kingston",
        )
        .with_memory_type("DDR5"),
        Component::new("7", "NVIDIA RTX 4060", ComponentKind::Gpu, "NVIDIA").with_vram("8GB"),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reference_catalog_has_seven_entries() {
        assert_eq!(reference_catalog().len(), 7);
    }

    #[test]
    fn test_reference_catalog_is_deterministic() {
        assert_eq!(reference_catalog(), reference_catalog());
    }

    #[test]
    fn test_reference_catalog_ids_are_unique() {
        let catalog = reference_catalog();
        let mut ids: Vec<&str> = catalog.iter().map(|c| c.id.as_str()).collect();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), catalog.len());
    }

    #[test]
    fn test_reference_catalog_covers_both_rule_outcomes() {
        let catalog = reference_catalog();
        let sockets: Vec<&str> = catalog
            .iter()
            .filter(|c| c.kind == ComponentKind::Cpu)
            .map(|c| c.socket.as_str())
            .collect();
        let board_sockets: Vec<&str> = catalog
            .iter()
            .filter(|c| c.kind == ComponentKind::Motherboard)
            .map(|c| c.socket.as_str())
            .collect();
        // each CPU socket has a matching board and a mismatching one
        for socket in &sockets {
            assert!(board_sockets.contains(socket));
            assert!(board_sockets.iter().any(|s| s != socket));
        }

        let ram_types: Vec<&str> = catalog
            .iter()
            .filter(|c| c.kind == ComponentKind::Ram)
            .map(|c| c.memory_type.as_str())
            .collect();
        assert!(ram_types.contains(&"DDR4"));
        assert!(ram_types.contains(&"DDR5"));
    }

    #[test]
    fn test_gpu_has_no_pairing_attributes() {
        let catalog = reference_catalog();
        let gpu = catalog
            .iter()
            .find(|c| c.kind == ComponentKind::Gpu)
            .unwrap();
        assert!(gpu.socket.is_empty());
        assert!(gpu.memory_type.is_empty());
        assert_eq!(gpu.vram, "8GB");
    }
}
