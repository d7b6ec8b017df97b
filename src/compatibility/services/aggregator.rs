use crate::compatibility::domain::{BuildRequest, CompatibilityResult, Component};
use crate::compatibility::rules;

/// Marker issue recorded when the RAM pair is incompatible. The RAM rule's
/// own message still reaches the caller; only this generic marker lands in
/// the aggregated issue list.
const RAM_PAIR_ISSUE: &str = "RAM issue";

/// BuildAggregator - composes pairwise rule evaluations into one verdict.
///
/// Evaluation order is fixed regardless of how the request was populated:
/// the CPU pair first, the RAM pair second. A slot pair is evaluated only
/// when both of its ids are filled. The GPU slot is never evaluated; no
/// pairwise rule exists for it.
pub struct BuildAggregator;

impl BuildAggregator {
    /// Aggregates the pairwise checks for `build`, resolving ids through
    /// `resolve`. A lookup miss substitutes the not-found verdict for that
    /// pair. With no evaluable pair the verdict is vacuously compatible:
    /// empty message, no issues.
    pub fn aggregate<'a, R>(build: &BuildRequest, resolve: R) -> CompatibilityResult
    where
        R: Fn(&str) -> Option<&'a Component>,
    {
        let mut messages: Vec<String> = Vec::new();
        let mut issues: Vec<String> = Vec::new();

        if let (Some(cpu_id), Some(board_id)) = (build.cpu(), build.motherboard()) {
            let check = match (resolve(cpu_id), resolve(board_id)) {
                (Some(cpu), Some(board)) => rules::cpu_motherboard(cpu, board),
                _ => rules::components_not_found(),
            };
            messages.push(check.message);
            if !check.is_compatible {
                issues.extend(check.issues);
            }
        }

        if let (Some(ram_id), Some(board_id)) = (build.ram(), build.motherboard()) {
            let check = match (resolve(ram_id), resolve(board_id)) {
                (Some(ram), Some(board)) => rules::ram_motherboard(ram, board),
                _ => rules::components_not_found(),
            };
            messages.push(check.message);
            if !check.is_compatible {
                issues.push(RAM_PAIR_ISSUE.to_string());
            }
        }

        CompatibilityResult {
            is_compatible: issues.is_empty(),
            message: messages.join("\n"),
            issues,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::compatibility::domain::reference_catalog;

    fn aggregate(build: &BuildRequest) -> CompatibilityResult {
        let catalog = reference_catalog();
        BuildAggregator::aggregate(build, |id| catalog.iter().find(|c| c.id == id))
    }

    #[test]
    fn test_empty_request_is_vacuously_compatible() {
        let result = aggregate(&BuildRequest::new());
        assert!(result.is_compatible);
        assert!(result.message.is_empty());
        assert!(result.issues.is_empty());
    }

    #[test]
    fn test_motherboard_only_is_vacuously_compatible() {
        let result = aggregate(&BuildRequest::new().with_motherboard("3"));
        assert!(result.is_compatible);
        assert!(result.message.is_empty());
        assert!(result.issues.is_empty());
    }

    #[test]
    fn test_fully_compatible_build() {
        let build = BuildRequest::new()
            .with_cpu("1")
            .with_motherboard("3")
            .with_ram("5")
            .with_gpu("7");
        let result = aggregate(&build);
        assert!(result.is_compatible);
        assert!(result.issues.is_empty());
        assert_eq!(result.message.lines().count(), 2);
    }

    #[test]
    fn test_cpu_mismatch_ram_match_yields_one_cpu_issue() {
        // Ryzen (AM4) on an LGA1700 board, DDR4 RAM on a DDR4 board
        let build = BuildRequest::new()
            .with_cpu("2")
            .with_motherboard("3")
            .with_ram("5");
        let result = aggregate(&build);
        assert!(!result.is_compatible);
        assert_eq!(result.issues.len(), 1);
        assert!(result.issues[0].contains("Socket mismatch"));

        // CPU message first, RAM message second
        let lines: Vec<&str> = result.message.lines().collect();
        assert_eq!(lines.len(), 2);
        assert!(lines[0].contains("CPU"));
        assert!(lines[1].contains("RAM"));
    }

    #[test]
    fn test_ram_mismatch_records_generic_marker() {
        // DDR5 module on a DDR4 board
        let build = BuildRequest::new()
            .with_cpu("1")
            .with_motherboard("3")
            .with_ram("6");
        let result = aggregate(&build);
        assert!(!result.is_compatible);
        assert_eq!(result.issues, vec!["RAM issue".to_string()]);
        // the detailed memory types stay in the message, not the issue list
        assert!(result.message.contains("DDR5"));
    }

    #[test]
    fn test_both_pairs_incompatible() {
        let build = BuildRequest::new()
            .with_cpu("2")
            .with_motherboard("3")
            .with_ram("6");
        let result = aggregate(&build);
        assert!(!result.is_compatible);
        assert_eq!(result.issues.len(), 2);
        assert!(result.issues[0].contains("Socket mismatch"));
        assert_eq!(result.issues[1], "RAM issue");
    }

    #[test]
    fn test_lookup_miss_substitutes_not_found() {
        let build = BuildRequest::new().with_cpu("999").with_motherboard("3");
        let result = aggregate(&build);
        assert!(!result.is_compatible);
        assert_eq!(result.message, "Components not found");
        assert_eq!(result.issues, vec!["Missing component data".to_string()]);
    }

    #[test]
    fn test_ram_lookup_miss_records_marker() {
        let build = BuildRequest::new().with_ram("999").with_motherboard("3");
        let result = aggregate(&build);
        assert!(!result.is_compatible);
        assert_eq!(result.issues, vec!["RAM issue".to_string()]);
    }

    #[test]
    fn test_gpu_slot_is_never_evaluated() {
        let build = BuildRequest::new().with_gpu("999");
        let result = aggregate(&build);
        assert!(result.is_compatible);
        assert!(result.message.is_empty());
    }

    #[test]
    fn test_cpu_without_motherboard_is_not_evaluated() {
        let build = BuildRequest::new().with_cpu("1").with_ram("5");
        let result = aggregate(&build);
        assert!(result.is_compatible);
        assert!(result.message.is_empty());
    }
}
