//! Published network bandwidth per EC2 instance type (baseline / burst)

/// Label used for instance types missing from [`BANDWIDTH_TABLE`]
pub const UNKNOWN_BANDWIDTH: &str = "unknown";

pub const BANDWIDTH_TABLE: &[(&str, &str)] = &[
    ("t3.micro", "32 Mbps"),
    ("t3.small", "128 Mbps"),
    ("t3.medium", "256 Mbps"),
    ("t3.large", "512 Mbps"),
    ("t3.xlarge", "1 Gbps"),
    ("m5.large", "750 Mbps"),
    ("m5.xlarge", "1.25 Gbps"),
    ("c5n.xlarge", "5 Gbps"),
    ("c5n.2xlarge", "10 Gbps"),
    ("c5n.4xlarge", "15 Gbps"),
    ("c5n.9xlarge", "50 Gbps"),
    ("c5n.18xlarge", "100 Gbps"),
];

/// Bandwidth class for an instance type, or `"unknown"`
pub fn bandwidth_for(instance_type: &str) -> &'static str {
    BANDWIDTH_TABLE
        .iter()
        .find(|(name, _)| *name == instance_type)
        .map(|(_, bandwidth)| *bandwidth)
        .unwrap_or(UNKNOWN_BANDWIDTH)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known() {
        assert_eq!(bandwidth_for("t3.micro"), "32 Mbps");
        assert_eq!(bandwidth_for("c5n.xlarge"), "5 Gbps");
        assert_eq!(bandwidth_for("c5n.18xlarge"), "100 Gbps");
    }

    #[test]
    fn test_unknown() {
        assert_eq!(bandwidth_for("r7g.medium"), "unknown");
        assert_eq!(bandwidth_for(""), "unknown");
    }

    #[test]
    fn test_no_duplicate_keys() {
        let mut names: Vec<_> = BANDWIDTH_TABLE.iter().map(|(name, _)| *name).collect();
        names.sort_unstable();
        names.dedup();
        assert_eq!(names.len(), BANDWIDTH_TABLE.len());
    }
}
