//! Instance type extraction from result file names

use regex::Regex;
use std::path::Path;
use std::sync::LazyLock;

/// Leading `<family>.<size>` token, e.g. `t3.micro`, `c5n.4xlarge`
static INSTANCE_TYPE_PREFIX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[a-z0-9]+\.[a-z0-9]+").expect("instance type pattern is valid")
});

/// Extract the instance type label from a result file path.
///
/// `c5n.4xlarge_20240105_123456.json` yields `c5n.4xlarge`. Names without a
/// leading `<family>.<size>` token fall back to the stem up to the first
/// underscore, or the whole stem. Never fails.
pub fn extract_instance_type(path: impl AsRef<Path>) -> String {
    let stem = path
        .as_ref()
        .file_stem()
        .map(|s| s.to_string_lossy())
        .unwrap_or_default();

    if let Some(m) = INSTANCE_TYPE_PREFIX.find(&stem) {
        return m.as_str().to_string();
    }

    stem.split('_').next().unwrap_or_default().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_timestamped_name() {
        assert_eq!(
            extract_instance_type("c5n.4xlarge_20240105_123456.json"),
            "c5n.4xlarge"
        );
    }

    #[test]
    fn test_directory_is_ignored() {
        assert_eq!(
            extract_instance_type("/data/results/t3.micro_20240105.json"),
            "t3.micro"
        );
    }

    #[test]
    fn test_plain_instance_type() {
        assert_eq!(extract_instance_type("m5.large.json"), "m5.large");
    }

    #[test]
    fn test_fallback_without_underscore() {
        assert_eq!(extract_instance_type("weird-name.json"), "weird-name");
    }

    #[test]
    fn test_fallback_with_underscore() {
        assert_eq!(extract_instance_type("Local_run_1.json"), "Local");
    }

    #[test]
    fn test_empty_path() {
        assert_eq!(extract_instance_type(""), "");
    }

    mod proptest_tests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            /// Extraction never panics and is deterministic
            #[test]
            fn extraction_is_deterministic(name in ".*") {
                let first = extract_instance_type(&name);
                let second = extract_instance_type(&name);
                prop_assert_eq!(first, second);
            }

            /// Well-formed names always yield their instance type
            #[test]
            fn well_formed_names_round_trip(
                family in "[a-z][a-z0-9]{0,4}",
                size in "[a-z0-9]{1,10}",
                suffix in "[0-9]{0,8}",
            ) {
                let instance_type = format!("{family}.{size}");
                let file = format!("{instance_type}_{suffix}.json");
                prop_assert_eq!(extract_instance_type(&file), instance_type);
            }
        }
    }
}
