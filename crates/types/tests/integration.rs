//! Integration tests for types

#[cfg(test)]
mod tests {
    use crdprep_types::*;
    use serde::Deserialize;
    use std::path::PathBuf;

    #[derive(Deserialize)]
    struct PolicyHolder {
        policy: DownloadPolicy,
    }

    #[test]
    fn test_policy_deserializes_from_toml() {
        let holder: PolicyHolder = toml::from_str(r#"policy = "Always""#).unwrap();
        assert_eq!(holder.policy, DownloadPolicy::Always);
    }

    #[test]
    fn test_policy_file_accepts_cli_spellings() {
        let holder: PolicyHolder = toml::from_str(r#"policy = "always""#).unwrap();
        assert_eq!(holder.policy, DownloadPolicy::Always);

        for spelling in ["if-not-present", "IfNotPresent", "ifnotpresent"] {
            let holder: PolicyHolder =
                toml::from_str(&format!("policy = \"{spelling}\"")).unwrap();
            assert_eq!(holder.policy, DownloadPolicy::IfNotPresent);
        }

        assert!(toml::from_str::<PolicyHolder>(r#"policy = "sometimes""#).is_err());
    }

    #[test]
    fn test_fetch_outcome_serialization() {
        let outcome = FetchOutcome::Fetched {
            archive_path: PathBuf::from("/data/cache/x/crds.tar.gz"),
            replaced_existing: false,
            size: 42,
            sha256: "ab".repeat(32),
        };
        let json = serde_json::to_value(&outcome).unwrap();
        assert_eq!(json["status"], "fetched");
        assert_eq!(json["size"], 42);

        let skipped = serde_json::to_value(FetchOutcome::Skipped).unwrap();
        assert_eq!(skipped["status"], "skipped");
    }

    #[test]
    fn test_freshness_reason_serialization() {
        let decision = FreshnessDecision::fetch(FreshnessReason::ArchiveMissingOrEmpty);
        let json = serde_json::to_value(&decision).unwrap();
        assert_eq!(json["skip_fetch"], false);
        assert_eq!(json["reason"], "archive_missing_or_empty");
        assert!(FreshnessDecision::skip().skip_fetch);
    }
}
