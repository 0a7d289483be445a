//! Integration tests for CLI functionality

#[cfg(feature = "cli")]
mod cli_integration_tests {
    use std::fs;
    use tempfile::TempDir;

    use versemeter::cli::commands::{read_verse, LineReport, DEMO_LINES, DEMO_VERSE};
    use versemeter::cli::paths::{config_file_path_with_override, validate_config_path};
    use versemeter::cli::{OutputFormat, PersistentConfig};
    use versemeter::line::StressPolicy;
    use versemeter::verse::analyze_verse;

    #[test]
    fn test_persistent_config_default() {
        let config = PersistentConfig::default();
        assert_eq!(config.threshold, Some(0.5));
        assert_eq!(config.stress_policy, Some(StressPolicy::Ignore));
        assert_eq!(config.format, Some(OutputFormat::Text));
    }

    #[test]
    fn test_config_merge() {
        let base_config = PersistentConfig::default();
        let merged = base_config.merge_with_cli(Some(0.7), None, Some(OutputFormat::Json));

        assert_eq!(merged.threshold(), 0.7);
        assert_eq!(merged.stress_policy(), StressPolicy::Ignore);
        assert_eq!(merged.format(), OutputFormat::Json);
    }

    #[test]
    fn test_config_getters_fall_back() {
        let config = PersistentConfig {
            threshold: None,
            stress_policy: None,
            format: None,
        };
        assert_eq!(config.threshold(), 0.5);
        assert_eq!(config.stress_policy(), StressPolicy::Ignore);
        assert_eq!(config.format(), OutputFormat::Text);
    }

    #[test]
    fn test_config_save_and_load() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("nested").join("config.json");

        let config = PersistentConfig {
            threshold: Some(0.65),
            stress_policy: Some(StressPolicy::Strict),
            format: Some(OutputFormat::Json),
        };
        config.save_to(Some(&path)).unwrap();
        assert!(path.exists());

        let loaded = PersistentConfig::load_from(Some(&path)).unwrap();
        assert_eq!(loaded, config);

        let contents = fs::read_to_string(&path).unwrap();
        assert!(contents.contains("\"strict\""));
        assert!(contents.contains("\"json\""));
    }

    #[test]
    fn test_missing_config_uses_defaults() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("absent.json");
        let loaded = PersistentConfig::load_from(Some(&path)).unwrap();
        assert_eq!(loaded, PersistentConfig::default());
    }

    #[test]
    fn test_corrupt_config_is_an_error() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("config.json");
        fs::write(&path, "{not json").unwrap();
        assert!(PersistentConfig::load_from(Some(&path)).is_err());
    }

    #[test]
    fn test_config_path_validation() {
        let temp_dir = TempDir::new().unwrap();
        assert!(validate_config_path(&temp_dir.path().join("config.json")).is_ok());
        assert!(validate_config_path(&temp_dir.path().join("config.toml")).is_err());
        assert!(validate_config_path(&temp_dir.path().join("config")).is_err());

        let custom = temp_dir.path().join("custom.json");
        assert_eq!(config_file_path_with_override(Some(&custom)).unwrap(), custom);
    }

    #[test]
    fn test_read_verse_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("nekr.txt");
        fs::write(&path, format!("{}\n\n", DEMO_VERSE.join("\n"))).unwrap();

        let file = fs::File::open(&path).unwrap();
        let lines = read_verse(std::io::BufReader::new(file)).unwrap();
        assert_eq!(lines.len(), 6);
        assert_eq!(analyze_verse(&lines, "NEKR").scheme_string(), "121211");
    }

    #[test]
    fn test_demo_reports() {
        let reports: Vec<LineReport> = DEMO_LINES
            .iter()
            .map(|text| LineReport::build(text, StressPolicy::Strict).unwrap())
            .collect();
        let clauses: Vec<&str> = reports.iter().map(|r| r.clause.as_str()).collect();
        assert_eq!(clauses, vec!["е́вы", "о́гу", "а́нники", "и́", "а́ю"]);
    }
}
