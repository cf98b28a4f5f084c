use anyhow::Result;
use hype_dial::config::toml_config::TomlConfig;
use hype_dial::domain::model::OutputFormat;
use hype_dial::utils::validation::Validate;
use hype_dial::{CliConfig, Settings};
use clap::Parser;
use tempfile::TempDir;

/// 隨附的範例設定檔必須等同內建預設值
#[test]
fn test_bundled_profile_matches_defaults() -> Result<()> {
    let path = std::path::Path::new(env!("CARGO_MANIFEST_DIR")).join("hype-config.toml");
    let settings = TomlConfig::from_file(&path)?.to_settings();
    settings.validate()?;

    let defaults = Settings::default();
    assert_eq!(settings.endpoint, defaults.endpoint);
    assert_eq!(settings.sample_size(), defaults.sample_size());
    assert_eq!(settings.keywords, defaults.keywords);
    assert_eq!(settings.hype_levels, defaults.hype_levels);
    assert_eq!(
        settings.output_formats,
        vec![OutputFormat::Html, OutputFormat::Svg, OutputFormat::Json]
    );
    Ok(())
}

#[test]
fn test_cli_flags_override_profile() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let profile = temp_dir.path().join("wide.toml");
    std::fs::write(
        &profile,
        r#"
[sampling]
num_pages = 20
page_size = 25

[output]
formats = ["csv"]
"#,
    )?;

    let cli = CliConfig::parse_from([
        "hype-dial",
        "--config",
        profile.to_str().unwrap(),
        "--page-size",
        "50",
        "--width",
        "1500",
    ]);
    let settings = cli.resolve()?;

    assert_eq!(settings.num_pages, 20);
    assert_eq!(settings.page_size, 50);
    assert_eq!(settings.viewport_width, 1500.0);
    assert_eq!(settings.output_formats, vec![OutputFormat::Csv]);
    settings.validate()?;
    Ok(())
}

#[test]
fn test_invalid_profile_fails_validation() -> Result<()> {
    let config = TomlConfig::from_toml_str(
        r#"
[render]
viewport_width = 5.0
"#,
    )?;
    assert!(config.validate().is_err());
    Ok(())
}
