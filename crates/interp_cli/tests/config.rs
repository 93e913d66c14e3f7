//! Integration tests for configuration loading and command wiring.

use std::path::PathBuf;

use interp_cli::commands::interpolate::{self, InterpolateArgs};
use interp_cli::config::{build_config_with_env, CliArgs, CliConfig, ConfigError, LogLevel, OutputFormat};
use interp_core::math::interpolators::InterpolationKind;

fn write_temp(name: &str, content: &str) -> PathBuf {
    let path = std::env::temp_dir().join(format!("interp_cli_{}_{}.toml", name, std::process::id()));
    std::fs::write(&path, content).unwrap();
    path
}

fn no_env(_: &str) -> Option<String> {
    None
}

#[test]
fn test_from_file() {
    let path = write_temp(
        "from_file",
        r#"
            log_level = "debug"
            kind = "cubic"
            output = "json"
        "#,
    );

    let config = CliConfig::from_file(&path).unwrap();
    std::fs::remove_file(&path).ok();

    assert_eq!(config.log_level, LogLevel::Debug);
    assert_eq!(config.kind, InterpolationKind::Cubic);
    assert_eq!(config.output, OutputFormat::Json);
}

#[test]
fn test_missing_file() {
    let path = std::env::temp_dir().join("interp_cli_does_not_exist.toml");
    assert!(matches!(
        CliConfig::from_file(&path),
        Err(ConfigError::FileError(_))
    ));
}

#[test]
fn test_invalid_toml_value() {
    let path = write_temp("invalid", r#"output = "xml""#);
    let result = CliConfig::from_file(&path);
    std::fs::remove_file(&path).ok();

    assert!(matches!(result, Err(ConfigError::FileError(_))));
}

#[test]
fn test_layering_file_env_cli() {
    let path = write_temp(
        "layering",
        r#"
            log_level = "info"
            kind = "cubic"
            reliable_distance = 2.0
        "#,
    );
    let cli = CliArgs {
        config_file: Some(path.clone()),
        format: Some("json".to_string()),
        ..Default::default()
    };

    let config = build_config_with_env(&cli, |key| match key {
        "INTERP_KIND" => Some("linear".to_string()),
        "INTERP_RELIABLE_DISTANCE" => Some("3.5".to_string()),
        _ => None,
    })
    .unwrap();
    std::fs::remove_file(&path).ok();

    assert_eq!(config.log_level, LogLevel::Info);
    assert_eq!(config.kind, InterpolationKind::Linear);
    assert_eq!(config.reliable_distance, Some(3.5));
    assert_eq!(config.output, OutputFormat::Json);
}

#[test]
fn test_configured_run() {
    let config = build_config_with_env(
        &CliArgs {
            quiet_extrapolation: true,
            ..Default::default()
        },
        no_env,
    )
    .unwrap();
    assert!(!config.extrapolation_warning);

    let args = InterpolateArgs {
        x: "-1,1".to_string(),
        y: "-2,2".to_string(),
        at: "-3,0,3".to_string(),
        extrapolate: true,
        ..Default::default()
    };
    let mut buf = Vec::new();
    interpolate::run(&args, &config, &mut buf).unwrap();

    let text = String::from_utf8(buf).unwrap();
    let ys: Vec<f64> = text
        .lines()
        .skip(1)
        .map(|line| line.split_whitespace().nth(1).unwrap().parse().unwrap())
        .collect();
    assert_eq!(ys.len(), 3);
    for (got, want) in ys.iter().zip([-6.0, 0.0, 6.0]) {
        approx::assert_abs_diff_eq!(*got, want, epsilon = 1e-12);
    }
}
