// tests/unit_config.rs
//! Tests for `ranker.toml` loading, validation and shared-link settings.

use std::fs;
use tempfile::TempDir;

use ranker_core::cli::args::GraphArgs;
use ranker_core::cli::handlers::resolve_settings;
use ranker_core::config::{Config, GraphSettings, CONFIG_FILE};
use ranker_core::error::RankerError;
use ranker_core::graph::{AdjacencyEntry, MatrixFormula};

fn write_config(content: &str) -> TempDir {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join(CONFIG_FILE), content).unwrap();
    dir
}

#[test]
fn test_empty_file_gives_defaults() {
    let config = Config::parse_toml("").unwrap();
    assert_eq!(config, Config::default());
    assert_eq!(config.power.matrix_formula, MatrixFormula::Simple);
    assert_eq!(config.power.max_iter, 10);
    assert!((config.power.iter_speed - 1.0).abs() < f64::EPSILON);
    assert!((config.power.damping - 0.8).abs() < f64::EPSILON);
}

#[test]
fn test_full_config_parses() {
    let config = Config::parse_toml(
        r#"
graph = "D:A;"

[power]
matrix_formula = "google"
max_iter = 40
iter_speed = 2.5
damping = 0.85

[[nodes]]
name = "A"
children = "B, C"

[[nodes]]
name = "B"
children = "C"
"#,
    )
    .unwrap();

    assert_eq!(config.power.matrix_formula, MatrixFormula::Google);
    assert_eq!(config.power.max_iter, 40);
    assert_eq!(config.nodes.len(), 2);

    let settings = config.to_settings().unwrap();
    assert_eq!(
        settings.graph,
        vec![
            AdjacencyEntry::new("A", vec!["B".into(), "C".into()]),
            AdjacencyEntry::new("B", vec!["C".into()]),
            AdjacencyEntry::new("D", vec!["A".into()]),
        ]
    );
    assert!((settings.damping.value() - 0.85).abs() < f64::EPSILON);
}

#[test]
fn test_partial_power_table_keeps_defaults() {
    let config = Config::parse_toml("[power]\nmax_iter = 25\n").unwrap();
    assert_eq!(config.power.max_iter, 25);
    assert_eq!(config.power.matrix_formula, MatrixFormula::Simple);
    assert!(config.nodes.is_empty());
}

#[test]
fn test_malformed_toml_is_a_parse_error() {
    let err = Config::parse_toml("[power\nmax_iter = ").unwrap_err();
    assert!(matches!(err, RankerError::ConfigParse(_)));

    let err = Config::parse_toml("[power]\nmatrix_formula = \"pagerank\"\n").unwrap_err();
    assert!(matches!(err, RankerError::ConfigParse(_)));
}

#[test]
fn test_out_of_range_values_are_rejected() {
    let cases = [
        ("[power]\nmax_iter = 5\n", "max_iter"),
        ("[power]\nmax_iter = 101\n", "max_iter"),
        ("[power]\niter_speed = 0.05\n", "iter_speed"),
        ("[power]\niter_speed = 3.5\n", "iter_speed"),
    ];
    for (toml, field) in cases {
        let err = Config::parse_toml(toml).unwrap().to_settings().unwrap_err();
        assert!(
            matches!(err, RankerError::InvalidSetting { name, .. } if name == field),
            "{toml}"
        );
    }

    let err = Config::parse_toml("[power]\ndamping = 1.0\n")
        .unwrap()
        .to_settings()
        .unwrap_err();
    assert!(matches!(err, RankerError::InvalidDamping(_)));
}

#[test]
fn test_range_bounds_are_inclusive() {
    let config = Config::parse_toml("[power]\nmax_iter = 100\niter_speed = 0.1\n").unwrap();
    assert!(config.to_settings().is_ok());
    let config = Config::parse_toml("[power]\nmax_iter = 10\niter_speed = 3.0\n").unwrap();
    assert!(config.to_settings().is_ok());
}

#[test]
fn test_load_local_reads_file() {
    let dir = write_config("[power]\nmatrix_formula = \"stochastic\"\n");
    let config = ranker_core::config::io::load_local(dir.path()).unwrap();
    assert_eq!(config.power.matrix_formula, MatrixFormula::Stochastic);
}

#[test]
fn test_load_local_without_file_gives_defaults() {
    let dir = TempDir::new().unwrap();
    let config = ranker_core::config::io::load_local(dir.path()).unwrap();
    assert_eq!(config, Config::default());
}

#[test]
fn test_load_from_missing_file_reports_path() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("absent.toml");
    match Config::load_from(&path) {
        Err(RankerError::Io { path: p, .. }) => assert_eq!(p, path),
        other => panic!("expected Io error, got {other:?}"),
    }
}

#[test]
fn test_share_params_round_trip() {
    let settings = GraphSettings::from_share_params("A:B,C;B:A;C:A;", "2", "40", "1.5").unwrap();
    assert_eq!(settings.matrix_formula, MatrixFormula::Google);
    assert_eq!(settings.max_iter, 40);
    assert!((settings.iter_speed - 1.5).abs() < f64::EPSILON);
    assert_eq!(settings.share_graph(), "A:B,C;B:A;C:A;");
}

#[test]
fn test_share_params_reject_bad_values() {
    assert!(matches!(
        GraphSettings::from_share_params("A:B;", "7", "10", "1"),
        Err(RankerError::InvalidSetting { name: "matrix_formula", .. })
    ));
    assert!(matches!(
        GraphSettings::from_share_params("A:B;", "0", "ten", "1"),
        Err(RankerError::InvalidSetting { name: "max_iter", .. })
    ));
    assert!(matches!(
        GraphSettings::from_share_params("A:B;", "0", "10", "9"),
        Err(RankerError::InvalidSetting { name: "iter_speed", .. })
    ));
}

#[test]
fn test_flags_override_config_file() {
    let dir = write_config(
        "[power]\nmatrix_formula = \"simple\"\nmax_iter = 20\n\n[[nodes]]\nname = \"A\"\nchildren = \"B\"\n",
    );
    let args = GraphArgs {
        graph: Some("X:Y;Y:X;".into()),
        config: Some(dir.path().join(CONFIG_FILE)),
        formula: Some(MatrixFormula::Google),
        speed: Some(2.0),
        ..GraphArgs::default()
    };

    let settings = resolve_settings(&args).unwrap();
    assert_eq!(settings.matrix_formula, MatrixFormula::Google);
    assert_eq!(settings.max_iter, 20);
    assert!((settings.iter_speed - 2.0).abs() < f64::EPSILON);
    assert_eq!(settings.share_graph(), "X:Y;Y:X;");
}

#[test]
fn test_formula_parses_names_and_codes() {
    assert_eq!("Google".parse::<MatrixFormula>().unwrap(), MatrixFormula::Google);
    assert_eq!("1".parse::<MatrixFormula>().unwrap(), MatrixFormula::Stochastic);
    assert!("3".parse::<MatrixFormula>().is_err());
    for formula in MatrixFormula::ALL {
        assert_eq!(MatrixFormula::from_code(formula.code()).unwrap(), formula);
    }
}
