use std::fs;
use std::path::Path;

use denox::config::{self, DenoxConfig};
use denox::invocation::build_run_invocation;
use denox::output::{map_cmd_result_to_json, CliResponse};
use denox::{Error, ErrorCode};

fn write_config(dir: &Path, name: &str, content: &str) {
    fs::write(dir.join(name), content).unwrap();
}

#[test]
fn finds_yml_before_yaml() {
    let dir = tempfile::tempdir().unwrap();
    write_config(dir.path(), "denox.yaml", "scripts: {}");
    write_config(dir.path(), "denox.yml", "scripts: {}");

    let found = config::find_config(dir.path()).unwrap();
    assert_eq!(found.file_name().unwrap(), "denox.yml");
}

#[test]
fn missing_config_reports_not_found_with_candidates() {
    let dir = tempfile::tempdir().unwrap();
    let err = config::find_config(dir.path()).unwrap_err();

    assert_eq!(err.code, ErrorCode::ConfigNotFound);
    assert_eq!(
        err.details["tried"],
        serde_json::json!(["denox.yml", "denox.yaml"])
    );
    assert!(!err.hints.is_empty());
}

#[test]
fn loads_a_config_file_from_disk() {
    let dir = tempfile::tempdir().unwrap();
    write_config(
        dir.path(),
        "denox.yml",
        r#"
scripts:
  start:
    file: server.ts
    deno_options:
      allow-net: true
"#,
    );

    let path = config::find_config(dir.path()).unwrap();
    let config = config::load(&path).unwrap();
    assert!(config.script("start").is_ok());
}

#[test]
fn invalid_yaml_reports_the_path() {
    let dir = tempfile::tempdir().unwrap();
    write_config(dir.path(), "denox.yml", "scripts: [broken");

    let path = config::find_config(dir.path()).unwrap();
    let err = config::load(&path).unwrap_err();

    assert_eq!(err.code, ErrorCode::ConfigInvalidYaml);
    let reported = err.details["path"].as_str().unwrap();
    assert!(reported.ends_with("denox.yml"));
}

#[test]
fn config_to_invocation_end_to_end() {
    let dir = tempfile::tempdir().unwrap();
    write_config(
        dir.path(),
        "denox.yml",
        r#"
deno_options:
  quiet: true
  seed: 13
scripts:
  serve:
    file: server.ts
    args: ["--port", "8080"]
    deno_options:
      allow-net: ["deno.land"]
      log-level: debug
"#,
    );

    let path = config::find_config(dir.path()).unwrap();
    let config = config::load(&path).unwrap();
    let invocation = build_run_invocation(&config, "serve", &[]).unwrap();

    assert_eq!(
        invocation.args,
        vec![
            "run",
            "--quiet",
            "--seed",
            "13",
            "--allow-net=deno.land",
            "--log-level debug",
            "server.ts",
            "--port",
            "8080",
        ]
    );
}

#[test]
fn default_config_has_no_scripts() {
    let config = DenoxConfig::default();
    assert!(config.scripts.is_empty());
    assert!(config.deno_options.is_empty());
}

#[test]
fn error_envelope_round_trips_through_the_cli_mapping() {
    let err = Error::script_not_found("serve");
    let (result, exit_code) = map_cmd_result_to_json::<serde_json::Value>(Err(err));

    assert_eq!(exit_code, 4);
    let json = CliResponse::<()>::from_error(&result.unwrap_err())
        .to_json()
        .unwrap();
    assert!(json.contains("\"code\": \"script.not_found\""));
    assert!(json.contains("denox list"));
}
