//! Integration tests for the `shapes` binary.

use std::fs;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

/// A `shapes` invocation isolated from the user's config and environment.
fn shapes(home: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("shapes").unwrap();
    cmd.current_dir(home.path())
        .env("HOME", home.path())
        .env("XDG_CONFIG_HOME", home.path().join(".config"))
        .env("NO_COLOR", "1")
        .env_remove("RUST_LOG")
        .env_remove("SHAPES_DEFAULTS__FORMAT")
        .env_remove("SHAPES_DEFAULTS__SET")
        .env_remove("SHAPES_OUTPUT__NO_COLOR");
    cmd
}

// ── total ─────────────────────────────────────────────────────────────────────

#[test]
fn total_text_for_builtin_set() {
    let home = TempDir::new().unwrap();
    shapes(&home)
        .args(["total", "--set", "ocp", "--format", "text"])
        .assert()
        .success()
        .stdout("Total Area: 62184.10865289668\n");
}

#[test]
fn total_all_formats_in_order() {
    let home = TempDir::new().unwrap();
    shapes(&home)
        .args(["total", "--set", "isp", "--format", "all"])
        .assert()
        .success()
        .stdout(
            "Total Area: 70000\n\
             { \"Total Area\" : 70000 }\n\
             <span><strong>Total Area: </strong></span><span>70000</span>\n",
        );
}

#[test]
fn total_uses_config_defaults() {
    let home = TempDir::new().unwrap();
    let config = home.path().join("custom.toml");
    fs::write(&config, "[defaults]\nformat = \"json\"\nset = \"isp\"\n").unwrap();

    shapes(&home)
        .args(["--config", config.to_str().unwrap(), "total"])
        .assert()
        .success()
        .stdout("{ \"Total Area\" : 70000 }\n");
}

#[test]
fn total_env_overrides_format() {
    let home = TempDir::new().unwrap();
    shapes(&home)
        .env("SHAPES_DEFAULTS__FORMAT", "html")
        .args(["total", "--set", "isp"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with("<span>"));
}

#[test]
fn total_from_toml_file() {
    let home = TempDir::new().unwrap();
    let file = home.path().join("shapes.toml");
    fs::write(
        &file,
        "[[shapes]]\nkind = \"square\"\nside = 10\n\n[[shapes]]\nkind = \"rectangle\"\nheight = 2\nwidth = 5\n",
    )
    .unwrap();

    shapes(&home)
        .args(["total", "--file", file.to_str().unwrap(), "--format", "text"])
        .assert()
        .success()
        .stdout("Total Area: 110\n");
}

#[test]
fn total_of_empty_file_is_zero() {
    let home = TempDir::new().unwrap();
    let file = home.path().join("empty.json");
    fs::write(&file, r#"{ "shapes": [] }"#).unwrap();

    shapes(&home)
        .args(["total", "--file", file.to_str().unwrap(), "--format", "text"])
        .assert()
        .success()
        .stdout(predicate::str::contains("contains no shapes"))
        .stdout(predicate::str::ends_with("Total Area: 0\n"));
}

#[test]
fn quiet_keeps_results() {
    let home = TempDir::new().unwrap();
    let file = home.path().join("empty.json");
    fs::write(&file, r#"{ "shapes": [] }"#).unwrap();

    shapes(&home)
        .args(["--quiet", "total", "--file", file.to_str().unwrap()])
        .assert()
        .success()
        .stdout("Total Area: 0\n");
}

// ── errors and exit codes ─────────────────────────────────────────────────────

#[test]
fn unknown_set_exits_not_found() {
    let home = TempDir::new().unwrap();
    shapes(&home)
        .args(["total", "--set", "nope"])
        .assert()
        .code(3)
        .stderr(predicate::str::contains("nope"))
        .stderr(predicate::str::contains("shapes list"));
}

#[test]
fn missing_file_exits_not_found() {
    let home = TempDir::new().unwrap();
    shapes(&home)
        .args(["total", "--file", "absent.toml"])
        .assert()
        .code(3);
}

#[test]
fn unknown_kind_in_file_exits_user_error() {
    let home = TempDir::new().unwrap();
    let file = home.path().join("odd.toml");
    fs::write(&file, "[[shapes]]\nkind = \"hexagon\"\nside = 1\n").unwrap();

    shapes(&home)
        .args(["total", "--file", file.to_str().unwrap()])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("hexagon"));
}

#[test]
fn overflowing_total_in_file_exits_user_error() {
    let home = TempDir::new().unwrap();
    let file = home.path().join("huge.toml");
    fs::write(
        &file,
        "[[shapes]]\nkind = \"square\"\nside = 1e154\n\n[[shapes]]\nkind = \"square\"\nside = 1e154\n",
    )
    .unwrap();

    shapes(&home)
        .args(["total", "--file", file.to_str().unwrap()])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("too large"));
}

#[test]
fn invalid_config_format_exits_config_error() {
    let home = TempDir::new().unwrap();
    shapes(&home)
        .env("SHAPES_DEFAULTS__FORMAT", "yaml")
        .args(["total", "--set", "ocp"])
        .assert()
        .code(4);
}

#[test]
fn missing_explicit_config_exits_config_error() {
    let home = TempDir::new().unwrap();
    shapes(&home)
        .args(["--config", "nowhere.toml", "list"])
        .assert()
        .code(4);
}

#[test]
fn bad_arguments_exit_user_error() {
    let home = TempDir::new().unwrap();
    shapes(&home)
        .args(["total", "--set", "ocp", "--file", "shapes.toml"])
        .assert()
        .code(2);
}

#[test]
fn no_color_env_accepts_standard_values() {
    let home = TempDir::new().unwrap();
    for value in ["1", "true", ""] {
        shapes(&home)
            .env("NO_COLOR", value)
            .args(["total", "--set", "isp", "--format", "text"])
            .assert()
            .success()
            .stdout("Total Area: 70000\n");
    }
}

// ── area ──────────────────────────────────────────────────────────────────────

#[test]
fn area_of_circle_by_diameter() {
    let home = TempDir::new().unwrap();
    shapes(&home)
        .args(["area", "circle", "--diameter", "100"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Area: 7853.98"));
}

#[test]
fn area_of_cube_reports_volume() {
    let home = TempDir::new().unwrap();
    shapes(&home)
        .args(["--quiet", "area", "cube", "--side", "100"])
        .assert()
        .success()
        .stdout("Area: 60000\nVolume: 1000000\n");
}

#[test]
fn area_unknown_kind_exits_user_error() {
    let home = TempDir::new().unwrap();
    shapes(&home)
        .args(["area", "hexagon", "--side", "1"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("equilateral-triangle"));
}

#[test]
fn area_negative_dimension_exits_user_error() {
    let home = TempDir::new().unwrap();
    shapes(&home)
        .args(["area", "square", "--side", "-4"])
        .assert()
        .code(2);
}

#[test]
fn area_overflowing_side_exits_user_error() {
    let home = TempDir::new().unwrap();
    shapes(&home)
        .args(["area", "square", "--side", "1e200"])
        .assert()
        .code(2)
        .stdout(predicate::str::contains("inf").not())
        .stderr(predicate::str::contains("invalid side for square"));
}

#[test]
fn area_foreign_flag_exits_user_error() {
    let home = TempDir::new().unwrap();
    shapes(&home)
        .args(["area", "square", "--side", "1", "--width", "2"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("--width"));
}

// ── list / demo ───────────────────────────────────────────────────────────────

#[test]
fn list_csv() {
    let home = TempDir::new().unwrap();
    shapes(&home)
        .args(["list", "--format", "csv"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with(
            "name,shapes,total_area,total_volume\n",
        ))
        .stdout(predicate::str::contains("isp,2,70000,1000000"));
}

#[test]
fn list_names() {
    let home = TempDir::new().unwrap();
    shapes(&home)
        .args(["list", "--format", "list"])
        .assert()
        .success()
        .stdout("first-design\nsrp\nocp\nlsp\nisp\n");
}

#[test]
fn demo_dip() {
    let home = TempDir::new().unwrap();
    shapes(&home)
        .args(["--quiet", "demo", "dip"])
        .assert()
        .success()
        .stdout(
            "<span><strong>Total Area: </strong></span><span>100</span>\n\
             Total Area: 100\n",
        );
}

#[test]
fn demo_ocp_prints_text_json_html_text() {
    let home = TempDir::new().unwrap();
    shapes(&home)
        .args(["--quiet", "demo", "ocp"])
        .assert()
        .success()
        .stdout(
            "Total Area: 62184.10865289668\n\
             { \"Total Area\" : 62184.10865289668 }\n\
             <span><strong>Total Area: </strong></span><span>62184.10865289668</span>\n\
             Total Area: 62184.10865289668\n",
        );
}

#[test]
fn demo_lsp_prints_title_and_check() {
    let home = TempDir::new().unwrap();
    shapes(&home)
        .args(["demo", "lsp"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Liskov Substitution Principle (LSP)"))
        .stdout(predicate::str::contains("New Rectangle Area: 20000"));
}

// ── init / config / completions ───────────────────────────────────────────────

#[test]
fn init_local_then_config_get() {
    let home = TempDir::new().unwrap();
    shapes(&home).args(["init", "--local"]).assert().success();
    assert!(home.path().join(".shapes.toml").exists());

    shapes(&home)
        .args(["config", "get", "defaults.set"])
        .assert()
        .success()
        .stdout("ocp\n");
}

#[test]
fn init_refuses_to_overwrite_without_force() {
    let home = TempDir::new().unwrap();
    let local = home.path().join(".shapes.toml");
    fs::write(&local, "[defaults]\nset = \"isp\"\n").unwrap();

    shapes(&home).args(["init", "--local"]).assert().success();
    assert_eq!(
        fs::read_to_string(&local).unwrap(),
        "[defaults]\nset = \"isp\"\n"
    );

    shapes(&home)
        .args(["init", "--local", "--force"])
        .assert()
        .success();
    assert!(fs::read_to_string(&local).unwrap().contains("ocp"));
}

#[test]
fn config_get_unknown_key_exits_config_error() {
    let home = TempDir::new().unwrap();
    shapes(&home)
        .args(["config", "get", "no.such.key"])
        .assert()
        .code(4);
}

#[test]
fn completions_bash() {
    let home = TempDir::new().unwrap();
    shapes(&home)
        .args(["completions", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("shapes"));
}

#[test]
fn version_flag() {
    let home = TempDir::new().unwrap();
    shapes(&home)
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}
