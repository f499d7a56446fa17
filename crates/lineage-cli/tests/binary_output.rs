//! End-to-end tests that run the `lineage` binary

use std::fs;
use std::process::{Command, Output};

const MODEL: &str = r#"{
    "classes": [
        { "name": "ComposedElement", "members": [
            { "kind": "method", "name": "log_name", "params": ["self"], "returns": "None" }
        ] },
        { "name": "Implementation", "constructor": [
            { "name": "element", "type": "ComposedElement" },
            { "name": "label", "type": "str" }
        ] }
    ]
}"#;

/// Run the binary against a freshly written model file
fn run_cli(args: &[&str]) -> Result<Output, Box<dyn std::error::Error>> {
    let temp_dir = tempfile::tempdir()?;
    let model_path = temp_dir.path().join("model.json");
    fs::write(&model_path, MODEL)?;

    let model = model_path.to_string_lossy().to_string();
    let mut cmd_args: Vec<&str> = args.to_vec();
    cmd_args.extend(["--model", model.as_str()]);

    let output = Command::new(env!("CARGO_BIN_EXE_lineage"))
        .args(&cmd_args)
        .env("LINEAGE_LOG_LEVEL", "off")
        .env_remove("RUST_LOG")
        .output()?;
    Ok(output)
}

#[test]
fn diagram_prints_markup() {
    let output = run_cli(&["diagram", "--class", "Implementation"]).unwrap();
    assert!(output.status.success());
    assert_eq!(
        String::from_utf8_lossy(&output.stdout),
        "classDiagram\nclass Implementation{\n}\nImplementation *-- ComposedElement\nclass ComposedElement{\n+log_name() None\n}\n"
    );
}

#[test]
fn diagram_up_flips_composition_glyph() {
    let output = run_cli(&["diagram", "--class", "Implementation", "--direction", "up"]).unwrap();
    assert!(output.status.success());
    assert!(String::from_utf8_lossy(&output.stdout).contains("Implementation --* ComposedElement"));
}

#[test]
fn unknown_class_fails() {
    let output = run_cli(&["diagram", "--class", "Missing"]).unwrap();
    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("Unknown type: Missing"));
}

#[test]
fn classes_lists_declared_order() {
    let output = run_cli(&["classes"]).unwrap();
    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.starts_with("ComposedElement\nImplementation\n"));
    assert!(stdout.contains("Total: 2 classes"));
}
