use anyhow::Result;
use serde_json::{Value, json};

use crate::{CliTest, stderr, stdout};

const SAMPLE: &str = "\
x = 10

def foo():
    y = \"hello\"

z = [1, 2, 3]
";

fn scan_json(test: &CliTest, extra: &[&str]) -> Result<(Value, std::process::Output)> {
    let output = test
        .scan_command()
        .args(["--format", "json"])
        .args(extra)
        .output()?;
    let value = serde_json::from_str(&stdout(&output))?;
    Ok((value, output))
}

#[test]
fn test_scan_json_scenario() -> Result<()> {
    let test = CliTest::with_file("sample.py", SAMPLE)?;

    let (value, output) = scan_json(&test, &["sample.py"])?;

    assert_eq!(output.status.code(), Some(0));
    assert_eq!(
        value,
        json!([
            {
                "name": "x",
                "description": "",
                "dataType": "int",
                "defaultValue": 10,
                "exampleUsage": "",
                "scope": "Global",
                "sourceFile": "sample.py",
                "line": 1
            },
            {
                "name": "y",
                "description": "",
                "dataType": "str",
                "defaultValue": "hello",
                "exampleUsage": "",
                "scope": "Function: foo",
                "sourceFile": "sample.py",
                "line": 4
            },
            {
                "name": "z",
                "description": "",
                "dataType": "list",
                "defaultValue": "(None)",
                "exampleUsage": "",
                "scope": "Function: foo",
                "sourceFile": "sample.py",
                "line": 6
            }
        ])
    );

    Ok(())
}

#[test]
fn test_scan_lexical_scope_tracking() -> Result<()> {
    let test = CliTest::with_file("sample.py", SAMPLE)?;

    let (value, _) = scan_json(&test, &["sample.py", "--scope-tracking", "lexical"])?;

    assert_eq!(value[1]["scope"], "Function: foo");
    assert_eq!(value[2]["scope"], "Global");

    Ok(())
}

#[test]
fn test_scan_lexical_from_config() -> Result<()> {
    let test = CliTest::with_file("sample.py", SAMPLE)?;
    test.write_file(".varscoutrc.json", r#"{ "scopeTracking": "lexical" }"#)?;

    let (value, _) = scan_json(&test, &[])?;
    assert_eq!(value[2]["scope"], "Global");

    Ok(())
}

#[test]
fn test_scan_directory_in_file_name_order() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file("pkg/b.py", "beta = 2\n")?;
    test.write_file("pkg/a.py", "alpha = 1\n")?;
    test.write_file("pkg/notes.txt", "gamma = 3\n")?;

    let (value, output) = scan_json(&test, &["pkg"])?;

    let names: Vec<&str> = value
        .as_array()
        .unwrap()
        .iter()
        .map(|r| r["name"].as_str().unwrap())
        .collect();
    assert_eq!(names, vec!["alpha", "beta"]);
    assert!(stderr(&output).contains("Found 2 variables in 2 files"));

    Ok(())
}

#[test]
fn test_scan_config_ignores() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file(".varscoutrc.json", r#"{ "ignores": ["**/migrations/**"] }"#)?;
    test.write_file("app.py", "name = 'app'\n")?;
    test.write_file("migrations/0001.py", "revision = 1\n")?;

    let (value, _) = scan_json(&test, &[])?;

    assert_eq!(value.as_array().unwrap().len(), 1);
    assert_eq!(value[0]["name"], "name");

    Ok(())
}

#[test]
fn test_scan_parse_error_exit_code() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file("good.py", "ok = True\n")?;
    test.write_file("broken.py", "def broken(:\n    pass\n")?;

    let (value, output) = scan_json(&test, &[])?;

    assert_eq!(output.status.code(), Some(1));
    assert_eq!(value.as_array().unwrap().len(), 1);
    assert_eq!(value[0]["name"], "ok");
    assert!(stderr(&output).contains("1 file(s) could not be parsed"));

    Ok(())
}

#[test]
fn test_scan_verbose_reports_parse_error_location() -> Result<()> {
    let test = CliTest::with_file("broken.py", "x = (1,\n")?;

    let output = test.scan_command().args(["broken.py", "-v"]).output()?;

    assert_eq!(output.status.code(), Some(1));
    let err = stderr(&output);
    assert!(err.contains("broken.py"), "stderr: {}", err);
    assert!(!err.contains("use -v for details"), "stderr: {}", err);

    Ok(())
}

#[test]
fn test_scan_table_output() -> Result<()> {
    let test = CliTest::with_file("sample.py", SAMPLE)?;

    let output = test.scan_command().arg("sample.py").output()?;
    let out = stdout(&output);
    let lines: Vec<&str> = out.lines().collect();

    assert_eq!(output.status.code(), Some(0));
    assert_eq!(lines.len(), 4);
    assert!(lines[0].starts_with("Variable"));
    assert!(lines[2].contains("Function: foo"));
    assert!(lines[3].ends_with("sample.py:6"));

    Ok(())
}

#[test]
fn test_scan_html_to_output_file() -> Result<()> {
    let test = CliTest::with_file("sample.py", SAMPLE)?;

    let output = test
        .scan_command()
        .args(["sample.py", "--format", "html", "--output", "vars.html"])
        .output()?;

    assert_eq!(output.status.code(), Some(0));
    assert!(stdout(&output).is_empty());
    assert!(stderr(&output).contains("written to vars.html"));

    let page = test.read_file("vars.html")?;
    assert!(page.contains("<th>Variable Name</th>"));
    assert!(page.contains("<td>Function: foo</td>"));

    Ok(())
}

#[test]
fn test_scan_missing_path_is_error() -> Result<()> {
    let test = CliTest::new()?;

    let output = test.scan_command().arg("nowhere").output()?;

    assert_eq!(output.status.code(), Some(2));
    assert!(stderr(&output).contains("does not exist"));

    Ok(())
}

#[test]
fn test_scan_non_python_file_is_error() -> Result<()> {
    let test = CliTest::with_file("README.md", "# readme\n")?;

    let output = test.scan_command().arg("README.md").output()?;

    assert_eq!(output.status.code(), Some(2));
    assert!(stderr(&output).contains("not a Python file"));

    Ok(())
}

#[test]
fn test_invalid_config_is_error() -> Result<()> {
    let test = CliTest::with_file("app.py", "a = 1\n")?;
    test.write_file(".varscoutrc.json", r#"{ "ignores": ["[invalid"] }"#)?;

    let output = test.scan_command().output()?;

    assert_eq!(output.status.code(), Some(2));
    assert!(stderr(&output).contains("Invalid glob pattern"));

    Ok(())
}

#[test]
fn test_help() -> Result<()> {
    let test = CliTest::new()?;

    let output = test.command().arg("--help").output()?;
    let out = stdout(&output);

    assert!(output.status.success());
    for command in ["scan", "serve", "init", "mcp"] {
        assert!(out.contains(command), "help should list {}", command);
    }

    Ok(())
}
