use assert_cmd::Command;
use std::fs;

fn write_script(dir: &tempfile::TempDir, name: &str, content: &str) -> std::path::PathBuf {
    let path = dir.path().join(name);
    fs::write(&path, content).expect("failed to write script");
    path
}

#[test]
fn compile_prints_json_ir_for_a_value() {
    let dir = tempfile::tempdir().unwrap();
    let script = write_script(&dir, "list.story", "[1, a.b]");

    let output = Command::cargo_bin("storyscript")
        .unwrap()
        .arg("compile")
        .arg(&script)
        .output()
        .expect("failed to spawn storyscript binary");

    assert!(output.status.success(), "stderr: {}", String::from_utf8_lossy(&output.stderr));
    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(
        value,
        serde_json::json!({
            "$OBJECT": "list",
            "items": [1, {"$OBJECT": "path", "paths": ["a", "b"]}]
        })
    );
}

#[test]
fn compile_writes_the_output_file() {
    let dir = tempfile::tempdir().unwrap();
    let script = write_script(&dir, "cmp.story", "x > 3");
    let out = dir.path().join("out.json");

    Command::cargo_bin("storyscript")
        .unwrap()
        .args(["compile", "--rule", "expression", "--pretty", "-o"])
        .arg(&out)
        .arg(&script)
        .assert()
        .success();

    let value: serde_json::Value = serde_json::from_str(&fs::read_to_string(&out).unwrap()).unwrap();
    assert_eq!(value[0]["expression"], "{} > {}");
}

#[test]
fn syntax_errors_exit_with_a_report() {
    let dir = tempfile::tempdir().unwrap();
    let script = write_script(&dir, "bad.story", "obj.run(a: ");

    let output = Command::cargo_bin("storyscript")
        .unwrap()
        .args(["compile", "--rule", "mutation"])
        .arg(&script)
        .output()
        .unwrap();

    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Error: syntax error in"), "{}", stderr);
    assert!(stderr.contains("bad.story at line 1, column"), "{}", stderr);
    assert!(stderr.contains("1|    obj.run(a: "), "{}", stderr);
    assert!(stderr.contains('^'), "{}", stderr);
}

#[test]
fn unclosed_list_error_carries_its_hint() {
    let dir = tempfile::tempdir().unwrap();
    let script = write_script(&dir, "open.story", "[1, 2");

    let output = Command::cargo_bin("storyscript")
        .unwrap()
        .arg("compile")
        .arg(&script)
        .output()
        .unwrap();

    assert_eq!(output.status.code(), Some(1));
    assert!(String::from_utf8_lossy(&output.stderr).contains("Missing closing bracket for list"));
}

#[test]
fn dump_cst_prints_the_tree_before_the_ir() {
    let dir = tempfile::tempdir().unwrap();
    let script = write_script(&dir, "dump.story", "[1]");

    let output = Command::cargo_bin("storyscript")
        .unwrap()
        .args(["compile", "--dump", "cst"])
        .arg(&script)
        .output()
        .unwrap();

    assert!(output.status.success(), "stderr: {}", String::from_utf8_lossy(&output.stderr));
    let stdout = String::from_utf8_lossy(&output.stdout);
    let json_line = stdout.lines().last().expect("json line");
    assert!(stdout.lines().count() > 1, "{}", stdout);
    assert!(stdout.contains("list"), "{}", stdout);
    let value: serde_json::Value = serde_json::from_str(json_line).unwrap();
    assert_eq!(value, serde_json::json!({"$OBJECT": "list", "items": [1]}));
}

#[test]
fn missing_file_is_reported() {
    Command::cargo_bin("storyscript")
        .unwrap()
        .args(["compile", "does-not-exist.story"])
        .assert()
        .failure();
}
