use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn drawme_cmd(temp: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("drawme").expect("binary exists");
    cmd.env("XDG_CONFIG_HOME", temp.path().join("config"))
        .env("XDG_CACHE_HOME", temp.path().join("cache"))
        .env_remove("RUST_LOG");
    cmd
}

fn png_files(dir: &std::path::Path) -> Vec<std::path::PathBuf> {
    let mut files: Vec<_> = std::fs::read_dir(dir)
        .map(|entries| {
            entries
                .filter_map(|entry| entry.ok().map(|e| e.path()))
                .filter(|path| path.extension().is_some_and(|ext| ext == "png"))
                .collect()
        })
        .unwrap_or_default();
    files.sort();
    files
}

#[test]
fn drawme_help_prints_usage() {
    let temp = TempDir::new().unwrap();
    drawme_cmd(&temp)
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Freehand drawing canvas with undo/redo and PNG export",
        ));
}

#[test]
fn no_script_prints_usage() {
    let temp = TempDir::new().unwrap();
    drawme_cmd(&temp)
        .assert()
        .success()
        .stdout(predicate::str::contains("drawme --script FILE"));
}

#[test]
fn missing_script_fails() {
    let temp = TempDir::new().unwrap();
    drawme_cmd(&temp)
        .args(["--script", "/nonexistent/drawme-script.txt"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to read script"));
}

#[test]
fn malformed_script_reports_line() {
    let temp = TempDir::new().unwrap();
    let script = temp.path().join("bad.txt");
    std::fs::write(&script, "down 1 1\nwiggle\n").unwrap();

    drawme_cmd(&temp)
        .arg("--script")
        .arg(&script)
        .assert()
        .failure()
        .stderr(predicate::str::contains("line 2: unknown command 'wiggle'"));
}

#[test]
fn script_export_writes_png() {
    let temp = TempDir::new().unwrap();
    let out = temp.path().join("out");
    let script = temp.path().join("draw.txt");
    std::fs::write(
        &script,
        "\
# red diagonal, then a blue tap
color red
brush 8
down 10 10
move 60 60
up 60 60
color #0000FF
down 30 5
up 30 5
undo
redo
export
",
    )
    .unwrap();

    drawme_cmd(&temp)
        .args(["--width", "80", "--height", "80", "--no-share", "--no-notify"])
        .arg("--script")
        .arg(&script)
        .arg("--output-dir")
        .arg(&out)
        .assert()
        .success()
        .stdout(predicate::str::contains("Drawme").and(predicate::str::contains(".png")));

    let files = png_files(&out);
    assert_eq!(files.len(), 1, "expected one export, found {files:?}");

    let name = files[0].file_name().unwrap().to_string_lossy().into_owned();
    let digits = name
        .strip_prefix("Drawme")
        .and_then(|rest| rest.strip_suffix(".png"))
        .unwrap();
    assert!(!digits.is_empty() && digits.chars().all(|c| c.is_ascii_digit()));

    let bytes = std::fs::read(&files[0]).unwrap();
    assert_eq!(&bytes[..8], &[137, 80, 78, 71, 13, 10, 26, 10]);
}

#[test]
fn script_from_stdin() {
    let temp = TempDir::new().unwrap();
    let out = temp.path().join("stdin-out");

    drawme_cmd(&temp)
        .args(["--width", "40", "--height", "40", "--no-share", "--no-notify"])
        .args(["--script", "-"])
        .arg("--output-dir")
        .arg(&out)
        .write_stdin("down 1 1\nmove 30 30\nup 30 30\nexport\n")
        .assert()
        .success();

    assert_eq!(png_files(&out).len(), 1);
}

#[test]
fn init_config_writes_file_once() {
    let temp = TempDir::new().unwrap();
    let config_path = temp.path().join("drawme.toml");

    drawme_cmd(&temp)
        .arg("--init-config")
        .arg("--config")
        .arg(&config_path)
        .assert()
        .success()
        .stdout(predicate::str::contains("Wrote default configuration"));

    let contents = std::fs::read_to_string(&config_path).unwrap();
    assert!(contents.contains("[drawing]"));
    assert!(contents.contains("clear_policy = \"discard-redo\""));

    drawme_cmd(&temp)
        .arg("--init-config")
        .arg("--config")
        .arg(&config_path)
        .assert()
        .failure()
        .stderr(predicate::str::contains("already exists"));
}
