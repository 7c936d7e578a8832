use assert_cmd::cargo;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

/// Helper to convert path to forward slashes for TOML compatibility on Windows
fn path_to_toml_string(path: &std::path::Path) -> String {
    path.display().to_string().replace('\\', "/")
}

/// Run the binary in `dir` and return stdout
fn stdout_of(dir: &std::path::Path, args: &[&str]) -> String {
    let output = cargo::cargo_bin_cmd!("clockangle")
        .current_dir(dir)
        .args(args)
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();
    String::from_utf8(output).unwrap()
}

/// Recompute the truncated answer for a time
fn expected_angle(hour: u64, minute: u64) -> u64 {
    let hour_angle = (hour % 12) as f64 * 30.0 + minute as f64 * 0.5;
    let minute_angle = minute as f64 * 6.0;
    let diff = (hour_angle - minute_angle).abs();
    diff.min(360.0 - diff) as u64
}

#[test]
fn test_default_run_prints_five_questions() {
    let temp_dir = TempDir::new().unwrap();
    let stdout = stdout_of(temp_dir.path(), &[]);

    assert!(stdout.starts_with("🕒 Clock Angle Practice Questions\n\n"));
    for i in 1..=5 {
        assert!(stdout.contains(&format!("\nQ{}: ", i)), "missing Q{}", i);
    }
    assert!(!stdout.contains("Q6:"));
    assert_eq!(stdout.matches("   Answer: ").count(), 5);
    assert!(stdout.trim_end().ends_with('°'));
}

#[test]
fn test_gen_seed_is_reproducible() {
    let temp_dir = TempDir::new().unwrap();
    let first = stdout_of(temp_dir.path(), &["gen", "--seed", "42", "-n", "8"]);
    let second = stdout_of(temp_dir.path(), &["gen", "--seed", "42", "-n", "8"]);

    assert_eq!(first, second);
    assert_eq!(first.matches("Answer:").count(), 8);
}

#[test]
fn test_gen_json_is_consistent() {
    let temp_dir = TempDir::new().unwrap();
    let stdout = stdout_of(
        temp_dir.path(),
        &["gen", "--format", "json", "-n", "25", "--seed", "9"],
    );

    let value: serde_json::Value = serde_json::from_str(&stdout).unwrap();
    let problems = value.as_array().unwrap();
    assert_eq!(problems.len(), 25);

    for problem in problems {
        let hour = problem["hour"].as_u64().unwrap();
        let minute = problem["minute"].as_u64().unwrap();
        let angle = problem["angle"].as_u64().unwrap();
        let period = match problem["period"].as_str().unwrap() {
            "am" => "a.m.",
            "pm" => "p.m.",
            other => panic!("unexpected period {}", other),
        };

        assert!((1..=12).contains(&hour));
        assert!(minute <= 59);
        assert!(angle <= 180);
        assert_eq!(angle, expected_angle(hour, minute));

        let time = format!("{}:{:02} {}", hour, minute, period);
        assert!(problem["question"].as_str().unwrap().contains(&time));
    }
}

#[test]
fn test_gen_rejects_zero_count() {
    let temp_dir = TempDir::new().unwrap();

    cargo::cargo_bin_cmd!("clockangle")
        .current_dir(temp_dir.path())
        .args(["gen", "-n", "0"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("--count must be at least 1"));
}

#[test]
fn test_angle_boundary_cases() {
    let temp_dir = TempDir::new().unwrap();

    for (time, answer) in [
        ("12:00 p.m.", "0°"),
        ("3:00 a.m.", "90°"),
        ("6:00 p.m.", "180°"),
        ("12:30 a.m.", "165°"),
        ("9:00 a.m.", "90°"),
    ] {
        cargo::cargo_bin_cmd!("clockangle")
            .current_dir(temp_dir.path())
            .args(["angle", time])
            .assert()
            .success()
            .stdout(predicate::str::contains(time))
            .stdout(predicate::str::contains(format!("   Answer: {}", answer)));
    }
}

#[test]
fn test_angle_twenty_four_hour_input() {
    let temp_dir = TempDir::new().unwrap();

    cargo::cargo_bin_cmd!("clockangle")
        .current_dir(temp_dir.path())
        .args(["angle", "15:15"])
        .assert()
        .success()
        .stdout(predicate::str::contains("3:15 p.m."))
        .stdout(predicate::str::contains("Answer: 7°"));
}

#[test]
fn test_angle_round_conversion_from_config() {
    let temp_dir = TempDir::new().unwrap();
    let config_path = temp_dir.path().join("clockangle.toml");
    fs::write(&config_path, "angle_conversion = \"round\"\n").unwrap();

    // Picked up from the working directory without --config
    cargo::cargo_bin_cmd!("clockangle")
        .current_dir(temp_dir.path())
        .args(["angle", "3:15 p.m."])
        .assert()
        .success()
        .stdout(predicate::str::contains("Answer: 8°"));
}

#[test]
fn test_angle_now() {
    let temp_dir = TempDir::new().unwrap();

    cargo::cargo_bin_cmd!("clockangle")
        .current_dir(temp_dir.path())
        .args(["angle", "--now"])
        .assert()
        .success()
        .stdout(predicate::str::is_match(r"\d{1,2}:\d{2} [ap]\.m\.").unwrap())
        .stdout(predicate::str::contains("Answer: "));
}

#[test]
fn test_angle_invalid_time() {
    let temp_dir = TempDir::new().unwrap();

    cargo::cargo_bin_cmd!("clockangle")
        .current_dir(temp_dir.path())
        .args(["angle", "13:00 p.m."])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Error: Invalid time"));
}

#[test]
fn test_draw_writes_svg() {
    let temp_dir = TempDir::new().unwrap();
    let output = temp_dir.path().join("out/clock.svg");

    cargo::cargo_bin_cmd!("clockangle")
        .current_dir(temp_dir.path())
        .args(["draw", "3:00 p.m.", "--output", output.to_str().unwrap()])
        .assert()
        .success()
        .stdout(predicate::str::contains("Diagram written to"));

    let svg = fs::read_to_string(&output).unwrap();
    assert!(svg.starts_with("<svg"));
    assert!(svg.contains("<title>3:00</title>"));
}

#[test]
fn test_draw_terminal_sketch() {
    let temp_dir = TempDir::new().unwrap();

    cargo::cargo_bin_cmd!("clockangle")
        .current_dir(temp_dir.path())
        .args(["draw", "9:00", "--terminal"])
        .assert()
        .success()
        .stdout(predicate::str::contains("O"))
        .stdout(predicate::str::contains("#"))
        .stdout(predicate::str::contains("*"));

    assert!(temp_dir.path().join("diagrams/clock-9-00.svg").exists());
}

#[test]
fn test_draw_unwritable_target_fails() {
    let temp_dir = TempDir::new().unwrap();
    let blocker = temp_dir.path().join("blocker");
    fs::write(&blocker, "not a directory").unwrap();
    let output = blocker.join("clock.svg");

    cargo::cargo_bin_cmd!("clockangle")
        .current_dir(temp_dir.path())
        .args(["draw", "1:00 a.m.", "--output", output.to_str().unwrap()])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Error: Diagram error"));
}

#[test]
fn test_gen_with_diagrams() {
    let temp_dir = TempDir::new().unwrap();
    let diagrams = temp_dir.path().join("svg");
    let config_path = temp_dir.path().join("custom.toml");
    fs::write(
        &config_path,
        format!(
            "[diagram]\noutput_dir = \"{}\"\n",
            path_to_toml_string(&diagrams)
        ),
    )
    .unwrap();

    cargo::cargo_bin_cmd!("clockangle")
        .current_dir(temp_dir.path())
        .args([
            "gen",
            "--config",
            config_path.to_str().unwrap(),
            "-n",
            "3",
            "--seed",
            "1",
            "--diagram",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("Diagram written to").count(3));

    let written = fs::read_dir(&diagrams).unwrap().count();
    assert!((1..=3).contains(&written));
}

#[test]
fn test_custom_templates_from_config() {
    let temp_dir = TempDir::new().unwrap();
    let config_path = temp_dir.path().join("custom.toml");
    fs::write(
        &config_path,
        "questions = 2\ntemplates = [\"Clock check: {time}?\"]\n",
    )
    .unwrap();

    let stdout = stdout_of(
        temp_dir.path(),
        &["gen", "--config", config_path.to_str().unwrap()],
    );

    assert_eq!(stdout.matches("Clock check: ").count(), 2);
}

#[test]
fn test_bad_template_in_config() {
    let temp_dir = TempDir::new().unwrap();
    let config_path = temp_dir.path().join("custom.toml");
    fs::write(&config_path, "templates = [\"What time?\"]\n").unwrap();

    cargo::cargo_bin_cmd!("clockangle")
        .current_dir(temp_dir.path())
        .args(["gen", "--config", config_path.to_str().unwrap()])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Configuration error"));
}

#[test]
fn test_missing_explicit_config() {
    let temp_dir = TempDir::new().unwrap();

    cargo::cargo_bin_cmd!("clockangle")
        .current_dir(temp_dir.path())
        .args(["gen", "--config", "nope.toml"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Run 'clockangle config init'"));
}

#[test]
fn test_config_init() {
    let temp_dir = TempDir::new().unwrap();
    let config_path = temp_dir.path().join("clockangle.toml");

    cargo::cargo_bin_cmd!("clockangle")
        .args(["config", "init", "--path", config_path.to_str().unwrap()])
        .assert()
        .success()
        .stdout(predicate::str::contains("Configuration file created"));

    let content = fs::read_to_string(&config_path).unwrap();
    assert!(content.contains("questions = 5"));
    assert!(content.contains("angle_conversion = \"truncate\""));

    cargo::cargo_bin_cmd!("clockangle")
        .args(["config", "init", "--path", config_path.to_str().unwrap()])
        .assert()
        .success()
        .stderr(predicate::str::contains("already exists"));
}

#[test]
fn test_gen_json_with_diagrams_keeps_stdout_parseable() {
    let temp_dir = TempDir::new().unwrap();

    let assert = cargo::cargo_bin_cmd!("clockangle")
        .current_dir(temp_dir.path())
        .args(["gen", "--format", "json", "-n", "2", "--seed", "4", "--diagram"])
        .assert()
        .success()
        .stderr(predicate::str::contains("Diagram written to").count(2));

    let stdout = String::from_utf8(assert.get_output().stdout.clone()).unwrap();
    assert!(!stdout.contains("Diagram written to"));

    let value: serde_json::Value = serde_json::from_str(&stdout).unwrap();
    assert_eq!(value.as_array().unwrap().len(), 2);
    assert!(temp_dir.path().join("diagrams").is_dir());
}
