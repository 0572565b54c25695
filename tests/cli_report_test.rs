use assert_cmd::Command;
use serde_json::Value;

const QUESTIONS: &str = "tests/fixtures/questions.toml";
const ANSWERS: &str = "tests/fixtures/answers_small_business.toml";

fn aspe() -> Command {
    let mut cmd = Command::cargo_bin("aspe").unwrap();
    cmd.env_remove("ASPE_QUESTIONS").env_remove("RUST_LOG");
    cmd
}

#[test]
fn json_report_on_stdout() {
    let output = aspe()
        .args([
            "report",
            "--questions",
            QUESTIONS,
            "--answers",
            ANSWERS,
            "--profile",
            "Small business",
            "--format",
            "json",
        ])
        .output()
        .unwrap();

    assert!(output.status.success(), "{}", String::from_utf8_lossy(&output.stderr));
    let report: Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(report["risk_percent"], 46);
    assert_eq!(report["tier"], "intermediate");
    assert_eq!(report["profile"], "Small business");
    assert_eq!(report["sections"].as_array().unwrap().len(), 6);
    assert!(report["sections"][0]["chart"]["text"]
        .as_str()
        .unwrap()
        .contains("No      |"));
}

#[test]
fn markdown_report_to_file() {
    let dir = tempfile::tempdir().unwrap();
    let out = dir.path().join("report.md");

    aspe()
        .args([
            "report",
            "--questions",
            QUESTIONS,
            "--answers",
            ANSWERS,
            "--profile",
            "Small business",
            "--format",
            "markdown",
            "--title",
            "Quarterly audit",
            "--output",
        ])
        .arg(&out)
        .assert()
        .success();

    let markdown = std::fs::read_to_string(&out).unwrap();
    assert!(markdown.starts_with("# Quarterly audit\n"));
    assert!(markdown.contains("| Access control | Low Maturity | 67% |"));
}

#[test]
fn invalid_answer_fails_with_context() {
    let output = aspe()
        .args([
            "report",
            "--questions",
            QUESTIONS,
            "--answers",
            "tests/fixtures/answers_invalid.toml",
            "--profile",
            "Individual",
        ])
        .output()
        .unwrap();

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("do not match profile 'Individual'"));
    assert!(stderr.contains("'sometimes' is not a valid answer"));
}

#[test]
fn profiles_lists_bank_profiles() {
    let output = aspe()
        .args(["profiles", "--questions", QUESTIONS, "--blocks"])
        .output()
        .unwrap();

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Individual (1 question)"));
    assert!(stdout.contains("Small business (5 questions)\n  - Access control\n  - Backups\n  - Personal data"));
}

#[test]
fn missing_question_bank_is_reported() {
    aspe()
        .args(["profiles"])
        .assert()
        .failure();
}
