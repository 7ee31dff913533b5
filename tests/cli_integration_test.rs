//! Integration tests for the boilerplate binary.

mod common;

use assert_cmd::Command;
use common::JavaProject;
use indoc::indoc;
use serde_json::Value;
use std::fs;

const ACCOUNT: &str = indoc! {"
    package bank;

    public class Account {
        public Account(String owner, int balance) {
        }
    }
"};

fn boilerplate(project: &JavaProject) -> Command {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_boilerplate"));
    cmd.current_dir(project.root())
        .env("NO_COLOR", "1")
        .env_remove("BOILERPLATE_LOG");
    cmd
}

fn stdout_of(cmd: &mut Command) -> String {
    let assert = cmd.assert().success();
    String::from_utf8_lossy(&assert.get_output().stdout).into_owned()
}

#[test]
fn test_plan_then_generate() {
    let project = JavaProject::with_fixtures();
    let source = project.source("bank", "Account", ACCOUNT);
    let plan_path = project.root().join("account.toml");

    boilerplate(&project)
        .args(["plan", source.to_str().unwrap(), "--output", plan_path.to_str().unwrap()])
        .assert()
        .success();
    let template = fs::read_to_string(&plan_path).unwrap();
    assert!(template.contains("signature = \"(String, int)\""));

    let edited = template
        .replace("select = false", "select = true")
        .replace("disallow_null = false", "disallow_null = true")
        .replace("constraint = \"any\"", "constraint = \"greater_equal\"\nboundary = 0");
    fs::write(&plan_path, edited).unwrap();

    boilerplate(&project)
        .args(["generate", source.to_str().unwrap(), "--plan", plan_path.to_str().unwrap()])
        .assert()
        .success();

    let test_file = fs::read_to_string(project.test_path("bank", "Account")).unwrap();
    assert!(test_file.starts_with("package bank;\n\nimport static org.mockito.Mockito.mock;"));
    assert!(test_file.contains("public void constructor_nullOwner_throwsNullPointerException()"));
    assert!(test_file.contains("public void constructor_balanceLessThan0_throwsIllegalArgumentException()"));
    assert!(test_file.contains("        String owner = \"test\";\n        int balance = -1;\n        new Account(owner, balance);"));
}

#[test]
fn test_generate_dry_run_prints_file() {
    let project = JavaProject::with_fixtures();
    let source = project.source("bank", "Account", ACCOUNT);
    let plan = project.write(
        "plan.toml",
        indoc! {r#"
            [[constructor]]
            signature = "(String, int)"

            [[constructor.parameter]]
            name = "owner"
            disallow_blank = true
        "#},
    );

    let stdout = stdout_of(boilerplate(&project).args([
        "generate",
        source.to_str().unwrap(),
        "--plan",
        plan.to_str().unwrap(),
        "--dry-run",
    ]));

    assert!(stdout.contains("public class AccountTest"));
    assert!(stdout.contains("constructor_blankOwner_throwsIllegalArgumentException"));
    assert!(!project.test_path("bank", "Account").exists());
}

#[test]
fn test_generate_fails_without_fixtures() {
    let project = JavaProject::new();
    let source = project.source("bank", "Account", ACCOUNT);
    let plan = project.write(
        "plan.toml",
        "[[constructor]]\nsignature = \"(String, int)\"\n[[constructor.parameter]]\nname = \"owner\"\ndisallow_null = true\n",
    );

    let assert = boilerplate(&project)
        .args(["generate", source.to_str().unwrap(), "--plan", plan.to_str().unwrap()])
        .assert()
        .failure();
    let stderr = String::from_utf8_lossy(&assert.get_output().stderr);
    assert!(stderr.contains("must be on the project classpath"));

    boilerplate(&project)
        .args([
            "generate",
            source.to_str().unwrap(),
            "--plan",
            plan.to_str().unwrap(),
            "--skip-classpath-check",
        ])
        .assert()
        .success();
    assert!(project.test_path("bank", "Account").exists());
}

#[test]
fn test_generate_all_writes_null_cases() {
    let project = JavaProject::with_fixtures();
    let source = project.source("bank", "Account", ACCOUNT);

    boilerplate(&project)
        .args(["generate", source.to_str().unwrap(), "--all"])
        .assert()
        .success();

    let test_file = fs::read_to_string(project.test_path("bank", "Account")).unwrap();
    assert!(test_file.contains("public void constructor_nullOwner_throwsNullPointerException()"));
    assert!(test_file.contains("        String owner = null;\n        int balance = 0;\n        new Account(owner, balance);"));
    assert!(!test_file.contains("balanceLessThan"));
}

#[test]
fn test_cancelled_plan_exits_cleanly() {
    let project = JavaProject::with_fixtures();
    let source = project.source("bank", "Account", ACCOUNT);
    let plan = project.write("plan.toml", "cancel = true\n");

    let assert = boilerplate(&project)
        .args(["generate", source.to_str().unwrap(), "--plan", plan.to_str().unwrap()])
        .assert()
        .success();
    assert!(assert.get_output().stdout.is_empty());
    assert!(assert.get_output().stderr.is_empty());
}

#[test]
fn test_list_json() {
    let project = JavaProject::with_fixtures();
    let source = project.source("bank", "Account", ACCOUNT);

    let stdout = stdout_of(boilerplate(&project).args([
        "list",
        source.to_str().unwrap(),
        "--format",
        "json",
    ]));

    let json: Value = serde_json::from_str(&stdout).unwrap();
    assert_eq!(json[0]["signature"], "(String, int)");
    assert_eq!(json[0]["line"], 4);
    assert_eq!(json[0]["parameters"][1]["type"], "int");
    assert_eq!(json[0]["parameters"][1]["rule"], "any");
}

#[test]
fn test_non_java_source_is_rejected() {
    let project = JavaProject::with_fixtures();
    let source = project.write("src/main/java/notes.txt", "hello");

    boilerplate(&project)
        .args(["list", source.to_str().unwrap()])
        .assert()
        .failure();
}

#[test]
fn test_init_writes_config_once() {
    let project = JavaProject::new();

    boilerplate(&project).arg("init").assert().success();
    assert!(project.root().join(".boilerplate.toml").exists());

    boilerplate(&project).arg("init").assert().failure();
    boilerplate(&project).args(["init", "--force"]).assert().success();
}
