use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use std::path::Path;

/// Build a `unitz` invocation sandboxed into `temp`: units land under
/// `<temp>/units`, and config lookups cannot escape into the real home.
fn unitz(temp: &tempfile::TempDir) -> Command {
    let mut cmd = Command::cargo_bin("unitz").unwrap();
    cmd.env("UNITZ_UNIT_DIR", temp.path().join("units"))
        .env("XDG_CONFIG_HOME", temp.path().join("xdg"))
        .env("HOME", temp.path());
    cmd
}

fn unit_path(temp: &tempfile::TempDir, file: &str) -> std::path::PathBuf {
    temp.path().join("units").join(file)
}

fn workdir(temp: &tempfile::TempDir) -> std::path::PathBuf {
    let dir = temp.path().join("work");
    fs::create_dir_all(&dir).unwrap();
    dir
}

#[test]
fn test_generates_service_with_defaults() {
    let temp = tempfile::tempdir().unwrap();
    let work = workdir(&temp);

    unitz(&temp)
        .args(["--name", "foo", "--command", "/usr/bin/echo hi"])
        .arg("--working-dir")
        .arg(&work)
        .assert()
        .success()
        .stdout(predicate::str::contains("Service file saved to"));

    let service = fs::read_to_string(unit_path(&temp, "foo.service")).unwrap();
    let canonical = fs::canonicalize(&work).unwrap();
    assert!(service.contains("Description=A custom systemd service\n"));
    assert!(service.contains(&format!("WorkingDirectory={}\n", canonical.display())));
    assert!(service.contains("ExecStart=/usr/bin/echo hi\n"));
    assert!(service.contains("Restart=on-failure\n"));

    // No --timer, no timer file
    assert!(!unit_path(&temp, "foo.timer").exists());
}

#[test]
fn test_generates_timer_when_requested() {
    let temp = tempfile::tempdir().unwrap();
    let work = workdir(&temp);

    unitz(&temp)
        .args(["-n", "foo", "-c", "/usr/bin/echo hi", "-t", "*-*-* 14:00:00"])
        .arg("-w")
        .arg(&work)
        .assert()
        .success()
        .stdout(predicate::str::contains("Service file saved to"))
        .stdout(predicate::str::contains("Timer file saved to"));

    let timer = fs::read_to_string(unit_path(&temp, "foo.timer")).unwrap();
    assert!(timer.contains("Description=Timer for foo service\n"));
    assert!(timer.contains("OnCalendar=*-*-* 14:00:00\n"));
    assert!(timer.contains("Persistent=true\n"));
    assert!(timer.contains("WantedBy=timers.target\n"));
}

#[test]
fn test_description_and_user_flags_pass_through() {
    let temp = tempfile::tempdir().unwrap();
    let work = workdir(&temp);

    unitz(&temp)
        .args(["-n", "job", "-c", "/usr/bin/true"])
        .args(["-d", "My backup job", "-u", "svc-runner"])
        .arg("-w")
        .arg(&work)
        .assert()
        .success();

    let service = fs::read_to_string(unit_path(&temp, "job.service")).unwrap();
    assert!(service.contains("Description=My backup job\n"));
    assert!(service.contains("User=svc-runner\n"));
}

#[test]
fn test_missing_required_flag_is_a_usage_error() {
    let temp = tempfile::tempdir().unwrap();

    unitz(&temp)
        .args(["--name", "foo"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("--working-dir"))
        .stderr(predicate::str::contains("--command"));

    // Usage errors happen before any file I/O
    assert!(!temp.path().join("units").exists());
}

#[test]
fn test_relative_working_dir_is_canonicalized() {
    let temp = tempfile::tempdir().unwrap();
    let work = workdir(&temp);

    unitz(&temp)
        .current_dir(&work)
        .args(["-n", "rel", "-c", "/usr/bin/true", "-w", "."])
        .assert()
        .success();

    let service = fs::read_to_string(unit_path(&temp, "rel.service")).unwrap();
    let canonical = fs::canonicalize(&work).unwrap();
    assert!(service.contains(&format!("WorkingDirectory={}\n", canonical.display())));
}

#[test]
fn test_nonexistent_working_dir_fails() {
    let temp = tempfile::tempdir().unwrap();
    let missing = temp.path().join("does-not-exist");

    unitz(&temp)
        .args(["-n", "foo", "-c", "/usr/bin/true"])
        .arg("-w")
        .arg(&missing)
        .assert()
        .failure()
        .stderr(predicate::str::contains("working directory"));

    assert!(!unit_path(&temp, "foo.service").exists());
}

#[test]
fn test_rerun_is_byte_identical() {
    let temp = tempfile::tempdir().unwrap();
    let work = workdir(&temp);
    let run = |temp: &tempfile::TempDir, work: &Path| {
        unitz(temp)
            .args(["-n", "cron", "-c", "/usr/bin/sync", "-u", "alice"])
            .args(["-t", "Mon *-*-* 01:00:00"])
            .arg("-w")
            .arg(work)
            .assert()
            .success();
    };

    run(&temp, &work);
    let service_first = fs::read(unit_path(&temp, "cron.service")).unwrap();
    let timer_first = fs::read(unit_path(&temp, "cron.timer")).unwrap();

    run(&temp, &work);
    assert_eq!(fs::read(unit_path(&temp, "cron.service")).unwrap(), service_first);
    assert_eq!(fs::read(unit_path(&temp, "cron.timer")).unwrap(), timer_first);
}

#[test]
fn test_configured_default_description_is_used() {
    let temp = tempfile::tempdir().unwrap();
    let work = workdir(&temp);

    let config_dir = temp.path().join("xdg").join("unitz");
    fs::create_dir_all(&config_dir).unwrap();
    fs::write(
        config_dir.join("config.json"),
        r#"{ "default_description": "House-style service" }"#,
    )
    .unwrap();

    unitz(&temp)
        .args(["-n", "cfg", "-c", "/usr/bin/true"])
        .arg("-w")
        .arg(&work)
        .assert()
        .success();

    let service = fs::read_to_string(unit_path(&temp, "cfg.service")).unwrap();
    assert!(service.contains("Description=House-style service\n"));
}
