use assert_cmd::Command;
use assert_fs::TempDir;
use rstest::fixture;
use std::path::Path;

#[fixture]
pub fn repository_dir() -> TempDir {
    TempDir::new().expect("Failed to create temp dir")
}

/// A real git repository with author identity configured, ready to commit.
#[fixture]
pub fn git_repository_dir(repository_dir: TempDir) -> TempDir {
    run_git_command(repository_dir.path(), &["init", "--initial-branch=master"])
        .assert()
        .success();
    run_git_command(repository_dir.path(), &["config", "user.name", "fake_user"])
        .assert()
        .success();
    run_git_command(
        repository_dir.path(),
        &["config", "user.email", "fake_email@email.com"],
    )
    .assert()
    .success();

    repository_dir
}

pub fn run_churn_command(dir: &Path, args: &[&str]) -> Command {
    let mut cmd = Command::cargo_bin("churn").expect("Failed to find churn binary");
    cmd.current_dir(dir);
    for arg in args {
        cmd.arg(arg);
    }
    cmd
}

pub fn run_git_command(dir: &Path, args: &[&str]) -> Command {
    let mut cmd = Command::new("git");
    cmd.current_dir(dir);
    for arg in args {
        cmd.arg(arg);
    }
    cmd
}

pub fn git_commit(dir: &Path, message: &str) -> Command {
    let mut cmd = run_git_command(dir, &["commit", "-m", message]);
    cmd.envs(vec![
        ("GIT_AUTHOR_DATE", "2023-01-01 12:00:00 +0000"),
        ("GIT_COMMITTER_DATE", "2023-01-01 12:00:00 +0000"),
    ]);
    cmd
}

pub fn current_head(dir: &Path) -> String {
    let output = run_git_command(dir, &["rev-parse", "HEAD"])
        .output()
        .expect("Failed to run git rev-parse");
    String::from_utf8(output.stdout)
        .expect("Non-UTF-8 revision")
        .trim()
        .to_string()
}

pub fn random_commit_message() -> String {
    use fake::Fake;
    use fake::faker::lorem::en::Words;

    Words(3..8).fake::<Vec<String>>().join(" ")
}
