//! End-to-end runs of the importlint binary against a shell stand-in for the linter.

use assert_cmd::Command;
use predicates::prelude::*;
use std::{
    fs,
    path::Path
};
use tempfile::{
    tempdir,
    TempDir
};

/// Reports every line containing `foo` against whatever path it was handed.
const FAKE_LINT: &str = "#!/bin/sh
for f; do target=\"$f\"; done
echo \"Linting $target\"
grep -n foo \"$target\" | while IFS=: read n rest; do echo \"$target: line $n,'foo' is undefined\"; done
if grep -q foo \"$target\"; then exit 1; fi
";

fn importlint(engine_dir: &Path) -> Command {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_importlint"));
    cmd.env_remove("RUST_LOG")
        .arg("--engine")
        .arg(format!("sh '{}'", engine_dir.join("fakelint.sh").display()));
    cmd
}

fn workspace(files: &[(&str, &str)]) -> TempDir {
    let dir = tempdir().unwrap();
    fs::write(dir.path().join("fakelint.sh"), FAKE_LINT).unwrap();
    for (name, body) in files {
        let p = dir.path().join(name);
        if let Some(parent) = p.parent() {
            fs::create_dir_all(parent).unwrap();
        }
        fs::write(p, body).unwrap();
    }
    dir
}

mod inputs {
    use super::*;

    #[test]
    fn missing_file_exits_one() {
        let dir = workspace(&[]);
        importlint(dir.path())
            .arg(dir.path().join("nope.js"))
            .assert()
            .code(1)
            .stderr(predicate::str::contains("nope.js"));
    }

    #[test]
    fn missing_config_exits_one() {
        let dir = workspace(&[("w.js", "ok();\n")]);
        importlint(dir.path())
            .arg("--config")
            .arg(dir.path().join("absent.jshintrc"))
            .arg(dir.path().join("w.js"))
            .assert()
            .code(1);
    }

    #[test]
    fn no_arguments_is_usage_error() {
        Command::new(env!("CARGO_BIN_EXE_importlint"))
            .assert()
            .failure()
            .stderr(predicate::str::contains("Usage"));
    }
}

#[cfg(unix)]
mod linting {
    use super::*;

    #[test]
    fn clean_file_prints_nothing() {
        let dir = workspace(&[("w.js", "ok();\n")]);
        importlint(dir.path())
            .arg(dir.path().join("w.js"))
            .assert()
            .success()
            .stdout("");
    }

    #[test]
    fn direct_findings_are_counted() {
        let dir = workspace(&[("w.js", "ok();\nfoo();\n")]);
        let w = dir.path().join("w.js");
        importlint(dir.path())
            .arg(&w)
            .assert()
            .success()
            .stdout(format!("{}: line 2,'foo' is undefined\n1 errors\n", w.display()));
    }

    #[test]
    fn merged_findings_point_at_the_worker() {
        let dir = workspace(&[
            ("lib/a.js", "var a = 1;\nfoo = 2;\n"),
            ("b.js", "importScripts('lib/a.js', 'missing.js');\nx();\nfoo();\n"),
        ]);
        let b = dir.path().join("b.js");
        importlint(dir.path())
            .arg(&b)
            .assert()
            .success()
            .stdout(format!("{}: line 3,'foo' is undefined\n1 errors\n", b.display()));
    }

    #[test]
    fn nested_import_is_found_by_name() {
        let dir = workspace(&[
            ("vendor/dep.js", "foo = 1;\nvar d;\n"),
            ("b.js", "importScripts('dep.js');\nfoo();\n"),
        ]);
        let b = dir.path().join("b.js");
        importlint(dir.path())
            .arg(&b)
            .assert()
            .success()
            .stdout(predicate::str::contains(format!("{}: line 2,", b.display())))
            .stdout(predicate::str::contains("dep.js").not());
    }

    #[test]
    fn bad_file_does_not_hide_the_rest() {
        let dir = workspace(&[
            ("bad.js", "var f = importScripts;\n"),
            ("w.js", "foo();\n"),
        ]);
        let w = dir.path().join("w.js");
        importlint(dir.path())
            .arg(dir.path().join("bad.js"))
            .arg(&w)
            .assert()
            .code(1)
            .stderr(predicate::str::contains("bad.js"))
            .stderr(predicate::str::contains("malformed importScripts directive"))
            .stdout(format!("{}: line 1,'foo' is undefined\n1 errors\n", w.display()));
    }

    #[test]
    fn unnormalized_worker_path_still_fails() {
        let dir = workspace(&[
            ("a.js", "var a;\n"),
            ("b.js", "importScripts('a.js');\nfoo();\n"),
        ]);
        let spelled = format!("{}/./b.js", dir.path().display());
        importlint(dir.path())
            .arg(&spelled)
            .assert()
            .success()
            .stdout(format!("{spelled}: line 2,'foo' is undefined\n1 errors\n"));
    }

    #[test]
    fn json_output() {
        let dir = workspace(&[("w.js", "foo();\n")]);
        let out = importlint(dir.path())
            .arg("--format")
            .arg("json")
            .arg(dir.path().join("w.js"))
            .output()
            .unwrap();
        assert!(out.status.success());
        let v: serde_json::Value = serde_json::from_slice(&out.stdout).unwrap();
        assert_eq!(v[0]["line"], 1);
        assert_eq!(v[0]["message"], "'foo' is undefined");
    }

    #[test]
    fn verbose_logs_the_merge() {
        let dir = workspace(&[("a.js", "var a;\n"), ("b.js", "importScripts('a.js');\n")]);
        importlint(dir.path())
            .arg("--verbose")
            .arg(dir.path().join("b.js"))
            .assert()
            .success()
            .stderr(predicate::str::contains("merging"));
    }
}
