mod common;

use std::fs;

use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;
use tempfile::TempDir;

#[test]
fn lists_api_signatures() {
    cargo_bin_cmd!("neovimqt-gen")
        .write_stdin(common::sample_metadata())
        .assert()
        .success()
        .stdout(predicate::eq(
            "API info\n  Integer nvim_strwidth(String) !fails\n  ArrayOf(Buffer) nvim_list_bufs()\n",
        ));
}

#[test]
fn generates_bindings_into_new_dir() {
    let tmp = TempDir::new().unwrap();
    let out = tmp.path().join("gen").join("auto");

    cargo_bin_cmd!("neovimqt-gen")
        .arg(&out)
        .write_stdin(common::sample_metadata())
        .assert()
        .success()
        .stdout(predicate::str::contains("Generated Qt bindings for 2 functions"));

    for file in ["function_enum.h", "function_static.cpp", "neovim.h", "neovim.cpp"] {
        assert!(out.join(file).is_file(), "{file} missing");
    }
    let first = fs::read(out.join("neovim.cpp")).unwrap();

    cargo_bin_cmd!("neovimqt-gen")
        .arg(&out)
        .write_stdin(common::sample_metadata())
        .assert()
        .success();
    assert_eq!(first, fs::read(out.join("neovim.cpp")).unwrap());
}

#[test]
fn empty_stdin_fails_to_decode() {
    cargo_bin_cmd!("neovimqt-gen")
        .write_stdin(Vec::new())
        .assert()
        .failure()
        .stderr(predicate::str::contains("unable to decode metadata"));
}

#[test]
fn unsupported_type_fails() {
    let bytes = common::document(vec![common::function(
        "nvim_get_context",
        "Dictionary(String, Object)",
        &[],
        false,
    )]);
    let tmp = TempDir::new().unwrap();

    cargo_bin_cmd!("neovimqt-gen")
        .arg(tmp.path().join("out"))
        .write_stdin(bytes)
        .assert()
        .failure()
        .stderr(predicate::str::contains("unsupported data type"));
    assert!(!tmp.path().join("out").exists());
}

#[test]
fn too_many_arguments_is_a_usage_error() {
    cargo_bin_cmd!("neovimqt-gen")
        .args(["one", "two"])
        .write_stdin(common::sample_metadata())
        .assert()
        .failure()
        .stderr(predicate::str::contains("Usage"));
}
