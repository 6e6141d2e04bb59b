//! # CLI Tests
//!
//! End-to-end tests of the `loot` binary.
//!
//! Copyright (c) 2025 Dominic Rodemer. All rights reserved.
//! Licensed under the MIT License.

mod common;

use common::{setup_test_env, TestEnv};
use predicates::prelude::*;

fn add(env: &TestEnv, name: &str, region: &str, x: &str, y: &str, kind: &str) {
    env.loot()
        .args(["add", name, "--region", region, "--x", x, "--y", y, "--kind", kind])
        .assert()
        .success();
}

fn item_id(env: &TestEnv, index: usize) -> String {
    env.read_json()["items"][index]["id"]
        .as_str()
        .expect("item should have an id")
        .to_string()
}

#[test]
fn test_add_and_list() {
    let env = setup_test_env();

    env.loot()
        .args(["add", "Chest A", "-r", "mondstadt", "--x", "10", "--y", "20", "-k", "chest"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Added item:"))
        .stdout(predicate::str::contains("Chest A"));

    env.loot()
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("Chest A"))
        .stdout(predicate::str::contains("Mondstadt"))
        .stdout(predicate::str::contains("10.0 / 20.0"));
}

#[test]
fn test_list_empty() {
    let env = setup_test_env();

    env.loot()
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("No items found."));
}

#[test]
fn test_add_duplicate_fails() {
    let env = setup_test_env();
    add(&env, "Chest A", "Mondstadt", "10", "20", "chest");

    env.loot()
        .args(["add", "chest a", "-r", "MONDSTADT", "--x", "10.05", "--y", "20", "-k", "resource"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("error:"))
        .stderr(predicate::str::contains("already exists"));

    assert_eq!(env.read_json()["items"].as_array().unwrap().len(), 1);
}

#[test]
fn test_add_out_of_range_coordinate_fails() {
    let env = setup_test_env();

    env.loot()
        .args(["add", "Far Chest", "-r", "liyue", "--x", "1000.5", "--y", "0"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("between -1000 and 1000"));

    assert!(!env.data_path().exists());
}

#[test]
fn test_add_unknown_region_fails() {
    let env = setup_test_env();

    env.loot()
        .args(["add", "Chest", "-r", "teyvat", "--x", "0", "--y", "0"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("unknown region"));
}

#[test]
fn test_add_negative_coordinates() {
    let env = setup_test_env();
    add(&env, "Cor Lapis", "liyue", "-312.5", "-88", "resource");

    let item = &env.read_json()["items"][0];
    assert_eq!(item["x"], -312.5);
    assert_eq!(item["y"], -88.0);
    assert_eq!(item["type"], "resource");
}

#[test]
fn test_list_filters() {
    let env = setup_test_env();
    add(&env, "Chest A", "mondstadt", "1", "1", "chest");
    add(&env, "Cor Lapis", "liyue", "2", "2", "resource");
    add(&env, "Oculus", "liyue", "3", "3", "other");
    let oculus = item_id(&env, 2);
    env.loot().args(["mark", "--id", oculus.as_str()]).assert().success();

    env.loot()
        .args(["list", "--region", "liyue"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Cor Lapis"))
        .stdout(predicate::str::contains("Oculus"))
        .stdout(predicate::str::contains("Chest A").not());

    env.loot()
        .args(["list", "--collected"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Oculus"))
        .stdout(predicate::str::contains("Cor Lapis").not());

    env.loot()
        .args(["list", "--missing", "--kind", "chest"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Chest A"))
        .stdout(predicate::str::contains("Cor Lapis").not());

    env.loot()
        .args(["list", "--search", "LAPIS"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Cor Lapis"))
        .stdout(predicate::str::contains("Oculus").not());
}

#[test]
fn test_list_status_flags_conflict() {
    let env = setup_test_env();

    env.loot()
        .args(["list", "--collected", "--missing"])
        .assert()
        .failure();
}

#[test]
fn test_mark_by_partial_id() {
    let env = setup_test_env();
    add(&env, "Chest A", "mondstadt", "1", "1", "chest");
    let id = item_id(&env, 0);

    env.loot()
        .args(["mark", "--id", id[..5].to_lowercase().as_str(), "--notes", "done"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Collected item:"));

    let item = &env.read_json()["items"][0];
    assert_eq!(item["collected"], true);
    assert_eq!(item["notes"], "done");

    env.loot()
        .args(["mark", "--id", id.as_str(), "--undo"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Uncollected item:"));
    assert_eq!(env.read_json()["items"][0]["collected"], false);
}

#[test]
fn test_mark_without_id_fails_outside_terminal() {
    let env = setup_test_env();
    add(&env, "Chest A", "mondstadt", "1", "1", "chest");

    env.loot()
        .arg("mark")
        .assert()
        .failure()
        .stderr(predicate::str::contains("No item given"));
}

#[test]
fn test_mark_unknown_id_fails() {
    let env = setup_test_env();
    add(&env, "Chest A", "mondstadt", "1", "1", "chest");

    env.loot()
        .args(["mark", "--id", "zzzzzzzz"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("No item found"));
}

#[test]
fn test_toggle() {
    let env = setup_test_env();
    add(&env, "Chest A", "mondstadt", "1", "1", "chest");
    let id = item_id(&env, 0);

    env.loot().args(["toggle", "--id", id.as_str()]).assert().success();
    assert_eq!(env.read_json()["items"][0]["collected"], true);

    env.loot().args(["toggle", "--id", id.as_str()]).assert().success();
    assert_eq!(env.read_json()["items"][0]["collected"], false);
}

#[test]
fn test_edit() {
    let env = setup_test_env();
    add(&env, "Chest A", "mondstadt", "1", "1", "chest");
    let id = item_id(&env, 0);

    env.loot()
        .args(["edit", "--id", id.as_str(), "--name", "Precious Chest", "--x", "-5"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Updated item:"));

    let item = &env.read_json()["items"][0];
    assert_eq!(item["name"], "Precious Chest");
    assert_eq!(item["x"], -5.0);

    env.loot()
        .args(["edit", "--id", id.as_str(), "--name", "Precious Chest"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No changes to apply."));
}

#[test]
fn test_stats_and_regions() {
    let env = setup_test_env();
    add(&env, "Chest A", "mondstadt", "1", "1", "chest");
    add(&env, "Cor Lapis", "liyue", "2", "2", "resource");
    let id = item_id(&env, 0);
    env.loot().args(["mark", "--id", id.as_str()]).assert().success();

    env.loot()
        .arg("stats")
        .assert()
        .success()
        .stdout(predicate::str::contains("Progress:  50.0%"))
        .stdout(predicate::str::contains("By region"));

    env.loot()
        .arg("regions")
        .assert()
        .success()
        .stdout(predicate::str::contains("Mondstadt"))
        .stdout(predicate::str::contains("1/1"))
        .stdout(predicate::str::contains("0/1"))
        .stdout(predicate::str::contains("Snezhnaya"));
}

#[test]
fn test_file_flag() {
    let env = setup_test_env();
    let other = env.home().join("teyvat.json");
    let other_path = other.to_str().unwrap();

    env.loot()
        .args(["add", "Chest A", "-r", "sumeru", "--x", "0", "--y", "0", "--file", other_path])
        .assert()
        .success();

    assert!(other.exists());
    assert!(!env.data_path().exists());

    env.loot()
        .args(["--file", other_path, "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Chest A"));
}

#[test]
fn test_malformed_data_file_fails() {
    let env = setup_test_env();
    env.write_data("[1, 2, 3]");

    env.loot()
        .arg("list")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to load items"));

    assert_eq!(env.read_data(), "[1, 2, 3]");
}

#[test]
fn test_menu_session() {
    let env = setup_test_env();

    env.loot()
        .arg("menu")
        .write_stdin("1\n2\nCor Lapis\n2\n-10\n15.5\n5\n7\ny\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Added 'Cor Lapis' to Liyue"))
        .stdout(predicate::str::contains("Collected percentage: 0.0%"))
        .stdout(predicate::str::contains("Goodbye!"));

    let item = &env.read_json()["items"][0];
    assert_eq!(item["name"], "Cor Lapis");
    assert_eq!(item["region"], "Liyue");
    assert_eq!(item["type"], "resource");
}

#[test]
fn test_menu_ends_at_end_of_input() {
    let env = setup_test_env();

    env.loot().arg("menu").write_stdin("").assert().success();
    assert!(!env.data_path().exists());
}

#[test]
fn test_browse_needs_terminal() {
    let env = setup_test_env();

    env.loot()
        .arg("browse")
        .assert()
        .failure()
        .stderr(predicate::str::contains("needs a terminal"));
}

#[test]
fn test_setup_creates_config() {
    let env = TestEnv::new();

    env.loot()
        .arg("setup")
        .assert()
        .success()
        .stderr(predicate::str::contains("Created global config"));

    assert!(env.global_config_path().exists());

    env.loot()
        .arg("setup")
        .assert()
        .success()
        .stderr(predicate::str::contains("already exists"));
}

#[test]
fn test_completions() {
    let env = TestEnv::new();

    env.loot()
        .args(["completions", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("loot"));
}

#[test]
fn test_debug_logging_to_stderr() {
    let env = setup_test_env();
    add(&env, "Chest A", "mondstadt", "1", "1", "chest");

    env.loot()
        .env("LOOTLIST_LOG", "debug")
        .arg("list")
        .assert()
        .success()
        .stderr(predicate::str::contains("loaded tracker"));
}
