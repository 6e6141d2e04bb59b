//! # Command Tests
//!
//! Runs command implementations in-process against a temporary home.
//!
//! Copyright (c) 2025 Dominic Rodemer. All rights reserved.
//! Licensed under the MIT License.

mod common;

use common::{legacy_document, setup_test_env, GlobalConfigBuilder, LegacyRecord, TestEnv};
use lootlist::{
    commands::{self, AddArgs, EditArgs, ListArgs, MarkArgs, SortBy},
    ui::InteractiveArgs,
    ItemKind, Region, StatusFilter,
};

fn add_args(name: &str, region: Region, x: f64, y: f64) -> AddArgs {
    AddArgs {
        name: name.to_string(),
        region,
        x,
        y,
        kind: ItemKind::Chest,
        notes: None,
    }
}

fn first_id(env: &TestEnv) -> String {
    env.read_json()["items"][0]["id"]
        .as_str()
        .expect("item should have an id")
        .to_string()
}

#[test]
fn test_add_saves_item() {
    let env = setup_test_env();
    let config = env.config();

    let mut args = add_args("Chest A", Region::Mondstadt, 10.0, 20.0);
    args.notes = Some("behind the windmill".to_string());
    commands::add(args, &config).unwrap();

    let json = env.read_json();
    assert_eq!(json["metadata"]["total_items"], 1);
    let item = &json["items"][0];
    assert_eq!(item["name"], "Chest A");
    assert_eq!(item["type"], "chest");
    assert_eq!(item["collected"], false);
    assert_eq!(item["notes"], "behind the windmill");
}

#[test]
fn test_add_uses_configured_id_pattern() {
    let env = TestEnv::new();
    env.write_global_config(&GlobalConfigBuilder::new().id_pattern("LOOT-%RRRR").build());
    let config = env.config();

    commands::add(add_args("Chest A", Region::Liyue, 0.0, 0.0), &config).unwrap();

    let id = first_id(&env);
    assert!(id.starts_with("LOOT-"), "unexpected id {id}");
    assert_eq!(id.len(), 9);
}

#[test]
fn test_add_duplicate_fails_and_keeps_file() {
    let env = setup_test_env();
    let config = env.config();

    commands::add(add_args("Chest A", Region::Mondstadt, 10.0, 20.0), &config).unwrap();
    let before = env.read_data();

    let err = commands::add(add_args("CHEST A", Region::Mondstadt, 10.05, 19.95), &config)
        .unwrap_err();
    assert!(err.to_string().contains("already exists"));
    assert_eq!(env.read_data(), before);
}

#[test]
fn test_mark_by_partial_id() {
    let env = setup_test_env();
    let config = env.config();
    commands::add(add_args("Chest A", Region::Mondstadt, 1.0, 1.0), &config).unwrap();
    let id = first_id(&env);

    let args = MarkArgs {
        id: Some(id[..4].to_lowercase()),
        undo: false,
        notes: Some("done".to_string()),
        interactive: InteractiveArgs::default(),
    };
    commands::mark(&args, &config).unwrap();

    let item = &env.read_json()["items"][0];
    assert_eq!(item["collected"], true);
    assert_eq!(item["notes"], "done");

    let undo = MarkArgs {
        id: Some(id),
        undo: true,
        notes: None,
        interactive: InteractiveArgs::default(),
    };
    commands::mark(&undo, &config).unwrap();

    let item = &env.read_json()["items"][0];
    assert_eq!(item["collected"], false);
    assert_eq!(item["notes"], "done");
}

#[test]
fn test_mark_without_id_non_interactive_fails() {
    let env = setup_test_env();
    let config = env.config();
    commands::add(add_args("Chest A", Region::Mondstadt, 1.0, 1.0), &config).unwrap();

    let args = MarkArgs {
        id: None,
        undo: false,
        notes: None,
        interactive: InteractiveArgs {
            interactive: false,
            no_interactive: true,
        },
    };
    let err = commands::mark(&args, &config).unwrap_err();
    assert!(err.to_string().contains("No item given"));
}

#[test]
fn test_mark_unknown_id_fails() {
    let env = setup_test_env();
    let config = env.config();
    commands::add(add_args("Chest A", Region::Mondstadt, 1.0, 1.0), &config).unwrap();
    let before = env.read_data();

    let args = MarkArgs {
        id: Some("zzzzzz".to_string()),
        undo: false,
        notes: None,
        interactive: InteractiveArgs::default(),
    };
    assert!(commands::mark(&args, &config).is_err());
    assert_eq!(env.read_data(), before);
}

#[test]
fn test_toggle_flips_status() {
    let env = setup_test_env();
    let config = env.config();
    commands::add(add_args("Chest A", Region::Mondstadt, 1.0, 1.0), &config).unwrap();
    let id = first_id(&env);

    commands::toggle(&id, &config).unwrap();
    assert_eq!(env.read_json()["items"][0]["collected"], true);

    commands::toggle(&id, &config).unwrap();
    assert_eq!(env.read_json()["items"][0]["collected"], false);
}

#[test]
fn test_edit_changes_fields() {
    let env = setup_test_env();
    let config = env.config();
    commands::add(add_args("Chest A", Region::Mondstadt, 1.0, 1.0), &config).unwrap();
    let id = first_id(&env);

    let args = EditArgs {
        id,
        name: Some("Precious Chest".to_string()),
        region: Some(Region::Snezhnaya),
        kind: Some(ItemKind::Quest),
        notes: Some("north".to_string()),
        ..EditArgs::default()
    };
    commands::edit(&args, &config).unwrap();

    let item = &env.read_json()["items"][0];
    assert_eq!(item["name"], "Precious Chest");
    assert_eq!(item["region"], "Snezhnaya");
    assert_eq!(item["type"], "quest");
    assert_eq!(item["notes"], "north");
}

#[test]
fn test_edit_into_duplicate_fails() {
    let env = setup_test_env();
    let config = env.config();
    commands::add(add_args("Chest A", Region::Mondstadt, 1.0, 1.0), &config).unwrap();
    commands::add(add_args("Chest A", Region::Mondstadt, 5.0, 5.0), &config).unwrap();
    let second = env.read_json()["items"][1]["id"]
        .as_str()
        .unwrap()
        .to_string();
    let before = env.read_data();

    let args = EditArgs {
        id: second,
        x: Some(1.0),
        y: Some(1.0),
        ..EditArgs::default()
    };
    assert!(commands::edit(&args, &config).is_err());
    assert_eq!(env.read_data(), before);
}

#[test]
fn test_edit_without_changes_leaves_file() {
    let env = setup_test_env();
    let config = env.config();
    commands::add(add_args("Chest A", Region::Mondstadt, 1.0, 1.0), &config).unwrap();
    let before = env.read_data();

    let args = EditArgs {
        id: first_id(&env),
        name: Some("Chest A".to_string()),
        ..EditArgs::default()
    };
    commands::edit(&args, &config).unwrap();
    assert_eq!(env.read_data(), before);
}

#[test]
fn test_read_only_commands_succeed_on_empty_store() {
    let env = setup_test_env();
    let config = env.config();

    let list = ListArgs {
        region: None,
        status: StatusFilter::All,
        kind: None,
        search: None,
        sort: SortBy::Added,
    };
    commands::list(&list, &config).unwrap();
    commands::stats(&config).unwrap();
    commands::regions(&config).unwrap();

    assert!(!env.data_path().exists());
}

#[test]
fn test_malformed_file_fails_and_is_untouched() {
    let env = setup_test_env();
    let config = env.config();
    env.write_data("{ not json");

    let err = commands::add(add_args("Chest A", Region::Mondstadt, 1.0, 1.0), &config)
        .unwrap_err();
    assert!(format!("{err:#}").contains("Malformed"));
    assert!(commands::stats(&config).is_err());
    assert_eq!(env.read_data(), "{ not json");
}

#[test]
fn test_legacy_file_upgraded_on_first_write() {
    let env = setup_test_env();
    let config = env.config();
    env.write_data(&legacy_document(&[LegacyRecord {
        name: "Сундук",
        region: "Inazuma",
        x: 3.0,
        y: 4.0,
        kind: "Задание",
        collected: false,
        notes: "",
    }]));

    commands::add(add_args("Chest B", Region::Inazuma, 9.0, 9.0), &config).unwrap();

    let json = env.read_json();
    assert_eq!(json["items"][0]["type"], "quest");
    assert!(json["items"][0]["id"].as_str().is_some_and(|id| !id.is_empty()));
    assert_eq!(json["items"][1]["name"], "Chest B");
}

#[test]
fn test_data_file_override() {
    let env = setup_test_env();
    let other = env.home().join("elsewhere.json");
    let config = env.config().with_data_file(Some(other.clone()));

    commands::add(add_args("Chest A", Region::Fontaine, 0.0, 0.0), &config).unwrap();

    assert!(other.exists());
    assert!(!env.data_path().exists());
}

#[test]
fn test_setup_creates_config() {
    let env = TestEnv::new();
    let config = env.config();

    commands::setup(&config).unwrap();

    let content = env.read_global_config();
    assert!(content.contains("id_pattern"));
    assert!(content.contains("interactive"));
}
