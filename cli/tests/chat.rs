//! # HAL9000 Chat Integration Tests
//!
//! File: cli/tests/chat.rs
//! Author: Christi Mahu
//!
//! ## Overview
//!
//! Drives an interactive session through piped stdin. Lines starting with
//! `/` are commands; everything else is conversation. The session ends on
//! `/quit` or at end of input.
//!

mod common;
use common::*;
use predicates::prelude::*;

#[test]
fn test_session_prints_hints() {
    let (_dir, mut cmd) = hal_cmd();
    cmd.write_stdin("/quit\n")
        .assert()
        .success()
        .stdout(
            predicate::str::contains("Operator started the chat.")
                .and(predicate::str::contains("HAL9000 joined.")),
        );
}

#[test]
fn test_rooms_command() {
    let (_dir, mut cmd) = hal_cmd();
    cmd.arg("chat")
        .write_stdin("/rooms\n/quit\n")
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "\u{2014} Valid rooms are: ['kitchen', 'hangar', 'bridge']. \u{2014}",
        ));
}

#[test]
fn test_relocate_then_ask() {
    let (_dir, mut cmd) = hal_cmd();
    cmd.write_stdin("/relocate bridge\nwhere am i\n/quit\n")
        .assert()
        .success()
        .stdout(
            predicate::str::contains("\u{2014} Now in the bridge. \u{2014}")
                .and(predicate::str::contains("Hi, You are in the bridge.")),
        );
}

#[test]
fn test_unknown_command_is_refused() {
    let (_dir, mut cmd) = hal_cmd();
    cmd.write_stdin("/open the pod bay doors\n")
        .assert()
        .success()
        .stdout(
            predicate::str::contains("Command `open the pod bay doors` unknown.")
                .and(predicate::str::contains("I'm afraid I can't do that.")),
        );
}

#[test]
fn test_only_first_reply_is_greeted() {
    let (_dir, mut cmd) = hal_cmd();
    cmd.write_stdin("hello\n\nhello\nhello\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Hi, ").count(1));
}

#[test]
fn test_quit_stops_reading() {
    let (_dir, mut cmd) = hal_cmd();
    cmd.write_stdin("/quit\nwhere am i\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("You are in the").not());
}

#[test]
fn test_strict_relocation_from_config() {
    let (_dir, mut cmd) = hal_cmd_with_config(
        "[agent]\nstrict_relocation = true\n[display]\ncolor = false\n[speech]\nenabled = false\n",
    );
    cmd.write_stdin("/relocate moon\nwhere am i\n")
        .assert()
        .success()
        .stdout(
            predicate::str::contains("\u{2014} moon is not a valid room. \u{2014}")
                .and(predicate::str::contains("Hi, You are in the unknown.")),
        );
}
