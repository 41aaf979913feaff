// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Every test here touches process wide state, so they all run `#[serial]`.

use pretty_assertions::assert_eq;
use r3bl_ansi_fmt::{AnsiFmt, FORE, STYLE, global_fmt_switch};
use serial_test::serial;

#[serial]
#[test]
fn enabled_by_default() {
    assert!(global_fmt_switch::is_enabled());
    assert_eq!(AnsiFmt::from([STYLE.bold]).render(), "\x1b[1m");
}

#[serial]
#[test]
fn disable_all_renders_plain_reset_and_keeps_codes() {
    let fmt = AnsiFmt::from([STYLE.bold, FORE.red]);

    global_fmt_switch::disable_all();
    assert!(!global_fmt_switch::is_enabled());
    assert_eq!(fmt.render(), "\x1b[m");
    assert_eq!(fmt.sprint("hi"), "\x1b[mhi\x1b[m");
    assert_eq!(fmt.codes(), &[1, 31]);
    // The builder's own flag is untouched.
    assert!(fmt.is_enabled());

    global_fmt_switch::enable_all();
    assert_eq!(fmt.render(), "\x1b[1;31m");
}

#[serial]
#[test]
fn enable_all_does_not_override_a_disabled_builder() {
    let mut fmt = AnsiFmt::from([FORE.green]);
    fmt.disable();

    global_fmt_switch::enable_all();
    assert_eq!(fmt.render(), "\x1b[m");

    fmt.enable();
    assert_eq!(fmt.render(), "\x1b[32m");
}
