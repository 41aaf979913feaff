// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Process wide switch that turns off formatting for every [`crate::AnsiFmt`] at once,
//! eg: when output is redirected to a file. While it is off, each builder renders the
//! plain reset sequence, exactly as if its own [`crate::AnsiFmt::disable`] had been
//! called. Stored codes are not touched, so turning it back on restores every builder.
//!
//! # Testing support
//!
//! The [serial_test](https://crates.io/crates/serial_test) crate is used to test this
//! module. In any test in which [`disable_all`] or [`enable_all`] is called, please use
//! the `#[serial]` attribute to annotate that test. Otherwise there will be flakiness in
//! the test results (tests are run in parallel using many threads).

use std::sync::atomic::{AtomicBool, Ordering};

static FMT_SWITCH_GLOBAL: AtomicBool = AtomicBool::new(true);

/// Turn formatting off for every builder in the process.
pub fn disable_all() {
    FMT_SWITCH_GLOBAL.store(false, Ordering::SeqCst);
    tracing::trace!("ansi formatting disabled globally");
}

/// Undo [`disable_all`]. This is the initial state.
pub fn enable_all() {
    FMT_SWITCH_GLOBAL.store(true, Ordering::SeqCst);
    tracing::trace!("ansi formatting enabled globally");
}

#[must_use]
pub fn is_enabled() -> bool { FMT_SWITCH_GLOBAL.load(Ordering::SeqCst) }
