// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! SGR (Select Graphic Rendition) sequence grammar.
//!
//! ```text
//! ESC '[' ( code (';' code)* )? 'm'
//! ```
//!
//! More info:
//! - <https://doc.rust-lang.org/reference/tokens.html#ascii-escapes>
//! - <https://notes.burke.libbey.me/ansi-escape-codes/>

use const_format::concatcp;

use crate::Code;

/// Control Sequence Introducer.
pub const CSI: &str = "\x1b[";

/// Final byte of an SGR sequence.
pub const SGR: &str = "m";

/// Separator between two codes in one sequence.
pub const SGR_SEPARATOR: char = ';';

/// Parameterless SGR. Terminals treat it as a reset to the default rendition. It closes
/// every styled output, and it is what a disabled [`crate::AnsiFmt`] renders.
pub const SGR_PLAIN_RESET: &str = concatcp!(CSI, SGR);

/// Same as [`SGR_PLAIN_RESET`], for byte oriented paths.
pub const SGR_PLAIN_RESET_BYTES: &[u8] = SGR_PLAIN_RESET.as_bytes();

/// Follows a custom color code (`38` / `48`) to select from the 256 color palette:
/// `38;5;n`.
pub const EXTENDED_COLOR_MODE_ANSI256: Code = 5;

/// Follows a custom color code (`38` / `48`) to select a direct RGB color:
/// `38;2;r;g;b`.
pub const EXTENDED_COLOR_MODE_RGB: Code = 2;
