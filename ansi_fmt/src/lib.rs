// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

// Skip rustfmt for rest of file.
// https://stackoverflow.com/a/75910283/2085356
#![cfg_attr(rustfmt, rustfmt_skip)]
#![cfg_attr(not(test), deny(clippy::unwrap_in_result))]

//! # r3bl_ansi_fmt
//!
//! Build ANSI SGR (Select Graphic Rendition) escape sequences from symbolic style and
//! color codes, and wrap arbitrary text with them.
//!
//! There are two pieces:
//! 1. The code table: [`STYLE`], [`FORE`] and [`BACK`]. These are `const` lookup
//!    tables mapping symbolic names to the numeric SGR parameters. Many style names
//!    alias the same number (eg: [`StyleTable::faint`], [`StyleTable::dim`] and
//!    [`StyleTable::decreased_intensity`] are all `2`).
//! 2. The sequence builder: [`AnsiFmt`]. It holds an ordered list of [`Code`]s and an
//!    enable flag. It renders them as `ESC [ code ; code ... m` and wraps content with
//!    that prefix and the plain reset `ESC [ m`.
//!
//! # Example usage:
//!
//! ```
//! use r3bl_ansi_fmt::{AnsiFmt, BACK, FORE, STYLE};
//!
//! let mut fmt = AnsiFmt::new();
//! fmt.set_codes(&[STYLE.bold, FORE.red]);
//! assert_eq!(fmt.render(), "\x1b[1;31m");
//! assert_eq!(fmt.sprint("hi"), "\x1b[1;31mhi\x1b[m");
//!
//! fmt.add_codes(&[BACK.white]);
//! assert_eq!(fmt.render(), "\x1b[1;31;47m");
//!
//! // 24-bit foreground on an 8-bit background.
//! fmt.set_fg_rgb(63, 127, 191).add_bg_ansi256(239);
//! assert_eq!(fmt.render(), "\x1b[38;2;63;127;191;48;5;239m");
//!
//! // Templated content.
//! let count = 3;
//! assert_eq!(
//!     fmt.sprintf(format_args!("{count} items")),
//!     "\x1b[38;2;63;127;191;48;5;239m3 items\x1b[m"
//! );
//! ```
//!
//! More info:
//! - <https://en.wikipedia.org/wiki/ANSI_escape_code#SGR_(Select_Graphic_Rendition)_parameters>
//! - <https://en.wikipedia.org/wiki/ANSI_escape_code#8-bit>
//! - <https://en.wikipedia.org/wiki/ANSI_escape_code#24-bit>

// Attach.
mod ansi_fmt;
mod ansi_fmt_error;
mod ansi_fmt_output;
mod constants;
mod sgr_code_table;

pub mod global_fmt_switch;

// Re-export.
pub use ansi_fmt::*;
pub use ansi_fmt_error::*;
pub use ansi_fmt_output::*;
pub use constants::*;
pub use sgr_code_table::*;
