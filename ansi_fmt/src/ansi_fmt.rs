// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use std::fmt::{Display, Formatter, Result};

use smallstr::SmallString;
use smallvec::SmallVec;

use crate::{BACK, CSI, Code, EXTENDED_COLOR_MODE_ANSI256, EXTENDED_COLOR_MODE_RGB, FORE,
            SGR, SGR_PLAIN_RESET, SGR_SEPARATOR, global_fmt_switch};

/// Holds an ordered list of [`Code`]s and an enable flag, and renders them as one SGR
/// escape sequence. The output methods (eg: [`AnsiFmt::sprint`], [`AnsiFmt::print`],
/// [`AnsiFmt::fprint`], [`AnsiFmt::append`]) wrap content with that sequence and the
/// plain reset.
///
/// - Insertion order is kept and emitted unchanged. When two codes set the same
///   attribute class the terminal applies the later one.
/// - Any [`Code`] is accepted, even ones with no named meaning. It is rendered as its
///   decimal text and the terminal decides what to do with it.
/// - [`AnsiFmt::disable`] keeps the stored codes. While disabled, the builder renders
///   the plain reset `ESC [ m` instead of its codes, so it still neutralizes any ambient
///   styling. [`AnsiFmt::enable`] brings the codes back.
///
/// The mutating methods return `&mut Self` so calls can be chained. There is no
/// internal locking; share an instance across threads behind your own lock.
///
/// # Example usage:
///
/// ```
/// use r3bl_ansi_fmt::{AnsiFmt, FORE, STYLE};
///
/// let mut fmt = AnsiFmt::new();
/// fmt.set_codes(&[STYLE.bold, FORE.magenta]);
/// assert_eq!(fmt.render(), "\x1b[1;35m");
///
/// fmt.disable();
/// assert_eq!(fmt.render(), "\x1b[m");
/// assert_eq!(fmt.codes(), &[1, 35]);
///
/// fmt.enable();
/// assert_eq!(fmt.render(), "\x1b[1;35m");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnsiFmt {
    codes: sizing::InlineVecCodes,
    enabled: bool,
}

pub mod sizing {
    use super::{Code, SmallString, SmallVec};

    /// Enough for a style, a 24-bit foreground and a 24-bit background
    /// (`1 + 5 + 5`) without spilling to the heap.
    pub const MAX_INLINE_CODES: usize = 12;
    pub type InlineVecCodes = SmallVec<[Code; MAX_INLINE_CODES]>;

    /// `ESC [` + 12 codes of up to 3 digits + separators + `m` fits.
    pub const MAX_INLINE_SGR_LEN: usize = 64;
    pub type InlineStringSgr = SmallString<[u8; MAX_INLINE_SGR_LEN]>;
}

impl Default for AnsiFmt {
    fn default() -> Self {
        Self {
            codes: sizing::InlineVecCodes::new(),
            enabled: true,
        }
    }
}

impl From<&[Code]> for AnsiFmt {
    fn from(codes: &[Code]) -> Self {
        Self {
            codes: codes.into(),
            enabled: true,
        }
    }
}

impl<const N: usize> From<[Code; N]> for AnsiFmt {
    fn from(codes: [Code; N]) -> Self { Self::from(&codes[..]) }
}

mod mutators {
    use super::{AnsiFmt, BACK, Code, EXTENDED_COLOR_MODE_ANSI256,
                EXTENDED_COLOR_MODE_RGB, FORE};

    impl AnsiFmt {
        /// Empty code list, enabled.
        #[must_use]
        pub fn new() -> Self { Self::default() }

        /// Discard all held codes and store `codes` instead.
        pub fn set_codes(&mut self, codes: &[Code]) -> &mut Self {
            self.codes.clear();
            self.add_codes(codes)
        }

        /// Append `codes` after the held ones, keeping their order.
        pub fn add_codes(&mut self, codes: &[Code]) -> &mut Self {
            self.codes.extend_from_slice(codes);
            self
        }

        /// Replace all codes with `38;5;index`, from the 256 color lookup table.
        /// - <https://en.wikipedia.org/wiki/ANSI_escape_code#8-bit>
        pub fn set_fg_ansi256(&mut self, index: u8) -> &mut Self {
            self.set_codes(&[FORE.custom, EXTENDED_COLOR_MODE_ANSI256, index])
        }

        /// Append `38;5;index`, from the 256 color lookup table.
        /// - <https://en.wikipedia.org/wiki/ANSI_escape_code#8-bit>
        pub fn add_fg_ansi256(&mut self, index: u8) -> &mut Self {
            self.add_codes(&[FORE.custom, EXTENDED_COLOR_MODE_ANSI256, index])
        }

        /// Replace all codes with `48;5;index`, from the 256 color lookup table.
        pub fn set_bg_ansi256(&mut self, index: u8) -> &mut Self {
            self.set_codes(&[BACK.custom, EXTENDED_COLOR_MODE_ANSI256, index])
        }

        /// Append `48;5;index`, from the 256 color lookup table.
        pub fn add_bg_ansi256(&mut self, index: u8) -> &mut Self {
            self.add_codes(&[BACK.custom, EXTENDED_COLOR_MODE_ANSI256, index])
        }

        /// Replace all codes with the truecolor foreground `38;2;r;g;b`.
        /// - <https://en.wikipedia.org/wiki/ANSI_escape_code#24-bit>
        pub fn set_fg_rgb(&mut self, red: u8, green: u8, blue: u8) -> &mut Self {
            self.set_codes(&[FORE.custom, EXTENDED_COLOR_MODE_RGB, red, green, blue])
        }

        /// Append the truecolor foreground `38;2;r;g;b`.
        pub fn add_fg_rgb(&mut self, red: u8, green: u8, blue: u8) -> &mut Self {
            self.add_codes(&[FORE.custom, EXTENDED_COLOR_MODE_RGB, red, green, blue])
        }

        /// Replace all codes with the truecolor background `48;2;r;g;b`.
        pub fn set_bg_rgb(&mut self, red: u8, green: u8, blue: u8) -> &mut Self {
            self.set_codes(&[BACK.custom, EXTENDED_COLOR_MODE_RGB, red, green, blue])
        }

        /// Append the truecolor background `48;2;r;g;b`.
        pub fn add_bg_rgb(&mut self, red: u8, green: u8, blue: u8) -> &mut Self {
            self.add_codes(&[BACK.custom, EXTENDED_COLOR_MODE_RGB, red, green, blue])
        }

        /// Render the plain reset instead of the held codes, until [`Self::enable`].
        pub fn disable(&mut self) -> &mut Self {
            self.enabled = false;
            self
        }

        /// Render the held codes again after [`Self::disable`].
        pub fn enable(&mut self) -> &mut Self {
            self.enabled = true;
            self
        }
    }
}

mod accessors {
    use super::{AnsiFmt, CSI, Code, SGR, SGR_PLAIN_RESET, SGR_SEPARATOR,
                global_fmt_switch, sizing::InlineStringSgr};

    impl AnsiFmt {
        #[must_use]
        pub fn codes(&self) -> &[Code] { &self.codes }

        /// The builder's own flag. Formatting can also be turned off for the whole
        /// process with [`global_fmt_switch::disable_all`].
        #[must_use]
        pub fn is_enabled(&self) -> bool { self.enabled }

        /// The opening escape sequence.
        ///
        /// - Disabled (here, or via [`global_fmt_switch`]): `ESC [ m`.
        /// - Enabled: `ESC [`, the codes in decimal joined by `;`, then `m`. No codes
        ///   also gives `ESC [ m`, which terminals treat as a reset.
        ///
        /// The result is built in an inline buffer, so the common case does not
        /// allocate.
        #[must_use]
        pub fn render(&self) -> InlineStringSgr {
            let mut acc = InlineStringSgr::new();

            if !(self.enabled && global_fmt_switch::is_enabled()) {
                acc.push_str(SGR_PLAIN_RESET);
                return acc;
            }

            acc.push_str(CSI);
            for (index, code) in self.codes.iter().enumerate() {
                if index > 0 {
                    acc.push(SGR_SEPARATOR);
                }
                push_code_as_decimal(&mut acc, *code);
            }
            acc.push_str(SGR);

            acc
        }
    }

    /// No leading zeros, no sign.
    fn push_code_as_decimal(acc: &mut InlineStringSgr, code: Code) {
        let hundreds = code / 100;
        let tens = (code / 10) % 10;
        let ones = code % 10;
        if hundreds > 0 {
            acc.push(char::from(b'0' + hundreds));
        }
        if hundreds > 0 || tens > 0 {
            acc.push(char::from(b'0' + tens));
        }
        acc.push(char::from(b'0' + ones));
    }
}

impl Display for AnsiFmt {
    /// Same text as [`AnsiFmt::render`].
    fn fmt(&self, f: &mut Formatter<'_>) -> Result { f.write_str(&self.render()) }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use test_case::test_case;

    use super::*;
    use crate::STYLE;

    #[test]
    fn new_is_empty_and_enabled() {
        let fmt = AnsiFmt::new();
        assert!(fmt.codes().is_empty());
        assert!(fmt.is_enabled());
        assert_eq!(fmt, AnsiFmt::default());
    }

    #[test]
    fn empty_codes_render_plain_reset() {
        assert_eq!(AnsiFmt::new().render(), "\x1b[m");
    }

    #[test_case(&[1], "\x1b[1m")]
    #[test_case(&[1, 35], "\x1b[1;35m")]
    #[test_case(&[1, 35, 47], "\x1b[1;35;47m")]
    #[test_case(&[0], "\x1b[0m")]
    #[test_case(&[9, 10, 99, 100, 107, 255], "\x1b[9;10;99;100;107;255m")]
    fn render_joins_codes_in_order(codes: &[Code], expected: &str) {
        assert_eq!(AnsiFmt::from(codes).render(), expected);
    }

    #[test]
    fn every_code_renders_as_its_decimal_text() {
        for code in Code::MIN..=Code::MAX {
            assert_eq!(
                AnsiFmt::from([code]).render().as_str(),
                format!("\x1b[{code}m")
            );
        }
    }

    #[test]
    fn set_codes_replaces_prior_contents() {
        let mut fmt = AnsiFmt::from([STYLE.bold, FORE.green, BACK.white]);
        fmt.set_codes(&[FORE.red]);
        assert_eq!(fmt.codes(), &[31]);
        assert_eq!(fmt.render(), "\x1b[31m");

        fmt.set_codes(&[]);
        assert_eq!(fmt.render(), "\x1b[m");
    }

    #[test]
    fn add_codes_keeps_order_across_calls() {
        let mut split = AnsiFmt::new();
        split.add_codes(&[1, 2]).add_codes(&[3]);

        let mut joined = AnsiFmt::new();
        joined.add_codes(&[1, 2, 3]);

        assert_eq!(split, joined);
        assert_eq!(split.codes(), &[1, 2, 3]);
    }

    #[test]
    fn chained_set_then_add() {
        let mut fmt = AnsiFmt::new();
        fmt.set_codes(&[STYLE.bold, FORE.magenta]).add_codes(&[BACK.white]);
        assert_eq!(fmt.render(), "\x1b[1;35;47m");
    }

    #[test_case(0)]
    #[test_case(16)]
    #[test_case(239)]
    #[test_case(255)]
    fn ansi256_helpers(index: u8) {
        let mut fmt = AnsiFmt::from([STYLE.bold]);

        fmt.add_fg_ansi256(index);
        assert_eq!(fmt.codes(), &[1, 38, 5, index]);

        fmt.add_bg_ansi256(index);
        assert_eq!(fmt.codes(), &[1, 38, 5, index, 48, 5, index]);

        fmt.set_fg_ansi256(index);
        assert_eq!(fmt.codes(), &[38, 5, index]);

        fmt.set_bg_ansi256(index);
        assert_eq!(fmt.codes(), &[48, 5, index]);
    }

    #[test]
    fn rgb_helpers() {
        let mut fmt = AnsiFmt::from([STYLE.italic]);

        fmt.add_fg_rgb(63, 127, 191);
        assert_eq!(fmt.codes(), &[3, 38, 2, 63, 127, 191]);

        fmt.add_bg_rgb(1, 2, 3);
        assert_eq!(fmt.codes(), &[3, 38, 2, 63, 127, 191, 48, 2, 1, 2, 3]);

        fmt.set_fg_rgb(63, 127, 191);
        assert_eq!(fmt.render(), "\x1b[38;2;63;127;191m");

        fmt.add_bg_ansi256(239);
        assert_eq!(fmt.render(), "\x1b[38;2;63;127;191;48;5;239m");

        fmt.set_bg_rgb(0, 0, 0);
        assert_eq!(fmt.render(), "\x1b[48;2;0;0;0m");
    }

    #[test]
    fn disable_keeps_codes_and_enable_restores_them() {
        let mut fmt = AnsiFmt::from([STYLE.bold, FORE.red]);
        let before = fmt.render();

        fmt.disable();
        assert!(!fmt.is_enabled());
        assert_eq!(fmt.render(), "\x1b[m");
        assert_eq!(fmt.codes(), &[1, 31]);

        fmt.enable();
        assert_eq!(fmt.render(), before);
    }

    #[test]
    fn disabled_with_no_codes_matches_enabled_with_no_codes() {
        let mut disabled = AnsiFmt::new();
        disabled.disable();
        assert_eq!(disabled.render(), AnsiFmt::new().render());
    }

    #[test]
    fn display_matches_render() {
        let fmt = AnsiFmt::from([STYLE.underline, BACK.bright_blue]);
        assert_eq!(fmt.to_string(), "\x1b[4;104m");
        assert_eq!(format!("{fmt}"), fmt.render().as_str());
    }

    #[test]
    fn long_code_lists_spill_without_changing_output() {
        let codes: Vec<Code> = (0..40).collect();
        let fmt = AnsiFmt::from(&codes[..]);
        let expected = format!(
            "\x1b[{}m",
            codes.iter().map(ToString::to_string).collect::<Vec<_>>().join(";")
        );
        assert_eq!(fmt.render().as_str(), expected);
    }
}
