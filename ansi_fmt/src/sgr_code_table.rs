// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Named SGR parameters. The tables are `const`, so they are built at compile time and
//! can be read from any thread without synchronization.
//!
//! Names are a lookup layer only. A [`Code`] is a bare number and the reverse mapping is
//! not unique: many names share one number (eg: `strike`, `crossed_out` and `delete`
//! are all `9`), reflecting the naming used by different terminal emulators.
//!
//! More info:
//! - <https://en.wikipedia.org/wiki/ANSI_escape_code#SGR_(Select_Graphic_Rendition)_parameters>
//! - <https://en.wikipedia.org/wiki/ANSI_escape_code#3-bit_and_4-bit>

use strum_macros::{Display, EnumCount, EnumIter};

/// One SGR parameter. Any value in `0..=255` is accepted by [`crate::AnsiFmt`], even
/// ones with no named meaning.
pub type Code = u8;

/// Text style attributes and their "no-X" counterparts. Use the [`STYLE`] instance.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StyleTable {
    // 0
    pub reset: Code,
    pub normal: Code,
    pub plain: Code,
    // 1
    pub bold: Code,
    pub increased_intensity: Code,
    // 2
    pub faint: Code,
    pub dim: Code,
    pub decreased_intensity: Code,
    // 3
    pub italic: Code,
    // 4
    pub underline: Code,
    // 5
    pub slow_blink: Code,
    // 6
    pub rapid_blink: Code,
    // 7
    pub invert: Code,
    pub reverse_video: Code,
    // 8
    pub conceal: Code,
    pub hide: Code,
    // 9
    pub strike: Code,
    pub crossed_out: Code,
    pub delete: Code,
    // 10
    pub primary_font: Code,
    pub default_font: Code,
    // 11 - 19
    pub alternative_font_1: Code,
    pub alternative_font_2: Code,
    pub alternative_font_3: Code,
    pub alternative_font_4: Code,
    pub alternative_font_5: Code,
    pub alternative_font_6: Code,
    pub alternative_font_7: Code,
    pub alternative_font_8: Code,
    pub alternative_font_9: Code,
    // 20
    pub fraktur: Code,
    pub gothic: Code,
    pub blackletter: Code,

    // 21
    pub doubly_underlined: Code,
    pub no_bold: Code,
    // 22
    pub normal_intensity: Code,
    // 23
    pub no_italic: Code,
    pub no_fraktur: Code,
    pub no_gothic: Code,
    pub no_blackletter: Code,
    // 24
    pub no_underline: Code,
    // 25
    pub no_blink: Code,
    /// Not known to be used by any terminal.
    pub proportional_spacing: Code,
    // 27
    pub no_invert: Code,
    pub no_reverse: Code,
    // 28
    pub no_conceal: Code,
    pub reveal: Code,
    // 29
    pub no_strike: Code,
    pub no_crossed_out: Code,
    pub no_delete: Code,

    // 50 - 55
    pub no_proportional_spacing: Code,
    pub frame: Code,
    pub encircle: Code,
    pub overline: Code,
    pub no_frame: Code,
    pub no_encircle: Code,
    pub no_overline: Code,

    /// Followed by `5;n` or `2;r;g;b`, same as the custom color codes.
    pub custom_underline_color: Code,
    pub default_underline_colors: Code,

    // 60 - 65
    pub ideogram_underline: Code,
    pub ideogram_right_side_line: Code,
    pub ideogram_double_underline: Code,
    pub ideogram_double_right_side_line: Code,
    pub ideogram_overline: Code,
    pub ideogram_left_side_line: Code,
    pub ideogram_double_overline: Code,
    pub ideogram_double_left_side_line: Code,
    pub ideogram_stress_marking: Code,
    pub no_ideogram_attribute: Code,

    // 73 - 75
    pub superscript: Code,
    pub subscript: Code,
    pub no_superscript: Code,
    pub no_subscript: Code,
}

/// A foreground or background palette. Use the [`FORE`] or [`BACK`] instance.
///
/// Each [`BACK`] code is the matching [`FORE`] code plus 10. The bright variants live in
/// a separate range (90s / 100s) from the base 8 colors (30s / 40s).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColorTable {
    pub black: Code,
    pub red: Code,
    pub green: Code,
    pub yellow: Code,
    pub blue: Code,
    pub magenta: Code,
    pub cyan: Code,
    pub white: Code,

    /// Next arguments are `5;n` or `2;r;g;b`.
    /// - <https://en.wikipedia.org/wiki/ANSI_escape_code#8-bit>
    /// - <https://en.wikipedia.org/wiki/ANSI_escape_code#24-bit>
    pub custom: Code,

    pub default: Code,

    pub bright_black: Code,
    pub bright_red: Code,
    pub bright_green: Code,
    pub bright_yellow: Code,
    pub bright_blue: Code,
    pub bright_magenta: Code,
    pub bright_cyan: Code,
    pub bright_white: Code,
}

/// The fields of [`ColorTable`], so a palette can be iterated or indexed by name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter, EnumCount, Display)]
pub enum ColorName {
    Black,
    Red,
    Green,
    Yellow,
    Blue,
    Magenta,
    Cyan,
    White,
    Custom,
    Default,
    BrightBlack,
    BrightRed,
    BrightGreen,
    BrightYellow,
    BrightBlue,
    BrightMagenta,
    BrightCyan,
    BrightWhite,
}

impl ColorTable {
    #[rustfmt::skip]
    #[must_use]
    pub const fn get(&self, name: ColorName) -> Code {
        match name {
            ColorName::Black         => self.black,
            ColorName::Red           => self.red,
            ColorName::Green         => self.green,
            ColorName::Yellow        => self.yellow,
            ColorName::Blue          => self.blue,
            ColorName::Magenta       => self.magenta,
            ColorName::Cyan          => self.cyan,
            ColorName::White         => self.white,
            ColorName::Custom        => self.custom,
            ColorName::Default       => self.default,
            ColorName::BrightBlack   => self.bright_black,
            ColorName::BrightRed     => self.bright_red,
            ColorName::BrightGreen   => self.bright_green,
            ColorName::BrightYellow  => self.bright_yellow,
            ColorName::BrightBlue    => self.bright_blue,
            ColorName::BrightMagenta => self.bright_magenta,
            ColorName::BrightCyan    => self.bright_cyan,
            ColorName::BrightWhite   => self.bright_white,
        }
    }
}

#[rustfmt::skip]
pub const STYLE: StyleTable = StyleTable {
    reset: 0, normal: 0, plain: 0,
    bold: 1, increased_intensity: 1,
    faint: 2, dim: 2, decreased_intensity: 2,
    italic: 3,
    underline: 4,
    slow_blink: 5,
    rapid_blink: 6,
    invert: 7, reverse_video: 7,
    conceal: 8, hide: 8,
    strike: 9, crossed_out: 9, delete: 9,
    primary_font: 10, default_font: 10,
    alternative_font_1: 11,
    alternative_font_2: 12,
    alternative_font_3: 13,
    alternative_font_4: 14,
    alternative_font_5: 15,
    alternative_font_6: 16,
    alternative_font_7: 17,
    alternative_font_8: 18,
    alternative_font_9: 19,
    fraktur: 20, gothic: 20, blackletter: 20,

    doubly_underlined: 21, no_bold: 21,
    normal_intensity: 22,
    no_italic: 23, no_fraktur: 23, no_gothic: 23, no_blackletter: 23,
    no_underline: 24,
    no_blink: 25,
    proportional_spacing: 26,
    no_invert: 27, no_reverse: 27,
    no_conceal: 28, reveal: 28,
    no_strike: 29, no_crossed_out: 29, no_delete: 29,

    no_proportional_spacing: 50,
    frame: 51,
    encircle: 52,
    overline: 53,
    no_frame: 54, no_encircle: 54,
    no_overline: 55,

    custom_underline_color: 58,
    default_underline_colors: 59,

    ideogram_underline: 60, ideogram_right_side_line: 60,
    ideogram_double_underline: 61, ideogram_double_right_side_line: 61,
    ideogram_overline: 62, ideogram_left_side_line: 62,
    ideogram_double_overline: 63, ideogram_double_left_side_line: 63,
    ideogram_stress_marking: 64,
    no_ideogram_attribute: 65,

    superscript: 73,
    subscript: 74,
    no_superscript: 75, no_subscript: 75,
};

#[rustfmt::skip]
pub const FORE: ColorTable = ColorTable {
    black:   30,
    red:     31,
    green:   32,
    yellow:  33,
    blue:    34,
    magenta: 35,
    cyan:    36,
    white:   37,

    custom:  38,
    default: 39,

    bright_black:   90,
    bright_red:     91,
    bright_green:   92,
    bright_yellow:  93,
    bright_blue:    94,
    bright_magenta: 95,
    bright_cyan:    96,
    bright_white:   97,
};

#[rustfmt::skip]
pub const BACK: ColorTable = ColorTable {
    black:   40,
    red:     41,
    green:   42,
    yellow:  43,
    blue:    44,
    magenta: 45,
    cyan:    46,
    white:   47,

    custom:  48,
    default: 49,

    bright_black:   100,
    bright_red:     101,
    bright_green:   102,
    bright_yellow:  103,
    bright_blue:    104,
    bright_magenta: 105,
    bright_cyan:    106,
    bright_white:   107,
};
