// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use r3bl_ansi_fmt::{AnsiFmt, AnsiFmtResult, BACK, ColorName, FORE, STYLE};
use strum::IntoEnumIterator;

fn main() -> AnsiFmtResult<()> {
    let mut fmt = AnsiFmt::new();

    // Named codes, chained.
    {
        fmt.set_codes(&[STYLE.bold, FORE.red]);
        fmt.println("This is BOLD and RED")?;

        fmt.add_codes(&[BACK.white]);
        fmt.println("This is BOLD and RED on WHITE")?;

        fmt.set_fg_rgb(63, 127, 191);
        fmt.println("This is (63,127,191)")?;

        fmt.add_bg_ansi256(239);
        fmt.println("This is (63,127,191) on deep gray background")?;

        fmt.set_codes(&[]);
        fmt.println("Now reset to normal style")?;
    }

    // Every named foreground and background.
    {
        for name in ColorName::iter() {
            fmt.set_codes(&[FORE.get(name)]);
            fmt.printf(format_args!("{name:<14}"))?;
            fmt.set_codes(&[BACK.get(name)]);
            fmt.printf(format_args!("{:>4}", BACK.get(name)))?;
            println!();
        }
    }

    // Every code in the 0..=127 range, so the terminal shows what it supports.
    {
        for code in 0..=127 {
            fmt.set_codes(&[code]);
            fmt.printf(format_args!("{code:>4}"))?;
            if code % 16 == 15 {
                println!();
            }
        }
    }

    // 256 color lookup table.
    {
        for index in 0..=255_u8 {
            fmt.set_bg_ansi256(index).print("    ")?;
            if index == 7
                || index == 15
                || (16..=231).contains(&index) && (index - 15) % 6 == 0
                || index > 231 && (index - 231) % 8 == 0
            {
                println!();
            }
        }
    }

    // Truecolor ramp.
    {
        for red in (0..=255_u8).step_by(8) {
            for blue in (0..=255_u8).step_by(4) {
                fmt.set_bg_rgb(red, 0, blue).print(" ")?;
            }
            println!();
        }
    }

    // Disabled builders still close any ambient styling.
    {
        fmt.set_codes(&[STYLE.underline, FORE.bright_cyan]).disable();
        fmt.println("Formatting disabled")?;
        fmt.enable().println("Formatting enabled again")?;
    }

    Ok(())
}
