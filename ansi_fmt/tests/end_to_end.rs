// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use pretty_assertions::assert_eq;
use r3bl_ansi_fmt::{AnsiFmt, BACK, Code, FORE, SGR_PLAIN_RESET, STYLE};
use test_case::test_case;

#[test]
fn bold_red_hi() {
    let mut fmt = AnsiFmt::new();
    fmt.set_codes(&[1, 31]);
    assert_eq!(fmt.render(), "\x1b[1;31m");
    assert_eq!(fmt.sprint("hi"), "\x1b[1;31mhi\x1b[m");
}

#[test]
fn walk_through_set_add_and_extended_colors() {
    let mut fmt = AnsiFmt::new();

    fmt.set_codes(&[STYLE.bold, FORE.magenta]);
    assert_eq!(fmt.render(), "\x1b[1;35m");

    fmt.add_codes(&[BACK.white]);
    assert_eq!(fmt.render(), "\x1b[1;35;47m");

    fmt.set_fg_rgb(63, 127, 191);
    assert_eq!(fmt.render(), "\x1b[38;2;63;127;191m");

    fmt.add_bg_ansi256(239);
    assert_eq!(fmt.render(), "\x1b[38;2;63;127;191;48;5;239m");

    fmt.set_codes(&[]);
    assert_eq!(fmt.render(), SGR_PLAIN_RESET);
}

/// Every destination and content mode emits `render() ++ content ++ ESC [ m`.
#[test_case(&[], true)]
#[test_case(&[1, 31], true)]
#[test_case(&[1, 31], false)]
#[test_case(&[38, 5, 200, 48, 2, 1, 2, 3], true)]
fn all_destinations_agree(codes: &[Code], enabled: bool) {
    let mut fmt = AnsiFmt::from(codes);
    if !enabled {
        fmt.disable();
    }
    let prefix = fmt.render().to_string();

    let literal = format!("{prefix}content{SGR_PLAIN_RESET}");
    let templated = format!("{prefix}n=5{SGR_PLAIN_RESET}");
    let line = format!("{prefix}content\n{SGR_PLAIN_RESET}");

    assert_eq!(fmt.sprint("content"), literal);
    assert_eq!(fmt.sprintf(format_args!("n={}", 5)), templated);
    assert_eq!(fmt.sprintln("content"), line);

    let mut sink: Vec<u8> = Vec::new();
    assert_eq!(fmt.fprint(&mut sink, "content").unwrap(), literal.len());
    assert_eq!(fmt.fprintf(&mut sink, format_args!("n={}", 5)).unwrap(), templated.len());
    assert_eq!(fmt.fprintln(&mut sink, "content").unwrap(), line.len());
    assert_eq!(String::from_utf8(sink).unwrap(), format!("{literal}{templated}{line}"));

    let buf = fmt.append(Vec::new(), "content");
    let buf = fmt.appendf(buf, format_args!("n={}", 5));
    let buf = fmt.appendln(buf, "content");
    assert_eq!(String::from_utf8(buf).unwrap(), format!("{literal}{templated}{line}"));
}

#[test]
fn equal_builders_behave_the_same() {
    let mut a = AnsiFmt::new();
    a.add_codes(&[STYLE.underline]).add_fg_ansi256(10);
    let b = AnsiFmt::from([4, 38, 5, 10]);
    assert_eq!(a, b);
    assert_eq!(a.sprint("x"), b.sprint("x"));
}
