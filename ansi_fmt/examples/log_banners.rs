// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Prefix every `tracing` event with a colored level banner.

use std::fmt;

use r3bl_ansi_fmt::{AnsiFmt, FORE, STYLE};
use tracing::{Event, Level, Subscriber};
use tracing_subscriber::{fmt::{FmtContext, FormatEvent, FormatFields, format::Writer},
                         registry::LookupSpan};

#[derive(Debug, Default)]
struct BannerEventFormatter;

#[rustfmt::skip]
fn level_banner(level: Level) -> (AnsiFmt, &'static str) {
    match level {
        Level::TRACE => (AnsiFmt::from([FORE.bright_blue]), "[TRAC]"),
        Level::DEBUG => (AnsiFmt::from([FORE.bright_green]), "[DEBU]"),
        Level::INFO  => (AnsiFmt::from([FORE.bright_white]), "[INFO]"),
        Level::WARN  => (AnsiFmt::from([FORE.bright_yellow]), "[WARN]"),
        Level::ERROR => (AnsiFmt::from([FORE.bright_red, STYLE.slow_blink]), "[ERRO]"),
    }
}

impl<S, N> FormatEvent<S, N> for BannerEventFormatter
where
    S: Subscriber + for<'a> LookupSpan<'a>,
    N: for<'a> FormatFields<'a> + 'static,
{
    fn format_event(
        &self,
        ctx: &FmtContext<'_, S, N>,
        mut writer: Writer<'_>,
        event: &Event<'_>,
    ) -> fmt::Result {
        let (mut banner, label) = level_banner(*event.metadata().level());
        if !writer.has_ansi_escapes() {
            banner.disable();
        }
        write!(writer, "{} ", banner.paint(label))?;
        ctx.field_format().format_fields(writer.by_ref(), event)?;
        writeln!(writer)
    }
}

fn main() {
    tracing_subscriber::fmt()
        .with_max_level(Level::TRACE)
        .event_format(BannerEventFormatter)
        .init();

    tracing::trace!("Something very low level.");
    tracing::debug!("Useful debugging information.");
    tracing::info!("Something noteworthy happened!");
    tracing::warn!("You should probably take a look at this.");
    tracing::error!("Something failed but I'm not quitting.");
}
