// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Apply an [`AnsiFmt`] to content and emit it. Every method produces exactly:
//!
//! ```text
//! AnsiFmt::render() ++ content ++ ESC [ m
//! ```
//!
//! There are 4 destinations and 3 ways to supply content:
//!
//! | Destination             | Literal          | Templated         | Line terminated    |
//! |-------------------------|------------------|-------------------|--------------------|
//! | stdout                  | [`AnsiFmt::print`]  | [`AnsiFmt::printf`]  | [`AnsiFmt::println`]  |
//! | [`String`]              | [`AnsiFmt::sprint`] | [`AnsiFmt::sprintf`] | [`AnsiFmt::sprintln`] |
//! | any [`std::io::Write`]  | [`AnsiFmt::fprint`] | [`AnsiFmt::fprintf`] | [`AnsiFmt::fprintln`] |
//! | a [`Vec<u8>`] buffer    | [`AnsiFmt::append`] | [`AnsiFmt::appendf`] | [`AnsiFmt::appendln`] |
//!
//! - Literal content is anything that implements [`Display`], written as is.
//! - Templated content is [`Arguments`], built with [`format_args!`].
//! - Line terminated content gets exactly one `\n` appended, before the reset.
//!
//! The literal and line terminated methods also come in an `_all` flavor (eg:
//! [`AnsiFmt::sprint_all`], [`AnsiFmt::sprintln_all`]) that takes an ordered slice of
//! values. Literal mode concatenates them, line terminated mode puts one space between
//! neighbors.
//!
//! The closing reset is always the plain `ESC [ m`, even when the builder is disabled.

use std::{fmt::{Arguments, Display, Formatter, Result},
          io::{self, ErrorKind, Write}};

use crate::{AnsiFmt, AnsiFmtError, AnsiFmtResult, SGR_PLAIN_RESET, SGR_PLAIN_RESET_BYTES};

/// Lazily formatted styled content. Nothing is rendered until it is displayed, so it can
/// be embedded directly in `format!`, `write!` or `println!`. Created by
/// [`AnsiFmt::paint`] and [`AnsiFmt::paintln`].
///
/// ```
/// use r3bl_ansi_fmt::{AnsiFmt, FORE};
///
/// let warn = AnsiFmt::from([FORE.bright_yellow]);
/// let line = format!("{} disk almost full", warn.paint("[WARN]"));
/// assert_eq!(line, "\x1b[93m[WARN]\x1b[m disk almost full");
/// ```
#[derive(Debug, Clone, Copy)]
pub struct StyledContent<'a, T: Display> {
    ansi_fmt: &'a AnsiFmt,
    content: T,
    terminate_line: bool,
}

impl<T: Display> Display for StyledContent<'_, T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        f.write_str(&self.ansi_fmt.render())?;
        write!(f, "{}", self.content)?;
        if self.terminate_line {
            f.write_str("\n")?;
        }
        f.write_str(SGR_PLAIN_RESET)
    }
}

/// Several content values displayed as one, `separator` between neighbors.
struct ContentList<'a> {
    items: &'a [&'a dyn Display],
    separator: &'static str,
}

impl<'a> ContentList<'a> {
    fn joined(items: &'a [&'a dyn Display]) -> Self {
        Self {
            items,
            separator: "",
        }
    }

    fn spaced(items: &'a [&'a dyn Display]) -> Self {
        Self {
            items,
            separator: " ",
        }
    }
}

impl Display for ContentList<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        for (index, item) in self.items.iter().enumerate() {
            if index > 0 {
                f.write_str(self.separator)?;
            }
            write!(f, "{item}")?;
        }
        Ok(())
    }
}

mod lazy {
    use super::{AnsiFmt, Display, StyledContent};

    impl AnsiFmt {
        #[must_use]
        pub fn paint<T: Display>(&self, content: T) -> StyledContent<'_, T> {
            StyledContent {
                ansi_fmt: self,
                content,
                terminate_line: false,
            }
        }

        /// Same as [`Self::paint`] with one `\n` after the content.
        #[must_use]
        pub fn paintln<T: Display>(&self, content: T) -> StyledContent<'_, T> {
            StyledContent {
                ansi_fmt: self,
                content,
                terminate_line: true,
            }
        }
    }
}

mod to_string {
    use super::{AnsiFmt, Arguments, ContentList, Display};

    impl AnsiFmt {
        #[must_use]
        pub fn sprint(&self, content: impl Display) -> String {
            self.paint(content).to_string()
        }

        /// ```
        /// use r3bl_ansi_fmt::{AnsiFmt, STYLE};
        ///
        /// let name = "world";
        /// let bold = AnsiFmt::from([STYLE.bold]);
        /// assert_eq!(bold.sprintf(format_args!("hello {name}!")), "\x1b[1mhello world!\x1b[m");
        /// ```
        #[must_use]
        pub fn sprintf(&self, args: Arguments<'_>) -> String { self.sprint(args) }

        #[must_use]
        pub fn sprintln(&self, content: impl Display) -> String {
            self.paintln(content).to_string()
        }

        /// Concatenate `contents` in order, with nothing in between.
        #[must_use]
        pub fn sprint_all(&self, contents: &[&dyn Display]) -> String {
            self.sprint(ContentList::joined(contents))
        }

        /// ```
        /// use r3bl_ansi_fmt::{AnsiFmt, STYLE};
        ///
        /// let bold = AnsiFmt::from([STYLE.bold]);
        /// assert_eq!(bold.sprintln_all(&[&"a", &1]), "\x1b[1ma 1\n\x1b[m");
        /// ```
        #[must_use]
        pub fn sprintln_all(&self, contents: &[&dyn Display]) -> String {
            self.sprintln(ContentList::spaced(contents))
        }
    }
}

mod to_writer {
    use super::{AnsiFmt, AnsiFmtError, AnsiFmtResult, Arguments, ContentList, Display,
                ErrorKind, Write, io};

    impl AnsiFmt {
        /// Write styled content to `sink`, returning the number of bytes written.
        ///
        /// # Errors
        ///
        /// Returns the error reported by `sink`, along with the number of bytes it
        /// accepted before failing ([`AnsiFmtError::bytes_written`]).
        pub fn fprint<W: Write + ?Sized>(
            &self,
            sink: &mut W,
            content: impl Display,
        ) -> AnsiFmtResult<usize> {
            write_all_counted(sink, &self.sprint(content))
        }

        /// # Errors
        ///
        /// Same as [`Self::fprint`].
        pub fn fprintf<W: Write + ?Sized>(
            &self,
            sink: &mut W,
            args: Arguments<'_>,
        ) -> AnsiFmtResult<usize> {
            self.fprint(sink, args)
        }

        /// # Errors
        ///
        /// Same as [`Self::fprint`].
        pub fn fprintln<W: Write + ?Sized>(
            &self,
            sink: &mut W,
            content: impl Display,
        ) -> AnsiFmtResult<usize> {
            write_all_counted(sink, &self.sprintln(content))
        }

        /// # Errors
        ///
        /// Same as [`Self::fprint`].
        pub fn fprint_all<W: Write + ?Sized>(
            &self,
            sink: &mut W,
            contents: &[&dyn Display],
        ) -> AnsiFmtResult<usize> {
            self.fprint(sink, ContentList::joined(contents))
        }

        /// # Errors
        ///
        /// Same as [`Self::fprint`].
        pub fn fprintln_all<W: Write + ?Sized>(
            &self,
            sink: &mut W,
            contents: &[&dyn Display],
        ) -> AnsiFmtResult<usize> {
            self.fprintln(sink, ContentList::spaced(contents))
        }

        /// Write styled content to stdout and flush it.
        ///
        /// # Errors
        ///
        /// Returns the error reported by stdout, along with the number of bytes it
        /// accepted before failing.
        pub fn print(&self, content: impl Display) -> AnsiFmtResult<usize> {
            write_to_stdout(&self.sprint(content))
        }

        /// # Errors
        ///
        /// Same as [`Self::print`].
        pub fn printf(&self, args: Arguments<'_>) -> AnsiFmtResult<usize> {
            self.print(args)
        }

        /// # Errors
        ///
        /// Same as [`Self::print`].
        pub fn println(&self, content: impl Display) -> AnsiFmtResult<usize> {
            write_to_stdout(&self.sprintln(content))
        }

        /// # Errors
        ///
        /// Same as [`Self::print`].
        pub fn print_all(&self, contents: &[&dyn Display]) -> AnsiFmtResult<usize> {
            self.print(ContentList::joined(contents))
        }

        /// # Errors
        ///
        /// Same as [`Self::print`].
        pub fn println_all(&self, contents: &[&dyn Display]) -> AnsiFmtResult<usize> {
            self.println(ContentList::spaced(contents))
        }
    }

    fn write_to_stdout(text: &str) -> AnsiFmtResult<usize> {
        let mut stdout = io::stdout().lock();
        let byte_count = write_all_counted(&mut stdout, text)?;
        if let Err(err) = stdout.flush() {
            tracing::debug!(?err, "failed to flush styled output");
            return Err(AnsiFmtError::io(byte_count, err));
        }
        Ok(byte_count)
    }

    /// Like [`Write::write_all`], but keeps track of how many bytes the sink accepted so
    /// the count survives a failure.
    fn write_all_counted<W: Write + ?Sized>(
        sink: &mut W,
        text: &str,
    ) -> AnsiFmtResult<usize> {
        let mut remaining = text.as_bytes();
        let mut bytes_written = 0;

        while !remaining.is_empty() {
            match sink.write(remaining) {
                Ok(0) => {
                    let err = io::Error::new(
                        ErrorKind::WriteZero,
                        "failed to write whole buffer",
                    );
                    tracing::debug!(?err, bytes_written, "failed to write styled output");
                    return Err(AnsiFmtError::io(bytes_written, err));
                }
                Ok(count) => {
                    bytes_written += count;
                    remaining = &remaining[count..];
                }
                Err(err) if err.kind() == ErrorKind::Interrupted => {}
                Err(err) => {
                    tracing::debug!(?err, bytes_written, "failed to write styled output");
                    return Err(AnsiFmtError::io(bytes_written, err));
                }
            }
        }

        Ok(bytes_written)
    }
}

mod to_buffer {
    use super::{AnsiFmt, Arguments, ContentList, Display, SGR_PLAIN_RESET_BYTES};

    impl AnsiFmt {
        /// Append styled content to `buf` and hand it back.
        #[must_use]
        pub fn append(&self, buf: Vec<u8>, content: impl Display) -> Vec<u8> {
            self.append_styled(buf, content, false)
        }

        #[must_use]
        pub fn appendf(&self, buf: Vec<u8>, args: Arguments<'_>) -> Vec<u8> {
            self.append(buf, args)
        }

        #[must_use]
        pub fn appendln(&self, buf: Vec<u8>, content: impl Display) -> Vec<u8> {
            self.append_styled(buf, content, true)
        }

        #[must_use]
        pub fn append_all(&self, buf: Vec<u8>, contents: &[&dyn Display]) -> Vec<u8> {
            self.append(buf, ContentList::joined(contents))
        }

        #[must_use]
        pub fn appendln_all(&self, buf: Vec<u8>, contents: &[&dyn Display]) -> Vec<u8> {
            self.appendln(buf, ContentList::spaced(contents))
        }

        fn append_styled(
            &self,
            mut buf: Vec<u8>,
            content: impl Display,
            terminate_line: bool,
        ) -> Vec<u8> {
            buf.extend_from_slice(self.render().as_bytes());
            buf.extend_from_slice(content.to_string().as_bytes());
            if terminate_line {
                buf.push(b'\n');
            }
            buf.extend_from_slice(SGR_PLAIN_RESET_BYTES);
            buf
        }
    }
}
