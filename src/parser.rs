use std::collections::TryReserveError;
use std::iter::FusedIterator;

use tracing::trace;

use crate::config::{Malformed, ParseOptions};
use crate::pair::{Pair, Range};

/// Errors encountered while parsing a cookie header.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// A segment has no `=`.  index is the position in the input of
    /// the first non-whitespace byte of that segment.  Only reported
    /// with [Malformed::Reject].
    #[error("missing '=' in cookie segment at position {index}")]
    MissingSeparator { index: usize },
    /// Allocation failed while copying a value or growing a [Jar](crate::Jar).
    #[error("allocation failed: {0}")]
    Alloc(#[from] TryReserveError),
}

/// Parser is a Cookie header tokenizer.  It does not allocate; each
/// [Pair] refers back into the input string.
pub struct Parser<'a> {
    text: &'a str,
    pos: usize,
    options: ParseOptions,
}

impl<'a> Parser<'a> {
    /// Creates new Parser with the given header value and the default
    /// options.
    pub fn new(text: &'a str) -> Parser<'a> {
        Parser::with_options(text, ParseOptions::default())
    }

    pub fn with_options(text: &'a str, options: ParseOptions) -> Parser<'a> {
        Parser {
            text,
            pos: 0,
            options,
        }
    }

    /// Returns the next key/value pair.  If there is no pair left,
    /// this function returns `Ok(None)`.
    ///
    /// Application should keep calling this method until it returns
    /// either `Ok(None)` or `Err(Error)`.
    ///
    /// ```
    /// use cookieparse::Parser;
    ///
    /// let mut p = Parser::new("a=1; b = two words ;c=");
    ///
    /// loop {
    ///     match p.parse_pair().unwrap() {
    ///         None => break,
    ///         Some(pair) => println!("{}: {}", pair.key(), pair.value()),
    ///     }
    /// }
    /// ```
    ///
    /// A key may be repeated; every occurrence is returned in order.
    pub fn parse_pair(&mut self) -> Result<Option<Pair<'a>>, Error> {
        if self.eof() {
            return Ok(None);
        }

        let base = self.pos;

        let Some(eq) = self.find(base, b'=') else {
            return self.terminate(base);
        };

        if self.options.malformed == Malformed::Reject
            && self.data()[base..eq].contains(&b';')
        {
            return Err(self.missing_separator(base));
        }

        let value_start = eq + 1;
        let value_end = match self.find(value_start, b';') {
            Some(semi) => {
                self.pos = semi + 1;
                semi
            }
            None => {
                self.pos = self.data().len();
                self.pos
            }
        };

        let key = trim(self.data(), base..eq);
        let value = trim(self.data(), value_start..value_end);

        Ok(Some(Pair::new(self.text, key, value)))
    }

    /// Returns the current position in the input string.
    pub fn position(&self) -> usize {
        self.pos
    }
}

impl<'a> Parser<'a> {
    fn data(&self) -> &[u8] {
        self.text.as_bytes()
    }

    fn eof(&self) -> bool {
        self.pos == self.data().len()
    }

    fn find(&self, from: usize, delim: u8) -> Option<usize> {
        self.data()[from..]
            .iter()
            .position(|&x| x == delim)
            .map(|pos| from + pos)
    }

    fn terminate(&mut self, base: usize) -> Result<Option<Pair<'a>>, Error> {
        let tail = trim(self.data(), base..self.data().len());

        self.pos = self.data().len();

        if tail.is_empty() {
            return Ok(None);
        }

        match self.options.malformed {
            Malformed::Terminate => {
                trace!(index = tail.start, "cookie segment without '=', stopping");
                Ok(None)
            }
            Malformed::Reject => Err(Error::MissingSeparator { index: tail.start }),
        }
    }

    fn missing_separator(&mut self, base: usize) -> Error {
        let index = trim_start(self.data(), base..self.data().len()).start;

        self.pos = self.data().len();

        Error::MissingSeparator { index }
    }
}

/// Pairs iterates over the pairs of a cookie header.  A segment
/// without `=` ends the iteration.
///
/// ```
/// let keys: Vec<_> = cookieparse::pairs("a=1;b=2;broken").map(|p| p.key()).collect();
///
/// assert_eq!(keys, ["a", "b"]);
/// ```
pub struct Pairs<'a> {
    parser: Parser<'a>,
}

/// Returns an iterator over the pairs in `text`, using the default
/// [ParseOptions].
pub fn pairs(text: &str) -> Pairs<'_> {
    Pairs {
        parser: Parser::new(text),
    }
}

impl<'a> Iterator for Pairs<'a> {
    type Item = Pair<'a>;

    fn next(&mut self) -> Option<Pair<'a>> {
        // The default options never report Error.
        self.parser.parse_pair().ok().flatten()
    }
}

impl FusedIterator for Pairs<'_> {}

fn is_space(x: u8) -> bool {
    matches!(x, b' ' | b'\t' | b'\n' | b'\x0b' | b'\x0c' | b'\r')
}

fn trim_start(data: &[u8], mut span: Range) -> Range {
    while span.start < span.end && is_space(data[span.start]) {
        span.start += 1;
    }

    span
}

fn trim_end(data: &[u8], mut span: Range) -> Range {
    while span.end > span.start && is_space(data[span.end - 1]) {
        span.end -= 1;
    }

    span
}

fn trim(data: &[u8], span: Range) -> Range {
    trim_end(data, trim_start(data, span))
}
