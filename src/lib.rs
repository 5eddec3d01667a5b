//! HTTP [Cookie](https://datatracker.ietf.org/doc/html/rfc6265#section-5.4)
//! header parser.
//!
//! Splits a `Cookie` header value into `key=value` pairs separated by
//! `;`.  The tokenizer does not allocate: every [Pair] borrows its key
//! and value from the input string.  On top of it sit a traversal
//! driver ([parse]), a single key lookup ([lookup]) and an owned,
//! growable collection of all pairs ([Jar]).
//!
//! Attributes (`Path`, `Domain`, ...), quoting and percent-decoding are
//! not interpreted.  Whitespace around keys and values is trimmed.
//!
//! ```
//! use std::ops::ControlFlow;
//!
//! let header = "sid=31d4d96e407aad42; lang=en-US";
//!
//! assert_eq!(cookieparse::lookup(header, "LANG").as_deref(), Some("en-US"));
//!
//! let mut keys = Vec::new();
//! let _ = cookieparse::parse(header, |pair| {
//!     keys.push(pair.key());
//!     ControlFlow::<()>::Continue(())
//! });
//! assert_eq!(keys, ["sid", "lang"]);
//!
//! let jar = cookieparse::materialize(header).unwrap();
//! assert_eq!(jar.len(), 2);
//! assert_eq!(jar.get("sid"), Some("31d4d96e407aad42"));
//! ```
mod config;
mod dispatch;
mod jar;
mod lookup;
mod pair;
mod parser;

pub use crate::config::{Malformed, ParseOptions};
pub use crate::dispatch::{parse, try_parse};
pub use crate::jar::{materialize, Entry, Jar, DEFAULT_CAPACITY};
pub use crate::lookup::{lookup, lookup_str, try_lookup};
pub use crate::pair::Pair;
pub use crate::parser::{pairs, Error, Pairs, Parser};
