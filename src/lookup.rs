use std::ops::ControlFlow;

use crate::config::ParseOptions;
use crate::dispatch::{parse, try_parse};
use crate::pair::{copy_str, Pair};
use crate::parser::Error;

/// Returns a copy of the value of the first cookie named `key`.  Names
/// are compared ignoring ASCII case and must match in full; `a` does
/// not match a cookie named `ab`.
///
/// ```
/// assert_eq!(cookieparse::lookup("a=1;b=2", "B").as_deref(), Some("2"));
/// assert_eq!(cookieparse::lookup("ab=1;b=2", "a"), None);
/// ```
pub fn lookup(text: &str, key: &str) -> Option<String> {
    lookup_str(text, key).map(str::to_owned)
}

/// Same as [lookup], but borrows the value from `text`.
pub fn lookup_str<'a>(text: &'a str, key: &str) -> Option<&'a str> {
    match parse(text, |pair| find(pair, key)) {
        ControlFlow::Break(value) => Some(value),
        ControlFlow::Continue(()) => None,
    }
}

/// Same as [lookup], but tokenizes with `options` and reports a
/// failed allocation instead of aborting.  A match found before a
/// rejected segment is still returned.
pub fn try_lookup(text: &str, key: &str, options: &ParseOptions) -> Result<Option<String>, Error> {
    match try_parse(text, options, |pair| find(pair, key))? {
        ControlFlow::Break(value) => Ok(Some(copy_str(value)?)),
        ControlFlow::Continue(()) => Ok(None),
    }
}

fn find<'a>(pair: Pair<'a>, key: &str) -> ControlFlow<&'a str> {
    if pair.key_eq_ignore_case(key) {
        ControlFlow::Break(pair.value())
    } else {
        ControlFlow::Continue(())
    }
}
