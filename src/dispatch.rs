use std::ops::ControlFlow;

use crate::config::ParseOptions;
use crate::pair::Pair;
use crate::parser::{pairs, Error, Parser};

/// Calls `handler` for every pair in `text`, in order.
///
/// `ControlFlow::Continue(())` moves on to the next pair.
/// `ControlFlow::Break(b)` stops the traversal and `Break(b)` is
/// returned.  If every pair was handled, `Continue(())` is returned.
/// A segment without `=` ends the traversal silently.
///
/// ```
/// use std::ops::ControlFlow;
///
/// let mut n = 0;
/// let r = cookieparse::parse("a=1;b=2;c=3", |pair| {
///     n += 1;
///     if pair.key() == "b" {
///         return ControlFlow::Break(pair.value());
///     }
///     ControlFlow::Continue(())
/// });
///
/// assert_eq!(r, ControlFlow::Break("2"));
/// assert_eq!(n, 2);
/// ```
pub fn parse<'a, B, F>(text: &'a str, mut handler: F) -> ControlFlow<B>
where
    F: FnMut(Pair<'a>) -> ControlFlow<B>,
{
    for pair in pairs(text) {
        if let ControlFlow::Break(b) = handler(pair) {
            return ControlFlow::Break(b);
        }
    }

    ControlFlow::Continue(())
}

/// Like [parse], but tokenizes with `options`.  A malformed segment
/// rejected by [Malformed::Reject](crate::Malformed::Reject) is
/// returned as `Err` after the pairs before it were handled.
pub fn try_parse<'a, B, F>(
    text: &'a str,
    options: &ParseOptions,
    mut handler: F,
) -> Result<ControlFlow<B>, Error>
where
    F: FnMut(Pair<'a>) -> ControlFlow<B>,
{
    let mut p = Parser::with_options(text, *options);

    while let Some(pair) = p.parse_pair()? {
        if let ControlFlow::Break(b) = handler(pair) {
            return Ok(ControlFlow::Break(b));
        }
    }

    Ok(ControlFlow::Continue(()))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(text: &str) -> (ControlFlow<()>, Vec<String>) {
        let mut seen = Vec::new();
        let r = parse(text, |pair| {
            seen.push(pair.to_string());
            ControlFlow::Continue(())
        });

        (r, seen)
    }

    #[test]
    fn parse_all() {
        let (r, seen) = record(" a = 1 ; b=2;c=3 ");

        assert_eq!(ControlFlow::Continue(()), r);
        assert_eq!(vec!["a=1", "b=2", "c=3"], seen);
    }

    #[test]
    fn parse_malformed() {
        let (r, seen) = record("a=1; broken");

        assert_eq!(ControlFlow::Continue(()), r);
        assert_eq!(vec!["a=1"], seen);

        let (r, seen) = record("broken");

        assert_eq!(ControlFlow::Continue(()), r);
        assert!(seen.is_empty());
    }

    #[test]
    fn parse_break() {
        let mut calls = 0;
        let r = parse("a=1;b=2;c=3", |pair| {
            calls += 1;
            match pair.key() {
                "a" => ControlFlow::Continue(()),
                k => ControlFlow::Break(k.len()),
            }
        });

        assert_eq!(ControlFlow::Break(1), r);
        assert_eq!(2, calls);
    }

    #[test]
    fn try_parse_reject() {
        let mut seen = Vec::new();
        let r = try_parse("a=1; junk", &ParseOptions::strict(), |pair| {
            seen.push(pair.key());
            ControlFlow::<()>::Continue(())
        });

        assert_eq!(Err(Error::MissingSeparator { index: 5 }), r);
        assert_eq!(vec!["a"], seen);
    }

    #[test]
    fn try_parse_break_before_malformed() {
        let r = try_parse("a=1; junk", &ParseOptions::strict(), |pair| {
            ControlFlow::Break(pair.value())
        });

        assert_eq!(Ok(ControlFlow::Break("1")), r);
    }

    #[test]
    fn try_parse_default() {
        let mut n = 0;
        let r = try_parse("a=1;b=2; junk", &ParseOptions::default(), |_| {
            n += 1;
            ControlFlow::<()>::Continue(())
        });

        assert_eq!(Ok(ControlFlow::Continue(())), r);
        assert_eq!(2, n);
    }
}
