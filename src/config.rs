/// What [Parser](crate::Parser) does with a segment that has no `=`.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Malformed {
    /// Treat the segment as the end of input.  Pairs before it are
    /// still produced and no error is reported.
    #[default]
    Terminate,
    /// Report [Error::MissingSeparator](crate::Error::MissingSeparator).
    Reject,
}

/// Options controlling how a cookie header is tokenized.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct ParseOptions {
    pub malformed: Malformed,
}

impl ParseOptions {
    /// Returns options that reject segments without `=`.
    pub fn strict() -> Self {
        ParseOptions {
            malformed: Malformed::Reject,
        }
    }

    pub fn with_malformed(mut self, malformed: Malformed) -> Self {
        self.malformed = malformed;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        assert_eq!(Malformed::Terminate, ParseOptions::default().malformed);
        assert_eq!(Malformed::Reject, ParseOptions::strict().malformed);
        assert_eq!(
            ParseOptions::default(),
            ParseOptions::strict().with_malformed(Malformed::Terminate)
        );
    }

    #[cfg(feature = "serde")]
    #[test]
    fn deserialize() {
        let opts: ParseOptions = serde_json::from_str(r#"{"malformed":"reject"}"#).unwrap();
        assert_eq!(ParseOptions::strict(), opts);

        let opts: ParseOptions = serde_json::from_str("{}").unwrap();
        assert_eq!(ParseOptions::default(), opts);
    }
}
