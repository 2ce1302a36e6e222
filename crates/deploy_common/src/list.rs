use std::convert::Infallible;
use std::str::FromStr;

/// A comma separated command-line value such as `alice,bob,carol`.
///
/// Every comma starts a new item and there is no escaping, so `""` parses to
/// a single empty item and `"a,,b"` keeps the empty middle item. Callers that
/// want to drop blanks do so themselves.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CommaList(Vec<String>);

impl CommaList {
    pub fn into_inner(self) -> Vec<String> {
        self.0
    }
}

impl FromStr for CommaList {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self(s.split(',').map(str::to_string).collect()))
    }
}
