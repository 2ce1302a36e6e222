//! Positional placeholder templates
//!
//! A placeholder is the marker `%%#N#%%`, where `N` is a zero-based decimal
//! index written without leading zeros. Rendering replaces every placeholder
//! whose index has a value and copies everything else through byte for byte.

use std::collections::BTreeSet;

/// Opening marker of a placeholder token
pub const OPEN_MARKER: &str = "%%#";
/// Closing marker of a placeholder token
pub const CLOSE_MARKER: &str = "#%%";

/// Template text read from disk
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Template {
    source: String,
}

/// Output of a render pass
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rendered {
    pub text: String,
    /// Number of placeholders that were replaced
    pub replacements: usize,
    /// Indices referenced by the template that had no value
    pub unresolved: BTreeSet<usize>,
}

impl Template {
    pub fn new(source: impl Into<String>) -> Self {
        Self {
            source: source.into(),
        }
    }

    /// Substitute `values[i]` for every `%%#i#%%`
    ///
    /// The template is scanned once from left to right, so substituted values
    /// are never scanned again. Placeholders whose index is past the end of
    /// `values` are left as they are.
    ///
    /// Tokens are matched where they start, leftmost first. When one token's
    /// closing `#%%` is also the start of another candidate, as in
    /// `%%#1#%%#0#%%`, the left token wins and the rest is literal text. This
    /// differs from replacing index 0 first and then index 1.
    pub fn render(&self, values: &[String]) -> Rendered {
        let mut text = String::with_capacity(self.source.len());
        let mut replacements = 0;
        let mut unresolved = BTreeSet::new();

        for segment in self.segments() {
            match segment {
                Segment::Text(literal) => text.push_str(literal),
                Segment::Placeholder { index, raw } => match values.get(index) {
                    Some(value) => {
                        text.push_str(value);
                        replacements += 1;
                    }
                    None => {
                        text.push_str(raw);
                        unresolved.insert(index);
                    }
                },
            }
        }

        Rendered {
            text,
            replacements,
            unresolved,
        }
    }

    fn segments(&self) -> Segments<'_> {
        Segments {
            rest: &self.source,
        }
    }
}

#[derive(Debug, PartialEq, Eq)]
enum Segment<'a> {
    Text(&'a str),
    Placeholder { index: usize, raw: &'a str },
}

/// Splits template text into literal runs and placeholders
struct Segments<'a> {
    rest: &'a str,
}

impl<'a> Iterator for Segments<'a> {
    type Item = Segment<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.rest.is_empty() {
            return None;
        }

        if let Some((index, len)) = parse_placeholder(self.rest) {
            let (raw, rest) = self.rest.split_at(len);
            self.rest = rest;
            return Some(Segment::Placeholder { index, raw });
        }

        // No token can start inside a rejected opening marker, so skip past it.
        let skip = if self.rest.starts_with(OPEN_MARKER) {
            OPEN_MARKER.len()
        } else {
            0
        };
        let end = self.rest[skip..]
            .find(OPEN_MARKER)
            .map_or(self.rest.len(), |offset| skip + offset);
        let (literal, rest) = self.rest.split_at(end);
        self.rest = rest;
        Some(Segment::Text(literal))
    }
}

/// Parse a placeholder at the start of `input`, returning its index and length
fn parse_placeholder(input: &str) -> Option<(usize, usize)> {
    let body = input.strip_prefix(OPEN_MARKER)?;
    let digits = body.bytes().take_while(u8::is_ascii_digit).count();
    let number = &body[..digits];

    if number.is_empty() || (number.len() > 1 && number.starts_with('0')) {
        return None;
    }
    if !body[digits..].starts_with(CLOSE_MARKER) {
        return None;
    }

    let index = number.parse().ok()?;
    Some((index, OPEN_MARKER.len() + digits + CLOSE_MARKER.len()))
}
