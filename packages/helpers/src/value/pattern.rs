//! Regular-expression values with flags and match position

use regex::{Regex, RegexBuilder};
use saslmech_common::{bail, ensure, Error, Result};
use std::fmt;

/// Flag set of a [`Pattern`]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PatternFlags {
    /// `g`: matching resumes from `last_index`
    pub global: bool,
    /// `i`: case-insensitive
    pub ignore_case: bool,
    /// `m`: `^`/`$` match at line boundaries
    pub multiline: bool,
}

impl PatternFlags {
    /// Parse a flag string such as `"gi"`
    ///
    /// # Errors
    ///
    /// Returns a pattern error for an unknown or repeated flag.
    pub fn parse(flags: &str) -> Result<Self> {
        let mut parsed = Self::default();
        for flag in flags.chars() {
            let slot = match flag {
                'g' => &mut parsed.global,
                'i' => &mut parsed.ignore_case,
                'm' => &mut parsed.multiline,
                other => bail!(pattern, "unknown flag `{other}`"),
            };
            ensure!(!*slot, pattern, "repeated flag `{flag}`");
            *slot = true;
        }
        Ok(parsed)
    }
}

impl fmt::Display for PatternFlags {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.global {
            f.write_str("g")?;
        }
        if self.ignore_case {
            f.write_str("i")?;
        }
        if self.multiline {
            f.write_str("m")?;
        }
        Ok(())
    }
}

/// Compiled pattern that remembers its source text, flags and the position
/// the next global match starts from
#[derive(Clone)]
pub struct Pattern {
    source: String,
    flags: PatternFlags,
    last_index: usize,
    regex: Regex,
}

impl Pattern {
    /// Compile `source` with the given flag string
    ///
    /// # Errors
    ///
    /// Returns a pattern error if the flags are invalid or the source does
    /// not compile.
    pub fn new(source: &str, flags: &str) -> Result<Self> {
        let flags = PatternFlags::parse(flags)?;
        let regex = RegexBuilder::new(source)
            .case_insensitive(flags.ignore_case)
            .multi_line(flags.multiline)
            .build()
            .map_err(|e| Error::with_source(saslmech_common::ErrorKind::Pattern, e))?;

        Ok(Self {
            source: source.to_string(),
            flags,
            last_index: 0,
            regex,
        })
    }

    /// Source text the pattern was compiled from
    #[must_use]
    pub fn source(&self) -> &str {
        &self.source
    }

    /// Flag set
    #[must_use]
    pub fn flags(&self) -> PatternFlags {
        self.flags
    }

    /// Byte offset the next global match starts from
    #[must_use]
    pub fn last_index(&self) -> usize {
        self.last_index
    }

    /// Move the global match position
    pub fn set_last_index(&mut self, index: usize) {
        self.last_index = index;
    }

    /// Whether the pattern matches anywhere in `haystack`
    #[must_use]
    pub fn is_match(&self, haystack: &str) -> bool {
        self.regex.is_match(haystack)
    }

    /// Find the next match as a byte range
    ///
    /// Non-global patterns always search from the start. Global patterns
    /// search from `last_index` and advance it past the match, resetting it
    /// to zero once no further match exists.
    pub fn find_next(&mut self, haystack: &str) -> Option<(usize, usize)> {
        if !self.flags.global {
            return self.regex.find(haystack).map(|m| (m.start(), m.end()));
        }

        let found = if self.last_index > haystack.len() {
            None
        } else {
            self.regex.find_at(haystack, self.last_index)
        };

        match found {
            Some(m) => {
                // empty matches would otherwise stall on the same position
                self.last_index = if m.end() == m.start() {
                    haystack[m.end()..]
                        .chars()
                        .next()
                        .map_or(m.end() + 1, |c| m.end() + c.len_utf8())
                } else {
                    m.end()
                };
                Some((m.start(), m.end()))
            }
            None => {
                self.last_index = 0;
                None
            }
        }
    }
}

impl fmt::Debug for Pattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "/{}/{}", self.source, self.flags)
    }
}
