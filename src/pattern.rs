//! Locates and validates `:name` and `/*name` wildcards inside a route
//! pattern.
//!
//! A wildcard is never allowed to straddle a compressed static label: the
//! tree's insert engine always splits a pattern at the first wildcard it
//! finds, so by the time a label is stored it is guaranteed free of `:`
//! and `*`.

use crate::error::InsertError;

/// A single wildcard segment found inside a pattern, together with its
/// kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Wildcard<'p> {
    /// `:name`, the colon included.
    Param(&'p str),
    /// `/*name`, the leading `/*` included.
    CatchAll(&'p str),
}

impl<'p> Wildcard<'p> {
    pub(crate) fn as_str(self) -> &'p str {
        match self {
            Wildcard::Param(s) | Wildcard::CatchAll(s) => s,
        }
    }

    pub(crate) fn len(self) -> usize {
        self.as_str().len()
    }
}

/// Finds the earliest wildcard in `path`, static-scanning for the first
/// `:` or the first `/*`, whichever comes first.
///
/// Returns the wildcard together with its starting byte offset. Returns
/// `Ok(None)` if `path` has no wildcard at all. Fails if the wildcard
/// found is malformed (empty name, embedded `:`/`*`, catch-all not at
/// the end, etc.) — these are programmer errors reported as
/// [`InsertError::BadPattern`].
pub(crate) fn find_wildcard(path: &str) -> Result<Option<(Wildcard<'_>, usize)>, InsertError> {
    let colon = path.find(':');
    let slash_star = path.find("/*");

    let first = match (colon, slash_star) {
        (None, None) => return Ok(None),
        (Some(i), None) => i,
        (None, Some(i)) => i,
        (Some(a), Some(b)) => a.min(b),
    };

    if Some(first) == colon && (slash_star.is_none() || colon < slash_star) {
        let (name, _) = scan_parameter(&path[first..])?;
        Ok(Some((Wildcard::Param(name), first)))
    } else {
        let (name, _) = scan_catch_all(&path[first..])?;
        Ok(Some((Wildcard::CatchAll(name), first)))
    }
}

/// Parses a `:name` parameter starting at `s[0] == ':'`.
///
/// Requires `len(s) >= 2` and `s != ":/"`. Consumes bytes until the next
/// `/` or the end of `s`, failing if it encounters another `:` or `*`.
pub(crate) fn scan_parameter(s: &str) -> Result<(&str, usize), InsertError> {
    debug_assert!(s.starts_with(':'));

    if s.len() < 2 || s == ":/" {
        return Err(InsertError::BadPattern(format!("invalid parameter name in {s:?}")));
    }

    let bytes = s.as_bytes();
    for (i, &b) in bytes.iter().enumerate().skip(1) {
        if b == b'/' {
            return Ok((&s[..i], i));
        }
        if b == b':' || b == b'*' {
            return Err(InsertError::BadPattern(format!(
                "only one wildcard is allowed per path segment, found a second one in {s:?}"
            )));
        }
    }

    Ok((s, s.len()))
}

/// Parses a `/*name` catch-all starting at `s[0..2] == "/*"`.
///
/// Requires `len(s) >= 3` and `s != "/*/"`. Consumes bytes starting after
/// the `/*` until the next `/` or the end of `s`, failing on an embedded
/// `:` or `*`.
pub(crate) fn scan_catch_all(s: &str) -> Result<(&str, usize), InsertError> {
    debug_assert!(s.starts_with("/*"));

    if s.len() < 3 || s == "/*/" {
        return Err(InsertError::BadPattern(format!("invalid catch-all name in {s:?}")));
    }

    let bytes = s.as_bytes();
    for (i, &b) in bytes.iter().enumerate().skip(2) {
        if b == b'/' {
            return Ok((&s[..i], i));
        }
        if b == b':' || b == b'*' {
            return Err(InsertError::BadPattern(format!(
                "only one wildcard is allowed per path segment, found a second one in {s:?}"
            )));
        }
    }

    Ok((s, s.len()))
}
