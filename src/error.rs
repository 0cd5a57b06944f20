//! Error taxonomy for registration (`insert`).
//!
//! Every registration failure here is a programmer error: a malformed
//! pattern, a missing method, a missing handler, or a route that would
//! make the grammar ambiguous. None of them are ever produced by
//! `lookup`, which only ever returns `Some`/`None` — there is no
//! lookup-side error type to construct.

use core::{error, fmt};

/// The kind of child a conflicting insertion was attempting to add.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum NodeKind {
    /// A literal byte run.
    Static,
    /// A single-segment `:name` parameter.
    Parameter,
    /// A trailing `/*name` catch-all.
    CatchAll,
}

impl fmt::Display for NodeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            NodeKind::Static => "static",
            NodeKind::Parameter => "parameter",
            NodeKind::CatchAll => "catch-all",
        };
        f.write_str(s)
    }
}

/// Structured detail for a route conflict, letting callers (and tests)
/// assert against the offending node and the kind of child that could
/// not be added, rather than a formatted message.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Conflict {
    /// The label of the existing node the conflicting child would have
    /// attached to.
    pub offending_label: String,
    /// The label of the new child that could not be inserted.
    pub new_label: String,
    /// The kind of the new child.
    pub new_kind: NodeKind,
}

impl fmt::Display for Conflict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} child {:?} conflicts with existing route at node {:?}",
            self.new_kind, self.new_label, self.offending_label
        )
    }
}

/// Errors that can occur when registering a route.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum InsertError {
    /// The method string was empty.
    EmptyMethod,
    /// The handler was absent (the registrar tried to register a "nil"
    /// handler, e.g. `Option::None`).
    NilHandler,
    /// The pattern was malformed: missing leading `/`, an unnamed or
    /// doubly-wildcarded segment, or a catch-all that isn't the final
    /// construct of the pattern.
    BadPattern(String),
    /// The pattern conflicts with a previously registered route in a
    /// way that would make the grammar ambiguous.
    Conflict(Conflict),
}

impl fmt::Display for InsertError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InsertError::EmptyMethod => f.write_str("method must not be empty"),
            InsertError::NilHandler => f.write_str("handler must not be absent"),
            InsertError::BadPattern(reason) => write!(f, "invalid route pattern: {reason}"),
            InsertError::Conflict(conflict) => fmt::Display::fmt(conflict, f),
        }
    }
}

impl error::Error for InsertError {}

impl InsertError {
    pub(crate) fn conflict(offending_label: &str, new_label: &str, new_kind: NodeKind) -> Self {
        InsertError::Conflict(Conflict {
            offending_label: offending_label.to_owned(),
            new_label: new_label.to_owned(),
            new_kind,
        })
    }
}
