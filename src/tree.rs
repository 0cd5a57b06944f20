//! The radix trie itself: [`Node`], compressed-edge insertion with
//! conflict checking, and parameter-capturing lookup.
//!
//! One [`Node`] tree is built per HTTP method (see [`crate::router`]);
//! each tree is an independent trie rooted at an empty static node.

use core::mem;

use crate::{
    error::{InsertError, NodeKind},
    params::ParamsSink,
    pattern::{find_wildcard, scan_catch_all, scan_parameter, Wildcard},
};

/// A vertex in the radix trie.
///
/// The root of a tree is a `Static` node with an empty label; no
/// separate root marker is needed, since an empty static label can
/// never be produced by a real pattern.
#[derive(Debug)]
pub(crate) struct Node<H> {
    pub(crate) kind: NodeKind,
    pub(crate) label: String,
    pub(crate) children: Vec<Node<H>>,
    pub(crate) handler: Option<H>,
    has_parameter_child: bool,
    has_catch_all_child: bool,
    has_slash_child: bool,
}

impl<H> Default for Node<H> {
    fn default() -> Self {
        Self::new()
    }
}

impl<H> Node<H> {
    pub(crate) fn new() -> Self {
        Self {
            kind: NodeKind::Static,
            label: String::new(),
            children: Vec::new(),
            handler: None,
            has_parameter_child: false,
            has_catch_all_child: false,
            has_slash_child: false,
        }
    }

    /// Registers `pattern` in the subtree rooted at `self`, attaching
    /// `handler` at the terminal node.
    pub(crate) fn insert(&mut self, pattern: &str, handler: H) -> Result<(), InsertError> {
        let first = pattern.as_bytes().first().copied();
        if !matches!(first, Some(b'/') | Some(b':')) {
            return Err(InsertError::BadPattern(format!(
                "pattern must begin with '/' (or ':' for a root parameter), got {pattern:?}"
            )));
        }

        let mut current = self;
        let mut path = pattern;
        let mut handler = Some(handler);

        loop {
            let mut common = longest_common_prefix(path, &current.label);

            // never let a literal match swallow the slash that introduces a
            // wildcard in the pattern being inserted: that slash has to stay
            // on the remaining `path` so the catch-all/parameter branch below
            // sees it, rather than being folded into a static split.
            if current.kind == NodeKind::Static {
                if let Some(w) = wildcard_start(path) {
                    common = common.min(w);
                }
            }

            // the common prefix is a strict substring of this node's label: split it.
            if current.kind == NodeKind::Static && common < current.label.len() {
                current.split(common);
            }

            if path.len() > common {
                path = &path[common..];
                let next = path.as_bytes()[0];

                if next == b':' {
                    let (name, _) = scan_parameter(path)?;

                    if !current.check_parameter(name) {
                        return Err(InsertError::conflict(&current.label, name, NodeKind::Parameter));
                    }

                    if current.children.is_empty() {
                        let child = build_subtree(path, handler.take().unwrap())?;
                        current.attach(child);
                        return Ok(());
                    }

                    current = &mut current.children[0];
                    continue;
                }

                if next == b'/' && path.as_bytes().get(1) == Some(&b'*') {
                    let (label, _) = scan_catch_all(path)?;

                    if !current.check_catch_all(label) {
                        return Err(InsertError::conflict(&current.label, label, NodeKind::CatchAll));
                    }

                    if let Some(i) = current.children.iter().position(|c| c.kind == NodeKind::CatchAll) {
                        current = &mut current.children[i];
                        continue;
                    }

                    let child = build_subtree(path, handler.take().unwrap())?;
                    current.attach(child);
                    return Ok(());
                }

                if next == b'*' {
                    return Err(InsertError::BadPattern(
                        "'*' must be preceded by '/' to start a catch-all".into(),
                    ));
                }

                // static edge
                if !current.check_static(next) {
                    return Err(InsertError::conflict(&current.label, path, NodeKind::Static));
                }

                if let Some(i) = current
                    .children
                    .iter()
                    .position(|c| c.kind == NodeKind::Static && c.label.as_bytes()[0] == next)
                {
                    current = &mut current.children[i];
                    continue;
                }

                let child = build_subtree(path, handler.take().unwrap())?;
                current.attach(child);
                return Ok(());
            }

            // path is exhausted: current is the terminal node for this pattern.
            if current.handler.is_some() {
                return Err(InsertError::conflict(&current.label, &current.label, current.kind));
            }
            current.handler = handler.take();
            return Ok(());
        }
    }

    /// Splits this static node's label at byte offset `at`, pushing
    /// everything from `at` onward (including this node's children,
    /// handler and child-hints) into a new child, and shrinking this
    /// node's label to the common prefix.
    fn split(&mut self, at: usize) {
        debug_assert_eq!(self.kind, NodeKind::Static);

        let suffix = self.label.split_off(at);
        let starts_with_slash = suffix.as_bytes()[0] == b'/';

        let child = Node {
            kind: NodeKind::Static,
            label: suffix,
            children: mem::take(&mut self.children),
            handler: self.handler.take(),
            has_parameter_child: self.has_parameter_child,
            has_catch_all_child: self.has_catch_all_child,
            has_slash_child: self.has_slash_child,
        };

        self.children = vec![child];
        self.has_parameter_child = false;
        self.has_catch_all_child = false;
        self.has_slash_child = starts_with_slash;
    }

    /// Attaches `child` to `self`, maintaining the child-kind hints.
    fn attach(&mut self, child: Node<H>) {
        match child.kind {
            NodeKind::Parameter => self.has_parameter_child = true,
            NodeKind::CatchAll => self.has_catch_all_child = true,
            NodeKind::Static => {
                if child.label.as_bytes()[0] == b'/' {
                    self.has_slash_child = true;
                }
            }
        }
        self.children.push(child);
    }

    fn check_static(&self, first_byte: u8) -> bool {
        match self.kind {
            NodeKind::Static => {
                if !self.has_parameter_child && !self.has_catch_all_child {
                    return true;
                }
                self.has_catch_all_child && first_byte != b'/'
            }
            NodeKind::Parameter if first_byte == b'/' => {
                self.children.is_empty() || self.children[0].kind == NodeKind::Static
            }
            _ => false,
        }
    }

    fn check_parameter(&self, param_label: &str) -> bool {
        if self.children.len() == 1
            && self.children[0].kind == NodeKind::Parameter
            && self.children[0].label == param_label
        {
            return true;
        }
        self.kind == NodeKind::Static && self.children.is_empty()
    }

    fn check_catch_all(&self, catch_all_label: &str) -> bool {
        match self.kind {
            NodeKind::Static => {
                if self.children.is_empty() {
                    return true;
                }
                if self.children.len() == 1
                    && self.children[0].kind == NodeKind::CatchAll
                    && self.children[0].label == catch_all_label
                {
                    return true;
                }
                !self.has_slash_child && !self.has_parameter_child && !self.has_catch_all_child
            }
            NodeKind::Parameter => {
                self.children.is_empty()
                    || (self.children.len() == 1
                        && self.children[0].kind == NodeKind::CatchAll
                        && self.children[0].label == catch_all_label)
            }
            _ => false,
        }
    }

    /// Walks the trie consuming `path`, dispatching on child kind and
    /// pushing captured bindings into `sink`. Returns the handler at
    /// the terminal node, or `None` if nothing matches.
    pub(crate) fn lookup<'n>(&'n self, mut path: &str, sink: &mut impl ParamsSink) -> Option<&'n H> {
        let mut current = self;

        loop {
            if path.is_empty() {
                return current.handler.as_ref();
            }

            let next = path.as_bytes()[0];
            let mut descended = None;

            for child in &current.children {
                match child.kind {
                    NodeKind::Static => {
                        let label = child.label.as_bytes();
                        if !label.is_empty() && label[0] == next && path.as_bytes().starts_with(label) {
                            descended = Some((child, &path[child.label.len()..]));
                            break;
                        }
                    }
                    NodeKind::Parameter => {
                        if next == b'/' {
                            // a parameter can never bind an empty segment
                            continue;
                        }
                        let end = path.find('/').unwrap_or(path.len());
                        sink.add(&child.label[1..], &path[..end]);
                        descended = Some((child, &path[end..]));
                        break;
                    }
                    NodeKind::CatchAll => {
                        if next == b'/' {
                            sink.add(&child.label[2..], path);
                            descended = Some((child, ""));
                            break;
                        }
                    }
                }
            }

            match descended {
                Some((child, rest)) => {
                    current = child;
                    path = rest;
                }
                None => return None,
            }
        }
    }
}

/// Builds a brand-new subtree for `path` (which has already had any
/// matching prefix stripped by the caller), recursively splitting at
/// each wildcard sigil it contains.
fn build_subtree<H>(path: &str, handler: H) -> Result<Node<H>, InsertError> {
    match find_wildcard(path)? {
        None => Ok(Node {
            label: path.to_owned(),
            handler: Some(handler),
            ..Node::new()
        }),
        Some((Wildcard::Param(name), i)) => {
            let rest = &path[i + name.len()..];

            let mut param_node = Node {
                kind: NodeKind::Parameter,
                label: name.to_owned(),
                ..Node::new()
            };

            if rest.is_empty() {
                param_node.handler = Some(handler);
            } else {
                let child = build_subtree(rest, handler)?;
                param_node.attach(child);
            }

            if i > 0 {
                let mut prefix_node = Node {
                    label: path[..i].to_owned(),
                    ..Node::new()
                };
                prefix_node.attach(param_node);
                Ok(prefix_node)
            } else {
                Ok(param_node)
            }
        }
        Some((Wildcard::CatchAll(label), i)) => {
            if i + label.len() != path.len() {
                return Err(InsertError::BadPattern(format!(
                    "catch-all {label:?} must be the final construct of the pattern"
                )));
            }

            let catch_all_node = Node {
                kind: NodeKind::CatchAll,
                label: label.to_owned(),
                handler: Some(handler),
                ..Node::new()
            };

            if i > 0 {
                let mut prefix_node = Node {
                    label: path[..i].to_owned(),
                    ..Node::new()
                };
                prefix_node.attach(catch_all_node);
                Ok(prefix_node)
            } else {
                Ok(catch_all_node)
            }
        }
    }
}

fn longest_common_prefix(a: &str, b: &str) -> usize {
    a.bytes().zip(b.bytes()).take_while(|(x, y)| x == y).count()
}

/// The byte offset of the earliest `:` or `/*` in `path`, ignoring
/// whether the wildcard it introduces is well-formed — used only to
/// keep [`Node::insert`]'s split point out of a wildcard's way, the
/// actual parsing and validation happens in [`scan_parameter`] and
/// [`scan_catch_all`].
fn wildcard_start(path: &str) -> Option<usize> {
    let colon = path.find(':');
    let slash_star = path.find("/*");
    match (colon, slash_star) {
        (None, None) => None,
        (Some(i), None) => Some(i),
        (None, Some(i)) => Some(i),
        (Some(a), Some(b)) => Some(a.min(b)),
    }
}
