//! Component F: the method-keyed dispatcher in front of one trie per
//! HTTP method.

use std::collections::HashMap;

use crate::{
    error::InsertError,
    params::{DiscardParams, Params, ParamsPool, PooledParams},
    tree::Node,
};

/// A collection of path tries, one per registration method, sharing a
/// single pool of recycled parameter buffers.
///
/// `H` is an opaque handler value: the router never inspects, calls,
/// or clones it, it only stores and returns it.
pub struct Router<H> {
    trees: HashMap<String, Node<H>>,
    max_params: usize,
    pool: ParamsPool,
}

impl<H> Default for Router<H> {
    fn default() -> Self {
        Self {
            trees: HashMap::new(),
            max_params: 0,
            pool: ParamsPool::new(),
        }
    }
}

impl<H> Router<H> {
    /// Creates an empty router.
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers `handler` under `method` for `pattern`.
    ///
    /// `method` is never interpreted (it is an opaque dispatch key —
    /// typically `"GET"`, `"POST"`, and so on), each method maintains
    /// a fully independent trie, so the same `pattern` may be
    /// registered once per method without conflicting.
    ///
    /// # Examples
    ///
    /// ```
    /// # use trieroute::Router;
    /// let mut router = Router::new();
    /// router.insert("GET", "/users/:id", "show_user").unwrap();
    /// router.insert("GET", "/users/:id/edit", "edit_user").unwrap();
    /// ```
    pub fn insert(
        &mut self,
        method: impl Into<String>,
        pattern: impl AsRef<str>,
        handler: H,
    ) -> Result<(), InsertError> {
        let method = method.into();
        if method.is_empty() {
            return Err(InsertError::EmptyMethod);
        }

        let root = self.trees.entry(method).or_insert_with(Node::new);
        root.insert(pattern.as_ref(), handler)?;

        let params = count_wildcards(pattern.as_ref());
        if params > self.max_params {
            self.max_params = params;
        }

        Ok(())
    }

    /// Looks up `path` under `method`, capturing any parameter
    /// bindings along the way.
    ///
    /// Returns `None` if `method` has no tree, or if no route under it
    /// matches `path`; there is no partial match and no fallback
    /// across methods.
    pub fn lookup(&self, method: &str, path: &str) -> Option<(&H, Option<Params>)> {
        let root = self.trees.get(method)?;
        let mut sink = PooledParams::new(&self.pool);
        let handler = root.lookup(path, &mut sink)?;
        Some((handler, sink.take()))
    }

    /// Like [`lookup`](Self::lookup), but never captures parameter
    /// bindings — for callers that only need to know whether (and to
    /// what) a path resolves.
    pub fn lookup_without_params(&self, method: &str, path: &str) -> Option<&H> {
        let root = self.trees.get(method)?;
        root.lookup(path, &mut DiscardParams)
    }

    /// Returns a buffer captured by a previous [`lookup`](Self::lookup)
    /// to the shared pool, for reuse by later lookups.
    pub fn recycle(&self, params: Params) {
        self.pool.recycle(params);
    }

    /// The maximum number of parameters any single registered pattern
    /// can capture, across every method's tree.
    ///
    /// Useful for collaborators that want to pre-size their own
    /// parameter storage instead of going through [`PooledParams`].
    pub fn max_params(&self) -> usize {
        self.max_params
    }
}

/// Counts the wildcard sigils (`:` and `*`) in a pattern, an upper
/// bound on the parameters a single lookup against it can capture.
fn count_wildcards(pattern: &str) -> usize {
    pattern.bytes().filter(|&b| b == b':' || b == b'*').count()
}
