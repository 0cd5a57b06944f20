//! The collaborator-facing output of a lookup, and the two ways a
//! lookup can be told to collect it.
//!
//! A lookup never allocates parameter storage itself: it writes into
//! whatever [`ParamsSink`] its caller hands it. [`PooledParams`]
//! acquires a reusable buffer from a [`ParamsPool`] on first write and
//! hands it back as [`Params`]; [`DiscardParams`] throws every binding
//! away, for callers that only care whether a route matched.

use parking_lot::Mutex;

/// The parameter bindings captured by a single successful lookup.
///
/// Preserves insertion order; [`Params::get`] returns the first match,
/// matching the trie's left-to-right, no-backtracking traversal.
#[derive(Debug, Default, PartialEq, Eq)]
pub struct Params(Vec<(Box<str>, Box<str>)>);

impl Params {
    /// Returns the value bound to `key`, if any.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.0.iter().find(|(k, _)| &**k == key).map(|(_, v)| &**v)
    }

    /// Iterates over the bindings in capture order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (&**k, &**v))
    }

    /// Returns the number of bindings captured.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns `true` if no parameters were captured.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl IntoIterator for Params {
    type Item = (Box<str>, Box<str>);
    type IntoIter = std::vec::IntoIter<(Box<str>, Box<str>)>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

/// Where a lookup writes the parameter bindings it captures while
/// descending the trie.
///
/// The lookup engine is generic over this trait rather than over a
/// trait object, so the hot path monomorphizes per concrete sink and
/// never pays for a vtable call.
pub trait ParamsSink {
    /// Records a single `key` / `value` binding.
    fn add(&mut self, key: &str, value: &str);

    /// Consumes the sink, returning the collected [`Params`] if any
    /// were recorded.
    fn take(self) -> Option<Params>;
}

/// A free list of recycled parameter buffers, shared by every lookup
/// issued through the same [`crate::Router`].
///
/// Buffers are acquired lazily: a lookup against a route with no
/// parameters never touches the pool at all.
#[derive(Debug, Default)]
pub struct ParamsPool {
    free: Mutex<Vec<Vec<(Box<str>, Box<str>)>>>,
}

impl ParamsPool {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    fn acquire(&self) -> Vec<(Box<str>, Box<str>)> {
        self.free.lock().pop().unwrap_or_default()
    }

    /// Returns a buffer to the pool for reuse by a later lookup.
    ///
    /// Collaborators that hold on to a [`Params`] beyond the end of a
    /// request are not obligated to call this; the buffer is simply
    /// dropped and the pool grows a fresh one next time.
    pub fn recycle(&self, params: Params) {
        let mut buf = params.0;
        buf.clear();
        self.free.lock().push(buf);
    }
}

/// A [`ParamsSink`] backed by [`ParamsPool`], for lookups whose caller
/// wants the captured bindings.
pub struct PooledParams<'p> {
    pool: &'p ParamsPool,
    buf: Option<Vec<(Box<str>, Box<str>)>>,
}

impl<'p> PooledParams<'p> {
    pub(crate) fn new(pool: &'p ParamsPool) -> Self {
        Self { pool, buf: None }
    }
}

impl<'p> ParamsSink for PooledParams<'p> {
    fn add(&mut self, key: &str, value: &str) {
        if self.buf.is_none() {
            self.buf = Some(self.pool.acquire());
        }
        self.buf.as_mut().unwrap().push((key.into(), value.into()));
    }

    fn take(self) -> Option<Params> {
        self.buf.map(Params)
    }
}

/// A [`ParamsSink`] that throws every binding away, for callers (such
/// as [`crate::Router::lookup_without_params`]) that only need to know
/// whether a route matched.
#[derive(Debug, Default)]
pub struct DiscardParams;

impl ParamsSink for DiscardParams {
    fn add(&mut self, _key: &str, _value: &str) {}

    fn take(self) -> Option<Params> {
        None
    }
}
