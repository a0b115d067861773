use std::sync::Mutex;

/// Opaque token identifying one lookup generation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LookupToken(u64);

#[derive(Debug)]
struct Inner<T> {
    latest: u64,
    value: Option<T>,
}

/// Per-session lookup state with generation fencing. Starting a new lookup
/// invalidates every in-flight one; a completion whose token is no longer
/// the latest is discarded instead of overwriting the newer result.
#[derive(Debug)]
pub struct LookupSession<T> {
    inner: Mutex<Inner<T>>,
}

impl<T> LookupSession<T> {
    pub fn new() -> Self {
        LookupSession {
            inner: Mutex::new(Inner {
                latest: 0,
                value: None,
            }),
        }
    }

    /// Starts a new lookup generation and clears the previous result.
    pub fn begin(&self) -> LookupToken {
        let mut inner = self.inner.lock().unwrap();
        inner.latest += 1;
        inner.value = None;
        LookupToken(inner.latest)
    }

    /// Stores `value` only when `token` is still the latest generation.
    /// Returns whether the value was accepted.
    pub fn complete(&self, token: LookupToken, value: T) -> bool {
        let mut inner = self.inner.lock().unwrap();
        if token.0 != inner.latest {
            return false;
        }
        inner.value = Some(value);
        true
    }

    pub fn current(&self) -> Option<T>
    where
        T: Clone,
    {
        self.inner.lock().unwrap().value.clone()
    }
}

impl<T> Default for LookupSession<T> {
    fn default() -> Self {
        Self::new()
    }
}
