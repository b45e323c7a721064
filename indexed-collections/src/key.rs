//! Sentinel key for slab-linked nodes.
//!
//! Links between list nodes are slab keys. An absent link is the reserved
//! `NONE` value rather than `Option<usize>`, keeping each link one word wide.

/// A copyable slab key with a sentinel "none" value.
///
/// # Example
///
/// ```
/// use indexed_collections::Key;
///
/// let key: usize = 42;
/// assert!(key.is_some());
/// assert!(usize::NONE.is_none());
/// ```
pub trait Key: Copy + Eq {
    /// Sentinel value representing "no key".
    const NONE: Self;

    /// Returns `true` if this is the sentinel value.
    #[inline]
    fn is_none(&self) -> bool {
        *self == Self::NONE
    }

    /// Returns `true` if this is NOT the sentinel value.
    #[inline]
    fn is_some(&self) -> bool {
        !self.is_none()
    }

    /// Converts to `Option`, mapping the sentinel to `None`.
    #[inline]
    fn get(self) -> Option<Self> {
        if self.is_none() { None } else { Some(self) }
    }
}

// `slab::Slab` hands out `usize` keys and never reaches `usize::MAX`.
impl Key for usize {
    const NONE: Self = usize::MAX;
}
