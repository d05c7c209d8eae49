//! Thin façades binding [`crate::hashcore::HashCore`]/
//! [`crate::equalhash::RefHashCore`] to a fixed key type with no value
//! payload (spec §4 "Typed Sets / Maps" — "mechanical re-expressions of the
//! core over different primitive widths", spec §1). A set is simply the
//! `V = ()` instantiation of the same core.

use crate::equalhash::{BytesEqualHash, EqualHash, StringEqualHash};
use crate::hashcore::{HashCore, PrimKey};

/// A set of primitive keys (any [`PrimKey`] instantiation — `IntSet` is
/// `PrimSet<u32>`, `LongSet` is `PrimSet<u64>`, etc).
#[derive(Debug, Clone, Default)]
pub struct PrimSet<K: PrimKey> {
    core: HashCore<K, ()>,
}

impl<K: PrimKey> PrimSet<K> {
    pub fn new() -> Self {
        Self { core: HashCore::new() }
    }

    pub fn with_expected_items(n: usize) -> Self {
        Self { core: HashCore::with_expected_items(n) }
    }

    pub fn len(&self) -> usize {
        self.core.len()
    }

    pub fn is_empty(&self) -> bool {
        self.core.is_empty()
    }

    pub fn contains(&self, k: K) -> bool {
        self.core.contains(k)
    }

    /// Returns `true` iff `k` was newly added.
    pub fn add(&mut self, k: K) -> bool {
        self.core.put(k, ())
    }

    pub fn remove(&mut self, k: K) -> bool {
        self.core.remove(k)
    }

    pub fn iter(&self) -> impl Iterator<Item = K> + '_ {
        PrimSetIter { core: &self.core, cur: crate::hashcore::Token::NONE }
    }
}

struct PrimSetIter<'a, K: PrimKey> {
    core: &'a HashCore<K, ()>,
    cur: crate::hashcore::Token,
}

// `HashCore` doesn't expose the key at a token directly (only the value),
// so primitive sets re-derive membership by scanning; this mirrors the
// teacher's "re-express mechanically" guidance (spec §1) rather than
// widening the core's public surface just for this one façade.
impl<'a, K: PrimKey> Iterator for PrimSetIter<'a, K> {
    type Item = K;

    fn next(&mut self) -> Option<K> {
        self.cur = self.core.iter_next(self.cur);
        if self.cur.is_none() {
            None
        } else {
            self.core.token_key(self.cur)
        }
    }
}

/// Keys of `u32` width (spec "IntSet").
pub type IntSet = PrimSet<u32>;
/// Keys of `u64` width (spec "LongSet").
pub type LongSet = PrimSet<u64>;

/// A set of reference-typed keys, keyed through a caller-supplied
/// [`EqualHash`] strategy (spec "ObjSet").
#[derive(Debug, Clone)]
pub struct ObjSet<K, S> {
    core: crate::equalhash::RefHashCore<K, (), S>,
}

impl<K: Clone, S: EqualHash<K>> ObjSet<K, S> {
    pub fn new(strategy: S) -> Self {
        Self { core: crate::equalhash::RefHashCore::new(strategy) }
    }

    pub fn len(&self) -> usize {
        self.core.len()
    }

    pub fn is_empty(&self) -> bool {
        self.core.is_empty()
    }

    pub fn contains(&self, k: &K) -> bool {
        self.core.token(k).is_present()
    }

    pub fn add(&mut self, k: K) -> bool {
        self.core.put(k, ())
    }

    pub fn remove(&mut self, k: &K) -> bool {
        self.core.remove(k)
    }

    pub fn add_null(&mut self) -> bool {
        self.core.put_null(())
    }

    pub fn contains_null(&self) -> bool {
        self.core.token_null().is_present()
    }

    pub fn remove_null(&mut self) -> bool {
        self.core.remove_null()
    }
}

/// `String`-keyed set using the built-in [`StringEqualHash`] strategy.
pub type StringSet = ObjSet<String, StringEqualHash>;
/// `Vec<u8>`-keyed set using the built-in [`BytesEqualHash`] strategy.
pub type BytesSet = ObjSet<Vec<u8>, BytesEqualHash>;
