//! Thin façades binding [`crate::hashcore::HashCore`]/
//! [`crate::equalhash::RefHashCore`] to a fixed (K, V) pair (spec §4 "Typed
//! Sets / Maps"), plus the `ByteSet`-backed dense byte-keyed map (spec
//! §4.5).

use crate::byteset::ByteSet;
use crate::equalhash::{BytesEqualHash, EqualHash, RefHashCore, StringEqualHash};
use crate::hashcore::{HashCore, PrimKey, Token};
use crate::list::List;

/// A map from a primitive key to `V` (any [`PrimKey`] instantiation —
/// `IntMap<V>` is `PrimMap<u32, V>`, `LongMap<V>` is `PrimMap<u64, V>`,
/// `FloatMap<V>`/`DoubleMap<V>` key on `f32`/`f64`).
#[derive(Debug, Clone, Default)]
pub struct PrimMap<K: PrimKey, V: Clone + Default> {
    core: HashCore<K, V>,
}

impl<K: PrimKey, V: Clone + Default> PrimMap<K, V> {
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

    pub fn contains_key(&self, k: K) -> bool {
        self.core.contains(k)
    }

    pub fn get(&self, k: K) -> Option<&V> {
        self.core.get(k)
    }

    /// `true` iff `k` was newly inserted (spec §4.3 `put`).
    pub fn put(&mut self, k: K, v: V) -> bool {
        self.core.put(k, v)
    }

    pub fn remove(&mut self, k: K) -> bool {
        self.core.remove(k)
    }

    pub fn token(&self, k: K) -> Token {
        self.core.token(k)
    }

    pub fn value(&self, token: Token) -> &V {
        self.core.value(token)
    }

    pub fn iter(&self) -> impl Iterator<Item = (K, V)> + '_ {
        self.core.iter().map(|(t, v)| (self.core.token_key(t).expect("iterated token must resolve to a key"), v))
    }
}

impl<K: PrimKey, V: Clone + Default + PartialEq> PartialEq for PrimMap<K, V> {
    fn eq(&self, other: &Self) -> bool {
        self.core == other.core
    }
}

/// `u32`-keyed map (spec "IntMap").
pub type IntMap<V> = PrimMap<u32, V>;
/// `u64`-keyed map (spec "LongMap").
pub type LongMap<V> = PrimMap<u64, V>;
/// `f32`-keyed map (spec "FloatMap"); `-0.0`/NaN are canonicalized before
/// hashing/equality per spec §4.3.
pub type FloatMap<V> = PrimMap<f32, V>;
/// `f64`-keyed map (spec "DoubleMap").
pub type DoubleMap<V> = PrimMap<f64, V>;

/// A map from a reference-typed key to `V`, keyed through a caller-supplied
/// [`EqualHash`] strategy (spec "ObjMap").
#[derive(Debug, Clone)]
pub struct ObjMap<K, V, S> {
    core: RefHashCore<K, V, S>,
}

impl<K: Clone, V: Clone + Default, S: EqualHash<K>> ObjMap<K, V, S> {
    pub fn new(strategy: S) -> Self {
        Self { core: RefHashCore::new(strategy) }
    }

    pub fn len(&self) -> usize {
        self.core.len()
    }

    pub fn is_empty(&self) -> bool {
        self.core.is_empty()
    }

    pub fn get(&self, k: &K) -> Option<&V> {
        self.core.get(k)
    }

    pub fn contains_key(&self, k: &K) -> bool {
        self.core.token(k).is_present()
    }

    pub fn put(&mut self, k: K, v: V) -> bool {
        self.core.put(k, v)
    }

    pub fn remove(&mut self, k: &K) -> bool {
        self.core.remove(k)
    }

    pub fn put_null(&mut self, v: V) -> bool {
        self.core.put_null(v)
    }

    pub fn get_null(&self) -> Option<&V> {
        let t = self.core.token_null();
        if t.is_present() {
            Some(self.core.value(t))
        } else {
            None
        }
    }

    pub fn remove_null(&mut self) -> bool {
        self.core.remove_null()
    }
}

/// `String`-keyed map using the built-in [`StringEqualHash`] strategy.
pub type StringMap<V> = ObjMap<String, V, StringEqualHash>;
/// `Vec<u8>`-keyed map using the built-in [`BytesEqualHash`] strategy.
pub type BytesMap<V> = ObjMap<Vec<u8>, V, BytesEqualHash>;

/// A byte (`u8`)-keyed map backed by [`ByteSet`]'s bitmap + rank cache
/// rather than a full `HashCore`: with only 256 possible keys, a dense
/// bitmap plus a companion value array indexed by `rank(k) - 1` beats
/// open-addressing outright (spec §3.6/§4.5).
#[derive(Debug, Clone, Default)]
pub struct ByteMap<V: Clone + Default> {
    keys: ByteSet,
    values: List<V>,
}

impl<V: Clone + Default> ByteMap<V> {
    pub fn new() -> Self {
        Self { keys: ByteSet::new(), values: List::new() }
    }

    pub fn len(&self) -> usize {
        self.keys.len()
    }

    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }

    pub fn contains_key(&self, k: u8) -> bool {
        self.keys.contains(k)
    }

    pub fn get(&mut self, k: u8) -> Option<&V> {
        if self.keys.contains(k) {
            let idx = self.keys.rank(k) as usize - 1;
            Some(self.values.get(idx))
        } else {
            None
        }
    }

    /// `true` iff `k` was newly inserted.
    pub fn put(&mut self, k: u8, v: V) -> bool {
        if self.keys.contains(k) {
            let idx = self.keys.rank(k) as usize - 1;
            self.values.set(idx, v);
            false
        } else {
            self.keys.add(k);
            let idx = self.keys.rank(k) as usize - 1;
            self.values.insert(idx, v);
            true
        }
    }

    pub fn remove(&mut self, k: u8) -> Option<V> {
        if !self.keys.contains(k) {
            return None;
        }
        let idx = self.keys.rank(k) as usize - 1;
        let removed = self.values.remove(idx);
        self.keys.remove(k);
        Some(removed)
    }
}
