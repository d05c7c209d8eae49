//! Open-addressing, linear-probing hash table core shared by every
//! primitive-keyed Set/Map flavor (spec §3.5/§4.3) — the centerpiece of
//! this crate. Deletion uses backward-shift (no tombstones); insertion
//! maintains the Robin-Hood probe-distance invariant so that backward-shift
//! deletion stays correct without rescanning the whole table.
//!
//! The primitive key `0` is a distinguished "zero key", held out-of-band in
//! `has_zero_key`/`zero_value` so the main slot array can use `K`'s own
//! zero as the empty-slot sentinel. A null-key pseudo-slot is reserved in
//! the [`Token`] address space for parity with [`crate::equalhash::RefHashCore`],
//! but this primitive-keyed core never populates it (see `SPEC_FULL.md`
//! §3.5).

use crate::error::CollectionError;
use crate::util::hash_mix::{canonical_f32_bits, canonical_f64_bits, mix32, mix64, EntryAccumulator};

/// An opaque lookup result: a normal slot index, the zero-key pseudo-slot,
/// the null-key pseudo-slot, or one of two "not found" sentinels (spec
/// §4.3, §9 "Zero-key and null-key as out-of-band state").
///
/// Ranges are disjoint by construction: `0..capacity` is a normal slot,
/// `capacity` is the zero-key pseudo-slot, `capacity + 1` is the null-key
/// pseudo-slot, and the two negative sentinels never collide with either.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Token(i64);

impl Token {
    /// Key is not present.
    pub const NONE: Token = Token(-1);
    /// Key is present but its value is logically null (`NullList`-backed
    /// maps only).
    pub const NULL: Token = Token(-2);

    pub fn is_none(self) -> bool {
        self == Self::NONE
    }

    pub fn is_null(self) -> bool {
        self == Self::NULL
    }

    pub fn is_present(self) -> bool {
        !self.is_none()
    }

    pub(crate) fn normal(slot: usize) -> Token {
        Token(slot as i64)
    }

    pub(crate) fn zero_pseudo(capacity: usize) -> Token {
        Token(capacity as i64)
    }

    pub(crate) fn null_pseudo(capacity: usize) -> Token {
        Token(capacity as i64 + 1)
    }

    pub(crate) fn is_zero_pseudo(self, capacity: usize) -> bool {
        self.0 == capacity as i64
    }

    pub(crate) fn is_null_pseudo(self, capacity: usize) -> bool {
        self.0 == capacity as i64 + 1
    }

    pub(crate) fn is_normal(self, capacity: usize) -> bool {
        self.0 >= 0 && (self.0 as usize) < capacity
    }

    /// `Some(slot)` if this token addresses a normal (non-pseudo) slot
    /// within `capacity`, else `None`.
    pub(crate) fn normal_index(self, capacity: usize) -> Option<usize> {
        if self.is_normal(capacity) {
            Some(self.0 as usize)
        } else {
            None
        }
    }
}

/// The maximum number of entries a container may be asked to hold (spec §7:
/// "Callers must not request more than 2^30 entries").
pub const MAX_ENTRIES: usize = 1 << 30;

/// Capability every primitive key type plugs in: recognizing its own zero
/// (the distinguished empty-slot sentinel) and producing a well-mixed
/// 64-bit hash.
pub trait PrimKey: Copy + PartialEq + Default {
    fn is_zero(&self) -> bool;
    fn mix_hash(&self) -> u64;
}

macro_rules! impl_prim_key_int {
    ($($t:ty),*) => {
        $(
            impl PrimKey for $t {
                fn is_zero(&self) -> bool {
                    *self == 0
                }

                fn mix_hash(&self) -> u64 {
                    mix64(*self as u64)
                }
            }
        )*
    };
}

impl_prim_key_int!(u8, u16, u32, u64, i8, i16, i32, i64, usize);

impl PrimKey for f32 {
    fn is_zero(&self) -> bool {
        *self == 0.0
    }

    fn mix_hash(&self) -> u64 {
        mix32(canonical_f32_bits(*self)) as u64
    }
}

impl PrimKey for f64 {
    fn is_zero(&self) -> bool {
        *self == 0.0
    }

    fn mix_hash(&self) -> u64 {
        mix64(canonical_f64_bits(*self))
    }
}

const DEFAULT_LOAD_FACTOR: f64 = 0.75;
const MIN_LOAD_FACTOR: f64 = 0.01;
const MAX_LOAD_FACTOR: f64 = 0.99;

fn clamp_load_factor(lf: f64) -> f64 {
    lf.clamp(MIN_LOAD_FACTOR, MAX_LOAD_FACTOR)
}

fn initial_capacity_for(expected_items: usize, load_factor: f64) -> usize {
    let needed = ((expected_items as f64) / load_factor).ceil() as usize;
    needed.max(4).next_power_of_two()
}

/// Open-addressing hash table core, generic over a zero-sentinel primitive
/// key `K` and an arbitrary value `V`. Sets are the `V = ()` instantiation;
/// see `crate::sets`/`crate::maps` for the typed façades.
#[derive(Debug, Clone)]
pub struct HashCore<K: PrimKey, V: Clone + Default> {
    keys: Vec<K>,
    values: Vec<V>,
    assigned: usize,
    capacity: usize,
    mask: usize,
    resize_at: usize,
    load_factor: f64,
    has_zero_key: bool,
    zero_value: V,
    has_null_key: bool,
    null_value: V,
}

impl<K: PrimKey, V: Clone + Default> HashCore<K, V> {
    pub fn new() -> Self {
        Self::with_expected_items(0)
    }

    pub fn with_expected_items(expected_items: usize) -> Self {
        Self::with_params(expected_items, DEFAULT_LOAD_FACTOR)
    }

    pub fn with_params(expected_items: usize, load_factor: f64) -> Self {
        let load_factor = clamp_load_factor(load_factor);
        let capacity = initial_capacity_for(expected_items, load_factor);
        Self::with_capacity_exact(capacity, load_factor)
    }

    /// Fallible constructor for an explicit capacity request, surfacing
    /// spec §7's "callers must not request more than 2^30 entries" as a
    /// real error rather than a silent clamp or a panic.
    pub fn try_with_expected_items(expected_items: usize, load_factor: f64) -> Result<Self, CollectionError> {
        if expected_items > MAX_ENTRIES {
            return Err(CollectionError::CapacityOverflow { requested: expected_items });
        }
        Ok(Self::with_params(expected_items, load_factor))
    }

    fn with_capacity_exact(capacity: usize, load_factor: f64) -> Self {
        debug_assert!(capacity.is_power_of_two() && capacity >= 4);
        let resize_at = ((capacity as f64) * load_factor).floor() as usize;
        Self {
            keys: vec![K::default(); capacity],
            values: vec![V::default(); capacity],
            assigned: 0,
            capacity,
            mask: capacity - 1,
            resize_at,
            load_factor,
            has_zero_key: false,
            zero_value: V::default(),
            has_null_key: false,
            null_value: V::default(),
        }
    }

    pub fn len(&self) -> usize {
        self.assigned + self.has_zero_key as usize + self.has_null_key as usize
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    fn ideal_slot(&self, hash: u64) -> usize {
        (hash as usize) & self.mask
    }

    fn probe_distance(&self, slot: usize, ideal: usize) -> usize {
        (slot + self.capacity - ideal) & self.mask
    }

    pub fn token(&self, k: K) -> Token {
        if k.is_zero() {
            return if self.has_zero_key { Token::zero_pseudo(self.capacity) } else { Token::NONE };
        }
        let ideal = self.ideal_slot(k.mix_hash());
        let mut slot = ideal;
        let mut dist = 0usize;
        loop {
            if self.keys[slot].is_zero() {
                return Token::NONE;
            }
            if self.keys[slot] == k {
                return Token::normal(slot);
            }
            let existing_ideal = self.ideal_slot(self.keys[slot].mix_hash());
            let existing_dist = self.probe_distance(slot, existing_ideal);
            if existing_dist < dist {
                return Token::NONE;
            }
            slot = (slot + 1) & self.mask;
            dist += 1;
        }
    }

    pub fn contains(&self, k: K) -> bool {
        self.token(k).is_present()
    }

    /// Constant-time fetch from the slot (or pseudo-slot) a [`Token`]
    /// identifies. Panics if `token` is [`Token::NONE`]/[`Token::NULL`] or
    /// stale with respect to this table.
    pub fn value(&self, token: Token) -> &V {
        if token.is_zero_pseudo(self.capacity) {
            &self.zero_value
        } else if token.is_null_pseudo(self.capacity) {
            &self.null_value
        } else if token.is_normal(self.capacity) {
            &self.values[token.0 as usize]
        } else {
            panic!("HashCore::value: token {:?} is not a present-value token", token)
        }
    }

    pub fn get(&self, k: K) -> Option<&V> {
        let t = self.token(k);
        if t.is_present() {
            Some(self.value(t))
        } else {
            None
        }
    }

    /// Inserts or overwrites `k -> v`. Returns `true` iff the logical size
    /// increased (spec §4.3 `put`).
    pub fn put(&mut self, k: K, v: V) -> bool {
        if k.is_zero() {
            let was_present = self.has_zero_key;
            self.has_zero_key = true;
            self.zero_value = v;
            return !was_present;
        }

        if self.assigned + 1 > self.resize_at {
            self.rehash(self.capacity * 2);
        }

        let ideal = self.ideal_slot(k.mix_hash());
        let mut slot = ideal;
        let mut dist = 0usize;
        let mut cur_k = k;
        let mut cur_v = v;
        loop {
            if self.keys[slot].is_zero() {
                self.keys[slot] = cur_k;
                self.values[slot] = cur_v;
                self.assigned += 1;
                return true;
            }
            if self.keys[slot] == cur_k {
                self.values[slot] = cur_v;
                return false;
            }
            let existing_ideal = self.ideal_slot(self.keys[slot].mix_hash());
            let existing_dist = self.probe_distance(slot, existing_ideal);
            if existing_dist < dist {
                std::mem::swap(&mut cur_k, &mut self.keys[slot]);
                std::mem::swap(&mut cur_v, &mut self.values[slot]);
                dist = existing_dist;
            }
            slot = (slot + 1) & self.mask;
            dist += 1;
        }
    }

    /// Removes `k` via backward-shift deletion, preserving the Robin-Hood
    /// locality invariant without tombstones. Returns whether a deletion
    /// occurred.
    pub fn remove(&mut self, k: K) -> bool {
        if k.is_zero() {
            if self.has_zero_key {
                self.has_zero_key = false;
                self.zero_value = V::default();
                return true;
            }
            return false;
        }

        let ideal = self.ideal_slot(k.mix_hash());
        let mut slot = ideal;
        let mut dist = 0usize;
        loop {
            if self.keys[slot].is_zero() {
                return false;
            }
            if self.keys[slot] == k {
                break;
            }
            let existing_ideal = self.ideal_slot(self.keys[slot].mix_hash());
            let existing_dist = self.probe_distance(slot, existing_ideal);
            if existing_dist < dist {
                return false;
            }
            slot = (slot + 1) & self.mask;
            dist += 1;
        }

        let mut gap = slot;
        loop {
            let next = (gap + 1) & self.mask;
            if self.keys[next].is_zero() {
                break;
            }
            let next_ideal = self.ideal_slot(self.keys[next].mix_hash());
            if next_ideal == next {
                // `next` sits at its own ideal slot already; moving it back
                // would violate its probe-distance invariant.
                break;
            }
            self.keys[gap] = self.keys[next];
            self.values[gap] = self.values[next].clone();
            gap = next;
        }
        self.keys[gap] = K::default();
        self.values[gap] = V::default();
        self.assigned -= 1;
        true
    }

    fn rehash(&mut self, new_capacity: usize) {
        log::debug!(
            "HashCore: rehashing from capacity {} to {new_capacity} ({} assigned)",
            self.capacity,
            self.assigned
        );
        let old_keys = std::mem::replace(&mut self.keys, vec![K::default(); new_capacity]);
        let old_values = std::mem::replace(&mut self.values, vec![V::default(); new_capacity]);
        self.capacity = new_capacity;
        self.mask = new_capacity - 1;
        self.resize_at = ((new_capacity as f64) * self.load_factor).floor() as usize;
        self.assigned = 0;

        for (k, v) in old_keys.into_iter().zip(old_values.into_iter()) {
            if !k.is_zero() {
                self.insert_during_rehash(k, v);
            }
        }
    }

    /// Plain Robin-Hood insertion used only while replaying entries into a
    /// freshly-grown table: every key is known-unique and known-non-zero,
    /// so no overwrite check or resize check is needed.
    fn insert_during_rehash(&mut self, mut cur_k: K, mut cur_v: V) {
        let ideal = self.ideal_slot(cur_k.mix_hash());
        let mut slot = ideal;
        let mut dist = 0usize;
        loop {
            if self.keys[slot].is_zero() {
                self.keys[slot] = cur_k;
                self.values[slot] = cur_v;
                self.assigned += 1;
                return;
            }
            let existing_ideal = self.ideal_slot(self.keys[slot].mix_hash());
            let existing_dist = self.probe_distance(slot, existing_ideal);
            if existing_dist < dist {
                std::mem::swap(&mut cur_k, &mut self.keys[slot]);
                std::mem::swap(&mut cur_v, &mut self.values[slot]);
                dist = existing_dist;
            }
            slot = (slot + 1) & self.mask;
            dist += 1;
        }
    }

    /// Iteration primitive (spec §4.3): seed with [`Token::NONE`], then
    /// repeatedly feed back the returned token until it is `NONE` again.
    /// Visits normal occupied slots in index order, then the zero-key
    /// pseudo-slot, then the null-key pseudo-slot.
    pub fn iter_next(&self, token: Token) -> Token {
        let mut i: i64 = if token.is_none() { 0 } else { token.0 + 1 };
        while i >= 0 && (i as usize) < self.capacity {
            if !self.keys[i as usize].is_zero() {
                return Token::normal(i as usize);
            }
            i += 1;
        }
        if token.is_zero_pseudo(self.capacity) {
            i = self.capacity as i64 + 1;
        } else if !token.is_null_pseudo(self.capacity) && i == self.capacity as i64 {
            if self.has_zero_key {
                return Token::zero_pseudo(self.capacity);
            }
            i += 1;
        }
        if i == self.capacity as i64 + 1 && self.has_null_key {
            return Token::null_pseudo(self.capacity);
        }
        Token::NONE
    }

    /// Ordered (token, key, value) traversal built on [`Self::iter_next`].
    pub fn iter(&self) -> HashCoreIter<'_, K, V> {
        HashCoreIter { core: self, cur: Token::NONE }
    }

    /// The key a present [`Token`] addresses, or `None` for `NONE`/`NULL`
    /// or a stale token. Set façades (which have no `V` to hand back from
    /// [`Self::value`]) iterate keys through this instead.
    pub fn token_key(&self, token: Token) -> Option<K> {
        if let Some(slot) = token.normal_index(self.capacity) {
            Some(self.keys[slot])
        } else if token.is_zero_pseudo(self.capacity) {
            Some(K::default())
        } else {
            None
        }
    }

    /// Robin-Hood invariant checker used by the test suite (spec §8 #4):
    /// for every occupied slot `s`, the slot at `(s - 1) & mask` is either
    /// empty or has probe distance `<= distance_at(s) - 1`.
    pub fn check_robin_hood_invariant(&self) -> bool {
        for s in 0..self.capacity {
            if self.keys[s].is_zero() {
                continue;
            }
            let ideal = self.ideal_slot(self.keys[s].mix_hash());
            let dist_s = self.probe_distance(s, ideal);
            if dist_s == 0 {
                continue;
            }
            let prev = (s + self.capacity - 1) & self.mask;
            if self.keys[prev].is_zero() {
                return false;
            }
            let prev_ideal = self.ideal_slot(self.keys[prev].mix_hash());
            let dist_prev = self.probe_distance(prev, prev_ideal);
            if dist_prev > dist_s - 1 {
                return false;
            }
        }
        true
    }
}

impl<K: PrimKey, V: Clone + Default> Default for HashCore<K, V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K: PrimKey, V: Clone + Default + std::hash::Hash> HashCore<K, V> {
    /// Order-independent content hash (spec §4.3 "Equality and hash of a
    /// HashCore"): every entry folds in through a commutative accumulator,
    /// so two tables with the same entries hash equal regardless of
    /// insertion order or current probe layout.
    pub fn content_hash(&self) -> u64 {
        use std::hash::{Hash, Hasher};
        let mut acc = EntryAccumulator::new();
        let mut hash_value = |v: &V| -> u64 {
            let mut h = std::collections::hash_map::DefaultHasher::new();
            v.hash(&mut h);
            h.finish()
        };
        for s in 0..self.capacity {
            if !self.keys[s].is_zero() {
                acc.combine(self.keys[s].mix_hash(), hash_value(&self.values[s]));
            }
        }
        if self.has_zero_key {
            acc.combine(0, hash_value(&self.zero_value));
        }
        if self.has_null_key {
            acc.combine(1, hash_value(&self.null_value));
        }
        acc.finalize(self.len())
    }
}

impl<K: PrimKey, V: Clone + Default + PartialEq> PartialEq for HashCore<K, V> {
    fn eq(&self, other: &Self) -> bool {
        if self.len() != other.len() {
            return false;
        }
        if self.has_zero_key != other.has_zero_key
            || (self.has_zero_key && self.zero_value != other.zero_value)
        {
            return false;
        }
        if self.has_null_key != other.has_null_key
            || (self.has_null_key && self.null_value != other.null_value)
        {
            return false;
        }
        for s in 0..self.capacity {
            if !self.keys[s].is_zero() {
                match other.get(self.keys[s]) {
                    Some(v) if *v == self.values[s] => {}
                    _ => return false,
                }
            }
        }
        true
    }
}

/// Iterator over `(Token, &K, &V)` built on [`HashCore::iter_next`].
pub struct HashCoreIter<'a, K: PrimKey, V: Clone + Default> {
    core: &'a HashCore<K, V>,
    cur: Token,
}

impl<'a, K: PrimKey, V: Clone + Default> Iterator for HashCoreIter<'a, K, V> {
    type Item = (Token, V);

    fn next(&mut self) -> Option<Self::Item> {
        self.cur = self.core.iter_next(self.cur);
        if self.cur.is_none() {
            None
        } else {
            Some((self.cur, self.core.value(self.cur).clone()))
        }
    }
}
