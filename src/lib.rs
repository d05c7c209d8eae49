//! # packed-collections
//!
//! Primitive-specialized containers: compact, boxing-free data structures
//! for a fixed element width (1-bit, N-bit packed, 8/16/32/64-bit
//! primitive, or reference) and a fixed key/value pair.
//!
//! ## Layout
//!
//! - [`bitlist`] — a dense bit vector with rank/select, ranged set/clear/
//!   flip, and in-place insert/remove at arbitrary bit positions.
//! - [`bitslist`] — a packed array of fixed-width unsigned items across a
//!   64-bit word stream.
//! - [`list`] — a dynamic array with the specific grow/shift-insert/
//!   shift-remove semantics this crate's higher layers depend on.
//! - [`nulllist`] — a logical `Option<T>` sequence as a nulls bitmap plus a
//!   dense present-values array.
//! - [`hashcore`] — the open-addressing, Robin-Hood/backward-shift hash
//!   table core behind every primitive-keyed Set/Map.
//! - [`equalhash`] — the reference-keyed counterpart of `hashcore`, plus
//!   the `EqualHash` strategy trait.
//! - [`byteset`] — a 256-slot bit vector with a prefix-sum rank cache,
//!   backing byte-keyed maps.
//! - [`sets`] / [`maps`] — thin façades binding the cores above to
//!   concrete (K) / (K, V) pairs: `IntSet`, `LongSet`, `StringSet`,
//!   `IntMap<V>`, `LongMap<V>`, `FloatMap<V>`, `DoubleMap<V>`,
//!   `StringMap<V>`, `ByteMap<V>`, and the generic `ObjSet`/`ObjMap`.
//! - [`json`] — the `JsonWriter` serialization collaborator each container
//!   calls through to emit structured output.
//! - [`persist`] — versioned, checksummed binary snapshots for any
//!   container that is `Serialize + Deserialize`.
//! - [`util`] — peripheral helpers the core subsystems build on: `resize`,
//!   `hash_mix`, and a generic introspective `sort`.
//!
//! ## Non-goals
//!
//! Thread-safe mutation, ordered iteration by key, persistent/immutable
//! variants, external-memory spill, and stable iterator validity across
//! structural mutation are all out of scope; see `SPEC_FULL.md`/`DESIGN.md`
//! for the full rationale.

pub mod bitlist;
pub mod bitslist;
pub mod byteset;
pub mod equalhash;
pub mod error;
pub mod hashcore;
pub mod json;
pub mod list;
pub mod maps;
pub mod nulllist;
pub mod persist;
pub mod sets;
pub mod util;

pub use bitlist::BitList;
pub use bitslist::BitsList;
pub use byteset::ByteSet;
pub use error::CollectionError;
pub use hashcore::{HashCore, Token};
pub use list::List;
pub use maps::{ByteMap, DoubleMap, FloatMap, IntMap, LongMap, ObjMap, StringMap};
pub use nulllist::NullList;
pub use sets::{IntSet, LongSet, ObjSet, StringSet};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn smoke_test_across_layers() {
        let mut bits = BitList::new();
        bits.set1(3);
        assert!(bits.get(3));

        let mut packed = BitsList::new(5);
        packed.push(17);
        assert_eq!(packed.get(0), 17);

        let mut nulls: NullList<i32> = NullList::new();
        nulls.set(0, Some(42));
        assert_eq!(nulls.get(0), Some(&42));

        let mut ints: IntMap<i64> = IntMap::new();
        ints.put(7, 70);
        assert_eq!(ints.get(7), Some(&70));

        let mut set = IntSet::new();
        set.add(7);
        assert!(set.contains(7));

        let mut bytes = ByteSet::new();
        bytes.add(200);
        assert!(bytes.contains(200));
    }
}
