//! Peripheral helpers the core subsystems build on: in-place/into-new array
//! shifting (`resize`), integer/stream hash-mixing (`hash_mix`), and a
//! generic introspective `sort` over a small index-permutation capability.

pub mod hash_mix;
pub mod resize;
pub mod sort;
