//! Property-based tests for the round-trip and idempotence laws spec §8
//! calls out across module boundaries (`BitList` + `NullList`, `HashCore` +
//! `Token`), grounded in `ChainSafe-forest`'s use of `quickcheck` for its
//! own data-structure invariants.

use packed_collections::hashcore::HashCore;
use packed_collections::{BitList, NullList};
use quickcheck_macros::quickcheck;

#[quickcheck]
fn bitlist_flip_twice_is_identity(bit: usize) -> bool {
    let bit = bit % 4096;
    let mut b = BitList::new();
    b.set1(bit / 2 + 1); // give it some unrelated content
    let before = b.get(bit);
    b.flip(bit);
    b.flip(bit);
    b.get(bit) == before
}

#[quickcheck]
fn bitlist_set1_is_idempotent(bit: usize) -> bool {
    let bit = bit % 4096;
    let mut b = BitList::new();
    b.set1(bit);
    let after_once = b.get(bit);
    b.set1(bit);
    after_once == b.get(bit) && b.get(bit)
}

#[quickcheck]
fn bitlist_insert_then_remove_restores_state(bits: Vec<bool>, at: usize) -> bool {
    if bits.is_empty() {
        return true;
    }
    let mut b = BitList::new();
    for (i, &v) in bits.iter().enumerate() {
        if v {
            b.set1(i);
        } else {
            b.set0(i);
        }
    }
    let before: Vec<bool> = (0..bits.len()).map(|i| b.get(i)).collect();
    let at = at % (bits.len() + 1);
    b.insert(at, true);
    b.remove(at);
    let after: Vec<bool> = (0..bits.len()).map(|i| b.get(i)).collect();
    before == after
}

#[quickcheck]
fn bitlist_rank_select_round_trip(positions: Vec<usize>) -> bool {
    let mut b = BitList::new();
    let mut distinct: Vec<usize> = positions.into_iter().map(|p| p % 2048).collect();
    distinct.sort_unstable();
    distinct.dedup();
    for &p in &distinct {
        b.set1(p);
    }
    distinct.iter().enumerate().all(|(k, &p)| b.select(k) == p as i64 && b.rank(p) == k + 1)
}

#[quickcheck]
fn nulllist_invariant_holds_after_random_ops(ops: Vec<(u8, u8, i32)>) -> bool {
    let mut l: NullList<i32> = NullList::new();
    for (op, raw_pos, value) in ops {
        let size = l.size().max(1);
        let pos = (raw_pos as usize) % size;
        match op % 3 {
            0 => l.set(pos, Some(value)),
            1 => l.set(pos, None),
            _ => {
                if pos <= l.size() {
                    l.insert(pos, if value % 2 == 0 { Some(value) } else { None });
                }
            }
        }
        if !l.check_invariant() {
            return false;
        }
    }
    l.check_invariant()
}

#[quickcheck]
fn hashcore_put_then_get_round_trips(k: u32, v: i64) -> bool {
    let mut c: HashCore<u32, i64> = HashCore::new();
    c.put(k, v);
    c.get(k) == Some(&v)
}

#[quickcheck]
fn hashcore_put_then_remove_leaves_no_token(k: u32, v: i64) -> bool {
    let mut c: HashCore<u32, i64> = HashCore::new();
    c.put(k, v);
    c.remove(k);
    c.token(k).is_none()
}

#[quickcheck]
fn hashcore_put_is_idempotent(k: u32, v: i64) -> bool {
    let mut c: HashCore<u32, i64> = HashCore::new();
    c.put(k, v);
    let len_before = c.len();
    c.put(k, v);
    c.len() == len_before && c.get(k) == Some(&v)
}

#[quickcheck]
fn hashcore_survives_many_random_puts_and_removes(ops: Vec<(u32, i64, bool)>) -> bool {
    let mut c: HashCore<u32, i64> = HashCore::new();
    let mut model: std::collections::HashMap<u32, i64> = std::collections::HashMap::new();
    for (k, v, remove) in ops {
        if remove {
            c.remove(k);
            model.remove(&k);
        } else {
            c.put(k, v);
            model.insert(k, v);
        }
    }
    if !c.check_robin_hood_invariant() {
        return false;
    }
    model.iter().all(|(&k, &v)| c.get(k) == Some(&v)) && c.len() == model.len()
}
