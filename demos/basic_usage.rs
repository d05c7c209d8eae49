//! Exercises one container from each layer end to end, the way the
//! teacher's `basic_usage` example walks through `LearnedKvStore`.

use packed_collections::{BitList, ByteSet, IntMap, IntSet, List, NullList};

fn main() {
    env_logger::init();

    let mut bits = BitList::new();
    for b in [0usize, 5, 63, 64, 127] {
        bits.set1(b);
    }
    println!("BitList cardinality: {}", bits.cardinality());
    println!("BitList last1: {}", bits.last1());

    let mut list: List<i32> = List::new();
    for v in [10, 20, 30] {
        list.push(v);
    }
    list.insert(1, 15);
    println!("List after insert: {:?}", list.as_slice());

    let mut nulls: NullList<&'static str> = NullList::new();
    nulls.set(0, Some("first"));
    nulls.set(1, None);
    nulls.set(2, Some("third"));
    println!(
        "NullList: [{:?}, {:?}, {:?}], present = {}",
        nulls.get(0),
        nulls.get(1),
        nulls.get(2),
        nulls.cardinality()
    );

    let mut ints: IntMap<&'static str> = IntMap::new();
    ints.put(0, "zero key");
    ints.put(42, "the answer");
    println!("IntMap[0] = {:?}, IntMap[42] = {:?}", ints.get(0), ints.get(42));

    let mut set = IntSet::new();
    for k in [1u32, 2, 3, 4, 4] {
        set.add(k);
    }
    println!("IntSet size: {}", set.len());

    let mut bytes = ByteSet::new();
    for b in [b'a', b'b', b'z'] {
        bytes.add(b);
    }
    println!("ByteSet cardinality: {}", bytes.cardinality());
}
