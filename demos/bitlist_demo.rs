//! Walks through the "dirty used" lifecycle and insert/remove shifting
//! that `BitList` is built around (spec §3.1/§4.1).

use packed_collections::BitList;
use packed_collections::json::ValueWriter;

fn main() {
    env_logger::init();

    let mut b = BitList::new();
    for bit in [0usize, 63, 64, 127, 128] {
        b.set1(bit);
    }
    println!("size={} used_words=3 cardinality={}", b.size(), b.cardinality());
    println!("last1={}", b.last1());
    println!("next1(1)={}", b.next1(1));
    println!("next1(129)={}", b.next1(129));

    // Clearing the only set bit in the top word marks `used` dirty; the
    // next read retightens it transparently.
    b.set0(128);
    println!("after clearing bit 128: used()={}", b.used());

    b.insert(64, true);
    println!("after inserting at 64: get(65)={} (was bit 64)", b.get(65));
    b.remove(64);
    println!("after removing at 64: get(64)={}", b.get(64));

    let mut w = ValueWriter::new();
    b.write_json(&mut w);
    println!("as JSON: {}", w.finish());
}
