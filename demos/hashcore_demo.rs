//! Walks through the distinguished zero-key slot, a forced rehash, and
//! shift-back deletion (spec §3.5/§4.3/§8 scenarios S1/S4/S6).

use packed_collections::hashcore::HashCore;

fn main() {
    env_logger::init();

    let mut core: HashCore<u32, &'static str> = HashCore::new();
    core.put(0, "zero key, out of band");
    core.put(1, "one");
    println!("capacity before growth: {}", core.capacity());

    for k in 2u32..=17 {
        let grew_before = core.capacity();
        core.put(k, "filler");
        if core.capacity() != grew_before {
            println!("rehashed to capacity {} while inserting key {k}", core.capacity());
        }
    }

    println!("get(0) = {:?}", core.get(0));
    println!("robin-hood invariant holds: {}", core.check_robin_hood_invariant());

    core.remove(1);
    println!("after removing key 1, robin-hood invariant holds: {}", core.check_robin_hood_invariant());
    println!("token(1) present: {}", core.token(1).is_present());
}
