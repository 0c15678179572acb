#![no_main]

use libfuzzer_sys::fuzz_target;
use std::collections::BTreeMap;
use unihash::{HashTable, UniversalHash};

fuzz_target!(|data: &[u8]| {
    // Header: table size (1 byte), a and b (2 bytes each)
    if data.len() < 5 {
        return;
    }
    let table_size = data[0] as usize + 1;
    let a = u16::from_le_bytes([data[1], data[2]]) as u64;
    let b = u16::from_le_bytes([data[3], data[4]]) as u64;

    let generator = UniversalHash::new(u16::MAX as u64, table_size).expect("valid generator");
    let p = generator.modulus();
    let f = generator.function(a % (p - 1) + 1, b % p);
    let mut table = HashTable::with_function(f);

    // Model: key -> values in insertion order
    let mut model: BTreeMap<u64, Vec<usize>> = BTreeMap::new();
    let mut adds = 0usize;

    // Each op is 3 bytes: opcode, key (u16)
    for (i, op) in data[5..].chunks_exact(3).enumerate() {
        let key = u16::from_le_bytes([op[1], op[2]]) as u64;
        if op[0] & 1 == 0 {
            assert!(table.add(key, i));
            model.entry(key).or_default().push(i);
            adds += 1;
        } else {
            let expected = model.get(&key).and_then(|values| values.first());
            assert_eq!(table.get(key), expected, "get({key}) mismatch");
        }
    }

    let lengths = table.chain_lengths();
    assert_eq!(lengths.len(), table_size);
    assert_eq!(lengths.iter().sum::<usize>(), adds);

    for (index, &length) in lengths.iter().enumerate() {
        if let Some(bucket) = table.bucket(index) {
            assert!(bucket.is_consistent(), "bucket {index} inconsistent");
            assert_eq!(bucket.len(), length);
        }
    }
});
