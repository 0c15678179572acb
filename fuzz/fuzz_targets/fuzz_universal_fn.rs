#![no_main]

use libfuzzer_sys::fuzz_target;
use unihash::{UniversalHash, is_prime};

fuzz_target!(|data: &[u8]| {
    // max_key (3 bytes), table size (2 bytes), a, b, key (8 bytes each)
    if data.len() < 29 {
        return;
    }
    let max_key = u32::from_le_bytes([data[0], data[1], data[2], 0]) as u64;
    let table_size = u16::from_le_bytes([data[3], data[4]]) as usize;
    let a = u64::from_le_bytes(data[5..13].try_into().unwrap());
    let b = u64::from_le_bytes(data[13..21].try_into().unwrap());
    let key = u64::from_le_bytes(data[21..29].try_into().unwrap());

    let generator = match UniversalHash::new(max_key, table_size) {
        Ok(generator) => generator,
        Err(_) => {
            assert_eq!(table_size, 0);
            return;
        }
    };

    let p = generator.modulus();
    assert!(p > max_key);
    assert!(is_prime(p));

    // Unchecked parameters still land in range
    let f = generator.function(a, b);
    assert!(f.hash(key) < table_size);

    // Checked parameters agree with the documented ranges
    let checked = generator.try_function(a, b);
    assert_eq!(checked.is_ok(), a >= 1 && a < p && b < p);
});
