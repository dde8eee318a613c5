#![no_main]

use libfuzzer_sys::fuzz_target;

use sortanim_core::{sort_instant, Direction};

fuzz_target!(|data: &[u8]| {
    let Some((&flag, rest)) = data.split_first() else {
        return;
    };
    let direction = if flag & 1 == 0 {
        Direction::Ascending
    } else {
        Direction::Descending
    };
    let values: Vec<i32> = rest
        .chunks_exact(2)
        .map(|c| i32::from(i16::from_le_bytes([c[0], c[1]])))
        .collect();

    let sorted = sort_instant(values.clone(), direction);

    let mut expected = values;
    expected.sort_unstable();
    if direction == Direction::Descending {
        expected.reverse();
    }
    assert_eq!(sorted, expected);
});
