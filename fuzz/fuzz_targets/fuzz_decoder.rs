#![no_main]
use std::cell::RefCell;

use libfuzzer_sys::{fuzz_mutator, fuzz_target, fuzzer_mutate};
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};
use utf8text::{Backend, ManualBackend, NativeBackend};

thread_local! {
    static RNG: RefCell<SmallRng> = RefCell::new(SmallRng::from_os_rng());
}

/// Sequences sitting right on either side of a validity boundary.
static EDGES: &[&[u8]] = &[
    &[0xC0, 0x80],             // overlong U+0000
    &[0xC1, 0xBF],             // overlong U+007F
    &[0xC2, 0x80],             // U+0080
    &[0xDF, 0xBF],             // U+07FF
    &[0xE0, 0x9F, 0xBF],       // overlong U+07FF
    &[0xE0, 0xA0, 0x80],       // U+0800
    &[0xED, 0x9F, 0xBF],       // U+D7FF
    &[0xED, 0xA0, 0x80],       // U+D800
    &[0xED, 0xBF, 0xBF],       // U+DFFF
    &[0xEE, 0x80, 0x80],       // U+E000
    &[0xEF, 0xBB, 0xBF],       // BOM
    &[0xF0, 0x8F, 0xBF, 0xBF], // overlong U+FFFF
    &[0xF4, 0x8F, 0xBF, 0xBF], // U+10FFFF
    &[0xF4, 0x90, 0x80, 0x80], // U+110000
    &[0xF8, 0x88, 0x80, 0x80, 0x80],
    &[0xFC, 0x84, 0x80, 0x80, 0x80, 0x80],
    &[0x80],
    &[0xFE],
];

fn with_rng<F, R>(f: F) -> R
where
    F: FnOnce(&mut SmallRng) -> R,
{
    RNG.with(|cell| f(&mut cell.borrow_mut()))
}

/// Splices an edge sequence (possibly cut short) into the input at a random
/// position, one time in four; otherwise defers to libFuzzer.
fn mutator(data: &mut [u8], size: usize, max_size: usize, seed: u32) -> usize {
    if seed % 4 != 0 {
        return fuzzer_mutate(data, size, max_size);
    }
    with_rng(|rng| {
        let edge = EDGES[rng.random_range(0..EDGES.len())];
        let edge = &edge[..rng.random_range(1..=edge.len())];
        let at = rng.random_range(0..=size);
        let room = max_size.saturating_sub(size).min(edge.len());
        if room == 0 {
            return size;
        }
        data.copy_within(at..size, at + room);
        data[at..at + room].copy_from_slice(&edge[..room]);
        size + room
    })
}

fuzz_mutator!(|data: &mut [u8], size: usize, max_size: usize, seed: u32| {
    mutator(data, size, max_size, seed)
});

fn decoder(data: &[u8]) {
    let manual = ManualBackend.decode(data);
    let native = NativeBackend.decode(data);
    assert_eq!(manual, native, "backends disagree on {data:02X?}");

    match (core::str::from_utf8(data), manual) {
        (Ok(s), Ok(codepoints)) => {
            let expected: Vec<u32> = s.chars().map(u32::from).filter(|&c| c != 0xFEFF).collect();
            assert_eq!(codepoints, expected);
            let encoded = ManualBackend.encode(&codepoints).expect("decoded scalars encode");
            let without_bom: String = s.chars().filter(|&c| c != '\u{feff}').collect();
            assert_eq!(encoded, without_bom.as_bytes());
        }
        (Err(e), Err(err)) => {
            assert!(err.offset() >= e.valid_up_to(), "{err} before {}", e.valid_up_to());
        }
        (std_result, ours) => panic!("validity mismatch: core {std_result:?}, manual {ours:?}"),
    }
}

fuzz_target!(|data: &[u8]| decoder(data));
