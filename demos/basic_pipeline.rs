//! Basic example chaining sources, combinators and terminals.

use pulliter::{from_function, from_sequence, reduce, Iter};

fn main() -> anyhow::Result<()> {
    // Finite source: keep the odd readings, scale them, stop after three.
    let readings = vec![7, 12, 3, 9, 14, 5, 1];
    let scaled = from_sequence(&readings)
        .filter(|r| r % 2 == 1)
        .map(|r| r * 10)
        .take(3)
        .to_vec();
    println!("scaled odd readings: {scaled:?}");

    // Infinite source: Fibonacci numbers, bounded by take.
    let (mut a, mut b) = (0u64, 1u64);
    let fib = from_function(move || {
        let current = a;
        (a, b) = (b, a + b);
        Some(current)
    });
    let groups = fib.take(10).chunk_every(4)?.to_vec();
    println!("first ten Fibonacci numbers in groups of four: {groups:?}");

    // reduce passes (element, accumulator), element first.
    let digits = reduce(from_sequence([1, 2, 3]), String::new(), |d, acc| {
        format!("{acc}{d}")
    });
    println!("digits joined in order: {digits}");

    Ok(())
}
