//! Producer thread feeding a queue that is consumed through a lazy pipeline.

use std::thread;
use std::time::Duration;

use crossbeam::channel;
use pulliter::{from_queue, Iter};

fn main() -> anyhow::Result<()> {
    let (tx, rx) = channel::bounded(2);

    // The producer never stops on its own; it exits when the consumer
    // drops the receiver and `send` starts failing.
    let producer = thread::spawn(move || {
        let mut sent = 0u32;
        while tx.send(sent).is_ok() {
            sent += 1;
            thread::sleep(Duration::from_millis(5));
        }
        sent
    });

    let squares_of_multiples_of_three = from_queue(rx)
        .filter(|n| n % 3 == 0)
        .map(|n| n * n)
        .take(5)
        .to_vec();
    println!("squares of multiples of three: {squares_of_multiples_of_three:?}");

    let sent = producer
        .join()
        .map_err(|_| anyhow::anyhow!("producer panicked"))?;
    println!("producer sent {sent} values before the consumer hung up");

    Ok(())
}
