//! Queue-backed source
//!
//! The only place where a pull can suspend. Each pull is one blocking
//! receive; the iterator is exhausted once the queue is closed and drained.
//! There is no timeout and no cancellation: to stop an iterator over an open
//! queue early, the producer has to close the queue.

use std::sync::mpsc;

use crossbeam::channel;
use tracing::debug;

use crate::Iter;

/// A thread-safe FIFO handoff whose receive blocks
pub trait BlockingQueue {
    /// Element type carried by the queue
    type Item;

    /// Block until an element arrives (`Some`) or the queue is closed and empty (`None`)
    fn recv_blocking(&self) -> Option<Self::Item>;
}

impl<T> BlockingQueue for mpsc::Receiver<T> {
    type Item = T;

    fn recv_blocking(&self) -> Option<T> {
        self.recv().ok()
    }
}

impl<T> BlockingQueue for channel::Receiver<T> {
    type Item = T;

    fn recv_blocking(&self) -> Option<T> {
        self.recv().ok()
    }
}

impl<Q: BlockingQueue + ?Sized> BlockingQueue for &Q {
    type Item = Q::Item;

    fn recv_blocking(&self) -> Option<Q::Item> {
        (**self).recv_blocking()
    }
}

/// Iterator draining a [`BlockingQueue`]
#[derive(Debug)]
pub struct FromQueue<Q> {
    queue: Q,
    closed: bool,
}

impl<Q: BlockingQueue> Iter for FromQueue<Q> {
    type Item = Q::Item;

    fn next(&mut self) -> Option<Q::Item> {
        if self.closed {
            return None;
        }
        let item = self.queue.recv_blocking();
        if item.is_none() {
            debug!("queue closed and drained");
            self.closed = true;
        }
        item
    }
}

/// Iterate over the elements received from `queue`
///
/// Blocks the calling thread on every pull until the producer sends a value
/// or closes the queue. A queue that is never closed makes draining
/// operations such as [`to_vec`](crate::to_vec) hang forever.
pub fn from_queue<Q: BlockingQueue>(queue: Q) -> FromQueue<Q> {
    FromQueue {
        queue,
        closed: false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::thread;

    #[test]
    fn test_std_receiver() {
        let (tx, rx) = mpsc::channel();
        let producer = thread::spawn(move || {
            for x in [3, 4, 5] {
                tx.send(x).unwrap();
            }
        });

        assert_eq!(from_queue(rx).to_vec(), vec![3, 4, 5]);
        producer.join().unwrap();
    }

    #[test]
    fn test_crossbeam_receiver_stays_closed() {
        let (tx, rx) = channel::unbounded();
        tx.send("x").unwrap();
        drop(tx);

        let mut it = from_queue(&rx);
        assert_eq!(it.next(), Some("x"));
        assert_eq!(it.next(), None);
        assert_eq!(it.next(), None);
    }

    #[test]
    fn test_buffered_elements_survive_close() {
        let (tx, rx) = channel::bounded(4);
        for x in 0..4 {
            tx.send(x).unwrap();
        }
        drop(tx);

        assert_eq!(from_queue(rx).take(3).to_vec(), vec![0, 1, 2]);
    }
}
