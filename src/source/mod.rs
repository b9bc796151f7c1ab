//! Source adapters
//!
//! Build an [`Iter`](crate::Iter) from:
//! - a random-access sequence ([`from_sequence`])
//! - a blocking FIFO queue ([`from_queue`])
//! - a pull closure ([`from_function`])
//! - any std iterator ([`from_std`])

mod function;
mod queue;
mod sequence;

pub use function::{empty, from_function, from_std, Empty, FromFunction, FromStd};
pub use queue::{from_queue, BlockingQueue, FromQueue};
pub use sequence::{from_sequence, FromSequence, Sequence};
