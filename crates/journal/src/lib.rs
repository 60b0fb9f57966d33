//! `ordermill-journal` — the append-only action journal.
//!
//! Every tracked action in the workflow ends up as one timestamped line in a
//! plain-text file. The journal is write-only from this system's point of
//! view; nothing ever reads it back.

pub mod journal;
pub mod trace;

pub use journal::Journal;
pub use trace::traced;
