// ABOUTME: Stateless string transforms used alongside the event log.
// ABOUTME: Reversal by code point, Unicode-default title casing, capitalization, and word counting.

pub mod case;
pub mod reverse;
pub mod words;

pub use case::{capitalize, to_title};
pub use reverse::reverse;
pub use words::count_words;
