use derive_more::{Display, Error};

/// Returned when an operation needs a node but the sequence has none, e.g.
/// [`ForwardList::try_first`](crate::collections::forward::ForwardList::try_first).
#[derive(Debug, Display, Clone, Copy, PartialEq, Eq, Error)]
#[display("sequence contains no nodes!")]
pub struct EmptySequence;
