//! A singly linked list, [`ForwardList`], and its iterators. Values can only be appended at the
//! back and the list can only be traversed from front to back.
//!
//! Rendering a list to the console lives in [`lines`], as a consumer of [`Iter`].

mod iter;
pub mod lines;
mod list;
mod node;

pub use iter::*;
pub use lines::{NodeLine, write_lines};
pub use list::*;
pub(crate) use node::*;
