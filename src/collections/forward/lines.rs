//! Console rendering for [`ForwardList`](super::ForwardList), kept apart from traversal so that
//! any sequence of values can be rendered the same way.

use std::fmt::{self, Display, Formatter};
use std::io::{self, Write};

/// The text written before each value.
pub const NODE_PREFIX: &str = "This node : ";

/// A single rendered line, without the trailing newline: `This node : <value>`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NodeLine<'a>(pub &'a str);

impl Display for NodeLine<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{NODE_PREFIX}{}", self.0)
    }
}

/// Writes one [`NodeLine`] per value to `out`, each terminated by a newline. Nothing is written
/// for an empty sequence of values.
pub fn write_lines<'a, W, I>(out: &mut W, values: I) -> io::Result<()>
where
    W: Write + ?Sized,
    I: IntoIterator<Item = &'a str>,
{
    for value in values {
        writeln!(out, "{}", NodeLine(value))?;
    }
    Ok(())
}
