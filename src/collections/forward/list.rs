use std::fmt::{self, Debug, Display, Formatter};
use std::hash::{Hash, Hasher};
use std::io::{self, Write};
use std::mem;

use derive_more::IsVariant;

use super::{Iter, Node, write_lines};
#[doc(inline)]
pub use crate::util::error::EmptySequence;
use crate::util::result::ResultExtension;

/// A list with links in one direction only, holding owned string payloads. Nodes can only be added
/// at the back and the list can only be traversed from front to back.
///
/// # Time Complexity
/// For this analysis of time complexity, variables are defined as follows:
/// - `n`: The number of items in the ForwardList.
///
/// | Method | Complexity |
/// |-|-|
/// | `is_empty` | `O(1)` |
/// | `first` | `O(1)` |
/// | `len` | `O(n)` |
/// | `last` | `O(n)` |
/// | `append` | `O(n)` |
/// | `contains` | `O(n)` |
///
/// The list stores neither its length nor a pointer to its last node. Every append walks the whole
/// chain to find the terminal node, and the length is found by counting. This keeps the list to a
/// single pointer, at the cost of making repeated appends quadratic overall. When building a list
/// from a known set of values, [`FromIterator`] builds the chain in a single pass instead.
#[derive(Default)]
pub struct ForwardList {
    pub(crate) state: ListState,
}

#[derive(Default, IsVariant)]
pub(crate) enum ListState {
    #[default]
    Empty,
    Full(ListContents),
}

use ListState::*;

pub(crate) struct ListContents {
    pub head: Box<Node>,
}

impl ForwardList {
    /// Creates a new ForwardList with no elements.
    pub const fn new() -> ForwardList {
        ForwardList {
            state: Empty,
        }
    }

    /// Returns true if the ForwardList contains no elements.
    pub const fn is_empty(&self) -> bool {
        self.state.is_empty()
    }

    /// Returns the number of elements in the ForwardList. The length isn't stored, so this counts
    /// every node.
    pub fn len(&self) -> usize {
        self.iter().count()
    }

    /// Adds the provided value to the back of the ForwardList. If the list is empty, the new node
    /// becomes the first node, otherwise the list is walked to its terminal node and the new node
    /// is linked after it.
    pub fn append(&mut self, value: impl Into<String>) {
        let value = value.into();
        match &mut self.state {
            Empty => self.state = ListState::single(value),
            Full(contents) => contents.push_back(value),
        }
    }

    /// Returns the first element in the list.
    ///
    /// # Panics
    /// Panics if the list is empty.
    pub fn first(&self) -> &str {
        self.try_first().throw()
    }

    /// Returns the first element in the list, returning an [`Err`] if the list is empty rather
    /// than panicking.
    pub fn try_first(&self) -> Result<&str, EmptySequence> {
        match &self.state {
            Empty => Err(EmptySequence),
            Full(ListContents { head }) => Ok(head.value()),
        }
    }

    /// Returns the last element in the list.
    ///
    /// # Panics
    /// Panics if the list is empty.
    pub fn last(&self) -> &str {
        self.try_last().throw()
    }

    /// Returns the last element in the list, returning an [`Err`] if the list is empty rather than
    /// panicking. Like [`append`](ForwardList::append), this walks the entire list.
    pub fn try_last(&self) -> Result<&str, EmptySequence> {
        match &self.state {
            Empty => Err(EmptySequence),
            Full(ListContents { head }) => Ok(head.terminal().value()),
        }
    }

    pub fn contains(&self, item: &str) -> bool {
        self.iter().any(|value| value == item)
    }

    pub fn iter(&self) -> Iter<'_> {
        self.into_iter()
    }

    /// Writes every element to `out`, one `This node : <value>` line per node, in order. An empty
    /// list writes nothing.
    pub fn write_to<W: Write>(&self, out: &mut W) -> io::Result<()> {
        write_lines(out, self.iter())
    }

    /// Prints the list to stdout, returning an [`Err`] if writing fails rather than panicking.
    pub fn try_print(&self) -> io::Result<()> {
        let mut stdout = io::stdout().lock();
        self.write_to(&mut stdout)?;
        stdout.flush()
    }

    /// Prints the list to stdout, one line per node. See [`ForwardList::write_to`].
    ///
    /// # Panics
    /// Panics if stdout can't be written to.
    pub fn print(&self) {
        self.try_print().throw()
    }

    /// Takes the nodes out of this list, leaving it empty. Used for consuming iteration, because
    /// fields can't be moved out of a type that implements [`Drop`].
    pub(crate) fn take_state(&mut self) -> ListState {
        mem::take(&mut self.state)
    }
}

impl ListContents {
    pub fn push_back(&mut self, value: String) {
        let terminal = self.head.terminal_mut();
        debug_assert!(terminal.is_terminal());
        terminal.next = Some(Node::boxed(value));
    }

    pub fn wrap_one(value: String) -> ListContents {
        ListContents {
            head: Node::boxed(value),
        }
    }
}

impl ListState {
    pub fn single(value: String) -> ListState {
        Full(ListContents::wrap_one(value))
    }
}

impl<S: Into<String>> FromIterator<S> for ForwardList {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        let mut iter = iter.into_iter();
        let Some(first) = iter.next() else {
            return ForwardList::new();
        };

        let mut head = Node::boxed(first.into());
        // Keep hold of the newest node so the chain is built in one pass, rather than searching
        // for the terminal node for every item.
        let mut terminal: &mut Node = &mut head;
        for item in iter {
            terminal = &mut **terminal.next.insert(Node::boxed(item.into()));
        }

        ForwardList {
            state: Full(ListContents { head }),
        }
    }
}

impl<S: Into<String>> Extend<S> for ForwardList {
    fn extend<I: IntoIterator<Item = S>>(&mut self, iter: I) {
        for item in iter {
            self.append(item);
        }
    }
}

impl Clone for ForwardList {
    fn clone(&self) -> Self {
        self.iter().collect()
    }
}

impl PartialEq for ForwardList {
    fn eq(&self, other: &Self) -> bool {
        self.iter().eq(other.iter())
    }
}

impl Eq for ForwardList {}

impl Hash for ForwardList {
    fn hash<H: Hasher>(&self, state: &mut H) {
        for value in self.iter() {
            value.hash(state);
        }

        // Terminate variable length hashing sequence.
        0xFF_u8.hash(state);
    }
}

impl Drop for ForwardList {
    fn drop(&mut self) {
        // The default drop glue would recurse once per node, so unlink the chain one node at a
        // time instead.
        if let Full(ListContents { head }) = &mut self.state {
            let mut curr = head.next.take();
            while let Some(mut node) = curr {
                curr = node.next.take();
            }
        }
    }
}

impl Debug for ForwardList {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "ForwardList")?;
        f.debug_list().entries(self.iter()).finish()
    }
}

impl Display for ForwardList {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "(")?;
        for (index, value) in self.iter().enumerate() {
            if index > 0 {
                write!(f, ") -> (")?;
            }
            write!(f, "{value}")?;
        }
        write!(f, ")")
    }
}
