use std::fmt::{self, Debug, Formatter};
use std::iter::FusedIterator;

use super::{ForwardList, Link, ListContents, ListState, Node};

impl<'a> IntoIterator for &'a ForwardList {
    type Item = &'a str;

    type IntoIter = Iter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        Iter {
            next: match &self.state {
                ListState::Empty => None,
                ListState::Full(ListContents { head }) => Some(&**head),
            },
        }
    }
}

/// A borrowed iterator over the values of a [`ForwardList`], from first to last. Every call to
/// [`ForwardList::iter`] starts again from the first node.
#[derive(Clone)]
pub struct Iter<'a> {
    pub(crate) next: Option<&'a Node>,
}

impl<'a> Iterator for Iter<'a> {
    type Item = &'a str;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.next?;
        self.next = node.next.as_deref();
        Some(node.value())
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        // The remaining length isn't known without walking the rest of the chain.
        match self.next {
            None => (0, Some(0)),
            Some(_) => (1, None),
        }
    }
}

impl FusedIterator for Iter<'_> {}

impl Debug for Iter<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "Iter")?;
        f.debug_list().entries(self.clone()).finish()
    }
}

impl IntoIterator for ForwardList {
    type Item = String;

    type IntoIter = IntoIter;

    fn into_iter(mut self) -> Self::IntoIter {
        IntoIter {
            next: match self.take_state() {
                ListState::Empty => None,
                ListState::Full(ListContents { head }) => Some(head),
            },
        }
    }
}

/// An owning iterator over the values of a [`ForwardList`], from first to last.
pub struct IntoIter {
    pub(crate) next: Link,
}

impl Iterator for IntoIter {
    type Item = String;

    fn next(&mut self) -> Option<Self::Item> {
        let mut node = self.next.take()?;
        self.next = node.next.take();
        Some(node.into_value())
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        match self.next {
            None => (0, Some(0)),
            Some(_) => (1, None),
        }
    }
}

impl FusedIterator for IntoIter {}

impl Debug for IntoIter {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "IntoIter")?;
        f.debug_list()
            .entries(Iter { next: self.next.as_deref() })
            .finish()
    }
}

impl Drop for IntoIter {
    fn drop(&mut self) {
        // Unlink the remaining nodes one at a time, as ForwardList does.
        let mut curr = self.next.take();
        while let Some(mut node) = curr {
            curr = node.next.take();
        }
    }
}
