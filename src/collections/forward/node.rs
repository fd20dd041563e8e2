pub(crate) type Link = Option<Box<Node>>;

// Each node exclusively owns its successor, so the chain is acyclic by construction and there is
// never more than one path to a node.
pub(crate) struct Node {
    value: String,
    pub next: Link,
}

impl Node {
    /// Creates a terminal node holding `value`.
    pub const fn new(value: String) -> Node {
        Node {
            value,
            next: None,
        }
    }

    pub fn boxed(value: String) -> Box<Node> {
        Box::new(Node::new(value))
    }

    pub fn value(&self) -> &str {
        self.value.as_str()
    }

    pub fn into_value(self) -> String {
        self.value
    }

    pub const fn is_terminal(&self) -> bool {
        self.next.is_none()
    }

    /// Follows next links from this node until reaching the terminal node.
    pub fn terminal(&self) -> &Node {
        let mut node = self;
        while let Some(ref next) = node.next {
            node = next;
        }
        node
    }

    /// Mutable version of [`Node::terminal`], used to attach a new node to the end of a chain.
    pub fn terminal_mut(&mut self) -> &mut Node {
        let mut node = self;
        while let Some(ref mut next) = node.next {
            node = &mut **next;
        }
        node
    }
}
