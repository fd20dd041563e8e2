//! This crate is a small, single-purpose collection library: a singly linked list of strings that
//! can be appended to and walked from front to back, and nothing more.
//!
//! # Purpose
//! The list exists to show how a linked structure is laid out and walked, not to compete with
//! [`std::collections`]. There is no removal, no random access and no tail pointer. Appending
//! searches for the end of the list every time, which is a property of the structure being shown
//! rather than something to optimise away.
//!
//! # Method
//! Each node owns the node after it through a [`Box`], so the chain can't contain cycles or shared
//! nodes, and the whole list is safe code. The list itself holds only an explicit empty/full state
//! with the first node.
//!
//! Traversal is an [`Iterator`] and printing is a separate consumer of it, see
//! [`collections::forward::lines`].
//!
//! # Error Handling
//! Operations that are infallible in practice (like [`append`](collections::ForwardList::append))
//! just succeed. Accessors that need a node come in two forms: a `try_*` method returning a
//! [`Result`] with a strongly typed error (such as
//! [`EmptySequence`](collections::forward::EmptySequence)), and a plain method that panics with that
//! error's message. Walking or printing an empty list is not an error, it just produces nothing.
//!
//! # Dependencies
//! This crate depends on `derive_more` for its error types, because the derive macros remove some
//! very repetitive `Display` and `Error` implementations.
//!
//! # Features
//! - `forward` (default): [`ForwardList`](collections::ForwardList) and its iterators.
//! - `collections`: the [`collections`] module itself, enabled by `forward`.

#![warn(clippy::missing_safety_doc)]
#![warn(clippy::undocumented_unsafe_blocks)]
#![warn(clippy::missing_const_for_fn)]
#![warn(clippy::missing_panics_doc)]
#![warn(clippy::unwrap_used)]
#![allow(clippy::module_inception)]

#[cfg(feature = "collections")]
pub mod collections;

pub(crate) mod util;
