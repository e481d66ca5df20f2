//! Ordered linked set.
//!
//! ## Architecture
//!
//! - **Slab-based storage**: nodes live in a `Slab`, links are slab keys
//! - **Value index**: `BTreeMap` from value to slab key
//! - **Sentinel links**: `None` marks "no next" / "no previous"
//!
//! ## Components
//!
//! - [`Node`]: value plus forward and back links
//! - [`OrderedLinkedSet`]: the set, owning head/tail and the live count
//! - [`Iter`]: double-ended chain iterator
//! - [`root`]: SHA-256 state root over the chain
//!
//! ## Performance
//!
//! | Operation | Complexity |
//! |-----------|------------|
//! | Insert | O(log n) |
//! | Remove | O(log n) |
//! | Contains | O(log n) |
//! | First / last | O(1) |
//! | Iterate | O(n) |

pub mod iter;
pub mod node;
pub mod ordered_set;
pub mod root;

pub use iter::Iter;
pub use node::Node;
pub use ordered_set::OrderedLinkedSet;
pub use root::RootBytes;
