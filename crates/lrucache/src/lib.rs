//! # lrucache
//!
//! Fixed-capacity least-recently-used cache.
//!
//! ## Architecture
//! - **HashMap**: AHash index from key to arena slot (O(1))
//! - **LRU List**: Doubly-linked list threaded through a slot arena (O(1))
//! - **Free List**: Slots released by eviction are reused by later inserts
//!
//! ## Example
//! ```
//! use lrucache::LruCache;
//!
//! let mut cache = LruCache::new(2)?;
//! cache.put("a", 1);
//! cache.put("b", 2);
//! cache.get("a");
//! cache.put("c", 3); // evicts "b"
//!
//! assert!(cache.contains("a"));
//! assert!(!cache.contains("b"));
//! # Ok::<(), lrucache::Error>(())
//! ```

#![warn(missing_docs)]

mod error;
mod lru;

pub use error::{Error, Result};
pub use lru::{Iter, LruCache};
