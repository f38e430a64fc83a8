#![no_std]

//! `RopeVec`: a random-access vector stored in fixed-size chunks.
//!
//! A `Vec` keeps its elements in one buffer and copies all of them whenever the
//! buffer grows. `RopeVec` keeps a table of chunks of `CHUNK_SIZE` elements
//! instead: growing allocates one more chunk and existing elements stay where
//! they are. Chunks can be added at the front as well as at the back, so both
//! `push_back` and `insert(0, _)` are O(1).
//!
//! Layout: [released positions][front chunk][full chunks...][back chunk]
//! Logical index `i` lives at slot `start_index + i`, counted from the start of
//! the front chunk.
//!
//! # Performance Characteristics
//!
//! ## Time Complexity
//! - `push_back()`, `insert(0, _)`, `erase_front()`, `pop_back()`: O(1)
//! - `get()`, `at()`, indexing: O(1) - one division and one table lookup
//! - `insert(pos, _)`: O(min(pos, len - pos)) - the shorter side is moved
//! - `erase(pos)`: O(len - pos)
//! - `clear()`, `swap()`: O(1) apart from dropping elements
//!
//! ## Space
//! - Unused slots only ever sit before the first or after the last element
//! - `memory_used()` and `fragmentation()` report the current overhead
//! - Shrinking with `resize()`/`pop_back()` keeps chunks; `shrink_to_fit()`
//!   releases them
//!
//! ## `no_std` Compatibility
//!
//! This crate only needs `alloc`. Enable the optional `std` feature to get
//! `std::error::Error` through `thiserror/std`:
//! ```toml
//! [dependencies]
//! ropevec = { version = "0.1", features = ["std"] }
//! ```
//!
//! # Basic Usage
//!
//! ```
//! # use ropevec::RopeVec;
//! let mut rv: RopeVec<i32> = RopeVec::new();
//! assert!(rv.is_empty());
//!
//! rv.push_back(10).unwrap();
//! rv.push_back(20).unwrap();
//! rv.push_back(30).unwrap();
//! assert_eq!(rv.len(), 3);
//! assert_eq!(rv.front(), Ok(&10));
//! assert_eq!(rv.back(), Ok(&30));
//! assert_eq!(rv.at(1), Ok(&20));
//!
//! rv.insert(1, 15).unwrap(); // 10, 15, 20, 30
//! assert_eq!(rv[1], 15);
//!
//! rv.erase(2).unwrap(); // 10, 15, 30
//! assert_eq!(rv, [10, 15, 30]);
//!
//! rv.resize(5).unwrap(); // new slots are default-initialized
//! assert_eq!(rv, [10, 15, 30, 0, 0]);
//!
//! rv.resize(2).unwrap();
//! assert_eq!(rv, [10, 15]);
//!
//! rv.clear();
//! assert!(rv.is_empty());
//! ```
//!
//! # Growing at the Front
//!
//! ```
//! # use ropevec::RopeVec;
//! let mut rv: RopeVec<u32, 4> = (1..=6).collect();
//! assert_eq!(rv.chunk_count(), 2);
//!
//! rv.insert(0, 0).unwrap(); // prepends a chunk, nothing is moved
//! assert_eq!(rv.chunk_count(), 3);
//!
//! for _ in 0..4 {
//!     rv.erase_front().unwrap(); // the emptied front chunk is released
//! }
//! assert_eq!(rv, [4, 5, 6]);
//! assert!(rv.fragmentation() > 0.0);
//!
//! rv.shrink_to_fit();
//! assert_eq!(rv.chunk_count(), 2);
//! ```
//!
//! # Error Handling
//!
//! Checked accessors return `Result` or `Option`; indexing with `[]` panics on a
//! bad index like `Vec` does. `get_unchecked()` is the explicit fast path.
//!
//! ```
//! # use ropevec::{RopeVec, RopeVecError};
//! let mut rv: RopeVec<u8> = RopeVec::new();
//! assert_eq!(rv.front(), Err(RopeVecError::EmptyVector));
//! assert_eq!(
//!     rv.insert(1, 7),
//!     Err(RopeVecError::IndexOutOfBounds { index: 1, length: 0 })
//! );
//! assert!(rv.erase_front().is_err());
//! assert_eq!(rv.get(0), None);
//! ```
//!
//! # Iterator Support
//!
//! ```
//! # use ropevec::RopeVec;
//! let mut rv: RopeVec<u32, 2> = (1..=5).collect();
//!
//! for value in &mut rv {
//!     *value *= 2;
//! }
//! let forward: Vec<_> = rv.iter().copied().collect();
//! let backward: Vec<_> = rv.iter().rev().copied().collect();
//! assert_eq!(forward, [2, 4, 6, 8, 10]);
//! assert_eq!(backward, [10, 8, 6, 4, 2]);
//!
//! let begin = rv.cursor(0);
//! let end = rv.cursor(rv.len());
//! assert_eq!(end - begin, 5);
//! assert_eq!((begin + 2).get(), Some(&6));
//! assert!(begin < end);
//! ```

extern crate alloc;

mod chunk;
mod cursor;
mod error;
mod iter;
mod metrics;
mod mutate;
mod rope;

// Re-export public types and traits
pub use cursor::{Cursor, CursorMut};
pub use error::RopeVecError;
pub use iter::{IntoIter, Iter, IterMut};
pub use rope::{RopeVec, DEFAULT_CHUNK_SIZE};
