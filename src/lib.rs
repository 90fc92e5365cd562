// created = "2026-10-18"
// modified = "2026-10-18"
// driver = "Isaac Clayton"

//! Seqlist - a growable, array-backed sequential list.
//!
//! # Quick Start
//!
//! ```
//! use seqlist::{ListError, SeqList};
//!
//! let mut list: SeqList<i32> = SeqList::new();
//! list.insert(0, 1).unwrap();
//! list.insert(1, 2).unwrap();
//! list.insert(1, 5).unwrap();
//! assert_eq!(list.to_string(), "[1, 5, 2]");
//!
//! assert_eq!(list.locate(&2), Ok(2));
//! assert_eq!(list.delete(0), Ok(1));
//! assert_eq!(list.get(3), Err(ListError::OutOfRange { index: 3, len: 2 }));
//! ```
//!
//! Operations log through `tracing`: accepted mutations at `trace`, rejected
//! calls at `debug`.

pub mod buffer;
pub mod config;
pub mod error;
pub mod list;

pub use buffer::Buffer;
pub use config::{BoundsCheck, ListConfig};
pub use error::ListError;
pub use list::SeqList;
