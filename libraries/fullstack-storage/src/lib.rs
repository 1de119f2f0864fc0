//! Fullstack Storage
//!
//! In-memory document store for the phonebook and bloglist services.
//!
//! Each [`MemoryCollection`] holds one kind of [`Document`] and implements
//! the [`Repository`] trait from `fullstack-core`, so services can swap it
//! for any other backend behind an `Arc<dyn Repository<_>>`.
//!
//! # Example
//!
//! ```rust
//! use fullstack_core::{Repository, types::{CreatePerson, Person}};
//! use fullstack_storage::MemoryCollection;
//!
//! # async fn example() -> fullstack_core::Result<()> {
//! let persons = MemoryCollection::<Person>::new();
//! let stored = persons
//!     .insert(CreatePerson { name: "Arto Hellas".into(), number: "040-123456".into() })
//!     .await?;
//!
//! assert_eq!(persons.find_by_id(stored.id).await?, Some(stored));
//! # Ok(())
//! # }
//! ```

mod memory;

pub use fullstack_core::{Document, Repository};
pub use memory::MemoryCollection;
