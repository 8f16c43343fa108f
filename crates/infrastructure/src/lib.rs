//! Infrastructure adapters for application ports.

#![forbid(unsafe_code)]

mod id_sequence;
mod in_memory_entity_store;

pub use id_sequence::IdSequence;
pub use in_memory_entity_store::{
    InMemoryEntityStore, InMemoryFilmRepository, InMemoryUserRepository, StoredEntity,
};
