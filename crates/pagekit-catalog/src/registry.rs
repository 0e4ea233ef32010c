//! Archetype to body-producer registry.
//!
//! Producers are stored in a table indexed by [`Archetype::index`], so lookup
//! is a bounds-checked slot read and completeness can be checked up front.

use std::fmt;

use pagekit_core::{Archetype, ArchetypeName, Node};

use crate::bodies;
use crate::context::BodyContext;
use crate::error::{CatalogError, Result};

/// Builds the neutral body for one archetype.
pub type BodyProducer = Box<dyn Fn(&BodyContext) -> Node + Send + Sync>;

/// Registry of body producers, one slot per archetype.
pub struct BodyRegistry {
    producers: Vec<Option<BodyProducer>>,
}

impl BodyRegistry {
    /// Create a registry with every slot empty.
    pub fn new() -> Self {
        Self {
            producers: Archetype::ALL.iter().map(|_| None).collect(),
        }
    }

    /// Create a registry holding the built-in body for every archetype.
    pub fn standard() -> Self {
        let mut registry = Self::new();
        for archetype in Archetype::ALL {
            registry.register(archetype, move |ctx| bodies::produce(archetype, ctx));
        }
        registry
    }

    /// Register (or replace) the producer for an archetype.
    pub fn register<F>(&mut self, archetype: Archetype, producer: F)
    where
        F: Fn(&BodyContext) -> Node + Send + Sync + 'static,
    {
        self.producers[archetype.index()] = Some(Box::new(producer));
    }

    /// Check if an archetype has a producer.
    pub fn contains(&self, archetype: Archetype) -> bool {
        self.producers[archetype.index()].is_some()
    }

    /// Archetypes that currently have a producer.
    pub fn registered(&self) -> impl Iterator<Item = Archetype> + '_ {
        Archetype::ALL.into_iter().filter(|a| self.contains(*a))
    }

    /// Ensure every archetype has a producer.
    pub fn validate(&self) -> Result<()> {
        match Archetype::ALL.into_iter().find(|a| !self.contains(*a)) {
            Some(missing) => Err(CatalogError::MissingProducer(missing)),
            None => Ok(()),
        }
    }

    /// Produce the body for a requested archetype.
    ///
    /// Names outside the enumeration, and archetypes without a producer,
    /// yield the [`placeholder`](crate::placeholder) body.
    pub fn produce(&self, name: &ArchetypeName, ctx: &BodyContext) -> Node {
        let producer = name
            .known()
            .and_then(|archetype| self.producers[archetype.index()].as_ref());
        match producer {
            Some(producer) => producer(ctx),
            None => bodies::placeholder(name.as_str(), ctx),
        }
    }
}

impl Default for BodyRegistry {
    fn default() -> Self {
        Self::standard()
    }
}

impl fmt::Debug for BodyRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BodyRegistry")
            .field("registered", &self.registered().collect::<Vec<_>>())
            .finish()
    }
}
