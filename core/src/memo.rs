//! Append-only memo slots shared by the catalog and the collector caches.
//!
//! Builders run without holding any lock. When two threads race to fill the
//! same slot both build, the first to publish wins and the other's adapter is
//! dropped; every caller gets the published one.

use core::convert::Infallible;

use once_cell::sync::OnceCell;

use crate::adapter::Adapter;

pub(crate) type Slot = OnceCell<Adapter>;

pub(crate) fn memoize<E>(
    slot: &Slot,
    build: impl FnOnce() -> Result<Adapter, E>,
) -> Result<Adapter, E> {
    if let Some(adapter) = slot.get() {
        tracing::trace!(adapter = %adapter.name(), "memo hit");
        return Ok(adapter.clone());
    }
    let built = build()?;
    match slot.try_insert(built) {
        Ok(published) => {
            tracing::debug!(adapter = %published, "published");
            Ok(published.clone())
        }
        Err((winner, _)) => Ok(winner.clone()),
    }
}

pub(crate) fn memoized(slot: &Slot, build: impl FnOnce() -> Adapter) -> Adapter {
    match memoize(slot, || Ok::<_, Infallible>(build())) {
        Ok(adapter) => adapter,
        Err(never) => match never {},
    }
}

/// A dense table of slots indexed by arity.
pub(crate) struct ArityTable {
    slots: Box<[Slot]>,
}

impl ArityTable {
    pub(crate) fn new(len: usize) -> Self {
        ArityTable {
            slots: (0..len).map(|_| Slot::new()).collect(),
        }
    }

    pub(crate) fn contains(&self, arity: usize) -> bool {
        self.slots.get(arity).is_some_and(|slot| slot.get().is_some())
    }

    /// Arities past the end of the table are built but not retained.
    pub(crate) fn get_or_build<E>(
        &self,
        arity: usize,
        build: impl FnOnce() -> Result<Adapter, E>,
    ) -> Result<Adapter, E> {
        match self.slots.get(arity) {
            Some(slot) => memoize(slot, build),
            None => build(),
        }
    }

    pub(crate) fn get_or_init(&self, arity: usize, build: impl FnOnce() -> Adapter) -> Adapter {
        match self.slots.get(arity) {
            Some(slot) => memoized(slot, build),
            None => build(),
        }
    }

    /// Number of populated slots.
    pub(crate) fn populated(&self) -> usize {
        self.slots.iter().filter(|slot| slot.get().is_some()).count()
    }
}
