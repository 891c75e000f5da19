use crate::ResolvedDocument;
use std::collections::HashMap;
use std::sync::Arc;
use std::sync::Mutex;
use std::sync::MutexGuard;
use std::sync::PoisonError;

type Slot = Arc<Mutex<Option<Arc<ResolvedDocument>>>>;

/// Cache of resolved documents, keyed by the name they were resolved under.
///
/// Every name gets its own slot with its own lock, so concurrent first
/// lookups of one name load it exactly once while lookups of other names
/// proceed independently. A slot only ever holds a document after a
/// successful load; failed loads leave it empty.
#[derive(Debug, Default)]
pub struct DocumentRegistry {
    slots: Mutex<HashMap<String, Slot>>,
}

impl DocumentRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    pub fn get(&self, name: &str) -> Option<Arc<ResolvedDocument>> {
        let slot = lock(&self.slots).get(name).cloned()?;
        let document = lock(&slot).clone();
        document
    }

    /// Returns the cached document for `name`, or runs `load` to produce it.
    ///
    /// `load` runs while the slot for `name` is locked, so it runs at most
    /// once per name unless it fails. An error is returned to the caller and
    /// nothing is cached.
    pub fn get_or_try_insert_with<E>(
        &self,
        name: &str,
        load: impl FnOnce() -> Result<Arc<ResolvedDocument>, E>,
    ) -> Result<Arc<ResolvedDocument>, E> {
        let slot = lock(&self.slots)
            .entry(name.to_string())
            .or_default()
            .clone();

        let mut loaded = lock(&slot);
        if let Some(document) = loaded.as_ref() {
            return Ok(Arc::clone(document));
        }

        let document = load()?;
        *loaded = Some(Arc::clone(&document));
        Ok(document)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn len(&self) -> usize {
        self.names().len()
    }

    /// Names of all cached documents, sorted.
    pub fn names(&self) -> Vec<String> {
        let slots: Vec<(String, Slot)> =
            lock(&self.slots)
                .iter()
                .map(|(name, slot)| (name.to_owned(), Arc::clone(slot)))
                .collect();

        let mut names: Vec<String> =
            slots.into_iter()
                .filter(|(_, slot)| lock(slot).is_some())
                .map(|(name, _)| name)
                .collect();
        names.sort();
        names
    }

    /// Forgets every cached document.
    pub fn reset(&self) {
        lock(&self.slots).clear();
    }
}

fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(PoisonError::into_inner)
}
