use std::collections::HashMap;
use std::sync::{Arc, Mutex, RwLock};

use bytes::Bytes;

use crate::errors::AppError;
use crate::generator::ContentGenerator;
use crate::models::{Presentation, SlideOperation};
use crate::storage::{Storage, StorageError};
use crate::validate::{plausible_id, validate_slide_count, validate_topic};

/// Authoritative registry of live presentations.
///
/// Each presentation sits behind its own `Mutex`, so edits to different
/// presentations never contend. The registry map itself is under a
/// `RwLock` that is only held for lookups and inserts. Neither lock is
/// ever held across an `.await`: generation, hydration and durable writes
/// all happen outside, and mutations persist from a cloned snapshot.
pub struct PresentationStore {
    registry: RwLock<HashMap<String, Arc<Mutex<Presentation>>>>,
    storage: Arc<Storage>,
}

fn state_key(id: &str) -> String {
    format!("{id}/state.json")
}

impl PresentationStore {
    pub fn new(storage: Arc<Storage>) -> Self {
        Self {
            registry: RwLock::new(HashMap::new()),
            storage,
        }
    }

    pub fn storage(&self) -> &Arc<Storage> {
        &self.storage
    }

    /// Validate inputs, generate the deck, register and persist it.
    /// Generation failures abort before anything is registered.
    pub async fn create(
        &self,
        topic: &str,
        slide_count: usize,
        generator: &dyn ContentGenerator,
    ) -> Result<Presentation, AppError> {
        let topic = validate_topic(topic)?;
        let slide_count = validate_slide_count(slide_count)?;

        let slides = generator.generate(&topic, slide_count).await?;
        let presentation = Presentation::new(topic, slides);

        self.write_registry().insert(
            presentation.id.clone(),
            Arc::new(Mutex::new(presentation.clone())),
        );
        self.persist(&presentation).await;
        Ok(presentation)
    }

    /// Snapshot a presentation for reading, hydrating from storage when
    /// this process has not seen the id yet.
    pub async fn get(&self, id: &str) -> Result<Presentation, AppError> {
        let cell = self.cell(id).await?;
        let guard = cell.lock().unwrap_or_else(|e| e.into_inner());
        Ok(guard.clone())
    }

    /// Apply one slide operation. The bounds checks run before any
    /// mutation, so a failed operation leaves the presentation (and its
    /// `updated_at`) untouched. Returns the updated snapshot.
    pub async fn mutate(
        &self,
        id: &str,
        operation: SlideOperation,
    ) -> Result<Presentation, AppError> {
        let cell = self.cell(id).await?;
        let snapshot = {
            let mut guard = cell.lock().unwrap_or_else(|e| e.into_inner());
            operation.apply(&mut guard.slides)?;
            guard.touch();
            guard.clone()
        };
        self.persist(&snapshot).await;
        Ok(snapshot)
    }

    /// Drop a presentation from the registry and remove its artifacts.
    pub async fn delete(&self, id: &str) -> Result<(), AppError> {
        if !plausible_id(id) {
            return Err(AppError::NotFound("presentation"));
        }
        let was_registered = self.write_registry().remove(id).is_some();
        if !was_registered {
            let stored = self.storage.exists(&state_key(id)).await?;
            if !stored {
                return Err(AppError::NotFound("presentation"));
            }
        }
        self.storage.delete_prefix(id).await?;
        Ok(())
    }

    /// Get-or-hydrate the lock cell for an id.
    async fn cell(&self, id: &str) -> Result<Arc<Mutex<Presentation>>, AppError> {
        if !plausible_id(id) {
            return Err(AppError::NotFound("presentation"));
        }
        if let Some(cell) = self.read_registry().get(id).cloned() {
            return Ok(cell);
        }

        let data = self.storage.get(&state_key(id)).await.map_err(|e| match e {
            StorageError::NotFound => AppError::NotFound("presentation"),
            other => AppError::from(other),
        })?;
        let loaded: Presentation = serde_json::from_slice(&data)?;

        // Another worker may have hydrated the same id in the meantime;
        // whoever got the write lock first wins.
        let mut registry = self.write_registry();
        let cell = registry
            .entry(id.to_string())
            .or_insert_with(|| Arc::new(Mutex::new(loaded)))
            .clone();
        Ok(cell)
    }

    /// Durable write of a snapshot. Best effort: a failed write is logged
    /// and the in-memory state stands.
    async fn persist(&self, presentation: &Presentation) {
        let key = state_key(&presentation.id);
        match serde_json::to_vec_pretty(presentation) {
            Ok(bytes) => {
                if let Err(e) = self.storage.put(&key, Bytes::from(bytes)).await {
                    log::error!("durable write failed for {key}: {e}");
                }
            }
            Err(e) => log::error!("state serialization failed for {key}: {e}"),
        }
    }

    fn read_registry(
        &self,
    ) -> std::sync::RwLockReadGuard<'_, HashMap<String, Arc<Mutex<Presentation>>>> {
        self.registry.read().unwrap_or_else(|e| e.into_inner())
    }

    fn write_registry(
        &self,
    ) -> std::sync::RwLockWriteGuard<'_, HashMap<String, Arc<Mutex<Presentation>>>> {
        self.registry.write().unwrap_or_else(|e| e.into_inner())
    }
}
