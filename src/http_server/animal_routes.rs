//! Animal API Routes
//!
//! `GET /animals`, `GET /animals/:id` and `POST /animals`, mounted under `/api`.

use std::sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard};

use axum::{
    extract::{rejection::JsonRejection, Path, Query, State},
    routing::get,
    Json, Router,
};
use serde_json::Value;

use crate::animals::{AnimalError, AnimalQuery, AnimalRecord, AnimalResult, AnimalStore};

// ==================
// Shared State
// ==================

/// Store shared across handlers.
///
/// Writers hold the write lock across id assignment, append and file write.
pub struct AnimalState {
    store: RwLock<AnimalStore>,
}

impl AnimalState {
    pub fn new(store: AnimalStore) -> Self {
        Self {
            store: RwLock::new(store),
        }
    }

    pub fn read(&self) -> AnimalResult<RwLockReadGuard<'_, AnimalStore>> {
        self.store.read().map_err(|_| AnimalError::LockPoisoned)
    }

    pub fn write(&self) -> AnimalResult<RwLockWriteGuard<'_, AnimalStore>> {
        self.store.write().map_err(|_| AnimalError::LockPoisoned)
    }
}

// ==================
// Router
// ==================

pub fn animal_routes(state: Arc<AnimalState>) -> Router {
    Router::new()
        .route("/animals", get(list_animals).post(create_animal))
        .route("/animals/:id", get(get_animal))
        .with_state(state)
}

// ==================
// Handlers
// ==================

/// List animals, filtered by `name`, `species`, `diet` and `personalityTraits`
async fn list_animals(
    State(state): State<Arc<AnimalState>>,
    Query(pairs): Query<Vec<(String, String)>>,
) -> AnimalResult<Json<Vec<AnimalRecord>>> {
    let query = AnimalQuery::from_pairs(pairs);
    let store = state.read()?;
    Ok(Json(store.filter(&query)))
}

async fn get_animal(
    State(state): State<Arc<AnimalState>>,
    Path(id): Path<String>,
) -> AnimalResult<Json<AnimalRecord>> {
    let store = state.read()?;
    store
        .find_by_id(&id)
        .cloned()
        .map(Json)
        .ok_or(AnimalError::NotFound(id))
}

/// Create an animal. The id is assigned by the store.
async fn create_animal(
    State(state): State<Arc<AnimalState>>,
    body: Result<Json<Value>, JsonRejection>,
) -> AnimalResult<Json<AnimalRecord>> {
    let Json(candidate) = body.map_err(|e| AnimalError::MalformedBody(e.body_text()))?;
    let mut store = state.write()?;
    let created = store.create(&candidate)?;
    Ok(Json(created))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::animals::MemoryBackend;

    #[test]
    fn test_routes_build() {
        let store = AnimalStore::open(MemoryBackend::new()).unwrap();
        let _router = animal_routes(Arc::new(AnimalState::new(store)));
    }

    #[test]
    fn test_state_read_write() {
        let store = AnimalStore::open(MemoryBackend::new()).unwrap();
        let state = AnimalState::new(store);

        assert!(state.read().unwrap().is_empty());
        let created = state
            .write()
            .unwrap()
            .create(&serde_json::json!({
                "name": "Ghost",
                "species": "cat",
                "diet": "carnivore",
                "personalityTraits": []
            }))
            .unwrap();
        assert_eq!(created.id, "0");
        assert_eq!(state.read().unwrap().len(), 1);
    }
}
