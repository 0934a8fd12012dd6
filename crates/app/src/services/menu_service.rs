//! Menu service — use-cases for the menu collection.

use serde_json::{Map, Value};

use tuckshop_domain::error::TuckshopError;
use tuckshop_domain::id;
use tuckshop_domain::menu_item::MenuItem;
use tuckshop_domain::time;

use crate::ports::DocumentStore;

/// Application service for menu CRUD operations.
pub struct MenuService<S> {
    store: S,
}

impl<S: DocumentStore> MenuService<S> {
    /// Create a new service backed by the given store.
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// List every menu item.
    ///
    /// # Errors
    ///
    /// Returns a storage error propagated from the store.
    pub async fn list(&self) -> Result<Vec<MenuItem>, TuckshopError> {
        let document = self.store.load().await?;
        Ok(document.menu)
    }

    /// Append a new menu item built from the request body.
    ///
    /// The id is the current time in milliseconds; a caller-supplied `id`
    /// is discarded.
    ///
    /// # Errors
    ///
    /// Returns a storage error propagated from the store.
    pub async fn create(&self, fields: Map<String, Value>) -> Result<MenuItem, TuckshopError> {
        let mut document = self.store.load().await?;
        let item = MenuItem::new(time::now_millis(), fields);
        document.menu.push(item.clone());
        self.store.save(&document).await?;
        Ok(item)
    }

    /// Remove every menu item whose id equals the leading integer of
    /// `raw_id`.
    ///
    /// Removing nothing is still a success, and the document is rewritten
    /// either way.
    ///
    /// # Errors
    ///
    /// Returns a storage error propagated from the store.
    pub async fn remove(&self, raw_id: &str) -> Result<(), TuckshopError> {
        let mut document = self.store.load().await?;
        if let Some(target) = id::leading_int(raw_id) {
            document.menu.retain(|item| item.id != target);
        }
        self.store.save(&document).await?;
        Ok(())
    }
}
