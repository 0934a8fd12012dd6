//! Order service — use-cases for the orders collection.
//!
//! The id-matching rules intentionally differ per operation: lookup and
//! update coerce the path segment loosely, while deletion requires an exact
//! integer. See [`tuckshop_domain::id`].

use serde_json::{Map, Value};

use tuckshop_domain::error::{NotFoundError, TuckshopError};
use tuckshop_domain::id;
use tuckshop_domain::order::Order;
use tuckshop_domain::time;

use crate::ports::DocumentStore;

/// Application service for order CRUD operations.
pub struct OrderService<S> {
    store: S,
}

impl<S: DocumentStore> OrderService<S> {
    /// Create a new service backed by the given store.
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Look up an order by loosely coercing `raw_id`.
    ///
    /// # Errors
    ///
    /// Returns [`TuckshopError::NotFound`] naming `raw_id` when no order
    /// matches, or a storage error from the store.
    pub async fn get(&self, raw_id: &str) -> Result<Order, TuckshopError> {
        let document = self.store.load().await?;
        let target = id::coerced(raw_id);
        document
            .orders
            .into_iter()
            .find(|order| target == Some(order.id))
            .ok_or_else(|| NotFoundError::with_id("Order", raw_id).into())
    }

    /// Append a new order built from the request body.
    ///
    /// The id is the current time in milliseconds and `status` is forced to
    /// `"pending"`; caller-supplied values for either are discarded.
    ///
    /// # Errors
    ///
    /// Returns a storage error propagated from the store.
    pub async fn create(&self, fields: Map<String, Value>) -> Result<Order, TuckshopError> {
        let mut document = self.store.load().await?;
        let order = Order::new(time::now_millis(), fields);
        document.orders.push(order.clone());
        self.store.save(&document).await?;
        Ok(order)
    }

    /// Shallow-merge a partial update onto the order matching `raw_id`
    /// (loose coercion).
    ///
    /// When no order matches, nothing is written.
    ///
    /// # Errors
    ///
    /// Returns [`TuckshopError::NotFound`] when no order matches, or a
    /// storage error from the store.
    pub async fn update(&self, raw_id: &str, patch: Map<String, Value>) -> Result<(), TuckshopError> {
        let mut document = self.store.load().await?;
        let target = id::coerced(raw_id);
        let Some(order) = document
            .orders
            .iter_mut()
            .find(|order| target == Some(order.id))
        else {
            return Err(NotFoundError::bare("Order").into());
        };

        order.merge(patch);
        self.store.save(&document).await?;
        Ok(())
    }

    /// Remove every order whose id equals `raw_id` parsed as an exact
    /// integer.
    ///
    /// Removing nothing is still a success, and the document is rewritten
    /// either way.
    ///
    /// # Errors
    ///
    /// Returns a storage error propagated from the store.
    pub async fn remove(&self, raw_id: &str) -> Result<(), TuckshopError> {
        let mut document = self.store.load().await?;
        if let Some(target) = id::exact(raw_id) {
            document.orders.retain(|order| order.id != target);
        }
        self.store.save(&document).await?;
        Ok(())
    }
}
