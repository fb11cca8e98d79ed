use std::sync::Arc;

use gateway::{GatewayError, RecordSource, RecordStore};
use models::Validate;
use tracing::debug;
use uuid::Uuid;

use crate::errors::ServiceError;
use crate::lifecycle::Listing;

/// List/create/update/delete over one record type.
///
/// The public pages and the admin managers share one shape per entity, so
/// this is a single parameterized module instantiated per table rather
/// than a copy per screen. Inputs are validated before anything is
/// dispatched; a rejected input never reaches the store.
pub struct ContentService<R, I> {
    store: Arc<dyn RecordStore<R, I>>,
    entity: &'static str,
}

impl<R, I> ContentService<R, I>
where
    R: Send + Sync + 'static,
    I: Validate + Send + Sync + 'static,
{
    pub fn new(entity: &'static str, store: Arc<dyn RecordStore<R, I>>) -> Self {
        Self { store, entity }
    }

    pub fn entity(&self) -> &'static str {
        self.entity
    }

    /// One fetch, classified for the page. Errors propagate so the caller
    /// can surface the retry affordance.
    pub async fn page(&self) -> Result<Listing<R>, ServiceError> {
        Ok(Listing::classify(self.store.list_all().await?))
    }

    /// Raw rows for the admin manager list.
    pub async fn records(&self) -> Result<Vec<R>, ServiceError> {
        Ok(self.store.list_all().await?)
    }

    pub async fn create(&self, input: I) -> Result<R, ServiceError> {
        input.validate()?;
        let record = self.store.create(input).await?;
        debug!(entity = self.entity, "record created");
        Ok(record)
    }

    pub async fn update(&self, id: Uuid, input: I) -> Result<R, ServiceError> {
        input.validate()?;
        match self.store.update(id, input).await {
            Ok(record) => Ok(record),
            Err(GatewayError::NotFound(_)) => Err(ServiceError::not_found(self.entity)),
            Err(e) => Err(e.into()),
        }
    }

    /// Reports whether the row existed, mirroring the store's delete.
    pub async fn delete(&self, id: Uuid) -> Result<bool, ServiceError> {
        Ok(self.store.delete(id).await?)
    }
}
