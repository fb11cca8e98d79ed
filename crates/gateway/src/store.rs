use async_trait::async_trait;
use uuid::Uuid;

use crate::errors::GatewayError;

/// Read side of a table: the single list call a page issues per request.
#[async_trait]
pub trait RecordSource<R>: Send + Sync {
    async fn list_all(&self) -> Result<Vec<R>, GatewayError>;
}

/// Full CRUD over one table, as exposed to the admin managers and forms.
/// `delete` reports whether the row existed.
#[async_trait]
pub trait RecordStore<R, I>: RecordSource<R> {
    async fn create(&self, input: I) -> Result<R, GatewayError>;
    async fn update(&self, id: Uuid, input: I) -> Result<R, GatewayError>;
    async fn delete(&self, id: Uuid) -> Result<bool, GatewayError>;
}
