use std::marker::PhantomData;

use async_trait::async_trait;
use serde::de::DeserializeOwned;
use serde::Serialize;
use uuid::Uuid;

use models::blog::{BlogPost, BlogPostInput};
use models::faq::{Faq, FaqInput};
use models::gallery::GalleryItem;
use models::inquiry::{Inquiry, InquiryInput, InquiryStatus};
use models::service::{Service, ServiceInput};

use crate::client::GatewayClient;
use crate::errors::GatewayError;
use crate::store::{RecordSource, RecordStore};

/// One table bound to its record and input types.
///
/// The same table may be bound more than once with different input types
/// (e.g. full inquiry rows for create, a status-only patch for the admin
/// list).
pub struct TableApi<R, I = R> {
    client: GatewayClient,
    table: &'static str,
    order: Option<&'static str>,
    _marker: PhantomData<fn() -> (R, I)>,
}

impl<R, I> TableApi<R, I> {
    pub fn new(client: GatewayClient, table: &'static str, order: Option<&'static str>) -> Self {
        Self { client, table, order, _marker: PhantomData }
    }

    pub fn table(&self) -> &'static str {
        self.table
    }
}

impl<R, I> Clone for TableApi<R, I> {
    fn clone(&self) -> Self {
        Self {
            client: self.client.clone(),
            table: self.table,
            order: self.order,
            _marker: PhantomData,
        }
    }
}

#[async_trait]
impl<R, I> RecordSource<R> for TableApi<R, I>
where
    R: DeserializeOwned + Send + Sync + 'static,
    I: Send + Sync + 'static,
{
    async fn list_all(&self) -> Result<Vec<R>, GatewayError> {
        self.client.list(self.table, self.order).await
    }
}

#[async_trait]
impl<R, I> RecordStore<R, I> for TableApi<R, I>
where
    R: DeserializeOwned + Send + Sync + 'static,
    I: Serialize + Send + Sync + 'static,
{
    async fn create(&self, input: I) -> Result<R, GatewayError> {
        self.client.create(self.table, &input).await
    }

    async fn update(&self, id: Uuid, input: I) -> Result<R, GatewayError> {
        self.client.update(self.table, id, &input).await
    }

    async fn delete(&self, id: Uuid) -> Result<bool, GatewayError> {
        self.client.delete(self.table, id).await
    }
}

// Table bindings mirroring the store schema. Collections with a
// `created_at` column come back newest first, matching the public pages.

pub fn services(client: &GatewayClient) -> TableApi<Service, ServiceInput> {
    TableApi::new(client.clone(), "services", None)
}

pub fn blog(client: &GatewayClient) -> TableApi<BlogPost, BlogPostInput> {
    TableApi::new(client.clone(), "blog", Some("created_at.desc"))
}

pub fn faqs(client: &GatewayClient) -> TableApi<Faq, FaqInput> {
    TableApi::new(client.clone(), "faqs", None)
}

pub fn gallery(client: &GatewayClient) -> TableApi<GalleryItem> {
    TableApi::new(client.clone(), "gallery", Some("created_at.desc"))
}

pub fn inquiries(client: &GatewayClient) -> TableApi<Inquiry, InquiryInput> {
    TableApi::new(client.clone(), "inquiries", Some("created_at.desc"))
}

pub fn inquiry_status(client: &GatewayClient) -> TableApi<Inquiry, InquiryStatus> {
    TableApi::new(client.clone(), "inquiries", Some("created_at.desc"))
}
