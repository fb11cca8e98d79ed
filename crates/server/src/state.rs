use std::sync::Arc;

use gateway::{tables, GatewayClient, RecordSource};
use mailer::Mailer;
use models::blog::{BlogPost, BlogPostInput};
use models::faq::{Faq, FaqInput};
use models::gallery::GalleryItem;
use models::inquiry::{Inquiry, InquiryStatus};
use models::service::{Service, ServiceInput};
use service::contact::ContactService;
use service::content::ContentService;
use service::stats::StatsService;
use service::subscribe::SubscribeService;

/// Shared handles for the whole HTTP surface. Every field is `Arc`-shared;
/// handlers hold no other state, so nothing survives a request.
#[derive(Clone)]
pub struct ServerState {
    pub services: Arc<ContentService<Service, ServiceInput>>,
    pub blog: Arc<ContentService<BlogPost, BlogPostInput>>,
    pub faqs: Arc<ContentService<Faq, FaqInput>>,
    /// Admin view of inquiries: list + status updates only; rows are
    /// created by the contact flow.
    pub inquiries: Arc<ContentService<Inquiry, InquiryStatus>>,
    /// Gallery rows are curated in the store; the site only lists them.
    pub gallery: Arc<dyn RecordSource<GalleryItem>>,
    pub contact: Arc<ContactService>,
    pub subscribe: Arc<SubscribeService>,
    pub stats: Arc<StatsService>,
    pub admin_key: Option<String>,
}

impl ServerState {
    pub fn new(
        client: GatewayClient,
        mailer: Option<Arc<dyn Mailer>>,
        admin_key: Option<String>,
    ) -> Self {
        let inquiries_table = Arc::new(tables::inquiries(&client));
        Self {
            services: Arc::new(ContentService::new("service", Arc::new(tables::services(&client)))),
            blog: Arc::new(ContentService::new("blog post", Arc::new(tables::blog(&client)))),
            faqs: Arc::new(ContentService::new("faq", Arc::new(tables::faqs(&client)))),
            inquiries: Arc::new(ContentService::new(
                "inquiry",
                Arc::new(tables::inquiry_status(&client)),
            )),
            gallery: Arc::new(tables::gallery(&client)),
            contact: Arc::new(ContactService::new(mailer.clone(), inquiries_table.clone())),
            subscribe: Arc::new(SubscribeService::new(mailer)),
            stats: Arc::new(StatsService::new(
                Arc::new(tables::services(&client)),
                Arc::new(tables::blog(&client)),
                Arc::new(tables::gallery(&client)),
                inquiries_table,
            )),
            admin_key,
        }
    }
}
