use std::sync::Arc;

use gateway::RecordSource;
use models::blog::BlogPost;
use models::gallery::GalleryItem;
use models::inquiry::Inquiry;
use models::service::Service;
use serde::Serialize;
use tracing::warn;

/// Entity counts shown in the landing page "numbers" block. `None` renders
/// as a placeholder.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize)]
pub struct SiteStats {
    pub services: Option<usize>,
    pub blog_posts: Option<usize>,
    pub gallery_items: Option<usize>,
    pub inquiries: Option<usize>,
}

pub struct StatsService {
    services: Arc<dyn RecordSource<Service>>,
    blog: Arc<dyn RecordSource<BlogPost>>,
    gallery: Arc<dyn RecordSource<GalleryItem>>,
    inquiries: Arc<dyn RecordSource<Inquiry>>,
}

impl StatsService {
    pub fn new(
        services: Arc<dyn RecordSource<Service>>,
        blog: Arc<dyn RecordSource<BlogPost>>,
        gallery: Arc<dyn RecordSource<GalleryItem>>,
        inquiries: Arc<dyn RecordSource<Inquiry>>,
    ) -> Self {
        Self { services, blog, gallery, inquiries }
    }

    /// The four lists are fetched concurrently; they have no ordering
    /// requirement among themselves. Any failure blanks the whole block
    /// rather than showing a partial row of numbers.
    pub async fn counts(&self) -> SiteStats {
        let (services, blog, gallery, inquiries) = tokio::join!(
            self.services.list_all(),
            self.blog.list_all(),
            self.gallery.list_all(),
            self.inquiries.list_all(),
        );
        match (services, blog, gallery, inquiries) {
            (Ok(s), Ok(b), Ok(g), Ok(i)) => SiteStats {
                services: Some(s.len()),
                blog_posts: Some(b.len()),
                gallery_items: Some(g.len()),
                inquiries: Some(i.len()),
            },
            _ => {
                warn!("count fetch failed; serving blank landing stats");
                SiteStats::default()
            }
        }
    }
}
