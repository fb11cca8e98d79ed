use utoipa::OpenApi;
use utoipa::ToSchema;

#[derive(ToSchema)]
pub struct ContactFormDoc {
    pub user_name: String,
    pub user_email: String,
    pub message: String,
}

#[derive(ToSchema)]
pub struct SubscribeFormDoc {
    pub user_name: Option<String>,
    pub user_email: String,
}

#[derive(ToSchema)]
pub struct ServiceInputDoc {
    pub name: String,
    pub description: String,
    pub icon: Option<String>,
    pub features: Vec<String>,
}

#[derive(ToSchema)]
pub struct BlogPostInputDoc {
    pub title: String,
    pub content: String,
    pub summary: Option<String>,
    pub image: Option<String>,
    pub author: Option<String>,
    pub category: Option<String>,
}

#[derive(ToSchema)]
pub struct FaqInputDoc {
    pub question: String,
    pub answer: String,
}

#[derive(ToSchema)]
pub struct InquiryStatusDoc {
    pub status: String,
}

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::routes::health,
        crate::routes::pages::landing,
        crate::routes::pages::services,
        crate::routes::pages::blog,
        crate::routes::pages::faqs,
        crate::routes::pages::gallery,
        crate::routes::forms::contact,
        crate::routes::forms::subscribe,
        crate::routes::admin::list_inquiries,
        crate::routes::admin::update_inquiry_status,
    ),
    components(
        schemas(
            ContactFormDoc,
            SubscribeFormDoc,
            ServiceInputDoc,
            BlogPostInputDoc,
            FaqInputDoc,
            InquiryStatusDoc,
        )
    ),
    tags(
        (name = "pages", description = "Public page data"),
        (name = "forms", description = "Contact and newsletter forms"),
        (name = "admin", description = "Content managers")
    )
)]
pub struct ApiDoc;
// the generic per-entity CRUD handlers are not documented yet; can be added
// with #[utoipa::path] on concrete wrappers
