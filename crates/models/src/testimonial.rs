use serde::Serialize;

/// Curated client quote shown on the landing page. The list is static site
/// copy, not store data, so it lives in code.
#[derive(Clone, Copy, Debug, Serialize)]
pub struct Testimonial {
    pub name: &'static str,
    pub event: &'static str,
    pub text: &'static str,
    pub rating: u8,
}
