//! Client for the hosted table store that owns all durable site content.
//!
//! Every entity the site shows (services, blog posts, FAQs, gallery items,
//! inquiries) lives in a remote table; this crate wraps the store's REST
//! surface in typed per-table handles. The app keeps no copy of the data
//! beyond the lifetime of a single request.

pub mod client;
pub mod errors;
pub mod store;
pub mod tables;

pub use client::GatewayClient;
pub use errors::GatewayError;
pub use store::{RecordSource, RecordStore};
pub use tables::TableApi;
