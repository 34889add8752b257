//! Browser UI: one page with the URL form, product details, histogram and
//! review table, plus a JSON endpoint.

pub mod app;
pub mod json_error;
pub mod page;

pub use app::{AppBuilder, AppState, Server};
pub use page::{Pages, Session};
