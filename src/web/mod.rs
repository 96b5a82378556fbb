//! Browser-facing HTML pages.
//!
//! A single form for shortening URLs and the pages it leads to, rendered
//! with Askama templates.
//!
//! # Modules
//!
//! - [`handlers`] - Template rendering handlers
//! - [`routes`] - Page route configuration

pub mod handlers;
pub mod routes;
