//! axum handlers, one module per resource.
//!
//! Handlers bind HTTP verb, path, and body to a service call and a status
//! code.  Validation runs here, before the service is invoked; everything
//! else is delegated.

pub mod artists;
pub mod reviews;
