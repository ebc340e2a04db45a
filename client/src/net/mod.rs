//! Networking modules for the manual Q&A REST API.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` owns the request pipeline (bearer header, 401 handling), `transport`
//! puts requests on the wire, and `auth`/`catalog`/`models`/`chat` add one
//! typed method per backend endpoint. `types` defines the shared wire schema.

pub mod api;
pub mod auth;
pub mod catalog;
pub mod chat;
pub mod error;
pub mod models;
pub mod request;
pub mod session;
pub mod transport;
pub mod types;
pub mod upload;

#[cfg(test)]
pub(crate) mod testing;
