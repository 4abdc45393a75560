//! zookeepr - a small JSON-file-backed REST API for zoo animal records
//!
//! The record store lives in [`animals`]; [`http_server`] exposes it over
//! HTTP alongside the HTML pages; [`cli`] wires configuration and startup.

pub mod animals;
pub mod cli;
pub mod http_server;
pub mod observability;
