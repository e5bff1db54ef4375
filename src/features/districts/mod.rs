//! District resolution: maps an incoming coordinate (or a client assertion)
//! to the normalized district slug that keys push-notification topics.
//!
//! Three interchangeable strategies sit behind [`services::DistrictResolver`];
//! the deployment picks one via `RESOLVER_STRATEGY`:
//!
//! | Strategy | Source of truth | Network |
//! |----------|-----------------|---------|
//! | `static` | hand-maintained bounding boxes | none |
//! | `nominatim` | reverse geocoding + TTL cache | yes |
//! | `client` | district asserted in the request | none |

pub mod dtos;
pub mod handlers;
pub mod models;
pub mod routes;
pub mod services;

pub use services::{DistrictResolver, Provenance, ResolveInput, Resolution};
