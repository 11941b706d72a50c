//! HTTP server module for the grundatlas backend.
//!
//! This module provides an axum-based HTTP server that exposes the
//! statistics core as a REST API for the map frontend. Handlers hold no
//! state beyond the shared dataset store and recompute the derived
//! structures per request; the core is cheap enough that no caching layer
//! is warranted.
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────┐
//! │  HTTP Layer (axum handlers)                               │
//! │  - Request parsing, JSON serialization                    │
//! │  - CORS, compression, error handling                      │
//! └───────────────────┬──────────────────────────────────────┘
//!                     │
//! ┌───────────────────▼──────────────────────────────────────┐
//! │  Service Layer (services/)                                │
//! │  - Statistics, color scale, Kreis aggregation, enrichment │
//! └───────────────────┬──────────────────────────────────────┘
//!                     │
//! ┌───────────────────▼──────────────────────────────────────┐
//! │  Dataset Store (dataset/)                                 │
//! │  - Static JSON dataset, AGS index, checksum               │
//! └──────────────────────────────────────────────────────────┘
//! ```

pub mod dto;
pub mod error;
pub mod handlers;
pub mod router;
pub mod state;

pub use router::create_router;
pub use state::AppState;
