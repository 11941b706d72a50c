//! # Grundatlas Backend
//!
//! Statistics and aggregation engine for the NRW Grundsteuer B dashboard.
//!
//! This crate computes the aggregate views the map frontend renders: global
//! rate statistics, the five-band color scale, per-Kreis breakdowns, and the
//! enriched per-municipality records used by tooltips and panels. The input
//! is a static JSON dataset of municipal Hebesätze; the core never performs
//! I/O of its own and recomputes everything from scratch on demand.
//!
//! ## Features
//!
//! - **Data Loading**: Decode the municipality dataset from JSON format
//! - **Statistics**: Mean, median, quartiles and counts over display rates
//! - **Color Scale**: Quartile-based breakpoints and band classification
//! - **Kreis Analysis**: Per-district sub-distributions and sort orders
//! - **Enrichment**: View-ready municipality records for the map layer
//! - **HTTP API**: RESTful endpoints for frontend integration
//!
//! ## Architecture
//!
//! The crate is organized into several logical modules:
//!
//! - [`models`]: Domain types for the raw dataset
//! - [`dataset`]: Dataset store, AGS lookup index, content fingerprint
//! - [`services`]: Pure statistics and aggregation functions
//! - [`config`]: Server and dataset configuration
//! - [`http`]: Axum-based HTTP server and request handlers

pub mod config;
pub mod dataset;
pub mod models;
pub mod services;

#[cfg(feature = "http-server")]
pub mod http;
