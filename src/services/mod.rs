//! Service layer: the pure statistics and aggregation core.
//!
//! Every function in this module is a deterministic transformation over
//! value types - no I/O, no shared mutable state. Callers recompute the
//! derived structures whenever the underlying record collection changes.

pub mod color_scale;
pub mod enrich;
pub mod format;
pub mod helpers;
pub mod kreis;
pub mod stats;

pub use color_scale::{color_scale, ColorScale, RateBand};
pub use enrich::{enrich_municipalities, enrich_municipality, EnrichedMunicipality};
pub use format::{format_comparison, format_rate};
pub use kreis::{kreis_municipalities_sorted, kreis_statistics, KreisStatistics, RateGroupStats};
pub use stats::{compute_statistics, display_rate, Statistics};
