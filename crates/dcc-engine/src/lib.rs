//! # dcc-engine
//!
//! Pure transformations from fetched rows to page view models.
//!
//! - [`aggregate`]: frequency tables with sentinel buckets, top-K, and shares
//! - [`filter`]: search and categorical filters over the company list
//! - [`dashboard`], [`analytics`], [`profile`]: the response of each page
//!
//! Nothing here performs I/O or suspends; callers fetch through `dcc-db`
//! and hand the rows over.

pub mod aggregate;
pub mod analytics;
pub mod dashboard;
pub mod filter;
pub mod profile;

pub use aggregate::{aggregate, aggregate_list};
pub use filter::{FilterState, Filterable};
pub use profile::TabView;
