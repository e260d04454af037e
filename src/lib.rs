//! Property listing search for a real-estate catalogue.
//!
//! Records are fetched from a [`sources::PropertySource`], then narrowed with
//! [`filter::filter_properties`] according to a user supplied
//! [`models::FilterSpec`].

pub mod config;
pub mod error;
pub mod filter;
pub mod format;
pub mod models;
pub mod sources;

pub use config::Config;
pub use error::{FilterError, FilterField};
pub use filter::filter_properties;
pub use models::{FilterCriteria, FilterSpec, PropertyRecord, PropertyStatus};
pub use sources::{FetchParams, JsonFileSource, PropertySource, SupabaseSource};
