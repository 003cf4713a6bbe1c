pub mod error;
pub mod feature_flags;

pub mod activity;
pub mod metrics;
pub mod profile;
pub mod role;
pub mod task;

pub use activity::*;
pub use error::*;
pub use feature_flags::*;
pub use profile::*;
pub use role::*;
pub use task::*;
// metrics stays namespaced: `shared_types::metrics::sample_projects()`.
