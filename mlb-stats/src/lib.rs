pub mod dataset;
pub mod error;
pub mod homerun;
pub mod team;

pub use dataset::{Dataset, Datum, Extent, HomerunExtents, TeamExtents};
pub use error::{Result, StatsError};
pub use homerun::HomerunEvent;
pub use team::TeamAggregate;
