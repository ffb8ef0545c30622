pub mod entities;
pub mod params;
pub mod stats;

pub use entities::{Campaign, Channel, RedirectMode, Site, Status, Target, Token, Tracker, TrackerType};
pub use params::*;
pub use stats::{
    ClickStatsQuery, ClickStatsResponse, DateCount, EventStatsQuery, EventStatsResponse,
    GroupCount, HourlyCount, NameCount, StatsSummary, group_name_counts,
};
