//! Dashboard analytics: aggregation helpers, reporting periods and the
//! derived view model

pub mod aggregate;
pub mod dashboard;
pub mod period;

pub use aggregate::{
    HourlyPoint, OTHER_LABEL, TrendPoint, bot_rate, has_hourly_data, hourly_buckets,
    merge_name_counts, merge_trends, share_percent, top_n_with_other,
};
pub use dashboard::{DashboardView, Distribution, Ranking, SummaryCard, TrendMode, ViewOptions};
pub use period::{DateRange, Period, today_utc};
