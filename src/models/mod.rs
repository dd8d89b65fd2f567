pub mod activity;
pub mod attendance;
pub mod contribution;
pub mod insight;
pub mod kpi;
pub mod report;
pub mod series;
pub mod window;
