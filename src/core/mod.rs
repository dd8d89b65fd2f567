pub mod aggregator;
pub mod insights;
pub mod logic;
pub mod series;
