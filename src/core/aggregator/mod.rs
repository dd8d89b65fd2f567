pub mod activity;
pub mod attendance;
