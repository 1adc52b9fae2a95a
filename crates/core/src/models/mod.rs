pub mod analytics;
pub mod chart;
pub mod criteria;
pub mod export;
pub mod holding;
pub mod portfolio;
pub mod view;
