pub mod aggregator;
pub mod guidance;
pub mod search;
pub mod youtube;
