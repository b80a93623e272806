//! CLI command implementations.

pub mod hedge;
pub mod risk;
pub mod scenarios;
pub mod stress;

pub use hedge::HedgeArgs;
pub use risk::RiskArgs;
pub use scenarios::ScenarioArgs;
pub use stress::StressArgs;
