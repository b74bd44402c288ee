//! Metric aggregator: pure read-only computations over the usage ledger and
//! the dimension tables. No caching, no side effects: calling any of these
//! twice against the same store state yields identical results.

pub mod adoption;
pub mod dashboard;
pub mod rates;
pub mod roi;

pub use adoption::compute_adoption_trends;
pub use dashboard::compute_employee_dashboard;
pub use roi::compute_tool_roi;
