pub mod analytics;
pub mod assembler;
pub mod audit;
pub mod backup;
