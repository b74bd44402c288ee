pub mod adopt;
pub mod audit;
pub mod backup;
pub mod config;
pub mod dashboard;
pub mod db;
pub mod employees;
pub mod export;
pub mod hire;
pub mod hr;
pub mod init;
pub mod log;
pub mod roi;
pub mod seed;
pub mod summary;
pub mod tools;
pub mod trends;
