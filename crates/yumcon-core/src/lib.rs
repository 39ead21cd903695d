pub mod audit;
pub mod config;
pub mod model;
pub mod retention;
pub mod service;
pub mod virtual_target;
