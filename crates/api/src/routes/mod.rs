//! HTTP Route Handlers

pub mod alerts;
pub mod readings;
pub mod statistics;
pub mod subjects;
