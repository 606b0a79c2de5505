//! # ServiceNow Table API Endpoints

pub mod incidents;
