//! Sales Commission Engine
//!
//! This crate calculates a salesperson's monthly commission from an ordered
//! ledger of sales. Commission accrues at per-category rates once cumulative
//! sales pass a tier threshold, and a flat-rate bonus accrues above a second,
//! higher threshold.

#![warn(missing_docs)]

pub mod calculation;
pub mod calculator;
pub mod config;
pub mod error;
pub mod models;
