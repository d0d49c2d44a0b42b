//! Flat-rate car loan installment calculator.
//!
//! The monthly installment is `(loan + loan * rate) / months`, where the loan
//! is the OTR price minus the down payment and the rate is picked by loan
//! duration. Field text is parsed leniently: anything that isn't a plain
//! digit string counts as zero.

pub mod app;
pub mod calculator;
pub mod config;
pub mod format;
pub mod ui;
