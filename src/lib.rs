//! PagSeguro Gateway - checkout payment gateway backed by PagSeguro
//!
//! This crate plugs a PagSeguro payment method into a host checkout. For
//! each order it registers a payment with PagSeguro and hands the shopper's
//! redirect URL (or a displayable failure) back to the host.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
