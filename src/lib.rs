//! Privacy Lab - Hands-on privacy education
//!
//! This crate simulates a friendly chatbot that quietly harvests personal
//! details, then reveals what was collected. It also ships a password
//! strength analyst and a yes/no quiz engine for phishing and
//! data-sensitivity drills.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
