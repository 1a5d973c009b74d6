//! Integration Tests Module
//!
//! End-to-end tests for the TalentScout intake and its configuration.

// Intake conversation tests
mod intake_test;

// Config file and CLI override tests
mod config_test;
