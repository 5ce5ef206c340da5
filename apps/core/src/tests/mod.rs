//! Test Module
//!
//! Integration test suite for the Study Buddy core.
//!
//! ## Test Categories
//! - `engine_tests`: Full engine workflows over the focus and explanation paths
//! - `resolver_integration_tests`: Resolver behavior against a mock HTTP lookup
//!
//! Unit tests for the classifier, aggregator, recommender, and composer live
//! next to their modules.

pub mod resolver_integration_tests;
