//! Integration and statistical tests for the Progeny workspace.

pub mod helpers;
