//! Test scenarios

mod config_tests;
mod properties;
mod scene_tests;
