//! # clean-flutter-dirs
//!
//! A CLI tool for batch-running `flutter clean` across every Flutter project
//! found directly under a parent folder, reporting how much disk space each
//! clean reclaims.
//!
//! This library provides the core functionality for the clean-flutter-dirs
//! CLI tool: project discovery, directory size measurement, external command
//! invocation, and batch reporting.

pub mod app;
pub mod cleaner;
pub mod cli;
pub mod config;
pub mod console;
pub mod process;
pub mod project;
pub mod scanner;
pub mod size;
