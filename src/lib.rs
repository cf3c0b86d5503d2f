//! SecBoard: a kanban board for security-operations work.
//!
//! This crate provides the core of a single-user task board for pen-testing
//! engagements, compliance items and incident response: the task model and
//! its validation rules, stage transitions, due-date arithmetic, progress
//! statistics, local persistence and spreadsheet export.
//!
//! # Architecture
//!
//! SecBoard follows hexagonal architecture principles:
//!
//! - **Domain**: Pure business logic with no infrastructure dependencies
//! - **Ports**: Abstract trait interfaces for external interactions
//! - **Adapters**: Concrete implementations of ports (files, spreadsheets)
//!
//! # Modules
//!
//! - [`board`]: Task model, board service, persistence and export
//! - [`config`]: Filesystem board configuration
//! - [`logging`]: File logging bootstrap

pub mod board;
pub mod config;
pub mod logging;
