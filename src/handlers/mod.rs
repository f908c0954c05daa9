//! MCP tool handlers for the cycle server
//!
//! This module contains the implementation of all MCP tool handlers.
//! Each group of tools is in a separate file.

pub mod cycle;
pub mod gestation;
pub mod logs;
