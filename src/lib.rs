//! MCP server for the task-and-schedule planning crew.
//!
//! Exposes the `task_and_schedule_planer` tool over JSON-RPC 2.0 stdio
//! transport, compatible with any MCP-aware AI agent, plus a small HTTP API
//! (`GET /health`, `POST /run`) over the same crew collaborator.
//!
//! The crew itself — task deconstruction, research, prioritization — is an
//! external process reached through [`runner::TaskRunner`].

pub mod config;
pub mod handlers;
pub mod http;
pub mod protocol;
pub mod runner;
pub mod server;

pub mod schema;
