//! Domain model for the Todo Task Manager.
//!
//! Shared between the web client, the HTTP service client, and the REST
//! backend so that all three agree on the wire contract.

pub mod task;

pub use task::{NewTask, Task, TaskError, TaskId, validate_title};
