//! CSV-driven RabbitMQ task producer.
//!
//! Reads rows from a task file, flattens each row into a single
//! space-joined message, and publishes each message to a durable queue
//! over a blocking AMQP connection. Send outcomes are appended to a
//! per-queue log file. The `emit-tasks` binary wires these pieces
//! together; see [`emit_tasks`] for the driver loop.

mod admin;
mod errors;
mod producer;
mod send_log;
mod tasks;

pub use admin::{offer_admin_site, wants_admin_site, ADMIN_URL};
pub use errors::{Error, Result};
pub use producer::send_message;
pub use send_log::SendLog;
pub use tasks::{emit_tasks, interrupt_flag, Outcome, TaskReader};
