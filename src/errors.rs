use snafu::Snafu;
use std::io;
use std::path::PathBuf;

/// A type alias for handling errors throughout task-emitter.
pub type Result<T, E = Error> = std::result::Result<T, E>;

/// An error that can occur while emitting tasks.
#[derive(Debug, Snafu)]
#[snafu(visibility(pub(crate)))]
pub enum Error {
    /// The broker could not be reached or rejected the connection. The
    /// driver treats this as fatal: it is logged and the process exits
    /// with status 1.
    #[snafu(display("connection to RabbitMQ server at {} failed: {}", url, source))]
    BrokerConnect { url: String, source: amiquip::Error },

    #[snafu(display("could not open channel: {}", source))]
    OpenChannel { source: amiquip::Error },

    /// Declaring an existing queue with mismatched properties is a
    /// broker-reported error and surfaces here.
    #[snafu(display("could not declare queue {}: {}", queue, source))]
    DeclareQueue { queue: String, source: amiquip::Error },

    #[snafu(display("could not publish to queue {}: {}", queue, source))]
    Publish { queue: String, source: amiquip::Error },

    #[snafu(display("could not close connection: {}", source))]
    CloseConnection { source: amiquip::Error },

    #[snafu(display("could not read tasks from {}: {}", path.display(), source))]
    ReadTasks { path: PathBuf, source: csv::Error },

    #[snafu(display("could not open send log {}: {}", path.display(), source))]
    OpenSendLog { path: PathBuf, source: io::Error },

    #[snafu(display("could not write send log {}: {}", path.display(), source))]
    WriteSendLog { path: PathBuf, source: io::Error },

    #[snafu(display("could not install Ctrl+C handler: {}", source))]
    InstallInterruptHandler { source: ctrlc::Error },
}
