use log::{error, info};
use std::path::Path;
use std::process;
use task_emitter::{
    emit_tasks, interrupt_flag, offer_admin_site, Error, Outcome, Result, SendLog,
};

const HOST: &str = "localhost";
const QUEUE_NAME: &str = "task_queue3";
const TASK_FILE: &str = "tasks.csv";

fn main() -> Result<()> {
    env_logger::init();

    offer_admin_site();

    // One log sink per run, bound to the queue name up front.
    let mut log = SendLog::open(QUEUE_NAME)?;
    let stop = interrupt_flag()?;

    match emit_tasks(Path::new(TASK_FILE), HOST, QUEUE_NAME, &mut log, &stop) {
        Ok(Outcome::Completed { sent }) => {
            info!("sent {} tasks to {}", sent, QUEUE_NAME);
            Ok(())
        }
        Ok(Outcome::Interrupted { sent }) => {
            info!("stopped by operator after {} tasks", sent);
            Ok(())
        }
        // The single modeled fatal failure: broker unreachable. Record
        // the detail and exit nonzero; no retry.
        Err(err @ Error::BrokerConnect { .. }) => {
            error!("{}", err);
            if let Err(log_err) = log.connection_failed(&err) {
                error!("could not record connection failure: {}", log_err);
            }
            process::exit(1);
        }
        Err(err) => Err(err),
    }
}
