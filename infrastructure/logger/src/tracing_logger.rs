use business::domain::logger::Logger;
use tracing::{debug, error, info, trace, warn};

pub struct TracingLogger;

impl Logger for TracingLogger {
    fn info(&self, message: &str) {
        info!(target: "AdminService -- ", "{}", message);
    }
    fn warn(&self, message: &str) {
        warn!(target: "AdminService -- ", "{}", message);
    }
    fn error(&self, message: &str) {
        error!(target: "AdminService -- ", "{}", message);
    }
    fn debug(&self, message: &str) {
        debug!(target: "AdminService -- ", "{}", message);
    }
    fn trace(&self, message: &str) {
        trace!(target: "AdminService -- ", "{}", message);
    }
}
