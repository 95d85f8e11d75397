use business::domain::logger::Logger;
use tracing::{debug, error, info, warn};

pub struct TracingLogger;

impl Logger for TracingLogger {
    fn info(&self, message: &str) {
        info!(target: "ProductCatalog -- ", "{}", message);
    }
    fn warn(&self, message: &str) {
        warn!(target: "ProductCatalog -- ", "{}", message);
    }
    fn error(&self, message: &str) {
        error!(target: "ProductCatalog -- ", "{}", message);
    }
    fn debug(&self, message: &str) {
        debug!(target: "ProductCatalog -- ", "{}", message);
    }
}
