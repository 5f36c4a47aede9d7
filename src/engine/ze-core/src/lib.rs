pub mod logger;
pub mod thread;
