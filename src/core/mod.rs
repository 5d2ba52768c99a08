pub mod cancel;
pub mod scheduler;
