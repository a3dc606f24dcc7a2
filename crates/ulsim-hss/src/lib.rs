// Server role: answers inbound ULRs synchronously
pub mod handler;

pub use handler::UlrHandler;
