// Client role: sends a ULR and waits for the terminal event
pub mod client;

pub use client::{UlrClient, UlrOutcome};
