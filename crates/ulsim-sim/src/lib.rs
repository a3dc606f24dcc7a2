// In-process peer stack joining the two roles
pub mod loopback;

pub use loopback::LoopbackStack;
