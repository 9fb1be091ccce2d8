pub mod exhibition;

pub use exhibition::Exhibition;
