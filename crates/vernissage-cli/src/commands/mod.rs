pub mod config;
pub mod run;

pub use run::run_session;
