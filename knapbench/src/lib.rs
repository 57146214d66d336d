pub mod chart;
mod experiment;
pub use experiment::*;
mod export;
pub use export::*;
mod record;
pub use record::*;
pub mod report;
mod settings;
pub use settings::*;
