pub mod error;
pub mod report;
pub mod service;
pub mod unit;

pub use error::{GenerationServiceError, ReportingError, UnitError};
pub use report::GenerationReport;
pub use service::{GenerationService, GenerationServiceApi};
pub use unit::{GeneratedFile, SynthesisUnit};
