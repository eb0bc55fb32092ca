pub mod analysis;
pub mod error;
pub mod landmark;
pub mod math;
pub mod norms;
pub mod session;

pub use error::{CephalisError, Result};
pub use session::{AnalysisSession, AnalysisSnapshot, PointerUpdate};
