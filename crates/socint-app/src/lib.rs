pub mod nav;
pub mod session;

pub use nav::{Navigator, Pane, SubTab};
pub use session::{AnalysisBundle, FilterOptions, Session, SessionError, Trends};
