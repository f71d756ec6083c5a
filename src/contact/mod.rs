pub mod controller;
pub mod error;
pub mod fields;
pub mod response;
pub mod scheduler;
pub mod status;
pub mod transport;
pub mod validation;

pub use controller::{ContactFormController, FormHandle};
pub use fields::FormFields;
pub use scheduler::TimeoutScheduler;
pub use status::{StatusDisplay, StatusMessage};
pub use transport::GlooTransport;
