pub mod diagnostic;
pub mod event;
pub mod layout;
pub mod segment;
pub mod session;
pub mod status;
