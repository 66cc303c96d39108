pub mod error;
pub mod inflect;
pub mod project;

pub use error::LaragenError;
pub use project::ProjectLayout;
