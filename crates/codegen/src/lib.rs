pub mod generator;
pub mod migration;
pub mod rules;
pub mod templates;
pub mod writer;

pub use generator::{Artifact, ArtifactKind, ArtifactStatus, CrudGenerator};
pub use migration::{Attribute, MigrationResolver, RegexSchemaParser, SchemaParser};
pub use writer::{CodeWriter, RoutePatch};
