use thiserror::Error;

/// Every failure a generation run can hit. The first three variants are the
/// explicit abort points of the resolver; the rest propagate from below.
#[derive(Error, Debug)]
pub enum LaragenError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Config error: {0}")]
    Config(#[from] toml::de::Error),

    #[error("Migration file for model {model} not found")]
    MigrationNotFound { model: String },

    #[error("Model name not found in migration file: {file}")]
    ModelNameNotFound { file: String },

    #[error("No attributes found in the migration file for model {model}")]
    NoAttributesFound { model: String },

    #[error("Template error: {0}")]
    Template(String),
}
