//! Migration Resolver: turns a user-supplied model identifier into a verified
//! model name and an ordered attribute list by reading the project's
//! migration files.

use laragen_core::inflect::{pluralize, singularize, to_snake_case, to_studly_case};
use laragen_core::LaragenError;
use regex::Regex;
use std::path::{Path, PathBuf};

/// Column names the framework manages itself; they never receive validation
/// rules or mass-assignment entries.
pub static DENYLIST: &[&str] = &["id", "created_at", "updated_at", "deleted_at", "remember_token"];

/// One declared column: its name and the schema-builder method that declared
/// it (`string`, `integer`, `email`, ...).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Attribute {
    pub name: String,
    pub declared_type: String,
}

/// Extracts column declarations from migration source text. The shipped
/// implementation is regex-based and only sees single-line builder calls;
/// callers go through this trait so it can be swapped for a real tokenizer
/// later.
pub trait SchemaParser {
    fn parse(&self, contents: &str) -> Vec<Attribute>;
}

/// Matches `$table-><method>('<column>'` anywhere in the file, in source
/// order, without deduplication. Multi-line calls, interpolated names, and
/// conditional schema blocks are invisible to it.
pub struct RegexSchemaParser {
    call: Regex,
}

impl RegexSchemaParser {
    pub fn new() -> Result<Self, LaragenError> {
        let call = Regex::new(r"\$table->(\w+)\('(\w+)'")
            .map_err(|e| LaragenError::Template(format!("Regex error: {}", e)))?;
        Ok(Self { call })
    }
}

impl SchemaParser for RegexSchemaParser {
    fn parse(&self, contents: &str) -> Vec<Attribute> {
        self.call
            .captures_iter(contents)
            .map(|cap| Attribute {
                declared_type: cap[1].to_string(),
                name: cap[2].to_string(),
            })
            .collect()
    }
}

pub struct MigrationResolver {
    parser: Box<dyn SchemaParser>,
    model_pattern: Regex,
}

impl MigrationResolver {
    pub fn new() -> Result<Self, LaragenError> {
        Self::with_parser(Box::new(RegexSchemaParser::new()?))
    }

    pub fn with_parser(parser: Box<dyn SchemaParser>) -> Result<Self, LaragenError> {
        let model_pattern = Regex::new(r"create_(\w+)_table")
            .map_err(|e| LaragenError::Template(format!("Regex error: {}", e)))?;
        Ok(Self {
            parser,
            model_pattern,
        })
    }

    /// Find the migration file for `model` directly inside `migrations_dir`
    /// (non-recursive). Filenames are scanned in lexicographic order so the
    /// result does not depend on platform directory-iteration order; when
    /// several files carry the marker the lexicographically first wins.
    pub fn locate(&self, model: &str, migrations_dir: &Path) -> Result<PathBuf, LaragenError> {
        let marker = format!("create_{}_table", pluralize(&to_snake_case(model)));

        let mut entries: Vec<(String, PathBuf)> = Vec::new();
        for entry in std::fs::read_dir(migrations_dir)? {
            let entry = entry?;
            if !entry.file_type()?.is_file() {
                continue;
            }
            if let Some(name) = entry.file_name().to_str() {
                entries.push((name.to_string(), entry.path()));
            }
        }
        entries.sort();

        entries
            .into_iter()
            .find(|(name, _)| name.contains(&marker))
            .map(|(_, path)| path)
            .ok_or_else(|| LaragenError::MigrationNotFound {
                model: model.to_string(),
            })
    }

    /// Recover the StudlyCase singular model name from a migration filename.
    /// Anything after the `create_<table>_table` marker in the stem is
    /// ignored.
    pub fn infer_model_name(&self, migration_file: &Path) -> Result<String, LaragenError> {
        let stem = migration_file
            .file_stem()
            .and_then(|s| s.to_str())
            .unwrap_or_default();

        self.model_pattern
            .captures(stem)
            .map(|cap| to_studly_case(&singularize(&cap[1])))
            .ok_or_else(|| LaragenError::ModelNameNotFound {
                file: migration_file.display().to_string(),
            })
    }

    /// Parse the migration's column declarations, in source order, with the
    /// auto-managed denylist columns removed. Zero eligible attributes is a
    /// failure, not an empty model.
    pub fn extract_attributes(
        &self,
        migration_file: &Path,
        model: &str,
    ) -> Result<Vec<Attribute>, LaragenError> {
        let contents = std::fs::read_to_string(migration_file)?;
        let attributes: Vec<Attribute> = self
            .parser
            .parse(&contents)
            .into_iter()
            .filter(|attr| !DENYLIST.contains(&attr.name.as_str()))
            .collect();

        if attributes.is_empty() {
            return Err(LaragenError::NoAttributesFound {
                model: model.to_string(),
            });
        }
        Ok(attributes)
    }
}
