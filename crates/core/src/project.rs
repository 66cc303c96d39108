use crate::LaragenError;
use serde::Deserialize;
use std::path::{Path, PathBuf};

/// The filesystem surface one generation run touches, relative to a project
/// root. Defaults match a stock Laravel tree; a `laragen.toml` at the root
/// can override any of the four paths.
#[derive(Debug, Clone)]
pub struct ProjectLayout {
    root: PathBuf,
    migrations: PathBuf,
    controllers: PathBuf,
    views: PathBuf,
    routes: PathBuf,
}

#[derive(Debug, Default, Deserialize)]
struct LayoutConfig {
    #[serde(default)]
    paths: PathsConfig,
}

#[derive(Debug, Default, Deserialize)]
struct PathsConfig {
    migrations: Option<PathBuf>,
    controllers: Option<PathBuf>,
    views: Option<PathBuf>,
    routes: Option<PathBuf>,
}

impl ProjectLayout {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            migrations: PathBuf::from("database/migrations"),
            controllers: PathBuf::from("app/Http/Controllers"),
            views: PathBuf::from("resources/js/Pages"),
            routes: PathBuf::from("routes/web.php"),
        }
    }

    /// Build a layout for `root`, applying `laragen.toml` overrides when the
    /// file exists. A missing config file is not an error; a malformed one is.
    pub fn discover(root: impl Into<PathBuf>) -> Result<Self, LaragenError> {
        let mut layout = Self::new(root);
        let config_path = layout.root.join("laragen.toml");
        if config_path.exists() {
            let content = std::fs::read_to_string(&config_path)?;
            let config: LayoutConfig = toml::from_str(&content)?;
            if let Some(p) = config.paths.migrations {
                layout.migrations = p;
            }
            if let Some(p) = config.paths.controllers {
                layout.controllers = p;
            }
            if let Some(p) = config.paths.views {
                layout.views = p;
            }
            if let Some(p) = config.paths.routes {
                layout.routes = p;
            }
        }
        Ok(layout)
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn migrations_dir(&self) -> PathBuf {
        self.root.join(&self.migrations)
    }

    pub fn controllers_dir(&self) -> PathBuf {
        self.root.join(&self.controllers)
    }

    pub fn views_dir(&self) -> PathBuf {
        self.root.join(&self.views)
    }

    pub fn routes_file(&self) -> PathBuf {
        self.root.join(&self.routes)
    }
}
