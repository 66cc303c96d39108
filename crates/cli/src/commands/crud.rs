use console::style;
use laragen_codegen::{ArtifactKind, ArtifactStatus, CrudGenerator, MigrationResolver};
use laragen_core::{LaragenError, ProjectLayout};
use std::path::Path;

/// One full generation run: resolve the migration, then emit controller,
/// views, and route registrations. Every step either reports progress or
/// aborts the whole run with its own error.
pub fn generate(model: &str, project_root: &Path) -> Result<(), LaragenError> {
    let layout = ProjectLayout::discover(project_root)?;
    let resolver = MigrationResolver::new()?;

    println!("🔍 Searching for migration file for the model: {}", model);
    let migration = resolver.locate(model, &layout.migrations_dir())?;
    println!(
        "   Found {}",
        style(migration.display()).dim()
    );

    let model_name = resolver.infer_model_name(&migration)?;
    println!("📦 Resolved model name: {}", style(&model_name).bold());

    let attributes = resolver.extract_attributes(&migration, model)?;
    println!(
        "   {} attribute(s): {}",
        attributes.len(),
        attributes
            .iter()
            .map(|a| a.name.as_str())
            .collect::<Vec<_>>()
            .join(", ")
    );

    let artifacts = CrudGenerator::new(layout).generate(&model_name, &attributes)?;

    for artifact in &artifacts {
        match (artifact.kind, artifact.status) {
            (ArtifactKind::Controller, ArtifactStatus::Created) => {
                println!("📝 Controller created: {}", artifact.path.display());
            }
            (ArtifactKind::Controller, ArtifactStatus::Skipped) => {
                println!(
                    "   Controller {}Controller already exists. Skipping creation.",
                    model_name
                );
            }
            (ArtifactKind::View, _) => {
                println!("🖼️  View written: {}", artifact.path.display());
            }
            (ArtifactKind::RouteImport, ArtifactStatus::Created) => {
                println!("🔗 Import added to {}", artifact.path.display());
            }
            (ArtifactKind::RouteImport, ArtifactStatus::Skipped) => {
                println!("   Import already present in {}", artifact.path.display());
            }
            (ArtifactKind::RouteResource, ArtifactStatus::Created) => {
                println!("🔗 Resource route added to {}", artifact.path.display());
            }
            (ArtifactKind::RouteResource, ArtifactStatus::Skipped) => {
                println!("   Resource route already present in {}", artifact.path.display());
            }
        }
    }

    println!("{}", style("✅ CRUD scaffolding generated successfully!").green());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    fn scaffold_project(root: &Path) {
        fs::create_dir_all(root.join("database/migrations")).unwrap();
        fs::create_dir_all(root.join("routes")).unwrap();
        fs::write(
            root.join("database/migrations/2024_01_01_000000_create_posts_table.php"),
            "$table->id();\n$table->string('title');\n$table->timestamps();\n",
        )
        .unwrap();
        fs::write(root.join("routes/web.php"), "<?php\n").unwrap();
    }

    #[test]
    fn test_generate_writes_full_scaffold() {
        let dir = tempfile::tempdir().unwrap();
        scaffold_project(dir.path());

        generate("Post", dir.path()).unwrap();

        assert!(dir
            .path()
            .join("app/Http/Controllers/PostController.php")
            .exists());
        for view in ["Index.vue", "Create.vue", "Edit.vue", "Show.vue"] {
            assert!(dir.path().join("resources/js/Pages/Post").join(view).exists());
        }
        let routes = fs::read_to_string(dir.path().join("routes/web.php")).unwrap();
        assert!(routes.contains("Route::resource('posts', PostController::class);"));
    }

    #[test]
    fn test_generate_aborts_when_migration_is_missing() {
        let dir = tempfile::tempdir().unwrap();
        scaffold_project(dir.path());

        let err = generate("Widget", dir.path()).unwrap_err();
        assert!(matches!(err, LaragenError::MigrationNotFound { model } if model == "Widget"));
        assert!(!dir.path().join("app").exists());
    }
}
