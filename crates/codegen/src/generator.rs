//! Emitter orchestration: renders the controller and view templates for a
//! resolved model and applies the filesystem effects in a fixed order,
//! reporting an [`Artifact`] per output so the CLI can narrate the run.

use crate::migration::Attribute;
use crate::rules::rule_for;
use crate::templates::{
    render_template, CONTROLLER_TEMPLATE, CREATE_VIEW_TEMPLATE, EDIT_VIEW_TEMPLATE,
    INDEX_VIEW_TEMPLATE, SHOW_VIEW_TEMPLATE,
};
use crate::writer::CodeWriter;
use laragen_core::inflect::pluralize;
use laragen_core::{LaragenError, ProjectLayout};
use std::collections::HashMap;
use std::path::PathBuf;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArtifactKind {
    Controller,
    View,
    RouteImport,
    RouteResource,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArtifactStatus {
    /// Written this run.
    Created,
    /// Already existed; left untouched.
    Skipped,
}

#[derive(Debug, Clone)]
pub struct Artifact {
    pub kind: ArtifactKind,
    pub status: ArtifactStatus,
    pub path: PathBuf,
}

pub struct CrudGenerator {
    layout: ProjectLayout,
    writer: CodeWriter,
}

impl CrudGenerator {
    pub fn new(layout: ProjectLayout) -> Self {
        Self {
            layout,
            writer: CodeWriter::new(),
        }
    }

    /// Emit controller, views, and route registrations for `model_name`.
    /// All templates are rendered before the first write, so a rendering
    /// failure aborts with nothing on disk. Filesystem failures propagate
    /// from whichever step hit them.
    pub fn generate(
        &self,
        model_name: &str,
        attributes: &[Attribute],
    ) -> Result<Vec<Artifact>, LaragenError> {
        let context = self.build_context(model_name, attributes);

        let controller = render_template(CONTROLLER_TEMPLATE, &context)?;
        let views = [
            ("Index.vue", render_template(INDEX_VIEW_TEMPLATE, &context)?),
            ("Create.vue", render_template(CREATE_VIEW_TEMPLATE, &context)?),
            ("Edit.vue", render_template(EDIT_VIEW_TEMPLATE, &context)?),
            ("Show.vue", render_template(SHOW_VIEW_TEMPLATE, &context)?),
        ];

        let mut artifacts = Vec::new();

        let controller_path = self
            .layout
            .controllers_dir()
            .join(format!("{}Controller.php", model_name));
        let created = self.writer.write_new(&controller_path, &controller)?;
        artifacts.push(Artifact {
            kind: ArtifactKind::Controller,
            status: if created {
                ArtifactStatus::Created
            } else {
                ArtifactStatus::Skipped
            },
            path: controller_path,
        });

        let view_dir = self.layout.views_dir().join(model_name);
        for (file, content) in views {
            let path = view_dir.join(file);
            self.writer.write(&path, &content)?;
            artifacts.push(Artifact {
                kind: ArtifactKind::View,
                status: ArtifactStatus::Created,
                path,
            });
        }

        let routes_path = self.layout.routes_file();
        let import_line = format!("use App\\Http\\Controllers\\{}Controller;", model_name);
        let route_line = format!(
            "Route::resource('{}', {}Controller::class);",
            context["routeName"], model_name
        );
        let patch = self.writer.patch_routes(&routes_path, &import_line, &route_line)?;
        artifacts.push(Artifact {
            kind: ArtifactKind::RouteImport,
            status: if patch.import_added {
                ArtifactStatus::Created
            } else {
                ArtifactStatus::Skipped
            },
            path: routes_path.clone(),
        });
        artifacts.push(Artifact {
            kind: ArtifactKind::RouteResource,
            status: if patch.route_added {
                ArtifactStatus::Created
            } else {
                ArtifactStatus::Skipped
            },
            path: routes_path,
        });

        Ok(artifacts)
    }

    fn build_context(&self, model_name: &str, attributes: &[Attribute]) -> HashMap<&'static str, String> {
        let model_variable = model_name.to_lowercase();
        let model_variable_plural = pluralize(&model_variable);
        let model_plural = pluralize(model_name);
        let route_name = model_plural.to_lowercase();

        // Rules are keyed by column name: a repeated column keeps its first
        // position but takes the rule of its last declaration. The
        // mass-assignment block below is not deduplicated.
        let mut rule_order: Vec<&str> = Vec::new();
        let mut rules_by_name: HashMap<&str, &'static str> = HashMap::new();
        for attr in attributes {
            if !rules_by_name.contains_key(attr.name.as_str()) {
                rule_order.push(&attr.name);
            }
            rules_by_name.insert(&attr.name, rule_for(&attr.declared_type));
        }
        let validation_rules = rule_order
            .iter()
            .map(|name| format!("'{}' => '{}'", name, rules_by_name[name]))
            .collect::<Vec<_>>()
            .join(",\n            ");

        let model_attributes = attributes
            .iter()
            .map(|attr| format!("'{}' => $request->{}", attr.name, attr.name))
            .collect::<Vec<_>>()
            .join(",\n            ");

        let mut context = HashMap::new();
        context.insert("modelName", model_name.to_string());
        context.insert("model", model_name.to_string());
        context.insert("modelVariable", model_variable);
        context.insert("modelVariablePlural", model_variable_plural);
        context.insert("modelPlural", model_plural);
        context.insert("routeName", route_name);
        context.insert("validationRules", validation_rules);
        context.insert("modelAttributes", model_attributes);
        context
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn attr(name: &str, declared_type: &str) -> Attribute {
        Attribute {
            name: name.to_string(),
            declared_type: declared_type.to_string(),
        }
    }

    #[test]
    fn test_context_naming_is_consistent() {
        let generator = CrudGenerator::new(ProjectLayout::new("/tmp/app"));
        let context = generator.build_context("BlogPost", &[attr("title", "string")]);

        assert_eq!(context["modelName"], "BlogPost");
        assert_eq!(context["modelVariable"], "blogpost");
        assert_eq!(context["modelVariablePlural"], "blogposts");
        assert_eq!(context["modelPlural"], "BlogPosts");
        assert_eq!(context["routeName"], "blogposts");
    }

    #[test]
    fn test_context_rules_and_attributes_blocks() {
        let generator = CrudGenerator::new(ProjectLayout::new("/tmp/app"));
        let context = generator.build_context(
            "User",
            &[attr("name", "string"), attr("email", "email"), attr("secret", "password")],
        );

        assert_eq!(
            context["validationRules"],
            "'name' => 'nullable|string|max:255',\n            \
             'email' => 'nullable|email|max:255',\n            \
             'secret' => 'nullable|string|min:8|max:255'"
        );
        assert_eq!(
            context["modelAttributes"],
            "'name' => $request->name,\n            \
             'email' => $request->email,\n            \
             'secret' => $request->secret"
        );
    }

    #[test]
    fn test_repeated_column_yields_one_rule_entry_with_last_type() {
        let generator = CrudGenerator::new(ProjectLayout::new("/tmp/app"));
        let context = generator.build_context(
            "User",
            &[attr("contact", "string"), attr("bio", "text"), attr("contact", "email")],
        );

        // One rule per name, first position kept, last declaration wins.
        assert_eq!(
            context["validationRules"],
            "'contact' => 'nullable|email|max:255',\n            \
             'bio' => 'nullable|string|max:255'"
        );
        // Mass assignment mirrors literal occurrence order, duplicates kept.
        assert_eq!(
            context["modelAttributes"],
            "'contact' => $request->contact,\n            \
             'bio' => $request->bio,\n            \
             'contact' => $request->contact"
        );
    }
}
