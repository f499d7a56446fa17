//! Document templates for rendered diagrams
//!
//! A [`TemplateRenderer`] accepts diagram markup and a [`Template`] and
//! returns a complete document. Templates are handlebars sources that
//! reference the diagram as `{{uml_string}}`; the value is HTML-escaped on
//! insertion. Template lookup problems stay inside the renderer: it logs
//! them and falls back to the built-in template rather than failing the
//! caller.

use std::fmt;
use std::path::{Path, PathBuf};

use handlebars::Handlebars;
use serde_json::{json, Value};
use tracing::{debug, error, warn};

use super::types::Template;

const SIMPLE_HTML: &str = r#"<!DOCTYPE html>
<html lang="en">
  <head>
    <meta charset="utf-8">
    <title>Class Diagram</title>
  </head>
  <body>
    <pre class="mermaid">
{{ uml_string }}
    </pre>
    <script type="module">
      import mermaid from "https://cdn.jsdelivr.net/npm/mermaid@10/dist/mermaid.esm.min.mjs";
      mermaid.initialize({ startOnLoad: true });
    </script>
  </body>
</html>
"#;

/// Contract for turning diagram markup into a finished document
pub trait TemplateRenderer: Send + Sync {
    /// Render `diagram` into `template`
    fn render(&self, diagram: &str, template: Template) -> String;
}

fn builtin_source(template: Template) -> &'static str {
    match template {
        Template::Simple => SIMPLE_HTML,
    }
}

/// Data every template is rendered against
fn render_context(diagram: &str) -> Value {
    json!({ "uml_string": diagram })
}

/// Renderer backed by the templates compiled into the library
#[derive(Clone)]
pub struct HtmlTemplateRenderer {
    registry: Handlebars<'static>,
}

impl HtmlTemplateRenderer {
    pub fn new() -> Self {
        let mut registry = Handlebars::new();
        for template in Template::ALL {
            let source = builtin_source(template);
            if let Err(err) = registry.register_template_string(template.id(), source) {
                error!(template = %template, error = %err, "Built-in template failed to compile");
            }
        }
        Self { registry }
    }
}

impl Default for HtmlTemplateRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for HtmlTemplateRenderer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HtmlTemplateRenderer").finish_non_exhaustive()
    }
}

impl TemplateRenderer for HtmlTemplateRenderer {
    fn render(&self, diagram: &str, template: Template) -> String {
        match self.registry.render(template.id(), &render_context(diagram)) {
            Ok(document) => document,
            Err(err) => {
                // Only reachable if a built-in template failed to compile
                error!(template = %template, error = %err, "Built-in template failed to render");
                diagram.to_string()
            }
        }
    }
}

/// Renderer that reads `{dir}/{template id}.html` on every render
#[derive(Debug, Clone)]
pub struct FileTemplateRenderer {
    dir: PathBuf,
    builtin: HtmlTemplateRenderer,
}

impl FileTemplateRenderer {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self {
            dir: dir.into(),
            builtin: HtmlTemplateRenderer::new(),
        }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Path a template is looked up at
    pub fn template_path(&self, template: Template) -> PathBuf {
        self.dir.join(format!("{}.html", template.id()))
    }

    fn render_file(
        &self,
        path: &Path,
        diagram: &str,
        template: Template,
    ) -> Result<String, String> {
        let mut registry = Handlebars::new();
        registry
            .register_template_file(template.id(), path)
            .map_err(|e| e.to_string())?;
        registry
            .render(template.id(), &render_context(diagram))
            .map_err(|e| e.to_string())
    }
}

impl TemplateRenderer for FileTemplateRenderer {
    fn render(&self, diagram: &str, template: Template) -> String {
        let path = self.template_path(template);
        match self.render_file(&path, diagram, template) {
            Ok(document) => {
                debug!(path = %path.display(), "Rendered directory template");
                document
            }
            Err(err) => {
                warn!(
                    path = %path.display(),
                    error = %err,
                    "Template unusable, using built-in template"
                );
                self.builtin.render(diagram, template)
            }
        }
    }
}
