//! Graph facade
//!
//! Pairs a [`GraphStrategy`] with a [`TemplateRenderer`]: the strategy builds
//! the diagram markup, the renderer turns it into a document.

use tracing::{debug, info_span};

use super::error::Result;
use super::strategy::GraphStrategy;
use super::template::{HtmlTemplateRenderer, TemplateRenderer};
use super::types::Template;

/// Facade that builds a diagram and renders it into a document
pub struct Graph<S, R = HtmlTemplateRenderer> {
    strategy: S,
    renderer: R,
    template: Template,
}

impl<S: GraphStrategy> Graph<S> {
    /// Create a graph that renders with the built-in HTML template
    pub fn new(strategy: S) -> Self {
        Self::with_renderer(strategy, HtmlTemplateRenderer::new())
    }
}

impl<S: GraphStrategy, R: TemplateRenderer> Graph<S, R> {
    /// Create a graph with a custom renderer
    pub fn with_renderer(strategy: S, renderer: R) -> Self {
        Self {
            strategy,
            renderer,
            template: Template::default(),
        }
    }

    pub fn with_template(mut self, template: Template) -> Self {
        self.template = template;
        self
    }

    pub fn strategy(&self) -> &S {
        &self.strategy
    }

    /// Replace the diagram strategy
    pub fn set_strategy(&mut self, strategy: S) {
        self.strategy = strategy;
    }

    pub fn template(&self) -> Template {
        self.template
    }

    /// Build the diagram and render it into the configured template
    pub fn generate(&self) -> Result<String> {
        let span = info_span!(
            "generate",
            kind = self.strategy.diagram_kind(),
            template = %self.template
        );
        let _enter = span.enter();

        let diagram = self.strategy.build()?;
        debug!(diagram_len = diagram.len(), "Built diagram");
        Ok(self.renderer.render(&diagram, self.template))
    }
}
