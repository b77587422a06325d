//! Template generation for new frame documents

use chrono::{DateTime, Utc};
use rust_embed::Embed;
use tera::Tera;
use thiserror::Error;

use crate::core::config::{Config, Limits};
use crate::core::frame::{ConsistencyRule, ParameterName};

#[derive(Embed)]
#[folder = "templates/"]
struct EmbeddedTemplates;

const FRAME_TEMPLATE: &str = "frame.yaml.tera";

/// Context for template generation
#[derive(Debug, Clone)]
pub struct TemplateContext {
    pub created: DateTime<Utc>,
    pub title: Option<String>,
    pub limits: Limits,
    pub rule: ConsistencyRule,
    pub has_substrate: bool,
    pub has_stand: bool,
}

impl TemplateContext {
    pub fn new(config: &Config) -> Self {
        Self {
            created: Utc::now(),
            title: None,
            limits: config.limits.clone(),
            rule: config.rule,
            has_substrate: false,
            has_stand: false,
        }
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn with_substrate(mut self, has_substrate: bool) -> Self {
        self.has_substrate = has_substrate;
        self
    }

    pub fn with_stand(mut self, has_stand: bool) -> Self {
        self.has_stand = has_stand;
        self
    }

    /// Title as a single line; comments and scalars can't span lines
    fn title_line(&self) -> String {
        self.title
            .as_deref()
            .unwrap_or("Untitled frame")
            .replace(['\r', '\n'], " ")
    }
}

/// Template generator using Tera
pub struct TemplateGenerator {
    tera: Tera,
}

#[derive(Debug, Error)]
pub enum TemplateError {
    #[error("Template rendering error: {0}")]
    RenderError(String),
}

impl TemplateGenerator {
    /// Create a new template generator with embedded templates
    pub fn new() -> Result<Self, TemplateError> {
        let mut tera = Tera::default();

        for file in EmbeddedTemplates::iter() {
            let filename = file.as_ref();
            if let Some(content) = EmbeddedTemplates::get(filename) {
                if let Ok(template_str) = std::str::from_utf8(&content.data) {
                    tera.add_raw_template(filename, template_str)
                        .map_err(|e| TemplateError::RenderError(e.to_string()))?;
                }
            }
        }

        Ok(Self { tera })
    }

    /// Generate a frame document
    pub fn generate_frame(&self, ctx: &TemplateContext) -> Result<String, TemplateError> {
        let title = ctx.title_line();

        let mut context = tera::Context::new();
        context.insert("created", &ctx.created.to_rfc3339());
        context.insert("title", &title);
        context.insert(
            "title_yaml",
            &serde_json::to_string(&title).map_err(|e| TemplateError::RenderError(e.to_string()))?,
        );
        context.insert("rule_requirement", ctx.rule.requirement());
        context.insert("has_substrate", &ctx.has_substrate);
        context.insert("has_stand", &ctx.has_stand);

        for name in ParameterName::ALL {
            let limit = ctx.limits.get(name);
            context.insert(name.as_str(), &number(limit.default));
            context.insert(format!("{}_min", name.as_str()), &number(limit.min));
            context.insert(format!("{}_max", name.as_str()), &number(limit.max));
        }

        // Try to use embedded template, fall back to hardcoded
        if self.tera.get_template_names().any(|n| n == FRAME_TEMPLATE) {
            self.tera
                .render(FRAME_TEMPLATE, &context)
                .map_err(|e| TemplateError::RenderError(e.to_string()))
        } else {
            Ok(self.hardcoded_frame_template(ctx))
        }
    }

    fn hardcoded_frame_template(&self, ctx: &TemplateContext) -> String {
        let title = ctx.title_line();
        let mut out = format!(
            "# Photo frame: {}\n# Created: {}\n\ntitle: {}\n",
            title,
            ctx.created.to_rfc3339(),
            serde_json::to_string(&title).unwrap_or_else(|_| "\"\"".to_string()),
        );

        for name in ParameterName::ALL {
            let limit = ctx.limits.get(name);
            out.push_str(&format!(
                "\n# {} [{}, {}]\n{}: {}\n",
                name.label(),
                number(limit.min),
                number(limit.max),
                name.as_str(),
                number(limit.default)
            ));
        }

        out.push_str(&format!(
            "\nhas_substrate: {}\nhas_stand: {}\n",
            ctx.has_substrate, ctx.has_stand
        ));
        out
    }
}

fn number(value: f64) -> String {
    value.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entities::frame::FrameDocument;

    #[test]
    fn test_template_generates_valid_frame_document() {
        let generator = TemplateGenerator::new().unwrap();
        let ctx = TemplateContext::new(&Config::default())
            .with_title("Hallway \"big\" frame")
            .with_stand(true);

        let yaml = generator.generate_frame(&ctx).unwrap();
        let doc: FrameDocument = serde_yml::from_str(&yaml).unwrap();

        assert_eq!(doc.title.as_deref(), Some("Hallway \"big\" frame"));
        assert_eq!(doc.outer_width, Some(100.0));
        assert_eq!(doc.interval, Some(5.0));
        assert!(doc.has_stand);
        assert!(!doc.has_substrate);
        assert!(yaml.contains("# Wall interval [1, 6]"));
    }

    #[test]
    fn test_hardcoded_fallback_is_valid_frame_document() {
        let generator = TemplateGenerator::new().unwrap();
        let ctx = TemplateContext::new(&Config::default()).with_title("line one\nline two");

        let yaml = generator.hardcoded_frame_template(&ctx);
        let doc: FrameDocument = serde_yml::from_str(&yaml).unwrap();

        assert_eq!(doc.title.as_deref(), Some("line one line two"));
        assert_eq!(doc.outer_height, Some(5.0));
    }
}
