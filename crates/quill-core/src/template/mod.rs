//! Fixed prompt-template registry and substitution engine.
//!
//! Five canned code-oriented prompt shapes, each taking a `language` and
//! a `code` parameter. Templates are compiled-in constants; there is no
//! runtime registration.

mod registry;

use std::collections::HashMap;

use quill_types::error::TemplateError;

pub use registry::PromptTemplate;

/// Lookup and rendering over the fixed template registry.
pub struct TemplateEngine {
    templates: &'static [PromptTemplate],
}

impl TemplateEngine {
    pub fn new() -> Self {
        Self {
            templates: registry::TEMPLATES,
        }
    }

    /// Template names in registration order.
    pub fn list_names(&self) -> Vec<&'static str> {
        self.templates.iter().map(|t| t.name).collect()
    }

    /// Look up a template by name.
    pub fn get(&self, name: &str) -> Option<&'static PromptTemplate> {
        self.templates.iter().find(|t| t.name == name)
    }

    /// Render a template with the given parameter values.
    ///
    /// Every required parameter must be present and non-empty; extra
    /// parameters are ignored. Substitution is verbatim -- the rendered
    /// string goes to the model as-is, so callers own their input.
    pub fn render(
        &self,
        name: &str,
        parameters: &HashMap<String, String>,
    ) -> Result<String, TemplateError> {
        let template = self
            .get(name)
            .ok_or_else(|| TemplateError::UnknownTemplate(name.to_string()))?;

        let mut values = HashMap::with_capacity(template.parameters.len());
        for &parameter in template.parameters {
            let value = parameters
                .get(parameter)
                .filter(|v| !v.is_empty())
                .ok_or_else(|| TemplateError::MissingParameter {
                    template: name.to_string(),
                    parameter,
                })?;
            values.insert(parameter, value.as_str());
        }

        // Single pass over the body: placeholders are resolved against the
        // original template text only, so substituted values are never
        // rescanned for further placeholders.
        let mut rendered = String::with_capacity(template.body.len());
        let mut rest = template.body;
        while let Some(open) = rest.find('{') {
            rendered.push_str(&rest[..open]);
            let tail = &rest[open..];
            if let Some(close) = tail.find('}') {
                if let Some(&value) = values.get(&tail[1..close]) {
                    rendered.push_str(value);
                    rest = &tail[close + 1..];
                    continue;
                }
            }
            // Not a known placeholder; the brace is literal text.
            rendered.push('{');
            rest = &tail[1..];
        }
        rendered.push_str(rest);
        Ok(rendered)
    }
}

impl Default for TemplateEngine {
    fn default() -> Self {
        Self::new()
    }
}
