use serde::Serialize;
use tera::{Context, Tera};

use crate::error::ReportError;

/// Render a Tera template with any serializable context.
///
/// The `template_content` is the raw template string (Jinja2 syntax).
/// The context's fields become the template variables.
pub fn render_template<T: Serialize>(
    template_name: &str,
    template_content: &str,
    context: &T,
) -> Result<String, ReportError> {
    let mut tera = Tera::default();
    tera.add_raw_template(template_name, template_content)
        .map_err(|e| ReportError::TemplateParse(e.to_string()))?;

    // Convert the context struct to Tera variables via serde_json
    let value = serde_json::to_value(context)?;
    let context = Context::from_value(value)
        .map_err(|e| ReportError::TemplateRender(e.to_string()))?;

    let rendered = tera.render(template_name, &context)?;
    Ok(rendered)
}
