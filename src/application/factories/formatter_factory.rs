use crate::adapters::outbound::formatters::{JsonFormatter, MarkdownFormatter};
use crate::application::dto::OutputFormat;
use crate::ports::outbound::ReportFormatter;

/// Factory for creating report formatters
///
/// Picks the formatter adapter for an [`OutputFormat`] so the CLI never names
/// adapter types directly.
pub struct FormatterFactory;

impl FormatterFactory {
    /// # Examples
    /// ```
    /// use pc_builder::application::dto::OutputFormat;
    /// use pc_builder::application::factories::FormatterFactory;
    ///
    /// let formatter = FormatterFactory::create(OutputFormat::Json);
    /// ```
    pub fn create(format: OutputFormat) -> Box<dyn ReportFormatter> {
        match format {
            OutputFormat::Json => Box::new(JsonFormatter::new()),
            OutputFormat::Markdown => Box::new(MarkdownFormatter::new()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::read_models::ComparisonView;
    use crate::catalog::domain::Category;

    fn empty_comparison() -> ComparisonView {
        ComparisonView::from_records(Category::Case, &[])
    }

    #[test]
    fn test_create_json_formatter() {
        let formatter = FormatterFactory::create(OutputFormat::Json);
        let output = formatter.format_comparison(&empty_comparison()).unwrap();
        assert!(output.trim_start().starts_with('{'));
    }

    #[test]
    fn test_create_markdown_formatter() {
        let formatter = FormatterFactory::create(OutputFormat::Markdown);
        let output = formatter.format_comparison(&empty_comparison()).unwrap();
        assert!(output.starts_with("# "));
    }
}
