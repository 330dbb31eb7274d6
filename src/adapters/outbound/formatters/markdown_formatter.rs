use crate::application::read_models::component_view::{format_number, format_price};
use crate::application::read_models::{
    BuildSummary, CatalogPageView, ComparisonView, ComponentView, FacetSummary, FacetsView,
};
use crate::ports::outbound::ReportFormatter;
use crate::shared::Result;
use std::fmt::Write;

/// Attributes shown in the catalog table's spec column
const KEY_SPEC_LIMIT: usize = 3;

/// Placeholder for an empty cell
const EMPTY_CELL: &str = "-";

/// MarkdownFormatter adapter rendering read models as Markdown tables
pub struct MarkdownFormatter;

impl MarkdownFormatter {
    pub fn new() -> Self {
        Self
    }

    /// Escapes pipe characters and newlines for safe Markdown table rendering
    fn escape_cell(text: &str) -> String {
        text.replace('|', "\\|").replace('\n', " ")
    }

    fn table_header(output: &mut String, columns: &[&str]) {
        output.push_str("| ");
        output.push_str(&columns.join(" | "));
        output.push_str(" |\n|");
        for _ in columns {
            output.push_str("---|");
        }
        output.push('\n');
    }

    fn table_row(output: &mut String, cells: &[String]) {
        let escaped: Vec<String> = cells.iter().map(|c| Self::escape_cell(c)).collect();
        output.push_str("| ");
        output.push_str(&escaped.join(" | "));
        output.push_str(" |\n");
    }

    fn key_specs(component: &ComponentView) -> String {
        let specs: Vec<String> = component
            .attributes
            .iter()
            .take(KEY_SPEC_LIMIT)
            .map(|a| format!("{}: {}", a.label, a.value))
            .collect();
        if specs.is_empty() {
            EMPTY_CELL.to_string()
        } else {
            specs.join(", ")
        }
    }

    fn render_page_summary(output: &mut String, view: &CatalogPageView) {
        let page = &view.page;
        if page.items.is_empty() {
            let _ = writeln!(
                output,
                "No components on page {} ({} matching of {} total).\n",
                page.page, page.total_items, view.catalog_size
            );
            return;
        }
        let first = (page.page - 1) * page.page_size + 1;
        let last = first + page.items.len() - 1;
        let _ = writeln!(
            output,
            "Showing {}-{} of {} matching ({} total), sorted by {}, page {} of {}.\n",
            first,
            last,
            page.total_items,
            view.catalog_size,
            view.sort,
            page.page,
            page.total_pages
        );
    }

    fn render_facet_values(summary: &FacetSummary) -> String {
        match summary {
            FacetSummary::Range {
                min: Some(min),
                max: Some(max),
            } => format!("{} to {}", format_number(*min), format_number(*max)),
            FacetSummary::Range { .. } => EMPTY_CELL.to_string(),
            FacetSummary::Select { options } if options.is_empty() => EMPTY_CELL.to_string(),
            FacetSummary::Select { options } => options
                .iter()
                .map(|o| format!("{} ({})", o.value, o.count))
                .collect::<Vec<_>>()
                .join(", "),
            FacetSummary::Flag { yes, no } => format!("yes {} / no {}", yes, no),
        }
    }

    fn facet_kind(summary: &FacetSummary) -> &'static str {
        match summary {
            FacetSummary::Range { .. } => "range",
            FacetSummary::Select { .. } => "select",
            FacetSummary::Flag { .. } => "flag",
        }
    }

    fn render_build_notes(output: &mut String, summary: &BuildSummary) {
        if summary.selected_count() == 0 {
            return;
        }
        output.push_str("\n## Compatibility\n\n");
        if summary.notes.is_empty() {
            output.push_str("✅ No compatibility issues found.\n");
            return;
        }
        for note in &summary.notes {
            let _ = writeln!(output, "- ⚠️ {}", note);
        }
    }
}

impl Default for MarkdownFormatter {
    fn default() -> Self {
        Self::new()
    }
}

impl ReportFormatter for MarkdownFormatter {
    fn format_page(&self, view: &CatalogPageView) -> Result<String> {
        let mut output = String::new();
        let _ = writeln!(output, "# {} catalog\n", view.category.display_name());
        Self::render_page_summary(&mut output, view);

        if !view.active_filters.is_empty() {
            let _ = writeln!(output, "**Filters:** {}\n", view.active_filters.join("; "));
        }

        if view.page.items.is_empty() {
            return Ok(output);
        }

        Self::table_header(&mut output, &["ID", "Name", "Brand", "Price", "Key specs"]);
        for component in &view.page.items {
            Self::table_row(
                &mut output,
                &[
                    component.id.clone(),
                    component.name.clone(),
                    component.brand.clone(),
                    component.price_display(),
                    Self::key_specs(component),
                ],
            );
        }
        Ok(output)
    }

    fn format_facets(&self, view: &FacetsView) -> Result<String> {
        let mut output = String::new();
        let _ = writeln!(
            output,
            "# {} filters\n\n{} component(s) in the catalog.\n",
            view.category.display_name(),
            view.total_items
        );

        Self::table_header(&mut output, &["Field", "Label", "Kind", "Values", "Missing"]);
        for facet in &view.facets {
            Self::table_row(
                &mut output,
                &[
                    facet.field.clone(),
                    facet.label.clone(),
                    Self::facet_kind(&facet.summary).to_string(),
                    Self::render_facet_values(&facet.summary),
                    facet.missing.to_string(),
                ],
            );
        }
        Ok(output)
    }

    fn format_build(&self, summary: &BuildSummary) -> Result<String> {
        let mut output = String::new();
        output.push_str("# PC Build\n\n");

        Self::table_header(&mut output, &["Category", "Component", "Brand", "Price"]);
        for line in &summary.lines {
            let cells = match &line.component {
                Some(c) => [
                    line.label.clone(),
                    format!("{} ({})", c.name, c.id),
                    c.brand.clone(),
                    c.price_display(),
                ],
                None => [
                    line.label.clone(),
                    EMPTY_CELL.to_string(),
                    EMPTY_CELL.to_string(),
                    EMPTY_CELL.to_string(),
                ],
            };
            Self::table_row(&mut output, &cells);
        }

        let _ = write!(output, "\n**Total:** {}", format_price(Some(summary.total_price)));
        if summary.unpriced_parts > 0 {
            let _ = write!(output, " ({} part(s) without a price)", summary.unpriced_parts);
        }
        output.push('\n');

        if !summary.missing_categories.is_empty() {
            let missing: Vec<&str> = summary
                .missing_categories
                .iter()
                .map(|c| c.display_name())
                .collect();
            let _ = writeln!(output, "\n**Still needed:** {}", missing.join(", "));
        }

        Self::render_build_notes(&mut output, summary);
        Ok(output)
    }

    fn format_comparison(&self, view: &ComparisonView) -> Result<String> {
        let mut output = String::new();
        let _ = writeln!(output, "# {} comparison\n", view.category.display_name());
        if view.columns.is_empty() {
            return Ok(output);
        }

        let mut header = vec!["Spec".to_string()];
        header.extend(view.columns.iter().map(|c| format!("{} ({})", c.name, c.id)));
        let header_refs: Vec<&str> = header.iter().map(String::as_str).collect();
        Self::table_header(&mut output, &header_refs);

        for row in &view.rows {
            let mut cells = vec![row.label.clone()];
            cells.extend(
                row.values
                    .iter()
                    .map(|v| v.clone().unwrap_or_else(|| EMPTY_CELL.to_string())),
            );
            Self::table_row(&mut output, &cells);
        }
        Ok(output)
    }
}
