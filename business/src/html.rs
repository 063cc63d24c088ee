//! HTML export of a loaded grid.
//!
//! Backs the dashboard's "copy as HTML" action. Header names come from the
//! backend schema and are trusted, so they render raw; cell values are user
//! data and go through `escape_html` exactly once.

use autobase_utils::escape_html;

use crate::table::TableGrid;

/// Renders a grid as a plain `<table>` fragment.
pub fn grid_to_html(grid: &TableGrid) -> String {
    let mut html = String::from("<table>\n  <tr>");
    for column in &grid.columns {
        html.push_str("<th>");
        html.push_str(column);
        html.push_str("</th>");
    }
    html.push_str("</tr>\n");

    for row in &grid.rows {
        html.push_str("  <tr>");
        for cell in row {
            html.push_str("<td>");
            html.push_str(&escape_html(cell));
            html.push_str("</td>");
        }
        html.push_str("</tr>\n");
    }

    html.push_str("</table>");
    html
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_grid_to_html_escapes_cells_not_headers() {
        let grid = TableGrid {
            table: "Orders".to_string(),
            columns: vec!["OrderID".to_string(), "Note".to_string()],
            rows: vec![vec!["7".to_string(), "<urgent> & fragile".to_string()]],
        };
        let html = grid_to_html(&grid);
        assert!(html.contains("<th>OrderID</th><th>Note</th>"));
        assert!(html.contains("<td>7</td><td>&lt;urgent&gt; &amp; fragile</td>"));
        assert!(!html.contains("<urgent>"));
    }

    #[test]
    fn test_grid_to_html_empty_grid() {
        let grid = TableGrid {
            table: "Orders".to_string(),
            columns: Vec::new(),
            rows: Vec::new(),
        };
        assert_eq!(grid_to_html(&grid), "<table>\n  <tr></tr>\n</table>");
    }
}
