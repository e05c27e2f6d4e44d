//! Print-oriented HTML rendering for PDF output.
//!
//! Emits a minimal, self-contained document the PDF renderer paginates.
//! Formatting only; the caller supplies already-aggregated rows.

/// Escape text for HTML body/attribute context.
pub fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

/// Render a titled table as a printable HTML document.
pub fn render_table(title: &str, headers: &[&str], rows: &[Vec<String>]) -> String {
    let mut out = String::new();
    out.push_str("<!DOCTYPE html>\n<html>\n<head>\n<meta charset=\"utf-8\">\n");
    out.push_str(&format!("<title>{}</title>\n", escape_html(title)));
    out.push_str(
        "<style>\
         body{font-family:serif;margin:2rem}\
         h1{font-size:1.2rem}\
         table{border-collapse:collapse;width:100%}\
         th,td{border:1px solid #444;padding:4px 8px;text-align:left}\
         th{background:#eee}\
         </style>\n</head>\n<body>\n",
    );
    out.push_str(&format!("<h1>{}</h1>\n", escape_html(title)));
    out.push_str("<table>\n<thead><tr>");
    for header in headers {
        out.push_str(&format!("<th>{}</th>", escape_html(header)));
    }
    out.push_str("</tr></thead>\n<tbody>\n");
    for row in rows {
        out.push_str("<tr>");
        for cell in row {
            out.push_str(&format!("<td>{}</td>", escape_html(cell)));
        }
        out.push_str("</tr>\n");
    }
    out.push_str("</tbody>\n</table>\n</body>\n</html>\n");
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn markup_in_cells_is_escaped() {
        let html = render_table(
            "Report <x>",
            &["name"],
            &[vec!["<script>alert(1)</script>".to_string()]],
        );
        assert!(!html.contains("<script>"));
        assert!(html.contains("&lt;script&gt;"));
        assert!(html.contains("Report &lt;x&gt;"));
    }

    #[test]
    fn renders_headers_and_rows() {
        let html = render_table(
            "AR Aging",
            &["customer", "total"],
            &[vec!["Acme".to_string(), "1000".to_string()]],
        );
        assert!(html.contains("<th>customer</th>"));
        assert!(html.contains("<td>1000</td>"));
    }
}
