//! HTML serialization: a standalone table document.

use mockachu_core::Row;

const STYLE: &str = "table { border-collapse: collapse; width: 100%; }\n\
th, td { border: 1px solid #ddd; padding: 8px; text-align: left; }\n\
th { background-color: #f2f2f2; font-weight: bold; }\n\
tr:nth-child(even) { background-color: #f9f9f9; }\n";

pub fn to_html(rows: &[Row]) -> String {
    let mut out = String::from("<!DOCTYPE html>\n<html>\n<head>\n<title>Mock Data</title>\n");
    out.push_str("<style>\n");
    out.push_str(STYLE);
    out.push_str("</style>\n</head>\n<body>\n<h2>Mock Data Table</h2>\n");

    let Some(first) = rows.first() else {
        out.push_str("<p>No data generated</p>\n</body>\n</html>\n");
        return out;
    };

    out.push_str("<table>\n  <thead>\n    <tr>\n");
    for name in first.keys() {
        out.push_str(&format!("      <th>{}</th>\n", escape(name)));
    }
    out.push_str("    </tr>\n  </thead>\n  <tbody>\n");

    for row in rows {
        out.push_str("    <tr>\n");
        for value in row.values() {
            out.push_str(&format!("      <td>{}</td>\n", escape(&value.render())));
        }
        out.push_str("    </tr>\n");
    }
    out.push_str("  </tbody>\n</table>\n</body>\n</html>\n");
    out
}

fn escape(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}
