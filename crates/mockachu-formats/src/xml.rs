//! XML serialization: one `<data>` element per row under a single root.

use mockachu_core::Row;

pub fn to_xml(rows: &[Row]) -> String {
    let mut out = String::from("<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n<root>\n");
    for row in rows {
        out.push_str("  <data>\n");
        for (name, value) in row {
            out.push_str("    <");
            out.push_str(name);
            out.push('>');
            out.push_str(&escape(&value.render()));
            out.push_str("</");
            out.push_str(name);
            out.push_str(">\n");
        }
        out.push_str("  </data>\n");
    }
    out.push_str("</root>\n");
    out
}

fn escape(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}
