use super::columns::Tabular;
use super::layout::{escape, page, TABLE_STYLE};
use std::fmt::Write;

/// Render records as a complete HTML page holding one table.
///
/// Only scalar columns are emitted, in declaration order. The header row uses
/// [`Column::header`](super::Column::header) and every cell is escaped.
pub fn render_table<'a, T, I>(rows: I) -> String
where
    T: Tabular,
    I: IntoIterator<Item = &'a T>,
{
    let mut body = String::new();
    let _ = write!(body, "<h1>{}</h1>\n<table>\n<tr>", escape(T::TITLE));
    for column in T::scalar_columns() {
        let _ = write!(body, "<th>{}</th>", escape(column.header()));
    }
    body.push_str("</tr>\n");

    for record in rows {
        body.push_str("<tr>");
        for column in T::scalar_columns() {
            let text = column.cell(record).to_text();
            let _ = write!(body, "<td>{}</td>", escape(&text));
        }
        body.push_str("</tr>\n");
    }
    body.push_str("</table>\n<a href='/table'>Back to tables</a>");

    page(T::TITLE, TABLE_STYLE, &body)
}
