use std::borrow::Cow;

/// Escape text for use in element content or a quoted attribute value.
pub fn escape(text: &str) -> Cow<'_, str> {
    html_escape::encode_safe(text)
}

/// Wrap a body fragment in a complete HTML document.
///
/// `title` is escaped; `style` and `body` are trusted markup.
pub fn page(title: &str, style: &str, body: &str) -> String {
    format!(
        "<!DOCTYPE html>\n<html>\n<head>\n<meta charset='utf-8'>\n<title>{}</title>\n<style>{}</style>\n</head>\n<body>\n{}\n</body>\n</html>\n",
        escape(title),
        style,
        body
    )
}

pub(crate) const NAV_STYLE: &str = "body { font-family: Arial, sans-serif; background-color: #f0f0f0; text-align: center; } \
a { display: block; padding: 10px; margin: 10px auto; background-color: #007BFF; color: white; text-decoration: none; width: 200px; border-radius: 5px; } \
a:hover { background-color: #0056b3; }";

pub(crate) const TABLE_STYLE: &str = "table { width: 80%; margin: 20px auto; border-collapse: collapse; } \
th, td { border: 1px solid #ddd; padding: 8px; text-align: left; } \
th { background-color: #007BFF; color: white; } \
tr:nth-child(even) { background-color: #f2f2f2; } \
tr:hover { background-color: #ddd; } \
h1 { text-align: center; }";

pub(crate) const FORM_STYLE: &str = "body { font-family: Arial, sans-serif; background-color: #f4f4f4; } \
form { background: #fff; padding: 20px; border-radius: 5px; } \
label { display: block; margin: 10px 0 5px; } \
input[type='text'], select { width: 100%; padding: 8px; margin-bottom: 10px; border: 1px solid #ccc; border-radius: 4px; } \
button { background-color: #28a745; color: white; border: none; padding: 10px; border-radius: 5px; cursor: pointer; } \
table { width: 100%; margin-top: 20px; border-collapse: collapse; } \
th, td { padding: 10px; border: 1px solid #ccc; text-align: left; } \
th { background-color: #f2f2f2; } \
.no-results { margin-top: 20px; color: red; }";
