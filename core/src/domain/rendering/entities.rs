use std::fmt;

/// One `label: value` line of oracle output.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedField {
    pub label: String,
    pub value: String,
}

impl ParsedField {
    pub fn new(label: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            value: value.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DisplayItem {
    Field(ParsedField),
    /// A line that did not look like `label: value`, kept verbatim.
    Text(String),
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct DisplayBlock {
    pub items: Vec<DisplayItem>,
}

impl DisplayBlock {
    pub fn new(items: Vec<DisplayItem>) -> Self {
        Self { items }
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn fields(&self) -> impl Iterator<Item = &ParsedField> {
        self.items.iter().filter_map(|item| match item {
            DisplayItem::Field(field) => Some(field),
            DisplayItem::Text(_) => None,
        })
    }

    /// Markup for a results container; labels are wrapped in `<strong>`.
    pub fn to_html(&self) -> String {
        let mut html = String::from("<h2>Analysis Results</h2>\n<div class=\"macro-info\">\n");
        for item in &self.items {
            match item {
                DisplayItem::Field(field) => html.push_str(&format!(
                    "<p><strong>{}:</strong> {}</p>\n",
                    escape_html(&field.label),
                    escape_html(&field.value)
                )),
                DisplayItem::Text(text) => {
                    html.push_str(&format!("<p>{}</p>\n", escape_html(text)))
                }
            }
        }
        html.push_str("</div>");
        html
    }
}

impl fmt::Display for DisplayBlock {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (index, item) in self.items.iter().enumerate() {
            if index > 0 {
                writeln!(f)?;
            }
            match item {
                DisplayItem::Field(field) => write!(f, "{}: {}", field.label, field.value)?,
                DisplayItem::Text(text) => write!(f, "{}", text)?,
            }
        }
        Ok(())
    }
}

fn escape_html(raw: &str) -> String {
    let mut escaped = String::with_capacity(raw.len());
    for c in raw.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}
