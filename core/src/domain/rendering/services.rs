use crate::domain::rendering::{
    entities::{DisplayBlock, DisplayItem, ParsedField},
    ports::ResultRenderer,
};

/// Line-oriented `label: value` parser. Purely syntactic: values are never
/// checked for plausibility.
#[derive(Debug, Clone, Copy, Default)]
pub struct LineResultRenderer;

impl ResultRenderer for LineResultRenderer {
    fn render(&self, text: &str) -> DisplayBlock {
        parse_generation_result(text)
    }
}

pub fn parse_generation_result(text: &str) -> DisplayBlock {
    DisplayBlock::new(text.lines().filter_map(parse_line).collect())
}

/// `None` for blank lines, which are dropped entirely.
pub fn parse_line(line: &str) -> Option<DisplayItem> {
    let line = line.trim();
    if line.is_empty() {
        return None;
    }

    let item = match line.split_once(':') {
        Some((label, value)) if !label.trim().is_empty() && !value.trim().is_empty() => {
            DisplayItem::Field(ParsedField::new(label.trim(), value.trim()))
        }
        _ => DisplayItem::Text(line.to_string()),
    };

    Some(item)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn field(label: &str, value: &str) -> DisplayItem {
        DisplayItem::Field(ParsedField::new(label, value))
    }

    fn text(line: &str) -> DisplayItem {
        DisplayItem::Text(line.to_string())
    }

    #[test]
    fn test_parses_label_value_lines_and_skips_blank_ones() {
        let block = LineResultRenderer.render("Food: Salad\nCalories: 350 kcal\n\nNote: estimate");

        assert_eq!(
            block.items,
            vec![
                field("Food", "Salad"),
                field("Calories", "350 kcal"),
                field("Note", "estimate"),
            ]
        );
    }

    #[test]
    fn test_line_without_colon_is_kept_as_text() {
        let block = parse_generation_result("Protein: 25g\nplease review\nFat: 15g");

        assert_eq!(
            block.items,
            vec![field("Protein", "25g"), text("please review"), field("Fat", "15g")]
        );
    }

    #[test]
    fn test_empty_label_or_value_is_kept_as_text() {
        let block = parse_generation_result(":orphan value\nDangling label:\n  :  ");

        assert_eq!(
            block.items,
            vec![text(":orphan value"), text("Dangling label:"), text(":")]
        );
    }

    #[test]
    fn test_splits_on_first_colon_only() {
        let block = parse_generation_result("Served at: 12:30");

        assert_eq!(block.items, vec![field("Served at", "12:30")]);
    }

    #[test]
    fn test_whitespace_and_crlf_are_trimmed() {
        let block = parse_generation_result("  Carbs :  30g  \r\n\t\r\n   Looks healthy   \r\n");

        assert_eq!(block.items, vec![field("Carbs", "30g"), text("Looks healthy")]);
    }

    #[test]
    fn test_values_are_not_validated() {
        let block = parse_generation_result("Calories: about a lot");

        assert_eq!(block.items, vec![field("Calories", "about a lot")]);
    }

    #[test]
    fn test_blank_input_renders_nothing() {
        assert!(parse_generation_result("").is_empty());
        assert!(parse_generation_result("\n \n\t\n").is_empty());
    }

    #[test]
    fn test_html_bolds_labels_and_escapes_content() {
        let block = parse_generation_result("Food: Mac & <cheese>\nplease review");

        let html = block.to_html();
        assert!(html.contains("<p><strong>Food:</strong> Mac &amp; &lt;cheese&gt;</p>"));
        assert!(html.contains("<p>please review</p>"));
    }

    #[test]
    fn test_plain_display_keeps_line_order() {
        let block = parse_generation_result("Food: Salad\n\nplease review\nFat: 15g");

        assert_eq!(block.to_string(), "Food: Salad\nplease review\nFat: 15g");
    }
}
