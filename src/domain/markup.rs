//! Row model for the markup-persisted list variant.
//!
//! The persisted form is the rendered fragment itself, one `<li>` per row
//! with an optional `checked` class and a trailing delete affordance:
//!
//! ```text
//! <li class="checked">Buy milk<span>×</span></li>
//! ```
//!
//! Parsing is lenient: well-formed rows are kept, anything between them is
//! dropped.

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Row {
    pub text: String,
    pub checked: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MarkupList {
    rows: Vec<Row>,
}

impl MarkupList {
    pub fn new() -> Self {
        Self::default()
    }

    /// Rebuild the list from a stored fragment. `None` (absent key) means
    /// an empty list.
    pub fn parse(fragment: Option<&str>) -> Self {
        let mut rows = Vec::new();
        let Some(mut rest) = fragment else {
            return Self { rows };
        };

        while let Some(start) = rest.find("<li") {
            let after_tag = &rest[start..];
            let Some(open_end) = after_tag.find('>') else {
                break;
            };
            let Some(close) = after_tag.find("</li>") else {
                break;
            };
            if close < open_end {
                rest = &after_tag[open_end + 1..];
                continue;
            }
            let open_tag = &after_tag[..open_end];
            let body = &after_tag[open_end + 1..close];
            rows.push(Row {
                text: unescape(body.split("<span").next().unwrap_or(body)),
                checked: open_tag.contains("checked"),
            });
            rest = &after_tag[close + "</li>".len()..];
        }

        Self { rows }
    }

    /// Serialize the list back to the stored fragment form.
    pub fn render(&self) -> String {
        let mut out = String::new();
        for row in &self.rows {
            if row.checked {
                out.push_str("<li class=\"checked\">");
            } else {
                out.push_str("<li>");
            }
            out.push_str(&escape(&row.text));
            out.push_str("<span>\u{d7}</span></li>");
        }
        out
    }

    pub fn push(&mut self, text: &str) {
        self.rows.push(Row {
            text: text.to_string(),
            checked: false,
        });
    }

    /// Toggle the checked state of the row at `index`; returns false when
    /// the index is out of range.
    pub fn toggle(&mut self, index: usize) -> bool {
        match self.rows.get_mut(index) {
            Some(row) => {
                row.checked = !row.checked;
                true
            }
            None => false,
        }
    }

    /// Remove the row at `index`; returns false when out of range.
    pub fn remove(&mut self, index: usize) -> bool {
        if index < self.rows.len() {
            self.rows.remove(index);
            true
        } else {
            false
        }
    }

    pub fn rows(&self) -> &[Row] {
        &self.rows
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }
}

fn escape(text: &str) -> String {
    text.replace('&', "&amp;").replace('<', "&lt;").replace('>', "&gt;")
}

fn unescape(text: &str) -> String {
    text.replace("&lt;", "<").replace("&gt;", ">").replace("&amp;", "&")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_parse_round_trip() {
        let mut list = MarkupList::new();
        list.push("Buy milk");
        list.push("Walk dog");
        list.toggle(0);

        let fragment = list.render();
        let reloaded = MarkupList::parse(Some(&fragment));
        assert_eq!(reloaded, list);
    }

    #[test]
    fn test_render_is_stable() {
        let mut list = MarkupList::new();
        list.push("Buy milk");
        let once = list.render();
        let twice = MarkupList::parse(Some(&once)).render();
        assert_eq!(once, twice);
    }

    #[test]
    fn test_parse_absent_is_empty() {
        assert!(MarkupList::parse(None).is_empty());
        assert!(MarkupList::parse(Some("")).is_empty());
    }

    #[test]
    fn test_parse_checked_class() {
        let list = MarkupList::parse(Some(
            "<li class=\"checked\">done<span>\u{d7}</span></li><li>open<span>\u{d7}</span></li>",
        ));
        assert_eq!(list.len(), 2);
        assert!(list.rows()[0].checked);
        assert_eq!(list.rows()[0].text, "done");
        assert!(!list.rows()[1].checked);
        assert_eq!(list.rows()[1].text, "open");
    }

    #[test]
    fn test_parse_drops_junk_between_rows() {
        let list = MarkupList::parse(Some(
            "garbage<li>a<span>\u{d7}</span></li><div>nope</div><li>b<span>\u{d7}</span></li>trailing",
        ));
        assert_eq!(list.len(), 2);
        assert_eq!(list.rows()[0].text, "a");
        assert_eq!(list.rows()[1].text, "b");
    }

    #[test]
    fn test_parse_tolerates_malformed_value() {
        assert!(MarkupList::parse(Some("<li unterminated")).is_empty());
        assert!(MarkupList::parse(Some("not markup at all")).is_empty());
    }

    #[test]
    fn test_escaped_text_round_trips() {
        let mut list = MarkupList::new();
        list.push("a < b & c > d");
        let reloaded = MarkupList::parse(Some(&list.render()));
        assert_eq!(reloaded.rows()[0].text, "a < b & c > d");
    }

    #[test]
    fn test_toggle_and_remove_out_of_range() {
        let mut list = MarkupList::new();
        list.push("only");
        assert!(list.toggle(0));
        assert!(!list.toggle(1));
        assert!(!list.remove(5));
        assert!(list.remove(0));
        assert!(list.is_empty());
    }
}
