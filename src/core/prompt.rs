/// Marker in [`PROMPT_TEMPLATE`] replaced by the contact text
pub const PLUGIN_DATA_PLACEHOLDER: &str = "{plugin_data}";

/// Fixed business context sent with every contact
pub const PROMPT_TEMPLATE: &str = "Analyze how well this LinkedIn contact matches my export business \
(core business: women's apparel export; target markets: Europe and North America; \
buyer types: wholesalers and retailers). Output: 1. match score (0-100) \
2. key matching points 3. mismatching points, clearly formatted. \
Contact information: {plugin_data}";

/// Number of characters of plugin data written to the log
pub const PREVIEW_CHARS: usize = 50;

/// Build the upstream query for a contact.
///
/// The contact text is inserted verbatim into the single placeholder of the
/// template; placeholder-like text inside the contact is left alone.
pub fn build_query(plugin_data: &str) -> String {
    PROMPT_TEMPLATE.replacen(PLUGIN_DATA_PLACEHOLDER, plugin_data, 1)
}

/// First `max_chars` characters of `text`, cut on a char boundary
pub fn preview(text: &str, max_chars: usize) -> &str {
    match text.char_indices().nth(max_chars) {
        Some((idx, _)) => &text[..idx],
        None => text,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_template_has_one_placeholder() {
        assert_eq!(PROMPT_TEMPLATE.matches(PLUGIN_DATA_PLACEHOLDER).count(), 1);
    }

    #[test]
    fn test_build_query_substitutes_once() {
        let query = build_query("X");
        let (prefix, suffix) = PROMPT_TEMPLATE.split_once(PLUGIN_DATA_PLACEHOLDER).unwrap();

        assert_eq!(query, format!("{}X{}", prefix, suffix));
        assert!(!query.contains(PLUGIN_DATA_PLACEHOLDER));
        assert!(query.contains("women's apparel export"));
        assert!(query.contains("match score (0-100)"));
    }

    #[test]
    fn test_build_query_is_verbatim() {
        let data = "Ann \"Q\" <b>Lee</b>\n{plugin_data} & co.\\";
        let query = build_query(data);

        assert!(query.ends_with(data));
        assert_eq!(query.matches(data).count(), 1);
    }

    #[test]
    fn test_preview_truncates_on_chars() {
        assert_eq!(preview("abc", 50), "abc");
        assert_eq!(preview("abcdef", 3), "abc");
        assert_eq!(preview("李小龙，采购经理", 3), "李小龙");
        assert_eq!(preview("", 3), "");
    }
}
