lazy_static::lazy_static! {
    // Named, decimal and hex character references. These are left alone so
    // escaping an already escaped value doesn't double encode it.
    static ref ENTITY: regex::Regex =
        regex::Regex::new("^&(?:[A-Za-z][A-Za-z0-9]*|#[0-9]+|#[xX][0-9A-Fa-f]+);").unwrap();
}

/// Escape a value for use inside a double or single quoted HTML attribute
pub fn escape_attribute(value: &str) -> String {
    let mut escaped = String::with_capacity(value.len());
    for (index, c) in value.char_indices() {
        match c {
            '&' if ENTITY.is_match(&value[index..]) => escaped.push('&'),
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#039;"),
            c => escaped.push(c),
        }
    }
    escaped
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_text_untouched() {
        assert_eq!("A dog", escape_attribute("A dog"));
        assert_eq!("", escape_attribute(""));
    }

    #[test]
    fn test_quotes_and_brackets() {
        assert_eq!(
            "He said &quot;sit&quot; &amp; it&#039;s &lt;b&gt;",
            escape_attribute(r#"He said "sit" & it's <b>"#)
        );
    }

    #[test]
    fn test_existing_entities_not_double_encoded() {
        assert_eq!("Tom &amp; Jerry", escape_attribute("Tom &amp; Jerry"));
        assert_eq!("&#039;&#x27;&quot;", escape_attribute("&#039;&#x27;&quot;"));
        assert_eq!("a&amp;b", escape_attribute("a&b"));
        assert_eq!("&amp;;", escape_attribute("&;"));
    }

    #[test]
    fn test_idempotent() {
        let once = escape_attribute(r#"x" onerror="alert('1')"#);
        assert_eq!(once, escape_attribute(&once));
        assert!(!once.contains('"'));
    }

    #[test]
    fn test_url_query_strings() {
        assert_eq!(
            "https://cdn.example.com/a.jpg?w=300&amp;h=200",
            escape_attribute("https://cdn.example.com/a.jpg?w=300&h=200")
        );
    }
}
