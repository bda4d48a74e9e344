//! Text-level repair applied to raw input before it reaches the XML parser.

use std::borrow::Cow;
use std::sync::LazyLock;

use regex::{Captures, Regex};

/// Every `&`, capturing the predefined entity or character reference that
/// follows it, if any.
static AMPERSAND: LazyLock<Option<Regex>> = LazyLock::new(|| {
    Regex::new(r"&(amp;|lt;|gt;|quot;|apos;|#[0-9]+;|#x[0-9A-Fa-f]+;)?").ok()
});

/// Escape ampersands that do not start a predefined entity or a character
/// reference.
///
/// Hand-edited and exported workout files often carry a bare `&` in names or
/// text overlays (`Forza & Esplosività`), which strict XML rejects. Existing
/// `&amp;`, `&lt;`, `&gt;`, `&quot;`, `&apos;`, `&#10;` and `&#x9;` style
/// references are left alone; anything else becomes `&amp;`.
pub fn escape_bare_ampersands(input: &str) -> Cow<'_, str> {
    let Some(re) = AMPERSAND.as_ref() else {
        return Cow::Borrowed(input);
    };
    if !input.contains('&') {
        return Cow::Borrowed(input);
    }
    re.replace_all(input, |caps: &Captures<'_>| {
        if caps.get(1).is_some() {
            caps[0].to_string()
        } else {
            "&amp;".to_string()
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bare_ampersand_is_escaped() {
        assert_eq!(
            escape_bare_ampersands("Forza & Esplosività"),
            "Forza &amp; Esplosività"
        );
        assert_eq!(escape_bare_ampersands("a&b&&c"), "a&amp;b&amp;&amp;c");
    }

    #[test]
    fn known_entities_are_kept() {
        let input = "&amp; &lt; &gt; &quot; &apos;";
        assert_eq!(escape_bare_ampersands(input), input);
    }

    #[test]
    fn unknown_entities_are_escaped() {
        assert_eq!(escape_bare_ampersands("&nbsp;"), "&amp;nbsp;");
        assert_eq!(escape_bare_ampersands("&#;"), "&amp;#;");
        assert_eq!(escape_bare_ampersands("&#xZZ;"), "&amp;#xZZ;");
        // A trailing ampersand and a truncated entity.
        assert_eq!(escape_bare_ampersands("x &"), "x &amp;");
        assert_eq!(escape_bare_ampersands("&amp"), "&amp;amp");
    }

    #[test]
    fn character_references_are_kept() {
        let input = "line1&#10;line2&#9;x&#x0D;&#233;";
        assert_eq!(escape_bare_ampersands(input), input);
    }

    #[test]
    fn input_without_ampersand_is_borrowed() {
        assert!(matches!(
            escape_bare_ampersands("<workout_file/>"),
            Cow::Borrowed(_)
        ));
    }
}
