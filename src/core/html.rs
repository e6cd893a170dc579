// src/core/html.rs
//
// Just enough HTML awareness to refuse a web page posing as CSV.
// A sheet that was unpublished or moved behind a login answers 200 with markup.

/// ASCII-only lowercase; non-ASCII chars pass through untouched.
pub fn to_lower(s: &str) -> String {
    s.chars()
        .map(|c| if c.is_ascii() { c.to_ascii_lowercase() } else { c })
        .collect()
}

/// True for a doctype prologue or any `<html` tag, case-insensitively.
pub fn looks_like_html(text: &str) -> bool {
    let head = text.trim_start_matches('\u{feff}').trim_start();
    if head.len() >= 9 && head.is_char_boundary(9) && head[..9].eq_ignore_ascii_case("<!doctype") {
        return true;
    }
    to_lower(text).contains("<html")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn doctype_and_html_tag_are_html() {
        assert!(looks_like_html("<!DOCTYPE html><html><body>Sign in</body></html>"));
        assert!(looks_like_html("  \n<!doctype html>"));
        assert!(looks_like_html("<HTML lang=\"en\">"));
        assert!(looks_like_html("garbage before <html>"));
    }

    #[test]
    fn csv_is_not_html() {
        assert!(!looks_like_html("Certification #,First,Last,Cert. Exp. Date\n1,A,B,C\n"));
        assert!(!looks_like_html(""));
        assert!(!looks_like_html("<!doc"));
    }
}
