// crates/infra/src/stylesheet.rs
//! Lightweight stylesheet adapter.
//!
//! Splits a CSS text into top-level statements, keeping `@media` rules as
//! addressable units and everything else as opaque text. The scan is
//! comment- and string-aware but deliberately does not interpret the CSS
//! beyond that; re-rendering reproduces the input byte-for-byte minus any
//! removed rules.

use media_split_ports::stylesheet::{MediaRuleDto, StylesheetSource};

#[derive(Debug, Clone)]
enum Statement {
    Media { prelude: String, text: String },
    Other { text: String },
}

/// One parsed CSS unit.
#[derive(Debug, Clone)]
pub struct CssStylesheet {
    statements: Vec<Statement>,
    removed: Vec<bool>,
}

impl CssStylesheet {
    pub fn parse(text: &str) -> Self {
        let statements = split_statements(text);
        let removed = vec![false; statements.len()];
        Self { statements, removed }
    }
}

impl StylesheetSource for CssStylesheet {
    fn media_rules(&self) -> Vec<MediaRuleDto> {
        self.statements
            .iter()
            .enumerate()
            .filter_map(|(index, statement)| match statement {
                Statement::Media { prelude, text } => Some(MediaRuleDto {
                    index,
                    raw_condition: prelude.clone(),
                    css_text: text.clone(),
                }),
                Statement::Other { .. } => None,
            })
            .collect()
    }

    fn remove_rules(&mut self, indices: &[usize]) {
        for &index in indices {
            if let Some(flag) = self.removed.get_mut(index) {
                *flag = true;
            }
        }
    }

    fn render(&self) -> String {
        self.statements
            .iter()
            .zip(&self.removed)
            .filter(|(_, removed)| !**removed)
            .map(|(statement, _)| match statement {
                Statement::Media { text, .. } | Statement::Other { text } => text.as_str(),
            })
            .collect()
    }
}

fn split_statements(text: &str) -> Vec<Statement> {
    let bytes = text.as_bytes();
    let mut statements = Vec::new();
    let mut cursor = 0;
    let mut i = 0;
    let mut depth = 0_usize;

    while i < bytes.len() {
        match bytes[i] {
            b'/' if bytes.get(i + 1) == Some(&b'*') => i = skip_comment(bytes, i),
            b'"' | b'\'' => i = skip_string(bytes, i),
            b'{' => {
                depth += 1;
                i += 1;
            }
            b'}' => {
                depth = depth.saturating_sub(1);
                i += 1;
            }
            b'@' if depth == 0 && is_media_token(bytes, i) => {
                if let Some((prelude, end)) = scan_media_rule(text, i) {
                    if cursor < i {
                        statements.push(Statement::Other { text: text[cursor..i].to_string() });
                    }
                    statements.push(Statement::Media { prelude, text: text[i..end].to_string() });
                    cursor = end;
                    i = end;
                } else {
                    i += 1;
                }
            }
            _ => i += 1,
        }
    }

    if cursor < bytes.len() {
        statements.push(Statement::Other { text: text[cursor..].to_string() });
    }

    statements
}

const MEDIA: &[u8] = b"@media";

fn is_media_token(bytes: &[u8], at: usize) -> bool {
    if bytes.len() < at + MEDIA.len() {
        return false;
    }
    if !bytes[at..at + MEDIA.len()].eq_ignore_ascii_case(MEDIA) {
        return false;
    }
    // Reject longer at-keywords such as a hypothetical `@mediax`.
    match bytes.get(at + MEDIA.len()) {
        Some(next) => !(next.is_ascii_alphanumeric() || *next == b'-' || *next == b'_'),
        None => false,
    }
}

/// From the `@` of a confirmed `@media`, find the prelude and the end of the
/// balanced body. Returns `None` for a statement-style at-rule (`;` before
/// any `{`), which is not a media rule we can address.
fn scan_media_rule(text: &str, start: usize) -> Option<(String, usize)> {
    let bytes = text.as_bytes();
    let mut i = start + MEDIA.len();

    let body_open = loop {
        if i >= bytes.len() {
            return None;
        }
        match bytes[i] {
            b'/' if bytes.get(i + 1) == Some(&b'*') => i = skip_comment(bytes, i),
            b'"' | b'\'' => i = skip_string(bytes, i),
            b'{' => break i,
            b';' => return None,
            _ => i += 1,
        }
    };

    let prelude = text[start + MEDIA.len()..body_open].trim().to_string();

    let mut depth = 1_usize;
    i = body_open + 1;
    while i < bytes.len() && depth > 0 {
        match bytes[i] {
            b'/' if bytes.get(i + 1) == Some(&b'*') => i = skip_comment(bytes, i),
            b'"' | b'\'' => i = skip_string(bytes, i),
            b'{' => {
                depth += 1;
                i += 1;
            }
            b'}' => {
                depth -= 1;
                i += 1;
            }
            _ => i += 1,
        }
    }

    // An unterminated body swallows the rest of the file.
    Some((prelude, i))
}

fn skip_comment(bytes: &[u8], at: usize) -> usize {
    let mut i = at + 2;
    while i + 1 < bytes.len() {
        if bytes[i] == b'*' && bytes[i + 1] == b'/' {
            return i + 2;
        }
        i += 1;
    }
    bytes.len()
}

fn skip_string(bytes: &[u8], at: usize) -> usize {
    let delim = bytes[at];
    let mut i = at + 1;
    while i < bytes.len() {
        match bytes[i] {
            b'\\' => i += 2,
            b if b == delim => return i + 1,
            _ => i += 1,
        }
    }
    bytes.len()
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = "\
.base { color: black }

@media (max-width: 600px) {
  .base { color: red }
}

/* @media (min-width: 1px) { not a rule } */

@media screen and (min-width: 768px) {
  .base { content: \"}@media{\" }
}
";

    #[test]
    fn finds_top_level_media_rules() {
        let sheet = CssStylesheet::parse(SAMPLE);
        let rules = sheet.media_rules();
        assert_eq!(rules.len(), 2);
        assert_eq!(rules[0].raw_condition, "(max-width: 600px)");
        assert_eq!(rules[1].raw_condition, "screen and (min-width: 768px)");
        assert!(rules[1].css_text.contains("content"));
    }

    #[test]
    fn render_roundtrips_untouched_sheet() {
        let sheet = CssStylesheet::parse(SAMPLE);
        assert_eq!(sheet.render(), SAMPLE);
    }

    #[test]
    fn removal_drops_only_the_addressed_rule() {
        let mut sheet = CssStylesheet::parse(SAMPLE);
        let rules = sheet.media_rules();
        sheet.remove_rules(&[rules[0].index]);
        let rendered = sheet.render();
        assert!(!rendered.contains("max-width: 600px"));
        assert!(rendered.contains("min-width: 768px"));
        assert!(rendered.contains(".base { color: black }"));
    }

    #[test]
    fn nested_media_is_not_top_level() {
        let css = "@supports (display: grid) { @media (max-width: 600px) { .a { } } }";
        let sheet = CssStylesheet::parse(css);
        assert!(sheet.media_rules().is_empty());
        assert_eq!(sheet.render(), css);
    }

    #[test]
    fn nested_braces_stay_inside_the_rule() {
        let css = "@media (max-width: 600px) { .a { } .b { } } .after { }";
        let sheet = CssStylesheet::parse(css);
        let rules = sheet.media_rules();
        assert_eq!(rules.len(), 1);
        assert_eq!(rules[0].css_text, "@media (max-width: 600px) { .a { } .b { } }");
    }

    #[test]
    fn unterminated_body_takes_the_rest() {
        let css = "@media (max-width: 600px) { .a { }";
        let sheet = CssStylesheet::parse(css);
        let rules = sheet.media_rules();
        assert_eq!(rules.len(), 1);
        assert_eq!(rules[0].css_text, css);
    }

    #[test]
    fn media_in_string_is_ignored() {
        let css = ".a { content: \"@media (max-width: 1px) {}\" }";
        let sheet = CssStylesheet::parse(css);
        assert!(sheet.media_rules().is_empty());
    }
}
