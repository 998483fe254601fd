//! Named-field injection into the `define('NAME', value)` statements of the entry file.

use crate::error::SiteError;
use std::fmt;
use std::ops::Range;

const DEFINE: &str = "define(";

/// Entry file constants stamped for production.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryField {
    AppPath,
    CacheId,
    SiteId,
    DebugMode,
}

impl EntryField {
    pub const ALL: [Self; 4] = [Self::AppPath, Self::CacheId, Self::SiteId, Self::DebugMode];

    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::AppPath => "APP_PATH",
            Self::CacheId => "CACHE_ID",
            Self::SiteId => "SITE_ID",
            Self::DebugMode => "DEBUG_MODE",
        }
    }
}

impl fmt::Display for EntryField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Values for one production entry file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EntryValues {
    pub app_path: String,
    pub cache_id: String,
    pub site_id: String,
}

impl EntryValues {
    fn literal(&self, field: EntryField) -> String {
        match field {
            EntryField::AppPath => quote(&self.app_path),
            EntryField::CacheId => quote(&self.cache_id),
            EntryField::SiteId => quote(&self.site_id),
            EntryField::DebugMode => "false".to_owned(),
        }
    }

    /// Stamps every field into `template`.
    ///
    /// # Errors
    /// Returns [`SiteError::MissingField`] for the first field with no `define` statement.
    pub fn apply(&self, template: &str) -> Result<String, SiteError> {
        EntryField::ALL
            .into_iter()
            .try_fold(template.to_owned(), |text, field| inject(&text, field, &self.literal(field)))
    }
}

/// Replaces the value of every `define('<field>', ...)` in `source` with `literal`.
///
/// # Errors
/// Returns [`SiteError::MissingField`] if no statement defines `field`.
pub fn inject(source: &str, field: EntryField, literal: &str) -> Result<String, SiteError> {
    let spans = value_spans(source, field.name());
    if spans.is_empty() {
        return Err(SiteError::MissingField { field: field.name(), context: None });
    }

    let mut out = source.to_owned();
    for span in spans.into_iter().rev() {
        out.replace_range(span, literal);
    }
    Ok(out)
}

/// Single-quoted literal with `\` and `'` escaped.
fn quote(value: &str) -> String {
    format!("'{}'", value.replace('\\', "\\\\").replace('\'', "\\'"))
}

fn value_spans(source: &str, name: &str) -> Vec<Range<usize>> {
    let mut spans = Vec::new();
    let mut offset = 0;
    while let Some(found) = source[offset..].find(DEFINE) {
        offset += found + DEFINE.len();
        if let Some(span) = define_value(source.as_bytes(), offset, name) {
            offset = span.end;
            spans.push(span);
        }
    }
    spans
}

// Every delimiter matched here is ASCII, so returned offsets are char boundaries.
fn define_value(bytes: &[u8], pos: usize, name: &str) -> Option<Range<usize>> {
    let mut pos = skip_whitespace(bytes, pos);
    let quote = *bytes.get(pos)?;
    if quote != b'\'' && quote != b'"' {
        return None;
    }
    pos += 1;
    if !bytes.get(pos..)?.starts_with(name.as_bytes()) {
        return None;
    }
    pos += name.len();
    if bytes.get(pos) != Some(&quote) {
        return None;
    }
    pos = skip_whitespace(bytes, pos + 1);
    if bytes.get(pos) != Some(&b',') {
        return None;
    }
    let start = skip_whitespace(bytes, pos + 1);
    let end = value_end(bytes, start)?;
    Some(start..end)
}

/// End of the value expression: the `)` closing the `define(` or a top-level `,`, with
/// trailing whitespace excluded. Nested parentheses and quoted strings are skipped over.
fn value_end(bytes: &[u8], start: usize) -> Option<usize> {
    let mut depth = 0usize;
    let mut i = start;
    let close = loop {
        match *bytes.get(i)? {
            quote @ (b'\'' | b'"') => i = string_end(bytes, i, quote)?,
            b'(' | b'[' => {
                depth += 1;
                i += 1;
            },
            b')' | b']' if depth > 0 => {
                depth -= 1;
                i += 1;
            },
            b')' | b',' if depth == 0 => break i,
            _ => i += 1,
        }
    };
    let trimmed = bytes[start..close].iter().rposition(|b| !b.is_ascii_whitespace());
    Some(trimmed.map_or(start, |last| start + last + 1))
}

/// Offset just past the string literal opened at `open`.
fn string_end(bytes: &[u8], open: usize, quote: u8) -> Option<usize> {
    let mut i = open + 1;
    loop {
        match *bytes.get(i)? {
            b'\\' => i += 2,
            b if b == quote => return Some(i + 1),
            _ => i += 1,
        }
    }
}

fn skip_whitespace(bytes: &[u8], mut pos: usize) -> usize {
    while bytes.get(pos).is_some_and(u8::is_ascii_whitespace) {
        pos += 1;
    }
    pos
}

#[cfg(test)]
mod tests {
    use super::*;

    const TEMPLATE: &str = "<?php\n\
        define('APP_PATH', '');\n\
        define('CACHE_ID', '');\n\
        define( \"SITE_ID\" , 'placeholder' );\n\
        define('DEBUG_MODE', true);\n\
        define('VERSION', 3);\n";

    fn values() -> EntryValues {
        EntryValues { app_path: "/srv/hm3/".into(), cache_id: "abc".into(), site_id: "xyz".into() }
    }

    #[test]
    fn stamps_every_field() {
        let out = values().apply(TEMPLATE).unwrap();
        assert!(out.contains("define('APP_PATH', '/srv/hm3/');"));
        assert!(out.contains("define('CACHE_ID', 'abc');"));
        assert!(out.contains("define( \"SITE_ID\" , 'xyz' );"));
        assert!(out.contains("define('DEBUG_MODE', false);"));
        assert!(out.contains("define('VERSION', 3);"));
    }

    #[test]
    fn replaces_any_existing_value() {
        let source = "define('DEBUG_MODE', 'yes, (really)'); define('DEBUG_MODE',1);";
        let out = inject(source, EntryField::DebugMode, "false").unwrap();
        assert_eq!(out, "define('DEBUG_MODE', false); define('DEBUG_MODE',false);");
    }

    #[test]
    fn expression_values_are_replaced_whole() {
        let source = "define('APP_PATH', dirname(__FILE__).'/');\n";
        let out = inject(source, EntryField::AppPath, "'/srv/'").unwrap();
        assert_eq!(out, "define('APP_PATH', '/srv/');\n");

        let source = "define('CACHE_ID', md5(implode(',', [1, 2])) . ')');";
        let out = inject(source, EntryField::CacheId, "'x'").unwrap();
        assert_eq!(out, "define('CACHE_ID', 'x');");
    }

    #[test]
    fn case_flag_argument_is_kept() {
        let out = inject("define('DEBUG_MODE', true, false);", EntryField::DebugMode, "false")
            .unwrap();
        assert_eq!(out, "define('DEBUG_MODE', false, false);");
    }

    #[test]
    fn missing_field_is_an_error() {
        let err = inject("define('APP_PATH', '');", EntryField::SiteId, "'x'").unwrap_err();
        assert!(matches!(err, SiteError::MissingField { field: "SITE_ID", .. }));
    }

    #[test]
    fn similar_names_are_not_matched() {
        let source = "define('SITE_ID_OLD', 'a'); define('SITE_ID', 'b');";
        let out = inject(source, EntryField::SiteId, "'c'").unwrap();
        assert_eq!(out, "define('SITE_ID_OLD', 'a'); define('SITE_ID', 'c');");
    }

    #[test]
    fn quoted_values_are_escaped() {
        assert_eq!(quote(r"C:\hm3\it's"), r"'C:\\hm3\\it\'s'");
    }
}
