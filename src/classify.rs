//! Token exemption rules.
//!
//! Not every upstream token is expanded into grams: tokens the upstream
//! already marked as atomic, and (by default) numeric or CJK runs, are
//! forwarded unchanged. [`is_exempt`] encodes that decision as a pure
//! function of the token and the active [`GramSpec`], so the same inputs
//! always yield the same verdict.
//!
//! The rules are evaluated in order, first match wins:
//!
//! 1. kind `Normal`: already atomic, never re-split
//! 2. kind `NumericOriginal`
//! 3. kind `ChineseOriginal`
//! 4. all-numeric text, unless `include_numeric`
//! 5. text containing any CJK codepoint, unless `include_chinese`
//! 6. otherwise: not exempt, proceed to generation

use crate::config::GramSpec;
use crate::token::{Token, TokenKind};

/// Decide whether `token` bypasses gram generation under `spec`.
pub fn is_exempt(token: &Token, spec: &GramSpec) -> bool {
    // Rules 1-3: upstream tags win regardless of the inclusion flags.
    match token.kind {
        TokenKind::Normal | TokenKind::NumericOriginal | TokenKind::ChineseOriginal => return true,
        TokenKind::Other => {}
    }
    if !spec.include_numeric && is_numeric(&token.text) {
        return true;
    }
    if !spec.include_chinese && contains_cjk(&token.text) {
        return true;
    }
    false
}

/// Check whether `text` is non-empty and consists only of numeric
/// codepoints.
pub fn is_numeric(text: &str) -> bool {
    !text.is_empty() && text.chars().all(|c| c.is_numeric())
}

/// Check whether `text` contains any CJK ideograph.
pub fn contains_cjk(text: &str) -> bool {
    text.chars().any(|c| {
        matches!(c,
            '\u{4E00}'..='\u{9FFF}'   | // CJK Unified Ideographs
            '\u{3400}'..='\u{4DBF}'   | // CJK Extension A
            '\u{F900}'..='\u{FAFF}'   | // CJK Compatibility Ideographs
            '\u{20000}'..='\u{2A6DF}' | // CJK Extension B
            '\u{2A700}'..='\u{2B73F}' | // CJK Extension C
            '\u{2B740}'..='\u{2B81F}' | // CJK Extension D
            '\u{2B820}'..='\u{2CEAF}'   // CJK Extension E
        )
    })
}
