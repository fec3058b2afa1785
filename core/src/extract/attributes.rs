//! # Attribute Operations
//!
//! Reads `#[serde(...)]` attributes and `///` docs off declaration nodes.

use heck::{
    ToKebabCase, ToLowerCamelCase, ToShoutyKebabCase, ToShoutySnakeCase, ToSnakeCase,
    ToUpperCamelCase,
};
use ra_ap_syntax::ast;
use ra_ap_syntax::{AstNode, SyntaxKind, SyntaxNode};
use regex::Regex;
use std::sync::OnceLock;

/// Serde settings found on a single node.
#[derive(Default, Debug, PartialEq, Eq)]
pub struct AttrInfo {
    /// The rename value if present.
    pub rename: Option<String>,
    /// The `rename_all` rule if present, e.g. `camelCase`.
    pub rename_all: Option<String>,
    /// Whether the skip flag was found.
    pub is_skipped: bool,
}

/// Collects the `serde` attributes attached to `node`.
pub fn extract_attributes(node: &SyntaxNode) -> AttrInfo {
    let mut info = AttrInfo::default();

    for attr in node.children().filter_map(ast::Attr::cast) {
        let Some(meta) = attr.meta() else { continue };
        let is_serde = meta.path().is_some_and(|p| p.to_string() == "serde");
        if !is_serde {
            continue;
        }
        if let Some(tt) = meta.token_tree() {
            parse_attribute_content(&tt.to_string(), &mut info);
        }
    }

    info
}

fn parse_attribute_content(content: &str, info: &mut AttrInfo) {
    static RENAME_RE: OnceLock<Regex> = OnceLock::new();
    static RENAME_ALL_RE: OnceLock<Regex> = OnceLock::new();
    static SKIP_RE: OnceLock<Regex> = OnceLock::new();

    let rename_re =
        RENAME_RE.get_or_init(|| Regex::new(r#"\brename\s*=\s*"([^"]+)""#).expect("Invalid regex"));
    let rename_all_re = RENAME_ALL_RE
        .get_or_init(|| Regex::new(r#"\brename_all\s*=\s*"([^"]+)""#).expect("Invalid regex"));
    let skip_re = SKIP_RE.get_or_init(|| Regex::new(r"\bskip\b").expect("Invalid regex"));

    if let Some(val) = rename_re.captures(content).and_then(|c| c.get(1)) {
        info.rename = Some(val.as_str().to_string());
    }

    if let Some(val) = rename_all_re.captures(content).and_then(|c| c.get(1)) {
        info.rename_all = Some(val.as_str().to_string());
    }

    if skip_re.is_match(content) {
        info.is_skipped = true;
    }
}

/// Applies a serde `rename_all` rule to a field or variant name.
///
/// Unknown rules leave the name unchanged.
pub fn apply_rename_rule(rule: &str, name: &str) -> String {
    match rule {
        "lowercase" => name.to_lowercase(),
        "UPPERCASE" => name.to_uppercase(),
        "PascalCase" => name.to_upper_camel_case(),
        "camelCase" => name.to_lower_camel_case(),
        "snake_case" => name.to_snake_case(),
        "SCREAMING_SNAKE_CASE" => name.to_shouty_snake_case(),
        "kebab-case" => name.to_kebab_case(),
        "SCREAMING-KEBAB-CASE" => name.to_shouty_kebab_case(),
        _ => name.to_string(),
    }
}

/// Joins the `///` lines attached to `node`.
pub fn extract_doc_comment(node: &SyntaxNode) -> Option<String> {
    let lines: Vec<String> = node
        .children_with_tokens()
        .filter(|child| child.kind() == SyntaxKind::COMMENT)
        .filter_map(|child| {
            let text = child.to_string();
            text.strip_prefix("///")
                .map(|content| content.strip_prefix(' ').unwrap_or(content).to_string())
        })
        .collect();

    if lines.is_empty() {
        None
    } else {
        Some(lines.join("\n").trim().to_string())
    }
}
