//! The token-rewrite engine.
//!
//! The remote boilerplate is written against a reference component named
//! `ComponentName` with the default `wc-` tag prefix. Generating a component
//! means rewriting every reference token into the requested identifiers.
//!
//! # Rule ordering
//!
//! The rules form an explicit ordered chain and the order is load-bearing:
//! rule 2 rewrites the reference tag to `wc-<stem>`, and rule 3 then rewrites
//! every remaining `wc-` — including the one rule 2 just produced — to the
//! user prefix. Running rule 3 first would leave the reference tag's name
//! segment behind and double the prefix. Rules 1-3 are literal replacements;
//! rules 4-6 are case-insensitive.
//!
//! Rewriting is idempotent: once every reference token is gone, a second
//! pass finds nothing to change.

use std::sync::OnceLock;

use regex::{NoExpand, Regex};

use crate::domain::naming::{ComponentRequest, DEFAULT_TAG_PREFIX};

/// Class-identifier placeholder in the reference main source.
pub const REFERENCE_CLASS_TOKEN: &str = "__ComponentName__";

/// Tag literal registered by the reference main source.
pub const REFERENCE_TAG: &str = "wc-componentname";

/// Heading marker in the reference template fragment.
pub const TEMPLATE_MARKER: &str = "###";

/// Quoted relative import of the reference stylesheet, optionally carrying
/// an inline-import marker: `"./componentName.css?inline"`.
fn style_import_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r#"(?i)["']\./[^"']*?componentname\.css(\?inline)?["']"#)
            .expect("style import pattern is valid")
    })
}

/// Template-module token, matched case-insensitively so the bare identifier
/// and its `./`-relative import form are both covered.
fn template_token_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"(?i)_componentnametemplate").expect("template token pattern is valid"))
}

/// Style-module token.
fn style_token_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"(?i)_componentnamestyle").expect("style token pattern is valid"))
}

/// Rewrite the main source text for `request`.
///
/// Applies, in order:
/// 1. every literal [`REFERENCE_CLASS_TOKEN`] → class name;
/// 2. every literal [`REFERENCE_TAG`] → `wc-` + file stem;
/// 3. every remaining literal `wc-` → the user prefix (must follow rule 2);
/// 4. quoted relative stylesheet imports → lowercased, reference name
///    segment replaced by the file stem;
/// 5. the template-module token → `<stem>Template`;
/// 6. the style-module token → `<stem>Style`.
pub fn rewrite_main(source: &str, request: &ComponentRequest) -> String {
    let lowercase_tag = format!("{DEFAULT_TAG_PREFIX}{}", request.file_stem());

    let rewritten = source
        .replace(REFERENCE_CLASS_TOKEN, request.class_name())
        .replace(REFERENCE_TAG, &lowercase_tag)
        .replace(DEFAULT_TAG_PREFIX, request.prefix());

    let rewritten = style_import_re().replace_all(&rewritten, |caps: &regex::Captures<'_>| {
        caps[0]
            .to_lowercase()
            .replace("componentname", request.file_stem())
    });

    let template_module = format!("{}Template", request.file_stem());
    let style_module = format!("{}Style", request.file_stem());
    let rewritten = template_token_re().replace_all(&rewritten, NoExpand(&template_module));
    let rewritten = style_token_re().replace_all(&rewritten, NoExpand(&style_module));

    rewritten.into_owned()
}

/// Rewrite the template fragment: every [`TEMPLATE_MARKER`] becomes the
/// upper-cased component name.
pub fn rewrite_template(source: &str, request: &ComponentRequest) -> String {
    source.replace(TEMPLATE_MARKER, request.shout_name())
}

// ── tests ─────────────────────────────────────────────────────────────────────
