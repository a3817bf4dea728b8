//! Tree emitter
//!
//! Renders a [`DispatchNode`] into nested Rust `if`/`else` expressions:
//!
//! ```text
//! if index < 2 {
//!     if index < 1 {
//!         visitor.visit::<0>()
//!     } else {
//!         visitor.visit::<1>()
//!     }
//! } else {
//!     ...
//! }
//! ```
//!
//! Output is indented four spaces per level and carries no base indentation
//! or trailing newline; templates in [`template`] place it inside a function.

pub mod template;

use std::fmt::Write as _;
use std::ops::Range;

use thiserror::Error;

use crate::tree::DispatchNode;

pub use template::{ArtifactTemplate, WrapContext};

/// One level of indentation in emitted code.
pub const INDENT: &str = "    ";

/// Errors raised while rendering a tree.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RenderError {
    /// Branch split does not sit between its children's ranges.
    #[error("branch split {split} does not separate low {low:?} from high {high:?}")]
    MisplacedSplit {
        /// Split stored on the branch.
        split: usize,
        /// Range covered by the low child.
        low: Range<usize>,
        /// Range covered by the high child.
        high: Range<usize>,
    },

    /// Leaf constant too large to describe as a half-open range.
    #[error("leaf value {value} overflows usize range arithmetic")]
    ValueOverflow {
        /// Offending constant.
        value: usize,
    },

    /// Input symbol is not a plain Rust identifier.
    #[error("`{0}` is not a valid identifier for the dispatch input")]
    InvalidSymbol(String),

    /// Leaf pattern lacks the `{value}` placeholder.
    #[error("leaf pattern `{0}` has no {{value}} placeholder")]
    MissingPlaceholder(String),

    /// Leaf pattern spans several lines.
    #[error("leaf pattern `{0}` must be a single line")]
    MultilinePattern(String),
}

/// Terminal statement pattern, parameterized by the leaf constant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LeafPattern {
    template: String,
}

impl LeafPattern {
    /// Text replaced by the leaf constant.
    pub const PLACEHOLDER: &'static str = "{value}";

    /// Parse a single-line pattern containing [`Self::PLACEHOLDER`].
    pub fn new(template: impl Into<String>) -> Result<Self, RenderError> {
        let template = template.into();
        if template.contains('\n') {
            return Err(RenderError::MultilinePattern(template));
        }
        if !template.contains(Self::PLACEHOLDER) {
            return Err(RenderError::MissingPlaceholder(template));
        }
        Ok(Self { template })
    }

    /// `<receiver>.visit::<{value}>()`, the [`IntegralVisitor`](crate::IntegralVisitor) call.
    pub fn visitor_call(receiver: &str) -> Self {
        Self {
            template: format!("{}.visit::<{}>()", receiver, Self::PLACEHOLDER),
        }
    }

    /// Pattern with the constant substituted as a literal.
    pub fn render(&self, value: usize) -> String {
        self.template.replace(Self::PLACEHOLDER, &value.to_string())
    }
}

impl Default for LeafPattern {
    fn default() -> Self {
        Self::visitor_call("visitor")
    }
}

/// Renders dispatch trees against a fixed input symbol and leaf pattern.
#[derive(Debug, Clone)]
pub struct Emitter {
    input_symbol: String,
    leaf: LeafPattern,
}

impl Emitter {
    /// Emitter comparing `input_symbol` at each branch.
    pub fn new(input_symbol: impl Into<String>) -> Self {
        Self {
            input_symbol: input_symbol.into(),
            leaf: LeafPattern::default(),
        }
    }

    /// Replace the terminal pattern.
    pub fn with_leaf_pattern(mut self, leaf: LeafPattern) -> Self {
        self.leaf = leaf;
        self
    }

    /// Input symbol compared at each branch
    pub fn input_symbol(&self) -> &str {
        &self.input_symbol
    }

    /// Terminal pattern
    pub fn leaf_pattern(&self) -> &LeafPattern {
        &self.leaf
    }

    /// Render `node` after checking it is well formed.
    ///
    /// Identical trees always render to identical text.
    pub fn render(&self, node: &DispatchNode) -> Result<String, RenderError> {
        if !is_identifier(&self.input_symbol) {
            return Err(RenderError::InvalidSymbol(self.input_symbol.clone()));
        }
        covered_range(node)?;

        let mut out = String::new();
        self.write_node(node, 0, &mut out);
        Ok(out)
    }

    fn write_node(&self, node: &DispatchNode, level: usize, out: &mut String) {
        match node {
            DispatchNode::Leaf { value } => {
                push_indent(out, level);
                out.push_str(&self.leaf.render(*value));
            }
            DispatchNode::Branch { split, low, high } => {
                push_indent(out, level);
                let _ = writeln!(out, "if {} < {} {{", self.input_symbol, split);
                self.write_node(low, level + 1, out);
                out.push('\n');
                push_indent(out, level);
                out.push_str("} else {\n");
                self.write_node(high, level + 1, out);
                out.push('\n');
                push_indent(out, level);
                out.push('}');
            }
        }
    }
}

/// Render `node` with the default `visitor.visit::<v>()` leaf pattern.
pub fn render(node: &DispatchNode, input_symbol: &str) -> Result<String, RenderError> {
    Emitter::new(input_symbol).render(node)
}

/// Prefix every line of `text` with `levels` indents.
pub fn indent_lines(text: &str, levels: usize) -> String {
    let prefix = INDENT.repeat(levels);
    text.lines()
        .map(|line| {
            if line.is_empty() {
                String::new()
            } else {
                format!("{}{}", prefix, line)
            }
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Half-open range of constants below `node`, validating every split.
pub fn covered_range(node: &DispatchNode) -> Result<Range<usize>, RenderError> {
    match node {
        DispatchNode::Leaf { value } => {
            let end = value
                .checked_add(1)
                .ok_or(RenderError::ValueOverflow { value: *value })?;
            Ok(*value..end)
        }
        DispatchNode::Branch { split, low, high } => {
            let low = covered_range(low)?;
            let high = covered_range(high)?;
            if low.end != *split || high.start != *split {
                return Err(RenderError::MisplacedSplit {
                    split: *split,
                    low,
                    high,
                });
            }
            Ok(low.start..high.end)
        }
    }
}

/// Strict and reserved keywords of the 2021 edition.
pub const RUST_KEYWORDS: [&str; 51] = [
    "as", "async", "await", "break", "const", "continue", "crate", "dyn", "else", "enum",
    "extern", "false", "fn", "for", "if", "impl", "in", "let", "loop", "match", "mod", "move",
    "mut", "pub", "ref", "return", "self", "Self", "static", "struct", "super", "trait", "true",
    "type", "unsafe", "use", "where", "while", "abstract", "become", "box", "do", "final",
    "macro", "override", "priv", "try", "typeof", "unsized", "virtual", "yield",
];

/// Plain (non-raw) Rust identifier that is not a keyword.
pub fn is_identifier(symbol: &str) -> bool {
    let mut chars = symbol.chars();
    match chars.next() {
        Some(first) if first.is_ascii_alphabetic() || first == '_' => {}
        _ => return false,
    }
    symbol != "_"
        && chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
        && !RUST_KEYWORDS.contains(&symbol)
}

/// Type path such as `IntegralVisitor` or `crate::dispatch::IntegralVisitor`.
///
/// `crate`, `self`, `super` and `Self` may only lead the path.
pub fn is_type_path(path: &str) -> bool {
    let path = path.strip_prefix("::").unwrap_or(path);
    let segments: Vec<&str> = path.split("::").collect();
    let leading = segments
        .iter()
        .take_while(|segment| matches!(**segment, "crate" | "self" | "super" | "Self"))
        .count();
    leading < segments.len() && segments[leading..].iter().all(|segment| is_identifier(segment))
}

fn push_indent(out: &mut String, level: usize) {
    for _ in 0..level {
        out.push_str(INDENT);
    }
}
