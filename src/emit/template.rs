//! Artifact wrapping templates
//!
//! A template only decides what surrounds the rendered tree body (banner,
//! signature, range guard, optional baseline); it never inspects the tree.

use std::fmt;
use std::fmt::Write as _;
use std::str::FromStr;

use super::{indent_lines, LeafPattern, INDENT};

/// Values a template may interpolate around the tree body.
#[derive(Debug, Clone)]
pub struct WrapContext<'a> {
    /// Number of dispatchable values `N`.
    pub height: usize,
    /// Name of the runtime index parameter.
    pub input_symbol: &'a str,
    /// Name of the continuation parameter.
    pub visitor_param: &'a str,
    /// Path of the continuation trait.
    pub visitor_trait: &'a str,
    /// Leaf pattern, reused by baselines that enumerate values directly.
    pub leaf: &'a LeafPattern,
}

/// Output shape of a generated artifact.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ArtifactTemplate {
    /// A single `integral_switch_<N>` dispatch function.
    #[default]
    Plain,
    /// The dispatch function plus a flat `match` baseline `hand_rolled_<N>`.
    Benchmark,
}

impl ArtifactTemplate {
    /// Every template, in CLI order
    pub const ALL: [ArtifactTemplate; 2] = [ArtifactTemplate::Plain, ArtifactTemplate::Benchmark];

    /// Stable name used on the command line and in the banner
    pub fn name(&self) -> &'static str {
        match self {
            ArtifactTemplate::Plain => "plain",
            ArtifactTemplate::Benchmark => "benchmark",
        }
    }

    /// Wrap an already rendered tree body into a complete source file.
    pub fn wrap(&self, ctx: &WrapContext<'_>, body: &str) -> String {
        let mut out = String::new();
        write_banner(&mut out, ctx, *self);

        match self {
            ArtifactTemplate::Plain => {
                let _ = writeln!(
                    out,
                    "/// Dispatches `{}` in `[0, {})` to `{}` with the value as a const generic.",
                    ctx.input_symbol, ctx.height, ctx.visitor_param
                );
                out.push_str("///\n");
                let _ = writeln!(
                    out,
                    "/// Returns `None` when `{}` is out of range.",
                    ctx.input_symbol
                );
                write_dispatch_fn(&mut out, ctx, body);
            }
            ArtifactTemplate::Benchmark => {
                let _ = writeln!(out, "/// Balanced dispatch over `[0, {})`.", ctx.height);
                write_dispatch_fn(&mut out, ctx, body);
                out.push('\n');
                let _ = writeln!(
                    out,
                    "/// Flat `match` over `[0, {})`, the hand-rolled baseline for `{}`.",
                    ctx.height,
                    dispatch_fn_name(ctx.height)
                );
                write_baseline_fn(&mut out, ctx);
            }
        }

        out
    }
}

impl fmt::Display for ArtifactTemplate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ArtifactTemplate {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|template| template.name() == s)
            .ok_or_else(|| format!("unknown template `{}` (expected plain or benchmark)", s))
    }
}

/// Name of the generated dispatch function; embeds `N` for benchmark grouping.
pub fn dispatch_fn_name(height: usize) -> String {
    format!("integral_switch_{}", height)
}

/// Name of the generated flat-`match` baseline.
pub fn baseline_fn_name(height: usize) -> String {
    format!("hand_rolled_{}", height)
}

fn write_banner(out: &mut String, ctx: &WrapContext<'_>, template: ArtifactTemplate) {
    out.push_str("// @generated by integral-switch. Do not edit by hand.\n");
    let _ = writeln!(
        out,
        "// Regenerate with: integral-switch generate {} --template {}",
        ctx.height, template
    );
    out.push('\n');
}

fn write_signature(out: &mut String, ctx: &WrapContext<'_>, name: &str) {
    out.push_str("#[inline]\n");
    let _ = writeln!(
        out,
        "pub fn {}<V: {}>({}: V, {}: usize) -> Option<V::Output> {{",
        name, ctx.visitor_trait, ctx.visitor_param, ctx.input_symbol
    );
}

fn write_dispatch_fn(out: &mut String, ctx: &WrapContext<'_>, body: &str) {
    // Nested `else { if .. }` mirrors the tree one level per branch.
    out.push_str("#[allow(clippy::collapsible_else_if)]\n");
    write_signature(out, ctx, &dispatch_fn_name(ctx.height));
    let _ = writeln!(out, "{}if {} >= {} {{", INDENT, ctx.input_symbol, ctx.height);
    let _ = writeln!(out, "{}{}return None;", INDENT, INDENT);
    let _ = writeln!(out, "{}}}", INDENT);

    // `Some(` opens on the body's first line and closes after its last one.
    let indented = indent_lines(body, 1);
    let inner = indented.strip_prefix(INDENT).unwrap_or(&indented);
    let _ = writeln!(out, "{}Some({})", INDENT, inner);
    out.push_str("}\n");
}

fn write_baseline_fn(out: &mut String, ctx: &WrapContext<'_>) {
    write_signature(out, ctx, &baseline_fn_name(ctx.height));
    let _ = writeln!(out, "{}match {} {{", INDENT, ctx.input_symbol);
    for value in 0..ctx.height {
        let _ = writeln!(
            out,
            "{}{}{} => Some({}),",
            INDENT,
            INDENT,
            value,
            ctx.leaf.render(value)
        );
    }
    let _ = writeln!(out, "{}{}_ => None,", INDENT, INDENT);
    let _ = writeln!(out, "{}}}", INDENT);
    out.push_str("}\n");
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ctx(leaf: &LeafPattern, height: usize) -> WrapContext<'_> {
        WrapContext {
            height,
            input_symbol: "index",
            visitor_param: "visitor",
            visitor_trait: "IntegralVisitor",
            leaf,
        }
    }

    #[test]
    fn test_plain_wraps_single_leaf() {
        let leaf = LeafPattern::default();
        let text = ArtifactTemplate::Plain.wrap(&ctx(&leaf, 1), "visitor.visit::<0>()");
        let expected = "\
// @generated by integral-switch. Do not edit by hand.
// Regenerate with: integral-switch generate 1 --template plain

/// Dispatches `index` in `[0, 1)` to `visitor` with the value as a const generic.
///
/// Returns `None` when `index` is out of range.
#[allow(clippy::collapsible_else_if)]
#[inline]
pub fn integral_switch_1<V: IntegralVisitor>(visitor: V, index: usize) -> Option<V::Output> {
    if index >= 1 {
        return None;
    }
    Some(visitor.visit::<0>())
}
";
        assert_eq!(text, expected);
    }

    #[test]
    fn test_body_is_not_inspected() {
        let leaf = LeafPattern::default();
        let text = ArtifactTemplate::Plain.wrap(&ctx(&leaf, 2), "BODY\nMORE");
        assert!(text.contains("    Some(BODY\n    MORE)\n}\n"));
    }

    #[test]
    fn test_benchmark_emits_baseline() {
        let leaf = LeafPattern::default();
        let text = ArtifactTemplate::Benchmark.wrap(&ctx(&leaf, 2), "x");
        assert!(text.contains("pub fn integral_switch_2<"));
        assert!(text.contains("pub fn hand_rolled_2<"));
        assert!(text.contains("        1 => Some(visitor.visit::<1>()),\n"));
        assert!(text.contains("        _ => None,\n"));
        assert!(text.contains("--template benchmark"));
    }

    #[test]
    fn test_template_names_round_trip() {
        for template in ArtifactTemplate::ALL {
            assert_eq!(template.name().parse::<ArtifactTemplate>(), Ok(template));
        }
        assert!("fancy".parse::<ArtifactTemplate>().is_err());
    }
}
