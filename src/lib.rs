//! # Balanced integral dispatch generator
//!
//! Generates Rust source that maps a runtime `usize` in `[0, N)` to a
//! compile-time constant through an `O(log N)`-deep `if`/`else` tree, for
//! visiting the active alternative of a tagged value without virtual calls.
//!
//! ## Pipeline
//!
//! 1. **Partition**: split `[0, N)` at the floor midpoint until every leaf
//!    holds one constant ([`tree`])
//! 2. **Render**: emit one conditional per branch and one
//!    `visitor.visit::<K>()` per leaf ([`emit`])
//! 3. **Wrap**: surround the body with a template ([`ArtifactTemplate`])
//! 4. **Format**: normalize through an external formatter ([`format`])
//! 5. **Check**: optionally diff against the checked-in artifact ([`check`])
//!
//! ## Usage Example
//!
//! ```
//! use integral_switch::{Generator, GeneratorConfig, Passthrough};
//!
//! let generator = Generator::new(GeneratorConfig::new(4));
//! let artifact = generator.generate(&Passthrough)?;
//! assert!(artifact.text.contains("pub fn integral_switch_4<"));
//! # Ok::<(), integral_switch::GenerateError>(())
//! ```

#![warn(missing_docs, missing_debug_implementations)]

pub mod check;
pub mod dispatch;
pub mod emit;
pub mod format;
pub mod tree;

pub use check::{ConsistencyError, ConsistencyMismatchError};
pub use dispatch::{integral_switch_32, IntegralVisitor};
pub use emit::{render, ArtifactTemplate, Emitter, LeafPattern, RenderError, WrapContext};
pub use format::{ExternalFormatter, ExternalToolError, Passthrough, SourceFormatter};
pub use tree::{partition, DispatchNode, DispatchTree, InvalidRangeError};

use std::fmt;
use std::io::Write;
use std::path::{Path, PathBuf};

use thiserror::Error;
use tracing::{debug, info};

/// Height of the checked-in canonical artifact.
pub const CANONICAL_HEIGHT: i64 = 32;

/// Location of the canonical artifact, relative to the crate root.
pub const CANONICAL_ARTIFACT: &str = "generated/integral_switch.rs";

/// Canonical artifact path inside this crate's source tree.
pub fn canonical_artifact_path() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join(CANONICAL_ARTIFACT)
}

/// Heights with a checked-in benchmark-template artifact.
pub const BENCH_HEIGHTS: [i64; 6] = [4, 8, 16, 32, 64, 128];

/// Directory of the benchmark-template artifacts, relative to the crate root.
pub const BENCH_ARTIFACT_DIR: &str = "generated/bench";

/// Checked-in benchmark-template artifact for `height`.
pub fn bench_artifact_path(height: i64) -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR"))
        .join(BENCH_ARTIFACT_DIR)
        .join(format!("switch_benchmark_{}.rs", height))
}

/// Pipeline stage that failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Stage {
    /// Generator configuration validation
    Configure,
    /// Range partitioning
    Partition,
    /// Tree rendering
    Render,
    /// External normalization
    Format,
    /// Comparison with the persisted artifact
    ConsistencyCheck,
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Stage::Configure => "configure",
            Stage::Partition => "partition",
            Stage::Render => "render",
            Stage::Format => "format",
            Stage::ConsistencyCheck => "consistency-check",
        })
    }
}

/// Errors that can occur during generation
///
/// Every variant is terminal for its request: generation is deterministic,
/// so retrying reproduces the same failure.
#[derive(Error, Debug)]
pub enum GenerateError {
    /// Invalid generator configuration
    #[error("configure stage failed: {0}")]
    InvalidConfiguration(String),

    /// Bad partition bounds
    #[error("partition stage failed: {0}")]
    Partition(#[from] InvalidRangeError),

    /// Malformed tree handed to the emitter
    #[error("render stage failed: {0}")]
    Render(#[from] RenderError),

    /// External formatter failed
    #[error("format stage failed: {0}")]
    Format(#[from] ExternalToolError),

    /// Persisted artifact missing or stale
    #[error("consistency-check stage failed: {0}")]
    Consistency(#[from] ConsistencyError),
}

impl GenerateError {
    /// Stage that produced this error
    pub fn stage(&self) -> Stage {
        match self {
            GenerateError::InvalidConfiguration(_) => Stage::Configure,
            GenerateError::Partition(_) => Stage::Partition,
            GenerateError::Render(_) => Stage::Render,
            GenerateError::Format(_) => Stage::Format,
            GenerateError::Consistency(_) => Stage::ConsistencyCheck,
        }
    }

    /// Mismatch details, when the persisted artifact is stale
    pub fn mismatch(&self) -> Option<&ConsistencyMismatchError> {
        match self {
            GenerateError::Consistency(ConsistencyError::Mismatch(mismatch)) => Some(mismatch),
            _ => None,
        }
    }
}

/// Configuration parameters for generation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratorConfig {
    /// Number of dispatchable values `N`
    pub height: i64,

    /// Output shape
    pub template: ArtifactTemplate,

    /// Name of the runtime index parameter
    pub input_symbol: String,

    /// Name of the continuation parameter
    pub visitor_param: String,

    /// Path of the continuation trait
    pub visitor_trait: String,
}

impl GeneratorConfig {
    /// Plain template over `[0, height)` with default names
    pub fn new(height: i64) -> Self {
        Self {
            height,
            template: ArtifactTemplate::Plain,
            input_symbol: "index".to_string(),
            visitor_param: "visitor".to_string(),
            visitor_trait: "IntegralVisitor".to_string(),
        }
    }

    /// Settings of the checked-in artifact
    pub fn canonical() -> Self {
        Self::new(CANONICAL_HEIGHT)
    }

    /// Select the output template
    pub fn with_template(mut self, template: ArtifactTemplate) -> Self {
        self.template = template;
        self
    }

    /// Rename the index parameter
    pub fn with_input_symbol(mut self, symbol: impl Into<String>) -> Self {
        self.input_symbol = symbol.into();
        self
    }

    /// Rename the continuation parameter
    pub fn with_visitor_param(mut self, param: impl Into<String>) -> Self {
        self.visitor_param = param.into();
        self
    }

    /// Point at a different continuation trait (e.g. `crate::dispatch::IntegralVisitor`)
    pub fn with_visitor_trait(mut self, path: impl Into<String>) -> Self {
        self.visitor_trait = path.into();
        self
    }

    /// Check the names are usable in generated code.
    ///
    /// The height is validated by the partition stage.
    pub fn validate(&self) -> Result<(), GenerateError> {
        if !emit::is_identifier(&self.input_symbol) {
            return Err(GenerateError::InvalidConfiguration(format!(
                "input symbol `{}` is not an identifier",
                self.input_symbol
            )));
        }
        if !emit::is_identifier(&self.visitor_param) {
            return Err(GenerateError::InvalidConfiguration(format!(
                "visitor parameter `{}` is not an identifier",
                self.visitor_param
            )));
        }
        if self.input_symbol == self.visitor_param {
            return Err(GenerateError::InvalidConfiguration(format!(
                "input symbol and visitor parameter are both `{}`",
                self.input_symbol
            )));
        }
        if !emit::is_type_path(&self.visitor_trait) {
            return Err(GenerateError::InvalidConfiguration(format!(
                "visitor trait `{}` is not a path",
                self.visitor_trait
            )));
        }
        Ok(())
    }
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self::canonical()
    }
}

/// A generated, normalized source file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Artifact {
    /// Number of dispatchable values
    pub height: usize,

    /// Template that produced the text
    pub template: ArtifactTemplate,

    /// Source text
    pub text: String,
}

impl Artifact {
    /// blake3 digest of the text
    pub fn fingerprint(&self) -> blake3::Hash {
        blake3::hash(self.text.as_bytes())
    }

    /// Write the text to `writer`.
    pub fn write_to<W: Write>(&self, writer: &mut W) -> std::io::Result<()> {
        writer.write_all(self.text.as_bytes())?;
        writer.flush()
    }
}

/// Main generation orchestrator
///
/// Partition, render, wrap, normalize and optionally check, in that order.
#[derive(Debug, Clone)]
pub struct Generator {
    config: GeneratorConfig,
}

impl Generator {
    /// Create new generator
    pub fn new(config: GeneratorConfig) -> Self {
        Self { config }
    }

    /// Configuration in use
    pub fn config(&self) -> &GeneratorConfig {
        &self.config
    }

    /// Build the dispatch tree for the configured height.
    pub fn tree(&self) -> Result<DispatchTree, GenerateError> {
        let tree = DispatchTree::build(self.config.height)?;
        debug!(
            height = tree.len(),
            depth = tree.root().depth(),
            branches = tree.root().branch_count(),
            "partitioned dispatch range"
        );
        Ok(tree)
    }

    /// Wrapped source text before normalization.
    pub fn render_raw(&self) -> Result<String, GenerateError> {
        self.config.validate()?;
        let tree = self.tree()?;

        let leaf = LeafPattern::visitor_call(&self.config.visitor_param);
        let body = Emitter::new(self.config.input_symbol.as_str())
            .with_leaf_pattern(leaf.clone())
            .render(tree.root())?;
        debug!(bytes = body.len(), "rendered dispatch body");

        let ctx = WrapContext {
            height: tree.len(),
            input_symbol: &self.config.input_symbol,
            visitor_param: &self.config.visitor_param,
            visitor_trait: &self.config.visitor_trait,
            leaf: &leaf,
        };
        Ok(self.config.template.wrap(&ctx, &body))
    }

    /// Render and normalize the artifact.
    pub fn generate(&self, formatter: &dyn SourceFormatter) -> Result<Artifact, GenerateError> {
        let raw = self.render_raw()?;
        let text = formatter.format(&raw)?;
        debug!(formatter = formatter.name(), "normalized artifact");

        // render_raw() succeeded, so the height is a positive usize
        let artifact = Artifact {
            height: self.config.height as usize,
            template: self.config.template,
            text,
        };
        info!(
            height = artifact.height,
            template = %artifact.template,
            fingerprint = %artifact.fingerprint(),
            "generated artifact"
        );
        Ok(artifact)
    }

    /// Regenerate and compare against the artifact persisted at `path`.
    pub fn check(
        &self,
        formatter: &dyn SourceFormatter,
        path: &Path,
    ) -> Result<Artifact, GenerateError> {
        let artifact = self.generate(formatter)?;
        check::verify_artifact(path, &artifact.text)?;
        info!(path = %path.display(), "artifact is consistent");
        Ok(artifact)
    }
}
