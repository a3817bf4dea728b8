use std::fs::File;
use std::io::{self, BufWriter};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use integral_switch::{
    ArtifactTemplate, ExternalFormatter, Generator, GeneratorConfig, Passthrough,
    SourceFormatter, CANONICAL_ARTIFACT, CANONICAL_HEIGHT,
};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(
    name = "integral-switch",
    about = "Generate balanced dispatch trees from a runtime index to a const generic"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Render the dispatch artifact for HEIGHT values.
    Generate {
        /// Number of dispatchable values.
        #[arg(default_value_t = CANONICAL_HEIGHT, allow_negative_numbers = true)]
        height: i64,
        /// Output shape.
        #[arg(long, value_enum, default_value_t = TemplateArg::Plain)]
        template: TemplateArg,
        /// Name of the runtime index parameter.
        #[arg(long, default_value = "index")]
        input_symbol: String,
        /// Name of the continuation parameter.
        #[arg(long, default_value = "visitor")]
        visitor_param: String,
        /// Path of the continuation trait.
        #[arg(long, default_value = "IntegralVisitor")]
        visitor_trait: String,
        /// Normalize through this rustfmt binary instead of passing text through.
        #[arg(long)]
        rustfmt_bin: Option<PathBuf>,
        /// Write the artifact here instead of stdout.
        #[arg(long, short)]
        output: Option<PathBuf>,
    },
    /// Regenerate the canonical artifact and diff it against the checked-in file.
    Check {
        /// Persisted artifact to compare with.
        #[arg(long, default_value = CANONICAL_ARTIFACT)]
        artifact: PathBuf,
        /// Height the artifact was generated for.
        #[arg(long, default_value_t = CANONICAL_HEIGHT, allow_negative_numbers = true)]
        height: i64,
        /// Normalize through this rustfmt binary instead of passing text through.
        #[arg(long)]
        rustfmt_bin: Option<PathBuf>,
    },
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum TemplateArg {
    Plain,
    Benchmark,
}

impl From<TemplateArg> for ArtifactTemplate {
    fn from(arg: TemplateArg) -> Self {
        match arg {
            TemplateArg::Plain => ArtifactTemplate::Plain,
            TemplateArg::Benchmark => ArtifactTemplate::Benchmark,
        }
    }
}

fn main() -> Result<()> {
    init_tracing();
    let cli = Cli::parse();

    match cli.command {
        Commands::Generate {
            height,
            template,
            input_symbol,
            visitor_param,
            visitor_trait,
            rustfmt_bin,
            output,
        } => {
            let config =
                generate_config(height, template, input_symbol, visitor_param, visitor_trait);
            run_generate(config, rustfmt_bin, output)?
        }
        Commands::Check {
            artifact,
            height,
            rustfmt_bin,
        } => run_check(GeneratorConfig::new(height), rustfmt_bin, artifact)?,
    }

    Ok(())
}

fn generate_config(
    height: i64,
    template: TemplateArg,
    input_symbol: String,
    visitor_param: String,
    visitor_trait: String,
) -> GeneratorConfig {
    GeneratorConfig::new(height)
        .with_template(template.into())
        .with_input_symbol(input_symbol)
        .with_visitor_param(visitor_param)
        .with_visitor_trait(visitor_trait)
}

/// Logs go to stderr so stdout carries only the artifact.
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .init();
}

fn formatter(rustfmt_bin: Option<PathBuf>) -> Box<dyn SourceFormatter> {
    match rustfmt_bin {
        Some(bin) => Box::new(ExternalFormatter::rustfmt_at(bin)),
        None => Box::new(Passthrough),
    }
}

fn run_generate(
    config: GeneratorConfig,
    rustfmt_bin: Option<PathBuf>,
    output: Option<PathBuf>,
) -> Result<()> {
    let height = config.height;
    let formatter = formatter(rustfmt_bin);
    let artifact = Generator::new(config)
        .generate(formatter.as_ref())
        .with_context(|| format!("failed to generate dispatch artifact for height {}", height))?;

    // Only touch the output file once every stage has succeeded.
    match output {
        Some(path) => {
            let file = File::create(&path)
                .with_context(|| format!("failed to create {}", path.display()))?;
            artifact
                .write_to(&mut BufWriter::new(file))
                .with_context(|| format!("failed to write {}", path.display()))?;
        }
        None => artifact
            .write_to(&mut io::stdout().lock())
            .context("failed to write artifact to stdout")?,
    }

    Ok(())
}

fn run_check(
    config: GeneratorConfig,
    rustfmt_bin: Option<PathBuf>,
    artifact: PathBuf,
) -> Result<()> {
    let formatter = formatter(rustfmt_bin);
    let generated = Generator::new(config)
        .check(formatter.as_ref(), &artifact)
        .with_context(|| {
            format!(
                "failed to verify {}. If the generator changed on purpose, rerun \
                 `integral-switch generate --output {}`",
                artifact.display(),
                artifact.display()
            )
        })?;
    println!("{} is up to date ({})", artifact.display(), generated.fingerprint());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn generate_args(args: &[&str]) -> GeneratorConfig {
        let cli = Cli::try_parse_from(args).expect("parses");
        match cli.command {
            Commands::Generate {
                height,
                template,
                input_symbol,
                visitor_param,
                visitor_trait,
                ..
            } => generate_config(height, template, input_symbol, visitor_param, visitor_trait),
            Commands::Check { .. } => panic!("expected generate"),
        }
    }

    #[test]
    fn test_visitor_param_defaults_to_visitor() {
        let config = generate_args(&["integral-switch", "generate", "4"]);
        assert_eq!(config.visitor_param, "visitor");
        assert_eq!(config.input_symbol, "index");
    }

    #[test]
    fn test_visitor_param_reaches_artifact() {
        let config = generate_args(&[
            "integral-switch",
            "generate",
            "2",
            "--visitor-param",
            "cont",
            "--input-symbol",
            "tag",
        ]);
        let artifact = Generator::new(config).generate(&Passthrough).expect("generates");
        assert!(artifact.text.contains("(cont: V, tag: usize)"), "{}", artifact.text);
        assert!(artifact.text.contains("cont.visit::<1>()"), "{}", artifact.text);
    }

    #[test]
    fn test_keyword_visitor_param_is_rejected() {
        let config = generate_args(&["integral-switch", "generate", "2", "--visitor-param", "fn"]);
        let err = Generator::new(config).generate(&Passthrough).unwrap_err();
        assert_eq!(err.stage(), integral_switch::Stage::Configure);
    }
}
