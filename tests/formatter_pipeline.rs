//! Generation through a subprocess formatter.
#![cfg(unix)]

use integral_switch::{
    ExternalFormatter, ExternalToolError, GenerateError, Generator, GeneratorConfig, Stage,
};
use tempfile::tempdir;

#[test]
fn identity_subprocess_matches_raw_render() {
    let generator = Generator::new(GeneratorConfig::new(16));
    let raw = generator.render_raw().expect("renders");
    let artifact = generator
        .generate(&ExternalFormatter::new("cat"))
        .expect("cat normalizes");
    assert_eq!(artifact.text, raw);
}

#[test]
fn failing_formatter_aborts_without_artifact() {
    let dir = tempdir().expect("temp dir");
    let output = dir.path().join("integral_switch.rs");

    let formatter = ExternalFormatter::new("sh").with_args(["-c", "exit 1"]);
    let result = Generator::new(GeneratorConfig::canonical()).generate(&formatter);

    match &result {
        Err(err @ GenerateError::Format(ExternalToolError::NonZeroExit { .. })) => {
            assert_eq!(err.stage(), Stage::Format);
            assert!(err.to_string().starts_with("format stage failed"));
        }
        other => panic!("expected a format failure, got {:?}", other),
    }

    if let Ok(artifact) = result {
        std::fs::write(&output, artifact.text).expect("write artifact");
    }
    assert!(!output.exists());
}

#[test]
fn formatter_output_is_what_gets_checked() {
    let dir = tempdir().expect("temp dir");
    let path = dir.path().join("upper.rs");

    let upper = ExternalFormatter::new("tr").with_args(["a-z", "A-Z"]);
    let generator = Generator::new(GeneratorConfig::new(2));
    let artifact = generator.generate(&upper).expect("tr succeeds");
    assert!(artifact.text.contains("PUB FN INTEGRAL_SWITCH_2"));

    std::fs::write(&path, &artifact.text).expect("persist artifact");
    generator.check(&upper, &path).expect("normalized text round-trips");
}
