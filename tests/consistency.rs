//! The checked-in artifact must equal a fresh regeneration.

use std::fs;

use integral_switch::{
    bench_artifact_path, canonical_artifact_path, check, ArtifactTemplate, Generator,
    GeneratorConfig, Passthrough, Stage, BENCH_HEIGHTS, CANONICAL_HEIGHT,
};
use tempfile::tempdir;

#[test]
fn canonical_artifact_is_up_to_date() {
    let generator = Generator::new(GeneratorConfig::canonical());
    let result = generator.check(&Passthrough, &canonical_artifact_path());
    if let Err(err) = &result {
        panic!("{}", err);
    }
}

#[test]
fn bench_artifacts_are_up_to_date() {
    for height in BENCH_HEIGHTS {
        let config = GeneratorConfig::new(height).with_template(ArtifactTemplate::Benchmark);
        let result = Generator::new(config).check(&Passthrough, &bench_artifact_path(height));
        if let Err(err) = &result {
            panic!("height {}: {}", height, err);
        }
    }
}

#[test]
fn regeneration_is_idempotent() {
    let generator = Generator::new(GeneratorConfig::new(CANONICAL_HEIGHT));
    let first = generator.generate(&Passthrough).expect("generates");

    let dir = tempdir().expect("temp dir");
    let path = dir.path().join("integral_switch.rs");
    fs::write(&path, &first.text).expect("persist artifact");

    let second = generator.check(&Passthrough, &path).expect("consistent");
    assert_eq!(first, second);
}

#[test]
fn stale_artifact_surfaces_diff() {
    let dir = tempdir().expect("temp dir");
    let path = dir.path().join("integral_switch.rs");
    let persisted = Generator::new(GeneratorConfig::new(3))
        .generate(&Passthrough)
        .expect("generates");
    fs::write(&path, &persisted.text).expect("persist artifact");

    let err = Generator::new(GeneratorConfig::new(4))
        .check(&Passthrough, &path)
        .expect_err("height changed");
    assert_eq!(err.stage(), Stage::ConsistencyCheck);

    let mismatch = err.mismatch().expect("mismatch details");
    assert_eq!(mismatch.path, path);
    assert!(mismatch.changed_lines > 0);
    assert!(mismatch.diff.contains("-pub fn integral_switch_3<"), "{}", mismatch.diff);
    assert!(mismatch.diff.contains("+pub fn integral_switch_4<"), "{}", mismatch.diff);
    assert!(err.to_string().starts_with("consistency-check stage failed"));
}

#[test]
fn missing_artifact_is_a_check_failure() {
    let dir = tempdir().expect("temp dir");
    let err = Generator::new(GeneratorConfig::canonical())
        .check(&Passthrough, &dir.path().join("absent.rs"))
        .expect_err("file is missing");
    assert_eq!(err.stage(), Stage::ConsistencyCheck);
    assert!(err.mismatch().is_none());
}

#[test]
fn crlf_checkout_still_matches() {
    let artifact = Generator::new(GeneratorConfig::new(6))
        .generate(&Passthrough)
        .expect("generates");
    let crlf = artifact.text.replace('\n', "\r\n");
    assert_eq!(
        check::compare(&canonical_artifact_path(), &crlf, &artifact.text),
        Ok(())
    );
}
