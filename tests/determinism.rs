use std::collections::HashSet;

use blake3::hash;
use integral_switch::{ArtifactTemplate, Generator, GeneratorConfig, Passthrough};

#[test]
fn generation_is_deterministic() {
    for template in ArtifactTemplate::ALL {
        let mut fingerprints = HashSet::new();
        for _ in 0..5 {
            let generator = Generator::new(GeneratorConfig::new(67).with_template(template));
            let artifact = generator.generate(&Passthrough).expect("generation succeeds");
            assert_eq!(artifact.fingerprint(), hash(artifact.text.as_bytes()));
            fingerprints.insert(artifact.fingerprint());
        }

        assert_eq!(fingerprints.len(), 1, "{} outputs diverged across runs", template);
    }
}

#[test]
fn different_heights_differ() {
    let a = Generator::new(GeneratorConfig::new(31))
        .generate(&Passthrough)
        .expect("generation succeeds");
    let b = Generator::new(GeneratorConfig::new(32))
        .generate(&Passthrough)
        .expect("generation succeeds");
    assert_ne!(a.fingerprint(), b.fingerprint());
}
