use sha2::{Digest, Sha256};

use argsgen_profiles::Profile;

/// SHA-256 of the generated text, prefixed with "sha256:".
pub fn artifact_digest(profile: Profile) -> String {
    let mut hasher = Sha256::new();
    hasher.update(profile.generate().as_bytes());
    format!("sha256:{:x}", hasher.finalize())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn digest_is_stable_and_distinct() {
        let digests: Vec<String> = Profile::ALL.iter().map(|p| artifact_digest(*p)).collect();
        for (p, d) in Profile::ALL.iter().zip(&digests) {
            assert_eq!(&artifact_digest(*p), d);
            assert!(d.starts_with("sha256:"));
            assert_eq!(d.len(), "sha256:".len() + 64);
        }
        assert_ne!(digests[0], digests[1]);
        assert_ne!(digests[1], digests[2]);
    }
}
