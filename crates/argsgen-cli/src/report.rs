//! The console report printed by each standalone generator.

use std::io::Write;

use argsgen_profiles::Profile;

/// Title, separator, generated text, separator, then the summary lines.
///
/// The generated text already ends in a newline, so a blank line follows it.
pub fn write_report<W: Write>(profile: Profile, out: &mut W) -> std::io::Result<()> {
    let separator = "=".repeat(profile.separator_width());

    writeln!(out, "{}", profile.title())?;
    writeln!(out, "{}", separator)?;
    writeln!(out, "{}", profile.generate())?;
    writeln!(out, "{}", separator)?;
    for line in profile.summary() {
        writeln!(out, "{}", line)?;
    }
    out.flush()
}

/// Entry point shared by the `build-config-*` binaries.
pub fn run_standalone(profile: Profile) -> anyhow::Result<()> {
    use anyhow::Context;

    crate::logging::init(0)?;
    tracing::debug!(profile = %profile, "writing report");

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    write_report(profile, &mut out).context("failed to write report to stdout")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render(profile: Profile) -> String {
        let mut buf = Vec::new();
        write_report(profile, &mut buf).unwrap();
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn report_frames_the_artifact() {
        let text = render(Profile::Fast);
        let sep = "=".repeat(50);
        let expected_head = format!("🚀 Fast Build Configuration Generator\n{}\n# 🚀", sep);
        assert!(text.starts_with(&expected_head), "{}", text);
        assert!(text.contains(&format!(
            "# Features disabled: Non-essential only\n\n{}\n💡 This configuration",
            sep
        )));
        assert!(text.ends_with("  - Faster linking\n"));
    }

    #[test]
    fn separator_width_follows_profile() {
        for p in Profile::ALL {
            let text = render(p);
            let sep = "=".repeat(p.separator_width());
            assert_eq!(text.lines().nth(1), Some(sep.as_str()));
            assert_eq!(text.lines().filter(|l| *l == sep).count(), 2);
        }
    }

    #[test]
    fn summary_blank_lines_are_kept() {
        let text = render(Profile::Fingerprint);
        assert!(text.contains("  - Faster linking\n\nFingerprint protection features preserved:\n"));
    }
}
