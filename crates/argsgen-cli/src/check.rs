//! Duplicate-key validation over generated artifacts.
//!
//! Generators keep their duplicates; this only reports them.

use std::io::Write;

use anyhow::Context;
use argsgen_flags::{find_duplicates, scan, Duplicate};
use argsgen_profiles::Profile;

#[derive(Debug)]
pub struct CheckReport {
    pub profile: Profile,
    pub flag_count: usize,
    pub duplicates: Vec<Duplicate>,
}

impl CheckReport {
    pub fn conflicts(&self) -> impl Iterator<Item = &Duplicate> {
        self.duplicates.iter().filter(|d| d.is_conflict())
    }

    pub fn has_conflicts(&self) -> bool {
        self.conflicts().next().is_some()
    }
}

pub fn check_profile(profile: Profile) -> anyhow::Result<CheckReport> {
    let text = profile.generate();
    let flags = scan(&text).with_context(|| format!("profile '{}' emitted a bad line", profile))?;
    let duplicates = find_duplicates(&flags);

    for dup in duplicates.iter().filter(|d| d.is_conflict()) {
        let lines: Vec<usize> = dup.occurrences.iter().map(|o| o.line).collect();
        tracing::warn!(
            profile = %profile,
            flag = %dup.name,
            lines = ?lines,
            "flag assigned conflicting values"
        );
    }
    tracing::info!(
        profile = %profile,
        flags = flags.len(),
        duplicates = duplicates.len(),
        "checked"
    );

    Ok(CheckReport {
        profile,
        flag_count: flags.len(),
        duplicates,
    })
}

pub fn write_check<W: Write>(report: &CheckReport, out: &mut W) -> std::io::Result<()> {
    if report.duplicates.is_empty() {
        return writeln!(
            out,
            "{}: {} flags, no duplicates",
            report.profile, report.flag_count
        );
    }

    writeln!(
        out,
        "{}: {} flags, {} duplicated",
        report.profile,
        report.flag_count,
        report.duplicates.len()
    )?;
    for dup in &report.duplicates {
        let kind = if dup.is_conflict() {
            "conflict"
        } else {
            "repeat"
        };
        let places: Vec<String> = dup
            .occurrences
            .iter()
            .map(|o| format!("line {} = {}", o.line, o.value))
            .collect();
        write!(out, "  {} [{}]: {}", dup.name, kind, places.join(", "))?;
        match dup.effective() {
            Some(v) => writeln!(out, " (effective: {})", v)?,
            None => writeln!(out)?,
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_the_combined_profile_conflicts() {
        assert!(!check_profile(Profile::Fast).unwrap().has_conflicts());
        assert!(!check_profile(Profile::Fingerprint).unwrap().has_conflicts());

        let report = check_profile(Profile::UngoogledOptimized).unwrap();
        assert!(report.has_conflicts());
        assert_eq!(report.conflicts().count(), 1);
    }

    #[test]
    fn report_names_lines_and_effective_value() {
        let report = check_profile(Profile::UngoogledOptimized).unwrap();
        let mut buf = Vec::new();
        write_check(&report, &mut buf).unwrap();
        let text = String::from_utf8(buf).unwrap();

        assert!(text.starts_with("ungoogled-optimized: "), "{}", text);
        assert!(text.contains("enable_widevine [conflict]: line "), "{}", text);
        assert!(text.contains("(effective: true)"), "{}", text);
    }

    #[test]
    fn clean_profile_reports_no_duplicates() {
        let report = check_profile(Profile::Fast).unwrap();
        let mut buf = Vec::new();
        write_check(&report, &mut buf).unwrap();
        let text = String::from_utf8(buf).unwrap();
        assert!(text.starts_with("fast: "));
        assert!(text.trim_end().ends_with("no duplicates"));
    }
}
