//! Properties every profile must satisfy.

use argsgen_flags::{scan, Flag};
use argsgen_profiles::{fast, fingerprint, ungoogled, Profile};

fn count_line(text: &str, needle: &str) -> usize {
    text.lines().filter(|l| *l == needle).count()
}

#[test]
fn output_is_deterministic() {
    for p in Profile::ALL {
        let first = p.generate();
        for _ in 0..5 {
            assert_eq!(p.generate(), first, "{} changed between calls", p);
        }
    }
}

#[test]
fn generating_one_profile_does_not_affect_another() {
    let before: Vec<String> = Profile::ALL.iter().map(|p| p.generate()).collect();

    // interleave in a different order
    let _ = ungoogled::generate();
    let _ = fast::generate();
    let _ = fingerprint::generate();
    let _ = ungoogled::generate();

    let after: Vec<String> = Profile::ALL.iter().map(|p| p.generate()).collect();
    assert_eq!(before, after);
}

#[test]
fn every_profile_has_flag_lines_and_a_comment_footer() {
    for p in Profile::ALL {
        let text = p.generate();

        let flag_lines = text
            .lines()
            .filter(|l| !l.is_empty() && !l.starts_with('#'))
            .count();
        assert!(flag_lines > 0, "{} has no flag lines", p);

        let last = text
            .lines()
            .rev()
            .find(|l| !l.trim().is_empty())
            .expect("non-empty output");
        assert!(last.starts_with('#'), "{} ends with {:?}", p, last);
        assert!(last.len() > 1, "{} footer line is empty", p);

        assert!(text.ends_with('\n'));
    }
}

#[test]
fn every_non_comment_line_is_a_valid_flag() {
    for p in Profile::ALL {
        let text = p.generate();
        let scanned = scan(&text).unwrap_or_else(|e| panic!("{}: {}", p, e));
        assert!(!scanned.is_empty());

        for line in p.flag_set().iter() {
            let flag = Flag::parse(line).unwrap();
            assert_eq!(flag.to_string(), line);
        }
    }
}

#[test]
fn target_is_pinned_exactly_once() {
    for p in Profile::ALL {
        let text = p.generate();
        assert_eq!(count_line(&text, "target_cpu=\"x64\""), 1, "{}", p);
        assert_eq!(count_line(&text, "target_os=\"win\""), 1, "{}", p);
    }
}

#[test]
fn flag_block_appears_verbatim_in_output() {
    for p in Profile::ALL {
        let block = p.flag_set().join();
        assert!(p.generate().contains(&block), "{}", p);
    }
}

#[test]
fn google_service_keys_are_blank_everywhere() {
    for p in Profile::ALL {
        let text = p.generate();
        assert_eq!(count_line(&text, "use_official_google_api_keys=false"), 1);
        assert_eq!(count_line(&text, "google_api_key=\"\""), 1);
    }
}
