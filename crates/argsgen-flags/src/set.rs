//! Named flag groups and the ordered flag sets built from them.

/// A named, compile-time list of flag lines.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FlagGroup {
    pub name: &'static str,
    pub flags: &'static [&'static str],
}

impl FlagGroup {
    pub const fn new(name: &'static str, flags: &'static [&'static str]) -> Self {
        FlagGroup { name, flags }
    }
}

/// Ordered sequence of flag lines.
///
/// Concatenation is a plain append: repeated names are kept in place and
/// never reconciled.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FlagSet {
    lines: Vec<&'static str>,
}

impl FlagSet {
    pub fn from_groups(groups: &[FlagGroup]) -> Self {
        FlagSet {
            lines: groups
                .iter()
                .flat_map(|g| g.flags.iter().copied())
                .collect(),
        }
    }

    pub fn concat(&self, other: &FlagSet) -> Self {
        let mut lines = self.lines.clone();
        lines.extend_from_slice(&other.lines);
        FlagSet { lines }
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    pub fn lines(&self) -> &[&'static str] {
        &self.lines
    }

    pub fn iter(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.lines.iter().copied()
    }

    /// Newline-joined block, without a trailing newline.
    pub fn join(&self) -> String {
        self.lines.join("\n")
    }

    /// Index of the first line equal to `line`.
    pub fn position(&self, line: &str) -> Option<usize> {
        self.lines.iter().position(|l| *l == line)
    }

    pub fn count(&self, line: &str) -> usize {
        self.lines.iter().filter(|l| **l == line).count()
    }
}

impl From<FlagGroup> for FlagSet {
    fn from(group: FlagGroup) -> Self {
        FlagSet::from_groups(&[group])
    }
}
