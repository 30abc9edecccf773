//! JSON view of a profile: its groups, parsed flags and duplicates.

use serde::Serialize;

use argsgen_flags::{find_duplicates, scan, Duplicate, ScannedFlag};
use argsgen_profiles::Profile;

#[derive(Debug, Serialize)]
pub struct GroupDoc {
    pub name: &'static str,
    pub flags: &'static [&'static str],
}

#[derive(Debug, Serialize)]
pub struct ProfileDoc {
    pub profile: Profile,
    pub groups: Vec<GroupDoc>,
    /// Every flag line of the generated text, template lines included.
    pub flags: Vec<ScannedFlag>,
    pub duplicates: Vec<Duplicate>,
}

impl ProfileDoc {
    pub fn build(profile: Profile) -> anyhow::Result<Self> {
        let flags = scan(&profile.generate())?;
        let duplicates = find_duplicates(&flags);
        let groups = profile
            .groups()
            .iter()
            .map(|g| GroupDoc {
                name: g.name,
                flags: g.flags,
            })
            .collect();

        Ok(ProfileDoc {
            profile,
            groups,
            flags,
            duplicates,
        })
    }
}

pub fn to_json(profile: Profile) -> anyhow::Result<String> {
    let doc = ProfileDoc::build(profile)?;
    Ok(serde_json::to_string_pretty(&doc)?)
}
