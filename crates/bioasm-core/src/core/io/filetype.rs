use serde::Deserialize;
use std::fmt;

/// A structure file format, guessed from the filename extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StructureFiletype {
    Pdb,
    Cif,
    Unknown,
}

/// Known extensions per type, in match priority order; entries include the
/// leading period and are matched as case-insensitive filename suffixes.
const EXTENSION_TABLE: &[(StructureFiletype, &[&str])] = &[
    (
        StructureFiletype::Pdb,
        &[".ent", ".pdb", ".ent.gz", ".pdb.gz"],
    ),
    (
        StructureFiletype::Cif,
        &[".cif", ".mmcif", ".cif.gz", ".mmcif.gz"],
    ),
];

impl StructureFiletype {
    /// The file extensions associated with this type (empty for `Unknown`).
    pub fn extensions(&self) -> &'static [&'static str] {
        EXTENSION_TABLE
            .iter()
            .find(|(filetype, _)| filetype == self)
            .map(|(_, extensions)| *extensions)
            .unwrap_or(&[])
    }
}

impl fmt::Display for StructureFiletype {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            StructureFiletype::Pdb => "PDB",
            StructureFiletype::Cif => "mmCIF",
            StructureFiletype::Unknown => "unknown",
        })
    }
}

/// Guesses the type of a structure file from its filename.
///
/// First matching entry of the extension table wins; an unrecognized
/// extension yields [`StructureFiletype::Unknown`], never an error.
pub fn guess_filetype(filename: &str) -> StructureFiletype {
    let lower = filename.to_lowercase();
    for (filetype, extensions) in EXTENSION_TABLE {
        for extension in *extensions {
            if lower.ends_with(extension) {
                return *filetype;
            }
        }
    }
    StructureFiletype::Unknown
}
