use std::fmt;

/// Directory and file totals for a single root.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct WalkCounts {
    pub directories: usize,
    pub files: usize,
}

impl fmt::Display for WalkCounts {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let dir_noun = if self.directories == 1 {
            "directory"
        } else {
            "directories"
        };
        let file_noun = if self.files == 1 { "file" } else { "files" };
        write!(
            f,
            "{} {dir_noun}, {} {file_noun}",
            self.directories, self.files
        )
    }
}
