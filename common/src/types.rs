use std::ops::AddAssign;

pub struct Opts {
    pub verbose: bool,
    pub noop: bool,
}

/// What a single mirror call did. In noop mode these are the things it would have done.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct MirrorStats {
    pub files: u64,
    pub dirs: u64,
    pub bytes: u64,
}

impl AddAssign for MirrorStats {
    fn add_assign(&mut self, other: Self) {
        self.files += other.files;
        self.dirs += other.dirs;
        self.bytes += other.bytes;
    }
}

#[derive(Debug, PartialEq, Eq)]
pub enum MirrorOutcome {
    SourceMissing,
    Mirrored(MirrorStats),
}
