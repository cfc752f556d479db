use crate::error::{MirrorError, MirrorResult};
use crate::types::{MirrorOutcome, MirrorStats, Opts};
use crate::{announce, verbose};
use filetime::{FileTime, set_file_times};
use std::fs;
use std::path::Path;

/// Recursively merges `src` into `dest`. Missing directories under `dest` are created, files
/// which exist in both trees are overwritten, and anything only in `dest` is left alone. A
/// missing `src` is not an error: it's reported as `MirrorOutcome::SourceMissing` and nothing
/// is touched.
///
pub fn mirror_dir(src: &Path, dest: &Path, opts: &Opts) -> MirrorResult<MirrorOutcome> {
    if !src.exists() {
        verbose!(opts, "{} does not exist", src.display());
        return Ok(MirrorOutcome::SourceMissing);
    }

    let mut stats = MirrorStats::default();

    if src.is_dir() {
        merge_dir(src, dest, opts, &mut stats)?;
    } else {
        copy_file_action(src, dest, opts, &mut stats)?;
    }

    Ok(MirrorOutcome::Mirrored(stats))
}

// is_dir() follows symlinks, so a linked directory is copied as a real one.
fn merge_dir(src: &Path, dest: &Path, opts: &Opts, stats: &mut MirrorStats) -> MirrorResult<()> {
    if !dest.is_dir() {
        announce!(opts, "creating {}", dest.display());

        if !opts.noop {
            fs::create_dir_all(dest).map_err(|e| MirrorError::io(dest, e))?;
        }

        stats.dirs += 1;
    }

    for f in fs::read_dir(src).map_err(|e| MirrorError::io(src, e))? {
        let f = f.map_err(|e| MirrorError::io(src, e))?;
        let src_path = f.path();
        let dest_path = dest.join(f.file_name());

        if src_path.is_dir() {
            merge_dir(&src_path, &dest_path, opts, stats)?;
        } else {
            copy_file_action(&src_path, &dest_path, opts, stats)?;
        }
    }

    Ok(())
}

fn copy_file_action(
    src: &Path,
    dest: &Path,
    opts: &Opts,
    stats: &mut MirrorStats,
) -> MirrorResult<()> {
    announce!(opts, "{} -> {}", src.display(), dest.display());

    let metadata = fs::metadata(src).map_err(|e| MirrorError::io(src, e))?;
    stats.files += 1;

    if opts.noop {
        stats.bytes += metadata.len();
        return Ok(());
    }

    stats.bytes += fs::copy(src, dest).map_err(|source| MirrorError::Copy {
        src: src.to_path_buf(),
        dest: dest.to_path_buf(),
        source,
    })?;

    let atime = FileTime::from_last_access_time(&metadata);
    let mtime = FileTime::from_last_modification_time(&metadata);
    set_file_times(dest, atime, mtime).map_err(|e| MirrorError::io(dest, e))
}
