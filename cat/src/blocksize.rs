use std::fs::Metadata;
use std::os::unix::fs::MetadataExt;

/// Bounds outside of which a filesystem-reported block size is treated as
/// bogus and ignored.
const MIN_FS_BLOCK: u64 = 512;
const MAX_FS_BLOCK: u64 = 1024 * 1024;

/// Largest buffer the lcm-based sizing may produce before falling back to
/// `max(page, fs_block)`.
const MAX_LCM_BLOCK: u64 = 64 * 1024;

/// Scale factor the tuned strategies apply on top of the base block size,
/// derived from the buffer sweep results.
pub const TUNED_SCALE: u64 = 8;

/// Upper bound for the tuned buffer size.
pub const TUNED_CAP: u64 = 1024 * 1024;

/// Pages per buffer when no file metadata is available at all.
pub const FALLBACK_PAGE_MULTIPLIER: u64 = 128;

/// Memory page size of the running system.
pub fn page_size() -> u64 {
    // SAFETY: sysconf has no preconditions.
    let raw = unsafe { libc::sysconf(libc::_SC_PAGESIZE) };
    if raw <= 0 {
        4096
    } else {
        raw as u64
    }
}

pub fn gcd(mut a: u64, mut b: u64) -> u64 {
    while b != 0 {
        let t = b;
        b = a % b;
        a = t;
    }
    a
}

pub fn lcm(a: u64, b: u64) -> u64 {
    if a == 0 || b == 0 {
        return 0;
    }
    a / gcd(a, b) * b
}

pub fn is_power_of_two(n: u64) -> bool {
    n > 0 && n & (n - 1) == 0
}

fn sane_fs_block(meta: Option<&Metadata>) -> Option<u64> {
    let blksize = meta?.blksize();
    if !is_power_of_two(blksize) || !(MIN_FS_BLOCK..=MAX_FS_BLOCK).contains(&blksize) {
        return None;
    }
    Some(blksize)
}

/// Base I/O block size for a file: the lcm of page size and filesystem
/// block size when that stays within 64 KiB, otherwise the larger of the
/// two. A missing or bogus filesystem size falls back to the page size.
pub fn io_blocksize(meta: Option<&Metadata>) -> u64 {
    let page = page_size();
    let Some(fs_block) = sane_fs_block(meta) else {
        return page;
    };
    let optimal = lcm(page, fs_block);
    if optimal <= MAX_LCM_BLOCK {
        optimal
    } else {
        page.max(fs_block)
    }
}

/// Tuned block size: the base size scaled by [`TUNED_SCALE`] and capped at
/// [`TUNED_CAP`]. Without metadata the sweep's 128-page optimum is used.
pub fn tuned_blocksize(meta: Option<&Metadata>) -> u64 {
    if meta.is_none() {
        return page_size() * FALLBACK_PAGE_MULTIPLIER;
    }
    (io_blocksize(meta) * TUNED_SCALE).min(TUNED_CAP)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs::File;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn gcd_and_lcm() {
        assert_eq!(gcd(4096, 512), 512);
        assert_eq!(gcd(12, 18), 6);
        assert_eq!(lcm(4096, 512), 4096);
        assert_eq!(lcm(4096, 4096), 4096);
        assert_eq!(lcm(0, 4096), 0);
    }

    #[test]
    fn power_of_two_detection() {
        assert!(is_power_of_two(1));
        assert!(is_power_of_two(4096));
        assert!(!is_power_of_two(0));
        assert!(!is_power_of_two(3000));
    }

    #[test]
    fn page_size_is_sane() {
        let page = page_size();
        assert!(is_power_of_two(page));
        assert!(page >= 512);
    }

    #[test]
    fn io_blocksize_without_metadata_is_page_size() {
        assert_eq!(io_blocksize(None), page_size());
    }

    #[test]
    fn io_blocksize_for_real_file_stays_within_bounds() {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(b"meow").unwrap();
        let meta = File::open(file.path()).unwrap().metadata().unwrap();
        let size = io_blocksize(Some(&meta));
        assert!(is_power_of_two(size));
        assert!(size >= page_size().min(MIN_FS_BLOCK));
        assert!(size <= MAX_LCM_BLOCK.max(page_size()).max(MAX_FS_BLOCK));
    }

    #[test]
    fn tuned_blocksize_is_scaled_and_capped() {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(b"meow").unwrap();
        let meta = File::open(file.path()).unwrap().metadata().unwrap();
        let tuned = tuned_blocksize(Some(&meta));
        assert_eq!(tuned, (io_blocksize(Some(&meta)) * TUNED_SCALE).min(TUNED_CAP));
        assert!(tuned <= TUNED_CAP);
    }

    #[test]
    fn tuned_blocksize_without_metadata_uses_page_fallback() {
        assert_eq!(tuned_blocksize(None), page_size() * FALLBACK_PAGE_MULTIPLIER);
    }
}
