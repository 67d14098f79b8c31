use std::fs::File;

use clap::ValueEnum;
use derive_more::Display;

use crate::blocksize;

/// Copy strategies the lab compares, ordered from naive to tuned.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, ValueEnum, Display)]
pub enum Strategy {
    /// One byte per read and write syscall.
    #[display("byte-by-byte")]
    ByteByByte,
    /// Single heap buffer of one memory page.
    #[display("page-buffer")]
    PageBuffer,
    /// Page-sized buffer allocated on a page boundary.
    #[display("page-aligned")]
    PageAligned,
    /// Buffer sized from the page/filesystem-block lcm.
    #[display("fs-block-aligned")]
    FsBlockAligned,
    /// Lcm sizing scaled up for fewer syscalls.
    #[display("tuned-buffer")]
    TunedBuffer,
    /// Tuned sizing plus a sequential-access advise to the kernel.
    #[display("sequential-hint")]
    SequentialHint,
}

impl Strategy {
    pub const ALL: [Strategy; 6] = [
        Strategy::ByteByByte,
        Strategy::PageBuffer,
        Strategy::PageAligned,
        Strategy::FsBlockAligned,
        Strategy::TunedBuffer,
        Strategy::SequentialHint,
    ];

    /// Program name used in reports, matching the lab's historical binaries.
    pub fn label(&self) -> &'static str {
        match self {
            Strategy::ByteByByte => "mycat1",
            Strategy::PageBuffer => "mycat2",
            Strategy::PageAligned => "mycat3",
            Strategy::FsBlockAligned => "mycat4",
            Strategy::TunedBuffer => "mycat5",
            Strategy::SequentialHint => "mycat6",
        }
    }

    /// Short description used in report tables and narratives.
    pub fn describe(&self) -> &'static str {
        match self {
            Strategy::ByteByByte => "byte-by-byte",
            Strategy::PageBuffer => "add buffer",
            Strategy::PageAligned => "page aligned",
            Strategy::FsBlockAligned => "fs block aligned",
            Strategy::TunedBuffer => "optimized buffer",
            Strategy::SequentialHint => "fadvise",
        }
    }

    /// Buffer size in bytes this strategy uses for the given open file.
    pub fn buffer_size(&self, file: &File) -> u64 {
        let meta = file.metadata().ok();
        match self {
            Strategy::ByteByByte => 1,
            Strategy::PageBuffer | Strategy::PageAligned => blocksize::page_size(),
            Strategy::FsBlockAligned => blocksize::io_blocksize(meta.as_ref()),
            Strategy::TunedBuffer => blocksize::tuned_blocksize(meta.as_ref()),
            Strategy::SequentialHint => {
                blocksize::io_blocksize(meta.as_ref()) * blocksize::TUNED_SCALE
            }
        }
    }

    /// Whether the I/O buffer should live on a page boundary.
    pub fn wants_aligned_buffer(&self) -> bool {
        !matches!(self, Strategy::ByteByByte | Strategy::PageBuffer)
    }

    /// Whether the kernel should be advised about sequential access.
    pub fn wants_sequential_hint(&self) -> bool {
        matches!(self, Strategy::SequentialHint)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn labels_follow_program_order() {
        let labels: Vec<_> = Strategy::ALL.iter().map(|s| s.label()).collect();
        assert_eq!(
            labels,
            ["mycat1", "mycat2", "mycat3", "mycat4", "mycat5", "mycat6"]
        );
    }

    #[test]
    fn byte_by_byte_uses_single_byte_buffer() {
        let mut tmp = NamedTempFile::new().unwrap();
        tmp.write_all(b"meow").unwrap();
        let file = File::open(tmp.path()).unwrap();
        assert_eq!(Strategy::ByteByByte.buffer_size(&file), 1);
    }

    #[test]
    fn tuned_buffer_is_not_smaller_than_base() {
        let mut tmp = NamedTempFile::new().unwrap();
        tmp.write_all(b"meow").unwrap();
        let file = File::open(tmp.path()).unwrap();
        let base = Strategy::FsBlockAligned.buffer_size(&file);
        assert!(Strategy::TunedBuffer.buffer_size(&file) >= base);
        assert_eq!(
            Strategy::SequentialHint.buffer_size(&file),
            base * blocksize::TUNED_SCALE
        );
    }

    #[test]
    fn alignment_requirements() {
        assert!(!Strategy::ByteByByte.wants_aligned_buffer());
        assert!(!Strategy::PageBuffer.wants_aligned_buffer());
        assert!(Strategy::PageAligned.wants_aligned_buffer());
        assert!(Strategy::SequentialHint.wants_sequential_hint());
        assert!(!Strategy::TunedBuffer.wants_sequential_hint());
    }

    #[test]
    fn display_matches_cli_values() {
        assert_eq!(Strategy::ByteByByte.to_string(), "byte-by-byte");
        assert_eq!(Strategy::TunedBuffer.to_string(), "tuned-buffer");
    }
}
