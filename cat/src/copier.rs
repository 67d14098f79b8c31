use std::fs::File;
use std::io::{self, Read, Write};
use std::os::fd::AsRawFd;
use std::path::Path;

use tracing::warn;

use crate::blocksize;
use crate::buffer::AlignedBuf;
use crate::error::CatError;
use crate::strategy::Strategy;

enum IoBuffer {
    Plain(Vec<u8>),
    Aligned(AlignedBuf),
}

impl IoBuffer {
    fn for_strategy(strategy: Strategy, len: usize) -> Self {
        if strategy.wants_aligned_buffer() {
            IoBuffer::Aligned(AlignedBuf::new(len, blocksize::page_size() as usize))
        } else {
            IoBuffer::Plain(vec![0; len])
        }
    }

    fn as_mut_slice(&mut self) -> &mut [u8] {
        match self {
            IoBuffer::Plain(buf) => buf.as_mut_slice(),
            IoBuffer::Aligned(buf) => buf,
        }
    }
}

/// Streams `path` into `out` using the buffering scheme of `strategy`.
/// Returns the number of bytes copied.
pub fn cat_file(path: &Path, out: &mut impl Write, strategy: Strategy) -> Result<u64, CatError> {
    let mut file = File::open(path).map_err(|source| CatError::Open {
        path: path.to_path_buf(),
        source,
    })?;

    if strategy.wants_sequential_hint() {
        advise_sequential(&file);
    }

    let len = strategy.buffer_size(&file).max(1) as usize;
    let mut buffer = IoBuffer::for_strategy(strategy, len);
    copy_loop(&mut file, out, buffer.as_mut_slice())
}

fn copy_loop(file: &mut File, out: &mut impl Write, buf: &mut [u8]) -> Result<u64, CatError> {
    let mut total = 0u64;
    loop {
        let read = match file.read(buf) {
            Ok(0) => break,
            Ok(read) => read,
            Err(error) if error.kind() == io::ErrorKind::Interrupted => continue,
            Err(source) => return Err(CatError::Read { source }),
        };
        out.write_all(&buf[..read])
            .map_err(|source| CatError::Write { source })?;
        total += read as u64;
    }
    Ok(total)
}

/// Advises the kernel that the file will be read start to finish. The hint
/// only tunes readahead, so a failure is logged and otherwise ignored.
fn advise_sequential(file: &File) {
    // SAFETY: the descriptor is valid for the lifetime of `file`.
    let code = unsafe {
        libc::posix_fadvise(file.as_raw_fd(), 0, 0, libc::POSIX_FADV_SEQUENTIAL)
    };
    if code != 0 {
        warn!("posix_fadvise(SEQUENTIAL) failed with code {code}");
    }
}
