use std::{
    fs::File,
    io::{BufReader, Read},
    path::Path,
};

use super::errors::SplitError;

pub fn file_digest<P: AsRef<Path>>(path: P) -> Result<md5::Digest, SplitError> {
    let path = path.as_ref();
    let f = File::open(path).map_err(|e| SplitError::io("open", path, e))?;
    let mut r = BufReader::new(f);

    let mut ctx = md5::Context::new();
    let mut buf = [0u8; 64 * 1024];
    loop {
        let n = r.read(&mut buf).map_err(|e| SplitError::io("read", path, e))?;
        if n == 0 {
            break;
        }
        ctx.consume(&buf[..n]);
    }
    Ok(ctx.compute())
}

/// Fails with [`SplitError::VerifyMismatch`] unless both files hash the same.
pub fn verify_copy<S: AsRef<Path>, D: AsRef<Path>>(src: S, dst: D) -> Result<(), SplitError> {
    let (src, dst) = (src.as_ref(), dst.as_ref());
    let expected = file_digest(src)?;
    let actual = file_digest(dst)?;
    if expected != actual {
        return Err(SplitError::VerifyMismatch {
            source_path: src.to_path_buf(),
            dest_path: dst.to_path_buf(),
        });
    }
    tracing::trace!("verified {} ({:?})", dst.display(), actual);
    Ok(())
}
