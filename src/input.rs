//! Standard input helpers

use crate::error::Result;
use std::io::Read;

/// Read everything from `reader` until end-of-input.
///
/// Invalid UTF-8 sequences are replaced rather than rejected, so the only
/// failure mode is the read itself.
pub fn read_all<R: Read>(mut reader: R) -> Result<String> {
    let mut buf = Vec::new();
    reader.read_to_end(&mut buf)?;
    log::trace!("read {} bytes of input", buf.len());

    Ok(match String::from_utf8(buf) {
        Ok(text) => text,
        Err(e) => {
            log::debug!("input is not valid UTF-8, decoding lossily");
            String::from_utf8_lossy(e.as_bytes()).into_owned()
        }
    })
}
