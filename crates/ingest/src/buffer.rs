//! Exact-length buffering of streams with unreliable length hints.

use std::io::{self, Read};

/// Initial allocation when the length hint is unusable.
const DEFAULT_CAPACITY: usize = 30_000;

/// Read `stream` to end, returning a buffer of exactly the bytes read.
///
/// `hint` is the stream's self-reported remaining length. It is a hint, not
/// a contract: values of 0 or 1 are ignored, and a wrong value (in either
/// direction) only costs an extra allocation, never corrupts the output.
///
/// While the hint is trusted, filling the buffer triggers a single-byte
/// probe: end-of-stream there means the hint was exact and we allocated
/// precisely once. Data means the hint lied, so the buffer switches to
/// plain doubling from then on.
pub fn read_with_hint<R: Read + ?Sized>(stream: &mut R, hint: usize) -> io::Result<Vec<u8>> {
    let mut trusted = hint > 1;
    let mut buf = vec![0u8; if trusted { hint } else { DEFAULT_CAPACITY }];
    let mut offset = 0;

    loop {
        if offset == buf.len() {
            if trusted {
                let mut probe = [0u8; 1];
                if stream.read(&mut probe)? == 0 {
                    break;
                }
                trusted = false;
                buf.resize(usize::max(buf.len() * 2, DEFAULT_CAPACITY), 0);
                buf[offset] = probe[0];
                offset += 1;
            } else {
                buf.resize(buf.len() * 2, 0);
            }
        }

        let read = stream.read(&mut buf[offset..])?;
        if read == 0 {
            break;
        }
        offset += read;
    }

    buf.truncate(offset);
    Ok(buf)
}
