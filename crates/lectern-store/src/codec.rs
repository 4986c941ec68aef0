//! Binary layout of the index artifact.
//!
//! Header: 4-byte magic, u32 format version, u32 dimension, u64 vector
//! count. Payload: count × dimension little-endian f32 values.

const MAGIC: &[u8; 4] = b"LIDX";
const FORMAT_VERSION: u32 = 1;
const HEADER_LEN: usize = 4 + 4 + 4 + 8;

/// Serialize the flat vector buffer with its header.
pub fn encode(dim: usize, vectors: &[f32]) -> Vec<u8> {
    debug_assert!(dim > 0 && vectors.len() % dim == 0);
    let count = (vectors.len() / dim) as u64;

    let mut out = Vec::with_capacity(HEADER_LEN + vectors.len() * 4);
    out.extend_from_slice(MAGIC);
    out.extend_from_slice(&FORMAT_VERSION.to_le_bytes());
    out.extend_from_slice(&(dim as u32).to_le_bytes());
    out.extend_from_slice(&count.to_le_bytes());
    for v in vectors {
        out.extend_from_slice(&v.to_le_bytes());
    }
    out
}

/// Parse an index artifact back into `(dim, count, flat vectors)`.
/// Any header or length inconsistency is reported as a corruption detail.
pub fn decode(bytes: &[u8]) -> Result<(usize, usize, Vec<f32>), String> {
    if bytes.len() < HEADER_LEN {
        return Err(format!("index artifact truncated: {} bytes", bytes.len()));
    }
    if &bytes[0..4] != MAGIC {
        return Err("bad magic in index artifact".to_string());
    }
    let version = u32::from_le_bytes(bytes[4..8].try_into().unwrap());
    if version != FORMAT_VERSION {
        return Err(format!("unsupported index format version {version}"));
    }
    let dim = u32::from_le_bytes(bytes[8..12].try_into().unwrap()) as usize;
    let count = u64::from_le_bytes(bytes[12..20].try_into().unwrap()) as usize;

    let payload = &bytes[HEADER_LEN..];
    let expected = count
        .checked_mul(dim)
        .and_then(|n| n.checked_mul(4))
        .ok_or_else(|| "index header overflows".to_string())?;
    if payload.len() != expected {
        return Err(format!(
            "index payload length {} does not match header ({count} x {dim})",
            payload.len()
        ));
    }

    let mut vectors = Vec::with_capacity(count * dim);
    for chunk in payload.chunks_exact(4) {
        vectors.push(f32::from_le_bytes([chunk[0], chunk[1], chunk[2], chunk[3]]));
    }
    Ok((dim, count, vectors))
}
