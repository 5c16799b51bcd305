//! On-disk index format.
//!
//! Layout, all integers little-endian:
//! `MAGIC (8 bytes) | header length (u32) | header JSON | count * dims f32`.
//! The header records the format version, model, corpus fingerprint and the
//! record ids in build order.

use std::fs::File;
use std::io::{BufReader, BufWriter, Read, Write};
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::info;
use verity_core::constants::{INDEX_FORMAT_VERSION, INDEX_MAGIC};
use verity_core::errors::IndexError;
use verity_core::RecordId;

use crate::flat::FlatIndex;

/// Magic plus the header length field.
const PREAMBLE_BYTES: u64 = 8 + 4;

/// Headers hold one id per record; anything past this is corrupt.
const MAX_HEADER_BYTES: u64 = 256 * 1024 * 1024;

#[derive(Serialize, Deserialize)]
struct Header {
    format_version: u32,
    dimensions: usize,
    model: String,
    corpus_fingerprint: String,
    ids: Vec<RecordId>,
}

/// Write `index` to `path`, replacing any previous file atomically.
pub fn save(index: &FlatIndex, path: &Path) -> Result<(), IndexError> {
    let io_err = |e: std::io::Error| IndexError::Io {
        path: path.display().to_string(),
        reason: e.to_string(),
    };

    let header = Header {
        format_version: INDEX_FORMAT_VERSION,
        dimensions: index.dimensions(),
        model: index.model().to_string(),
        corpus_fingerprint: index.corpus_fingerprint().to_string(),
        ids: index.ids().to_vec(),
    };
    let header_bytes = serde_json::to_vec(&header).map_err(|e| IndexError::Format {
        path: path.display().to_string(),
        reason: e.to_string(),
    })?;
    let header_len = u32::try_from(header_bytes.len()).map_err(|_| IndexError::Format {
        path: path.display().to_string(),
        reason: "header exceeds 4 GiB".to_string(),
    })?;

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent).map_err(io_err)?;
    }
    let tmp = path.with_extension("tmp");
    {
        let mut out = BufWriter::new(File::create(&tmp).map_err(io_err)?);
        out.write_all(INDEX_MAGIC).map_err(io_err)?;
        out.write_all(&header_len.to_le_bytes()).map_err(io_err)?;
        out.write_all(&header_bytes).map_err(io_err)?;
        for value in index.raw_vectors() {
            out.write_all(&value.to_le_bytes()).map_err(io_err)?;
        }
        out.flush().map_err(io_err)?;
    }
    std::fs::rename(&tmp, path).map_err(io_err)?;

    info!(path = %path.display(), records = index.len(), "vector index saved");
    Ok(())
}

/// Read an index written by [`save`].
pub fn load(path: &Path) -> Result<FlatIndex, IndexError> {
    let display = path.display().to_string();
    let io_err = |e: std::io::Error| IndexError::Io {
        path: display.clone(),
        reason: e.to_string(),
    };
    let format_err = |reason: String| IndexError::Format {
        path: display.clone(),
        reason,
    };

    let file = File::open(path).map_err(io_err)?;
    let file_len = file.metadata().map_err(io_err)?.len();
    let mut input = BufReader::new(file);

    let mut magic = [0u8; 8];
    input
        .read_exact(&mut magic)
        .map_err(|e| format_err(format!("truncated magic: {e}")))?;
    if &magic != INDEX_MAGIC {
        return Err(format_err("not a verity index file".to_string()));
    }

    let mut len_bytes = [0u8; 4];
    input
        .read_exact(&mut len_bytes)
        .map_err(|e| format_err(format!("truncated header length: {e}")))?;
    let header_len = u64::from(u32::from_le_bytes(len_bytes));
    if header_len > MAX_HEADER_BYTES || PREAMBLE_BYTES + header_len > file_len {
        return Err(format_err(format!(
            "header length {header_len} does not fit a {file_len} byte file"
        )));
    }
    let mut header_bytes = vec![0u8; header_len as usize];
    input
        .read_exact(&mut header_bytes)
        .map_err(|e| format_err(format!("truncated header: {e}")))?;
    let header: Header = serde_json::from_slice(&header_bytes)
        .map_err(|e| format_err(format!("bad header: {e}")))?;

    if header.format_version != INDEX_FORMAT_VERSION {
        return Err(format_err(format!(
            "format version {} is not supported (expected {INDEX_FORMAT_VERSION})",
            header.format_version
        )));
    }

    let expected = header
        .ids
        .len()
        .checked_mul(header.dimensions)
        .and_then(|n| n.checked_mul(4))
        .ok_or_else(|| {
            format_err(format!(
                "{} vectors of {} dimensions overflow",
                header.ids.len(),
                header.dimensions
            ))
        })?;
    if (expected as u64) != file_len - PREAMBLE_BYTES - header_len {
        return Err(format_err(format!(
            "vector data is {} bytes, expected {expected}",
            file_len - PREAMBLE_BYTES - header_len
        )));
    }
    let mut body = Vec::with_capacity(expected);
    input.read_to_end(&mut body).map_err(io_err)?;
    if body.len() != expected {
        return Err(format_err(format!(
            "vector data is {} bytes, expected {expected}",
            body.len()
        )));
    }
    let vectors = bytes_to_f32_vec(&body);

    let index = FlatIndex::from_raw_parts(
        header.model,
        header.corpus_fingerprint,
        header.dimensions,
        header.ids,
        vectors,
    )
    .map_err(|e| format_err(e.to_string()))?;

    info!(path = %path.display(), records = index.len(), model = index.model(), "vector index loaded");
    Ok(index)
}

fn bytes_to_f32_vec(bytes: &[u8]) -> Vec<f32> {
    bytes
        .chunks_exact(4)
        .map(|c| f32::from_le_bytes([c[0], c[1], c[2], c[3]]))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> FlatIndex {
        FlatIndex::from_vectors(
            "topic-encoder-v1",
            "abc",
            3,
            vec![RecordId::new(1, 1), RecordId::new(1, 2)],
            vec![vec![1.0, 2.0, 2.0], vec![0.0, 0.0, 5.0]],
        )
        .unwrap()
    }

    #[test]
    fn save_then_load_preserves_search() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("nested").join("index.vrty");
        let original = sample();
        save(&original, &path).unwrap();

        let loaded = load(&path).unwrap();
        assert_eq!(loaded.ids(), original.ids());
        assert_eq!(loaded.model(), "topic-encoder-v1");
        assert_eq!(loaded.corpus_fingerprint(), "abc");
        let q = [0.2, 0.1, 0.9];
        assert_eq!(
            loaded.search(&q, 2, None).unwrap(),
            original.search(&q, 2, None).unwrap()
        );
    }

    #[test]
    fn missing_file_is_io_error() {
        let dir = tempfile::TempDir::new().unwrap();
        assert!(matches!(
            load(&dir.path().join("absent.vrty")),
            Err(IndexError::Io { .. })
        ));
    }

    #[test]
    fn wrong_magic_is_format_error() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("bogus.vrty");
        std::fs::write(&path, b"NOTANINDEXFILE").unwrap();
        assert!(matches!(load(&path), Err(IndexError::Format { .. })));
    }

    #[test]
    fn truncated_body_is_format_error() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("index.vrty");
        save(&sample(), &path).unwrap();
        let bytes = std::fs::read(&path).unwrap();
        std::fs::write(&path, &bytes[..bytes.len() - 3]).unwrap();
        assert!(matches!(load(&path), Err(IndexError::Format { .. })));
    }

    fn write_raw(path: &Path, header_len: u32, header: &[u8], body: &[u8]) {
        let mut bytes = INDEX_MAGIC.to_vec();
        bytes.extend_from_slice(&header_len.to_le_bytes());
        bytes.extend_from_slice(header);
        bytes.extend_from_slice(body);
        std::fs::write(path, bytes).unwrap();
    }

    #[test]
    fn header_length_past_end_of_file_is_format_error() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("index.vrty");
        write_raw(&path, u32::MAX, b"{}", &[]);
        assert!(matches!(load(&path), Err(IndexError::Format { .. })));
    }

    #[test]
    fn overflowing_dimensions_are_format_error() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("index.vrty");
        let header = format!(
            r#"{{"format_version":{INDEX_FORMAT_VERSION},"dimensions":{},"model":"m","corpus_fingerprint":"fp","ids":[{{"collection":1,"sequence":1}},{{"collection":1,"sequence":2}}]}}"#,
            usize::MAX
        );
        write_raw(&path, header.len() as u32, header.as_bytes(), &[0u8; 16]);
        assert!(matches!(load(&path), Err(IndexError::Format { .. })));
    }
}
