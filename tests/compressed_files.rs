use std::error::Error;
use std::io::{Read, Write};

use proptest::prelude::*;
use tempfile::tempdir;

use statefile::codec::{self, Codec};
use statefile::{fs_op, ErrorKind};

type TestResult = Result<(), Box<dyn Error>>;

fn encode(name: &str, data: &[u8]) -> Vec<u8> {
    let mut sink = Vec::new();
    let mut w = codec::compress(name, &mut sink);
    w.write_all(data).unwrap();
    w.finish().unwrap();
    sink
}

fn decode(name: &str, data: &[u8]) -> Vec<u8> {
    let mut out = Vec::new();
    codec::decompress(name, data).unwrap().read_to_end(&mut out).unwrap();
    out
}

proptest! {
    #[test]
    fn gzip_names_round_trip(data in proptest::collection::vec(any::<u8>(), 0..4096), stem in "[a-z]{1,8}") {
        let name = format!("{stem}.gz");
        let encoded = encode(&name, &data);
        prop_assert_eq!(&encoded[..2], &[0x1fu8, 0x8bu8][..]);
        prop_assert_eq!(decode(&name, &encoded), data);
    }

    #[test]
    fn other_names_pass_bytes_through(data in proptest::collection::vec(any::<u8>(), 0..4096), ext in "(txt|json|yaml|gzip|GZ|gz\\.bak)") {
        let name = format!("state.{ext}");
        let encoded = encode(&name, &data);
        prop_assert_eq!(&encoded, &data);
        prop_assert_eq!(decode(&name, &encoded), data);
    }
}

#[test]
fn compressed_state_file_on_disk() -> TestResult {
    let td = tempdir()?;
    let path = td.path().join("cluster.yaml.gz");
    let doc = "kind: Node\nmetadata:\n  name: node-0\n".repeat(200);

    let file = fs_op::open_write(&path)?;
    let mut w = codec::compress(&path, file);
    w.write_all(doc.as_bytes())?;
    w.finish()?;

    let raw = fs_op::read(&path)?;
    assert!(raw.len() < doc.len(), "expected compression to shrink repetitive text");

    let mut r = codec::decompress(&path, fs_op::open(&path)?)?;
    let mut back = String::new();
    r.read_to_string(&mut back)?;
    assert_eq!(back, doc);
    Ok(())
}

#[test]
fn plain_file_written_through_codec_is_readable_directly() -> TestResult {
    let td = tempdir()?;
    let path = td.path().join("cluster.yaml");

    let file = fs_op::open_write(&path)?;
    codec::with_writer(&path, file, |w| w.write_all(b"kind: Pod\n"))?;

    assert_eq!(fs_op::read(&path)?, b"kind: Pod\n");
    Ok(())
}

#[test]
fn misnamed_plain_file_is_format_error() -> TestResult {
    let td = tempdir()?;
    let path = td.path().join("actually-plain.gz");
    fs_op::write(&path, b"Hello, World!")?;

    let err = codec::decompress(&path, fs_op::open(&path)?).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Format);
    Ok(())
}

#[test]
fn appended_gzip_members_decode_as_one_stream() -> TestResult {
    let td = tempdir()?;
    let path = td.path().join("events.log.gz");

    fs_op::append(&path, &encode("events.log.gz", b"line 1\n"))?;
    fs_op::append(&path, &encode("events.log.gz", b"line 2\n"))?;

    assert_eq!(decode("events.log.gz", &fs_op::read(&path)?), b"line 1\nline 2\n");
    Ok(())
}

#[test]
fn codec_is_resolved_once_from_the_name() {
    let w = codec::compress("a.gz", Vec::new());
    assert_eq!(w.codec(), Codec::Gzip);
    let w = codec::compress("a.txt", Vec::new());
    assert_eq!(w.codec(), Codec::Identity);
}
