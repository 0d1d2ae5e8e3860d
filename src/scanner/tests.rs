use std::fs;
use std::path::Path;

use super::*;
use crate::error::ScanError;

/// Write a silent PCM WAV of exactly `seconds` seconds so duration-dependent
/// behavior can be exercised against a real container.
pub(crate) fn write_pcm_wav(path: &Path, seconds: u32) {
    let sample_rate: u32 = 8_000;
    let channels: u16 = 1;
    let bits_per_sample: u16 = 16;
    let block_align = channels * bits_per_sample / 8;
    let byte_rate = sample_rate * block_align as u32;
    let data_len = byte_rate * seconds;

    let mut buf = Vec::with_capacity(44 + data_len as usize);
    buf.extend_from_slice(b"RIFF");
    buf.extend_from_slice(&(36 + data_len).to_le_bytes());
    buf.extend_from_slice(b"WAVE");
    buf.extend_from_slice(b"fmt ");
    buf.extend_from_slice(&16u32.to_le_bytes());
    buf.extend_from_slice(&1u16.to_le_bytes()); // PCM
    buf.extend_from_slice(&channels.to_le_bytes());
    buf.extend_from_slice(&sample_rate.to_le_bytes());
    buf.extend_from_slice(&byte_rate.to_le_bytes());
    buf.extend_from_slice(&block_align.to_le_bytes());
    buf.extend_from_slice(&bits_per_sample.to_le_bytes());
    buf.extend_from_slice(b"data");
    buf.extend_from_slice(&data_len.to_le_bytes());
    buf.resize(buf.len() + data_len as usize, 0);
    fs::write(path, buf).unwrap();
}

fn sample_track() -> AudioTrack {
    AudioTrack {
        id: "00000000deadbeef".into(),
        name: "Levitate".into(),
        artist: Some("Kenya Grace".into()),
        album: None,
        duration: 65_000,
        local_path: "/storage/emu/0/Music/Levitate.mp3".into(),
        file_size: 4_321,
    }
}

#[test]
fn track_serializes_with_wire_field_names() {
    let json = serde_json::to_value(sample_track()).unwrap();
    assert_eq!(json["localPath"], "/storage/emu/0/Music/Levitate.mp3");
    assert_eq!(json["fileSize"], 4_321);
    assert_eq!(json["duration"], 65_000);
    assert_eq!(json["name"], "Levitate");
    assert_eq!(json["album"], serde_json::Value::Null);
}

#[test]
fn successful_outcome_omits_error() {
    let outcome = ScanOutcome::from_result(Ok(vec![sample_track()]));
    let json = serde_json::to_value(&outcome).unwrap();
    assert_eq!(json["success"], true);
    assert_eq!(json["files"].as_array().unwrap().len(), 1);
    assert!(json.get("error").is_none());
}

#[test]
fn busy_outcome_carries_the_conflict_message() {
    let outcome = ScanOutcome::from_result(Err(ScanError::Busy));
    let json = serde_json::to_value(&outcome).unwrap();
    assert_eq!(json["success"], false);
    assert_eq!(json["error"], "scan already in progress");
    assert!(json["files"].as_array().unwrap().is_empty());
}

#[test]
fn track_ids_are_stable_per_path() {
    use super::model::track_id;
    let a = track_id(Path::new("/music/a.mp3"));
    assert_eq!(a, track_id(Path::new("/music/a.mp3")));
    assert_ne!(a, track_id(Path::new("/music/b.mp3")));
}
