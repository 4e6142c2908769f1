//! JSON test vector loader shared by the event tests.

#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]
#![allow(clippy::panic)]
#![allow(dead_code)]

use std::fs;

use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct TestVector {
    pub description: String,
    pub frame: FrameData,
    #[serde(default)]
    pub expect: Option<serde_json::Value>,
    #[serde(default)]
    pub expect_error: Option<ExpectError>,
}

#[derive(Debug, Deserialize)]
pub struct ExpectError {
    pub code: String,
    /// Field path, for `PAYLOAD_DECODE`.
    #[serde(default)]
    pub field: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct FrameData {
    pub encoding: String,
    pub data: serde_json::Value,
}

impl FrameData {
    /// Raw frame bytes as the transport would hand them over.
    pub fn bytes(&self) -> Vec<u8> {
        match self.encoding.as_str() {
            "json" => serde_json::to_vec(&self.data).unwrap(),
            "text" => self
                .data
                .as_str()
                .expect("text frame must be a string")
                .as_bytes()
                .to_vec(),
            other => panic!("unsupported encoding: {other}"),
        }
    }
}

pub fn load(name: &str) -> TestVector {
    let s = fs::read_to_string(format!("tests/vectors/{name}")).unwrap();
    serde_json::from_str(&s).unwrap()
}
