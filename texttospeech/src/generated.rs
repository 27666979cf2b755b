//! Protobuf bindings for `google.cloud.texttospeech.v1beta1`.
//!
//! The code under `generated/` is produced by the `generate-proto` binary
//! (`cargo run --features gen-proto --bin generate-proto`) from `proto/cloud_tts.proto`
//! and checked in, so building this crate does not require `protoc`.
pub mod texttospeech_v1beta1 {
    include!("generated/google.cloud.texttospeech.v1beta1.rs");
}
