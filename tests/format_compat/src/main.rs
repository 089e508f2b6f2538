fn main() {
    println!("Run `cargo test -p format-compat` to execute identifier format tests.");
}

#[cfg(test)]
mod tests {
    use std::fs;
    use std::path::PathBuf;

    use actorid_hash::{DigestFacility, decode_base36, encode_base36, reduce_str, to_integer};
    use actorid_identifier::{ActorIdentifier, SegmentKind, machine_segment};
    use actorid_machine::{
        BrowserEnvironment, browser_fingerprint, parse_ioreg_output, parse_machine_id_file,
        parse_registry_output,
    };
    use serde::Deserialize;
    use serde::de::DeserializeOwned;

    /// Returns the path to the fixtures directory.
    fn fixtures_dir() -> PathBuf {
        PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("fixtures")
    }

    /// Loads a fixture JSON file into `T`.
    fn load_fixture<T: DeserializeOwned>(name: &str) -> T {
        let path = fixtures_dir().join(name);
        let data = fs::read_to_string(&path)
            .unwrap_or_else(|e| panic!("failed to read fixture {}: {e}", path.display()));
        serde_json::from_str(&data)
            .unwrap_or_else(|e| panic!("failed to parse fixture {}: {e}", path.display()))
    }

    #[derive(Deserialize)]
    struct Sha256Vector {
        input: String,
        hex: String,
    }

    #[derive(Deserialize)]
    struct Base36Vector {
        value: u64,
        width: usize,
        encoded: String,
    }

    #[derive(Deserialize)]
    struct SegmentVector {
        identity: String,
        width: usize,
        value: u64,
        segment: String,
    }

    #[derive(Deserialize)]
    struct OutputVector {
        output: String,
        identity: String,
    }

    #[derive(Deserialize)]
    struct BrowserVector {
        env: BrowserEnvironment,
        identity: String,
        #[serde(default)]
        segment: Option<String>,
    }

    #[derive(Deserialize)]
    struct PlatformOutputs {
        windows: Vec<OutputVector>,
        linux: Vec<OutputVector>,
        macos: Vec<OutputVector>,
        browser: Vec<BrowserVector>,
    }

    // --- Hashing ---

    #[test]
    fn fixture_sha256_both_facilities() {
        let vectors: Vec<Sha256Vector> = load_fixture("sha256.json");
        for v in &vectors {
            for facility in [DigestFacility::Streaming, DigestFacility::OneShot] {
                let bytes = facility.sha256(v.input.as_bytes());
                assert_eq!(
                    to_integer(bytes).to_hex(),
                    v.hex,
                    "digest mismatch for {:?} via {facility:?}",
                    v.input
                );
            }
        }
    }

    #[test]
    fn fixture_base36() {
        let vectors: Vec<Base36Vector> = load_fixture("base36.json");
        for v in &vectors {
            assert_eq!(
                encode_base36(v.value, v.width),
                v.encoded,
                "encode mismatch for {} width {}",
                v.value,
                v.width
            );
            assert_eq!(decode_base36(&v.encoded), Some(v.value));
        }
    }

    #[test]
    fn fixture_segment_reduction() {
        let vectors: Vec<SegmentVector> = load_fixture("segments.json");
        for v in &vectors {
            let value = reduce_str(&v.identity, v.width).unwrap();
            assert_eq!(value, v.value, "reduction mismatch for {:?}", v.identity);
            assert_eq!(encode_base36(value, v.width), v.segment);
            if v.width == SegmentKind::Machine.width() {
                assert_eq!(machine_segment(&v.identity).unwrap(), v.segment);
            }
        }
    }

    // --- Platform output parsing ---

    #[test]
    fn fixture_windows_registry_output() {
        let outputs: PlatformOutputs = load_fixture("platform_outputs.json");
        for v in &outputs.windows {
            assert_eq!(parse_registry_output(&v.output).unwrap(), v.identity);
        }
    }

    #[test]
    fn fixture_linux_machine_id() {
        let outputs: PlatformOutputs = load_fixture("platform_outputs.json");
        for v in &outputs.linux {
            assert_eq!(parse_machine_id_file(&v.output).unwrap(), v.identity);
        }
    }

    #[test]
    fn fixture_macos_ioreg_output() {
        let outputs: PlatformOutputs = load_fixture("platform_outputs.json");
        for v in &outputs.macos {
            assert_eq!(parse_ioreg_output(&v.output).unwrap(), v.identity);
        }
    }

    #[test]
    fn fixture_browser_fingerprint() {
        let outputs: PlatformOutputs = load_fixture("platform_outputs.json");
        for v in &outputs.browser {
            assert_eq!(browser_fingerprint(&v.env), v.identity);
            if let Some(segment) = &v.segment {
                assert_eq!(&machine_segment(&v.identity).unwrap(), segment);
            }
        }
    }

    // --- Identifier text form ---

    #[test]
    fn identifier_text_form() {
        let id: ActorIdentifier = "k3x9z0a1b-7qp-6xj2p1".parse().unwrap();
        assert_eq!(id.to_string(), "k3x9z0a1b-7qp-6xj2p1");
        assert_eq!(id.machine_segment(), "6xj2p1");
        assert_eq!(id.segment(SegmentKind::Random), "7qp");
        assert_eq!(id.segment(SegmentKind::Unique), "k3x9z0a1b");

        let json = serde_json::to_string(&id).unwrap();
        assert_eq!(json, r#""k3x9z0a1b-7qp-6xj2p1""#);
    }

    #[test]
    fn identifier_rejects_malformed_text() {
        for bad in [
            "",
            "7qp-6xj2p1",
            "7qp-6xj2p1-k3x9z0a1b-000",
            "7qp-6xj2p1-k3x9z0a1",
            "7qp-6xj2p1-k3x9z0a1_",
            "7qp-7qp-k3x9z0a1b",
        ] {
            assert!(bad.parse::<ActorIdentifier>().is_err(), "accepted {bad:?}");
        }
    }
}
