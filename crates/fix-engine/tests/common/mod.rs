//! Common test utilities and fixtures for integration tests
//!
//! Log lines follow the `<prefix>:<body>` layout of a FIX engine session log,
//! with SOH rendered as `^A` unless stated otherwise.

#![allow(dead_code)]

use fix_engine::{run, PipelineConfig, RunSummary};
use fix_types::{FillRecord, FixResult};

/// New Order Single for ClOrdID 1
pub const ORDER_1: &str = "A:35=D^A40=2^A11=1^A60=T1^A55=XYZ^A54=1^A38=100^A44=10.50";

/// Fully-filled execution report for ClOrdID 1
pub const FILL_1: &str = "B:35=8^A150=2^A39=2^A40=2^A11=1^A60=T2^A6=10.40^A30=NYSE";

/// Partially-filled execution report for ClOrdID 1
pub const PARTIAL_1: &str = "B:35=8^A150=1^A39=1^A40=2^A11=1^A60=T2^A6=10.45^A30=NYSE";

/// Fully-filled execution report for an order never submitted
pub const FILL_UNKNOWN: &str = "B:35=8^A150=2^A39=2^A40=2^A11=999^A60=T9^A6=1.00^A30=ARCA";

/// Market order that must never be tracked
pub const MARKET_ORDER_2: &str = "A:35=D^A40=1^A11=2^A60=T1^A55=XYZ^A54=2^A38=50";

/// Limit order missing ClOrdID
pub const ORDER_NO_CLORDID: &str = "A:35=D^A40=2^A60=T3^A55=XYZ^A54=1^A38=100^A44=10.50";

/// A session excerpt with headers, trailers and non-FIX noise
pub fn session_log() -> Vec<String> {
    vec![
        "[0001] OUT:8=FIX.4.2^A9=60^A35=A^A49=CLIENT^A56=BROKER^A98=0^A108=30^A10=001^A".to_string(),
        "[0002] OUT:8=FIX.4.2^A9=154^A35=D^A49=CLIENT^A56=BROKER^A11=ORD-1^A21=1^A55=XYZ^A54=1^A60=20240102-09:30:00.000^A38=100^A40=2^A44=10.50^A59=0^A10=128^A".to_string(),
        "[0003] OUT:8=FIX.4.2^A9=140^A35=D^A49=CLIENT^A56=BROKER^A11=ORD-2^A21=1^A55=ABC^A54=2^A60=20240102-09:30:00.010^A38=200^A40=1^A59=0^A10=044^A".to_string(),
        "[0004] IN:8=FIX.4.2^A9=201^A35=8^A49=BROKER^A56=CLIENT^A37=B-1^A17=E-1^A11=ORD-1^A150=1^A39=1^A40=2^A55=XYZ^A54=1^A38=100^A14=40^A6=10.48^A30=NYSE^A60=20240102-09:30:00.500^A10=077^A".to_string(),
        String::new(),
        "heartbeat timer reset".to_string(),
        "[0005] IN:8=FIX.4.2^A9=201^A35=8^A49=BROKER^A56=CLIENT^A37=B-1^A17=E-2^A11=ORD-1^A150=2^A39=2^A40=2^A55=XYZ^A54=1^A38=100^A14=100^A6=10.40^A30=NYSE^A60=20240102-09:30:01.250^A10=078^A".to_string(),
        "[0006] IN:8=FIX.4.2^A9=201^A35=8^A49=BROKER^A56=CLIENT^A37=B-2^A17=E-3^A11=ORD-2^A150=2^A39=2^A40=1^A55=ABC^A54=2^A38=200^A6=20.00^A30=ARCA^A60=20240102-09:30:01.300^A10=011^A".to_string(),
    ]
}

/// Replace every `^A` with a real SOH byte
pub fn with_soh(line: &str) -> String {
    line.replace("^A", "\u{1}")
}

/// Run the pipeline over in-memory lines with default settings
pub fn run_lines<L: AsRef<str>>(lines: &[L]) -> (FixResult<RunSummary>, Vec<FillRecord>) {
    let input = lines
        .iter()
        .map(|line| line.as_ref())
        .collect::<Vec<_>>()
        .join("\n");
    let mut fills = Vec::new();
    let result = run(input.as_bytes(), &mut fills, &PipelineConfig::default());
    (result, fills)
}

/// Install a test-friendly tracing subscriber once
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_test_writer()
        .with_env_filter("fix_engine=debug")
        .try_init();
}
