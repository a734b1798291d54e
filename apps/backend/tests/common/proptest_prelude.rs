// Proptest prelude: shared configuration for property-test binaries.
//
// Env knobs:
// - PROPTEST_CASES: number of cases per property (default 256).

pub fn proptest_prelude_config() -> proptest::prelude::ProptestConfig {
    let cases = std::env::var("PROPTEST_CASES")
        .ok()
        .and_then(|s| s.parse::<u32>().ok())
        .unwrap_or(256)
        .max(1);

    proptest::prelude::ProptestConfig {
        cases,
        ..proptest::prelude::ProptestConfig::default()
    }
}
