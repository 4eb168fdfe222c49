#![no_main]

use libfuzzer_sys::fuzz_target;

use hashbench_core::config::BenchConfig;
use hashbench_core::parser::ReportParser;

fuzz_target!(|data: &[u8]| {
    let Ok(report) = std::str::from_utf8(data) else {
        return;
    };

    let config = BenchConfig::default();
    let parser = ReportParser::for_config(&config);
    let records = parser.parse(report);

    // Never more records than result lines, every one tracked and non-negative.
    assert!(records.len() <= report.lines().count());
    for record in &records {
        assert!(config.tracks(record.algorithm.as_str()));
        assert!(record.seconds.is_finite() && record.seconds >= 0.0);
    }
    assert_eq!(records, parser.parse(report), "parse is not deterministic");
});
