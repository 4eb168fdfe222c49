#![no_main]

use libfuzzer_sys::fuzz_target;

use hashbench_core::parser::{parse_line, ReportLine};

fuzz_target!(|line: &str| {
    match parse_line(line) {
        Ok(ReportLine::Sequential(seconds)) | Ok(ReportLine::Parallel { seconds, .. }) => {
            assert!(seconds.is_finite() && seconds >= 0.0);
        }
        Ok(ReportLine::Header(name)) => assert_eq!(name, name.trim()),
        Err(_) => {}
    }
});
