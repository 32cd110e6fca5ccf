#![no_main]

use libfuzzer_sys::fuzz_target;
use titlecast::config::ParserConfig;
use titlecast::filter::CategoryFilter;
use titlecast::ingest::RecordParser;

fuzz_target!(|data: &[u8]| {
    if let Ok(input) = std::str::from_utf8(data) {
        // Neither the export parser nor the filter parser may panic
        if let Ok(parser) = RecordParser::new(ParserConfig::default()) {
            let _ = parser.parse_text(input);
        }
        let _ = CategoryFilter::from_expr(input);
    }
});
