#![no_main]

use folio::corpus::Catalog;
use folio::query::resolve;
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &str| {
    // A resolved title must contain the uppercased query
    let catalog = Catalog::shakespeare();
    if let Some(title) = resolve(data, catalog.titles()) {
        assert!(title.contains(&data.to_uppercase()));
    }
});
