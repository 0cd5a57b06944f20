#![no_main]

use libfuzzer_sys::fuzz_target;
use trieroute::Router;

fuzz_target!(|data: (Vec<(String, i32)>, String)| {
    let (patterns, path) = data;

    let mut router = Router::new();
    for (pattern, handler) in patterns {
        if router.insert("GET", pattern, handler).is_err() {
            continue;
        }
    }

    let _ = router.lookup("GET", &path);
    let _ = router.lookup_without_params("GET", &path);
});
