/// Milliseconds since the UNIX epoch
#[cfg(not(target_arch = "wasm32"))]
pub fn epoch_millis() -> i64 {
    std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .map(|d| i64::try_from(d.as_millis()).unwrap_or(i64::MAX))
        .unwrap_or_default()
}

/// Milliseconds since the UNIX epoch
#[cfg(target_arch = "wasm32")]
pub fn epoch_millis() -> i64 {
    web_sys::window()
        .and_then(|window| window.performance())
        .map(|perf| (perf.time_origin() + perf.now()) as i64)
        .unwrap_or(0)
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod tests {
    use super::*;

    #[test]
    fn is_after_2020() {
        assert!(epoch_millis() > 1_577_836_800_000);
    }
}
