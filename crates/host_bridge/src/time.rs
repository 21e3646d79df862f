//! Clock helpers for collision-free temporary file names.

use std::cell::Cell;

thread_local! {
    static HIGH_WATER_MS: Cell<u64> = const { Cell::new(0) };
}

/// Wall-clock milliseconds since the unix epoch. Clocks before the epoch read as `0`.
pub fn unix_time_ms_now() -> u64 {
    #[cfg(target_arch = "wasm32")]
    let millis = js_sys::Date::now().max(0.0) as u64;

    #[cfg(not(target_arch = "wasm32"))]
    let millis = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .map(|elapsed| u64::try_from(elapsed.as_millis()).unwrap_or(u64::MAX))
        .unwrap_or(0);

    millis
}

/// Returns a millisecond timestamp strictly greater than any previously issued on this thread.
///
/// Two calls within the same clock millisecond still yield distinct values, so names derived
/// from the result never collide within one process context.
pub fn next_unique_timestamp_ms() -> u64 {
    HIGH_WATER_MS.with(|high_water| {
        let issued = issue_after(high_water.get(), unix_time_ms_now());
        high_water.set(issued);
        issued
    })
}

/// Next value after `previous`, never below `now`. Saturates at `u64::MAX`.
fn issue_after(previous: u64, now: u64) -> u64 {
    match previous {
        0 => now,
        previous => now.max(previous.saturating_add(1)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unique_timestamps_strictly_increase() {
        let issued: Vec<u64> = (0..16).map(|_| next_unique_timestamp_ms()).collect();
        assert!(issued.windows(2).all(|pair| pair[0] < pair[1]), "{issued:?}");
        assert!(issued[0] >= unix_time_ms_now().saturating_sub(60_000));
    }

    #[test]
    fn issuing_saturates_at_clock_ceiling() {
        assert_eq!(issue_after(0, 1_700), 1_700);
        assert_eq!(issue_after(1_700, 1_700), 1_701);
        assert_eq!(issue_after(1_700, 2_000), 2_000);
        assert_eq!(issue_after(u64::MAX, u64::MAX), u64::MAX);
        assert_eq!(issue_after(u64::MAX - 1, 5), u64::MAX);
    }
}
