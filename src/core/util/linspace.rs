/// `count` evenly spaced values over `[start, stop]`, both ends included.
///
/// A single sample sits at `start`; the last sample of a longer sequence is
/// exactly `stop` rather than the accumulated `start + (count - 1) * step`.
#[must_use]
pub fn linspace(start: f64, stop: f64, count: usize) -> Vec<f64> {
    match count {
        0 => Vec::new(),
        1 => vec![start],
        _ => {
            let step = (stop - start) / (count - 1) as f64;

            (0..count)
                .map(|i| if i == count - 1 { stop } else { start + i as f64 * step })
                .collect()
        }
    }
}
