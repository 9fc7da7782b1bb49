use parking_spaces::Detection;

/// Deterministic sub-pixel jitter in `[-amp, amp]`, so fixtures look like
/// detector noise without pulling in a random generator.
pub fn jitter(seed: usize, amp: f64) -> f64 {
    ((seed as f64) * 12.9898).sin() * amp
}

/// A box of size `w x h` centred on `(cx, cy)` in frame `t`.
pub fn car(t: usize, cx: f64, cy: f64, w: f64, h: f64) -> Detection {
    Detection::from_xyxy(
        t as i64,
        cx - w / 2.0,
        cy - h / 2.0,
        cx + w / 2.0,
        cy + h / 2.0,
    )
}

/// One parked car per bay in every frame, with small center jitter.
pub fn parked_lot(bays: &[(f64, f64)], frames: usize, size: f64) -> Vec<Detection> {
    let mut detections = Vec::with_capacity(bays.len() * frames);
    for t in 0..frames {
        for (b, &(cx, cy)) in bays.iter().enumerate() {
            let seed = t * 31 + b * 7 + 1;
            detections.push(car(
                t,
                cx + jitter(seed, 2.0),
                cy + jitter(seed + 1000, 2.0),
                size,
                size,
            ));
        }
    }
    detections
}

/// A car seen only in the listed frames, parked at `(cx, cy)`.
pub fn visitor(frames: &[usize], cx: f64, cy: f64, size: f64) -> Vec<Detection> {
    frames
        .iter()
        .map(|&t| car(t, cx + jitter(t, 1.0), cy, size, size))
        .collect()
}
