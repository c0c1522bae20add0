use super::metrics::MAX_SCROLL_FOR_MINIMIZE;

/// Blend scroll and drag offsets, clamped to `[0, MAX_SCROLL_FOR_MINIMIZE]`.
/// Non-finite inputs count as zero.
#[inline]
pub fn effective_scroll(raw_scroll: f32, drag_offset: f32) -> f32 {
    let raw = if raw_scroll.is_finite() { raw_scroll } else { 0.0 };
    let drag = if drag_offset.is_finite() { drag_offset } else { 0.0 };
    (raw + drag).clamp(0.0, MAX_SCROLL_FOR_MINIMIZE)
}

/// Normalized immersion in `[0, 1]`
#[inline]
pub fn progress(raw_scroll: f32, drag_offset: f32) -> f32 {
    (effective_scroll(raw_scroll, drag_offset) / MAX_SCROLL_FOR_MINIMIZE).clamp(0.0, 1.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_progress_linear_in_range() {
        assert_eq!(progress(0.0, 0.0), 0.0);
        assert_eq!(progress(300.0, 0.0), 0.5);
        assert_eq!(progress(600.0, 0.0), 1.0);
    }

    #[test]
    fn test_progress_clamps() {
        assert_eq!(progress(-50.0, 0.0), 0.0);
        assert_eq!(progress(10_000.0, 0.0), 1.0);
        assert_eq!(progress(f32::NAN, 0.0), 0.0);
        assert_eq!(progress(f32::INFINITY, 0.0), 0.0);
    }

    #[test]
    fn test_drag_offset_is_additive() {
        assert_eq!(effective_scroll(100.0, 50.0), 150.0);
        assert_eq!(effective_scroll(100.0, -150.0), 0.0);
    }

    #[test]
    fn test_progress_monotonic() {
        let mut prev = 0.0;
        for i in 0..=800 {
            let p = progress(i as f32, 0.0);
            assert!(p >= prev, "not monotonic at {}", i);
            assert!((0.0..=1.0).contains(&p));
            prev = p;
        }
    }
}
