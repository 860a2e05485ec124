//! Block statistics for the telemetry taps.
//!
//! Two volume formulas are provided. `rms` measures raw signal energy,
//! including any DC offset; `rms_centered` subtracts the block mean first
//! and so only measures the AC part. They agree on zero-mean blocks.

/// Root-mean-square of the raw samples. Empty blocks measure 0.
pub fn rms(block: &[f32]) -> f32 {
    if block.is_empty() {
        return 0.0;
    }
    let energy: f32 = block.iter().map(|&s| s * s).sum();
    (energy / block.len() as f32).sqrt()
}

/// Root-mean-square after removing the block mean. Empty blocks measure 0.
pub fn rms_centered(block: &[f32]) -> f32 {
    if block.is_empty() {
        return 0.0;
    }
    let len = block.len() as f32;
    let mean = block.iter().sum::<f32>() / len;
    let energy: f32 = block.iter().map(|&s| (s - mean) * (s - mean)).sum();
    (energy / len).sqrt()
}

/// Largest and smallest sample, as `(hi, low)`. `None` for empty blocks.
pub fn hi_low(block: &[f32]) -> Option<(f32, f32)> {
    let (&first, rest) = block.split_first()?;
    Some(
        rest.iter()
            .fold((first, first), |(hi, low), &s| (hi.max(s), low.min(s))),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rms_of_silence() {
        assert_eq!(rms(&[0.0; 64]), 0.0);
        assert_eq!(rms_centered(&[0.0; 64]), 0.0);
        assert_eq!(rms(&[]), 0.0);
    }

    #[test]
    fn test_rms_of_alternating_full_scale() {
        let block: Vec<f32> = (0..64).map(|i| if i % 2 == 0 { 1.0 } else { -1.0 }).collect();
        assert!((rms(&block) - 1.0).abs() < 1e-6);
        assert!((rms_centered(&block) - 1.0).abs() < 1e-6);
    }

    #[test]
    fn test_formulas_diverge_on_dc() {
        let block = [0.5; 32];
        assert!((rms(&block) - 0.5).abs() < 1e-6);
        assert!(rms_centered(&block).abs() < 1e-6);
    }

    #[test]
    fn test_hi_low() {
        assert_eq!(hi_low(&[0.1, -0.7, 0.9, 0.0]), Some((0.9, -0.7)));
        assert_eq!(hi_low(&[0.25]), Some((0.25, 0.25)));
        assert_eq!(hi_low(&[]), None);
    }
}
