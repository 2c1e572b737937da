//! Silence classification
//!
//! A sequence is silent when every amplitude is exactly zero. There is no
//! threshold: a single sample of amplitude 1 makes the sequence audible.
//! The empty sequence is silent.

/// Check whether every amplitude is zero
///
/// Stops at the first nonzero sample.
///
/// # Example
///
/// ```
/// use silence_probe::analysis::silence::is_silent;
///
/// assert!(is_silent(&[0, 0, 0]));
/// assert!(!is_silent(&[0, -1, 0]));
/// assert!(is_silent(&[]));
/// ```
pub fn is_silent(samples: &[i32]) -> bool {
    first_sound(samples).is_none()
}

/// Index of the first nonzero amplitude, if any
pub fn first_sound(samples: &[i32]) -> Option<usize> {
    samples.iter().position(|&s| s != 0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::io::decoder::decode_samples;
    use crate::io::format::FormatDescriptor;

    #[test]
    fn test_empty_is_silent() {
        assert!(is_silent(&[]));
        assert_eq!(first_sound(&[]), None);
    }

    #[test]
    fn test_zeros_are_silent() {
        assert!(is_silent(&vec![0; 4096]));
    }

    #[test]
    fn test_any_nonzero_is_sound() {
        assert!(!is_silent(&[1]));
        assert!(!is_silent(&[-1]));
        assert!(!is_silent(&[0, 0, 0, 32767]));
        assert_eq!(first_sound(&[0, 0, -128, 5]), Some(2));
    }

    #[test]
    fn test_verdict_is_repeatable() {
        let samples = vec![0, 0, 3, 0];
        assert_eq!(is_silent(&samples), is_silent(&samples));
        let silent = vec![0; 16];
        assert_eq!(is_silent(&silent), is_silent(&silent));
    }

    #[test]
    fn test_decoded_buffers() {
        let be16 = FormatDescriptor::new(16, true, true).unwrap();
        let le16 = FormatDescriptor::new(16, false, true).unwrap();
        let unsigned8 = FormatDescriptor::new(8, false, false).unwrap();
        let signed8 = FormatDescriptor::new(8, false, true).unwrap();

        assert!(is_silent(&decode_samples(&[], be16)));
        assert!(is_silent(&decode_samples(&[0x00, 0x00, 0x00, 0x00], be16)));
        assert!(!is_silent(&decode_samples(&[0x00, 0x01, 0x00, 0x00], be16)));
        assert!(!is_silent(&decode_samples(&[0x01, 0x00], le16)));
        assert!(is_silent(&decode_samples(&[128], unsigned8)));
        assert!(!is_silent(&decode_samples(&[0], unsigned8)));
        assert!(is_silent(&decode_samples(&[0], signed8)));
    }

    #[test]
    fn test_little_endian_late_sample_is_heard() {
        // Sound only in the second pair must not be missed
        let le16 = FormatDescriptor::new(16, false, true).unwrap();
        assert!(!is_silent(&decode_samples(&[0x00, 0x00, 0x01, 0x00], le16)));
    }
}
