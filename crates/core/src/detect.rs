//! Prefix matching of a byte buffer against a [`SignatureSet`].
//!
//! The detector is a pure function of its two inputs. Labels are scanned in set
//! order and the first label with an alternative equal to the buffer's prefix of
//! the same length wins; scanning stops there.
//!
//! An alternative longer than the buffer never matches. Callers pass only the
//! bytes actually read, so a short file is never compared against zero padding
//! (otherwise a 2-byte file could match the UTF-32BE mark `00 00 FE FF`).

use tracing::{debug, trace};

use crate::signatures::SignatureSet;

/// Which label matched, and through which alternative.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SignatureMatch<'a> {
    pub label: &'a str,
    pub sequence: &'a [u8],
}

impl SignatureMatch<'_> {
    /// Number of leading bytes consumed by the matching alternative.
    pub fn len(&self) -> usize {
        self.sequence.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sequence.is_empty()
    }
}

/// Classify `buffer`, returning the label of the first matching signature.
///
/// Returns `None` when nothing matches, including for an empty buffer.
pub fn detect<'a>(buffer: &[u8], signatures: &'a SignatureSet) -> Option<&'a str> {
    detect_match(buffer, signatures).map(|m| m.label)
}

/// Like [`detect`], but also reports the alternative that matched.
pub fn detect_match<'a>(buffer: &[u8], signatures: &'a SignatureSet) -> Option<SignatureMatch<'a>> {
    for signature in signatures {
        for alternative in signature.alternatives() {
            trace!(label = signature.label(), len = alternative.len(), "comparing alternative");
            // `starts_with` is false whenever the alternative is longer than the buffer.
            if buffer.starts_with(alternative) {
                debug!(label = signature.label(), len = alternative.len(), "signature matched");
                return Some(SignatureMatch { label: signature.label(), sequence: alternative });
            }
        }
    }

    debug!(buffer_len = buffer.len(), "no signature matched");
    None
}
