//! Automatic label allocation
//!
//! Chooses an unused, non-background label for a region pushed without an
//! explicit label. Appending past the largest stored label is O(1); the
//! gap scan runs only when the top of the range or the background value
//! blocks the fast paths.

use crate::error::{Error, Result};
use crate::label::LabelValue;
use crate::region::Region;
use crate::store::LabelStore;

/// Select an unused, non-background label.
///
/// Order of preference: `last + 1`, `last + 2` (when `last + 1` collides
/// with the background), `first - 1`, then the first gap in an ascending
/// scan over the stored labels that skips the background value.
///
/// # Errors
///
/// Returns [`Error::MapFull`] when every candidate is taken.
pub fn allocate_label<R: Region>(
    store: &LabelStore<R>,
    background: R::Label,
) -> Result<R::Label, R::Label> {
    let (first, last) = match (store.first_label(), store.last_label()) {
        (Some(first), Some(last)) => (first, last),
        _ => {
            // empty store: the smaller of {0, 1} that is not the background
            return Ok(if background == R::Label::ZERO {
                R::Label::ONE
            } else {
                R::Label::ZERO
            });
        }
    };

    match last.next_up() {
        Some(next) if next != background => return Ok(next),
        Some(next) => {
            // last + 1 is the background; step one past it
            if let Some(past) = next.next_up()
                && past != background
            {
                return Ok(past);
            }
        }
        None => {}
    }

    if let Some(below) = first.next_down()
        && below != background
    {
        return Ok(below);
    }

    // dense or boundary-blocked label space: scan for the first gap.
    // Candidate and stored key stay aligned while the keys are contiguous,
    // because the background value is never stored.
    let mut candidate = first;
    for stored in store.labels() {
        if candidate == background {
            candidate = match candidate.next_up() {
                Some(c) => c,
                None => break,
            };
        }
        if candidate != stored {
            return Ok(candidate);
        }
        candidate = match candidate.next_up() {
            Some(c) => c,
            None => break,
        };
    }
    Err(Error::MapFull)
}
