//! Sorted-set intersection over word ids

use crate::dictionary::WordId;

/// Keep only the ids of `running` that also appear in `other`
///
/// Both inputs must be sorted ascending. Runs in `O(running + other)` and
/// preserves the order of `running`.
pub(crate) fn retain_common(running: &mut Vec<WordId>, other: &[WordId]) {
    let mut rest = other.iter().peekable();
    running.retain(|id| {
        while rest.next_if(|&candidate| candidate < id).is_some() {}
        rest.peek().is_some_and(|&candidate| candidate == id)
    });
}
