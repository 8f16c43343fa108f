use std::sync::atomic::{AtomicU64, Ordering};

use filmorate_core::{AppError, AppResult};

/// Largest identifier a sequence hands out.
const LAST_ID: u64 = i64::MAX.unsigned_abs();

/// Thread-safe source of strictly increasing positive identifiers.
///
/// The counter runs one past [`i64::MAX`] so the last positive value is still
/// issued before the sequence reports exhaustion.
#[derive(Debug)]
pub struct IdSequence {
    next: AtomicU64,
}

impl IdSequence {
    /// Creates a sequence whose first identifier is 1.
    #[must_use]
    pub fn new() -> Self {
        Self {
            next: AtomicU64::new(1),
        }
    }

    /// Creates a sequence whose first identifier is `first`.
    pub fn starting_at(first: i64) -> AppResult<Self> {
        if first <= 0 {
            return Err(AppError::Validation(format!(
                "id sequence must start at a positive value, got {first}"
            )));
        }

        Ok(Self {
            next: AtomicU64::new(first.unsigned_abs()),
        })
    }

    /// Issues the next identifier. Fails once the range is exhausted.
    pub fn next_id(&self) -> AppResult<i64> {
        self.next
            .fetch_update(Ordering::SeqCst, Ordering::SeqCst, |current| {
                (current <= LAST_ID).then_some(current + 1)
            })
            .ok()
            .and_then(|issued| i64::try_from(issued).ok())
            .ok_or_else(|| AppError::Internal("id sequence exhausted".to_owned()))
    }
}

impl Default for IdSequence {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeSet;
    use std::thread;

    use filmorate_core::AppError;

    use super::IdSequence;

    #[test]
    fn starts_at_one_and_increments() {
        let sequence = IdSequence::new();
        assert_eq!(sequence.next_id(), Ok(1));
        assert_eq!(sequence.next_id(), Ok(2));
    }

    #[test]
    fn can_be_seeded() {
        let sequence = IdSequence::starting_at(100).unwrap_or_else(|error| panic!("{error}"));
        assert_eq!(sequence.next_id(), Ok(100));
        assert!(IdSequence::starting_at(0).is_err());
    }

    #[test]
    fn issues_the_last_id_then_reports_exhaustion() {
        let sequence = IdSequence::starting_at(i64::MAX).unwrap_or_else(|error| panic!("{error}"));
        assert_eq!(sequence.next_id(), Ok(i64::MAX));
        assert_eq!(
            sequence.next_id(),
            Err(AppError::Internal("id sequence exhausted".to_owned()))
        );
    }

    #[test]
    fn concurrent_callers_never_share_an_id() {
        let sequence = IdSequence::new();

        let issued: Vec<i64> = thread::scope(|scope| {
            let workers: Vec<_> = (0..8)
                .map(|_| {
                    scope.spawn(|| {
                        (0..250)
                            .filter_map(|_| sequence.next_id().ok())
                            .collect::<Vec<_>>()
                    })
                })
                .collect();

            workers
                .into_iter()
                .flat_map(|worker| worker.join().unwrap_or_default())
                .collect()
        });

        let unique: BTreeSet<i64> = issued.iter().copied().collect();
        assert_eq!(issued.len(), 2000);
        assert_eq!(unique.len(), 2000);
        assert_eq!(unique.first(), Some(&1));
        assert_eq!(unique.last(), Some(&2000));
    }
}
