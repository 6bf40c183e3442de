//! Question order randomization.

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};

use crate::model::RecordSet;

/// Shuffle the records in place with an unbiased Fisher-Yates pass.
///
/// Records are only moved, never added, dropped or duplicated.
pub fn shuffle_records<R: Rng + ?Sized>(records: &mut RecordSet, rng: &mut R) {
    records.records_mut().shuffle(rng);
}

/// Shuffle with a seeded RNG when `seed` is given, otherwise the thread RNG.
pub fn shuffle_seeded(records: &mut RecordSet, seed: Option<u64>) {
    match seed {
        Some(seed) => shuffle_records(records, &mut StdRng::seed_from_u64(seed)),
        None => shuffle_records(records, &mut rand::thread_rng()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Record;

    fn numbered(n: usize) -> RecordSet {
        (0..n)
            .map(|i| Record::new(format!("q{i}"), format!("a{i}")))
            .collect()
    }

    fn sorted_questions(set: &RecordSet) -> Vec<String> {
        let mut questions: Vec<String> = set.iter().map(|r| r.question.clone()).collect();
        questions.sort();
        questions
    }

    #[test]
    fn shuffle_keeps_the_same_records() {
        for n in [0, 1, 2, 7, 50] {
            let original = numbered(n);
            let mut shuffled = original.clone();
            shuffle_seeded(&mut shuffled, Some(42));
            assert_eq!(shuffled.len(), n);
            assert_eq!(sorted_questions(&shuffled), sorted_questions(&original));
        }
    }

    #[test]
    fn duplicates_survive_shuffling() {
        let mut set: RecordSet = vec![
            Record::new("same", "1"),
            Record::new("same", "1"),
            Record::new("other", "2"),
        ]
        .into();
        shuffle_seeded(&mut set, None);
        let dupes = set.iter().filter(|r| r.question == "same").count();
        assert_eq!(dupes, 2);
    }

    #[test]
    fn same_seed_same_order() {
        let mut a = numbered(20);
        let mut b = numbered(20);
        shuffle_seeded(&mut a, Some(7));
        shuffle_seeded(&mut b, Some(7));
        assert_eq!(a, b);
    }

    #[test]
    fn every_position_is_reachable() {
        // Over many seeds the first record should land in every slot.
        let mut seen = [false; 4];
        for seed in 0..200 {
            let mut set = numbered(4);
            shuffle_seeded(&mut set, Some(seed));
            let slot = set.iter().position(|r| r.question == "q0").unwrap();
            seen[slot] = true;
        }
        assert!(seen.iter().all(|&s| s));
    }
}
