use itertools::Itertools;

use crate::freq;

pub fn shift_keys(counts: &[u32; 26]) -> Vec<u8> {
    let total: u32 = counts.iter().sum();

    if total == 0 {
        return Vec::new();
    }

    let mut votes = [0u32; 26];

    for (index, &count) in counts.iter().enumerate() {
        if count == 0 {
            continue;
        }

        let percentage = count as f64 * 100.0 / total as f64;
        let reference = freq::closest_letter(percentage);
        let reference_index = (reference as u8 - b'A') as usize;

        // the key the text would have been encoded with, if this letter
        // really is `reference` in the cleartext
        let key = (index + 26 - reference_index) % 26;
        votes[key] += count;
    }

    votes
        .iter()
        .enumerate()
        .filter(|(_, &count)| count > 0)
        .sorted_by(|(key1, votes1), (key2, votes2)| votes2.cmp(votes1).then(key1.cmp(key2)))
        .take(3)
        .map(|(key, _)| key as u8)
        .collect()
}
