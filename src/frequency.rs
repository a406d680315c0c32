use std::fmt;

/// Occurrence counts per symbol, iterated in the order symbols were first seen.
///
/// The iteration order feeds tree construction, so it is part of the output
/// format: the same input always yields the same order.
#[derive(Clone)]
pub struct FrequencyTable {
    counts: [u64; 256],
    order: Vec<u8>,
}

impl FrequencyTable {
    pub fn of(data: &[u8]) -> Self {
        let mut table = Self {
            counts: [0; 256],
            order: Vec::new(),
        };

        for &byte in data {
            let count = &mut table.counts[byte as usize];
            if *count == 0 {
                table.order.push(byte);
            }
            *count += 1;
        }

        table
    }

    pub fn get(&self, symbol: u8) -> u64 {
        self.counts[symbol as usize]
    }

    /// Number of distinct symbols.
    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    pub fn total(&self) -> u64 {
        self.order.iter().map(|&s| self.get(s)).sum()
    }

    pub fn iter(&self) -> impl Iterator<Item = (u8, u64)> + '_ {
        self.order.iter().map(move |&s| (s, self.get(s)))
    }
}

impl fmt::Debug for FrequencyTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map().entries(self.iter()).finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_counts_in_first_seen_order() {
        let table = FrequencyTable::of(&[110, 110, 111, 112, 112, 112, 112, 113]);
        assert_eq!(
            table.iter().collect::<Vec<_>>(),
            vec![(110, 2), (111, 1), (112, 4), (113, 1)]
        );
        assert_eq!(table.total(), 8);
        assert_eq!(table.len(), 4);
        assert_eq!(table.get(200), 0);
    }

    #[test]
    fn test_order_follows_first_occurrence_not_value() {
        let table = FrequencyTable::of(b"zzay");
        let symbols = table.iter().map(|(s, _)| s).collect::<Vec<_>>();
        assert_eq!(symbols, b"zay".to_vec());
    }

    #[test]
    fn test_empty_input() {
        let table = FrequencyTable::of(&[]);
        assert!(table.is_empty());
        assert_eq!(table.total(), 0);
        assert_eq!(table.iter().count(), 0);
    }
}
