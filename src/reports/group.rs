//! Grouping records by category, status, or month.
//!
//! Keys come out in first-seen order unless the caller seeds a fixed key set.
//! Month groups are the exception: they are always chronological.

use std::collections::HashMap;
use std::hash::Hash;

use crate::models::MonthKey;

use super::TrendWindow;

/// Records sharing one key
#[derive(Debug, Clone, PartialEq)]
pub struct Group<'a, K, T> {
    pub key: K,
    pub members: Vec<&'a T>,
}

impl<K, T> Group<'_, K, T> {
    pub fn len(&self) -> usize {
        self.members.len()
    }

    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }
}

/// Partition `records` by `key_of`, keys in first-seen order
pub fn group_by<'a, T, K, I, F>(records: I, key_of: F) -> Vec<Group<'a, K, T>>
where
    I: IntoIterator<Item = &'a T>,
    K: Eq + Hash + Clone,
    F: Fn(&T) -> K,
{
    seeded_group_by(records, Vec::new(), key_of)
}

/// Like [`group_by`], but `seed` keys come first and are kept even when empty
///
/// Keys found in the records but missing from the seed are appended in
/// first-seen order.
pub fn seeded_group_by<'a, T, K, I, F>(records: I, seed: Vec<K>, key_of: F) -> Vec<Group<'a, K, T>>
where
    I: IntoIterator<Item = &'a T>,
    K: Eq + Hash + Clone,
    F: Fn(&T) -> K,
{
    let mut groups: Vec<Group<'a, K, T>> = Vec::with_capacity(seed.len());
    let mut index: HashMap<K, usize> = HashMap::new();

    for key in seed {
        if !index.contains_key(&key) {
            index.insert(key.clone(), groups.len());
            groups.push(Group {
                key,
                members: Vec::new(),
            });
        }
    }

    for record in records {
        let key = key_of(record);
        let position = match index.get(&key) {
            Some(&position) => position,
            None => {
                index.insert(key.clone(), groups.len());
                groups.push(Group {
                    key,
                    members: Vec::new(),
                });
                groups.len() - 1
            }
        };
        groups[position].members.push(record);
    }

    groups
}

/// Bucket records by calendar month, chronologically
///
/// Only months inside `window` (ending at `current`) are kept, and only
/// months that have at least one record.
pub fn group_by_month<'a, T, I, F>(
    records: I,
    month_of: F,
    window: TrendWindow,
    current: MonthKey,
) -> Vec<Group<'a, MonthKey, T>>
where
    I: IntoIterator<Item = &'a T>,
    F: Fn(&T) -> MonthKey,
{
    let in_window = records
        .into_iter()
        .filter(|record| window.contains(month_of(*record), current));

    let mut groups = group_by(in_window, &month_of);
    groups.sort_by_key(|group| group.key);
    groups
}
