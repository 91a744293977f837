
use seqlist::SortedList;

/// Builds owned lists from slices; panics on unsorted fixtures.
pub(crate) fn lists(values: &[&[i64]]) -> Vec<SortedList> {
    values
        .iter()
        .map(|v| SortedList::from_sorted(v.iter().copied()).unwrap())
        .collect()
}

/// Every parent head is <= both children's heads.
pub(crate) fn is_min_heap(lists: &[SortedList]) -> bool {
    (0..lists.len()).all(|i| {
        let parent = lists[i].front();
        [2 * i + 1, 2 * i + 2]
            .into_iter()
            .filter(|&c| c < lists.len())
            .all(|c| parent <= lists[c].front())
    })
}
