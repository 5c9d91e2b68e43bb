use crate::domain::model::{NumberList, Operation};

/// 由小到大排序，回傳新列表
pub fn sort(numbers: &NumberList) -> NumberList {
    let mut values = numbers.as_slice().to_vec();
    values.sort_unstable();
    NumberList::from_capped(values)
}

pub fn reverse(numbers: &NumberList) -> NumberList {
    NumberList::from_capped(numbers.iter().rev().copied())
}

/// 交換每一對相鄰元素 (0<->1, 2<->3, ...)，奇數長度時最後一個保持不動
pub fn swap_adjacent_pairs(numbers: &NumberList) -> NumberList {
    let mut values = numbers.as_slice().to_vec();
    for pair in values.chunks_exact_mut(2) {
        pair.swap(0, 1);
    }
    NumberList::from_capped(values)
}

impl Operation {
    pub fn apply(&self, numbers: &NumberList) -> NumberList {
        match self {
            Operation::Sort => sort(numbers),
            Operation::Reverse => reverse(numbers),
            Operation::SwapPairs => swap_adjacent_pairs(numbers),
        }
    }
}
