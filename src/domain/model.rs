use crate::utils::error::EtlError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// 單次讀取的最大整數數量
pub const MAX_NUMBERS: usize = 100;

/// 有序的整數列表，長度不超過 [`MAX_NUMBERS`]
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NumberList {
    values: Vec<i32>,
}

impl NumberList {
    pub fn new() -> Self {
        Self::default()
    }

    /// 取前 [`MAX_NUMBERS`] 個值，其餘捨棄
    pub fn from_capped<I: IntoIterator<Item = i32>>(values: I) -> Self {
        Self {
            values: values.into_iter().take(MAX_NUMBERS).collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn as_slice(&self) -> &[i32] {
        &self.values
    }

    pub fn iter(&self) -> std::slice::Iter<'_, i32> {
        self.values.iter()
    }

    pub fn into_vec(self) -> Vec<i32> {
        self.values
    }
}

impl TryFrom<Vec<i32>> for NumberList {
    type Error = EtlError;

    fn try_from(values: Vec<i32>) -> Result<Self, Self::Error> {
        if values.len() > MAX_NUMBERS {
            return Err(EtlError::ValidationError {
                message: format!(
                    "a number list holds at most {} values, got {}",
                    MAX_NUMBERS,
                    values.len()
                ),
            });
        }
        Ok(Self { values })
    }
}

impl<'a> IntoIterator for &'a NumberList {
    type Item = &'a i32;
    type IntoIter = std::slice::Iter<'a, i32>;

    fn into_iter(self) -> Self::IntoIter {
        self.values.iter()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Operation {
    Sort,
    Reverse,
    #[serde(alias = "swap")]
    SwapPairs,
}

impl Operation {
    pub const ALL: [Operation; 3] = [Operation::Sort, Operation::Reverse, Operation::SwapPairs];

    /// 選單編號 1..=3
    pub fn from_menu_code(code: i64) -> Option<Self> {
        match code {
            1 => Some(Operation::Sort),
            2 => Some(Operation::Reverse),
            3 => Some(Operation::SwapPairs),
            _ => None,
        }
    }

    pub fn menu_code(&self) -> u8 {
        match self {
            Operation::Sort => 1,
            Operation::Reverse => 2,
            Operation::SwapPairs => 3,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Operation::Sort => "sort",
            Operation::Reverse => "reverse",
            Operation::SwapPairs => "swap-pairs",
        }
    }

    pub fn menu_label(&self) -> &'static str {
        match self {
            Operation::Sort => "Sort array",
            Operation::Reverse => "Reverse array (reverse order)",
            Operation::SwapPairs => "Swap numbers at even and odd positions",
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Operation {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "sort" | "1" => Ok(Operation::Sort),
            "reverse" | "2" => Ok(Operation::Reverse),
            "swap" | "swap-pairs" | "3" => Ok(Operation::SwapPairs),
            _ => Err(format!(
                "Invalid operation: {}. Please specify 'sort', 'reverse' or 'swap' (or 1-3)",
                s
            )),
        }
    }
}

#[derive(Debug, Clone)]
pub struct TransformResult {
    pub operation: Operation,
    pub numbers: NumberList,
}
