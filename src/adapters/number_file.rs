use crate::domain::model::NumberList;
use crate::domain::ports::Storage;
use crate::utils::error::Result;
use std::fmt::Write as _;

/// 解析以空白分隔的整數，遇到第一個無法解析的 token 即停止
pub fn parse_numbers(text: &str) -> NumberList {
    NumberList::from_capped(
        text.split_whitespace()
            .map_while(|token| token.parse::<i32>().ok()),
    )
}

/// 每個數字後面接一個空白，包含最後一個
pub fn format_numbers(numbers: &NumberList) -> String {
    let mut out = String::with_capacity(numbers.len() * 4);
    for n in numbers {
        // 寫入 String 不會失敗
        let _ = write!(out, "{} ", n);
    }
    out
}

pub struct NumberFileReader<'a, S: Storage> {
    storage: &'a S,
}

impl<'a, S: Storage> NumberFileReader<'a, S> {
    pub fn new(storage: &'a S) -> Self {
        Self { storage }
    }

    /// 讀不到檔案時回傳空列表，由呼叫端判斷
    pub fn read(&self, path: &str) -> NumberList {
        let bytes = match self.storage.read_file(path) {
            Ok(bytes) => bytes,
            Err(e) => {
                tracing::warn!("Cannot open input '{}': {}", path, e);
                return NumberList::new();
            }
        };

        let numbers = parse_numbers(&String::from_utf8_lossy(&bytes));
        tracing::debug!("Read {} numbers from '{}'", numbers.len(), path);
        numbers
    }
}

pub struct NumberFileWriter<'a, S: Storage> {
    storage: &'a S,
}

impl<'a, S: Storage> NumberFileWriter<'a, S> {
    pub fn new(storage: &'a S) -> Self {
        Self { storage }
    }

    pub fn write(&self, path: &str, numbers: &NumberList) -> Result<()> {
        let text = format_numbers(numbers);
        tracing::debug!(
            "Writing {} numbers ({} bytes) to '{}'",
            numbers.len(),
            text.len(),
            path
        );
        self.storage.write_file(path, text.as_bytes())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::cli::LocalStorage;
    use crate::domain::model::MAX_NUMBERS;
    use tempfile::TempDir;

    fn storage_in(dir: &TempDir) -> LocalStorage {
        LocalStorage::new(dir.path().to_string_lossy().into_owned())
    }

    #[test]
    fn test_parse_stops_at_malformed_token() {
        assert_eq!(parse_numbers("7 2 x 9").into_vec(), vec![7, 2]);
    }

    #[test]
    fn test_parse_accepts_signs_and_any_whitespace() {
        assert_eq!(
            parse_numbers("  5\t-3\n10\r\n +2   8 ").into_vec(),
            vec![5, -3, 10, 2, 8]
        );
    }

    #[test]
    fn test_parse_overflow_truncates() {
        assert_eq!(parse_numbers("1 99999999999 2").into_vec(), vec![1]);
    }

    #[test]
    fn test_parse_empty_and_garbage() {
        assert!(parse_numbers("").is_empty());
        assert!(parse_numbers("   \n").is_empty());
        assert!(parse_numbers("abc 1 2").is_empty());
    }

    #[test]
    fn test_format_trailing_space() {
        let numbers = NumberList::try_from(vec![-3, 2, 5, 8, 10]).unwrap();
        assert_eq!(format_numbers(&numbers), "-3 2 5 8 10 ");
        assert_eq!(format_numbers(&NumberList::new()), "");
    }

    #[test]
    fn test_read_caps_at_hundred() {
        let dir = TempDir::new().unwrap();
        let content: Vec<String> = (1..=150).map(|i| i.to_string()).collect();
        std::fs::write(dir.path().join("big.txt"), content.join(" ")).unwrap();

        let storage = storage_in(&dir);
        let numbers = NumberFileReader::new(&storage).read("big.txt");

        assert_eq!(numbers.len(), MAX_NUMBERS);
        assert_eq!(numbers.into_vec(), (1..=100).collect::<Vec<i32>>());
    }

    #[test]
    fn test_read_missing_file_is_empty() {
        let dir = TempDir::new().unwrap();
        let storage = storage_in(&dir);
        assert!(NumberFileReader::new(&storage).read("missing.txt").is_empty());
    }

    #[test]
    fn test_write_truncates_existing_content() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("out.txt");
        std::fs::write(&path, "this content is much longer than the result").unwrap();

        let storage = storage_in(&dir);
        let numbers = NumberList::try_from(vec![1, 2]).unwrap();
        NumberFileWriter::new(&storage).write("out.txt", &numbers).unwrap();

        assert_eq!(std::fs::read_to_string(&path).unwrap(), "1 2 ");
    }

    #[test]
    fn test_write_to_unavailable_sink_fails() {
        let dir = TempDir::new().unwrap();
        let storage = storage_in(&dir);
        let numbers = NumberList::try_from(vec![1]).unwrap();

        let result = NumberFileWriter::new(&storage).write("no/such/dir/out.txt", &numbers);
        assert!(result.is_err());
    }
}
