use std::{
    collections::{BTreeMap, HashMap},
    fs::{File, OpenOptions},
    io::{BufRead, BufReader, BufWriter, Write},
    path::Path,
};

use shared::error::DictError;

/// Marks the end of the dictionary file header block.
const HEADER_TERMINATOR: &str = "...";

/// In-memory dictionary: code -> ordered candidate words, plus the verbatim
/// file header and a per-character code table used by composition.
#[derive(Debug, Default)]
pub struct Dictionary {
    header: String,
    entries: BTreeMap<String, Vec<String>>,
    char_codes: HashMap<char, Vec<String>>,
}

impl Dictionary {
    /// Load a dictionary file, optionally with a separate char-map file that
    /// supplies the per-character codes for composition. Without a char map
    /// the table is derived from the dictionary's own single-character words.
    pub fn load(dict_path: &Path, char_map_path: Option<&Path>) -> Result<Self, DictError> {
        let (header, entries) = read_dict_file(dict_path)?;

        let char_codes = match char_map_path {
            Some(path) => {
                let (_, map_entries) = read_dict_file(path)?;
                char_table_from_entries(&map_entries)
            }
            None => char_table_from_entries(&entries),
        };

        tracing::debug!(
            codes = entries.len(),
            chars = char_codes.len(),
            "dictionary loaded"
        );

        Ok(Self {
            header,
            entries,
            char_codes,
        })
    }

    /// Candidate words for a code, in ranked order. Unknown codes yield an
    /// empty list.
    pub fn query(&self, code: &str) -> Vec<String> {
        self.entries.get(code).cloned().unwrap_or_default()
    }

    /// Compose the full code for a word from per-character codes, Wubi style:
    /// 1 char keeps its own code, 2 chars take two letters each, 3 chars take
    /// one, one, two, and longer words take the first letter of the first
    /// three characters and of the last one.
    pub fn compose(&self, word: &str) -> Option<String> {
        let chars: Vec<char> = word.chars().collect();
        match chars.len() {
            0 => None,
            1 => self.look_up(chars[0]).map(str::to_string),
            2 => {
                let first = self.look_up(chars[0])?;
                let second = self.look_up(chars[1])?;
                Some(format!(
                    "{}{}",
                    String::from_iter(first.chars().take(2)),
                    String::from_iter(second.chars().take(2)),
                ))
            }
            3 => {
                let codes = self.look_up_each(&[chars[0], chars[1], chars[2]])?;
                Some(format!(
                    "{}{}{}",
                    codes[0].chars().next()?,
                    codes[1].chars().next()?,
                    String::from_iter(codes[2].chars().take(2)),
                ))
            }
            _ => {
                let codes =
                    self.look_up_each(&[chars[0], chars[1], chars[2], *chars.last()?])?;
                codes
                    .iter()
                    .map(|code| code.chars().next())
                    .collect::<Option<String>>()
            }
        }
    }

    /// Append a word to a code's candidate list. Duplicates under the same
    /// code are rejected.
    pub fn add_word(&mut self, word: &str, code: &str) -> Result<(), DictError> {
        let words = self.entries.entry(code.to_string()).or_default();
        if words.iter().any(|existing| existing == word) {
            return Err(DictError::DuplicateWord {
                word: word.to_string(),
                code: code.to_string(),
            });
        }
        words.push(word.to_string());
        Ok(())
    }

    /// Replace the candidate list for a code wholesale. An empty list removes
    /// the code entirely.
    pub fn update_words(&mut self, code: &str, words: Vec<String>) {
        if words.is_empty() {
            self.entries.remove(code);
        } else {
            self.entries.insert(code.to_string(), words);
        }
    }

    /// Serialize the header followed by one `word<TAB>code` line per entry,
    /// truncating the target file.
    pub fn write_to(&self, path: &Path) -> Result<(), DictError> {
        let write_err = |source| DictError::Write {
            path: path.to_path_buf(),
            source,
        };

        let file = OpenOptions::new()
            .truncate(true)
            .create(true)
            .write(true)
            .open(path)
            .map_err(write_err)?;
        let mut writer = BufWriter::new(file);

        write!(writer, "{}", self.header).map_err(write_err)?;
        for (code, words) in &self.entries {
            for word in words {
                writeln!(writer, "{word}\t{code}").map_err(write_err)?;
            }
        }
        writer.flush().map_err(write_err)
    }

    fn look_up(&self, c: char) -> Option<&str> {
        let codes = self.char_codes.get(&c)?;
        let longest = codes.iter().max_by_key(|code| code.len())?;
        // Composition needs the character's full code.
        if longest.len() < 2 {
            return None;
        }
        Some(longest)
    }

    fn look_up_each(&self, chars: &[char]) -> Option<Vec<&str>> {
        chars.iter().map(|&c| self.look_up(c)).collect()
    }
}

/// Read a dictionary-format file: raw header lines up to and including a
/// `...` line (absent header means the whole file is entries), then one
/// `word<TAB>code` entry per line. Lines without exactly one tab are skipped.
fn read_dict_file(path: &Path) -> Result<(String, BTreeMap<String, Vec<String>>), DictError> {
    let read_err = |source| DictError::Read {
        path: path.to_path_buf(),
        source,
    };

    let file = File::open(path).map_err(read_err)?;
    let mut lines = Vec::new();
    for line in BufReader::new(file).lines() {
        lines.push(line.map_err(read_err)?);
    }

    let header_end = lines.iter().position(|line| line == HEADER_TERMINATOR);
    let (header, body) = match header_end {
        Some(end) => {
            let mut header = String::new();
            for line in &lines[..=end] {
                header.push_str(line);
                header.push('\n');
            }
            (header, &lines[end + 1..])
        }
        None => (String::new(), &lines[..]),
    };

    let mut entries: BTreeMap<String, Vec<String>> = BTreeMap::new();
    for line in body {
        let split: Vec<&str> = line.split('\t').collect();
        if split.len() != 2 {
            continue;
        }
        let (word, code) = (split[0], split[1]);
        entries
            .entry(code.to_string())
            .or_default()
            .push(word.to_string());
    }

    Ok((header, entries))
}

fn char_table_from_entries(entries: &BTreeMap<String, Vec<String>>) -> HashMap<char, Vec<String>> {
    let mut table: HashMap<char, Vec<String>> = HashMap::new();
    for (code, words) in entries {
        for word in words {
            let mut chars = word.chars();
            if let (Some(c), None) = (chars.next(), chars.next()) {
                table.entry(c).or_default().push(code.clone());
            }
        }
    }
    table
}

#[cfg(test)]
#[path = "tests/lib_tests.rs"]
mod tests;
