use super::*;

use std::path::PathBuf;

const SAMPLE: &str = "\
# sample dict
name: sample
...
你\tw
你\twq
好\tvb
们\twu
你们\twqwu
你好\twqvb
";

fn write_temp(name: &str, contents: &str) -> PathBuf {
    let suffix = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .expect("clock")
        .as_nanos();
    let path = std::env::temp_dir().join(format!("dict_store_test_{name}_{suffix}.dict"));
    std::fs::write(&path, contents).expect("write temp dict");
    path
}

fn sample_dict(name: &str) -> (Dictionary, PathBuf) {
    let path = write_temp(name, SAMPLE);
    let dict = Dictionary::load(&path, None).expect("load");
    (dict, path)
}

#[test]
fn parses_header_and_entries() {
    let (dict, path) = sample_dict("parse");
    assert_eq!(dict.query("wqwu"), vec!["你们".to_string()]);
    assert_eq!(dict.query("vb"), vec!["好".to_string()]);
    assert!(dict.query("zzzz").is_empty());
    std::fs::remove_file(path).expect("cleanup");
}

#[test]
fn query_preserves_candidate_order() {
    let path = write_temp(
        "order",
        "...\n一\ta\n二\tab\n先\tab\n后\tab\n",
    );
    let dict = Dictionary::load(&path, None).expect("load");
    assert_eq!(
        dict.query("ab"),
        vec!["二".to_string(), "先".to_string(), "后".to_string()]
    );
    std::fs::remove_file(path).expect("cleanup");
}

#[test]
fn headerless_file_is_all_entries() {
    let path = write_temp("headerless", "你\twq\n好\tvb\n");
    let dict = Dictionary::load(&path, None).expect("load");
    assert_eq!(dict.query("wq"), vec!["你".to_string()]);
    std::fs::remove_file(path).expect("cleanup");
}

#[test]
fn skips_malformed_lines() {
    let path = write_temp("malformed", "...\nno-tab-here\n好\tvb\ntoo\tmany\ttabs\n");
    let dict = Dictionary::load(&path, None).expect("load");
    assert_eq!(dict.query("vb"), vec!["好".to_string()]);
    assert!(dict.query("many").is_empty());
    std::fs::remove_file(path).expect("cleanup");
}

#[test]
fn load_fails_for_missing_file() {
    let missing = std::env::temp_dir().join("dict_store_test_definitely_missing.dict");
    let err = Dictionary::load(&missing, None).expect_err("missing file");
    assert!(matches!(err, DictError::Read { .. }));
}

#[test]
fn add_word_rejects_duplicates_under_same_code() {
    let (mut dict, path) = sample_dict("dup");
    dict.add_word("您", "wq").expect("new word");
    assert_eq!(dict.query("wq"), vec!["你".to_string(), "您".to_string()]);

    let err = dict.add_word("您", "wq").expect_err("duplicate");
    assert!(matches!(err, DictError::DuplicateWord { .. }));
    // Same word under a different code is fine.
    dict.add_word("您", "wqq").expect("other code");
    std::fs::remove_file(path).expect("cleanup");
}

#[test]
fn update_words_replaces_wholesale_and_empty_removes() {
    let (mut dict, path) = sample_dict("update");
    dict.update_words("wq", vec!["你".into(), "②".into()]);
    assert_eq!(dict.query("wq"), vec!["你".to_string(), "②".to_string()]);

    dict.update_words("wq", Vec::new());
    assert!(dict.query("wq").is_empty());
    std::fs::remove_file(path).expect("cleanup");
}

#[test]
fn composes_by_word_length() {
    let path = write_temp(
        "compose",
        "...\n工\taaaa\n人\tw\n木\tssss\n口\tkkkk\n日\tjjjj\n",
    );
    let dict = Dictionary::load(&path, None).expect("load");

    // Single char keeps its own full code.
    assert_eq!(dict.compose("工"), Some("aaaa".to_string()));
    // Two chars: two letters each.
    assert_eq!(dict.compose("工木"), Some("aass".to_string()));
    // Three chars: one, one, two.
    assert_eq!(dict.compose("工木口"), Some("askk".to_string()));
    // Four or more: first letter of the first three chars and the last char.
    assert_eq!(dict.compose("工木口日"), Some("askj".to_string()));
    assert_eq!(dict.compose("工木口口日"), Some("askj".to_string()));

    // 人 only has a one-letter code, which composition rejects.
    assert_eq!(dict.compose("人"), None);
    assert_eq!(dict.compose("工人"), None);
    // Unknown character.
    assert_eq!(dict.compose("工鑫"), None);
    assert_eq!(dict.compose(""), None);
    std::fs::remove_file(path).expect("cleanup");
}

#[test]
fn composition_uses_longest_code_per_char() {
    let path = write_temp("longest", "...\n你\tw\n你\twq\n你\twqq\n好\tvb\n");
    let dict = Dictionary::load(&path, None).expect("load");
    assert_eq!(dict.compose("你"), Some("wqq".to_string()));
    assert_eq!(dict.compose("你好"), Some("wqvb".to_string()));
    std::fs::remove_file(path).expect("cleanup");
}

#[test]
fn separate_char_map_overrides_dictionary_table() {
    let dict_path = write_temp("with_map_dict", "...\n词组\tabcd\n");
    let map_path = write_temp("with_map_map", "...\n词\tyngk\n组\txegg\n");
    let dict = Dictionary::load(&dict_path, Some(map_path.as_path())).expect("load");
    assert_eq!(dict.compose("词组"), Some("ynxe".to_string()));
    std::fs::remove_file(dict_path).expect("cleanup");
    std::fs::remove_file(map_path).expect("cleanup");
}

#[test]
fn write_round_trips_header_and_entries() {
    let (mut dict, path) = sample_dict("roundtrip");
    dict.add_word("您", "wq").expect("add");

    let out_path = write_temp("roundtrip_out", "");
    dict.write_to(&out_path).expect("write");

    let written = std::fs::read_to_string(&out_path).expect("read back");
    assert!(written.starts_with("# sample dict\nname: sample\n...\n"));
    assert!(written.contains("你\twq\n您\twq\n"));

    let reloaded = Dictionary::load(&out_path, None).expect("reload");
    assert_eq!(reloaded.query("wq"), vec!["你".to_string(), "您".to_string()]);
    assert_eq!(reloaded.query("vb"), vec!["好".to_string()]);

    std::fs::remove_file(path).expect("cleanup");
    std::fs::remove_file(out_path).expect("cleanup");
}
