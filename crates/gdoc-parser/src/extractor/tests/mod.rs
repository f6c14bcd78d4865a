use super::*;
use crate::parser::parse_source;


const SAMPLE: &str = include_str!("../../../tests/fixtures/sample.go");

fn extract_all(source: &str, prefix: &str) -> Vec<DocPair> {
    let tree = parse_source(source);
    doc_pairs(&tree, prefix)
        .collect::<Result<Vec<_>, _>>()
        .expect("extraction should succeed")
}

fn find_by_path<'a>(pairs: &'a [DocPair], path: &str) -> &'a DocPair {
    pairs
        .iter()
        .find(|p| p.path == path)
        .unwrap_or_else(|| panic!("should find pair for '{path}'"))
}

fn paths(pairs: &[DocPair]) -> Vec<&str> {
    pairs.iter().map(|p| p.path.as_str()).collect()
}
