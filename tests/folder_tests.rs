use du_flamegraph::aggregator::SizeMap;
use du_flamegraph::folder::{fold_stacks, folded_text, stack_label, FoldedStack};
use pretty_assertions::assert_eq;
use std::path::{Path, PathBuf};

fn roots(paths: &[&str]) -> Vec<PathBuf> {
    paths.iter().map(PathBuf::from).collect()
}

fn map_of(entries: &[(&str, u64)]) -> SizeMap {
    entries.iter().map(|(p, s)| (PathBuf::from(p), *s)).collect()
}

#[test]
fn test_stack_label_format() {
    let map = map_of(&[("/data/a/b", 1536)]);
    let stacks = fold_stacks(&map, &roots(&["/data"]));

    assert_eq!(folded_text(&stacks), "/data;a;b 1536.00\n");
}

#[test]
fn test_root_identity_collapse() {
    let map = map_of(&[("/data", 0)]);
    let stacks = fold_stacks(&map, &roots(&["/data"]));

    assert_eq!(folded_text(&stacks), "/data 0.00\n");
}

#[test]
fn test_two_decimal_formatting() {
    let stack = FoldedStack::new("/data".to_string(), 10);
    assert_eq!(stack.to_line(), "/data 10.00\n");
}

#[test]
fn test_multi_root_disambiguation() {
    assert_eq!(stack_label(Path::new("/b/x"), &roots(&["/a", "/b"])), "/b;x");
    assert_eq!(stack_label(Path::new("/a/x"), &roots(&["/a", "/b"])), "/a;x");
}

#[test]
fn test_disjoint_roots_outside_path_uses_first_root() {
    // Neither root contains /c/d: the first root wins with climbing segments
    assert_eq!(stack_label(Path::new("/c/d"), &roots(&["/a", "/b"])), "/a;..;c;d");
}

#[test]
fn test_overlapping_roots_first_listed_wins() {
    let path = Path::new("/data/sub/x");
    assert_eq!(stack_label(path, &roots(&["/data", "/data/sub"])), "/data;sub;x");
    assert_eq!(stack_label(path, &roots(&["/data/sub", "/data"])), "/data/sub;x");
}

#[test]
fn test_every_directory_yields_one_line() {
    let map = map_of(&[
        ("/a", 1),
        ("/a/x", 2),
        ("/b", 3),
        ("/b/y/z", 4),
    ]);

    let text = folded_text(&fold_stacks(&map, &roots(&["/a", "/b"])));

    assert_eq!(text, "/a 1.00\n/a;x 2.00\n/b 3.00\n/b;y;z 4.00\n");
}

#[test]
fn test_folding_does_not_mutate_map() {
    let map = map_of(&[("/data", 5), ("/data/a", 7)]);
    let before = map.clone();

    let _ = fold_stacks(&map, &roots(&["/data"]));

    assert_eq!(map, before);
}

#[test]
fn test_empty_root_set_emits_absolute_paths() {
    let map = map_of(&[("/data/a", 7)]);
    assert_eq!(folded_text(&fold_stacks(&map, &[])), "/data/a 7.00\n");
}
