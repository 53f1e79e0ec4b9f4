use pretty_assertions::assert_eq;
use scrum_tracker::parser::{read_records, reconstruct, reconstruct_from, FlatRecord, RecordCursor};
use scrum_tracker::tree::Node;
use scrum_tracker::utils::error::ParseError;

fn branch(label: &str, total: &str) -> FlatRecord {
    FlatRecord::new(label, total, "")
}

fn leaf(label: &str, time: &str) -> FlatRecord {
    FlatRecord::new(label, time, "1")
}

fn names(node: &Node) -> Vec<&str> {
    node.children().iter().map(|c| c.name.as_str()).collect()
}

fn child<'a>(node: &'a Node, name: &str) -> &'a Node {
    node.children()
        .iter()
        .find(|c| c.name == name)
        .unwrap_or_else(|| panic!("'{}' has no child '{}'", node.name, name))
}

#[test]
fn test_three_level_input() {
    let records = vec![
        branch("Board", "30m"),
        branch("P1", "30m"),
        branch("S1", "30m"),
        leaf("(2) Story", "30m"),
        leaf("Total", "30m"),
    ];

    let root = reconstruct(&records).unwrap();
    assert_eq!(root.total(), Some(30));
    assert_eq!(names(&root), vec!["Board"]);

    let board = &root.children()[0];
    assert_eq!(names(board), vec!["P1"]);
    assert_eq!(names(&board.children()[0]), vec!["S1"]);
    assert_eq!(names(&board.children()[0].children()[0]), vec!["(2) Story"]);
}

#[test]
fn test_second_project_is_sibling_of_first() {
    let records = vec![
        branch("Board", ""),
        branch("P1", ""),
        branch("S1", ""),
        leaf("(3) a", "30m"),
        branch("P2", ""),
        branch("S2", ""),
        leaf("(5) b", "45m"),
        leaf("Total", "1h 15m"),
    ];

    let root = reconstruct(&records).unwrap();
    let board = &root.children()[0];

    assert_eq!(names(board), vec!["P1", "P2"]);
    assert_eq!(names(child(board, "P1")), vec!["S1"]);
    assert_eq!(names(child(board, "P2")), vec!["S2"]);
    assert_eq!(names(child(child(board, "P1"), "S1")), vec!["(3) a"]);
    assert_eq!(root.total(), Some(75));
}

#[test]
fn test_multiple_sprints_stay_in_their_project() {
    let records = vec![
        branch("Board", ""),
        branch("P1", ""),
        branch("S1a", ""),
        leaf("(1) a", "10m"),
        branch("S1b", ""),
        leaf("(2) b", "20m"),
        branch("P2", ""),
        branch("S2a", ""),
        leaf("(3) c", "30m"),
        branch("S2b", ""),
        leaf("(5) d", "50m"),
        leaf("Total", "1h 50m"),
    ];

    let root = reconstruct(&records).unwrap();
    let board = &root.children()[0];

    assert_eq!(names(board), vec!["P1", "P2"]);
    assert_eq!(names(child(board, "P1")), vec!["S1a", "S1b"]);
    assert_eq!(names(child(board, "P2")), vec!["S2a", "S2b"]);
    assert_eq!(names(child(child(board, "P2"), "S2b")), vec!["(5) d"]);
}

#[test]
fn test_three_projects_keep_input_order() {
    let mut records = vec![branch("Board", "")];
    for n in 1..=3 {
        records.push(branch(&format!("P{}", n), ""));
        records.push(branch(&format!("S{}", n), ""));
        records.push(leaf(&format!("({}) story", n), "5m"));
    }

    let root = reconstruct(&records).unwrap();
    assert_eq!(names(&root.children()[0]), vec!["P1", "P2", "P3"]);
    assert_eq!(root.total(), None);
}

#[test]
fn test_rows_after_total_are_ignored() {
    let records = vec![
        branch("Board", ""),
        branch("P1", ""),
        branch("S1", ""),
        leaf("(1) a", "5m"),
        leaf("Total", "5m"),
        branch("Trailing", ""),
        leaf("(8) late", "1h 0m"),
    ];
    let mut cursor = RecordCursor::new(&records);

    let root = reconstruct_from(&mut cursor).unwrap();

    assert_eq!(cursor.position(), 5);
    assert_eq!(cursor.remaining(), 2);
    assert_eq!(root.count_nodes(), 5);
    assert_eq!(root.total(), Some(5));
}

#[test]
fn test_total_is_never_a_child() {
    let records = vec![
        branch("Board", ""),
        branch("P1", ""),
        branch("S1", ""),
        leaf("(1) a", "5m"),
        leaf("Total", "5m"),
    ];

    let root = reconstruct(&records).unwrap();
    let sprint = &root.children()[0].children()[0].children()[0];
    assert_eq!(names(sprint), vec!["(1) a"]);
}

#[test]
fn test_branch_rollups_and_leaf_times() {
    let records = vec![
        branch("Board", "2h 15m"),
        branch("P1", "2h 15m"),
        branch("S1", ""),
        leaf("(1) a", "2h 15m"),
    ];

    let root = reconstruct(&records).unwrap();
    let board = &root.children()[0];
    let sprint = &board.children()[0].children()[0];

    assert_eq!(board.total(), Some(135));
    assert_eq!(sprint.total(), None);
    assert_eq!(sprint.children()[0].time(), Some(135));
    assert!(sprint.children()[0].is_leaf());
}

#[test]
fn test_malformed_rollup_is_fatal() {
    let records = vec![branch("Board", "two hours")];
    assert!(matches!(
        reconstruct(&records),
        Err(ParseError::MalformedTimeSpec(_))
    ));
}

#[test]
fn test_end_of_input_keeps_open_branches() {
    let records = vec![branch("Board", ""), branch("P1", ""), branch("S1", "")];

    let root = reconstruct(&records).unwrap();
    assert_eq!(root.leftmost_height(), 3);
    assert_eq!(root.total(), None);
}

#[test]
fn test_reconstruct_from_csv() {
    let input = include_str!("fixtures/timecamp_export.csv");
    let records = read_records(input.as_bytes()).unwrap();
    assert_eq!(records.len(), 10);

    let root = reconstruct(&records).unwrap();
    let board = &root.children()[0];

    assert_eq!(board.name, "Scrum Board");
    assert_eq!(names(board), vec!["P1", "P2"]);
    assert_eq!(root.total(), Some(150));
}
