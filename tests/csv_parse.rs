// tests/csv_parse.rs
//
// parse + filter_valid_rows on raw CSV text.
//
use classement::csv::{filter_valid_rows, parse};

fn v(cells: &[&str]) -> Vec<String> {
    cells.iter().map(|c| c.to_string()).collect()
}

#[test]
fn empty_input_is_an_empty_document() {
    let doc = parse("");
    assert!(doc.is_empty());
    assert_eq!(doc.header(), None);
    assert!(doc.data_rows().is_empty());
    assert!(filter_valid_rows(&doc, 3).is_empty());
}

#[test]
fn splits_lines_and_cells_without_quoting() {
    let doc = parse("Pilote,Rang,Points\n\"Doe, J\",1,10\n");
    assert_eq!(doc.header().unwrap(), v(&["Pilote", "Rang", "Points"]).as_slice());
    // Quotes are not special: the comma splits the name
    assert_eq!(doc.rows[1], v(&["\"Doe", "J\"", "1", "10"]));
    // Trailing newline leaves one empty line behind
    assert_eq!(doc.rows.last().unwrap(), &v(&[""]));
}

#[test]
fn crlf_and_padding_are_trimmed() {
    let doc = parse("Pilote, Rang ,Points\r\nA ,2, 10\r\n");
    assert_eq!(doc.rows[0], v(&["Pilote", "Rang", "Points"]));
    assert_eq!(doc.rows[1], v(&["A", "2", "10"]));
}

#[test]
fn filter_drops_short_rows_and_blank_names() {
    let text = "Pilote,Rang,Points\nA,2,10\n,1,5\nB,1\nC,3,7,extra\n\n";
    let doc = parse(text);
    let rows = filter_valid_rows(&doc, 3);

    assert_eq!(rows, vec![v(&["A", "2", "10"]), v(&["C", "3", "7", "extra"])]);
    for r in &rows {
        assert!(r.len() >= 3);
        assert!(!r[0].is_empty());
    }
}

#[test]
fn filter_never_returns_the_header() {
    let doc = parse("Pilote,Rang,Points\nA,1,3");
    let rows = filter_valid_rows(&doc, 3);
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0][0], "A");
}

#[test]
fn filter_respects_min_cells() {
    let doc = parse("h1,h2\na,b\nc\n");
    assert_eq!(filter_valid_rows(&doc, 2), vec![v(&["a", "b"])]);
    assert_eq!(filter_valid_rows(&doc, 1).len(), 2);
}
