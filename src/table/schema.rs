//! Attribute schema for the table node

use super::model::{default_with_header_row, CellKind, TableCell, TableNode, TableRow};
use crate::html::Element;
use crate::schema::{parse_attributes, AttrValue, AttributeSpec, HtmlAttributes};

/// Attributes of the `table` node
pub static TABLE_ATTRIBUTES: &[AttributeSpec<TableNode>] = &[AttributeSpec {
    key: "withHeaderRow",
    default: || AttrValue::Bool(default_with_header_row()),
    parse: |element| AttrValue::Bool(element.query_selector("thead").is_some()),
    // Header markup comes from the first row's cell kinds, never from this attribute
    render: |_| HtmlAttributes::new(),
    get: |table| AttrValue::Bool(table.with_header_row),
    set: |table, value| match value.as_bool() {
        Some(flag) => {
            table.with_header_row = flag;
            true
        }
        None => false,
    },
}];

impl TableNode {
    /// Build a table from a parsed `<table>` element
    ///
    /// Rows are collected from `thead`, `tbody` and `tfoot` (or directly
    /// under the table). The first `thead` row leads the table and holds the
    /// only header cells; every other row is data, whether its cells were
    /// written as `th` or `td`. This keeps header cells in the first row and
    /// lets the rendered `<thead>` parse back to the same attribute.
    pub fn from_element(element: &Element) -> Self {
        let mut head = Vec::new();
        let mut body = Vec::new();
        for child in element.child_elements() {
            match child.tag.as_str() {
                "thead" => head.extend(child.child_elements().filter(|el| el.tag == "tr")),
                "tbody" | "tfoot" => {
                    body.extend(child.child_elements().filter(|el| el.tag == "tr"))
                }
                "tr" => body.push(child),
                _ => {}
            }
        }
        let has_head = !head.is_empty();

        let rows = head
            .into_iter()
            .chain(body)
            .enumerate()
            .map(|(index, tr)| {
                let kind = if index == 0 && has_head {
                    CellKind::Header
                } else {
                    CellKind::Data
                };
                TableRow {
                    cells: tr
                        .child_elements()
                        .filter(|cell| matches!(cell.tag.as_str(), "th" | "td"))
                        .map(|cell| TableCell::with_content(kind, cell.text().trim()))
                        .collect(),
                }
            })
            .collect();

        let mut table = TableNode::from_rows(default_with_header_row(), rows);
        parse_attributes(TABLE_ATTRIBUTES, element, &mut table);
        table
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::html::parse_fragment;
    use crate::schema::{render_attributes, update_attribute};

    fn first_element(html: &str) -> Element {
        parse_fragment(html)
            .unwrap()
            .into_iter()
            .find_map(|c| c.into_element())
            .unwrap()
    }

    #[test]
    fn test_parse_with_thead() {
        let el = first_element(
            "<table><thead><tr><th>A</th></tr></thead><tbody><tr><td>1</td></tr></tbody></table>",
        );
        let table = TableNode::from_element(&el);

        assert!(table.with_header_row);
        assert!(table.has_header_cells());
        assert_eq!(table.row_count(), 2);
    }

    #[test]
    fn test_parse_without_thead() {
        let el = first_element("<table><tr><td>1</td><td>2</td></tr></table>");
        let table = TableNode::from_element(&el);

        assert!(!table.with_header_row);
        assert_eq!(table.column_count(), 2);
    }

    #[test]
    fn test_th_outside_thead_is_data() {
        let el = first_element(
            "<table><tr><th>A</th><th>B</th></tr><tr><td>1</td><td>2</td></tr></table>",
        );
        let table = TableNode::from_element(&el);

        assert!(!table.with_header_row);
        assert!(!table.has_header_cells());
        assert_eq!(table.row(0).unwrap().cells[0].content, "A");
    }

    #[test]
    fn test_thead_row_leads_and_is_header() {
        let el = first_element(
            "<table><tbody><tr><th>1</th></tr></tbody><thead><tr><td>H</td></tr><tr><td>H2</td></tr></thead></table>",
        );
        let table = TableNode::from_element(&el);

        assert!(table.with_header_row);
        let kinds: Vec<_> = table.rows().iter().map(|r| r.cells[0].kind).collect();
        assert_eq!(kinds, vec![CellKind::Header, CellKind::Data, CellKind::Data]);
        assert_eq!(table.row(0).unwrap().cells[0].content, "H");
    }

    #[test]
    fn test_render_emits_nothing() {
        let table = TableNode::new(2, 2, true);
        assert!(render_attributes(TABLE_ATTRIBUTES, &table).is_empty());

        let table = TableNode::new(2, 2, false);
        assert!(render_attributes(TABLE_ATTRIBUTES, &table).is_empty());
    }

    #[test]
    fn test_update_attribute_does_not_convert_cells() {
        let mut table = TableNode::new(2, 2, true);

        assert!(update_attribute(
            TABLE_ATTRIBUTES,
            &mut table,
            "withHeaderRow",
            AttrValue::Bool(false)
        ));
        assert!(!table.with_header_row);
        assert!(table.has_header_cells());
    }

    #[test]
    fn test_update_attribute_rejects_wrong_type() {
        let mut table = TableNode::new(2, 2, true);

        assert!(!update_attribute(
            TABLE_ATTRIBUTES,
            &mut table,
            "withHeaderRow",
            AttrValue::from("no")
        ));
        assert!(table.with_header_row);
    }
}
