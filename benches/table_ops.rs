//! Benchmarks for table structural commands and HTML interchange
//!
//! Run with: cargo bench table_ops

use editcrafter::html::{parse_document, render_document};
use editcrafter::model::{Block, Document};
use editcrafter::table::{CellPosition, TableNode};

#[global_allocator]
static ALLOC: divan::AllocProfiler = divan::AllocProfiler::system();

fn main() {
    divan::main();
}

fn table_doc(size: usize) -> Document {
    let mut table = TableNode::new(size, size, true);
    for row in 0..size {
        for col in 0..size {
            table.set_cell_content(CellPosition::new(row, col), &format!("{}:{}", row, col));
        }
    }
    let mut doc = Document::with_blocks(vec![Block::Table(table)]);
    doc.set_focus(0, Some(CellPosition::new(size / 2, size / 2)));
    doc
}

// ============================================================================
// Structural commands (each runs through an atomic chain)
// ============================================================================

#[divan::bench(args = [4, 16, 64])]
fn add_column_after(bencher: divan::Bencher, size: usize) {
    bencher
        .with_inputs(|| table_doc(size))
        .bench_local_values(|mut doc| {
            doc.chain().focus().add_column_after().run();
            doc
        });
}

#[divan::bench(args = [4, 16, 64])]
fn add_row_before(bencher: divan::Bencher, size: usize) {
    bencher
        .with_inputs(|| table_doc(size))
        .bench_local_values(|mut doc| {
            doc.chain().focus().add_row_before().run();
            doc
        });
}

#[divan::bench(args = [4, 16, 64])]
fn toggle_header_twice(bencher: divan::Bencher, size: usize) {
    bencher
        .with_inputs(|| table_doc(size))
        .bench_local_values(|mut doc| {
            doc.chain().focus().toggle_header_row().toggle_header_row().run();
            doc
        });
}

#[divan::bench(args = [4, 16, 64])]
fn discarded_chain(bencher: divan::Bencher, size: usize) {
    bencher
        .with_inputs(|| {
            let mut doc = table_doc(size);
            doc.set_focus(0, Some(CellPosition::new(0, 0)));
            doc
        })
        .bench_local_values(|mut doc| {
            // The paragraph takes focus, so the cell write fails and the draft is discarded
            doc.chain()
                .focus()
                .delete_column()
                .insert_paragraph("")
                .set_cell_content("unreachable")
                .run();
            doc
        });
}

// ============================================================================
// HTML
// ============================================================================

#[divan::bench(args = [4, 16, 64])]
fn render_table(size: usize) -> String {
    let doc = table_doc(size);
    render_document(divan::black_box(&doc))
}

#[divan::bench(args = [4, 16, 64])]
fn parse_table(bencher: divan::Bencher, size: usize) {
    let html = render_document(&table_doc(size));
    bencher.bench(|| parse_document(divan::black_box(&html)));
}
