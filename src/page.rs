//! Pagination: cursors, pages, the break decider, and the column engine.
//!
//! The two columns paginate independently. Pages live in one shared vector;
//! when a column overflows it moves to `page_index + 1`, allocating that page
//! only if the other column has not already created it. A break in one column
//! never moves the sibling column's cursor.

use log::debug;

use crate::blocks::{ContentBlock, DrawCommand};
use crate::config::LayoutConfig;

/// One of the two vertical content regions on a page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Column {
    Left,
    Right,
}

/// Next draw position within a column.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Cursor {
    /// 0-based index into the shared page vector.
    pub page_index: usize,
    /// Distance from the page top, in millimeters.
    pub y: f32,
}

/// Drawing commands of a single page, in emission order.
pub type Page = Vec<DrawCommand>;

/// Outcome of the page-break decision for one block.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BreakDecision {
    pub y: f32,
    pub page_changed: bool,
}

/// Decides whether placing a block of `block_height` at `cursor_y` overflows
/// the page. Strict `>`: a block ending exactly at the bottom margin stays.
pub fn should_break(
    cursor_y: f32,
    block_height: f32,
    page_height: f32,
    margin_bottom: f32,
    margin_top: f32,
) -> BreakDecision {
    if cursor_y + block_height > page_height - margin_bottom {
        BreakDecision {
            y: margin_top,
            page_changed: true,
        }
    } else {
        BreakDecision {
            y: cursor_y,
            page_changed: false,
        }
    }
}

/// Ordered page sequence shared by both columns.
#[derive(Debug)]
pub struct PageState {
    pages: Vec<Page>,
}

impl PageState {
    fn new() -> Self {
        Self {
            pages: vec![Page::new()],
        }
    }

    /// Page at `index`, appending empty pages until it exists. A column that
    /// breaks after its sibling already advanced reuses the existing page.
    fn ensure_page(&mut self, index: usize) -> &mut Page {
        while self.pages.len() <= index {
            self.pages.push(Page::new());
        }
        &mut self.pages[index]
    }

    pub fn page_count(&self) -> usize {
        self.pages.len()
    }
}

/// Sequentially places content blocks into the two columns.
#[derive(Debug)]
pub struct ColumnLayout {
    config: LayoutConfig,
    state: PageState,
    left: Cursor,
    right: Cursor,
}

impl ColumnLayout {
    pub fn new(config: &LayoutConfig) -> Self {
        let start = Cursor {
            page_index: 0,
            y: config.margin_top,
        };
        Self {
            config: config.clone(),
            state: PageState::new(),
            left: start,
            right: start,
        }
    }

    pub fn cursor(&self, column: Column) -> Cursor {
        match column {
            Column::Left => self.left,
            Column::Right => self.right,
        }
    }

    fn set_cursor(&mut self, column: Column, cursor: Cursor) {
        match column {
            Column::Left => self.left = cursor,
            Column::Right => self.right = cursor,
        }
    }

    fn column_x(&self, column: Column) -> f32 {
        match column {
            Column::Left => self.config.margin_left,
            Column::Right => self.config.right_column_x(),
        }
    }

    /// Places one block: decide the break, move to the (possibly new) page,
    /// emit the block's commands at the cursor, advance the cursor.
    pub fn place_block(&mut self, column: Column, block: ContentBlock) {
        let mut cursor = self.cursor(column);
        let decision = should_break(
            cursor.y,
            block.height,
            self.config.page_height,
            self.config.margin_bottom,
            self.config.margin_top,
        );
        if decision.page_changed {
            cursor.page_index += 1;
            cursor.y = decision.y;
            debug!(
                "page break in {:?} column, continuing on page {}",
                column,
                cursor.page_index + 1
            );
        }

        let x0 = self.column_x(column);
        let y0 = cursor.y;
        let page = self.state.ensure_page(cursor.page_index);
        for command in block.commands {
            page.push(command.offset(x0, y0));
        }

        cursor.y += block.height;
        self.set_cursor(column, cursor);
    }

    pub fn page_count(&self) -> usize {
        self.state.page_count()
    }

    pub fn into_pages(self) -> Vec<Page> {
        self.state.pages
    }
}
