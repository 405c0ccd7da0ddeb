/// Layout parameters for a resume document.
///
/// All lengths are in millimeters. The defaults describe an A4 page with a
/// narrow left column (photo, contact, skill/language bars) and a wide right
/// column (name and narrative sections).
#[derive(Debug, Clone, PartialEq)]
pub struct LayoutConfig {
    pub page_width: f32,
    pub page_height: f32,
    pub margin_top: f32,
    pub margin_bottom: f32,
    pub margin_left: f32,
    /// Width of the left column.
    pub left_column_width: f32,
    /// Gap between the two columns.
    pub column_gap: f32,
    /// Font sizes in points.
    pub name_size: f32,
    pub heading_size: f32,
    pub body_size: f32,
    pub small_size: f32,
    /// Vertical advance per wrapped text line.
    pub line_height: f32,
    /// Height of a section heading plus its underline rule.
    pub header_height: f32,
    /// Blank space after every section block.
    pub section_spacing: f32,
    /// Gap between consecutive education/experience entries.
    pub entry_spacing: f32,
    /// Vertical advance per labeled skill/language bar.
    pub bar_row_height: f32,
    pub bar_height: f32,
    /// Height reserved for the name block (heading plus rule).
    pub name_height: f32,
    /// Side length of the square photo thumbnail.
    pub photo_size: f32,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            page_width: 210.0,
            page_height: 297.0,
            margin_top: 15.0,
            margin_bottom: 15.0,
            margin_left: 15.0,
            left_column_width: 60.0,
            column_gap: 10.0,
            name_size: 20.0,
            heading_size: 12.0,
            body_size: 10.0,
            small_size: 9.0,
            line_height: 5.0,
            header_height: 10.0,
            section_spacing: 6.0,
            entry_spacing: 3.0,
            bar_row_height: 8.0,
            bar_height: 2.0,
            name_height: 16.0,
            photo_size: 40.0,
        }
    }
}

impl LayoutConfig {
    /// X origin of the right column.
    pub fn right_column_x(&self) -> f32 {
        self.margin_left + self.left_column_width + self.column_gap
    }

    /// Usable width of the right column.
    pub fn right_column_width(&self) -> f32 {
        self.page_width - self.right_column_x() - self.margin_left
    }

    /// Lowest cursor position a block may extend to.
    pub fn content_floor(&self) -> f32 {
        self.page_height - self.margin_bottom
    }
}
