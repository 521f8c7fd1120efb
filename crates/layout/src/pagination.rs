use crate::LayoutError;
use bitacora_types::PageGeometry;

// Use a small epsilon to handle floating point inaccuracies
const EPSILON: f32 = 0.01;

/// Where the next line goes: a page and the top edge of the line on that page.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Cursor {
    pub page_index: usize,
    pub y: f32,
}

/// The vertical write position of a single layout pass.
///
/// Breaks follow a write-then-check policy: [`advance`](Self::advance) only marks a
/// break as pending once `y` has passed the bottom threshold, and the break is applied
/// by the next [`begin_write`](Self::begin_write). A line that starts at or above the
/// threshold is therefore always written on the current page, and overflowing the
/// last line of a document never opens an empty trailing page.
#[derive(Debug, Clone)]
pub struct PageCursor {
    geometry: PageGeometry,
    position: Cursor,
    pending_break: bool,
    page_has_content: bool,
}

impl PageCursor {
    pub fn new(geometry: PageGeometry) -> Result<Self, LayoutError> {
        geometry.validate().map_err(LayoutError::InvalidGeometry)?;
        Ok(Self {
            geometry,
            position: Cursor {
                page_index: 0,
                y: geometry.margin,
            },
            pending_break: false,
            page_has_content: false,
        })
    }

    pub fn position(&self) -> Cursor {
        self.position
    }

    pub fn page_index(&self) -> usize {
        self.position.page_index
    }

    pub fn y(&self) -> f32 {
        self.position.y
    }

    pub fn is_break_pending(&self) -> bool {
        self.pending_break
    }

    /// Whether `height` more points fit on the current page before the bottom threshold.
    pub fn reserve(&self, height: f32) -> bool {
        !self.pending_break
            && self.position.y + height <= self.geometry.bottom_break_threshold + EPSILON
    }

    pub fn advance(&mut self, height: f32) {
        self.position.y += height;
        if !self.pending_break && self.position.y > self.geometry.bottom_break_threshold + EPSILON {
            log::debug!(
                "Page {} full at y={:.2}, breaking before the next write",
                self.position.page_index,
                self.position.y
            );
            self.pending_break = true;
        }
    }

    /// Requests a break before the next write. Ignored on a page nothing has been
    /// written to yet, so explicit breaks never leave blank pages behind.
    pub fn force_break(&mut self) {
        if self.page_has_content && !self.pending_break {
            log::debug!("Forced page break after page {}", self.position.page_index);
            self.pending_break = true;
        }
    }

    /// Resolves any pending break and claims the current position for a line.
    pub fn begin_write(&mut self) -> Cursor {
        if self.pending_break {
            self.position = Cursor {
                page_index: self.position.page_index + 1,
                y: self.geometry.margin,
            };
            self.pending_break = false;
            self.page_has_content = false;
        }
        self.page_has_content = true;
        self.position
    }
}
