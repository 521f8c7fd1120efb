use bitacora_types::{PageGeometry, TextStyle};

/// A single line of styled text at a fixed spot on one page.
///
/// `x` and `y` are the top-left corner of the line box, measured from the left
/// and top edges of the page.
#[derive(Debug, Clone, PartialEq)]
pub struct PositionedText {
    pub page_index: usize,
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
    pub text: String,
    pub style: TextStyle,
}

/// The laid-out report: every placement, grouped by page in write order.
///
/// A document always has at least one page, even when nothing was placed on it.
#[derive(Debug, Clone)]
pub struct Document {
    geometry: PageGeometry,
    pages: Vec<Vec<PositionedText>>,
}

impl Document {
    pub fn new(geometry: PageGeometry) -> Self {
        Self {
            geometry,
            pages: vec![Vec::new()],
        }
    }

    pub fn push(&mut self, placement: PositionedText) {
        let index = placement.page_index;
        if index >= self.pages.len() {
            self.pages.resize_with(index + 1, Vec::new);
        }
        self.pages[index].push(placement);
    }

    pub fn geometry(&self) -> &PageGeometry {
        &self.geometry
    }

    pub fn pages(&self) -> &[Vec<PositionedText>] {
        &self.pages
    }

    pub fn page_count(&self) -> usize {
        self.pages.len()
    }

    /// All placements in document order.
    pub fn placements(&self) -> impl Iterator<Item = &PositionedText> {
        self.pages.iter().flatten()
    }
}

impl Extend<PositionedText> for Document {
    fn extend<I: IntoIterator<Item = PositionedText>>(&mut self, iter: I) {
        for placement in iter {
            self.push(placement);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn placement(page_index: usize, text: &str) -> PositionedText {
        PositionedText {
            page_index,
            x: 0.0,
            y: 0.0,
            width: 0.0,
            height: 10.0,
            text: text.to_string(),
            style: TextStyle::default(),
        }
    }

    #[test]
    fn new_document_has_one_empty_page() {
        let doc = Document::new(PageGeometry::default());
        assert_eq!(doc.page_count(), 1);
        assert_eq!(doc.placements().count(), 0);
    }

    #[test]
    fn placements_land_on_their_pages() {
        let mut doc = Document::new(PageGeometry::default());
        doc.extend([placement(0, "a"), placement(1, "b"), placement(1, "c")]);
        assert_eq!(doc.page_count(), 2);
        assert_eq!(doc.pages()[1].len(), 2);
        let texts: Vec<&str> = doc.placements().map(|p| p.text.as_str()).collect();
        assert_eq!(texts, ["a", "b", "c"]);
    }
}
