//! Output page rendering
//!
//! Pages are built incrementally: images are drawn onto a `PageBuilder` as
//! they are placed, and the page dictionary is only written once the page is
//! full or the input is exhausted.

use crate::layout::{GridLayout, ImagePlacement, PageLayout, Rect};
use lopdf::{Dictionary, Document, Object, ObjectId, Stream};

/// A page under construction
#[derive(Debug, Default)]
pub(crate) struct PageBuilder {
    content: String,
    xobjects: Dictionary,
    placements: Vec<ImagePlacement>,
}

impl PageBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of images drawn so far
    pub fn len(&self) -> usize {
        self.placements.len()
    }

    /// Draw an embedded image at its placement
    pub fn draw_image(&mut self, image_id: ObjectId, placement: ImagePlacement) {
        let xobject_name = format!("Im{}", self.placements.len());
        self.xobjects
            .set(xobject_name.as_bytes(), Object::Reference(image_id));
        self.content
            .push_str(&generate_draw_command(&xobject_name, &placement.content_rect));
        self.placements.push(placement);
    }

    /// Write the page dictionary and its content stream.
    ///
    /// # Arguments
    /// * `output` - The output document
    /// * `parent_pages_id` - The parent Pages object ID
    /// * `grid` - The grid the page was laid out on (provides the page size)
    pub fn finish(
        self,
        output: &mut Document,
        parent_pages_id: ObjectId,
        grid: &GridLayout,
    ) -> (ObjectId, PageLayout) {
        let mut page_dict = Dictionary::new();
        page_dict.set("Type", Object::Name(b"Page".to_vec()));
        page_dict.set("Parent", Object::Reference(parent_pages_id));
        page_dict.set(
            "MediaBox",
            Object::Array(vec![
                Object::Integer(0),
                Object::Integer(0),
                Object::Real(grid.page_width_pt),
                Object::Real(grid.page_height_pt),
            ]),
        );

        let mut resources = Dictionary::new();
        if !self.xobjects.is_empty() {
            resources.set("XObject", Object::Dictionary(self.xobjects));
        }

        let content_id = output.add_object(Stream::new(
            Dictionary::new(),
            self.content.into_bytes(),
        ));

        page_dict.set("Contents", Object::Reference(content_id));
        page_dict.set("Resources", Object::Dictionary(resources));

        let page_id = output.add_object(page_dict);
        (
            page_id,
            PageLayout {
                placements: self.placements,
            },
        )
    }
}

/// Write the page tree and catalog, completing the document structure.
pub(crate) fn finish_document(output: &mut Document, pages_tree_id: ObjectId, page_ids: &[ObjectId]) {
    let page_refs: Vec<Object> = page_ids.iter().map(|&id| Object::Reference(id)).collect();
    let count = page_refs.len() as i64;

    let pages_dict = Dictionary::from_iter(vec![
        ("Type", Object::Name(b"Pages".to_vec())),
        ("Kids", Object::Array(page_refs)),
        ("Count", Object::Integer(count)),
    ]);
    output
        .objects
        .insert(pages_tree_id, Object::Dictionary(pages_dict));

    let catalog_id = output.add_object(Dictionary::from_iter(vec![
        ("Type", Object::Name(b"Catalog".to_vec())),
        ("Pages", Object::Reference(pages_tree_id)),
    ]));

    output.trailer.set("Root", catalog_id);
}

/// Generate the content stream command that draws an image XObject into `rect`.
///
/// Image XObjects occupy the unit square, so the matrix scales straight to
/// the drawn size.
fn generate_draw_command(xobject_name: &str, rect: &Rect) -> String {
    format!(
        "q {} 0 0 {} {} {} cm /{} Do Q\n",
        rect.width, rect.height, rect.x, rect.y, xobject_name
    )
}
