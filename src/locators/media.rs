use super::{SelectorSet, attr_text};
use crate::config::{ImageConfig, PresenceConfig};
use crate::document::PageDocument;
use crate::filter::MediaFilter;
use crate::results::ImageRef;
use crate::utils::parse_dimension;
use scraper::ElementRef;

/// Collects image references and drops data URIs, trackers and icons
#[derive(Debug)]
pub struct ImageLocator {
    images: SelectorSet,
    filter: MediaFilter,
}

impl ImageLocator {
    pub fn new(config: &ImageConfig) -> Self {
        let filter = match MediaFilter::new(config.filter.clone()) {
            Ok(filter) => filter,
            Err(e) => {
                ::log::warn!("Invalid media filter pattern, using defaults: {}", e);
                MediaFilter::default()
            }
        };

        Self {
            images: SelectorSet::single("img", "image"),
            filter,
        }
    }

    /// Kept images in document order
    pub fn locate(&self, doc: &PageDocument) -> Vec<ImageRef> {
        let mut total = 0;
        let images: Vec<ImageRef> = self
            .images
            .matches(doc)
            .filter_map(|img| {
                total += 1;
                let image = image_ref(doc, img)?;
                self.filter.should_keep(&image).then_some(image)
            })
            .collect();

        ::log::debug!("Kept {} of {} images", images.len(), total);
        images
    }
}

/// Builds an image reference; a size that is neither rendered nor declared is 0
fn image_ref(doc: &PageDocument, img: ElementRef) -> Option<ImageRef> {
    let src = attr_text(img, "src").or_else(|| attr_text(img, "data-src"))?;

    // Rendered sizes, stamped in by the browser path, win over markup attributes
    let width = dimension(img, "data-rendered-width", "width");
    let height = dimension(img, "data-rendered-height", "height");

    Some(ImageRef {
        src: doc.resolve(&src),
        alt: attr_text(img, "alt").unwrap_or_default(),
        title: attr_text(img, "title").unwrap_or_default(),
        width: width.unwrap_or(0),
        height: height.unwrap_or(0),
    })
}

fn dimension(img: ElementRef, rendered: &str, declared: &str) -> Option<u32> {
    img.value()
        .attr(rendered)
        .and_then(parse_dimension)
        .or_else(|| img.value().attr(declared).and_then(parse_dimension))
}

/// Structural presence flags
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Presence {
    pub has_video: bool,
    pub has_form: bool,
    pub has_chat: bool,
}

#[derive(Debug, Clone)]
pub struct PresenceLocator {
    video: SelectorSet,
    form: SelectorSet,
    chat: SelectorSet,
}

impl PresenceLocator {
    pub fn new(config: &PresenceConfig) -> Self {
        Self {
            video: SelectorSet::compile(&config.video, "video"),
            form: SelectorSet::compile(&config.form, "form"),
            chat: SelectorSet::compile(&config.chat, "chat"),
        }
    }

    pub fn locate(&self, doc: &PageDocument) -> Presence {
        Presence {
            has_video: self.video.any_match(doc),
            has_form: self.form.any_match(doc),
            has_chat: self.chat.any_match(doc),
        }
    }
}
