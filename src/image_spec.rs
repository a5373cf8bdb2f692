use image::Rgba;

pub const WHITE: Rgba<u8> = opaque(0xff, 0xff, 0xff);
pub const BLACK: Rgba<u8> = opaque(0x00, 0x00, 0x00);

/// Fully opaque RGB color.
pub const fn opaque(r: u8, g: u8, b: u8) -> Rgba<u8> {
    Rgba([r, g, b, 0xff])
}

/// Everything needed to render one placeholder image. Built fresh per
/// request and dropped once the response is written.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageSpec {
    pub width: u32,
    pub height: u32,
    /// Parsed from the path but not used by rendering yet.
    pub foreground: Rgba<u8>,
    pub background: Rgba<u8>,
    /// Accepted from the query string, never rendered.
    pub text: String,
}

impl ImageSpec {
    pub fn new(width: u32, height: u32, foreground: Rgba<u8>, background: Rgba<u8>) -> Self {
        ImageSpec {
            width,
            height,
            foreground,
            background,
            text: String::new(),
        }
    }

    pub fn with_text(mut self, text: String) -> Self {
        self.text = text;
        self
    }
}
