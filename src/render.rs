use image::RgbaImage;

use crate::image_spec::ImageSpec;

/// Fills a fresh `width × height` buffer with the background color.
/// Foreground and text are carried on the spec but not drawn. Zero
/// dimensions produce a valid empty image.
pub fn render(spec: &ImageSpec) -> RgbaImage {
    RgbaImage::from_pixel(spec.width, spec.height, spec.background)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::image_spec::{opaque, BLACK, WHITE};

    #[test]
    fn fills_every_pixel_with_the_background() {
        let spec = ImageSpec::new(4, 3, WHITE, opaque(0xff, 0, 0));
        let img = render(&spec);
        assert_eq!(img.dimensions(), (4, 3));
        assert!(img.pixels().all(|p| *p == opaque(0xff, 0, 0)));
    }

    #[test]
    fn foreground_has_no_effect() {
        let a = render(&ImageSpec::new(2, 2, BLACK, WHITE));
        let b = render(&ImageSpec::new(2, 2, opaque(1, 2, 3), WHITE));
        assert_eq!(a, b);
    }

    #[test]
    fn zero_dimensions_produce_an_empty_image() {
        let img = render(&ImageSpec::new(0, 0, BLACK, WHITE));
        assert_eq!(img.dimensions(), (0, 0));
        assert!(img.pixels().next().is_none());
    }

    #[test]
    fn deterministic_for_the_same_spec() {
        let spec = ImageSpec::new(5, 5, BLACK, opaque(0x12, 0x34, 0x56));
        assert_eq!(render(&spec), render(&spec));
    }
}
