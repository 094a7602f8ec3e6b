//! Icon handles and trailing decorations.
//!
//! Image decoding belongs to the resource layer. Widgets only need to know an
//! icon's identity and intrinsic size, which is what [`IconImage`] carries.

use std::fmt;
use std::sync::Arc;

/// A handle to a decoded icon image.
///
/// Cloning is cheap; the name is shared.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct IconImage {
    name: Arc<str>,
    width: u32,
    height: u32,
}

impl IconImage {
    /// Create a handle for an icon with the given intrinsic pixel size.
    pub fn new(name: impl Into<Arc<str>>, width: u32, height: u32) -> Self {
        Self {
            name: name.into(),
            width,
            height,
        }
    }

    /// Create a handle for a square icon.
    pub fn square(name: impl Into<Arc<str>>, side: u32) -> Self {
        Self::new(name, side, side)
    }

    /// The resource name of the icon.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Intrinsic width in pixels.
    pub fn intrinsic_width(&self) -> u32 {
        self.width
    }

    /// Intrinsic height in pixels.
    pub fn intrinsic_height(&self) -> u32 {
        self.height
    }
}

impl fmt::Debug for IconImage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "IconImage({:?}, {}x{})", self.name, self.width, self.height)
    }
}

/// An icon placed at one edge of a text field's content area.
///
/// The icon is drawn into a square of side `extent` regardless of its
/// intrinsic size.
#[derive(Debug, Clone, PartialEq)]
pub struct Decoration {
    image: IconImage,
    extent: f32,
}

impl Decoration {
    /// Create a decoration drawing `image` into an `extent`×`extent` square.
    pub fn new(image: IconImage, extent: f32) -> Self {
        Self { image, extent }
    }

    /// The decoration's image.
    pub fn image(&self) -> &IconImage {
        &self.image
    }

    /// On-screen width of the decoration.
    pub fn width(&self) -> f32 {
        self.extent
    }

    /// On-screen height of the decoration.
    pub fn height(&self) -> f32 {
        self.extent
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_icon_image_dimensions() {
        let icon = IconImage::new("clear", 24, 20);
        assert_eq!(icon.name(), "clear");
        assert_eq!(icon.intrinsic_width(), 24);
        assert_eq!(icon.intrinsic_height(), 20);
        assert_eq!(IconImage::square("x", 16).intrinsic_height(), 16);
    }

    #[test]
    fn test_decoration_uses_extent_not_intrinsic_size() {
        let decoration = Decoration::new(IconImage::new("clear", 48, 30), 24.0);
        assert_eq!(decoration.width(), 24.0);
        assert_eq!(decoration.height(), 24.0);
        assert_eq!(decoration.image().intrinsic_width(), 48);
    }
}
