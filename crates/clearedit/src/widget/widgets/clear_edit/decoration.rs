//! The clear icon and its two visual variants.

use tracing::trace;

use clearedit_core::logging::targets;

use crate::widget::widgets::LineEdit;
use crate::widget::{Decoration, IconImage};

/// The icon images supplied by the caller.
///
/// Both images are drawn into the same square, whose side is the normal
/// image's intrinsic width.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct IconSet {
    /// Shown while the field is clearable.
    pub normal: Option<IconImage>,
    /// Shown while the icon is held down.
    pub pressed: Option<IconImage>,
}

impl IconSet {
    /// Create an icon set with both variants.
    pub fn new(normal: IconImage, pressed: IconImage) -> Self {
        Self {
            normal: Some(normal),
            pressed: Some(pressed),
        }
    }

    /// An icon set with no images. The clear icon never appears.
    pub fn none() -> Self {
        Self::default()
    }
}

/// Which icon variant is attached to the field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum IconVariant {
    /// No icon is attached.
    #[default]
    None,
    /// The resting icon.
    Normal,
    /// The held-down icon.
    Pressed,
}

impl IconVariant {
    /// Whether any icon is attached.
    pub fn is_attached(self) -> bool {
        self != IconVariant::None
    }
}

/// Owns the icon images and attaches them to a field's trailing slot.
///
/// The width of the attached decoration is cached for hit testing and is
/// zero while nothing is attached.
#[derive(Debug)]
pub struct IconDecoration {
    normal: Option<IconImage>,
    pressed: Option<IconImage>,
    extent: f32,
    attached: IconVariant,
    attached_width: f32,
}

impl IconDecoration {
    /// Create a decoration from a set of icons.
    pub fn new(icons: IconSet) -> Self {
        let extent = icons
            .normal
            .as_ref()
            .map_or(0.0, |image| image.intrinsic_width() as f32);

        Self {
            normal: icons.normal,
            pressed: icons.pressed,
            extent,
            attached: IconVariant::None,
            attached_width: 0.0,
        }
    }

    /// Whether a normal image is available.
    pub fn is_available(&self) -> bool {
        self.normal.is_some()
    }

    /// Side length of the square the icon is drawn into.
    pub fn extent(&self) -> f32 {
        self.extent
    }

    /// The currently attached variant.
    pub fn attached(&self) -> IconVariant {
        self.attached
    }

    /// On-screen width of the attached decoration, or zero.
    pub fn width(&self) -> f32 {
        self.attached_width
    }

    /// Attach `variant` to the field's trailing slot.
    ///
    /// Returns `false`, leaving the field untouched, if the variant has no
    /// image. Attaching [`IconVariant::None`] detaches.
    pub fn attach(&mut self, variant: IconVariant, field: &mut LineEdit) -> bool {
        let image = match variant {
            IconVariant::None => {
                self.detach(field);
                return true;
            }
            IconVariant::Normal => self.normal.as_ref(),
            IconVariant::Pressed => self.pressed.as_ref(),
        };
        let Some(image) = image else {
            match variant {
                IconVariant::Pressed => {
                    trace!(target: targets::GESTURE, ?variant, "no image for icon variant")
                }
                _ => trace!(target: targets::VISIBILITY, ?variant, "no image for icon variant"),
            }
            return false;
        };

        field.set_trailing_decoration(Some(Decoration::new(image.clone(), self.extent)));
        self.attached = variant;
        self.attached_width = self.extent;
        true
    }

    /// Remove the icon from the field.
    pub fn detach(&mut self, field: &mut LineEdit) {
        field.set_trailing_decoration(None);
        self.attached = IconVariant::None;
        self.attached_width = 0.0;
    }

    /// Swap a pressed icon back to the normal one.
    ///
    /// Does nothing while no icon is attached.
    pub fn revert_to_normal(&mut self, field: &mut LineEdit) {
        if self.attached == IconVariant::Pressed {
            self.attach(IconVariant::Normal, field);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn icons() -> IconSet {
        IconSet::new(
            IconImage::new("clear_normal", 24, 24),
            IconImage::new("clear_pressed", 30, 30),
        )
    }

    #[test]
    fn test_extent_from_normal_image() {
        let decoration = IconDecoration::new(icons());
        assert_eq!(decoration.extent(), 24.0);
        assert_eq!(decoration.width(), 0.0);
        assert_eq!(decoration.attached(), IconVariant::None);
    }

    #[test]
    fn test_attach_and_detach() {
        let mut field = LineEdit::new();
        let mut decoration = IconDecoration::new(icons());

        assert!(decoration.attach(IconVariant::Normal, &mut field));
        assert_eq!(decoration.width(), 24.0);
        let attached = field.trailing_decoration().map(|d| d.image().name().to_owned());
        assert_eq!(attached.as_deref(), Some("clear_normal"));

        assert!(decoration.attach(IconVariant::Pressed, &mut field));
        let attached = field.trailing_decoration().map(|d| d.width());
        assert_eq!(attached, Some(24.0));

        decoration.detach(&mut field);
        assert!(field.trailing_decoration().is_none());
        assert_eq!(decoration.width(), 0.0);
    }

    #[test]
    fn test_missing_pressed_image_keeps_normal() {
        let mut field = LineEdit::new();
        let mut decoration = IconDecoration::new(IconSet {
            normal: Some(IconImage::square("clear", 20)),
            pressed: None,
        });

        decoration.attach(IconVariant::Normal, &mut field);
        assert!(!decoration.attach(IconVariant::Pressed, &mut field));
        assert_eq!(decoration.attached(), IconVariant::Normal);
    }

    #[test]
    fn test_missing_normal_image_never_attaches() {
        let mut field = LineEdit::new();
        let mut decoration = IconDecoration::new(IconSet::none());
        assert!(!decoration.is_available());
        assert!(!decoration.attach(IconVariant::Normal, &mut field));
        assert!(field.trailing_decoration().is_none());
        assert_eq!(decoration.width(), 0.0);
    }

    #[test]
    fn test_revert_only_when_pressed() {
        let mut field = LineEdit::new();
        let mut decoration = IconDecoration::new(icons());

        decoration.revert_to_normal(&mut field);
        assert_eq!(decoration.attached(), IconVariant::None);

        decoration.attach(IconVariant::Pressed, &mut field);
        decoration.revert_to_normal(&mut field);
        assert_eq!(decoration.attached(), IconVariant::Normal);
    }
}
