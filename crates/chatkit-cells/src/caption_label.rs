use chatkit_graphics::{Color, EdgeInsets, Font, Size};
use chatkit_layout::{DetectorSet, DetectorType, TextAttributes, TextMeasurer};

/// Horizontal placement of a label's lines.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum TextAlignment {
    #[default]
    Leading,
    Center,
    Trailing,
}

/// The label under an attachment's image.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct CaptionLabel {
    pub text: Option<String>,
    pub text_color: Color,
    /// Font chosen by the size calculator. `None` until attributes are applied.
    pub font: Option<Font>,
    pub insets: EdgeInsets,
    pub enabled_detectors: DetectorSet,
    pub detector_attributes: Vec<(DetectorType, TextAttributes)>,
}

impl CaptionLabel {
    pub fn attributes_for(&self, detector: &DetectorType) -> Option<&TextAttributes> {
        self.detector_attributes
            .iter()
            .find(|(candidate, _)| candidate == detector)
            .map(|(_, attributes)| attributes)
    }

    /// Size the label needs at `max_width`, insets included.
    ///
    /// Uses the same measurer and font as the attachment calculator so the
    /// drawn caption matches the space reserved for it.
    pub fn fitting_size(&self, measurer: &dyn TextMeasurer, max_width: f32) -> Size {
        let font = self.font.clone().unwrap_or_default();
        let text = self.text.as_deref().unwrap_or_default();
        let content_width = (max_width - self.insets.horizontal()).max(0.0);
        let text_size = measurer.measure(text, &font, content_width).size();
        Size::new(
            text_size.width + self.insets.horizontal(),
            text_size.height + self.insets.vertical(),
        )
    }

    pub(crate) fn clear(&mut self) {
        self.text = None;
        self.enabled_detectors.clear();
        self.detector_attributes.clear();
    }
}
