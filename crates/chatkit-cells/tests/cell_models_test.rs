//! Cells consume what the calculators computed, never re-deriving it.

use chatkit_cells::*;
use chatkit_layout::*;

fn me() -> Sender {
    Sender::new("me", "Me")
}

struct LinkDelegate;

impl MessagesDisplayDelegate for LinkDelegate {
    fn enabled_detectors(&self, _message: &Message, _index_path: IndexPath) -> DetectorSet {
        DetectorSet::from_vec(vec![DetectorType::Url, DetectorType::Mention])
    }

    fn detector_attributes(
        &self,
        detector: &DetectorType,
        _message: &Message,
        _index_path: IndexPath,
    ) -> TextAttributes {
        TextAttributes {
            foreground: Some(Color::BLUE),
            font: None,
            underline: *detector == DetectorType::Url,
        }
    }

    fn text_color(&self, message: &Message, _index_path: IndexPath) -> Color {
        if message.sender.id == "me" {
            Color::WHITE
        } else {
            Color::BLACK
        }
    }
}

struct PlainDelegate;

impl MessagesDisplayDelegate for PlainDelegate {}

fn attachment_conversation() -> Conversation {
    let item = MediaItem::new(ImageInfo::new(1000.0, 500.0))
        .with_image(ImageInfo::new(800.0, 600.0).with_url("https://example.com/a.png"));
    Conversation::with_messages(
        me(),
        vec![
            Message::attachment("1", me(), "see https://example.com", item),
            Message::system("2", me(), StyledText::plain("Bob left")),
        ],
    )
}

#[test]
fn attachment_cell_uses_calculator_attributes() {
    let conversation = attachment_conversation();
    let layout = MessagesLayout::new(&conversation, &MonospacedTextMeasurer)
        .with_viewport(ViewportGeometry::new(380.0));
    let calculators = CalculatorSet::default();
    let index_path = IndexPath::new(0, 0);

    let mut attributes = MessagesLayoutAttributes::new(index_path);
    calculators.configure(&layout, &mut attributes).unwrap();

    let mut cell = AttachmentCellModel::new();
    cell.apply(&attributes);
    cell.configure(&conversation.messages()[0], index_path, Some(&LinkDelegate))
        .unwrap();

    assert_eq!(cell.caption.insets, EdgeInsets::new(7.0, 14.0, 9.0, 18.0));
    assert_eq!(cell.caption.font, Some(Font::body()));
    assert_eq!(cell.caption.text.as_deref(), Some("see https://example.com"));
    assert_eq!(cell.caption.text_color, Color::WHITE);
    assert_eq!(cell.caption.enabled_detectors.len(), 2);
    assert!(cell.caption.attributes_for(&DetectorType::Url).unwrap().underline);
    assert!(!cell.caption.attributes_for(&DetectorType::Mention).unwrap().underline);
    assert_eq!(cell.caption.attributes_for(&DetectorType::Hashtag), None);

    // The resolved image replaces the placeholder once loaded.
    assert_eq!(cell.image.as_ref().map(|image| image.size), Some(Size::new(800.0, 600.0)));
    assert_eq!(cell.image_aspect_ratio, Some(0.75));
    assert_eq!(cell.image_size(268.0), Some(Size::new(268.0, 201.0)));
    assert_eq!(cell.image_size(100.0), Some(Size::new(250.0, 187.5)));
}

#[test]
fn caption_fits_the_space_the_calculator_reserved() {
    let conversation = attachment_conversation();
    let layout = MessagesLayout::new(&conversation, &MonospacedTextMeasurer)
        .with_viewport(ViewportGeometry::new(380.0));
    let calculators = CalculatorSet::default();
    let index_path = IndexPath::new(0, 0);
    let message = &conversation.messages()[0];

    let mut attributes = MessagesLayoutAttributes::new(index_path);
    calculators.configure(&layout, &mut attributes).unwrap();
    let mut cell = AttachmentCellModel::new();
    cell.apply(&attributes);
    cell.configure(message, index_path, Some(&PlainDelegate)).unwrap();

    let container = calculators
        .attachment()
        .message_container_size(&layout, message)
        .unwrap();
    // Sizing uses the placeholder: 268 x 134.
    let caption = cell.caption.fitting_size(&MonospacedTextMeasurer, container.width);
    assert_eq!(caption.height, container.height - 134.0);
    assert!(caption.width <= container.width);
}

#[test]
fn attachment_cell_requires_a_display_delegate() {
    let conversation = attachment_conversation();
    let mut cell = AttachmentCellModel::new();

    let result = cell.configure(&conversation.messages()[0], IndexPath::new(0, 0), None);
    assert_eq!(result, Err(LayoutError::MissingDisplayDelegate));
    assert_eq!(cell, AttachmentCellModel::new());
}

#[test]
fn attachment_cell_leaves_other_kinds_alone() {
    let conversation = attachment_conversation();
    let mut cell = AttachmentCellModel::new();

    cell.configure(&conversation.messages()[1], IndexPath::new(1, 0), Some(&PlainDelegate))
        .unwrap();
    assert_eq!(cell, AttachmentCellModel::new());
}

#[test]
fn attachment_cell_ignores_plain_attributes() {
    let mut cell = AttachmentCellModel::new();
    cell.apply(&PlainLayoutAttributes::new(IndexPath::new(0, 0)));
    assert_eq!(cell, AttachmentCellModel::new());
}

#[test]
fn reuse_clears_content() {
    let conversation = attachment_conversation();
    let mut cell = AttachmentCellModel::new();
    cell.configure(&conversation.messages()[0], IndexPath::new(0, 0), Some(&LinkDelegate))
        .unwrap();

    cell.prepare_for_reuse();
    assert_eq!(cell.image, None);
    assert_eq!(cell.image_aspect_ratio, None);
    assert_eq!(cell.caption.text, None);
    assert!(cell.caption.enabled_detectors.is_empty());
    assert!(cell.caption.detector_attributes.is_empty());
}

#[test]
fn system_cell_shows_status_text() {
    let conversation = attachment_conversation();
    let mut cell = SystemCellModel::new();

    cell.configure(&conversation.messages()[1]).unwrap();
    cell.layout(Size::new(364.0, 44.0));
    assert_eq!(cell.text, Some(StyledText::plain("Bob left")));
    assert_eq!(cell.alignment, TextAlignment::Center);
    assert_eq!(cell.max_lines, None);
    assert_eq!(cell.label_frame, Size::new(364.0, 44.0));
    assert_eq!(cell.effective_text_color(), Color::GRAY);

    cell.prepare_for_reuse();
    assert_eq!(cell.text, None);
}

#[test]
fn system_cell_prefers_the_text_colour() {
    let message = Message::system("1", me(), StyledText::plain("x").with_color(Color::BLUE));
    let mut cell = SystemCellModel::new();
    cell.configure(&message).unwrap();
    assert_eq!(cell.effective_text_color(), Color::BLUE);
}

#[test]
fn system_cell_rejects_other_kinds() {
    let conversation = attachment_conversation();
    let mut cell = SystemCellModel::new();

    let err = cell.configure(&conversation.messages()[0]).unwrap_err();
    assert_eq!(
        err,
        LayoutError::UnhandledKind {
            component: "SystemCellModel",
            expected: "system",
            found: "attachment",
        }
    );
}
