//! Builders for every element kind. Each validates fully before inserting;
//! composite widgets roll back their own node when a part fails.

use core_grid::BorderStyle;

use crate::UiError;
use crate::align::{Anchor, Placement, TextAlign};
use crate::assets::ImageData;
use crate::geom::Size;
use crate::node::{Frame, LabelState, NodeId, NodeKind, Selectable, TabStrip};
use crate::text::{TextPolicy, char_len};
use crate::tree::{NewNode, Position, Ui};

pub(crate) const FRAME_MIN: Size = Size::new(3, 3);
const LEAF_MIN: Size = Size::new(1, 1);

impl Ui {
    fn add_framed(
        &mut self,
        owner: NodeId,
        kind: NodeKind,
        size: Size,
        placement: Placement,
    ) -> Result<NodeId, UiError> {
        self.insert(NewNode {
            owner,
            size,
            min: FRAME_MIN,
            z: placement.z,
            position: Position::Anchored {
                anchor: placement.anchor,
                padding: placement.padding,
            },
            kind,
        })
    }

    /// Bordered container.
    pub fn add_box(
        &mut self,
        owner: NodeId,
        style: BorderStyle,
        size: Size,
        placement: Placement,
    ) -> Result<NodeId, UiError> {
        self.add_framed(owner, NodeKind::Box(Frame { style }), size, placement)
    }

    /// Bordered container that may not match its parent's size on either
    /// axis; usually holds one centered label.
    pub fn add_button(
        &mut self,
        owner: NodeId,
        style: BorderStyle,
        size: Size,
        placement: Placement,
    ) -> Result<NodeId, UiError> {
        self.add_framed(owner, NodeKind::Button(Frame { style }), size, placement)
    }

    /// Button-like box showing `◂ text ▸`.
    pub fn add_selection_box(
        &mut self,
        owner: NodeId,
        text: &str,
        style: BorderStyle,
        size: Size,
        placement: Placement,
    ) -> Result<NodeId, UiError> {
        let id = self.add_framed(owner, NodeKind::SelectionBox(Frame { style }), size, placement)?;
        let parts = self
            .add_label(
                id,
                "◂",
                1,
                TextAlign::Left,
                TextPolicy::Truncate,
                Placement::new(Anchor::CenterLeft, 2, 0),
            )
            .and_then(|_| {
                self.add_label(
                    id,
                    text,
                    char_len(text) as i32,
                    TextAlign::Center,
                    TextPolicy::Truncate,
                    Placement::at(Anchor::Center),
                )
            })
            .and_then(|_| {
                self.add_label(
                    id,
                    "▸",
                    1,
                    TextAlign::Right,
                    TextPolicy::Truncate,
                    Placement::new(Anchor::CenterRight, 2, 0),
                )
            });
        if let Err(e) = parts {
            self.destroy(id)?;
            return Err(e);
        }
        Ok(id)
    }

    /// Bordered container owning a horizontal strip of `Tab` headers above
    /// it, each `tab_width` wide.
    pub fn add_window(
        &mut self,
        owner: NodeId,
        style: BorderStyle,
        size: Size,
        tab_width: i32,
        placement: Placement,
    ) -> Result<NodeId, UiError> {
        let strip = TabStrip {
            style,
            tab_size: Size::new(tab_width, 3),
            selected: 0,
        };
        self.add_framed(owner, NodeKind::Window(strip), size, placement)
    }

    /// Bordered container owning a vertical strip of `SettingsTab` headers
    /// to its left.
    pub fn add_settings_list(
        &mut self,
        owner: NodeId,
        style: BorderStyle,
        size: Size,
        tab_size: Size,
        placement: Placement,
    ) -> Result<NodeId, UiError> {
        let strip = TabStrip {
            style,
            tab_size,
            selected: 0,
        };
        self.add_framed(owner, NodeKind::SettingsList(strip), size, placement)
    }

    /// One-row text element `width` columns wide.
    pub fn add_label(
        &mut self,
        owner: NodeId,
        text: &str,
        width: i32,
        align: TextAlign,
        policy: TextPolicy,
        placement: Placement,
    ) -> Result<NodeId, UiError> {
        check_fixed_text(text, width, policy)?;
        self.insert(NewNode {
            owner,
            size: Size::new(width, 1),
            min: LEAF_MIN,
            z: placement.z,
            position: Position::Anchored {
                anchor: placement.anchor,
                padding: placement.padding,
            },
            kind: NodeKind::Label(LabelState {
                text: text.to_string(),
                align,
                policy,
                selected: false,
            }),
        })
    }

    /// Character image blitted verbatim; sized by the image.
    pub fn add_image(
        &mut self,
        owner: NodeId,
        image: ImageData,
        placement: Placement,
    ) -> Result<NodeId, UiError> {
        let size = Size::new(image.width() as i32, image.height() as i32);
        self.insert(NewNode {
            owner,
            size,
            min: LEAF_MIN,
            z: placement.z,
            position: Position::Anchored {
                anchor: placement.anchor,
                padding: placement.padding,
            },
            kind: NodeKind::Image(image),
        })
    }

    fn label_mut(&mut self, id: NodeId) -> Result<&mut LabelState, UiError> {
        match &mut self.get_mut(id)?.kind {
            NodeKind::Label(l) => Ok(l),
            other => Err(UiError::WrongNodeKind {
                expected: "label",
                found: other.name(),
            }),
        }
    }

    pub fn label_text(&self, id: NodeId) -> Option<&str> {
        match &self.nodes.get(id)?.kind {
            NodeKind::Label(l) => Some(l.text.as_str()),
            _ => None,
        }
    }

    /// Replace a label's text; fixed labels still have to fit.
    pub fn set_label_text(&mut self, id: NodeId, text: &str) -> Result<(), UiError> {
        let width = self.get(id)?.rect.width;
        let label = self.label_mut(id)?;
        check_fixed_text(text, width, label.policy)?;
        label.text.clear();
        label.text.push_str(text);
        Ok(())
    }

    /// Selected labels draw black on white.
    pub fn set_label_selected(&mut self, id: NodeId, on: bool) -> Result<(), UiError> {
        self.label_mut(id)?.set_selected(on);
        Ok(())
    }
}

fn check_fixed_text(text: &str, width: i32, policy: TextPolicy) -> Result<(), UiError> {
    let len = char_len(text);
    if policy == TextPolicy::Fixed && len as i32 > width {
        return Err(UiError::TextTooLong { len, width });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ErrorKind;

    fn ui_with_box() -> (Ui, NodeId) {
        let mut ui = Ui::new(40, 20);
        let root = ui.root();
        let b = ui
            .add_box(root, BorderStyle::SingleSharp, Size::new(20, 9), Placement::at(Anchor::Center))
            .unwrap();
        (ui, b)
    }

    #[test]
    fn fixed_label_rejects_long_text() {
        let (mut ui, b) = ui_with_box();
        let err = ui
            .add_label(b, "too long", 5, TextAlign::Left, TextPolicy::Fixed, Placement::at(Anchor::Center))
            .unwrap_err();
        assert_eq!(err, UiError::TextTooLong { len: 8, width: 5 });
        let ok = ui
            .add_label(b, "fits", 5, TextAlign::Left, TextPolicy::Fixed, Placement::at(Anchor::Center))
            .unwrap();
        assert!(ui.set_label_text(ok, "nope nope").is_err());
        assert_eq!(ui.label_text(ok), Some("fits"));
        ui.set_label_text(ok, "yes").unwrap();
        assert_eq!(ui.label_text(ok), Some("yes"));
    }

    #[test]
    fn leaves_may_not_cover_parent() {
        let (mut ui, b) = ui_with_box();
        let err = ui
            .add_label(b, "x", 20, TextAlign::Left, TextPolicy::Truncate, Placement::at(Anchor::TopLeft))
            .unwrap_err();
        assert!(matches!(err, UiError::CoversParent { .. }));
        let err = ui
            .add_button(b, BorderStyle::DoubleSharp, Size::new(6, 9), Placement::at(Anchor::TopLeft))
            .unwrap_err();
        assert!(matches!(err, UiError::CoversParent { .. }));
        // Plain boxes may fill their parent.
        assert!(
            ui.add_box(b, BorderStyle::SingleSharp, Size::new(20, 9), Placement::at(Anchor::TopLeft))
                .is_ok()
        );
    }

    #[test]
    fn labels_cannot_own_children() {
        let (mut ui, b) = ui_with_box();
        let l = ui
            .add_label(b, "x", 3, TextAlign::Left, TextPolicy::Truncate, Placement::at(Anchor::TopLeft))
            .unwrap();
        let err = ui
            .add_label(l, "y", 1, TextAlign::Left, TextPolicy::Truncate, Placement::at(Anchor::TopLeft))
            .unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Structural);
    }

    #[test]
    fn selection_box_has_three_labels() {
        let (mut ui, b) = ui_with_box();
        let s = ui
            .add_selection_box(b, "Windowed", BorderStyle::SingleSharp, Size::new(16, 3), Placement::at(Anchor::TopCenter))
            .unwrap();
        let texts: Vec<&str> = ui
            .children(s)
            .iter()
            .filter_map(|c| ui.label_text(*c))
            .collect();
        assert_eq!(texts, vec!["◂", "Windowed", "▸"]);
    }

    #[test]
    fn failed_selection_box_rolls_back() {
        let (mut ui, b) = ui_with_box();
        let before = ui.len();
        // Text as wide as the box cannot be placed inside it.
        let err = ui
            .add_selection_box(b, "abcdefghij", BorderStyle::SingleSharp, Size::new(10, 3), Placement::at(Anchor::TopCenter))
            .unwrap_err();
        assert!(matches!(err, UiError::CoversParent { .. }));
        assert_eq!(ui.len(), before);
        assert!(ui.children(b).is_empty());
    }
}
