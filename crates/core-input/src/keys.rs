use crossterm::event::{KeyCode as CKeyCode, KeyEvent as CKeyEvent, KeyEventKind as CKeyEventKind};

/// Navigation and action symbols the UI reacts to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NavKey {
    Left,
    Right,
    Up,
    Down,
    /// Next item.
    Next,
    /// Previous item.
    Prev,
    /// Next settings section.
    SectionNext,
    /// Previous settings section.
    SectionPrev,
    Confirm,
    Cancel,
}

/// Map a crossterm key event to a navigation symbol.
///
/// Releases and keys without a binding map to `None`; repeats count as
/// presses.
pub(crate) fn map_key_event(event: &CKeyEvent) -> Option<NavKey> {
    if matches!(event.kind, CKeyEventKind::Release) {
        return None;
    }
    map_key_code(&event.code)
}

pub(crate) fn map_key_code(code: &CKeyCode) -> Option<NavKey> {
    let key = match code {
        CKeyCode::Left => NavKey::Left,
        CKeyCode::Right => NavKey::Right,
        CKeyCode::Up => NavKey::Up,
        CKeyCode::Down => NavKey::Down,
        CKeyCode::PageDown => NavKey::SectionNext,
        CKeyCode::PageUp => NavKey::SectionPrev,
        CKeyCode::Enter => NavKey::Confirm,
        CKeyCode::Esc => NavKey::Cancel,
        CKeyCode::Char(c) => match c {
            '+' | '=' => NavKey::Next,
            '-' | '_' => NavKey::Prev,
            '2' => NavKey::SectionNext,
            '8' => NavKey::SectionPrev,
            'z' | 'Z' => NavKey::Confirm,
            'q' | 'Q' => NavKey::Cancel,
            _ => return None,
        },
        _ => return None,
    };
    Some(key)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyEventState, KeyModifiers};

    fn event(code: CKeyCode, kind: CKeyEventKind) -> CKeyEvent {
        CKeyEvent {
            code,
            modifiers: KeyModifiers::NONE,
            kind,
            state: KeyEventState::NONE,
        }
    }

    #[test]
    fn arrows_and_aliases() {
        assert_eq!(map_key_code(&CKeyCode::Left), Some(NavKey::Left));
        assert_eq!(map_key_code(&CKeyCode::Down), Some(NavKey::Down));
        assert_eq!(map_key_code(&CKeyCode::Char('+')), Some(NavKey::Next));
        assert_eq!(map_key_code(&CKeyCode::Char('=')), Some(NavKey::Next));
        assert_eq!(map_key_code(&CKeyCode::Char('_')), Some(NavKey::Prev));
        assert_eq!(map_key_code(&CKeyCode::PageDown), Some(NavKey::SectionNext));
        assert_eq!(map_key_code(&CKeyCode::Char('8')), Some(NavKey::SectionPrev));
        assert_eq!(map_key_code(&CKeyCode::Char('z')), Some(NavKey::Confirm));
        assert_eq!(map_key_code(&CKeyCode::Esc), Some(NavKey::Cancel));
    }

    #[test]
    fn unbound_keys_are_ignored() {
        assert_eq!(map_key_code(&CKeyCode::Char('x')), None);
        assert_eq!(map_key_code(&CKeyCode::Tab), None);
        assert_eq!(map_key_code(&CKeyCode::F(1)), None);
    }

    #[test]
    fn releases_are_dropped_repeats_kept() {
        assert_eq!(map_key_event(&event(CKeyCode::Up, CKeyEventKind::Release)), None);
        assert_eq!(
            map_key_event(&event(CKeyCode::Up, CKeyEventKind::Repeat)),
            Some(NavKey::Up)
        );
        assert_eq!(
            map_key_event(&event(CKeyCode::Enter, CKeyEventKind::Press)),
            Some(NavKey::Confirm)
        );
    }
}
