use core_input::{InputSource, NavKey, ScriptedInput};
use pretty_assertions::assert_eq;

#[test]
fn scripted_input_replays_in_order_then_ends() {
    let mut input = ScriptedInput::new([NavKey::Right, NavKey::Down, NavKey::Cancel]);
    assert_eq!(input.remaining(), 3);
    let mut seen = Vec::new();
    while let Some(key) = input.next_key().unwrap() {
        seen.push(key);
    }
    assert_eq!(seen, vec![NavKey::Right, NavKey::Down, NavKey::Cancel]);
    assert_eq!(input.remaining(), 0);
}

#[test]
fn sources_are_object_safe() {
    let mut boxed: Box<dyn InputSource> = Box::new(ScriptedInput::new([NavKey::Up]));
    assert_eq!(boxed.next_key().unwrap(), Some(NavKey::Up));
}
