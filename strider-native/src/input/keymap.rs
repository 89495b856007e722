use winit::keyboard::KeyCode;

/// Key-code name of the physical keys the controller understands.
pub fn code_name(code: KeyCode) -> Option<&'static str>
{
  let name = match code
  {
    KeyCode::KeyW => "KeyW",
    KeyCode::KeyA => "KeyA",
    KeyCode::KeyS => "KeyS",
    KeyCode::KeyD => "KeyD",
    KeyCode::ArrowUp => "ArrowUp",
    KeyCode::ArrowDown => "ArrowDown",
    KeyCode::ArrowLeft => "ArrowLeft",
    KeyCode::ArrowRight => "ArrowRight",
    _ => return None,
  };

  Some(name)
}
