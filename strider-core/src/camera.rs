use glam::{EulerRot, Quat, Vec3};

//
// ──────────────────────────────────────────────────────────────
//   Rotation order (intrinsic Tait-Bryan, scene-graph style)
//
//   The token names the axes in the order they are applied to
//   the object, each about the axis left by the previous one.
//   "YXZ" = yaw about world up, then pitch about local right,
//   then roll about local forward.
// ──────────────────────────────────────────────────────────────
//

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum RotationOrder
{
  #[default]
  Xyz,
  Xzy,
  Yxz,
  Yzx,
  Zxy,
  Zyx,
}

impl RotationOrder
{
  pub fn token(self) -> &'static str
  {
    match self
    {
      RotationOrder::Xyz => "XYZ",
      RotationOrder::Xzy => "XZY",
      RotationOrder::Yxz => "YXZ",
      RotationOrder::Yzx => "YZX",
      RotationOrder::Zxy => "ZXY",
      RotationOrder::Zyx => "ZYX",
    }
  }

  fn euler_rot(self) -> EulerRot
  {
    match self
    {
      RotationOrder::Xyz => EulerRot::XYZ,
      RotationOrder::Xzy => EulerRot::XZY,
      RotationOrder::Yxz => EulerRot::YXZ,
      RotationOrder::Yzx => EulerRot::YZX,
      RotationOrder::Zxy => EulerRot::ZXY,
      RotationOrder::Zyx => EulerRot::ZYX,
    }
  }
}

//
// ──────────────────────────────────────────────────────────────
//   Camera pose (right-handed, Y-up, camera looks down -Z)
//
//   Coordinate system:
//     X → right
//     Y → up
//     Z → towards the viewer
// ──────────────────────────────────────────────────────────────
//

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CameraPose
{
  pub position: Vec3,

  /// Per-axis angles in radians: x = pitch, y = yaw, z = roll.
  pub rotation: Vec3,
  pub order: RotationOrder,
}

impl Default for CameraPose
{
  fn default() -> Self
  {
    Self::at(Vec3::ZERO)
  }
}

impl CameraPose
{
  pub fn at(position: Vec3) -> Self
  {
    Self { position, rotation: Vec3::ZERO, order: RotationOrder::default() }
  }

  pub fn set_rotation(&mut self, x: f32, y: f32, z: f32, order: RotationOrder)
  {
    self.rotation = Vec3::new(x, y, z);
    self.order = order;
  }

  pub fn orientation(&self) -> Quat
  {
    let Vec3 { x, y, z } = self.rotation;

    // glam takes the angles in the same order as the axes it rotates about
    let (a, b, c) = match self.order
    {
      RotationOrder::Xyz => (x, y, z),
      RotationOrder::Xzy => (x, z, y),
      RotationOrder::Yxz => (y, x, z),
      RotationOrder::Yzx => (y, z, x),
      RotationOrder::Zxy => (z, x, y),
      RotationOrder::Zyx => (z, y, x),
    };

    Quat::from_euler(self.order.euler_rot(), a, b, c)
  }

  /// Unit vector the camera is facing, in world space.
  pub fn world_direction(&self) -> Vec3
  {
    self.orientation() * Vec3::NEG_Z
  }
}
