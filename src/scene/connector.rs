//! Pin-joint connectors between points and anchors

use clothnet_math::Vec2;
use clothnet_physics::{BodyKey, JointKey, PhysicsError, PhysicsWorld, RigidBody2D};
use clothnet_render::DrawList;

use super::coords::world_to_screen;
use super::style::DrawStyle;

/// A pin joint from a point's body to a linked body
///
/// The link is either another point or a static anchor owned by the
/// connector.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Connector {
    pub body: BodyKey,
    pub link: BodyKey,
    pub joint: JointKey,
    /// Whether `link` is a static anchor created for this connector
    pub anchored: bool,
}

impl Connector {
    /// Pin two existing bodies at their current distance
    pub fn between(
        world: &mut PhysicsWorld,
        body: BodyKey,
        link: BodyKey,
    ) -> Result<Self, PhysicsError> {
        let joint = world.add_pin_joint(body, link)?;
        Ok(Self {
            body,
            link,
            joint,
            anchored: false,
        })
    }

    /// Pin a body to a new static anchor at `anchor`
    pub fn to_anchor(
        world: &mut PhysicsWorld,
        body: BodyKey,
        anchor: Vec2,
    ) -> Result<Self, PhysicsError> {
        let link = world.add_body(RigidBody2D::new_static(anchor));
        match world.add_pin_joint(body, link) {
            Ok(joint) => Ok(Self {
                body,
                link,
                joint,
                anchored: true,
            }),
            Err(e) => {
                world.remove_body(link);
                Err(e)
            }
        }
    }

    /// Physics positions of both ends
    pub fn endpoints(&self, world: &PhysicsWorld) -> Option<(Vec2, Vec2)> {
        let body = world.get_body(self.body)?;
        let link = world.get_body(self.link)?;
        Some((body.position, link.position))
    }

    /// Remove the joint, and the anchor if this connector owns one
    pub fn despawn(&self, world: &mut PhysicsWorld) {
        world.remove_joint(self.joint);
        if self.anchored {
            world.remove_body(self.link);
        }
    }

    /// Draw a line to the link with a dot on the link end
    pub fn draw(&self, list: &mut DrawList, world: &PhysicsWorld, style: &DrawStyle) {
        if let Some((body, link)) = self.endpoints(world) {
            let from = world_to_screen(body, style.screen_height);
            let to = world_to_screen(link, style.screen_height);
            list.line(from, to, style.line_width, style.connector_color);
            list.circle(to, style.link_dot_radius, style.connector_color);
        }
    }
}
