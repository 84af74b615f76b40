//! Vector path primitives.
//!
//! A path is an ordered sequence of drawing commands. Arcs carry their
//! center, radius, and angular range explicitly, so vector output states the
//! exact geometry the mesh backend tessellated instead of approximating it.

use crate::point_at_angle;
use glam::Vec2;

/// A command in a path.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PathCommand {
    /// Move to a new position without drawing.
    MoveTo(Vec2),
    /// Draw a line to a position.
    LineTo(Vec2),
    /// Draw a circular arc around an explicit center.
    ///
    /// The arc sweeps from `start_angle` to `end_angle` (radians); a
    /// decreasing range sweeps in the opposite direction. A range spanning a
    /// full turn draws the whole circle.
    Arc {
        /// Center of the arc's circle.
        center: Vec2,
        /// Radius of the arc's circle.
        radius: f32,
        /// Angle where the arc begins.
        start_angle: f32,
        /// Angle where the arc ends.
        end_angle: f32,
    },
    /// Close the current sub-path by drawing a line to its start.
    Close,
}

impl PathCommand {
    /// The position this command ends at, if it has one.
    pub fn end_position(&self) -> Option<Vec2> {
        match self {
            PathCommand::MoveTo(to) | PathCommand::LineTo(to) => Some(*to),
            PathCommand::Arc {
                center,
                radius,
                end_angle,
                ..
            } => Some(point_at_angle(*center, *radius, *end_angle)),
            PathCommand::Close => None,
        }
    }
}

/// A 2D path consisting of drawing commands.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Path {
    commands: Vec<PathCommand>,
}

impl Path {
    /// Create a new empty path.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a path from a list of commands.
    pub fn from_commands(commands: Vec<PathCommand>) -> Self {
        Self { commands }
    }

    /// Get the commands in this path.
    pub fn commands(&self) -> &[PathCommand] {
        &self.commands
    }

    /// Check if the path is empty.
    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    /// Get the number of commands.
    pub fn len(&self) -> usize {
        self.commands.len()
    }

    /// Get the bounding box of the path.
    ///
    /// Arc bounds are conservative (the arc's full circle). Returns
    /// `(min, max)` corners.
    pub fn bounds(&self) -> Option<(Vec2, Vec2)> {
        if self.commands.is_empty() {
            return None;
        }

        let mut min = Vec2::splat(f32::INFINITY);
        let mut max = Vec2::splat(f32::NEG_INFINITY);

        for cmd in &self.commands {
            match cmd {
                PathCommand::MoveTo(to) | PathCommand::LineTo(to) => {
                    min = min.min(*to);
                    max = max.max(*to);
                }
                PathCommand::Arc { center, radius, .. } => {
                    let r = Vec2::splat(*radius);
                    min = min.min(*center - r);
                    max = max.max(*center + r);
                }
                PathCommand::Close => {}
            }
        }

        if min.x.is_finite() && min.y.is_finite() && max.x.is_finite() && max.y.is_finite() {
            Some((min, max))
        } else {
            None
        }
    }
}

/// Builder for constructing paths.
#[derive(Debug, Default)]
pub struct PathBuilder {
    commands: Vec<PathCommand>,
    current_pos: Vec2,
    subpath_start: Vec2,
}

impl PathBuilder {
    /// Create a new path builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Move to a new position without drawing.
    pub fn move_to(&mut self, to: Vec2) -> &mut Self {
        self.commands.push(PathCommand::MoveTo(to));
        self.current_pos = to;
        self.subpath_start = to;
        self
    }

    /// Draw a line to a position.
    pub fn line_to(&mut self, to: Vec2) -> &mut Self {
        self.commands.push(PathCommand::LineTo(to));
        self.current_pos = to;
        self
    }

    /// Draw a circular arc around an explicit center.
    pub fn arc(&mut self, center: Vec2, radius: f32, start_angle: f32, end_angle: f32) -> &mut Self {
        self.commands.push(PathCommand::Arc {
            center,
            radius,
            start_angle,
            end_angle,
        });
        self.current_pos = point_at_angle(center, radius, end_angle);
        self
    }

    /// Close the current sub-path.
    pub fn close(&mut self) -> &mut Self {
        self.commands.push(PathCommand::Close);
        self.current_pos = self.subpath_start;
        self
    }

    /// Get the current position.
    pub fn current_pos(&self) -> Vec2 {
        self.current_pos
    }

    /// Build the path.
    pub fn build(self) -> Path {
        Path {
            commands: self.commands,
        }
    }
}
