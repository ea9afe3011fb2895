//! Frame composition: background, HUD text, cars and banner
//!
//! Builds a backend-neutral list of draw commands from the session; the
//! renderer turns them into pixels.

use glam::{DVec2, IVec2};

use crate::platform::{ImageId, Renderer};
use crate::sim::{Car, GamePhase, Outcome, Session};

/// Nominal HUD font height (px)
const HUD_LINE_HEIGHT: i32 = 26;
const HUD_LEFT: i32 = 10;
/// Distance of each HUD line from the bottom edge, top line first
const HUD_BOTTOM_MARGINS: [i32; 3] = [90, 50, 10];

#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    Image { image: ImageId, pos: IVec2 },
    Rotated { image: ImageId, pos: DVec2, angle: f64 },
    Text { text: String, pos: IVec2 },
    Banner(String),
}

/// Everything drawn in one frame, in order
#[derive(Debug, Clone, Default)]
pub struct Frame {
    pub commands: Vec<DrawCommand>,
}

impl Frame {
    pub fn submit(&self, renderer: &mut impl Renderer) {
        for command in &self.commands {
            match command {
                DrawCommand::Image { image, pos } => renderer.draw_image(*image, *pos),
                DrawCommand::Rotated { image, pos, angle } => {
                    renderer.draw_rotated(*image, *pos, *angle)
                }
                DrawCommand::Text { text, pos } => renderer.draw_text(text, *pos),
                DrawCommand::Banner(text) => renderer.draw_text_centered(text),
            }
        }
        renderer.present();
    }
}

/// "Level", "Time" and "Velocity" lines
pub fn status_lines(session: &Session, now: f64) -> [String; 3] {
    [
        format!("Level {}", session.level.level),
        format!("Time: {} sec", session.elapsed(now)),
        format!("Velocity: {:.1} px/sec", session.player.vel()),
    ]
}

/// Centered message for the current phase
pub fn banner(session: &Session) -> Option<String> {
    match session.phase {
        GamePhase::AwaitingStart => Some(format!(
            "Press any key to start level {}!",
            session.level.level
        )),
        GamePhase::Celebrating { outcome, .. } => Some(
            match outcome {
                Outcome::ComputerWon => "The computer won!",
                Outcome::PlayerWon => "You won!",
                Outcome::GameWon => "YOU WON THE GAME!",
            }
            .to_string(),
        ),
        GamePhase::Running | GamePhase::Stopped => None,
    }
}

pub fn build_frame(session: &Session, now: f64) -> Frame {
    let track = session.track();
    let (height, finish_pos) = (track.size.y, track.finish.offset);

    let mut commands = vec![
        DrawCommand::Image {
            image: ImageId::Grass,
            pos: IVec2::ZERO,
        },
        DrawCommand::Image {
            image: ImageId::Track,
            pos: IVec2::ZERO,
        },
        DrawCommand::Image {
            image: ImageId::Finish,
            pos: finish_pos,
        },
        DrawCommand::Image {
            image: ImageId::TrackBorder,
            pos: IVec2::ZERO,
        },
    ];

    for (text, margin) in status_lines(session, now).into_iter().zip(HUD_BOTTOM_MARGINS) {
        commands.push(DrawCommand::Text {
            text,
            pos: IVec2::new(HUD_LEFT, height - HUD_LINE_HEIGHT - margin),
        });
    }

    commands.push(DrawCommand::Rotated {
        image: ImageId::RedCar,
        pos: session.player.pos(),
        angle: session.player.angle(),
    });
    commands.push(DrawCommand::Rotated {
        image: ImageId::GreenCar,
        pos: session.computer.pos(),
        angle: session.computer.angle(),
    });

    if let Some(text) = banner(session) {
        commands.push(DrawCommand::Banner(text));
    }

    Frame { commands }
}
