//! Gallows illustration, one body part per incorrect guess.

use web_sys::CanvasRenderingContext2d;

use crate::config::{CANVAS_HEIGHT, CANVAS_WIDTH, MAX_INCORRECT};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BodyPart {
    Head,
    Body,
    RightArm,
    LeftArm,
    RightLeg,
    LeftLeg,
}

/// Drawing order; part `n` appears after the `n+1`th incorrect guess.
pub const PARTS: [BodyPart; MAX_INCORRECT] = [
    BodyPart::Head,
    BodyPart::Body,
    BodyPart::RightArm,
    BodyPart::LeftArm,
    BodyPart::RightLeg,
    BodyPart::LeftLeg,
];

pub fn visible_parts(incorrect: usize) -> &'static [BodyPart] {
    &PARTS[..incorrect.min(PARTS.len())]
}

// Figure geometry, relative to the canvas.
const ROPE_X: f64 = 180.0;
const ROPE_BOTTOM: f64 = 60.0;
const HEAD_R: f64 = 25.0;
const NECK_Y: f64 = ROPE_BOTTOM + 2.0 * HEAD_R;
const HIP_Y: f64 = NECK_Y + 90.0;

pub fn draw(ctx: &CanvasRenderingContext2d, incorrect: usize) {
    let w = CANVAS_WIDTH as f64;
    let h = CANVAS_HEIGHT as f64;
    ctx.clear_rect(0.0, 0.0, w, h);
    ctx.set_stroke_style_str("#000");
    ctx.set_line_width(8.0);
    ctx.set_line_cap("round");

    // gallows
    line(ctx, 20.0, h - 10.0, 140.0, h - 10.0);
    line(ctx, 80.0, h - 10.0, 80.0, 20.0);
    line(ctx, 80.0, 20.0, ROPE_X, 20.0);
    line(ctx, ROPE_X, 20.0, ROPE_X, ROPE_BOTTOM);

    for part in visible_parts(incorrect) {
        match part {
            BodyPart::Head => {
                ctx.begin_path();
                ctx.arc(ROPE_X, ROPE_BOTTOM + HEAD_R, HEAD_R, 0.0, std::f64::consts::TAU).ok();
                ctx.stroke();
            }
            BodyPart::Body => line(ctx, ROPE_X, NECK_Y, ROPE_X, HIP_Y),
            BodyPart::RightArm => line(ctx, ROPE_X, NECK_Y + 30.0, ROPE_X + 40.0, NECK_Y + 5.0),
            BodyPart::LeftArm => line(ctx, ROPE_X, NECK_Y + 30.0, ROPE_X - 40.0, NECK_Y + 5.0),
            BodyPart::RightLeg => line(ctx, ROPE_X, HIP_Y, ROPE_X + 35.0, HIP_Y + 50.0),
            BodyPart::LeftLeg => line(ctx, ROPE_X, HIP_Y, ROPE_X - 35.0, HIP_Y + 50.0),
        }
    }
}

fn line(ctx: &CanvasRenderingContext2d, x1: f64, y1: f64, x2: f64, y2: f64) {
    ctx.begin_path();
    ctx.move_to(x1, y1);
    ctx.line_to(x2, y2);
    ctx.stroke();
}
