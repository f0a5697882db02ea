//! Composing a sprite transform and uploading it to a stand-in shader program.
//!
//! Run with `RUST_LOG=trace cargo run --example compose` to see each upload.

use affinum::{
    set_uniform, AffineError, Mat3, UniformKind, UniformLocation, UniformPayload, UniformTarget,
    Vec2, Vec4,
};

/// Prints uploads instead of talking to a GPU.
struct StdoutProgram {
    uniforms: Vec<(&'static str, UniformKind)>,
}

impl UniformTarget<f32> for StdoutProgram {
    fn locate(&self, name: &str) -> Option<UniformLocation> {
        self.uniforms
            .iter()
            .position(|(n, _)| *n == name)
            .map(|i| UniformLocation(i as i32))
    }

    fn declared_kind(&self, location: UniformLocation) -> Option<UniformKind> {
        self.uniforms.get(location.0 as usize).map(|(_, kind)| *kind)
    }

    fn write(&mut self, location: UniformLocation, kind: UniformKind, payload: UniformPayload) {
        println!("  upload {kind} @ {}: {payload:?}", location.0);
    }
}

fn main() -> Result<(), AffineError> {
    env_logger::init();

    let scale = Mat3::scale(2.0, 4.0);
    let shear = Mat3::shear(3.0, 0.0);
    let rotation = Mat3::rotate(90.0);
    let translation = Mat3::translate(2.0, 3.0);

    let model: Mat3 = translation * rotation * shear * scale;
    println!("translate * rotate * shear * scale:\n{model:.1}\n");

    let p = model.transform_point(Vec2::new(1.0, 1.0));
    println!("(1, 1) -> ({:.1}, {:.1})\n", p.x, p.y);

    let camera = Mat3::translate(400.0, 225.0);
    let projection = Mat3::orthographic(0.0, 800.0, 0.0, 450.0);
    let mvp = projection * camera * model;
    println!("projection * camera * model:\n{mvp:.3}\n");

    let mut program = StdoutProgram {
        uniforms: vec![("u_mvp", UniformKind::Mat3), ("u_tint", UniformKind::Vec4)],
    };
    set_uniform(&mut program, "u_mvp", mvp)?;
    set_uniform(&mut program, "u_tint", Vec4::rgba(1.0, 0.5, 0.0, 1.0))?;

    if let Err(err) = set_uniform(&mut program, "u_tint", mvp) {
        println!("  rejected: {err}");
    }

    Ok(())
}
