use argh::FromArgs;
use homog::{compose, transforms, Mat4};

/// Projects a point through a model-view-projection matrix
#[derive(Debug, FromArgs)]
struct Args {
    /// vertical field of view in degrees
    #[argh(option, default = "45.0")]
    fov: f64,

    /// viewport aspect ratio (width / height)
    #[argh(option, default = "4.0 / 3.0")]
    aspect: f64,

    /// near clipping plane distance
    #[argh(option, default = "0.1")]
    near: f64,

    /// far clipping plane distance
    #[argh(option, default = "100.0")]
    far: f64,

    /// distance from the eye to the model origin
    #[argh(option, short = 'd', default = "5.0")]
    distance: f64,

    /// model rotation about the y axis in degrees
    #[argh(option, default = "30.0")]
    yaw: f64,

    /// point x coordinate in model space
    #[argh(option, default = "0.0")]
    x: f64,

    /// point y coordinate in model space
    #[argh(option, default = "0.0")]
    y: f64,

    /// point z coordinate in model space
    #[argh(option, default = "0.0")]
    z: f64,
}

fn print_matrix(name: &str, m: &Mat4) {
    println!("{name}:");
    for row in m.0.iter() {
        println!(
            "  [{:>10.5} {:>10.5} {:>10.5} {:>10.5}]",
            row[0], row[1], row[2], row[3]
        );
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let args: Args = argh::from_env();
    log::debug!("{args:?}");

    let projection = transforms::frustum(args.fov, args.aspect, args.near, args.far);
    let view = transforms::translate(0.0, 0.0, -args.distance);
    let model = transforms::rotate_y(args.yaw);

    let mvp = compose(&[projection, view, model])?;
    if !mvp.is_finite() {
        return Err("model-view-projection matrix has non-finite entries".into());
    }

    print_matrix("mvp", &mvp);

    let ndc = mvp.apply3([args.x, args.y, args.z]);
    println!("ndc: [{:.6}, {:.6}, {:.6}]", ndc[0], ndc[1], ndc[2]);

    // the point in model space again, through the inverse
    let inverse = mvp.try_inverse(1e-12)?;
    let back = inverse.apply3(ndc);
    log::info!("unprojected: [{:.6}, {:.6}, {:.6}]", back[0], back[1], back[2]);

    println!("uniform (column-major): {:?}", mvp.to_cols_array_f32());

    Ok(())
}
